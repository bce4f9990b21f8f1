//! Static informational pages.

use axum::Json;
use serde::Serialize;

/// `{"Data": …}` body served by the informational pages.
#[derive(Serialize)]
pub struct PageBody {
    #[serde(rename = "Data")]
    pub data: &'static str,
}

/// `GET /`
pub async fn home() -> Json<PageBody> {
    Json(PageBody {
        data: "Test FastAPI",
    })
}

/// `GET /about`
pub async fn about() -> Json<PageBody> {
    Json(PageBody { data: "About page" })
}
