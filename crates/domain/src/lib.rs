//! # shelf-domain
//!
//! Pure domain model for the shelf item store.
//!
//! ## Responsibilities
//! - Foundational types: the caller-supplied [`ItemId`](id::ItemId) and the
//!   error conventions shared by every layer
//! - Define **Items** (name, price, optional brand) and their invariants
//! - Define **Item patches** (partial updates, one optional field per attribute)
//!
//! ## Dependency rule
//! This crate has **no internal dependencies**.
//! It must never import anything from `app`, adapters, or external IO crates.
//! All IO boundaries are expressed as traits in the `app` crate (ports).

pub mod error;
pub mod id;
pub mod item;
