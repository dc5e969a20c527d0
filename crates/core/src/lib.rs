//! `uaprobe-core` — domain foundation building blocks.
//!
//! This crate contains **pure domain** primitives shared by the model crates
//! (no infrastructure concerns).

pub mod error;
pub mod value_object;

pub use error::{DomainError, DomainResult};
pub use value_object::ValueObject;
