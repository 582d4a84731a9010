//! Core traits for priceable instruments.
//!
//! This module defines:
//! - Price calculation (`Priceable` trait)
//!
//! ## Important
//! Prefer enum-based static dispatch over `Box<dyn Priceable>`.

pub mod priceable;

pub use priceable::Priceable;
