//! Structural diff engine for JSON documents.
//!
//! Compares two `serde_json::Value` trees and reports fields present on only
//! one side, nested value changes, and array changes. Arrays are compared
//! independently of element order by sorting both sides on the canonical
//! text of their elements.
//!
//! # Key Types
//!
//! - [`Differ`] / [`DiffOptions`] -- The comparison entry point and its depth guard
//! - [`DiffReport`] / [`Difference`] / [`DifferenceKind`] -- Ordered difference records
//! - [`canonicalize_array`] -- Order-insensitive array normalization

pub mod canonical;
pub mod difference;
pub mod differ;
pub mod document;
pub mod error;

pub use canonical::{canonical_key, canonicalize_array};
pub use difference::{DiffReport, Difference, DifferenceKind};
pub use differ::{diff_documents, DiffOptions, Differ, DEFAULT_MAX_DEPTH};
pub use document::{load_document, parse_document};
pub use error::{DiffError, DiffResult};
