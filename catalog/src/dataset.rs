//! Builtin laptop dataset
//!
//! The storefront ships a fixed catalog embedded at compile time. The
//! engine trusts the dataset; there is no validation beyond
//! deserialization.

use shared::{AppError, AppResult, Laptop};

const LAPTOPS_JSON: &str = include_str!("../data/laptops.json");

/// Parse the embedded dataset
pub fn builtin_laptops() -> AppResult<Vec<Laptop>> {
    serde_json::from_str(LAPTOPS_JSON)
        .map_err(|e| AppError::internal(format!("builtin dataset is malformed: {e}")))
}
