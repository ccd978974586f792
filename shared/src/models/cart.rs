//! Cart Model

use super::laptop::Laptop;
use serde::{Deserialize, Serialize};

/// Persisted cart line: a laptop reference plus quantity
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartItem {
    pub laptop_id: String,
    pub quantity: i32,
}

/// Cart line joined with its catalog record, for display
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct CartLine {
    pub laptop: Laptop,
    pub quantity: i32,
}

impl CartLine {
    /// Line total in som
    pub fn line_total(&self) -> i64 {
        self.laptop.price * i64::from(self.quantity)
    }
}

/// Derived cart totals
#[derive(Debug, Clone, Copy, Default, Serialize, Deserialize, PartialEq, Eq)]
pub struct CartSummary {
    /// Sum of line quantities
    pub total_items: i32,
    /// Sum of line totals in som
    pub total_price: i64,
}

impl CartSummary {
    /// Compute totals from a set of lines
    pub fn from_lines(lines: &[CartLine]) -> Self {
        Self {
            total_items: lines.iter().map(|l| l.quantity).sum(),
            total_price: lines.iter().map(|l| l.line_total()).sum(),
        }
    }
}
