//! Laptop Model

use serde::{Deserialize, Serialize};
use std::fmt;

/// Laptop entity
///
/// One record of the static catalog dataset. Loaded once at startup and
/// never mutated; `id` is unique across the dataset.
#[derive(Debug, Clone, Serialize, Deserialize, PartialEq)]
pub struct Laptop {
    pub id: String,
    pub brand: String,
    pub model: String,
    /// Price in som
    pub price: i64,
    /// Pre-discount price in som, present only while the item is
    /// discounted (strictly greater than `price` when present)
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub old_price: Option<i64>,
    /// Primary image reference
    pub image: String,
    /// Gallery image references, in display order
    pub images: Vec<String>,
    pub processor: String,
    /// RAM in gigabytes
    pub ram: u32,
    pub storage: String,
    pub display: String,
    pub graphics: String,
    pub os: String,
    pub weight: String,
    pub color: String,
    /// Purpose tags (non-empty)
    pub purpose: Vec<Purpose>,
    pub description: String,
    pub is_new: bool,
    pub is_popular: bool,
}

impl Laptop {
    /// Whether the item currently carries a discount
    pub fn is_discounted(&self) -> bool {
        matches!(self.old_price, Some(old) if old > self.price)
    }
}

/// Purpose tag vocabulary
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq, Hash)]
#[serde(rename_all = "lowercase")]
pub enum Purpose {
    Gaming,
    Business,
    Student,
    Multimedia,
    Ultrabook,
}

impl Purpose {
    /// The full vocabulary, in display order
    pub const ALL: [Purpose; 5] = [
        Purpose::Gaming,
        Purpose::Business,
        Purpose::Student,
        Purpose::Multimedia,
        Purpose::Ultrabook,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Gaming => "gaming",
            Self::Business => "business",
            Self::Student => "student",
            Self::Multimedia => "multimedia",
            Self::Ultrabook => "ultrabook",
        }
    }
}

impl fmt::Display for Purpose {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn laptop(price: i64, old_price: Option<i64>) -> Laptop {
        Laptop {
            id: "test".to_string(),
            brand: "ASUS".to_string(),
            model: "Vivobook 15".to_string(),
            price,
            old_price,
            image: "/images/test.webp".to_string(),
            images: vec!["/images/test.webp".to_string()],
            processor: "Intel Core i5-12450H".to_string(),
            ram: 16,
            storage: "512 GB SSD".to_string(),
            display: "15.6\" FHD".to_string(),
            graphics: "Intel UHD Graphics".to_string(),
            os: "Windows 11 Home".to_string(),
            weight: "1.7 kg".to_string(),
            color: "Silver".to_string(),
            purpose: vec![Purpose::Student],
            description: "Everyday laptop".to_string(),
            is_new: false,
            is_popular: false,
        }
    }

    #[test]
    fn test_is_discounted() {
        assert!(laptop(50000, Some(60000)).is_discounted());
        assert!(!laptop(50000, None).is_discounted());
    }

    #[test]
    fn test_purpose_serde_lowercase() {
        assert_eq!(serde_json::to_string(&Purpose::Gaming).unwrap(), "\"gaming\"");
        let p: Purpose = serde_json::from_str("\"ultrabook\"").unwrap();
        assert_eq!(p, Purpose::Ultrabook);
    }
}
