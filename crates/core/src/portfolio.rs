//! Portfolio item schema and the fixed category set.

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

// ---------------------------------------------------------------------------
// Categories
// ---------------------------------------------------------------------------

/// The six categories a portfolio image can be filed under.
///
/// Serialized as the human-readable label shown on the website, which is
/// also the value stored in the document and matched by the list filter.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum PortfolioCategory {
    #[serde(rename = "Interiors")]
    Interiors,
    #[serde(rename = "Exteriors")]
    Exteriors,
    #[serde(rename = "Drone / Aerial")]
    DroneAerial,
    #[serde(rename = "Architectural Details")]
    ArchitecturalDetails,
    #[serde(rename = "Commercial Spaces")]
    CommercialSpaces,
    #[serde(rename = "Short-Let & Airbnb")]
    ShortLetAirbnb,
}

impl PortfolioCategory {
    /// Every category, in display order.
    pub const ALL: [PortfolioCategory; 6] = [
        Self::Interiors,
        Self::Exteriors,
        Self::DroneAerial,
        Self::ArchitecturalDetails,
        Self::CommercialSpaces,
        Self::ShortLetAirbnb,
    ];

    /// Display label, identical to the serialized form.
    pub fn label(self) -> &'static str {
        match self {
            Self::Interiors => "Interiors",
            Self::Exteriors => "Exteriors",
            Self::DroneAerial => "Drone / Aerial",
            Self::ArchitecturalDetails => "Architectural Details",
            Self::CommercialSpaces => "Commercial Spaces",
            Self::ShortLetAirbnb => "Short-Let & Airbnb",
        }
    }

    /// Labels of all categories, in display order.
    pub fn labels() -> Vec<&'static str> {
        Self::ALL.iter().map(|c| c.label()).collect()
    }
}

// ---------------------------------------------------------------------------
// PortfolioItem
// ---------------------------------------------------------------------------

/// A single portfolio image as submitted by the admin tooling.
///
/// The category is enforced by deserialization; the remaining constraints
/// are checked by [`Validate`].
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct PortfolioItem {
    /// Optional title for the work.
    #[serde(default)]
    pub title: Option<String>,
    pub category: PortfolioCategory,
    /// Public image URL. Must be an absolute `http` or `https` URL.
    #[validate(url(message = "must be a valid URL"), custom(function = "http_scheme"))]
    pub src: String,
    /// Short caption or notes.
    #[serde(default)]
    pub caption: Option<String>,
    #[serde(default)]
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub width: Option<i64>,
    #[serde(default)]
    #[validate(range(min = 1, message = "must be at least 1"))]
    pub height: Option<i64>,
}

fn http_scheme(src: &str) -> Result<(), ValidationError> {
    let lower = src.to_ascii_lowercase();
    if lower.starts_with("http://") || lower.starts_with("https://") {
        Ok(())
    } else {
        Err(ValidationError::new("http_scheme")
            .with_message("URL scheme should be 'http' or 'https'".into()))
    }
}

// ---------------------------------------------------------------------------
// PortfolioBatch
// ---------------------------------------------------------------------------

/// A bulk upload: a bare JSON array of items, each validated in turn.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
#[serde(transparent)]
pub struct PortfolioBatch {
    #[validate(nested)]
    pub items: Vec<PortfolioItem>,
}
