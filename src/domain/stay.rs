use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::types::{AmenityTag, StayId};

/// Geographic point of a stay.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Coordinates {
    pub lat: f64,
    pub lng: f64,
}

/// Where a stay is located.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct Location {
    pub city: String,
    pub country: String,
    pub address: String,
    pub coordinates: Coordinates,
}

/// The person renting out a stay.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Host {
    pub name: String,
    pub avatar: String,
    pub joined_date: NaiveDate,
    /// Percentage of inquiries answered, in `[0, 100]`.
    pub response_rate: u8,
    pub is_superhost: bool,
}

/// Inclusive date range during which a stay can be booked.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
pub struct DateRange {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

/// A single bookable property record.
///
/// Records are loaded once from the static dataset and never mutated; wire
/// names are camelCase to match the published JSON document.
#[derive(Clone, Debug, Serialize, Deserialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Stay {
    pub id: StayId,
    pub name: String,
    pub description: String,
    pub location: Location,
    pub images: Vec<String>,
    pub price_per_night: u32,
    pub rating: f32,
    pub review_count: u32,
    /// Lower-cased amenity tags, e.g. `wifi`, `pool`.
    pub amenities: Vec<AmenityTag>,
    pub host: Host,
    pub max_guests: u32,
    pub bedrooms: u32,
    pub beds: u32,
    pub bathrooms: u32,
    pub availability: Vec<DateRange>,
    pub property_type: String,
    #[serde(default)]
    pub featured: bool,
}

impl Stay {
    /// Whether the stay offers the given (already normalized) amenity.
    pub fn has_amenity(&self, tag: &AmenityTag) -> bool {
        self.amenities.contains(tag)
    }
}
