//! Shared fixtures for integration tests.
#![allow(dead_code)] // each test binary uses a different subset

use chrono::NaiveDate;

use staydiscovery::domain::stay::{Coordinates, DateRange, Host, Location, Stay};
use staydiscovery::domain::types::{AmenityTag, StayId};

pub fn date(year: i32, month: u32, day: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(year, month, day).expect("valid date")
}

#[allow(clippy::too_many_arguments)]
pub fn stay(
    id: &str,
    city: &str,
    country: &str,
    price_per_night: u32,
    max_guests: u32,
    property_type: &str,
    amenities: &[&str],
    featured: bool,
) -> Stay {
    Stay {
        id: StayId::new(id).expect("valid stay id"),
        name: format!("Stay {id}"),
        description: "A lovely place to stay.".to_string(),
        location: Location {
            city: city.to_string(),
            country: country.to_string(),
            address: "1 Main St".to_string(),
            coordinates: Coordinates { lat: 0.0, lng: 0.0 },
        },
        images: vec![format!("/assets/stays/{id}-1.jpg")],
        price_per_night,
        rating: 4.5,
        review_count: 10,
        amenities: amenities
            .iter()
            .map(|tag| AmenityTag::new(*tag).expect("valid amenity tag"))
            .collect(),
        host: Host {
            name: "Ada Host".to_string(),
            avatar: "/assets/hosts/ada.jpg".to_string(),
            joined_date: date(2019, 1, 15),
            response_rate: 95,
            is_superhost: false,
        },
        max_guests,
        bedrooms: 2,
        beds: 2,
        bathrooms: 1,
        availability: vec![DateRange {
            start: date(2026, 9, 1),
            end: date(2026, 10, 15),
        }],
        property_type: property_type.to_string(),
        featured,
    }
}

/// Fourteen stays, three of them featured.
pub fn sample_stays() -> Vec<Stay> {
    vec![
        stay("nyc-loft", "New York", "USA", 320, 4, "loft", &["wifi", "ac", "workspace"], true),
        stay("paris-flat", "Paris", "France", 145, 2, "apartment", &["wifi", "heating"], false),
        stay("tokyo-studio", "Tokyo", "Japan", 88, 2, "studio", &["wifi", "ac"], false),
        stay("london-mews", "London", "UK", 275, 5, "house", &["wifi", "fireplace"], true),
        stay("dubai-penthouse", "Dubai", "UAE", 640, 6, "penthouse", &["wifi", "pool", "gym"], true),
        stay("barcelona-apartment", "Barcelona", "Spain", 120, 3, "apartment", &["wifi", "ac"], false),
        stay("aspen-cabin", "Aspen", "USA", 410, 8, "cabin", &["wifi", "hottub", "mountainview"], false),
        stay("oia-villa", "Oia", "Greece", 520, 4, "villa", &["wifi", "pool", "breakfast"], false),
        stay("kyoto-house", "Kyoto", "Japan", 230, 4, "house", &["wifi", "heating"], false),
        stay("lisbon-cottage", "Lisbon", "Portugal", 95, 2, "cottage", &["wifi", "pets"], false),
        stay("brooklyn-apartment", "New York", "USA", 210, 4, "apartment", &["wifi", "washer", "pets"], false),
        stay("ubud-villa", "Ubud", "Indonesia", 180, 4, "villa", &["wifi", "pool", "workspace"], false),
        stay("reykjavik-loft", "Reykjavik", "Iceland", 165, 3, "loft", &["wifi", "heating"], false),
        stay("cape-town-house", "Cape Town", "South Africa", 385, 7, "house", &["wifi", "pool", "beachfront"], false),
    ]
}
