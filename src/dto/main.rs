//! DTOs and display catalogs backing the server-rendered pages.

use serde::Serialize;

use crate::domain::stay::Stay;
use crate::dto::api::StaysQuery;
use crate::pagination::Paginated;

/// Data required to render the home page.
#[derive(Debug)]
pub struct IndexPageData {
    /// Stays highlighted in the hero grid.
    pub featured_stays: Vec<Stay>,
}

/// Data required to render the explore page.
#[derive(Debug)]
pub struct StaysPageData {
    /// Paginated list of matching stays.
    pub stays: Paginated<Stay>,
    /// Sanitized filters echoed back into the search form.
    pub filters: StaysQuery,
    /// The same filters as a query-string fragment, carried into page links.
    pub filter_query: String,
}

/// A selectable amenity shown in the filter form.
#[derive(Debug, Clone, Serialize)]
pub struct AmenityOption {
    pub id: &'static str,
    pub label: &'static str,
}

/// A selectable property type shown in the filter form.
#[derive(Debug, Clone, Serialize)]
pub struct PropertyTypeOption {
    pub id: &'static str,
    pub label: &'static str,
}

/// A destination highlighted on the home page.
#[derive(Debug, Clone, Serialize)]
pub struct PopularLocation {
    pub city: &'static str,
    pub country: &'static str,
    pub image: &'static str,
}

/// Amenities offered as filter checkboxes.
pub fn amenity_options() -> Vec<AmenityOption> {
    [
        ("wifi", "WiFi"),
        ("parking", "Free Parking"),
        ("pool", "Pool"),
        ("gym", "Gym"),
        ("ac", "Air Conditioning"),
        ("heating", "Heating"),
        ("kitchen", "Kitchen"),
        ("washer", "Washer"),
        ("dryer", "Dryer"),
        ("tv", "TV"),
        ("workspace", "Dedicated Workspace"),
        ("pets", "Pets Allowed"),
        ("breakfast", "Breakfast"),
        ("hottub", "Hot Tub"),
        ("fireplace", "Fireplace"),
        ("beachfront", "Beachfront"),
        ("mountainview", "Mountain View"),
    ]
    .into_iter()
    .map(|(id, label)| AmenityOption { id, label })
    .collect()
}

/// Property types offered in the filter select.
pub fn property_type_options() -> Vec<PropertyTypeOption> {
    [
        ("apartment", "Apartment"),
        ("house", "House"),
        ("villa", "Villa"),
        ("cabin", "Cabin"),
        ("cottage", "Cottage"),
        ("loft", "Loft"),
        ("studio", "Studio"),
        ("penthouse", "Penthouse"),
    ]
    .into_iter()
    .map(|(id, label)| PropertyTypeOption { id, label })
    .collect()
}

/// Destinations highlighted on the home page.
pub fn popular_locations() -> Vec<PopularLocation> {
    [
        ("New York", "USA", "/assets/locations/new-york.jpg"),
        ("Paris", "France", "/assets/locations/paris.jpg"),
        ("Tokyo", "Japan", "/assets/locations/tokyo.jpg"),
        ("London", "UK", "/assets/locations/london.jpg"),
        ("Dubai", "UAE", "/assets/locations/dubai.jpg"),
        ("Barcelona", "Spain", "/assets/locations/barcelona.jpg"),
    ]
    .into_iter()
    .map(|(city, country, image)| PopularLocation {
        city,
        country,
        image,
    })
    .collect()
}
