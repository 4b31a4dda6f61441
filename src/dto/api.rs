//! DTOs exposed by the stay API endpoints.

use serde::Serialize;

use crate::domain::stay::Stay;

/// Sanitized query parameters accepted by the `/api/v1/stays` service.
///
/// Numeric fields are `None` when the caller omitted them or sent something
/// unparseable; the service applies defaults and clamping.
#[derive(Debug, Default, Clone, Serialize, PartialEq)]
pub struct StaysQuery {
    // Unset filters are skipped during serialization so templates can rely on
    // the `default` filter.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub location: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub min_price: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_price: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub guests: Option<u32>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub property_type: Option<String>,
    pub amenities: Vec<String>,
    pub featured: bool,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page: Option<usize>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub page_size: Option<usize>,
}

impl StaysQuery {
    /// Serializes the active filters back into a query-string fragment using
    /// the public parameter names, so page links keep the current search.
    /// `page` is left out; callers append their own.
    pub fn to_query_string(&self) -> String {
        let mut pairs: Vec<(&str, String)> = Vec::new();

        if let Some(location) = &self.location {
            pairs.push(("location", location.clone()));
        }
        if let Some(min) = self.min_price {
            pairs.push(("minPrice", min.to_string()));
        }
        if let Some(max) = self.max_price {
            pairs.push(("maxPrice", max.to_string()));
        }
        if let Some(guests) = self.guests {
            pairs.push(("guests", guests.to_string()));
        }
        if let Some(kind) = &self.property_type {
            pairs.push(("propertyType", kind.clone()));
        }
        for tag in &self.amenities {
            pairs.push(("amenities", tag.clone()));
        }
        if self.featured {
            pairs.push(("featured", "true".to_string()));
        }
        if let Some(size) = self.page_size {
            pairs.push(("pageSize", size.to_string()));
        }

        serde_html_form::to_string(&pairs).unwrap_or_default()
    }
}

/// Paginated envelope returned by [`crate::services::api::search_stays`].
#[derive(Debug, Clone, Serialize, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct StaysResponse {
    /// Page of stays requested by the caller, in catalog order.
    pub stays: Vec<Stay>,
    /// Total number of stays matching the filters.
    pub total: usize,
    pub page: usize,
    pub page_size: usize,
    pub total_pages: usize,
}
