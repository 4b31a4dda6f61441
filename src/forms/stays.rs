use std::str::FromStr;

use serde::Deserialize;

use crate::dto::api::StaysQuery;

/// Raw query parameters of `/stays` and `/api/v1/stays`.
///
/// Everything deserializes as text so a malformed value can be recovered as
/// "absent" instead of failing the whole request. Repeated `amenities`
/// parameters accumulate into the vector (hence `serde_html_form` rather than
/// the urlencoded extractor).
#[derive(Debug, Default, Deserialize)]
pub struct StaysQueryParams {
    pub location: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<String>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<String>,
    pub guests: Option<String>,
    #[serde(rename = "propertyType")]
    pub property_type: Option<String>,
    #[serde(default)]
    pub amenities: Vec<String>,
    pub featured: Option<String>,
    pub page: Option<String>,
    #[serde(rename = "pageSize")]
    pub page_size: Option<String>,
}

/// Parses a numeric parameter, treating garbage (including negative numbers,
/// which fail unsigned parsing) as absent.
fn parse_number<T: FromStr>(value: Option<String>) -> Option<T> {
    value.and_then(|v| v.trim().parse().ok())
}

fn non_empty(value: Option<String>) -> Option<String> {
    value
        .map(|v| v.trim().to_string())
        .filter(|v| !v.is_empty())
}

impl From<StaysQueryParams> for StaysQuery {
    fn from(form: StaysQueryParams) -> Self {
        Self {
            location: non_empty(form.location),
            min_price: parse_number(form.min_price),
            max_price: parse_number(form.max_price),
            guests: parse_number(form.guests),
            property_type: non_empty(form.property_type),
            amenities: form
                .amenities
                .into_iter()
                .map(|tag| tag.trim().to_lowercase())
                .filter(|tag| !tag.is_empty())
                .collect(),
            featured: form.featured.as_deref().map(str::trim) == Some("true"),
            page: parse_number(form.page),
            page_size: parse_number(form.page_size),
        }
    }
}

impl StaysQueryParams {
    /// Deserializes a raw query string, falling back to no filters when the
    /// string cannot be parsed at all.
    pub fn from_query_string(query: &str) -> Self {
        serde_html_form::from_str(query).unwrap_or_else(|err| {
            log::warn!("Ignoring malformed stays query string: {err}");
            Self::default()
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn repeated_amenities_accumulate() {
        let params =
            StaysQueryParams::from_query_string("amenities=WiFi&amenities=Pool&amenities=");
        let query = StaysQuery::from(params);
        assert_eq!(query.amenities, vec!["wifi", "pool"]);
    }

    #[test]
    fn malformed_numbers_are_treated_as_absent() {
        let params =
            StaysQueryParams::from_query_string("minPrice=abc&maxPrice=-50&guests=2.5&page=x");
        let query = StaysQuery::from(params);
        assert_eq!(query.min_price, None);
        assert_eq!(query.max_price, None);
        assert_eq!(query.guests, None);
        assert_eq!(query.page, None);
    }

    #[test]
    fn featured_requires_the_literal_true() {
        let on = StaysQuery::from(StaysQueryParams::from_query_string("featured=true"));
        assert!(on.featured);
        let off = StaysQuery::from(StaysQueryParams::from_query_string("featured=yes"));
        assert!(!off.featured);
        let absent = StaysQuery::from(StaysQueryParams::from_query_string(""));
        assert!(!absent.featured);
    }

    #[test]
    fn blank_text_filters_are_dropped() {
        let params = StaysQueryParams::from_query_string("location=+&propertyType=");
        let query = StaysQuery::from(params);
        assert_eq!(query.location, None);
        assert_eq!(query.property_type, None);
    }

    #[test]
    fn well_formed_parameters_pass_through() {
        let params = StaysQueryParams::from_query_string(
            "location=Paris&minPrice=50&maxPrice=300&guests=4&propertyType=villa&page=2&pageSize=6",
        );
        let query = StaysQuery::from(params);
        assert_eq!(query.location.as_deref(), Some("Paris"));
        assert_eq!(query.min_price, Some(50));
        assert_eq!(query.max_price, Some(300));
        assert_eq!(query.guests, Some(4));
        assert_eq!(query.property_type.as_deref(), Some("villa"));
        assert_eq!(query.page, Some(2));
        assert_eq!(query.page_size, Some(6));
    }
}
