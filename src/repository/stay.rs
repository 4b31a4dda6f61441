//! In-memory implementation of the stay catalog.
//!
//! The whole dataset is deserialized once at startup and shared read-only
//! between workers, so queries never need locking.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::sync::Arc;

use serde::Deserialize;

use crate::domain::stay::Stay;
use crate::domain::types::StayId;
use crate::repository::errors::{RepositoryError, RepositoryResult};
use crate::repository::{StayReader, StaySearchQuery};

/// Top-level shape of `data/stays.json`.
#[derive(Deserialize)]
struct StaysDocument {
    stays: Vec<Stay>,
}

/// Immutable snapshot of the stay catalog.
#[derive(Clone, Debug)]
pub struct InMemoryStayRepository {
    stays: Arc<Vec<Stay>>,
}

impl InMemoryStayRepository {
    /// Wraps an already-built collection. Fails when two records share an id.
    pub fn new(stays: Vec<Stay>) -> RepositoryResult<Self> {
        let mut seen = HashSet::new();
        for stay in &stays {
            if !seen.insert(&stay.id) {
                return Err(RepositoryError::Dataset(format!(
                    "Duplicate stay id: {}",
                    stay.id
                )));
            }
        }
        Ok(Self {
            stays: Arc::new(stays),
        })
    }

    /// Loads the catalog from a JSON document of the form `{"stays": [...]}`.
    pub fn from_json_file<P: AsRef<Path>>(path: P) -> RepositoryResult<Self> {
        let raw = fs::read_to_string(path)?;
        let document: StaysDocument = serde_json::from_str(&raw)?;
        Self::new(document.stays)
    }

    pub fn len(&self) -> usize {
        self.stays.len()
    }

    pub fn is_empty(&self) -> bool {
        self.stays.is_empty()
    }
}

/// Whether a stay survives every predicate of the query.
///
/// Predicates are checked in the order location, min price, max price,
/// guests, property type, amenities, featured. They are commutative, so the
/// order only matters for short-circuiting.
fn matches(stay: &Stay, query: &StaySearchQuery) -> bool {
    if let Some(location) = &query.location {
        let city = stay.location.city.to_lowercase();
        let country = stay.location.country.to_lowercase();
        if !city.contains(location.as_str()) && !country.contains(location.as_str()) {
            return false;
        }
    }

    if let Some(min) = query.min_price
        && stay.price_per_night < min
    {
        return false;
    }

    if let Some(max) = query.max_price
        && stay.price_per_night > max
    {
        return false;
    }

    if let Some(guests) = query.guests
        && stay.max_guests < guests
    {
        return false;
    }

    if let Some(kind) = &query.property_type
        && !stay.property_type.eq_ignore_ascii_case(kind)
    {
        return false;
    }

    // Vacuously true for an empty amenity set.
    if !query.amenities.iter().all(|tag| stay.has_amenity(tag)) {
        return false;
    }

    if query.featured && !stay.featured {
        return false;
    }

    true
}

impl StayReader for InMemoryStayRepository {
    fn get_stay_by_id(&self, id: &StayId) -> RepositoryResult<Option<Stay>> {
        Ok(self.stays.iter().find(|stay| &stay.id == id).cloned())
    }

    fn list_stays(&self, query: StaySearchQuery) -> RepositoryResult<(usize, Vec<Stay>)> {
        let filtered: Vec<&Stay> = self
            .stays
            .iter()
            .filter(|stay| matches(stay, &query))
            .collect();
        let total = filtered.len();

        let items = match query.pagination {
            Some(pagination) => {
                // An out-of-range page yields an empty slice, not an error.
                let start = pagination
                    .page
                    .saturating_sub(1)
                    .saturating_mul(pagination.per_page);
                filtered
                    .into_iter()
                    .skip(start)
                    .take(pagination.per_page)
                    .cloned()
                    .collect()
            }
            None => filtered.into_iter().cloned().collect(),
        };

        Ok((total, items))
    }
}
