use crate::domain::stay::Stay;
use crate::domain::types::{AmenityTag, StayId};
use crate::repository::errors::RepositoryResult;

pub mod errors;
pub mod stay;

#[derive(Debug, Clone, Copy)]
pub struct Pagination {
    pub page: usize,
    pub per_page: usize,
}

/// Filter and pagination parameters for a catalog search.
///
/// All predicates are optional and compose with logical AND; an unset
/// predicate imposes no constraint. Constructors normalize text filters
/// (trimming, lower-casing) so the matching code compares trusted values.
#[derive(Debug, Clone, Default)]
pub struct StaySearchQuery {
    pub location: Option<String>,
    pub min_price: Option<u32>,
    pub max_price: Option<u32>,
    pub guests: Option<u32>,
    pub property_type: Option<String>,
    pub amenities: Vec<AmenityTag>,
    pub featured: bool,
    pub pagination: Option<Pagination>,
}

impl StaySearchQuery {
    pub fn new() -> Self {
        Self::default()
    }

    /// Case-insensitive substring match against city or country.
    pub fn location(mut self, location: impl Into<String>) -> Self {
        self.location = Some(location.into().trim().to_lowercase()).filter(|s| !s.is_empty());
        self
    }

    /// Inclusive lower bound on the nightly price.
    pub fn min_price(mut self, price: u32) -> Self {
        self.min_price = Some(price);
        self
    }

    /// Inclusive upper bound on the nightly price.
    pub fn max_price(mut self, price: u32) -> Self {
        self.max_price = Some(price);
        self
    }

    /// Minimum guest capacity a stay must accommodate.
    pub fn guests(mut self, guests: u32) -> Self {
        self.guests = Some(guests);
        self
    }

    /// Case-insensitive exact match on the property type tag.
    pub fn property_type(mut self, kind: impl Into<String>) -> Self {
        self.property_type = Some(kind.into().trim().to_lowercase()).filter(|s| !s.is_empty());
        self
    }

    /// Requires every given amenity to be present (AND semantics). An empty
    /// set leaves the predicate unset.
    pub fn amenities<I, S>(mut self, amenities: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.amenities = amenities
            .into_iter()
            .filter_map(|tag| AmenityTag::new(tag).ok())
            .collect();
        self
    }

    /// Restricts results to featured stays when `true`.
    pub fn featured(mut self, featured: bool) -> Self {
        self.featured = featured;
        self
    }

    pub fn paginate(mut self, page: usize, per_page: usize) -> Self {
        self.pagination = Some(Pagination { page, per_page });
        self
    }
}

/// Read access to the immutable stay catalog.
pub trait StayReader {
    /// Looks up a single stay by identifier.
    fn get_stay_by_id(&self, id: &StayId) -> RepositoryResult<Option<Stay>>;
    /// Returns the total number of stays matching the query together with the
    /// requested page of matches, in catalog order.
    fn list_stays(&self, query: StaySearchQuery) -> RepositoryResult<(usize, Vec<Stay>)>;
}
