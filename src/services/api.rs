use crate::domain::stay::Stay;
use crate::domain::types::StayId;
use crate::dto::api::{StaysQuery, StaysResponse};
use crate::repository::{StayReader, StaySearchQuery};
use crate::services::{ServiceError, ServiceResult};
use crate::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

/// Builds the repository query for a set of sanitized parameters.
///
/// Pagination is applied here so every caller gets the same clamping: page
/// defaults to 1, page size to [`DEFAULT_PAGE_SIZE`] and is silently clamped
/// into `[1, MAX_PAGE_SIZE]`. Out-of-range requests are recovered, not
/// rejected.
pub(crate) fn build_search_query(params: &StaysQuery) -> (StaySearchQuery, usize, usize) {
    let page = params.page.unwrap_or(1).max(1);
    let page_size = params
        .page_size
        .unwrap_or(DEFAULT_PAGE_SIZE)
        .clamp(1, MAX_PAGE_SIZE);

    let mut query = StaySearchQuery::new()
        .featured(params.featured)
        .amenities(params.amenities.iter().cloned())
        .paginate(page, page_size);

    if let Some(location) = &params.location {
        query = query.location(location);
    }
    if let Some(min) = params.min_price {
        query = query.min_price(min);
    }
    if let Some(max) = params.max_price {
        query = query.max_price(max);
    }
    if let Some(guests) = params.guests {
        query = query.guests(guests);
    }
    if let Some(kind) = &params.property_type {
        query = query.property_type(kind);
    }

    (query, page, page_size)
}

/// Returns the filtered, paginated catalog slice for the given parameters.
pub fn search_stays<R>(repo: &R, params: StaysQuery) -> ServiceResult<StaysResponse>
where
    R: StayReader + ?Sized,
{
    let (query, page, page_size) = build_search_query(&params);

    let (total, stays) = repo.list_stays(query).map_err(ServiceError::from)?;

    Ok(StaysResponse {
        stays,
        total,
        page,
        page_size,
        total_pages: total.div_ceil(page_size),
    })
}

/// Looks up a single stay, mapping a miss to [`ServiceError::NotFound`].
pub fn get_stay<R>(repo: &R, id: &StayId) -> ServiceResult<Stay>
where
    R: StayReader + ?Sized,
{
    repo.get_stay_by_id(id)
        .map_err(ServiceError::from)?
        .ok_or(ServiceError::NotFound)
}
