use crate::domain::stay::Stay;
use crate::domain::types::StayId;
use crate::dto::api::StaysQuery;
use crate::dto::main::{IndexPageData, StaysPageData};
use crate::pagination::Paginated;
use crate::repository::{StayReader, StaySearchQuery};
use crate::services::api::build_search_query;
use crate::services::{ServiceError, ServiceResult};

/// How many featured stays the home page highlights.
pub const FEATURED_STAYS_ON_HOME: usize = 6;

/// Loads the featured stays shown on the home page.
pub fn load_index_page<R>(repo: &R) -> ServiceResult<IndexPageData>
where
    R: StayReader + ?Sized,
{
    let query = StaySearchQuery::new()
        .featured(true)
        .paginate(1, FEATURED_STAYS_ON_HOME);
    let (_total, featured_stays) = repo.list_stays(query).map_err(ServiceError::from)?;

    Ok(IndexPageData { featured_stays })
}

/// Loads the filtered stay list for the explore page.
pub fn load_stays_page<R>(repo: &R, params: StaysQuery) -> ServiceResult<StaysPageData>
where
    R: StayReader + ?Sized,
{
    let (query, page, page_size) = build_search_query(&params);

    let (total, stays) = repo.list_stays(query).map_err(ServiceError::from)?;
    let stays = Paginated::new(stays, page, total, total.div_ceil(page_size));

    Ok(StaysPageData {
        stays,
        filter_query: params.to_query_string(),
        filters: params,
    })
}

/// Loads a single stay for the detail page.
pub fn load_stay_page<R>(repo: &R, id: &StayId) -> ServiceResult<Stay>
where
    R: StayReader + ?Sized,
{
    crate::services::api::get_stay(repo, id)
}
