use staydiscovery::domain::types::StayId;
use staydiscovery::dto::api::StaysQuery;
use staydiscovery::repository::stay::InMemoryStayRepository;
use staydiscovery::services::ServiceError;
use staydiscovery::services::api::{get_stay, search_stays};
use staydiscovery::services::main::{load_index_page, load_stays_page};
use staydiscovery::{DEFAULT_PAGE_SIZE, MAX_PAGE_SIZE};

mod common;

fn repo() -> InMemoryStayRepository {
    InMemoryStayRepository::new(common::sample_stays()).expect("valid fixture")
}

#[test]
fn search_defaults_to_first_page_of_twelve() {
    let response = search_stays(&repo(), StaysQuery::default()).unwrap();
    assert_eq!(response.page, 1);
    assert_eq!(response.page_size, DEFAULT_PAGE_SIZE);
    assert_eq!(response.total, 14);
    assert_eq!(response.total_pages, 2);
    assert_eq!(response.stays.len(), DEFAULT_PAGE_SIZE);
}

#[test]
fn page_size_is_clamped_into_bounds() {
    let oversized = search_stays(
        &repo(),
        StaysQuery {
            page_size: Some(500),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(oversized.page_size, MAX_PAGE_SIZE);

    let undersized = search_stays(
        &repo(),
        StaysQuery {
            page_size: Some(0),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(undersized.page_size, 1);
    assert_eq!(undersized.stays.len(), 1);
}

#[test]
fn page_below_one_is_clamped_to_one() {
    let response = search_stays(
        &repo(),
        StaysQuery {
            page: Some(0),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(response.page, 1);
}

#[test]
fn total_pages_is_zero_for_no_matches() {
    let response = search_stays(
        &repo(),
        StaysQuery {
            min_price: Some(100),
            max_price: Some(50),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(response.total, 0);
    assert_eq!(response.total_pages, 0);
    assert!(response.stays.is_empty());
}

#[test]
fn second_page_of_featured_stays_holds_the_remainder() {
    let response = search_stays(
        &repo(),
        StaysQuery {
            featured: true,
            page: Some(2),
            page_size: Some(2),
            ..Default::default()
        },
    )
    .unwrap();
    assert_eq!(response.total, 3);
    assert_eq!(response.total_pages, 2);
    assert_eq!(response.stays.len(), 1);
}

#[test]
fn get_stay_maps_misses_to_not_found() {
    let repo = repo();

    let found = get_stay(&repo, &StayId::new("oia-villa").unwrap());
    assert!(found.is_ok());

    let missing = get_stay(&repo, &StayId::new("nonexistent").unwrap());
    assert!(matches!(missing, Err(ServiceError::NotFound)));
}

#[test]
fn index_page_shows_at_most_six_featured_stays() {
    let page_data = load_index_page(&repo()).unwrap();
    assert_eq!(page_data.featured_stays.len(), 3);
    assert!(page_data.featured_stays.iter().all(|s| s.featured));
}

#[test]
fn stays_page_echoes_filters_and_builds_page_links() {
    let params = StaysQuery {
        location: Some("usa".to_string()),
        page_size: Some(1),
        ..Default::default()
    };
    let page_data = load_stays_page(&repo(), params.clone()).unwrap();

    assert_eq!(page_data.filters, params);
    assert_eq!(page_data.filter_query, "location=usa&pageSize=1");
    assert_eq!(page_data.stays.total, 3);
    assert_eq!(page_data.stays.total_pages, 3);
    assert_eq!(page_data.stays.page, 1);
    assert_eq!(page_data.stays.items.len(), 1);
    assert_eq!(
        page_data.stays.pages,
        vec![Some(1), Some(2), Some(3)]
    );
}
