use serde::Serialize;

// Window shape for the page-link bar: pages kept at each edge and around the
// current page. `None` entries mark elided ranges.
const EDGE_PAGES: usize = 2;
const AROUND_CURRENT: usize = 2;

fn windowed_pages(total_pages: usize, current_page: usize) -> Vec<Option<usize>> {
    if total_pages == 0 {
        return Vec::new();
    }

    let keep = |page: usize| {
        page <= EDGE_PAGES
            || page > total_pages.saturating_sub(EDGE_PAGES)
            || page.abs_diff(current_page) <= AROUND_CURRENT
    };

    let mut pages = Vec::new();
    let mut last_kept = 0;
    for page in 1..=total_pages {
        if !keep(page) {
            continue;
        }
        if page != last_kept + 1 {
            pages.push(None);
        }
        pages.push(Some(page));
        last_kept = page;
    }
    pages
}

/// Page of items plus the windowed page links templates render.
#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<Option<usize>>,
    pub page: usize,
    pub total: usize,
    pub total_pages: usize,
}

impl<T> Paginated<T> {
    pub fn new(items: Vec<T>, current_page: usize, total: usize, total_pages: usize) -> Self {
        let current_page = current_page.max(1);

        Self {
            items,
            pages: windowed_pages(total_pages, current_page),
            page: current_page,
            total,
            total_pages,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn no_pages_for_empty_result() {
        assert!(windowed_pages(0, 1).is_empty());
    }

    #[test]
    fn short_runs_have_no_gaps() {
        assert_eq!(
            windowed_pages(4, 2),
            vec![Some(1), Some(2), Some(3), Some(4)]
        );
    }

    #[test]
    fn long_runs_elide_the_middle() {
        let pages = windowed_pages(20, 10);
        assert_eq!(
            pages,
            vec![
                Some(1),
                Some(2),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(19),
                Some(20),
            ]
        );
    }

    #[test]
    fn zero_page_is_treated_as_first() {
        let paginated: Paginated<u32> = Paginated::new(vec![], 0, 0, 0);
        assert_eq!(paginated.page, 1);
    }
}
