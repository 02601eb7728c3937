use serde::Serialize;

/// Fixed number of suppliers per page.
pub const PAGE_SIZE: usize = 5;

/// One slot of the paginator: a page link or an ellipsis.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageLink {
    Page { number: usize, current: bool },
    Gap,
}

/// Number of pages needed to show `total_records`.
pub fn total_pages(total_records: usize) -> usize {
    total_records.div_ceil(PAGE_SIZE)
}

/// 0-indexed offset of the first record shown on the 1-indexed `page`.
pub fn first_offset(page: usize) -> usize {
    page.saturating_sub(1).saturating_mul(PAGE_SIZE)
}

/// Paginator window: the edges plus a neighbourhood of the current page,
/// with a gap wherever numbers are skipped.
fn page_links(total_pages: usize, current: usize, edge: usize, around: usize) -> Vec<PageLink> {
    let visible = |number: usize| {
        number <= edge
            || number + edge > total_pages
            || number.abs_diff(current) <= around
    };

    let mut links = Vec::new();
    let mut skipped = false;
    for number in 1..=total_pages {
        if visible(number) {
            links.push(PageLink::Page {
                number,
                current: number == current,
            });
            skipped = false;
        } else if !skipped {
            links.push(PageLink::Gap);
            skipped = true;
        }
    }
    links
}

#[derive(Debug, Serialize)]
pub struct Paginated<T> {
    pub items: Vec<T>,
    pub pages: Vec<PageLink>,
    /// Current 1-indexed page.
    pub page: usize,
    /// 0-indexed display offset of `items[0]`.
    pub first: usize,
    pub total_records: usize,
}

impl<T> Paginated<T> {
    pub fn new(mut items: Vec<T>, current_page: usize, total_records: usize) -> Self {
        let page = current_page.max(1);
        items.truncate(PAGE_SIZE);

        Self {
            items,
            pages: page_links(total_pages(total_records), page, 1, 2),
            page,
            first: first_offset(page),
            total_records,
        }
    }

    pub fn total_pages(&self) -> usize {
        total_pages(self.total_records)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(links: &[PageLink]) -> Vec<Option<usize>> {
        links
            .iter()
            .map(|link| match link {
                PageLink::Page { number, .. } => Some(*number),
                PageLink::Gap => None,
            })
            .collect()
    }

    #[test]
    fn offsets_follow_the_page_size() {
        assert_eq!(first_offset(1), 0);
        assert_eq!(first_offset(3), 10);
        assert_eq!(first_offset(0), 0);
        assert_eq!(total_pages(0), 0);
        assert_eq!(total_pages(5), 1);
        assert_eq!(total_pages(6), 2);
    }

    #[test]
    fn short_listing_shows_every_page() {
        let links = page_links(4, 2, 1, 2);
        assert_eq!(numbers(&links), vec![Some(1), Some(2), Some(3), Some(4)]);
        assert_eq!(
            links[1],
            PageLink::Page {
                number: 2,
                current: true
            }
        );
    }

    #[test]
    fn long_listing_collapses_into_gaps() {
        let links = page_links(20, 10, 1, 2);
        assert_eq!(
            numbers(&links),
            vec![
                Some(1),
                None,
                Some(8),
                Some(9),
                Some(10),
                Some(11),
                Some(12),
                None,
                Some(20)
            ]
        );
    }

    #[test]
    fn empty_listing_has_no_links() {
        let page: Paginated<u8> = Paginated::new(vec![], 1, 0);
        assert!(page.pages.is_empty());
        assert_eq!(page.total_pages(), 0);
    }

    #[test]
    fn huge_page_numbers_saturate() {
        assert_eq!(first_offset(usize::MAX), usize::MAX);

        let page: Paginated<u8> = Paginated::new(vec![], usize::MAX, 12);
        assert_eq!(page.page, usize::MAX);
        assert_eq!(page.first, usize::MAX);
        assert_eq!(
            numbers(&page.pages),
            vec![Some(1), None, Some(3)]
        );
    }

    #[test]
    fn page_never_holds_more_than_page_size() {
        let page = Paginated::new((0..8).collect::<Vec<_>>(), 0, 8);
        assert_eq!(page.items.len(), PAGE_SIZE);
        assert_eq!(page.page, 1);
        assert_eq!(page.first, 0);
    }
}
