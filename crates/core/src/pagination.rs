//! Page-number pagination over a counted collection.
//!
//! The [`Paginator`] only knows how many records exist and how many fit on a
//! page; the repository layer turns a [`Page`] into `LIMIT`/`OFFSET`.

use serde::Serialize;

/// Number of records per page on every listing unless configured otherwise.
pub const DEFAULT_PAGE_SIZE: i64 = 10;

/// Largest page size a deployment may configure.
pub const MAX_PAGE_SIZE: i64 = 100;

/// Pages shown on each side of the current page in the navigation bar.
pub const DEFAULT_ON_EACH_SIDE: i64 = 3;

/// Pages always shown at the start and end of the navigation bar.
pub const DEFAULT_ON_ENDS: i64 = 2;

#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum PaginationError {
    #[error("That page number is not an integer")]
    NotAnInteger,

    #[error("That page number is less than 1")]
    LessThanOne,

    #[error("That page contains no results")]
    NoResults,
}

/// Splits `count` records into pages of `per_page`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Paginator {
    count: i64,
    per_page: i64,
    orphans: i64,
}

impl Paginator {
    /// `per_page` is clamped to at least 1 and `count` to at least 0.
    pub fn new(count: i64, per_page: i64) -> Self {
        Self {
            count: count.max(0),
            per_page: per_page.max(1),
            orphans: 0,
        }
    }

    /// Merge a trailing page of `orphans` or fewer records into the one before it.
    pub fn with_orphans(mut self, orphans: i64) -> Self {
        self.orphans = orphans.max(0);
        self
    }

    pub fn count(&self) -> i64 {
        self.count
    }

    pub fn per_page(&self) -> i64 {
        self.per_page
    }

    /// Total number of pages. An empty collection still has one (empty) page.
    pub fn num_pages(&self) -> i64 {
        let hits = (self.count - self.orphans).max(1);
        hits / self.per_page + i64::from(hits % self.per_page != 0)
    }

    /// Parse a raw page number without range-checking it.
    pub fn parse_number(raw: &str) -> Result<i64, PaginationError> {
        raw.trim()
            .parse::<i64>()
            .map_err(|_| PaginationError::NotAnInteger)
    }

    /// Check that `number` names an existing page.
    pub fn validate_number(&self, number: i64) -> Result<i64, PaginationError> {
        if number < 1 {
            return Err(PaginationError::LessThanOne);
        }
        if number > self.num_pages() {
            return Err(PaginationError::NoResults);
        }
        Ok(number)
    }

    /// Strict lookup of page `number`.
    pub fn page(&self, number: i64) -> Result<Page, PaginationError> {
        let number = self.validate_number(number)?;
        Ok(self.build_page(number))
    }

    /// Lenient lookup used by request handlers.
    ///
    /// A missing or non-integer value yields the first page; a value outside
    /// `1..=num_pages` yields the last page.
    pub fn get_page(&self, raw: Option<&str>) -> Page {
        let number = match raw.map(Self::parse_number) {
            None | Some(Err(_)) => 1,
            Some(Ok(n)) => match self.validate_number(n) {
                Ok(n) => n,
                Err(_) => self.num_pages(),
            },
        };
        self.build_page(number)
    }

    fn build_page(&self, number: i64) -> Page {
        let num_pages = self.num_pages();
        let offset = (number - 1).saturating_mul(self.per_page);
        let mut top = offset.saturating_add(self.per_page);
        if top.saturating_add(self.orphans) >= self.count {
            top = self.count;
        }

        Page {
            number,
            num_pages,
            count: self.count,
            per_page: self.per_page,
            offset,
            limit: (top - offset).max(0),
        }
    }
}

/// One page of a [`Paginator`].
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Page {
    pub number: i64,
    pub num_pages: i64,
    pub count: i64,
    pub per_page: i64,
    /// Rows to skip in the underlying query.
    #[serde(skip)]
    pub offset: i64,
    /// Rows to fetch in the underlying query.
    #[serde(skip)]
    pub limit: i64,
}

impl Page {
    pub fn has_next(&self) -> bool {
        self.number < self.num_pages
    }

    pub fn has_previous(&self) -> bool {
        self.number > 1
    }

    pub fn has_other_pages(&self) -> bool {
        self.has_next() || self.has_previous()
    }

    pub fn next_page_number(&self) -> Option<i64> {
        self.has_next().then_some(self.number + 1)
    }

    pub fn previous_page_number(&self) -> Option<i64> {
        self.has_previous().then_some(self.number - 1)
    }

    /// 1-based index of the first record on this page, 0 for an empty collection.
    pub fn start_index(&self) -> i64 {
        if self.count == 0 {
            0
        } else {
            self.offset + 1
        }
    }

    /// 1-based index of the last record on this page.
    pub fn end_index(&self) -> i64 {
        if self.number == self.num_pages {
            self.count
        } else {
            self.number.saturating_mul(self.per_page)
        }
    }

    /// Page links around the current page, with ellipses standing in for
    /// the pages that are skipped.
    ///
    /// ```
    /// use newsroom_core::pagination::{PageLink, Paginator};
    ///
    /// let page = Paginator::new(500, 10).page(25).unwrap();
    /// let links = page.elided_page_range(1, 1);
    /// assert_eq!(links.first(), Some(&PageLink::Page { number: 1 }));
    /// assert_eq!(links[1], PageLink::Ellipsis);
    /// assert_eq!(links.last(), Some(&PageLink::Page { number: 50 }));
    /// ```
    pub fn elided_page_range(&self, on_each_side: i64, on_ends: i64) -> Vec<PageLink> {
        let number = self.number;
        let last = self.num_pages;
        let pages = |from: i64, to: i64| (from..=to).map(|number| PageLink::Page { number });

        if last <= (on_each_side + on_ends) * 2 {
            return pages(1, last).collect();
        }

        let mut links = Vec::new();
        if number > (1 + on_each_side + on_ends) + 1 {
            links.extend(pages(1, on_ends));
            links.push(PageLink::Ellipsis);
            links.extend(pages(number - on_each_side, number));
        } else {
            links.extend(pages(1, number));
        }

        if number < (last - on_each_side - on_ends) - 1 {
            links.extend(pages(number + 1, number + on_each_side));
            links.push(PageLink::Ellipsis);
            links.extend(pages(last - on_ends + 1, last));
        } else {
            links.extend(pages(number + 1, last));
        }
        links
    }

    /// Serializable summary for JSON responses and templates.
    pub fn meta(&self) -> PageMeta {
        PageMeta {
            number: self.number,
            num_pages: self.num_pages,
            count: self.count,
            per_page: self.per_page,
            has_next: self.has_next(),
            has_previous: self.has_previous(),
            has_other_pages: self.has_other_pages(),
            next_page_number: self.next_page_number(),
            previous_page_number: self.previous_page_number(),
            start_index: self.start_index(),
            end_index: self.end_index(),
            links: self.elided_page_range(DEFAULT_ON_EACH_SIDE, DEFAULT_ON_ENDS),
        }
    }
}

/// An entry in the page navigation bar.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum PageLink {
    Page { number: i64 },
    Ellipsis,
}

/// Everything a listing needs to render its navigation.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    pub number: i64,
    pub num_pages: i64,
    pub count: i64,
    pub per_page: i64,
    pub has_next: bool,
    pub has_previous: bool,
    pub has_other_pages: bool,
    pub next_page_number: Option<i64>,
    pub previous_page_number: Option<i64>,
    pub start_index: i64,
    pub end_index: i64,
    pub links: Vec<PageLink>,
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn numbers(links: &[PageLink]) -> Vec<Option<i64>> {
        links
            .iter()
            .map(|link| match link {
                PageLink::Page { number } => Some(*number),
                PageLink::Ellipsis => None,
            })
            .collect()
    }

    // -- num_pages -----------------------------------------------------------

    #[test]
    fn num_pages_is_ceiling_of_count_over_page_size() {
        for count in 1..=95 {
            let expected = (count + 9) / 10;
            assert_eq!(
                Paginator::new(count, 10).num_pages(),
                expected,
                "count = {count}"
            );
        }
    }

    #[test]
    fn empty_collection_has_one_page() {
        let paginator = Paginator::new(0, 10);
        assert_eq!(paginator.num_pages(), 1);

        let page = paginator.page(1).unwrap();
        assert_eq!(page.limit, 0);
        assert_eq!(page.start_index(), 0);
        assert_eq!(page.end_index(), 0);
        assert!(!page.has_other_pages());
    }

    #[test]
    fn zero_page_size_is_clamped_to_one() {
        assert_eq!(Paginator::new(3, 0).num_pages(), 3);
    }

    #[test]
    fn huge_page_size_does_not_overflow() {
        let paginator = Paginator::new(5, i64::MAX).with_orphans(i64::MAX);
        assert_eq!(paginator.num_pages(), 1);

        let page = paginator.get_page(Some("7"));
        assert_eq!(page.number, 1);
        assert_eq!(page.limit, 5);
        assert_eq!(page.end_index(), 5);
    }

    #[test]
    fn huge_count_with_small_pages() {
        let paginator = Paginator::new(i64::MAX, 10);
        let last = paginator.get_page(Some("999999999999999999999"));
        assert_eq!(last.number, 1);
        assert_eq!(paginator.num_pages(), i64::MAX / 10 + 1);
    }

    #[test]
    fn orphans_merge_into_previous_page() {
        let paginator = Paginator::new(23, 10).with_orphans(3);
        assert_eq!(paginator.num_pages(), 2);

        let last = paginator.page(2).unwrap();
        assert_eq!(last.offset, 10);
        assert_eq!(last.limit, 13);
        assert_eq!(last.end_index(), 23);
    }

    // -- page ----------------------------------------------------------------

    #[test]
    fn page_rejects_numbers_out_of_range() {
        let paginator = Paginator::new(25, 10);
        assert_matches!(paginator.page(0), Err(PaginationError::LessThanOne));
        assert_matches!(paginator.page(-4), Err(PaginationError::LessThanOne));
        assert_matches!(paginator.page(4), Err(PaginationError::NoResults));
    }

    #[test]
    fn middle_page_has_both_neighbours() {
        let page = Paginator::new(25, 10).page(2).unwrap();
        assert_eq!(page.offset, 10);
        assert_eq!(page.limit, 10);
        assert_eq!(page.previous_page_number(), Some(1));
        assert_eq!(page.next_page_number(), Some(3));
        assert_eq!(page.start_index(), 11);
        assert_eq!(page.end_index(), 20);
    }

    #[test]
    fn last_page_is_short() {
        let page = Paginator::new(25, 10).page(3).unwrap();
        assert_eq!(page.limit, 5);
        assert!(!page.has_next());
        assert!(page.has_previous());
        assert_eq!(page.next_page_number(), None);
        assert_eq!(page.end_index(), 25);
    }

    // -- get_page ------------------------------------------------------------

    #[test]
    fn get_page_defaults_to_first_page() {
        let paginator = Paginator::new(25, 10);
        assert_eq!(paginator.get_page(None).number, 1);
        assert_eq!(paginator.get_page(Some("abc")).number, 1);
        assert_eq!(paginator.get_page(Some("")).number, 1);
    }

    #[test]
    fn get_page_out_of_range_falls_back_to_last_page() {
        let paginator = Paginator::new(25, 10);
        assert_eq!(paginator.get_page(Some("99")).number, 3);
        assert_eq!(paginator.get_page(Some("0")).number, 3);
        assert_eq!(paginator.get_page(Some("-1")).number, 3);
    }

    #[test]
    fn get_page_accepts_surrounding_whitespace() {
        assert_eq!(Paginator::new(25, 10).get_page(Some(" 2 ")).number, 2);
    }

    // -- elided_page_range ---------------------------------------------------

    #[test]
    fn short_ranges_are_not_elided() {
        let page = Paginator::new(100, 10).page(5).unwrap();
        assert_eq!(
            numbers(&page.elided_page_range(3, 2)),
            (1..=10).map(Some).collect::<Vec<_>>()
        );
    }

    #[test]
    fn long_ranges_elide_both_sides() {
        let page = Paginator::new(500, 10).page(25).unwrap();
        assert_eq!(
            numbers(&page.elided_page_range(3, 2)),
            vec![
                Some(1),
                Some(2),
                None,
                Some(22),
                Some(23),
                Some(24),
                Some(25),
                Some(26),
                Some(27),
                Some(28),
                None,
                Some(49),
                Some(50),
            ]
        );
    }

    #[test]
    fn near_start_only_elides_the_tail() {
        let page = Paginator::new(500, 10).page(2).unwrap();
        assert_eq!(
            numbers(&page.elided_page_range(3, 2)),
            vec![
                Some(1),
                Some(2),
                Some(3),
                Some(4),
                Some(5),
                None,
                Some(49),
                Some(50),
            ]
        );
    }

    #[test]
    fn meta_serializes_links_with_kind_tag() {
        let meta = Paginator::new(15, 10).page(1).unwrap().meta();
        let json = serde_json::to_value(&meta).unwrap();
        assert_eq!(json["num_pages"], 2);
        assert_eq!(json["next_page_number"], 2);
        assert!(json["previous_page_number"].is_null());
        assert_eq!(json["links"][0]["kind"], "page");
        assert_eq!(json["links"][0]["number"], 1);
        assert!(json.get("offset").is_none());
    }
}
