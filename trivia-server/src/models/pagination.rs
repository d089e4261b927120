//! Fixed-size pagination over ordered result sets

use serde::Deserialize;

/// Items per page, fixed for the lifetime of the process
pub const QUESTIONS_PER_PAGE: usize = 10;

/// A 1-based page number.
///
/// Pages below 1 are representable and always slice to nothing, so the
/// caller decides whether an empty page is an error.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Page(i64);

impl Page {
    pub fn new(number: i64) -> Self {
        Self(number)
    }

    /// Index of the first item on this page, or `None` for pages below 1.
    pub fn offset(&self) -> Option<usize> {
        let zero_based = usize::try_from(self.0.checked_sub(1)?).ok()?;
        zero_based.checked_mul(QUESTIONS_PER_PAGE)
    }

    /// Take this page's items out of an ordered sequence.
    ///
    /// Out-of-range pages yield an empty vector.
    pub fn slice<T>(&self, items: Vec<T>) -> Vec<T> {
        match self.offset() {
            Some(start) => items
                .into_iter()
                .skip(start)
                .take(QUESTIONS_PER_PAGE)
                .collect(),
            None => Vec::new(),
        }
    }
}

impl Default for Page {
    fn default() -> Self {
        Self(1)
    }
}

/// Query parameters for pagination.
///
/// `page` is kept as raw text: anything that is not an integer falls back
/// to page 1 instead of rejecting the request.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct PageParams {
    pub page: Option<String>,
}

impl From<PageParams> for Page {
    fn from(params: PageParams) -> Self {
        params
            .page
            .and_then(|raw| raw.trim().parse::<i64>().ok())
            .map(Page::new)
            .unwrap_or_default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn numbers(n: usize) -> Vec<usize> {
        (1..=n).collect()
    }

    #[test]
    fn offset_calculation() {
        assert_eq!(Page::new(1).offset(), Some(0));
        assert_eq!(Page::new(2).offset(), Some(10));
        assert_eq!(Page::new(5).offset(), Some(40));
        assert_eq!(Page::new(0).offset(), None);
        assert_eq!(Page::new(-3).offset(), None);
    }

    #[test]
    fn first_page_is_ten_items() {
        let page = Page::default().slice(numbers(25));
        assert_eq!(page, numbers(10));
    }

    #[test]
    fn last_page_is_partial() {
        let page = Page::new(3).slice(numbers(25));
        assert_eq!(page, vec![21, 22, 23, 24, 25]);
    }

    #[test]
    fn page_length_matches_remaining_items() {
        let total = 37;
        for n in 1..=6 {
            let len = Page::new(n).slice(numbers(total)).len();
            let remaining = total as i64 - (n - 1) * QUESTIONS_PER_PAGE as i64;
            assert_eq!(len as i64, remaining.clamp(0, QUESTIONS_PER_PAGE as i64));
        }
    }

    #[test]
    fn beyond_last_page_is_empty() {
        assert!(Page::new(97).slice(numbers(19)).is_empty());
        assert!(Page::new(i64::MAX).slice(numbers(19)).is_empty());
    }

    #[test]
    fn non_positive_pages_are_empty() {
        assert!(Page::new(0).slice(numbers(19)).is_empty());
        assert!(Page::new(-1).slice(numbers(19)).is_empty());
    }

    #[test]
    fn params_fall_back_to_first_page() {
        assert_eq!(Page::from(PageParams::default()), Page::new(1));
        assert_eq!(Page::from(PageParams { page: Some("abc".into()) }), Page::new(1));
        assert_eq!(Page::from(PageParams { page: Some("2".into()) }), Page::new(2));
    }
}
