//! Lazy page-by-page view over an address book.

use crate::models::Record;
use indexmap::map::Values;

/// Page size used when none is configured.
pub const DEFAULT_PAGE_SIZE: usize = 2;

/// Iterator yielding pages of formatted `name: phone, phone` lines.
///
/// Pages follow insertion order. The last page may be short and the
/// iterator ends right after it, so an empty page is never produced.
pub struct Pages<'a> {
    records: Values<'a, String, Record>,
    page_size: usize,
}

impl<'a> Pages<'a> {
    pub(crate) fn new(records: Values<'a, String, Record>, page_size: usize) -> Self {
        Self {
            records,
            page_size: page_size.max(1),
        }
    }

    /// Number of lines per page.
    pub fn page_size(&self) -> usize {
        self.page_size
    }
}

impl Iterator for Pages<'_> {
    type Item = Vec<String>;

    fn next(&mut self) -> Option<Self::Item> {
        let page: Vec<String> = self
            .records
            .by_ref()
            .take(self.page_size)
            .map(Record::to_string)
            .collect();

        if page.is_empty() {
            None
        } else {
            Some(page)
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        let remaining = self.records.len();
        let pages = remaining.div_ceil(self.page_size);
        (pages, Some(pages))
    }
}

impl ExactSizeIterator for Pages<'_> {}
