// Lazy iteration over a dataset's rows. The iterator fetches a page at a
// time and follows the server's cursor, so arbitrarily large datasets can
// be walked without holding more than one page in memory.

use crate::api::datasets::{DatasetsApi, Record};
use crate::error::Result;

/// Rows fetched per request. Shrinks near `max_records`.
const PAGE_SIZE: usize = 100;

/// Iterator over a dataset's rows, in server-defined order.
///
/// Finite and non-restartable: once exhausted it stays exhausted. Each
/// item is a `Result` because any page fetch can fail mid-iteration.
pub struct Records {
    api: DatasetsApi,
    dataset_id: String,
    /// 0 means unlimited.
    max_records: usize,
    yielded: usize,
    buffer: std::vec::IntoIter<Record>,
    cursor: String,
    exhausted: bool,
}

impl Records {
    /// Iterate every row of a dataset.
    pub fn new(api: DatasetsApi, dataset_id: impl Into<String>) -> Self {
        Records::with_limit(api, dataset_id, 0)
    }

    /// Iterate at most `max_records` rows (0 = unlimited).
    pub fn with_limit(api: DatasetsApi, dataset_id: impl Into<String>, max_records: usize) -> Self {
        Records {
            api,
            dataset_id: dataset_id.into(),
            max_records,
            yielded: 0,
            buffer: Vec::new().into_iter(),
            cursor: String::new(),
            exhausted: false,
        }
    }

    /// Id of the dataset being iterated.
    pub fn dataset_id(&self) -> &str {
        &self.dataset_id
    }

    /// Pull the next page into the buffer. Marks the iterator exhausted
    /// when the server stops returning a cursor or any rows.
    fn fetch_next_page(&mut self) -> Result<()> {
        let mut page_size = PAGE_SIZE;
        if self.max_records > 0 {
            let remaining = self.max_records - self.yielded;
            if remaining == 0 {
                self.exhausted = true;
                return Ok(());
            }
            page_size = page_size.min(remaining);
        }

        let page = self.api.fetch(&self.dataset_id, page_size, &self.cursor)?;
        if page.cursor.is_empty() || page.events.is_empty() {
            self.exhausted = true;
        }
        self.cursor = page.cursor;
        self.buffer = page.events.into_iter();
        Ok(())
    }
}

impl Iterator for Records {
    type Item = Result<Record>;

    fn next(&mut self) -> Option<Self::Item> {
        if self.max_records > 0 && self.yielded >= self.max_records {
            return None;
        }

        if self.buffer.len() == 0 {
            if self.exhausted {
                return None;
            }
            if let Err(e) = self.fetch_next_page() {
                // A failed page ends the iteration; the caller sees why.
                self.exhausted = true;
                return Some(Err(e));
            }
        }

        match self.buffer.next() {
            Some(record) => {
                self.yielded += 1;
                Some(Ok(record))
            }
            None => None,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn page_size_shrinks_near_the_cap() {
        // Pure arithmetic check on the sizing rule: with 250 already
        // yielded out of a 280 cap, the next request must ask for 30.
        let max_records = 280usize;
        let yielded = 250usize;
        let page_size = PAGE_SIZE.min(max_records - yielded);
        assert_eq!(page_size, 30);
    }
}
