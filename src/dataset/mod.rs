//! Accumulated per-site records and their CSV persistence.

pub mod combine;
pub mod errors;
pub mod record;
pub mod store;

pub use combine::combine;
pub use errors::DatasetError;
pub use record::{Details, ERROR_FIELD, NOT_AVAILABLE, PROFILE_FIELDS, Record, WEBSITE_FIELD};

/// Terminal state of one site.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SiteOutcome {
    /// Extraction ran; the details may be empty or error-tagged.
    Extracted(Details),
    /// Blocked or the seed could not be fetched.
    Unavailable,
}

/// Rows in processing order, one per site handled.
///
/// Nothing here deduplicates: recording the same site twice yields two
/// rows. Duplicates are resolved only when saving with
/// [`MergeMode::ReplaceByKey`](crate::config::MergeMode::ReplaceByKey).
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Dataset {
    records: Vec<Record>,
}

impl Dataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Append the row for `site`, substituting the sentinel when the site
    /// was unavailable.
    pub fn record(&mut self, site: &str, outcome: SiteOutcome) -> &Record {
        let record = match outcome {
            SiteOutcome::Extracted(details) => Record::with_details(site, details),
            SiteOutcome::Unavailable => Record::sentinel(site),
        };
        self.push(record);
        &self.records[self.records.len() - 1]
    }

    pub fn push(&mut self, record: Record) {
        self.records.push(record);
    }

    pub fn extend(&mut self, other: Dataset) {
        self.records.extend(other.records);
    }

    pub fn records(&self) -> &[Record] {
        &self.records
    }

    pub fn len(&self) -> usize {
        self.records.len()
    }

    pub fn is_empty(&self) -> bool {
        self.records.is_empty()
    }

    /// Union of field names in first-seen order; `Website` is always first.
    pub fn headers(&self) -> Vec<String> {
        let mut headers = vec![WEBSITE_FIELD.to_string()];
        for record in &self.records {
            for key in record.keys() {
                if !headers.iter().any(|h| h == key) {
                    headers.push(key.to_string());
                }
            }
        }
        headers
    }

    /// Keep one row per website: the position of its first occurrence and
    /// the contents of its last.
    pub fn dedup_by_website(&mut self) {
        let mut merged: Vec<Record> = Vec::with_capacity(self.records.len());
        for record in self.records.drain(..) {
            match merged.iter_mut().find(|r| r.website() == record.website()) {
                Some(slot) => *slot = record,
                None => merged.push(record),
            }
        }
        self.records = merged;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn founded(year: &str) -> Details {
        let mut d = Details::new();
        d.insert("founded", year);
        d
    }

    #[test]
    fn test_rows_follow_processing_order() {
        let mut dataset = Dataset::new();
        dataset.record("https://a.com", SiteOutcome::Extracted(founded("1900")));
        dataset.record("https://b.com", SiteOutcome::Unavailable);
        dataset.record("https://c.com", SiteOutcome::Extracted(Details::new()));
        let sites: Vec<&str> = dataset.records().iter().map(Record::website).collect();
        assert_eq!(sites, vec!["https://a.com", "https://b.com", "https://c.com"]);
    }

    #[test]
    fn test_unavailable_uses_sentinel() {
        let mut dataset = Dataset::new();
        let row = dataset.record("https://example.com", SiteOutcome::Unavailable);
        assert_eq!(row, &Record::sentinel("https://example.com"));
    }

    #[test]
    fn test_same_site_twice_gives_two_rows() {
        let mut dataset = Dataset::new();
        dataset.record("https://a.com", SiteOutcome::Extracted(founded("1900")));
        dataset.record("https://a.com", SiteOutcome::Extracted(founded("1901")));
        assert_eq!(dataset.len(), 2);
    }

    #[test]
    fn test_headers_union_first_seen() {
        let mut dataset = Dataset::new();
        dataset.record("https://a.com", SiteOutcome::Extracted(founded("1900")));
        dataset.record("https://b.com", SiteOutcome::Extracted(Details::error("boom")));
        dataset.record("https://c.com", SiteOutcome::Unavailable);
        assert_eq!(
            dataset.headers(),
            vec![
                "Website",
                "founded",
                "error",
                "mission_statement",
                "products_or_services",
                "headquarters",
                "key_executives",
                "notable_awards",
            ]
        );
    }

    #[test]
    fn test_dedup_keeps_first_position_last_value() {
        let mut dataset = Dataset::new();
        dataset.record("https://a.com", SiteOutcome::Extracted(founded("1900")));
        dataset.record("https://b.com", SiteOutcome::Unavailable);
        dataset.record("https://a.com", SiteOutcome::Extracted(founded("1901")));
        dataset.dedup_by_website();
        assert_eq!(dataset.len(), 2);
        assert_eq!(dataset.records()[0].website(), "https://a.com");
        assert_eq!(dataset.records()[0].get("founded"), Some("1901"));
        assert_eq!(dataset.records()[1].website(), "https://b.com");
    }
}
