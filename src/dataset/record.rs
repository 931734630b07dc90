use serde_json::{Map, Value};

pub const WEBSITE_FIELD: &str = "Website";
pub const ERROR_FIELD: &str = "error";
pub const NOT_AVAILABLE: &str = "Not Available";

/// The six fields the extraction prompt asks for, in column order.
pub const PROFILE_FIELDS: [&str; 6] = [
    "mission_statement",
    "products_or_services",
    "founded",
    "headquarters",
    "key_executives",
    "notable_awards",
];

/// Ordered field map shared by [`Details`] and [`Record`]. Inserting an
/// existing key replaces its value in place.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
struct Fields(Vec<(String, String)>);

impl Fields {
    fn insert(&mut self, key: String, value: String) {
        match self.0.iter_mut().find(|(k, _)| *k == key) {
            Some(slot) => slot.1 = value,
            None => self.0.push((key, value)),
        }
    }

    fn get(&self, key: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|(k, _)| k == key)
            .map(|(_, v)| v.as_str())
    }
}

/// What extraction produced for a site, without the `Website` key.
///
/// Keys are whatever the model returned; nothing checks them against
/// [`PROFILE_FIELDS`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Details {
    fields: Fields,
}

impl Details {
    pub fn new() -> Self {
        Self::default()
    }

    /// All six profile fields set to "Not Available".
    pub fn sentinel() -> Self {
        let mut details = Self::new();
        for field in PROFILE_FIELDS {
            details.insert(field, NOT_AVAILABLE);
        }
        details
    }

    /// A single `error` field.
    pub fn error(message: impl Into<String>) -> Self {
        let mut details = Self::new();
        details.insert(ERROR_FIELD, message);
        details
    }

    /// Convert a recovered JSON object.
    ///
    /// Known profile fields come first in their canonical order, then any
    /// extra keys alphabetically. Strings pass through as-is, `null`
    /// becomes an empty string, anything else is kept as compact JSON.
    pub fn from_json_object(object: Map<String, Value>) -> Self {
        let mut object = object;
        let mut details = Self::new();

        for field in PROFILE_FIELDS {
            if let Some(value) = object.remove(field) {
                details.insert(field, value_to_cell(value));
            }
        }

        let mut rest: Vec<(String, Value)> = object.into_iter().collect();
        rest.sort_by(|a, b| a.0.cmp(&b.0));
        for (key, value) in rest {
            details.insert(key, value_to_cell(value));
        }

        details
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<String>) {
        self.fields.insert(key.into(), value.into());
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key)
    }

    pub fn is_empty(&self) -> bool {
        self.fields.0.is_empty()
    }

    pub fn len(&self) -> usize {
        self.fields.0.len()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}

fn value_to_cell(value: Value) -> String {
    match value {
        Value::String(s) => s,
        Value::Null => String::new(),
        other => other.to_string(),
    }
}

/// One output row. Always has `Website` as its first field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Record {
    fields: Fields,
}

impl Record {
    pub fn new(website: impl Into<String>) -> Self {
        let mut fields = Fields::default();
        fields.insert(WEBSITE_FIELD.to_string(), website.into());
        Self { fields }
    }

    /// `{Website: site}` with `details` laid over it; details win on conflict.
    pub fn with_details(website: impl Into<String>, details: Details) -> Self {
        let mut record = Self::new(website);
        for (key, value) in details.fields.0 {
            record.fields.insert(key, value);
        }
        record
    }

    /// The fixed row for a site that could not be processed.
    pub fn sentinel(website: impl Into<String>) -> Self {
        Self::with_details(website, Details::sentinel())
    }

    /// Build from `(column, cell)` pairs, e.g. a CSV row. Empty cells are
    /// treated as absent; a missing `Website` becomes an empty one.
    pub fn from_pairs<I, K, V>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<String>,
    {
        let mut record = Self::new("");
        for (key, value) in pairs {
            let (key, value) = (key.into(), value.into());
            if value.is_empty() && key != WEBSITE_FIELD {
                continue;
            }
            record.fields.insert(key, value);
        }
        record
    }

    pub fn website(&self) -> &str {
        self.fields.get(WEBSITE_FIELD).unwrap_or_default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.fields.get(key)
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.fields.0.iter().map(|(k, _)| k.as_str())
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &str)> {
        self.fields.0.iter().map(|(k, v)| (k.as_str(), v.as_str()))
    }
}
