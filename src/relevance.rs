//! Keyword relevance for discovered links.

/// Curated list for the static strategy.
pub const STATIC_KEYWORDS: &[&str] = &[
    "about",
    "company",
    "history",
    "mission",
    "team",
    "leadership",
    "values",
];

/// Broader list for the browser strategy, covering governance, CSR and
/// investor-relations pages.
pub const DYNAMIC_KEYWORDS: &[&str] = &[
    "mission",
    "vision",
    "values",
    "ethics",
    "sustainability",
    "leadership",
    "about",
    "company",
    "executives",
    "our-story",
    "who-we-are",
    "governance",
    "team",
    "culture",
    "social-responsibility",
    "impact",
    "principles",
    "philosophy",
    "brand-story",
    "heritage",
    "legacy",
    "purpose",
    "csr",
    "initiatives",
    "innovation",
    "history",
    "environment",
    "diversity",
    "inclusion",
    "careers",
    "investors",
    "partners",
    "corporate",
    "contact",
    "media",
    "news",
    "awards",
    "recognition",
    "ceo",
    "founder",
    "headquarters",
    "locations",
    "suppliers",
];

/// A set of lowercase keywords; a URL is relevant when any keyword occurs
/// in it, ignoring case.
#[derive(Debug, Clone)]
pub struct Keywords {
    lowered: Vec<String>,
}

impl Keywords {
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut lowered: Vec<String> = keywords
            .into_iter()
            .map(|k| k.as_ref().to_lowercase())
            .collect();
        lowered.sort();
        lowered.dedup();
        Self { lowered }
    }

    pub fn static_set() -> Self {
        Self::new(STATIC_KEYWORDS)
    }

    pub fn dynamic_set() -> Self {
        Self::new(DYNAMIC_KEYWORDS)
    }

    pub fn is_relevant(&self, url: &str) -> bool {
        is_relevant(url, &self.lowered)
    }

    pub fn len(&self) -> usize {
        self.lowered.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lowered.is_empty()
    }
}

/// True iff some keyword is a case-insensitive substring of `url`.
pub fn is_relevant<S: AsRef<str>>(url: &str, keywords: &[S]) -> bool {
    let url_lower = url.to_lowercase();
    keywords
        .iter()
        .any(|k| url_lower.contains(&k.as_ref().to_lowercase()))
}
