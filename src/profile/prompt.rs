use std::fmt;

/// The fixed instruction sent to the model for one site.
#[derive(Debug, Clone, Copy)]
pub struct ExtractionPrompt<'a> {
    pub site: &'a str,
    pub corpus: &'a str,
}

impl<'a> ExtractionPrompt<'a> {
    pub fn new(site: &'a str, corpus: &'a str) -> Self {
        Self { site, corpus }
    }
}

impl fmt::Display for ExtractionPrompt<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            r#"Extract key company details from the following text about {site}.
Return the response as a structured JSON object:

Text: {corpus}

Respond only with valid JSON:
{{
    "mission_statement": "...",
    "products_or_services": "...",
    "founded": "...",
    "headquarters": "...",
    "key_executives": "...",
    "notable_awards": "..."
}}
"#,
            site = self.site,
            corpus = self.corpus,
        )
    }
}
