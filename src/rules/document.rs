//! Parsed HTML document with CSS selector queries

use scraper::{Html, Selector};

use crate::error::FaultCause;

/// A parsed document, queried once per rule instance and never mutated
pub struct QueryDocument {
    html: Html,
}

impl QueryDocument {
    /// Parse markup. HTML parsing is lenient and never fails.
    pub fn parse(markup: &str) -> Self {
        Self {
            html: Html::parse_document(markup),
        }
    }

    /// Number of nodes matching `query`
    pub fn count(&self, query: &str) -> Result<usize, FaultCause> {
        let selector = Self::selector(query)?;
        Ok(self.html.select(&selector).count())
    }

    /// Whether any node matches `query`
    pub fn matches(&self, query: &str) -> Result<bool, FaultCause> {
        let selector = Self::selector(query)?;
        let matched = self.html.select(&selector).next().is_some();
        Ok(matched)
    }

    fn selector(query: &str) -> Result<Selector, FaultCause> {
        Selector::parse(query).map_err(|e| FaultCause::InvalidSelector {
            query: query.to_string(),
            reason: e.to_string(),
        })
    }
}

impl std::fmt::Debug for QueryDocument {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("QueryDocument")
            .field("errors", &self.html.errors.len())
            .finish()
    }
}
