use crate::domain::errors::{DomainError, DomainResult};
use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

static YEAR_PATTERN: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"\b(\d{4})\b").expect("year pattern is valid"));

/// PubMed identifier (PMID). Unique key of an [`Article`](super::Article).
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct PubmedId(String);

impl PubmedId {
    pub fn new(value: impl Into<String>) -> DomainResult<Self> {
        let value = value.into();
        let trimmed = value.trim();
        if trimmed.is_empty() {
            return Err(DomainError::Validation("pubmed id cannot be empty".into()));
        }
        Ok(Self(trimmed.to_string()))
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn into_inner(self) -> String {
        self.0
    }
}

impl fmt::Display for PubmedId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

impl From<PubmedId> for String {
    fn from(value: PubmedId) -> Self {
        value.0
    }
}

/// Extract the publication year from an E-utilities `pubdate` such as
/// `"2020 Jan 5"` or `"2019 Spring"`. Returns 0 when no year is present.
pub fn year_from_pubdate(pubdate: &str) -> i32 {
    YEAR_PATTERN
        .captures(pubdate)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
        .unwrap_or(0)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pubmed_id_is_trimmed() {
        let id = PubmedId::new("  123 ").unwrap();
        assert_eq!(id.as_str(), "123");
    }

    #[test]
    fn blank_pubmed_id_is_rejected() {
        assert!(matches!(
            PubmedId::new("   "),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn year_is_taken_from_leading_date() {
        assert_eq!(year_from_pubdate("2020 Jan 5"), 2020);
        assert_eq!(year_from_pubdate("1998 Spring"), 1998);
        assert_eq!(year_from_pubdate("Winter 2011-2012"), 2011);
    }

    #[test]
    fn missing_year_yields_zero() {
        assert_eq!(year_from_pubdate(""), 0);
        assert_eq!(year_from_pubdate("Jan"), 0);
    }
}
