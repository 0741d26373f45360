//! Topical relevance filter
//!
//! A pure predicate over URL strings: a URL is relevant when any configured
//! keyword is a case-insensitive substring of it. The keyword set is built
//! once from configuration and never mutated.

/// Keyword-substring relevance filter over URL strings
#[derive(Debug, Clone)]
pub struct KeywordFilter {
    /// Keywords, lowercased once at construction
    keywords: Vec<String>,
}

impl KeywordFilter {
    /// Creates a filter from the configured keyword set
    ///
    /// Keywords are lowercased here so that `is_relevant` only has to
    /// lowercase the candidate URL.
    pub fn new<I, S>(keywords: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        Self {
            keywords: keywords
                .into_iter()
                .map(|k| k.as_ref().to_lowercase())
                .collect(),
        }
    }

    /// Returns true iff any keyword is a case-insensitive substring of `url`
    ///
    /// The match is performed on the raw URL string, not on page content.
    /// Pure and total: no side effects, no failure mode.
    pub fn is_relevant(&self, url: &str) -> bool {
        let url = url.to_lowercase();
        self.keywords.iter().any(|k| url.contains(k.as_str()))
    }

    /// Returns the number of configured keywords
    pub fn len(&self) -> usize {
        self.keywords.len()
    }

    /// Returns whether the keyword set is empty
    pub fn is_empty(&self) -> bool {
        self.keywords.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_matching_keyword() {
        let filter = KeywordFilter::new(["cyber", "ransomware"]);
        assert!(filter.is_relevant("https://example.com/cyber-incident"));
    }

    #[test]
    fn test_no_matching_keyword() {
        let filter = KeywordFilter::new(["cyber", "ransomware"]);
        assert!(!filter.is_relevant("https://example.com/sports/results"));
    }

    #[test]
    fn test_case_insensitive_url() {
        let filter = KeywordFilter::new(["ransomware"]);
        assert!(filter.is_relevant("https://example.com/RANSOMWARE-report"));
    }

    #[test]
    fn test_case_insensitive_keyword() {
        let filter = KeywordFilter::new(["Data-Breach"]);
        assert!(filter.is_relevant("https://example.com/data-breach/2026"));
    }

    #[test]
    fn test_any_of_multiple_keywords() {
        let filter = KeywordFilter::new(["phishing", "malware", "zero-day"]);
        assert!(filter.is_relevant("https://example.com/zero-day-advisory"));
        assert!(!filter.is_relevant("https://example.com/weather"));
    }

    #[test]
    fn test_keyword_in_query_string() {
        let filter = KeywordFilter::new(["cyber"]);
        assert!(filter.is_relevant("https://example.com/search?q=cybersecurity"));
    }

    #[test]
    fn test_empty_keyword_set_matches_nothing() {
        let filter = KeywordFilter::new(Vec::<String>::new());
        assert!(filter.is_empty());
        assert!(!filter.is_relevant("https://example.com/cyber"));
    }

    // Multi-word keywords match literally against the URL string; spaces
    // essentially never appear in URLs, and that behavior is intentional.
    #[test]
    fn test_multi_word_keyword_is_literal() {
        let filter = KeywordFilter::new(["data breach"]);
        assert!(!filter.is_relevant("https://example.com/data-breach"));
        assert!(filter.is_relevant("https://example.com/data breach"));
    }
}
