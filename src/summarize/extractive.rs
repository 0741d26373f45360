//! Term-frequency extractive summarizer
//!
//! The heading is built from the most frequent content terms; the summary is
//! the highest-scoring sentences, kept in document order. No model, no
//! network, deterministic for a given input.

use crate::summarize::{Summarizer, Summary, SummarizeError};
use std::collections::HashMap;

/// Words too common to say anything about the topic
const STOPWORDS: &[&str] = &[
    "about", "after", "also", "been", "before", "being", "both", "could", "did", "does", "from",
    "have", "having", "into", "more", "most", "much", "other", "over", "said", "same", "some",
    "such", "than", "that", "their", "them", "then", "there", "these", "they", "this", "those",
    "under", "very", "were", "what", "when", "where", "which", "while", "will", "with", "would",
    "your",
];

/// Minimum character length for a token to count as a content term
const MIN_TERM_LEN: usize = 4;

/// Frequency-based extractive summarizer
#[derive(Debug, Clone)]
pub struct ExtractiveSummarizer {
    /// Number of sentences in the summary body
    sentences: usize,
    /// Number of top terms in the heading
    heading_terms: usize,
}

impl Default for ExtractiveSummarizer {
    fn default() -> Self {
        Self {
            sentences: 2,
            heading_terms: 3,
        }
    }
}

impl ExtractiveSummarizer {
    pub fn new(sentences: usize, heading_terms: usize) -> Self {
        Self {
            sentences: sentences.max(1),
            heading_terms: heading_terms.max(1),
        }
    }
}

impl Summarizer for ExtractiveSummarizer {
    fn summarize(&self, text: &str) -> Result<Summary, SummarizeError> {
        let text = text.trim();
        if text.is_empty() {
            return Err(SummarizeError::EmptyText);
        }

        let sentences = split_sentences(text);
        if sentences.is_empty() {
            return Err(SummarizeError::EmptyText);
        }

        let frequencies = term_frequencies(&sentences);
        if frequencies.is_empty() {
            // Nothing but stopwords and short tokens.
            return Err(SummarizeError::TooShort);
        }

        let heading = build_heading(&frequencies, self.heading_terms);
        let body = pick_sentences(&sentences, &frequencies, self.sentences);

        Ok(Summary { heading, body })
    }
}

/// Splits text into trimmed sentences on `.`, `!` and `?`
fn split_sentences(text: &str) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();

    for c in text.chars() {
        current.push(c);
        if c == '.' || c == '!' || c == '?' {
            let sentence = current.trim();
            if sentence.chars().any(char::is_alphanumeric) {
                sentences.push(sentence.to_string());
            }
            current.clear();
        }
    }

    // Text without terminal punctuation still forms a sentence.
    let tail = current.trim();
    if tail.chars().any(char::is_alphanumeric) {
        sentences.push(tail.to_string());
    }

    sentences
}

/// Counts content terms across all sentences
fn term_frequencies(sentences: &[String]) -> HashMap<String, usize> {
    let mut frequencies = HashMap::new();

    for sentence in sentences {
        for term in content_terms(sentence) {
            *frequencies.entry(term).or_insert(0) += 1;
        }
    }

    frequencies
}

/// Lowercased content terms of one sentence
fn content_terms(sentence: &str) -> impl Iterator<Item = String> + '_ {
    sentence
        .split_whitespace()
        .map(|word| {
            word.trim_matches(|c: char| !c.is_alphanumeric())
                .to_lowercase()
        })
        .filter(|term| term.len() >= MIN_TERM_LEN && !STOPWORDS.contains(&term.as_str()))
}

/// Joins the most frequent terms into a title-cased heading
fn build_heading(frequencies: &HashMap<String, usize>, count: usize) -> String {
    let mut terms: Vec<(&String, &usize)> = frequencies.iter().collect();
    // Frequency descending, then alphabetical for a stable heading.
    terms.sort_by(|a, b| b.1.cmp(a.1).then_with(|| a.0.cmp(b.0)));

    terms
        .into_iter()
        .take(count)
        .map(|(term, _)| title_case(term))
        .collect::<Vec<_>>()
        .join(" ")
}

fn title_case(term: &str) -> String {
    let mut chars = term.chars();
    match chars.next() {
        Some(first) => first.to_uppercase().chain(chars).collect(),
        None => String::new(),
    }
}

/// Picks the highest-scoring sentences, restoring document order
fn pick_sentences(
    sentences: &[String],
    frequencies: &HashMap<String, usize>,
    count: usize,
) -> String {
    let mut scored: Vec<(usize, usize)> = sentences
        .iter()
        .enumerate()
        .map(|(index, sentence)| {
            let score = content_terms(sentence)
                .map(|term| frequencies.get(&term).copied().unwrap_or(0))
                .sum();
            (index, score)
        })
        .collect();

    // Score descending; earlier sentence wins ties.
    scored.sort_by(|a, b| b.1.cmp(&a.1).then_with(|| a.0.cmp(&b.0)));

    let mut picked: Vec<usize> = scored.into_iter().take(count).map(|(i, _)| i).collect();
    picked.sort_unstable();

    picked
        .into_iter()
        .map(|i| sentences[i].as_str())
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn summarizer() -> ExtractiveSummarizer {
        ExtractiveSummarizer::default()
    }

    #[test]
    fn test_empty_text_rejected() {
        assert!(matches!(
            summarizer().summarize("").unwrap_err(),
            SummarizeError::EmptyText
        ));
        assert!(matches!(
            summarizer().summarize("   \n  ").unwrap_err(),
            SummarizeError::EmptyText
        ));
    }

    #[test]
    fn test_text_without_content_terms_rejected() {
        assert!(matches!(
            summarizer().summarize("a an of to it is.").unwrap_err(),
            SummarizeError::TooShort
        ));
    }

    #[test]
    fn test_summary_has_at_most_two_sentences() {
        let text = "Ransomware attacks surged last quarter. Hospitals reported ransomware \
                    incidents weekly. The weather was mild. Ransomware payments doubled again.";
        let summary = summarizer().summarize(text).unwrap();

        let sentence_count = summary.body.matches('.').count();
        assert!(sentence_count <= 2, "body: {}", summary.body);
    }

    #[test]
    fn test_summary_sentences_come_from_input() {
        let text = "Ransomware attacks surged last quarter. Hospitals reported ransomware \
                    incidents weekly. The weather was mild.";
        let summary = summarizer().summarize(text).unwrap();

        for sentence in split_sentences(&summary.body) {
            assert!(text.contains(&sentence), "fabricated sentence: {}", sentence);
        }
    }

    #[test]
    fn test_summary_keeps_document_order() {
        let text = "Ransomware attacks surged in March. Hospitals reported ransomware weekly. \
                    Nothing else happened.";
        let summary = summarizer().summarize(text).unwrap();

        let first = summary.body.find("Ransomware attacks surged").unwrap();
        let second = summary.body.find("Hospitals reported").unwrap();
        assert!(first < second);
    }

    #[test]
    fn test_heading_reflects_frequent_terms() {
        let text = "Ransomware spread quickly. Ransomware encrypted the servers. \
                    Ransomware operators demanded payment.";
        let summary = summarizer().summarize(text).unwrap();

        assert!(summary.heading.contains("Ransomware"), "{}", summary.heading);
    }

    #[test]
    fn test_heading_is_title_cased() {
        let text = "breach breach breach detected today.";
        let summary = summarizer().summarize(text).unwrap();
        assert!(summary.heading.starts_with("Breach"));
    }

    #[test]
    fn test_single_sentence_text() {
        let text = "Attackers exploited the vulnerability within hours";
        let summary = summarizer().summarize(text).unwrap();
        assert_eq!(summary.body, text);
    }

    #[test]
    fn test_punctuation_stripped_from_terms() {
        let text = "Malware, malware... malware! It was everywhere today.";
        let summary = summarizer().summarize(text).unwrap();
        assert!(summary.heading.contains("Malware"));
    }

    #[test]
    fn test_split_sentences() {
        let sentences = split_sentences("One here. Two there! Three somewhere? Four");
        assert_eq!(
            sentences,
            vec!["One here.", "Two there!", "Three somewhere?", "Four"]
        );
    }

    #[test]
    fn test_custom_sentence_count() {
        let text = "Alpha incident reported. Alpha spread further. Alpha contained late. \
                    Alpha resolved fully.";
        let summary = ExtractiveSummarizer::new(3, 2).summarize(text).unwrap();
        assert_eq!(split_sentences(&summary.body).len(), 3);
    }
}
