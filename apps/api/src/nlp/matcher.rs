//! Whole-phrase skill matching over tokenized resume text.
//!
//! The automaton is built once per screening run from the JD phrases and
//! shared read-only across all resume tasks.

use std::collections::BTreeSet;

use aho_corasick::AhoCorasick;
use anyhow::{Context, Result};

use crate::nlp::keywords::SkillPhraseSet;
use crate::nlp::tokenizer::tokenize;

/// Multi-pattern phrase matcher. Patterns and haystack are both token streams
/// joined by single spaces and padded with a space on each side, so a match
/// can only begin and end on a token boundary.
#[derive(Debug, Clone)]
pub struct PhraseMatcher {
    automaton: Option<AhoCorasick>,
    phrases: Vec<String>,
}

impl PhraseMatcher {
    pub fn new(skills: &SkillPhraseSet) -> Result<Self> {
        let phrases: Vec<String> = skills
            .iter()
            .map(normalize_phrase)
            .filter(|p| !p.is_empty())
            .collect();

        if phrases.is_empty() {
            return Ok(Self {
                automaton: None,
                phrases,
            });
        }

        let patterns: Vec<String> = phrases.iter().map(|p| format!(" {p} ")).collect();
        let automaton = AhoCorasick::new(&patterns).context("Failed to build phrase matcher")?;

        Ok(Self {
            automaton: Some(automaton),
            phrases,
        })
    }

    pub fn pattern_count(&self) -> usize {
        self.phrases.len()
    }

    /// Returns every phrase found in `resume_text`, deduplicated and sorted.
    pub fn find(&self, resume_text: &str) -> Vec<String> {
        let Some(automaton) = &self.automaton else {
            return Vec::new();
        };

        let haystack = padded_stream(resume_text);
        let found: BTreeSet<&str> = automaton
            .find_overlapping_iter(&haystack)
            .map(|m| self.phrases[m.pattern().as_usize()].as_str())
            .collect();

        found.into_iter().map(String::from).collect()
    }
}

/// Matches `skills` against `resume_text` with a one-off matcher.
#[allow(dead_code)] // screening builds one PhraseMatcher per request instead
pub fn match_skills(resume_text: &str, skills: &SkillPhraseSet) -> Result<Vec<String>> {
    Ok(PhraseMatcher::new(skills)?.find(resume_text))
}

fn normalize_phrase(phrase: &str) -> String {
    tokenize(phrase)
        .into_iter()
        .map(|t| t.text)
        .collect::<Vec<_>>()
        .join(" ")
}

fn padded_stream(text: &str) -> String {
    let tokens = tokenize(text);
    let mut stream = String::with_capacity(text.len() + 2);
    stream.push(' ');
    for token in &tokens {
        stream.push_str(&token.text);
        stream.push(' ');
    }
    stream
}

#[cfg(test)]
mod tests {
    use super::*;

    fn skills(phrases: &[&str]) -> SkillPhraseSet {
        phrases.iter().copied().collect()
    }

    #[test]
    fn test_case_insensitive_whole_phrase_match() {
        let found = match_skills(
            "Senior PYTHON Developer with Machine Learning background",
            &skills(&["python developer", "machine learning"]),
        )
        .unwrap();
        assert_eq!(found, vec!["machine learning", "python developer"]);
    }

    #[test]
    fn test_no_match_inside_longer_word() {
        let found = match_skills(
            "Ten years of management consulting",
            &skills(&["manager", "consult"]),
        )
        .unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_repeated_occurrences_count_once() {
        let found = match_skills("rust, Rust and more rust", &skills(&["rust"])).unwrap();
        assert_eq!(found, vec!["rust"]);
    }

    #[test]
    fn test_adjacent_and_overlapping_phrases_all_found() {
        let found = match_skills(
            "distributed systems programming",
            &skills(&["distributed systems", "systems programming", "systems"]),
        )
        .unwrap();
        assert_eq!(
            found,
            vec!["distributed systems", "systems", "systems programming"]
        );
    }

    #[test]
    fn test_punctuation_blocks_phrase() {
        let found = match_skills("python. developer", &skills(&["python developer"])).unwrap();
        assert!(found.is_empty());
    }

    #[test]
    fn test_result_is_subset_of_candidates_and_sorted() {
        let set = skills(&["kafka", "go", "aws", "c++"]);
        let found = match_skills("Go, C++, AWS, AWS, Kafka", &set).unwrap();
        assert!(found.iter().all(|p| set.contains(p)));
        let mut sorted = found.clone();
        sorted.sort();
        sorted.dedup();
        assert_eq!(found, sorted);
        assert_eq!(found.len(), 4);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(match_skills("anything", &SkillPhraseSet::new()).unwrap().is_empty());
        assert!(match_skills("", &skills(&["rust"])).unwrap().is_empty());
    }
}
