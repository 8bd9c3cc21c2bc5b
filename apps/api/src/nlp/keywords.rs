//! Keyword phrase extraction: rule-based noun-phrase chunking over a job description.

use serde::Serialize;

use crate::nlp::lexicon::{
    self, ADVERBS, CONJUNCTIONS, DETERMINERS, LY_NOUNS, PREPOSITIONS, PRONOUNS, VERBS,
    VERB_NOUNS, WEAK_MODIFIERS,
};
use crate::nlp::tokenizer::{tokenize, Token, TokenKind};

/// Phrases longer than this are treated as sentences, not skills.
pub const MAX_PHRASE_TOKENS: usize = 3;

/// Deduplicated set of lower-cased skill phrases, kept in first-seen order so
/// output is reproducible for identical job descriptions.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct SkillPhraseSet(Vec<String>);

impl SkillPhraseSet {
    pub fn new() -> Self {
        Self::default()
    }

    /// Normalizes and inserts a phrase. Returns `false` for blanks and duplicates.
    pub fn insert(&mut self, phrase: &str) -> bool {
        let phrase = phrase.trim().to_lowercase();
        if phrase.is_empty() || self.0.contains(&phrase) {
            return false;
        }
        self.0.push(phrase);
        true
    }

    #[cfg(test)]
    pub fn contains(&self, phrase: &str) -> bool {
        self.0.iter().any(|p| p == phrase)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }
}

impl<'a> FromIterator<&'a str> for SkillPhraseSet {
    fn from_iter<I: IntoIterator<Item = &'a str>>(iter: I) -> Self {
        let mut set = Self::new();
        for phrase in iter {
            set.insert(phrase);
        }
        set
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
enum Role {
    Nominal,
    Boundary,
}

fn is_function_word(word: &str) -> bool {
    [DETERMINERS, PRONOUNS, PREPOSITIONS, CONJUNCTIONS, VERBS, ADVERBS]
        .iter()
        .any(|list| lexicon::contains(list, word))
}

fn is_adverb_form(word: &str) -> bool {
    word.len() > 4 && word.ends_with("ly") && !lexicon::contains(LY_NOUNS, word)
}

fn introduces_phrase(word: &str) -> bool {
    lexicon::contains(PREPOSITIONS, word) || lexicon::contains(DETERMINERS, word)
}

/// Words after which a verb/noun word reads as a verb ("we build", "will lead", "and design").
fn expects_verb(word: &str) -> bool {
    word == "to"
        || lexicon::contains(PRONOUNS, word)
        || lexicon::contains(VERBS, word)
        || lexicon::contains(CONJUNCTIONS, word)
}

fn classify(tokens: &[Token]) -> Vec<Role> {
    let mut roles: Vec<Role> = tokens
        .iter()
        .map(|t| {
            if t.is_punct() || is_function_word(&t.text) || is_adverb_form(&t.text) {
                Role::Boundary
            } else {
                Role::Nominal
            }
        })
        .collect();

    for i in 0..tokens.len() {
        if roles[i] != Role::Nominal {
            continue;
        }
        let starts_chunk = i == 0 || roles[i - 1] == Role::Boundary;
        let text = tokens[i].text.as_str();
        let next = tokens.get(i + 1).map(|t| t.text.as_str());
        let next_introduces = next.is_some_and(introduces_phrase);

        // A lone gerund right before "for"/"the"/... is acting as a verb ("hiring for", "managing the").
        let is_gerund = tokens[i].kind == TokenKind::Word && text.ends_with("ing");
        if starts_chunk && is_gerund && next_introduces {
            roles[i] = Role::Boundary;
            continue;
        }

        if starts_chunk && lexicon::contains(VERB_NOUNS, text) {
            let after_subject = i > 0 && expects_verb(&tokens[i - 1].text);
            let takes_object =
                next_introduces || next.is_some_and(|n| lexicon::contains(PRONOUNS, n));
            if after_subject || takes_object {
                roles[i] = Role::Boundary;
            }
        }
    }

    roles
}

fn keep_chunk(chunk: &[&Token]) -> bool {
    if chunk.is_empty() || chunk.len() > MAX_PHRASE_TOKENS {
        return false;
    }
    if chunk.iter().all(|t| t.kind == TokenKind::Number) {
        return false;
    }
    !(chunk.len() == 1 && lexicon::contains(WEAK_MODIFIERS, &chunk[0].text))
}

/// Extracts candidate skill phrases (1–3 tokens) from a job description.
///
/// Blank input yields an empty set.
pub fn extract_keywords(job_description: &str) -> SkillPhraseSet {
    let tokens = tokenize(job_description);
    let roles = classify(&tokens);

    let mut phrases = SkillPhraseSet::new();
    let mut chunk: Vec<&Token> = Vec::new();

    for (token, role) in tokens.iter().zip(roles.iter()) {
        match role {
            Role::Nominal => chunk.push(token),
            Role::Boundary => {
                if keep_chunk(&chunk) {
                    phrases.insert(&join_tokens(&chunk));
                }
                chunk.clear();
            }
        }
    }
    if keep_chunk(&chunk) {
        phrases.insert(&join_tokens(&chunk));
    }

    phrases
}

fn join_tokens(tokens: &[&Token]) -> String {
    tokens
        .iter()
        .map(|t| t.text.as_str())
        .collect::<Vec<_>>()
        .join(" ")
}
