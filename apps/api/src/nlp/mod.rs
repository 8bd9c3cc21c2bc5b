// Text analysis: tokenizer, noun-phrase keyword extraction, phrase matching.
// Everything here is pure and allocation-only; no models are loaded.

pub mod keywords;
pub mod lexicon;
pub mod matcher;
pub mod tokenizer;
