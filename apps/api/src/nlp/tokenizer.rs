//! Word tokenizer shared by the keyword extractor and the phrase matcher.
//!
//! Both sides of a match must agree on where tokens start and end, otherwise a
//! JD phrase can never line up with the same words in a resume.

/// Coarse lexical class of a token.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TokenKind {
    Word,
    Number,
    Punct,
}

/// A lower-cased token. `text` is always non-empty and never contains whitespace.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Token {
    pub text: String,
    pub kind: TokenKind,
}

impl Token {
    fn new(text: String) -> Self {
        let kind = if text.chars().any(|c| c.is_ascii_digit())
            && text.chars().all(|c| c.is_ascii_digit() || c == '.' || c == ',')
        {
            TokenKind::Number
        } else if text.chars().any(char::is_alphanumeric) {
            TokenKind::Word
        } else {
            TokenKind::Punct
        };
        Self { text, kind }
    }

    pub fn is_punct(&self) -> bool {
        self.kind == TokenKind::Punct
    }
}

/// Characters that stay inside a token only when flanked by alphanumerics
/// (`node.js`, `front-end`, `o'neil`).
fn is_joiner(c: char) -> bool {
    matches!(c, '.' | '-' | '\'' | '/' | '’')
}

/// Characters that extend a token wherever they appear (`c++`, `c#`).
fn is_word_suffix(c: char) -> bool {
    matches!(c, '+' | '#')
}

/// Splits `text` into lower-cased tokens.
///
/// Runs of alphanumerics form words; `+` and `#` attach to the preceding word;
/// `.`, `-`, `'` and `/` are kept inside a word only between two alphanumerics.
/// Every other non-whitespace character becomes its own punctuation token.
pub fn tokenize(text: &str) -> Vec<Token> {
    let lowered = text.to_lowercase();
    let chars: Vec<char> = lowered.chars().collect();
    let mut tokens = Vec::new();
    let mut current = String::new();

    let flush = |current: &mut String, tokens: &mut Vec<Token>| {
        if !current.is_empty() {
            tokens.push(Token::new(std::mem::take(current)));
        }
    };

    for (i, &c) in chars.iter().enumerate() {
        if c.is_alphanumeric() {
            current.push(c);
        } else if is_word_suffix(c) && !current.is_empty() {
            current.push(c);
        } else if is_joiner(c)
            && current.chars().last().is_some_and(char::is_alphanumeric)
            && chars.get(i + 1).is_some_and(|n| n.is_alphanumeric())
        {
            current.push(c);
        } else {
            flush(&mut current, &mut tokens);
            if !c.is_whitespace() {
                tokens.push(Token::new(c.to_string()));
            }
        }
    }
    flush(&mut current, &mut tokens);

    tokens
}
