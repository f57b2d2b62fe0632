//! Word-level splitter for normalized condition text
//!
//! Input is expected upper-cased with any leading label such as
//! `PREREQUISITE:` already removed (see [`crate::condition::normalize`]).

use once_cell::sync::Lazy;
use regex::Regex;
use std::fmt;

/// Four-letter discipline followed by four digits, or four digits alone
static COURSE_CODE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:[A-Z]{4})?[0-9]{4}$").expect("valid course code pattern"));

/// Atomic piece of a condition string
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Token {
    /// Course code such as `COMP1511` or `1511`
    Course(String),
    /// Literal `AND`
    And,
    /// Contents of a bracketed clause, outer parentheses removed
    Group(String),
    /// Units-of-credit clause, e.g. `12 UNITS OF CREDIT IN COMP`
    Uoc(String),
}

impl Token {
    pub fn as_str(&self) -> &str {
        match self {
            Token::Course(s) | Token::Group(s) | Token::Uoc(s) => s,
            Token::And => "AND",
        }
    }
}

impl fmt::Display for Token {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Check whether a string is a course code
pub fn is_course_code(s: &str) -> bool {
    COURSE_CODE.is_match(s)
}

/// Split normalized condition text into tokens
///
/// `OR` is dropped: consecutive tokens with no `AND` between them are
/// alternatives of the same group.
pub fn split(text: &str) -> Vec<Token> {
    let words: Vec<&str> = text.split_whitespace().collect();
    let mut tokens = Vec::new();
    let mut start = 0;

    while start < words.len() {
        let mut end = start + 1;
        loop {
            let current = join_clean(&words[start..end]);

            if current.contains("UNITS") {
                while end < words.len() && !is_connective(words[end]) {
                    end += 1;
                }
                tokens.push(Token::Uoc(join_clean(&words[start..end])));
                break;
            } else if current.contains('(') {
                while end < words.len() && !is_balanced(&words[start..end]) {
                    end += 1;
                }
                let clause = join_clean(&words[start..end]);
                match unwrap_brackets(&clause) {
                    Some(inner) => tokens.push(Token::Group(inner.to_string())),
                    None => log::debug!("dropping unrecognized clause: {}", clause),
                }
                break;
            } else if current == "AND" {
                tokens.push(Token::And);
                break;
            } else if is_course_code(&current) {
                tokens.push(Token::Course(current));
                break;
            } else if current == "OR" {
                break;
            } else if end < words.len() {
                end += 1;
            } else {
                log::debug!("dropping unrecognized text: {}", current);
                break;
            }
        }
        start = end;
    }

    tokens
}

fn join_clean(words: &[&str]) -> String {
    clean(&words.join(" ")).to_string()
}

fn clean(s: &str) -> &str {
    s.trim_matches(|c| c == ' ' || c == '.' || c == ',')
}

fn is_connective(word: &str) -> bool {
    word == "OR" || word == "AND"
}

fn is_balanced(words: &[&str]) -> bool {
    let open: usize = words.iter().map(|w| w.matches('(').count()).sum();
    let close: usize = words.iter().map(|w| w.matches(')').count()).sum();
    open == close
}

/// Strip the outer brackets of a clause. Clauses with text before the
/// opening bracket are not groups.
fn unwrap_brackets(clause: &str) -> Option<&str> {
    let inner = clause.strip_prefix('(')?;
    Some(inner.strip_suffix(')').unwrap_or(inner).trim())
}
