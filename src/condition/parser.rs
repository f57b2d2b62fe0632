//! Condition string parser

use crate::condition::ast::{Atom, Condition, OrGroup, UocRequirement};
use crate::condition::splitter::{split, Token};
use crate::config::UNITS_PER_COURSE;
use crate::error::{PrereqError, Result};

/// Upper-case the text and drop any leading label up to the first colon
pub fn normalize(text: &str) -> String {
    let upper = text.to_uppercase();
    match upper.find(':') {
        Some(pos) => upper[pos + 1..].to_string(),
        None => upper,
    }
}

/// Parse a condition string into a [`Condition`]
///
/// Text the splitter does not recognize is skipped, so parsing never fails.
pub fn parse(text: &str) -> Condition {
    let normalized = normalize(text);

    let mut groups = Vec::new();
    let mut current = OrGroup::new();

    for token in split(&normalized) {
        match token {
            Token::And => groups.push(std::mem::take(&mut current)),
            Token::Course(code) => current.push(Atom::CourseRef(code)),
            Token::Group(inner) => current.push(Atom::Nested(parse(&inner))),
            Token::Uoc(clause) => match parse_uoc(&clause) {
                Ok(req) => current.push(Atom::UocRequirement(req)),
                Err(e) => log::warn!("skipping clause: {}", e),
            },
        }
    }

    if !current.is_empty() {
        groups.push(current);
    }

    Condition::new(groups)
}

/// Parse a units-of-credit clause such as `24 UNITS IN LEVEL 2 COMP COURSES`
pub fn parse_uoc(clause: &str) -> Result<UocRequirement> {
    let words: Vec<&str> = clause.split_whitespace().collect();
    let invalid = || PrereqError::InvalidUocClause(clause.to_string());

    let units_idx = words
        .iter()
        .position(|w| strip_list_punctuation(w) == "UNITS")
        .ok_or_else(invalid)?;
    let units: u32 = units_idx
        .checked_sub(1)
        .and_then(|i| words[i].parse().ok())
        .ok_or_else(invalid)?;

    let filters = if let Some(level_idx) = words.iter().position(|w| *w == "LEVEL") {
        let level = words.get(level_idx + 1).map(|w| strip_list_punctuation(w));
        let discipline = words.get(level_idx + 2).map(|w| strip_list_punctuation(w));
        match (level, discipline) {
            (Some(level), Some(discipline)) => vec![format!("{}{}", discipline, level)],
            _ => return Err(invalid()),
        }
    } else if let Some(in_idx) = words.iter().position(|w| *w == "IN") {
        let rest = &words[in_idx + 1..];
        match rest.first().map(|w| strip_list_punctuation(w)) {
            Some(first) if is_discipline(first) => vec![first.to_string()],
            _ => rest
                .iter()
                .map(|w| strip_list_punctuation(w))
                .filter(|w| !w.is_empty())
                .map(str::to_string)
                .collect(),
        }
    } else {
        vec![String::new()]
    };

    Ok(UocRequirement {
        courses: units / UNITS_PER_COURSE,
        filters,
    })
}

fn strip_list_punctuation(word: &str) -> &str {
    word.trim_matches(|c| matches!(c, '(' | ')' | ' ' | '.' | ','))
}

/// Four-letter subject prefix such as `COMP`
fn is_discipline(word: &str) -> bool {
    word.len() == 4 && word.chars().all(|c| c.is_ascii_alphabetic())
}
