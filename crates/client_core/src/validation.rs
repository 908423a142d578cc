//! Mode-specific grammars for the two textual input encodings.
//!
//! All checks are line-oriented: the text is split into trimmed non-blank
//! lines, the first offending line wins, and an all-blank input is valid.

use shared::domain::{InputMode, Relation};

/// Result of checking raw input text against its mode's grammar.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValidationOutcome {
    message: Option<String>,
}

impl ValidationOutcome {
    pub fn ok() -> Self {
        Self { message: None }
    }

    pub fn fail(message: impl Into<String>) -> Self {
        Self {
            message: Some(message.into()),
        }
    }

    pub fn is_valid(&self) -> bool {
        self.message.is_none()
    }

    /// The inline error message gating the Draw/Solve triggers, if any.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

fn non_blank_lines(text: &str) -> impl Iterator<Item = &str> {
    text.lines().map(str::trim).filter(|line| !line.is_empty())
}

/// Checks `text` against the grammar for `mode` with the declared `size`.
pub fn validate(mode: InputMode, size: usize, text: &str) -> ValidationOutcome {
    let offending = match mode {
        InputMode::LinearOrders => {
            non_blank_lines(text).find_map(|line| check_linear_order_line(line, size))
        }
        InputMode::Poset => {
            non_blank_lines(text).find_map(|line| check_cover_relation_line(line, size))
        }
    };

    match offending {
        Some(message) => ValidationOutcome::fail(message),
        None => ValidationOutcome::ok(),
    }
}

fn check_linear_order_line(line: &str, size: usize) -> Option<String> {
    if line.chars().count() != size {
        return Some(format!(
            "'{line}' does not match specified length {size}"
        ));
    }

    let mut symbols: Vec<char> = line.chars().collect();
    symbols.sort_unstable();
    let expected: Vec<char> = ('1'..='9').take(size).collect();
    if symbols != expected {
        let alphabet: String = expected.iter().collect();
        return Some(format!(
            "'{line}' must use each of the symbols {alphabet} exactly once"
        ));
    }

    None
}

fn check_cover_relation_line(line: &str, size: usize) -> Option<String> {
    let Some(relation) = parse_relation_line(line) else {
        return Some(format!(
            "'{line}' must be two comma-separated integers, each at least 1"
        ));
    };

    let needed = relation.max_index();
    if needed > size as i64 {
        return Some(format!(
            "'{line}' refers to element {needed}; size must be at least {needed}"
        ));
    }

    None
}

fn parse_relation_line(line: &str) -> Option<Relation> {
    let mut parts = line.split(',');
    let a = parts.next()?.trim().parse::<i64>().ok()?;
    let b = parts.next()?.trim().parse::<i64>().ok()?;
    if parts.next().is_some() || a < 1 || b < 1 {
        return None;
    }
    Some(Relation(a, b))
}

/// The trimmed non-blank lines, as the Linear Orders request items.
pub fn parse_linear_orders(text: &str) -> Vec<String> {
    non_blank_lines(text).map(str::to_owned).collect()
}

/// Parses every non-blank line as a cover relation. The error is the inline
/// message for the first line that fails the relation grammar.
pub fn parse_cover_relations(text: &str) -> Result<Vec<Relation>, String> {
    non_blank_lines(text)
        .map(|line| {
            parse_relation_line(line).ok_or_else(|| {
                format!("'{line}' must be two comma-separated integers, each at least 1")
            })
        })
        .collect()
}

/// Size to adopt when a Linear Orders input loses focus: the length of the
/// first non-blank line, if any.
pub fn synced_size_for_linear_orders(text: &str) -> Option<usize> {
    non_blank_lines(text).next().map(|line| line.chars().count())
}

/// Size to adopt when a Poset input loses focus. Grow-only: raised to the
/// largest referenced element index, never shrunk below `current`.
pub fn synced_size_for_poset(current: usize, text: &str) -> usize {
    non_blank_lines(text)
        .filter_map(parse_relation_line)
        .map(|relation| relation.max_index() as usize)
        .max()
        .filter(|largest| *largest > current)
        .unwrap_or(current)
}

#[cfg(test)]
#[path = "tests/validation_tests.rs"]
mod tests;
