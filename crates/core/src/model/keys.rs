use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Separator placed between the two components of an encoded key.
pub const KEY_SEPARATOR: &str = "::";

/// Error type for parsing an encoded key from string
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[non_exhaustive]
pub enum KeyParseError {
    #[error("{kind} key is missing the `::` separator: {raw}")]
    MissingSeparator { kind: &'static str, raw: String },
    #[error("{kind} key ends with a dangling escape: {raw}")]
    DanglingEscape { kind: &'static str, raw: String },
}

/// Key for a private note: the section title plus the item title.
///
/// The on-disk form is `"{section}::{item}"`. Backslashes and any colon that
/// could join a `::` are escaped, so `("a::b", "c")` and `("a", "b::c")` stay
/// distinct while `Module 1: Introduction` is written as-is.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct NoteKey {
    section: String,
    item: String,
}

impl NoteKey {
    #[must_use]
    pub fn new(section: impl Into<String>, item: impl Into<String>) -> Self {
        Self {
            section: section.into(),
            item: item.into(),
        }
    }

    #[must_use]
    pub fn section(&self) -> &str {
        &self.section
    }

    #[must_use]
    pub fn item(&self) -> &str {
        &self.item
    }

    /// Encoded form used as the JSON object key.
    #[must_use]
    pub fn encode(&self) -> String {
        encode_pair(&self.section, &self.item)
    }
}

/// Key for an assignment submission: the subject plus the assignment title.
#[derive(Clone, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
pub struct AssignmentKey {
    subject: String,
    assignment: String,
}

impl AssignmentKey {
    #[must_use]
    pub fn new(subject: impl Into<String>, assignment: impl Into<String>) -> Self {
        Self {
            subject: subject.into(),
            assignment: assignment.into(),
        }
    }

    #[must_use]
    pub fn subject(&self) -> &str {
        &self.subject
    }

    #[must_use]
    pub fn assignment(&self) -> &str {
        &self.assignment
    }

    /// Encoded form used as the JSON object key.
    #[must_use]
    pub fn encode(&self) -> String {
        encode_pair(&self.subject, &self.assignment)
    }
}

// ─── Display / Debug ───────────────────────────────────────────────────────────

impl fmt::Debug for NoteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "NoteKey({:?}, {:?})", self.section, self.item)
    }
}

impl fmt::Debug for AssignmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "AssignmentKey({:?}, {:?})", self.subject, self.assignment)
    }
}

impl fmt::Display for NoteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

impl fmt::Display for AssignmentKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.encode())
    }
}

// ─── FromStr ───────────────────────────────────────────────────────────────────

impl FromStr for NoteKey {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (section, item) = decode_pair("note", s)?;
        Ok(Self { section, item })
    }
}

impl FromStr for AssignmentKey {
    type Err = KeyParseError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let (subject, assignment) = decode_pair("assignment", s)?;
        Ok(Self {
            subject,
            assignment,
        })
    }
}

// ─── Encoding helpers ──────────────────────────────────────────────────────────

/// Escapes `\` always, and `:` only at either end of the component or next to
/// another `:`. A lone interior `:` stays literal.
fn escape_component(raw: &str, out: &mut String) {
    let chars: Vec<char> = raw.chars().collect();
    for (i, &ch) in chars.iter().enumerate() {
        let ambiguous_colon = ch == ':'
            && (i == 0
                || i + 1 == chars.len()
                || chars[i - 1] == ':'
                || chars[i + 1] == ':');
        if ch == '\\' || ambiguous_colon {
            out.push('\\');
        }
        out.push(ch);
    }
}

fn encode_pair(first: &str, second: &str) -> String {
    let mut out = String::with_capacity(first.len() + second.len() + KEY_SEPARATOR.len());
    escape_component(first, &mut out);
    out.push_str(KEY_SEPARATOR);
    escape_component(second, &mut out);
    out
}

/// Splits at the first unescaped `::`.
///
/// A lone unescaped `:` is kept literally so keys written without escaping
/// (e.g. `Modules::Module 1: Introduction`) still load.
fn decode_pair(kind: &'static str, raw: &str) -> Result<(String, String), KeyParseError> {
    let mut first = String::new();
    let mut second = String::new();
    let mut split = false;
    let mut chars = raw.chars().peekable();

    while let Some(ch) = chars.next() {
        let target = if split { &mut second } else { &mut first };
        match ch {
            '\\' => match chars.next() {
                Some(escaped) => target.push(escaped),
                None => {
                    return Err(KeyParseError::DanglingEscape {
                        kind,
                        raw: raw.to_string(),
                    });
                }
            },
            ':' if !split && chars.peek() == Some(&':') => {
                chars.next();
                split = true;
            }
            other => target.push(other),
        }
    }

    if !split {
        return Err(KeyParseError::MissingSeparator {
            kind,
            raw: raw.to_string(),
        });
    }
    Ok((first, second))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn note_key_plain_encoding_matches_legacy_format() {
        let key = NoteKey::new("Modules", "Module 3 Practice");
        assert_eq!(key.encode(), "Modules::Module 3 Practice");
    }

    #[test]
    fn interior_colon_is_written_as_is() {
        let key = NoteKey::new("Modules", "Module 1: Introduction");
        assert_eq!(key.encode(), "Modules::Module 1: Introduction");
        let parsed: NoteKey = key.encode().parse().unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn edge_and_doubled_colons_are_escaped() {
        let key = NoteKey::new("ends with:", ":starts");
        assert_eq!(key.encode(), r"ends with\:::\:starts");
        let parsed: NoteKey = key.encode().parse().unwrap();
        assert_eq!(parsed, key);

        let doubled = AssignmentKey::new("a::b", "c");
        assert_eq!(doubled.encode(), r"a\:\:b::c");
    }

    #[test]
    fn every_catalog_key_encodes_without_escapes() {
        for section in crate::model::curriculum::SECTIONS.iter() {
            for item in section.items {
                let encoded = section.note_key(item).encode();
                assert!(!encoded.contains('\\'), "escaped: {encoded}");
                assert_eq!(encoded.parse::<NoteKey>().unwrap(), section.note_key(item));
            }
        }
    }

    #[test]
    fn legacy_key_with_single_colon_parses() {
        let parsed: NoteKey = "Modules::Module 1: Introduction".parse().unwrap();
        assert_eq!(parsed.section(), "Modules");
        assert_eq!(parsed.item(), "Module 1: Introduction");
    }

    #[test]
    fn separator_inside_components_does_not_collide() {
        let left = AssignmentKey::new("a::b", "c");
        let right = AssignmentKey::new("a", "b::c");
        assert_ne!(left.encode(), right.encode());

        let left_back: AssignmentKey = left.encode().parse().unwrap();
        let right_back: AssignmentKey = right.encode().parse().unwrap();
        assert_eq!(left_back, left);
        assert_eq!(right_back, right);
    }

    #[test]
    fn backslashes_survive_encoding() {
        let key = AssignmentKey::new(r"C:\subject", r"end\");
        let parsed: AssignmentKey = key.encode().parse().unwrap();
        assert_eq!(parsed, key);
    }

    #[test]
    fn missing_separator_is_rejected() {
        let err = "no separator here".parse::<NoteKey>().unwrap_err();
        assert!(matches!(err, KeyParseError::MissingSeparator { .. }));
    }

    #[test]
    fn dangling_escape_is_rejected() {
        let err = r"a::b\".parse::<AssignmentKey>().unwrap_err();
        assert!(matches!(err, KeyParseError::DanglingEscape { .. }));
    }

    #[test]
    fn empty_components_are_allowed() {
        let parsed: NoteKey = "::".parse().unwrap();
        assert_eq!(parsed, NoteKey::new("", ""));
    }
}
