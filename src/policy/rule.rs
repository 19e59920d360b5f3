use regex::Regex;
use std::fmt;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RuleKind {
    Discipline,
    Literal,
    Regex,
    Exclusion,
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Discipline => f.write_str("discipline"),
            Self::Literal => f.write_str("literal"),
            Self::Regex => f.write_str("regex"),
            Self::Exclusion => f.write_str("exclusion"),
        }
    }
}

/// Parsed body of a policy clause.
#[derive(Debug, Clone)]
pub enum Clause {
    /// Discipline codes, in configuration order, without duplicates.
    Discipline(Vec<String>),
    /// Substring to search for, already lowercased.
    Literal(String),
    Regex(Regex),
    /// Never wraps a discipline or another exclusion.
    Exclusion(Box<PatternRule>),
}

/// One clause of a naming policy together with the text it was parsed from.
#[derive(Debug, Clone)]
pub struct PatternRule {
    pub raw_text: String,
    pub clause: Clause,
}

impl PatternRule {
    #[must_use]
    pub fn kind(&self) -> RuleKind {
        match self.clause {
            Clause::Discipline(_) => RuleKind::Discipline,
            Clause::Literal(_) => RuleKind::Literal,
            Clause::Regex(_) => RuleKind::Regex,
            Clause::Exclusion(_) => RuleKind::Exclusion,
        }
    }

    #[must_use]
    pub fn is_exclusion(&self) -> bool {
        matches!(self.clause, Clause::Exclusion(_))
    }

    /// Whether the clause holds for `name`.
    ///
    /// `folded` must be `name.to_lowercase()`; it is computed once per name by
    /// the caller. For an exclusion this reports whether the inner clause holds,
    /// i.e. whether the exclusion is triggered.
    #[must_use]
    pub fn is_satisfied_by(&self, name: &str, folded: &str) -> bool {
        match &self.clause {
            Clause::Discipline(codes) => codes
                .iter()
                .any(|code| contains_delimited_token(name, code)),
            Clause::Literal(needle) => folded.contains(needle.as_str()),
            Clause::Regex(regex) => regex.is_match(name),
            Clause::Exclusion(inner) => inner.is_satisfied_by(name, folded),
        }
    }
}

/// True if `token` occurs in `name` with `_` or a string boundary on both sides.
///
/// `L01_STR_Plan` contains `STR`; `L01_STRUCT_Plan` does not.
pub(crate) fn contains_delimited_token(name: &str, token: &str) -> bool {
    if token.is_empty() {
        return false;
    }

    let mut start = 0;
    while let Some(pos) = name[start..].find(token) {
        let begin = start + pos;
        let end = begin + token.len();

        let open = begin == 0 || name[..begin].ends_with('_');
        let close = end == name.len() || name[end..].starts_with('_');
        if open && close {
            return true;
        }

        // Step one char so overlapping occurrences are still tried.
        start = begin + name[begin..].chars().next().map_or(1, char::len_utf8);
    }

    false
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_delimited_token_at_boundaries() {
        assert!(contains_delimited_token("STR_Plan", "STR"));
        assert!(contains_delimited_token("Plan_STR", "STR"));
        assert!(contains_delimited_token("STR", "STR"));
        assert!(contains_delimited_token("L01_STR_Plan", "STR"));
    }

    #[test]
    fn test_delimited_token_rejects_partial_segments() {
        assert!(!contains_delimited_token("L01_STRUCT_Plan", "STR"));
        assert!(!contains_delimited_token("L01_XSTR_Plan", "STR"));
        assert!(!contains_delimited_token("L01 STR Plan", "STR"));
        assert!(!contains_delimited_token("", "STR"));
    }

    #[test]
    fn test_delimited_token_is_case_sensitive() {
        assert!(!contains_delimited_token("L01_str_Plan", "STR"));
    }

    #[test]
    fn test_delimited_token_tries_overlapping_occurrences() {
        // First hit of "AA" is inside "AAA"; the later standalone one must still count.
        assert!(contains_delimited_token("AAA_AA", "AA"));
        assert!(contains_delimited_token("X_AAAA_M_AA", "AA"));
    }

    #[test]
    fn test_delimited_token_with_underscore_inside() {
        assert!(contains_delimited_token("L01_FIRE_STR_Plan", "FIRE_STR"));
        assert!(!contains_delimited_token("L01_FIRE_STRX_Plan", "FIRE_STR"));
    }
}
