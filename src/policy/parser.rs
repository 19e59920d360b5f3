use super::rule::{Clause, PatternRule};
use super::Policy;
use crate::error::PolicyError;
use regex::Regex;

const CLAUSE_SEPARATOR: char = ';';
const DISCIPLINE_PREFIX: &str = "discipline:";
const EXCLUSION_PREFIX: &str = "not:";
const REGEX_PREFIX: &str = "regex:";

/// Parses a semicolon-delimited policy string.
///
/// Clauses are trimmed and empty ones dropped, so `"a;; b ;"` has two clauses.
/// Each remaining clause is classified by prefix:
///
/// - `discipline:STR,ARC` - any listed code as an underscore-delimited segment
/// - `regex:<pattern>` - regular expression, searched anywhere in the name
/// - `not:<clause>` - the inner `regex:` or literal clause must NOT hold
/// - anything else - case-insensitive substring
///
/// # Errors
///
/// The first malformed clause rejects the whole policy:
/// [`PolicyError::InvalidRegex`], [`PolicyError::DisciplineInExclusion`],
/// [`PolicyError::NestedExclusion`] or [`PolicyError::EmptyClause`].
///
/// # Example
///
/// ```
/// use bim_audit::policy::parse_policy;
///
/// let policy = parse_policy("discipline:STR,ARC; not:temp")?;
/// assert!(policy.evaluate("L01_STR_Plan").is_compliant);
/// assert!(!policy.evaluate("L01_STR_Plan_TEMP").is_compliant);
/// # Ok::<(), bim_audit::error::PolicyError>(())
/// ```
pub fn parse_policy(config: &str) -> Result<Policy, PolicyError> {
    let rules = config
        .split(CLAUSE_SEPARATOR)
        .map(str::trim)
        .filter(|clause| !clause.is_empty())
        .map(parse_clause)
        .collect::<Result<Vec<_>, _>>()?;

    Ok(Policy::from_rules(rules))
}

fn parse_clause(clause: &str) -> Result<PatternRule, PolicyError> {
    if let Some(rest) = clause.strip_prefix(EXCLUSION_PREFIX) {
        let inner = rest.trim();
        if inner.is_empty() {
            return Err(PolicyError::EmptyClause {
                clause: clause.to_string(),
            });
        }
        if inner.starts_with(DISCIPLINE_PREFIX) {
            return Err(PolicyError::DisciplineInExclusion {
                clause: clause.to_string(),
            });
        }
        if inner.starts_with(EXCLUSION_PREFIX) {
            return Err(PolicyError::NestedExclusion {
                clause: clause.to_string(),
            });
        }

        let inner_rule = parse_simple_clause(inner, clause)?;
        return Ok(PatternRule {
            raw_text: clause.to_string(),
            clause: Clause::Exclusion(Box::new(inner_rule)),
        });
    }

    if let Some(rest) = clause.strip_prefix(DISCIPLINE_PREFIX) {
        let mut codes: Vec<String> = Vec::new();
        for code in rest.split(',').map(str::trim).filter(|c| !c.is_empty()) {
            if !codes.iter().any(|existing| existing == code) {
                codes.push(code.to_string());
            }
        }

        if codes.is_empty() {
            return Err(PolicyError::EmptyClause {
                clause: clause.to_string(),
            });
        }

        return Ok(PatternRule {
            raw_text: clause.to_string(),
            clause: Clause::Discipline(codes),
        });
    }

    parse_simple_clause(clause, clause)
}

/// Parses a `regex:` or literal clause. Errors name `reported`, which is the
/// enclosing `not:` clause when there is one.
fn parse_simple_clause(text: &str, reported: &str) -> Result<PatternRule, PolicyError> {
    if let Some(pattern) = text.strip_prefix(REGEX_PREFIX) {
        if pattern.is_empty() {
            return Err(PolicyError::EmptyClause {
                clause: reported.to_string(),
            });
        }

        let regex = Regex::new(pattern).map_err(|source| PolicyError::InvalidRegex {
            clause: reported.to_string(),
            source,
        })?;

        return Ok(PatternRule {
            raw_text: text.to_string(),
            clause: Clause::Regex(regex),
        });
    }

    Ok(PatternRule {
        raw_text: text.to_string(),
        clause: Clause::Literal(text.to_lowercase()),
    })
}
