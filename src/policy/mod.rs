//! View naming policies.
//!
//! A policy is parsed once from its configuration string into an ordered list
//! of [`PatternRule`]s and can then be evaluated against any number of names,
//! from any number of threads.

pub mod parser;
pub mod rule;

use crate::model::{View, ViewId, ViewType};
use serde::Serialize;
use std::str::FromStr;

pub use crate::error::PolicyError;
pub use parser::parse_policy;
pub use rule::{Clause, PatternRule, RuleKind};

#[derive(Debug, Clone, Default)]
pub struct Policy {
    rules: Vec<PatternRule>,
}

/// Outcome of checking one name against a policy.
///
/// All lists hold clause raw texts in configuration order.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ComplianceResult {
    pub is_compliant: bool,
    pub matched_patterns: Vec<String>,
    pub failed_patterns: Vec<String>,
    pub exclusion_violations: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ViewCompliance {
    pub view_id: ViewId,
    pub view_name: String,
    pub view_type: ViewType,
    #[serde(flatten)]
    pub result: ComplianceResult,
}

impl Policy {
    pub fn parse(config: &str) -> Result<Self, PolicyError> {
        parse_policy(config)
    }

    pub(crate) fn from_rules(rules: Vec<PatternRule>) -> Self {
        Self { rules }
    }

    #[must_use]
    pub fn rules(&self) -> &[PatternRule] {
        &self.rules
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.rules.is_empty()
    }

    /// Checks `name` against every rule.
    ///
    /// A name is compliant when every non-exclusion rule holds and no
    /// exclusion is triggered. An empty policy accepts every name.
    #[must_use]
    pub fn evaluate(&self, name: &str) -> ComplianceResult {
        let folded = name.to_lowercase();

        let mut matched_patterns = Vec::new();
        let mut failed_patterns = Vec::new();
        let mut exclusion_violations = Vec::new();

        for rule in &self.rules {
            let satisfied = rule.is_satisfied_by(name, &folded);
            match (rule.is_exclusion(), satisfied) {
                (true, true) => exclusion_violations.push(rule.raw_text.clone()),
                (true, false) => {}
                (false, true) => matched_patterns.push(rule.raw_text.clone()),
                (false, false) => failed_patterns.push(rule.raw_text.clone()),
            }
        }

        ComplianceResult {
            is_compliant: failed_patterns.is_empty() && exclusion_violations.is_empty(),
            matched_patterns,
            failed_patterns,
            exclusion_violations,
        }
    }

    #[must_use]
    pub fn evaluate_view(&self, view: &View) -> ViewCompliance {
        ViewCompliance {
            view_id: view.id,
            view_name: view.name.clone(),
            view_type: view.view_type,
            result: self.evaluate(&view.name),
        }
    }
}

impl FromStr for Policy {
    type Err = PolicyError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_policy(s)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use std::collections::BTreeSet;

    fn strings(items: &[&str]) -> Vec<String> {
        items.iter().map(ToString::to_string).collect()
    }

    #[test]
    fn test_empty_policy_accepts_everything() {
        let policy = Policy::parse("").unwrap();
        for name in ["", "L01_STR_Plan", "TEMP", "{3D}"] {
            let result = policy.evaluate(name);
            assert!(result.is_compliant);
            assert!(result.matched_patterns.is_empty());
            assert!(result.failed_patterns.is_empty());
            assert!(result.exclusion_violations.is_empty());
        }
    }

    #[test]
    fn test_discipline_requires_exact_token() {
        let policy = Policy::parse("discipline:STR,ARC").unwrap();

        assert!(policy.evaluate("L01_STR_Plan").is_compliant);
        assert!(policy.evaluate("L01_ARC_Plan").is_compliant);

        let result = policy.evaluate("L01_STRUCT_Plan");
        assert!(!result.is_compliant);
        assert_eq!(result.failed_patterns, strings(&["discipline:STR,ARC"]));
    }

    #[test]
    fn test_literal_is_case_insensitive() {
        let policy = Policy::parse("plan").unwrap();
        assert!(policy.evaluate("L01_STR_PLAN").is_compliant);
        assert!(policy.evaluate("Floor Plan").is_compliant);
        assert!(!policy.evaluate("Section A").is_compliant);
    }

    #[test]
    fn test_exclusion_overrides_satisfied_clauses() {
        let policy = Policy::parse("discipline:ARC;View;not:temp").unwrap();
        let result = policy.evaluate("TEMP_ARC_View");

        assert_eq!(
            result,
            ComplianceResult {
                is_compliant: false,
                matched_patterns: strings(&["discipline:ARC", "View"]),
                failed_patterns: Vec::new(),
                exclusion_violations: strings(&["not:temp"]),
            }
        );
    }

    #[test]
    fn test_untriggered_exclusion_is_silent() {
        let policy = Policy::parse("not:temp").unwrap();
        let result = policy.evaluate("L01_ARC_Plan");
        assert!(result.is_compliant);
        assert!(result.exclusion_violations.is_empty());
        assert!(result.matched_patterns.is_empty());
    }

    #[test]
    fn test_regex_uses_search_semantics() {
        let policy = Policy::parse(r"regex:^Linked View_\w{3}_").unwrap();
        assert!(policy.evaluate("Linked View_ARC_01").is_compliant);
        assert!(!policy.evaluate("View_ARC_01").is_compliant);

        let unanchored = Policy::parse(r"regex:_\d{2}$").unwrap();
        assert!(unanchored.evaluate("Linked View_ARC_01").is_compliant);
    }

    #[test]
    fn test_regex_exclusion() {
        let policy = Policy::parse(r"not:regex:(?i)copy\s*\d*$").unwrap();
        assert!(!policy.evaluate("L01_ARC_Plan Copy 1").is_compliant);
        assert!(policy.evaluate("L01_ARC_Plan").is_compliant);
    }

    #[test]
    fn test_output_follows_configuration_order() {
        let policy = Policy::parse("Section;discipline:MEP;Plan;regex:^L0").unwrap();
        let result = policy.evaluate("L01_MEP_Plan");

        assert_eq!(result.matched_patterns, strings(&["discipline:MEP", "Plan", "regex:^L0"]));
        assert_eq!(result.failed_patterns, strings(&["Section"]));
    }

    #[test]
    fn test_matched_and_failed_partition_non_exclusion_rules() {
        let policy =
            Policy::parse("discipline:STR,ARC;Plan;regex:^L\\d{2}_;not:temp;Level;not:copy")
                .unwrap();
        let expected: BTreeSet<String> = policy
            .rules()
            .iter()
            .filter(|r| !r.is_exclusion())
            .map(|r| r.raw_text.clone())
            .collect();

        for name in [
            "L01_STR_Plan",
            "L01_STRUCT_Plan",
            "TEMP_ARC_Level",
            "Section Copy",
            "",
            "level plan",
        ] {
            let result = policy.evaluate(name);
            let matched: BTreeSet<String> = result.matched_patterns.iter().cloned().collect();
            let failed: BTreeSet<String> = result.failed_patterns.iter().cloned().collect();

            assert!(matched.is_disjoint(&failed), "overlap for {name}");
            let union: BTreeSet<String> = matched.union(&failed).cloned().collect();
            assert_eq!(union, expected, "coverage for {name}");
        }
    }

    #[test]
    fn test_from_str_matches_parse() {
        let policy: Policy = "discipline:STR;not:temp".parse().unwrap();
        assert_eq!(policy.rules().len(), 2);
    }

    #[test]
    fn test_evaluate_view_carries_identity() {
        let policy = Policy::parse("discipline:STR").unwrap();
        let view = View::new(7, "L02_STR_Plan", ViewType::FloorPlan);
        let compliance = policy.evaluate_view(&view);

        assert_eq!(compliance.view_id, ViewId(7));
        assert_eq!(compliance.view_name, "L02_STR_Plan");
        assert!(compliance.result.is_compliant);
    }

    #[test]
    fn test_policy_is_shared_across_threads() {
        let policy = Policy::parse("discipline:STR;not:regex:(?i)temp").unwrap();
        let names = ["L01_STR_Plan", "TEMP_STR", "L01_ARC_Plan"];
        let policy = &policy;

        let results: Vec<bool> = std::thread::scope(|scope| {
            let handles: Vec<_> = names
                .iter()
                .map(|name| scope.spawn(move || policy.evaluate(name).is_compliant))
                .collect();
            handles.into_iter().map(|h| h.join().unwrap()).collect()
        });

        assert_eq!(results, vec![true, false, false]);
    }
}
