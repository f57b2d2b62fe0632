//! Property tests for condition module
//!
//! Covers splitting, parsing and evaluation of generated prerequisite
//! strings.

use proptest::prelude::*;

use crate::condition::ast::{Atom, Condition};
use crate::condition::cache::ConditionCache;
use crate::condition::evaluator::is_satisfied;
use crate::condition::parser::{parse, parse_uoc};
use crate::condition::splitter::{split, Token};
use crate::config::UNITS_PER_COURSE;

// ═══════════════════════════════════════════════════════════════════════════
// Strategy generators for property tests
// ═══════════════════════════════════════════════════════════════════════════

/// Generate discipline codes
fn discipline_strategy() -> impl Strategy<Value = String> {
    prop_oneof![
        Just("COMP".to_string()),
        Just("MATH".to_string()),
        Just("SENG".to_string()),
        Just("DPST".to_string()),
    ]
}

/// Generate full course codes like COMP1511
fn course_code_strategy() -> impl Strategy<Value = String> {
    (discipline_strategy(), 1000..=9999u32).prop_map(|(d, n)| format!("{}{}", d, n))
}

/// Generate a small set of distinct course codes
fn course_set_strategy(max: usize) -> impl Strategy<Value = Vec<String>> {
    prop::collection::btree_set(course_code_strategy(), 1..=max)
        .prop_map(|set| set.into_iter().collect())
}

/// Generate a condition label prefix
fn label_strategy() -> impl Strategy<Value = &'static str> {
    prop_oneof![
        Just(""),
        Just("Prerequisite: "),
        Just("Pre-requisite: "),
        Just("prereq: "),
    ]
}

/// Generate a completed-course list
fn completed_strategy() -> impl Strategy<Value = Vec<String>> {
    prop::collection::vec(course_code_strategy(), 0..=8)
}

// ═══════════════════════════════════════════════════════════════════════════
// Property Tests
// ═══════════════════════════════════════════════════════════════════════════

proptest! {
    /// A lone course code parses to one group holding one reference
    #[test]
    fn prop_single_course_parses(label in label_strategy(), code in course_code_strategy()) {
        let cond = parse(&format!("{}{}", label, code));
        prop_assert_eq!(cond.groups.len(), 1);
        prop_assert_eq!(cond.groups[0].len(), 1);
        prop_assert_eq!(&cond.groups[0][0], &Atom::CourseRef(code));
    }

    /// OR chains become alternatives of a single group
    #[test]
    fn prop_or_chain_is_one_group(codes in course_set_strategy(6)) {
        let cond = parse(&codes.join(" or "));
        prop_assert_eq!(cond.groups.len(), 1);
        prop_assert_eq!(cond.groups[0].len(), codes.len());
    }

    /// AND chains become one group per course
    #[test]
    fn prop_and_chain_is_many_groups(codes in course_set_strategy(6)) {
        let text = codes.join(" AND ");
        let tokens = split(&text);
        prop_assert_eq!(tokens.len(), codes.len() * 2 - 1);
        prop_assert!(tokens.iter().skip(1).step_by(2).all(|t| *t == Token::And));

        let cond = parse(&text);
        prop_assert_eq!(cond.groups.len(), codes.len());
    }

    /// AND chains hold exactly when every course is completed
    #[test]
    fn prop_and_chain_evaluation(
        codes in course_set_strategy(4),
        completed in completed_strategy()
    ) {
        let cond = parse(&codes.join(" and "));
        let expected = codes.iter().all(|code| completed.iter().any(|c| c.contains(code.as_str())));
        prop_assert_eq!(is_satisfied(&completed, &cond), expected);
    }

    /// OR chains hold when any course is completed
    #[test]
    fn prop_or_chain_evaluation(
        codes in course_set_strategy(4),
        completed in completed_strategy()
    ) {
        let cond = parse(&codes.join(" or "));
        let expected = codes.iter().any(|code| completed.iter().any(|c| c.contains(code.as_str())));
        prop_assert_eq!(is_satisfied(&completed, &cond), expected);
    }

    /// Bracketing a condition does not change its outcome
    #[test]
    fn prop_brackets_preserve_meaning(
        codes in course_set_strategy(4),
        completed in completed_strategy()
    ) {
        let text = codes.join(" OR ");
        let flat = parse(&text);
        let wrapped = parse(&format!("(({}))", text));
        prop_assert_eq!(wrapped.depth(), 3);
        prop_assert_eq!(is_satisfied(&completed, &flat), is_satisfied(&completed, &wrapped));
    }

    /// Units are converted to whole courses, rounding down
    #[test]
    fn prop_uoc_course_count(
        units in 0..=240u32,
        level in 1..=9u32,
        discipline in discipline_strategy()
    ) {
        let clause = format!("{} UNITS OF CREDIT IN LEVEL {} {} COURSES", units, level, discipline);
        let req = parse_uoc(&clause).unwrap();
        prop_assert_eq!(req.courses, units / UNITS_PER_COURSE);
        prop_assert_eq!(req.filters, vec![format!("{}{}", discipline, level)]);
    }

    /// An unconstrained UOC clause counts every completed course
    #[test]
    fn prop_unconstrained_uoc_evaluation(units in 0..=60u32, completed in completed_strategy()) {
        let cond = parse(&format!("Prerequisite: completion of {} units of credit", units));
        let expected = completed.len() as u32 >= units / UNITS_PER_COURSE;
        prop_assert_eq!(is_satisfied(&completed, &cond), expected);
    }

    /// Cache should return same results as direct parsing
    #[test]
    fn prop_cache_consistency(codes in course_set_strategy(4), completed in completed_strategy()) {
        let cache = ConditionCache::new();
        let text = format!("Prerequisite: {}", codes.join(" or "));

        let direct = parse(&text);
        let cached_first = cache.get_or_parse(&text);
        let cached_second = cache.get_or_parse(&text);

        prop_assert_eq!(&direct, cached_first.as_ref());
        prop_assert_eq!(
            is_satisfied(&completed, &direct),
            is_satisfied(&completed, &cached_second)
        );
        prop_assert_eq!(cache.len(), 1);
    }

    /// Empty condition should always be satisfied
    #[test]
    fn prop_empty_condition_satisfied(label in label_strategy(), completed in completed_strategy()) {
        let cond = parse(label);
        prop_assert_eq!(&cond, &Condition::default());
        prop_assert!(is_satisfied(&completed, &cond));
    }

    /// Rendering a flat condition and parsing it again gives the same tree
    #[test]
    fn prop_display_reparses(
        first in course_set_strategy(3),
        second in course_set_strategy(3)
    ) {
        let text = format!("({}) AND ({})", first.join(" OR "), second.join(" OR "));
        let cond = parse(&text);
        let reparsed = parse(&cond.to_string());
        prop_assert_eq!(
            reparsed.groups.iter().map(|g| g.len()).collect::<Vec<_>>(),
            cond.groups.iter().map(|g| g.len()).collect::<Vec<_>>()
        );
    }
}
