//! Condition evaluator
//!
//! Course matching is by substring: a completed course satisfies a
//! reference when its code contains the referenced code. This lets
//! discipline-less references like `1511` and suffixed codes like
//! `COMP1511X` match.

use crate::condition::ast::{Atom, Condition, UocRequirement};

/// Check whether the completed courses satisfy every AND-group
pub fn is_satisfied<S: AsRef<str>>(completed: &[S], condition: &Condition) -> bool {
    condition
        .groups
        .iter()
        .all(|group| group.iter().any(|atom| check_atom(completed, atom)))
}

fn check_atom<S: AsRef<str>>(completed: &[S], atom: &Atom) -> bool {
    match atom {
        Atom::CourseRef(code) => completed
            .iter()
            .any(|c| c.as_ref().contains(code.as_str())),
        Atom::UocRequirement(req) => count_matching(completed, req) >= req.courses as usize,
        Atom::Nested(inner) => is_satisfied(completed, inner),
    }
}

/// Number of completed courses matching at least one filter
pub fn count_matching<S: AsRef<str>>(completed: &[S], req: &UocRequirement) -> usize {
    completed
        .iter()
        .filter(|c| {
            let code: &str = (*c).as_ref();
            req.filters.iter().any(|f| code.contains(f.as_str()))
        })
        .count()
}
