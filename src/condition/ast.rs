//! Expression tree for prerequisite conditions

use serde::Serialize;
use smallvec::SmallVec;
use std::fmt;

/// One AND-group: at least one of its atoms must hold
pub type OrGroup = SmallVec<[Atom; 4]>;

/// Parsed prerequisite condition
///
/// Every group in `groups` must be satisfied. An empty condition
/// places no requirement on the student.
#[derive(Debug, Clone, Default, PartialEq, Serialize)]
#[serde(transparent)]
pub struct Condition {
    pub groups: Vec<OrGroup>,
}

/// A single alternative inside an AND-group
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "snake_case")]
pub enum Atom {
    /// Completed course whose code contains this code
    CourseRef(String),
    /// Minimum number of completed courses matching a filter
    UocRequirement(UocRequirement),
    /// Bracketed sub-clause
    Nested(Condition),
}

/// Units-of-credit requirement converted into a course count
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct UocRequirement {
    /// Number of matching courses required
    pub courses: u32,
    /// A course matches if its code contains any of these substrings
    pub filters: Vec<String>,
}

impl Condition {
    pub fn new(groups: Vec<OrGroup>) -> Self {
        Self { groups }
    }

    /// True when the condition has no AND-groups at all
    pub fn is_empty(&self) -> bool {
        self.groups.is_empty()
    }

    /// Depth of bracket nesting; a flat condition has depth 1
    pub fn depth(&self) -> usize {
        1 + self
            .groups
            .iter()
            .flat_map(|group| group.iter())
            .map(|atom| match atom {
                Atom::Nested(inner) => inner.depth(),
                _ => 0,
            })
            .max()
            .unwrap_or(0)
    }
}

impl UocRequirement {
    /// Requirement with no filter, satisfied by any completed course
    pub fn unconstrained(courses: u32) -> Self {
        Self {
            courses,
            filters: vec![String::new()],
        }
    }

    fn is_unconstrained(&self) -> bool {
        self.filters.iter().all(|f| f.is_empty())
    }
}

impl fmt::Display for Condition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.groups.is_empty() {
            return write!(f, "NONE");
        }
        let wrap = self.groups.len() > 1;
        for (i, group) in self.groups.iter().enumerate() {
            if i > 0 {
                write!(f, " AND ")?;
            }
            match group.len() {
                0 => write!(f, "FALSE")?,
                1 => write!(f, "{}", group[0])?,
                _ => {
                    if wrap {
                        write!(f, "(")?;
                    }
                    for (j, atom) in group.iter().enumerate() {
                        if j > 0 {
                            write!(f, " OR ")?;
                        }
                        write!(f, "{}", atom)?;
                    }
                    if wrap {
                        write!(f, ")")?;
                    }
                }
            }
        }
        Ok(())
    }
}

impl fmt::Display for Atom {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Atom::CourseRef(code) => write!(f, "{}", code),
            Atom::UocRequirement(req) => write!(f, "{}", req),
            Atom::Nested(inner) => write!(f, "({})", inner),
        }
    }
}

impl fmt::Display for UocRequirement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.is_unconstrained() {
            write!(f, "{} COURSES", self.courses)
        } else {
            write!(f, "{} COURSES IN {}", self.courses, self.filters.join("|"))
        }
    }
}
