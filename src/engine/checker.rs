//! Prerequisite checking against a handbook

use crate::condition::{is_satisfied, parse, Condition, ConditionCache};
use crate::config::Handbook;
use crate::error::Result;
use std::sync::Arc;

/// Main prerequisite engine
///
/// Owns the handbook and a cache of parsed conditions. Both are
/// read-only from the caller's point of view, so one engine can be
/// shared across threads.
#[derive(Debug)]
pub struct PrereqEngine {
    handbook: Handbook,
    cache: ConditionCache,
}

impl PrereqEngine {
    pub fn new(handbook: Handbook) -> Self {
        let cache = ConditionCache::with_capacity(handbook.len());
        Self { handbook, cache }
    }

    pub fn handbook(&self) -> &Handbook {
        &self.handbook
    }

    /// Parsed condition for a course
    pub fn condition_for(&self, course: &str) -> Result<Arc<Condition>> {
        let text = self.handbook.condition_text(course)?;
        Ok(self.cache.get_or_parse(text))
    }

    /// Check whether the completed courses unlock the target course
    pub fn is_unlocked<S: AsRef<str>>(&self, completed: &[S], target: &str) -> Result<bool> {
        let condition = self.condition_for(target)?;
        let unlocked = is_satisfied(completed, &condition);
        log::debug!("{} unlocked: {}", target, unlocked);
        Ok(unlocked)
    }

    /// Every course not yet completed whose prerequisites are met, sorted by code
    pub fn unlocked_courses<S: AsRef<str>>(&self, completed: &[S]) -> Vec<String> {
        let mut unlocked: Vec<String> = self
            .handbook
            .courses()
            .filter(|course| !completed.iter().any(|c| c.as_ref() == *course))
            .filter(|course| {
                let condition = self.cache.get_or_parse(self.text_of(course));
                is_satisfied(completed, &condition)
            })
            .map(str::to_string)
            .collect();
        unlocked.sort();
        unlocked
    }

    pub fn cache_size(&self) -> usize {
        self.cache.len()
    }

    pub fn clear_cache(&self) {
        self.cache.clear();
    }

    fn text_of(&self, course: &str) -> &str {
        self.handbook.condition_text(course).unwrap_or_default()
    }
}

/// Uncached check of a single course against a handbook
pub fn is_unlocked<S: AsRef<str>>(
    handbook: &Handbook,
    completed: &[S],
    target: &str,
) -> Result<bool> {
    let text = handbook.condition_text(target)?;
    Ok(is_satisfied(completed, &parse(text)))
}
