//! Python bindings via PyO3
//!
//! Exposes a `PrereqEngine` class that owns its handbook, so several
//! handbooks can be loaded side by side in one interpreter.

use pyo3::prelude::*;
use std::collections::HashMap;
use std::sync::Arc;

use crate::condition::parse;
use crate::config::Handbook;
use crate::engine::PrereqEngine;

/// Prerequisite engine backed by a course -> condition-text mapping
#[pyclass(name = "PrereqEngine", frozen)]
pub struct PyPrereqEngine {
    inner: Arc<PrereqEngine>,
}

#[pymethods]
impl PyPrereqEngine {
    /// Create an engine from a dict of course code to condition text
    #[new]
    fn new(conditions: HashMap<String, String>) -> Self {
        Self {
            inner: Arc::new(PrereqEngine::new(Handbook::new(conditions))),
        }
    }

    /// Load an engine from a JSON file
    #[staticmethod]
    fn from_json(path: &str) -> PyResult<Self> {
        let handbook = Handbook::from_path(path)?;
        Ok(Self {
            inner: Arc::new(PrereqEngine::new(handbook)),
        })
    }

    /// Check whether `courses` unlock `target`
    ///
    /// # Raises
    /// KeyError if `target` is not in the handbook
    fn is_unlocked(&self, courses: Vec<String>, target: &str) -> PyResult<bool> {
        Ok(self.inner.is_unlocked(&courses, target)?)
    }

    /// Check a course asynchronously
    ///
    /// Evaluation runs on Tokio's blocking pool, keeping the asyncio
    /// event loop responsive.
    ///
    /// # Example (Python)
    /// ```python
    /// ok = await engine.is_unlocked_async(["COMP1511"], "COMP1521")
    /// ```
    fn is_unlocked_async<'py>(
        &self,
        py: Python<'py>,
        courses: Vec<String>,
        target: String,
    ) -> PyResult<Bound<'py, PyAny>> {
        let engine = Arc::clone(&self.inner);

        pyo3_async_runtimes::tokio::future_into_py(py, async move {
            let unlocked = tokio::task::spawn_blocking(move || {
                engine.is_unlocked(&courses, &target).map_err(PyErr::from)
            })
            .await
            .map_err(|e| {
                PyErr::new::<pyo3::exceptions::PyRuntimeError, _>(format!(
                    "Prerequisite check panicked: {}",
                    e
                ))
            })??;

            Ok(unlocked)
        })
    }

    /// Every course the completed list unlocks, sorted by code
    fn unlocked_courses(&self, courses: Vec<String>) -> Vec<String> {
        self.inner.unlocked_courses(&courses)
    }

    /// Canonical text of a course's parsed condition
    fn explain(&self, target: &str) -> PyResult<String> {
        Ok(self.inner.condition_for(target)?.to_string())
    }

    fn __len__(&self) -> usize {
        self.inner.handbook().len()
    }
}

/// Parse condition text and return its canonical form
#[pyfunction]
fn parse_condition(text: &str) -> String {
    parse(text).to_string()
}

/// Python module definition
#[pymodule]
fn prereq_core(m: &Bound<'_, PyModule>) -> PyResult<()> {
    m.add_class::<PyPrereqEngine>()?;
    m.add_function(wrap_pyfunction!(parse_condition, m)?)?;
    Ok(())
}
