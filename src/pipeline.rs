//! Chains of registry transforms
//!
//! A pipeline runs its steps in order, feeding each step's output to the next.
//! Counts (from `length`) are passed on as their decimal text.

use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::registry::{TransformKey, TransformRegistry};
use crate::transforms::{Output, TransformError};

/// An ordered list of transforms applied one after another.
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct Pipeline {
    /// Name used in error messages
    #[serde(default)]
    pub name: String,
    pub steps: Vec<TransformKey>,
}

impl Pipeline {
    pub fn new(name: impl Into<String>, steps: Vec<TransformKey>) -> Self {
        Self { name: name.into(), steps }
    }

    /// Build a pipeline from textual keys such as `"case/kebabcase"`.
    pub fn parse<S: AsRef<str>>(name: impl Into<String>, steps: &[S]) -> Result<Self, TransformError> {
        let steps = steps
            .iter()
            .map(|step| TransformKey::parse(step.as_ref()))
            .collect::<Result<Vec<_>, _>>()?;
        Ok(Self::new(name, steps))
    }

    /// Check every step resolves, without running anything.
    pub fn check(&self, registry: &TransformRegistry) -> Result<(), TransformError> {
        for (step, key) in self.steps.iter().enumerate() {
            registry.resolve(key).map_err(|e| self.step_error(step, e))?;
        }
        Ok(())
    }

    /// Run all steps on the input.
    ///
    /// An empty pipeline returns the input as text.
    pub fn run(&self, registry: &TransformRegistry, input: &str) -> Result<Output, TransformError> {
        let mut current = Output::Text(input.to_string());

        for (step, key) in self.steps.iter().enumerate() {
            debug!(pipeline = %self.name, step, key = %key, "running pipeline step");
            let text = current.into_text();
            current = registry.apply_key(key, &text).map_err(|e| self.step_error(step, e))?;
        }
        Ok(current)
    }

    fn step_error(&self, step: usize, source: TransformError) -> TransformError {
        TransformError::Pipeline { pipeline: self.name.clone(), step, source: Box::new(source) }
    }
}
