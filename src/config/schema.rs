//! Configuration schema types for `puzzletext.toml`
//!
//! Defines user aliases and named pipelines, plus the validation rules for them.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

use crate::pipeline::Pipeline;
use crate::registry::{TransformKey, TransformRegistry};
use crate::transforms::{Output, TransformError};

/// A named pipeline as written in the config file
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PipelineConfig {
    /// Shown to users alongside the pipeline name
    #[serde(default)]
    pub description: String,
    /// Transform keys, `name` or `category/name`, applied in order
    pub steps: Vec<String>,
}

/// Complete `puzzletext.toml` configuration
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PuzzleConfig {
    /// Short names for transform keys
    #[serde(default)]
    pub aliases: BTreeMap<String, String>,
    /// Named chains of transforms
    #[serde(default)]
    pub pipelines: BTreeMap<String, PipelineConfig>,
}

/// A validation error in the configuration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConfigValidationError {
    /// Dotted path to the offending field
    pub field: String,
    pub message: String,
}

impl fmt::Display for ConfigValidationError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

impl PuzzleConfig {
    /// Validate the configuration on its own, without a registry.
    ///
    /// Returns every problem found; an empty list means the config is valid.
    pub fn validate(&self) -> Vec<ConfigValidationError> {
        let mut errors = Vec::new();

        for (name, target) in &self.aliases {
            if name.trim().is_empty() {
                errors.push(ConfigValidationError {
                    field: "aliases".to_string(),
                    message: "alias names must be non-empty".to_string(),
                });
            }
            if let Err(e) = TransformKey::parse(target) {
                errors.push(ConfigValidationError {
                    field: format!("aliases.{}", name),
                    message: e.to_string(),
                });
            }
        }

        for (name, pipeline) in &self.pipelines {
            if name.trim().is_empty() {
                errors.push(ConfigValidationError {
                    field: "pipelines".to_string(),
                    message: "pipeline names must be non-empty".to_string(),
                });
            }
            if pipeline.steps.is_empty() {
                errors.push(ConfigValidationError {
                    field: format!("pipelines.{}.steps", name),
                    message: "must contain at least one transform".to_string(),
                });
            }
            for (i, step) in pipeline.steps.iter().enumerate() {
                if let Err(e) = TransformKey::parse(step) {
                    errors.push(ConfigValidationError {
                        field: format!("pipelines.{}.steps[{}]", name, i),
                        message: e.to_string(),
                    });
                }
            }
        }

        errors
    }

    /// Validate, and also check that every alias and step names a registered transform.
    pub fn validate_against(&self, registry: &TransformRegistry) -> Vec<ConfigValidationError> {
        let mut errors = self.validate();

        for (name, target) in &self.aliases {
            if let Ok(key) = TransformKey::parse(target) {
                if let Err(e) = registry.resolve(&key) {
                    errors.push(ConfigValidationError {
                        field: format!("aliases.{}", name),
                        message: e.to_string(),
                    });
                }
            }
        }

        for (name, pipeline) in &self.pipelines {
            for (i, step) in pipeline.steps.iter().enumerate() {
                if let Ok(key) = TransformKey::parse(step) {
                    if let Err(e) = registry.resolve(&key) {
                        errors.push(ConfigValidationError {
                            field: format!("pipelines.{}.steps[{}]", name, i),
                            message: e.to_string(),
                        });
                    }
                }
            }
        }

        errors
    }

    /// The key an alias stands for, if `name` is an alias.
    pub fn resolve_alias(&self, name: &str) -> Option<Result<TransformKey, TransformError>> {
        self.aliases.get(name).map(|target| TransformKey::parse(target))
    }

    /// Build the named pipeline, if one is configured.
    pub fn pipeline(&self, name: &str) -> Option<Result<Pipeline, TransformError>> {
        self.pipelines.get(name).map(|config| Pipeline::parse(name, config.steps.as_slice()))
    }

    /// Run `name` on the input: a configured pipeline first, then an alias,
    /// then a plain transform key.
    pub fn apply(
        &self,
        registry: &TransformRegistry,
        name: &str,
        input: &str,
    ) -> Result<Output, TransformError> {
        if let Some(pipeline) = self.pipeline(name) {
            return pipeline?.run(registry, input);
        }
        let key = match self.resolve_alias(name) {
            Some(key) => key?,
            None => TransformKey::parse(name)?,
        };
        registry.apply_key(&key, input)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> PuzzleConfig {
        toml::from_str(
            r#"
[aliases]
slug = "case/kebabcase"
ans = "answerize"

[pipelines.query]
description = "Answer to optional-letter nutrimatic query"
steps = ["answerize", "nutrimatic/add ?"]
"#,
        )
        .expect("sample config should parse")
    }

    #[test]
    fn test_parse_sample() {
        let config = sample();
        assert_eq!(config.aliases.len(), 2);
        assert_eq!(config.pipelines["query"].steps.len(), 2);
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_empty_config_is_valid() {
        let config: PuzzleConfig = toml::from_str("").unwrap();
        assert_eq!(config, PuzzleConfig::default());
        assert!(config.validate().is_empty());
    }

    #[test]
    fn test_validate_bad_alias_target() {
        let mut config = PuzzleConfig::default();
        config.aliases.insert("broken".to_string(), "case/".to_string());

        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "aliases.broken");
    }

    #[test]
    fn test_validate_empty_pipeline() {
        let mut config = PuzzleConfig::default();
        config.pipelines.insert("nothing".to_string(), PipelineConfig::default());

        let errors = config.validate();
        assert_eq!(errors.len(), 1);
        assert_eq!(errors[0].field, "pipelines.nothing.steps");
        assert_eq!(errors[0].to_string(), "pipelines.nothing.steps: must contain at least one transform");
    }

    #[test]
    fn test_validate_against_registry() {
        let mut config = sample();
        config.aliases.insert("typo".to_string(), "case/kebab".to_string());
        config.pipelines.insert(
            "bad".to_string(),
            PipelineConfig { description: String::new(), steps: vec!["flip".to_string()] },
        );

        let errors = config.validate_against(&TransformRegistry::with_defaults());
        let fields: Vec<&str> = errors.iter().map(|e| e.field.as_str()).collect();
        assert_eq!(fields, vec!["aliases.typo", "pipelines.bad.steps[0]"]);
    }

    #[test]
    fn test_apply_pipeline_alias_and_key() {
        let config = sample();
        let registry = TransformRegistry::with_defaults();

        assert_eq!(config.apply(&registry, "query", "ab c").unwrap().into_text(), "A?B?C?");
        assert_eq!(config.apply(&registry, "slug", "Hello World").unwrap().into_text(), "hello-world");
        assert_eq!(config.apply(&registry, "case/uppercase", "abc").unwrap().into_text(), "ABC");
    }

    #[test]
    fn test_apply_unknown_name() {
        let config = sample();
        let registry = TransformRegistry::with_defaults();
        assert!(matches!(
            config.apply(&registry, "nope", "x"),
            Err(TransformError::UnknownTransform { .. })
        ));
    }
}
