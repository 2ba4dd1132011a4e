//! Assertion types and builders for verifying a pattern.

use std::collections::HashSet;
use tql_core::Reference;
use tql_pattern::{Pattern, PatternError, PatternNode};

use crate::fixture::reference;

/// Everything a step expects of the scenario's pattern.
#[derive(Debug, Default)]
pub struct Assertion {
    pub rendered: Option<String>,
    pub normalised: Option<String>,
    pub disjuncts: Option<usize>,
    pub bound_by: Option<HashSet<Reference>>,
    pub unbound: Option<(HashSet<Reference>, Reference)>,
    pub scope: Option<HashSet<Reference>>,
}

impl Assertion {
    pub fn new() -> Self {
        Self::default()
    }

    /// Expect the pattern to render exactly as `text`.
    pub fn renders(mut self, text: &str) -> Self {
        self.rendered = Some(text.to_string());
        self
    }

    /// Expect the normalised pattern to render exactly as `text`.
    pub fn normalises_to(mut self, text: &str) -> Self {
        self.normalised = Some(text.to_string());
        self
    }

    /// Expect the normalised pattern to have `count` disjuncts.
    pub fn disjuncts(mut self, count: usize) -> Self {
        self.disjuncts = Some(count);
        self
    }

    /// Expect the pattern to be bound by the named variables.
    pub fn bound_by(mut self, names: &[&str]) -> Self {
        self.bound_by = Some(names.iter().map(|name| reference(name)).collect());
        self
    }

    /// Expect binding against `names` to fail on `missing`.
    pub fn unbound(mut self, names: &[&str], missing: &str) -> Self {
        let bounds = names.iter().map(|name| reference(name)).collect();
        self.unbound = Some((bounds, reference(missing)));
        self
    }

    /// Expect the pattern to bind exactly the named variables for its scope.
    pub fn scope(mut self, names: &[&str]) -> Self {
        self.scope = Some(names.iter().map(|name| reference(name)).collect());
        self
    }

    /// Check every expectation against `pattern`, returning the first mismatch.
    pub fn check(&self, pattern: &Pattern) -> Result<(), String> {
        if let Some(expected) = &self.rendered {
            let actual = pattern.to_string();
            if &actual != expected {
                return Err(format!("expected rendering {:?}, got {:?}", expected, actual));
            }
        }

        let normalised = pattern.normalise();
        if let Some(expected) = &self.normalised {
            let actual = normalised.to_string();
            if &actual != expected {
                return Err(format!("expected normal form {:?}, got {:?}", expected, actual));
            }
        }
        if let Some(expected) = self.disjuncts {
            if normalised.len() != expected {
                return Err(format!(
                    "expected {} disjuncts, got {}",
                    expected,
                    normalised.len()
                ));
            }
        }

        if let Some(bounds) = &self.bound_by {
            pattern
                .validate_is_bound_by(bounds)
                .map_err(|e| format!("expected pattern to be bound: {}", e))?;
        }
        if let Some((bounds, missing)) = &self.unbound {
            match pattern.validate_is_bound_by(bounds) {
                Err(PatternError::UnboundVariableReference { reference }) if &reference == missing => {}
                other => {
                    return Err(format!(
                        "expected {} to be unbound, got {:?}",
                        missing, other
                    ))
                }
            }
        }
        if let Some(expected) = &self.scope {
            let actual = pattern.named_references();
            if &actual != expected {
                return Err(format!("expected scope {:?}, got {:?}", expected, actual));
            }
        }
        Ok(())
    }
}
