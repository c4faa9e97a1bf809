//! Dispatch targets: what a declared route invokes.
//!
//! A route declaration names its target either with the `controller#action`
//! shorthand or with a structured [`Target`]. At registration time the
//! declaring scope turns the target into a [`TargetDescriptor`] by injecting
//! its namespace chain; callers never supply the chain themselves.

use crate::error::{DrawError, DrawResult};
use crate::scope::validate_name;
use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// Shorthand target format: exactly one `#`, both halves non-empty
static SHORTHAND_REGEX: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"^([^#\s]+)#([^#\s]+)$").expect("shorthand target regex should be valid")
});

/// A declared target as written in a route definition
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
pub struct Target {
    pub controller: String,
    pub action: String,
    /// Extra path segment(s) inserted between the scope prefix and the route path
    #[serde(default)]
    pub prefix: Option<String>,
    /// Extra namespace segment appended to the descriptor's chain (and, absent
    /// a `prefix`, to the path)
    #[serde(default)]
    pub namespace: Option<String>,
}

impl Target {
    pub fn new(controller: impl Into<String>, action: impl Into<String>) -> Self {
        Self {
            controller: controller.into(),
            action: action.into(),
            prefix: None,
            namespace: None,
        }
    }

    #[must_use]
    pub fn with_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.prefix = Some(prefix.into());
        self
    }

    #[must_use]
    pub fn with_namespace(mut self, namespace: impl Into<String>) -> Self {
        self.namespace = Some(namespace.into());
        self
    }

    /// Parse the `controller#action` shorthand
    ///
    /// Anything other than exactly one `#` with non-empty halves is rejected
    /// with [`DrawError::MalformedTarget`].
    pub fn parse(shorthand: &str) -> DrawResult<Self> {
        let caps = SHORTHAND_REGEX
            .captures(shorthand)
            .ok_or_else(|| DrawError::MalformedTarget {
                target: shorthand.to_string(),
            })?;
        Ok(Self::new(&caps[1], &caps[2]))
    }

    /// Check a structured target against the rules the shorthand enforces
    ///
    /// Controller and action must be non-empty and free of `#` and
    /// whitespace ([`DrawError::MalformedTarget`]). A namespace override must
    /// be a valid namespace segment ([`DrawError::InvalidName`]).
    pub fn validate(&self) -> DrawResult {
        let shorthand = format!("{}#{}", self.controller, self.action);
        if !SHORTHAND_REGEX.is_match(&shorthand) {
            return Err(DrawError::MalformedTarget { target: shorthand });
        }
        if let Some(ns) = &self.namespace {
            validate_name("namespace", ns)?;
        }
        Ok(())
    }
}

impl FromStr for Target {
    type Err = DrawError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Target::parse(s)
    }
}

/// Conversion into a [`Target`] for the verb operations
///
/// Implemented for the shorthand string forms (fallible) and for [`Target`]
/// itself.
pub trait IntoTarget {
    fn into_target(self) -> DrawResult<Target>;
}

impl IntoTarget for Target {
    fn into_target(self) -> DrawResult<Target> {
        self.validate()?;
        Ok(self)
    }
}

impl IntoTarget for &str {
    fn into_target(self) -> DrawResult<Target> {
        Target::parse(self)
    }
}

impl IntoTarget for String {
    fn into_target(self) -> DrawResult<Target> {
        Target::parse(&self)
    }
}

impl IntoTarget for &String {
    fn into_target(self) -> DrawResult<Target> {
        Target::parse(self)
    }
}

/// Canonical dispatch target handed to the resolver
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct TargetDescriptor {
    pub controller: String,
    pub action: String,
    /// Namespace chain of the declaring scope, plus the target's own namespace
    pub namespace: Vec<String>,
}

impl fmt::Display for TargetDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for segment in &self.namespace {
            write!(f, "{segment}::")?;
        }
        write!(f, "{}#{}", self.controller, self.action)
    }
}
