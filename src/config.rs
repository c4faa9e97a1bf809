//! # Draw Configuration Module
//!
//! Environment variable-based configuration for route compilation.
//!
//! ## Environment Variables
//!
//! ### `ROUTEDRAW_ID_CONSTRAINT`
//!
//! The regex constraint embedded in generated id segments. With the default
//! `\d+`, a resource named `posts` gets member routes under `/posts/:id(\d+)`
//! and nested resources under `/posts/:post_id(\d+)/...`.
//!
//! ```bash
//! # Accept ULIDs instead of integer ids
//! export ROUTEDRAW_ID_CONSTRAINT='[0-9A-HJKMNP-TV-Z]{26}'
//! ```
//!
//! ## Usage
//!
//! ```rust
//! use routedraw::config::DrawConfig;
//!
//! let config = DrawConfig::from_env();
//! println!("member id segment: {}", config.id_segment("id"));
//! ```

use regex::Regex;
use std::env;
use tracing::warn;

/// Default regex constraint for id segments
pub const DEFAULT_ID_CONSTRAINT: &str = r"\d+";

/// Route compilation settings.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DrawConfig {
    /// Regex constraint for `:id` and `:<parent>_id` segments (default: `\d+`)
    pub id_constraint: String,
}

impl Default for DrawConfig {
    fn default() -> Self {
        Self {
            id_constraint: DEFAULT_ID_CONSTRAINT.to_string(),
        }
    }
}

impl DrawConfig {
    /// Load configuration from environment variables.
    ///
    /// An id constraint that does not compile as a regex is reported with a
    /// warning and replaced by [`DEFAULT_ID_CONSTRAINT`].
    #[must_use]
    pub fn from_env() -> Self {
        let raw = env::var("ROUTEDRAW_ID_CONSTRAINT").ok();
        DrawConfig {
            id_constraint: id_constraint_or_default(raw.as_deref()),
        }
    }

    /// The `/:name(constraint)` path segment for an id parameter
    #[must_use]
    pub fn id_segment(&self, name: &str) -> String {
        format!("/:{}({})", name, self.id_constraint)
    }
}

fn id_constraint_or_default(raw: Option<&str>) -> String {
    let val = match raw.map(str::trim) {
        Some(val) if !val.is_empty() => val,
        _ => return DEFAULT_ID_CONSTRAINT.to_string(),
    };
    // Compiled the way a registered pattern embeds it; `/` would split the segment.
    let error = if val.contains('/') {
        Some("constraint must not contain '/'".to_string())
    } else {
        Regex::new(&format!("^/({val})$")).err().map(|e| e.to_string())
    };
    match error {
        None => val.to_string(),
        Some(error) => {
            warn!(
                value = %val,
                error = %error,
                default = DEFAULT_ID_CONSTRAINT,
                "Invalid ROUTEDRAW_ID_CONSTRAINT, using default"
            );
            DEFAULT_ID_CONSTRAINT.to_string()
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_id_segment() {
        let config = DrawConfig::default();
        assert_eq!(config.id_segment("id"), r"/:id(\d+)");
        assert_eq!(config.id_segment("post_id"), r"/:post_id(\d+)");
    }

    #[test]
    fn test_id_constraint_validation() {
        assert_eq!(id_constraint_or_default(None), DEFAULT_ID_CONSTRAINT);
        assert_eq!(id_constraint_or_default(Some("  ")), DEFAULT_ID_CONSTRAINT);
        assert_eq!(id_constraint_or_default(Some(" [0-9a-f]{24} ")), "[0-9a-f]{24}");
        assert_eq!(id_constraint_or_default(Some("[0-9")), DEFAULT_ID_CONSTRAINT);
        assert_eq!(id_constraint_or_default(Some(r"(\d+")), DEFAULT_ID_CONSTRAINT);
        assert_eq!(id_constraint_or_default(Some("[^/]+")), DEFAULT_ID_CONSTRAINT);
    }
}
