use crate::dependency_analysis::domain::PackageId;
use crate::shared::error::ShowdepsError;
use crate::shared::Result;
use regex::Regex;

/// Wildcard token matching any string, including `/`
pub const WILDCARD: &str = "...";

/// Maximum pattern length accepted from the command line
const MAX_PATTERN_LENGTH: usize = 1024;

/// PatternMatcher - anchored package path matcher
///
/// `...` matches any string. As a special case a pattern ending in `/...`
/// also matches the path without that suffix, so `a/b/...` matches `a/b`,
/// `a/b/c` and `a/b/c/d` but not `a/bc`.
#[derive(Debug, Clone)]
pub struct PatternMatcher {
    pattern: String,
    regex: Regex,
}

impl PatternMatcher {
    /// Compiles a pattern
    ///
    /// # Errors
    /// Returns [`ShowdepsError::InvalidPattern`] for empty or over-long
    /// patterns, or if the generated expression is rejected.
    pub fn compile(pattern: &str) -> Result<Self> {
        if pattern.is_empty() {
            return Err(invalid(pattern, "pattern must not be empty"));
        }
        if pattern.len() > MAX_PATTERN_LENGTH {
            return Err(invalid(
                pattern,
                &format!("pattern exceeds {} bytes", MAX_PATTERN_LENGTH),
            ));
        }

        let mut expr = regex::escape(pattern).replace(r"\.\.\.", ".*");
        if let Some(prefix) = expr.strip_suffix("/.*") {
            expr = format!("{}(/.*)?", prefix);
        }

        let regex = Regex::new(&format!("^{}$", expr))
            .map_err(|e| invalid(pattern, &e.to_string()))?;

        Ok(Self {
            pattern: pattern.to_string(),
            regex,
        })
    }

    /// Whether `arg` contains the wildcard token
    pub fn is_pattern(arg: &str) -> bool {
        arg.contains(WILDCARD)
    }

    pub fn matches(&self, id: &PackageId) -> bool {
        self.matches_str(id.as_str())
    }

    /// Matches an arbitrary path string (used for directory patterns)
    pub fn matches_str(&self, path: &str) -> bool {
        self.regex.is_match(path)
    }

    pub fn pattern(&self) -> &str {
        &self.pattern
    }
}

fn invalid(pattern: &str, reason: &str) -> anyhow::Error {
    ShowdepsError::InvalidPattern {
        pattern: pattern.to_string(),
        reason: reason.to_string(),
    }
    .into()
}
