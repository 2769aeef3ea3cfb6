//! Blacklist compilation.
//!
//! A single suffix-anchored regex decides which member names are left alone.
//! User entries are tried first, then the built-in ones. The last built-in
//! entry excludes every name that does not start with `_`, which is what
//! limits renaming to underscore-prefixed members in the default setup.

use lazy_static::lazy_static;
use regex::Regex;
use serde_json::Value;

use crate::error::{Result, TransformError};

lazy_static! {
    /// Always appended after user entries, in this order.
    static ref DEFAULT_BLACKLIST: Vec<ExclusionPattern> = vec![
        builtin(r"^_super.*"),  // _super prefix
        builtin(r"^_extend.*"), // _extend prefix
        builtin(r"^__.*"),      // double underscore
        builtin(r"^_$"),        // bare underscore
        builtin(r"^[^_].*"),    // anything without a leading underscore
    ];
}

fn builtin(source: &str) -> ExclusionPattern {
    ExclusionPattern::Pattern(Regex::new(source).expect("built-in blacklist pattern is valid"))
}

/// One blacklist entry.
#[derive(Debug, Clone)]
pub enum ExclusionPattern {
    /// Matched verbatim.
    Literal(String),
    /// Embedded by its source text, unescaped.
    Pattern(Regex),
}

impl ExclusionPattern {
    pub fn literal(text: impl Into<String>) -> Self {
        ExclusionPattern::Literal(text.into())
    }

    pub fn pattern(source: &str) -> Result<Self> {
        Regex::new(source)
            .map(ExclusionPattern::Pattern)
            .map_err(|source_err| TransformError::InvalidPattern {
                pattern: source.to_string(),
                source: source_err,
            })
    }

    /// Reads an entry from JSON configuration.
    ///
    /// A string is a literal and `{ "regex": "<source>" }` is a pattern. Any
    /// other value is rejected with [`TransformError::InvalidPatternKind`].
    pub fn from_value(value: &Value) -> Result<Self> {
        match value {
            Value::String(text) => Ok(Self::literal(text.as_str())),
            Value::Object(map) => match map.get("regex") {
                Some(Value::String(source)) => Self::pattern(source),
                _ => Err(TransformError::InvalidPatternKind(value.to_string())),
            },
            other => Err(TransformError::InvalidPatternKind(other.to_string())),
        }
    }

    /// The fragment this entry contributes to the composite regex. Each one
    /// is its own group so inline flags like `(?i)` stay local to it.
    fn fragment(&self) -> String {
        let source = match self {
            ExclusionPattern::Literal(text) => regex::escape(text),
            ExclusionPattern::Pattern(regex) => regex.as_str().to_string(),
        };
        format!("(?:{})", source)
    }
}

/// The compiled blacklist.
#[derive(Debug, Clone)]
pub struct Blacklist {
    regex: Regex,
}

impl Blacklist {
    /// Builds the matcher from `additional` followed by the built-in entries.
    pub fn compile(additional: &[ExclusionPattern]) -> Result<Self> {
        let fragments: Vec<String> = additional
            .iter()
            .chain(DEFAULT_BLACKLIST.iter())
            .map(ExclusionPattern::fragment)
            .collect();
        let source = format!("({})$", fragments.join("|"));

        match Regex::new(&source) {
            Ok(regex) => Ok(Blacklist { regex }),
            Err(err) => Err(TransformError::InvalidPattern {
                pattern: source,
                source: err,
            }),
        }
    }

    /// True when some suffix of `name` matches an entry.
    pub fn is_excluded(&self, name: &str) -> bool {
        self.regex.is_match(name)
    }

    pub fn as_str(&self) -> &str {
        self.regex.as_str()
    }
}
