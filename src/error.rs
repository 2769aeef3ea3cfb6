use thiserror::Error;

/// Fatal conditions of a transform run.
///
/// Everything here is raised before the first node is visited; once traversal
/// starts a run always completes.
#[derive(Debug, Error)]
pub enum TransformError {
    /// A configured blacklist entry is neither a string nor a pattern object.
    #[error("Unexpected blacklist pattern: {0}")]
    InvalidPatternKind(String),

    #[error("invalid blacklist pattern `{pattern}`: {source}")]
    InvalidPattern {
        pattern: String,
        #[source]
        source: regex::Error,
    },

    #[error("invalid transform options: {0}")]
    Options(#[from] serde_json::Error),

    #[error("failed to parse source: {}", errors.join("; "))]
    Parse { errors: Vec<String> },
}

pub type Result<T> = std::result::Result<T, TransformError>;
