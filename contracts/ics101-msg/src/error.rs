use cosmwasm_std::StdError;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum CodecError {
    /// The wire value does not match the message schema at `path`.
    #[error("schema violation at `{path}`: {reason}")]
    SchemaViolation { path: String, reason: String },
}

impl CodecError {
    /// Violation at `path`; the empty path stands for the whole message.
    pub fn violation(path: impl Into<String>, reason: impl Into<String>) -> Self {
        let path = path.into();
        CodecError::SchemaViolation {
            path: if path.is_empty() {
                "<root>".to_string()
            } else {
                path
            },
            reason: reason.into(),
        }
    }

    pub fn path(&self) -> &str {
        match self {
            CodecError::SchemaViolation { path, .. } => path,
        }
    }

    pub fn reason(&self) -> &str {
        match self {
            CodecError::SchemaViolation { reason, .. } => reason,
        }
    }
}

impl From<CodecError> for StdError {
    fn from(err: CodecError) -> Self {
        StdError::generic_err(err.to_string())
    }
}
