use thiserror::Error;

/// A single failed check on a form-driven input, keyed by the field it
/// belongs to so a UI can surface it inline.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldError {
    pub field: String,
    pub message: String,
}

impl FieldError {
    pub fn new(field: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            field: field.into(),
            message: message.into(),
        }
    }
}

impl std::fmt::Display for FieldError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}: {}", self.field, self.message)
    }
}

#[derive(Error, Debug)]
pub enum EduError {
    /// One or more form fields failed validation. Carries every failing
    /// field, not just the first, so they can be shown together.
    #[error("Validation failed: {}", format_field_errors(.0))]
    Validation(Vec<FieldError>),

    #[error("Post not found: {0}")]
    PostNotFound(u64),

    #[error("Tutor not found: {0}")]
    TutorNotFound(u64),

    #[error("Category not found: {0}")]
    CategoryNotFound(u64),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialization(#[from] serde_json::Error),
}

fn format_field_errors(errors: &[FieldError]) -> String {
    errors
        .iter()
        .map(|e| e.to_string())
        .collect::<Vec<_>>()
        .join("; ")
}

pub type Result<T> = std::result::Result<T, EduError>;
