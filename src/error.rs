//! Error types for template conversion and tree building.

/// A template had a shape that cannot be converted into a [`Template`].
///
/// [`Template`]: crate::template::Template
#[derive(Debug, thiserror::Error)]
pub enum TemplateError {
    #[error("template must be an object with one selector key, found {found}")]
    NotAnObject { found: &'static str },
    #[error("template object has no selector key")]
    EmptyTemplate,
    #[error("template object must have exactly one selector key, found {}: {}", .keys.len(), .keys.join(", "))]
    MultipleKeys { keys: Vec<String> },
    #[error("`children` of `{selector}` must be a list, found {found}")]
    ChildrenNotAList {
        selector: String,
        found: &'static str,
    },
    #[error("invalid JSON: {0}")]
    Json(#[from] serde_json::Error),
}

/// Building a tree failed.
#[derive(Debug, thiserror::Error)]
pub enum BuildError<E>
where
    E: std::error::Error + 'static,
{
    /// The backend refused an operation (e.g. an invalid tag name).
    #[error("backend error: {0}")]
    Backend(#[source] E),
    #[error(transparent)]
    Template(#[from] TemplateError),
    #[error("template nesting exceeds the limit of {limit} levels")]
    DepthExceeded { limit: usize },
}

impl<E> BuildError<E>
where
    E: std::error::Error + 'static,
{
    /// The backend error, if this failure came from the backend.
    pub fn backend(&self) -> Option<&E> {
        match self {
            BuildError::Backend(e) => Some(e),
            _ => None,
        }
    }
}
