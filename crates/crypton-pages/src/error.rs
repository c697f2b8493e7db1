use crypton_forms::FormError;

/// Errors raised by the page layer.
#[non_exhaustive]
#[derive(Debug, thiserror::Error)]
pub enum PagesError {
	#[error("No page is registered for path '{0}'")]
	NotFound(String),

	#[error(transparent)]
	Form(#[from] FormError),

	#[error("Failed to serialize submitted data: {0}")]
	Serialization(#[from] serde_json::Error),
}

pub type PagesResult<T> = Result<T, PagesError>;
