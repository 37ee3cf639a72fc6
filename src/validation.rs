use url::Url;

/// Validation error types
#[derive(Debug, PartialEq)]
pub enum ValidationError {
    InvalidTargetUrl(String, url::ParseError),
}

impl std::fmt::Display for ValidationError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ValidationError::InvalidTargetUrl(target, cause) => {
                write!(f, "target '{}' is not a valid URL: {}", target, cause)
            }
        }
    }
}

/// Trait for request types that need validation before a process is spawned
pub trait Validatable {
    /// Validate the request, returning an error if invalid
    fn validate(&self) -> Result<(), ValidationError>;
}

/// Validate that a target string parses as a well-formed absolute URL
pub fn validate_target_url(target: &str) -> Result<(), ValidationError> {
    match Url::parse(target) {
        Ok(_) => Ok(()),
        Err(e) => Err(ValidationError::InvalidTargetUrl(target.to_string(), e)),
    }
}
