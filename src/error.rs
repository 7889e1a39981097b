use aws_sdk_ec2::error::{BuildError, ProvideErrorMetadata, SdkError};
use std::{error, fmt};
use thiserror::Error;

/// Result of every lookup in this crate.
pub type Result<T, E = Error> = std::result::Result<T, E>;

/// Failure of a lookup.
///
/// Callers implementing idempotent deletes or drift removal should branch on
/// [`Error::is_not_found`]; [`Error::TooManyResults`] is never a not-found
/// condition.
#[derive(Debug, Error)]
pub enum Error {
    /// The object does not exist, is in a terminal lifecycle state, or the
    /// service echoed a different object than the one requested.
    #[error("{}", not_found_message(.message))]
    NotFound {
        /// Why the object counts as absent, e.g. the terminal state name.
        message: Option<String>,
        /// Debug rendering of the request that produced this result.
        last_request: Option<String>,
        /// Service error that was classified as not-found, if any.
        #[source]
        source: Option<ApiError>,
    },
    /// A singular lookup matched more than one object.
    #[error("too many results: wanted 1, got {count}")]
    TooManyResults {
        /// Number of objects the service returned.
        count: usize,
        /// Debug rendering of the ambiguous request.
        query: String,
    },
    /// Any other service or transport failure, untouched.
    #[error(transparent)]
    Api(#[from] ApiError),
    /// The caller asked for an attribute this crate has no mapping for.
    #[error("unsupported {kind} attribute: {name}")]
    UnsupportedAttribute {
        /// Kind of object the attribute belongs to.
        kind: &'static str,
        /// Attribute name as requested.
        name: String,
    },
}

fn not_found_message(message: &Option<String>) -> &str {
    message.as_deref().unwrap_or("couldn't find resource")
}

impl Error {
    /// Whether the object should be treated as absent.
    pub fn is_not_found(&self) -> bool {
        matches!(self, Self::NotFound { .. })
    }

    /// Whether a singular lookup was ambiguous.
    pub fn is_too_many_results(&self) -> bool {
        matches!(self, Self::TooManyResults { .. })
    }

    /// The service error code behind this failure, if one was reported.
    pub fn code(&self) -> Option<&str> {
        match self {
            Self::NotFound {
                source: Some(source),
                ..
            }
            | Self::Api(source) => source.code(),
            _ => None,
        }
    }

    pub(crate) fn not_found(message: Option<String>) -> Self {
        Self::NotFound {
            message,
            last_request: None,
            source: None,
        }
    }

    pub(crate) fn empty_result(query: &impl fmt::Debug) -> Self {
        Self::not_found(Some("empty result".to_string())).with_last_request(query)
    }

    pub(crate) fn too_many_results(count: usize, query: &impl fmt::Debug) -> Self {
        Self::TooManyResults {
            count,
            query: format!("{query:?}"),
        }
    }

    /// Rewrites `error` into [`Error::NotFound`] when its code is one of
    /// `not_found_codes`, otherwise wraps it unchanged.
    pub(crate) fn from_api(
        error: ApiError,
        not_found_codes: &[&str],
        query: &impl fmt::Debug,
    ) -> Self {
        match error.code() {
            Some(code) if not_found_codes.contains(&code) => {
                #[cfg(feature = "tracing")]
                tracing::debug!(code, "service reported object as missing");
                Self::NotFound {
                    message: None,
                    last_request: Some(format!("{query:?}")),
                    source: Some(error),
                }
            }
            _ => Self::Api(error),
        }
    }

    pub(crate) fn with_last_request(self, query: &impl fmt::Debug) -> Self {
        match self {
            Self::NotFound {
                message, source, ..
            } => Self::NotFound {
                message,
                last_request: Some(format!("{query:?}")),
                source,
            },
            other => other,
        }
    }
}

/// Turns a not-found lookup into `Ok(None)`, keeping every other outcome.
pub fn optional<T>(result: Result<T>) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(error) if error.is_not_found() => Ok(None),
        Err(error) => Err(error),
    }
}

/// Error reported by an AWS service call, with its code and message lifted
/// out of the SDK error.
#[derive(Debug)]
pub struct ApiError {
    code: Option<String>,
    message: Option<String>,
    source: Option<Box<dyn error::Error + Send + Sync>>,
}

impl ApiError {
    /// Creates an error from a bare code and message.
    pub fn new(code: impl Into<String>, message: impl Into<String>) -> Self {
        Self {
            code: Some(code.into()),
            message: Some(message.into()),
            source: None,
        }
    }

    /// Service error code, e.g. `InvalidVpcID.NotFound`.
    pub fn code(&self) -> Option<&str> {
        self.code.as_deref()
    }

    /// Human readable message returned by the service.
    pub fn message(&self) -> Option<&str> {
        self.message.as_deref()
    }
}

impl fmt::Display for ApiError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match (&self.code, &self.message, &self.source) {
            (Some(code), Some(message), _) => write!(f, "{code}: {message}"),
            (Some(code), None, _) => write!(f, "{code}"),
            (None, Some(message), _) => write!(f, "{message}"),
            (None, None, Some(source)) => write!(f, "{source}"),
            (None, None, None) => write!(f, "unknown AWS API error"),
        }
    }
}

impl error::Error for ApiError {
    fn source(&self) -> Option<&(dyn error::Error + 'static)> {
        self.source
            .as_deref()
            .map(|source| source as &(dyn error::Error + 'static))
    }
}

impl<E, R> From<SdkError<E, R>> for ApiError
where
    E: ProvideErrorMetadata + error::Error + Send + Sync + 'static,
    R: fmt::Debug + Send + Sync + 'static,
{
    fn from(error: SdkError<E, R>) -> Self {
        let (code, message) = match error.as_service_error() {
            Some(service_error) => (
                service_error.code().map(str::to_string),
                service_error.message().map(str::to_string),
            ),
            None => (None, None),
        };
        Self {
            code,
            message,
            source: Some(Box::new(error)),
        }
    }
}

impl From<BuildError> for ApiError {
    fn from(error: BuildError) -> Self {
        Self {
            code: None,
            message: Some(error.to_string()),
            source: Some(Box::new(error)),
        }
    }
}
