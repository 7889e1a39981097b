use crate::error::{ApiError, Error, Result};

/// Maps a lookup made while refreshing `resource` into what the caller's state
/// should hold.
///
/// `Ok(None)` means the resource is gone and should be dropped from state. A
/// resource created moments ago is never dropped: not finding it then is an
/// error.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "aws_lookup.handler.read", skip(result), err)
)]
pub fn read<T>(resource: &str, result: Result<T>, is_new_resource: bool) -> Result<Option<T>> {
    match result {
        Ok(value) => Ok(Some(value)),
        Err(error) if error.is_not_found() && !is_new_resource => {
            #[cfg(feature = "tracing")]
            tracing::warn!(resource, %error, "not found, removing from state");
            Ok(None)
        }
        Err(error) => Err(error),
    }
}

/// Maps the response of a delete call for `resource`: an object that is
/// already gone counts as deleted.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "aws_lookup.handler.delete", skip(result), err)
)]
pub fn delete<T, E>(
    resource: &str,
    result: std::result::Result<T, E>,
    not_found_codes: &[&str],
) -> Result<()>
where
    E: Into<ApiError>,
{
    match result {
        Ok(_) => Ok(()),
        Err(error) => match Error::from_api(error.into(), not_found_codes, &resource) {
            Error::NotFound { .. } => Ok(()),
            error => Err(error),
        },
    }
}
