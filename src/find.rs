use crate::error::{ApiError, Error, Result};

use std::{fmt, future::Future};

/// One response of a listing call.
#[derive(Clone, Debug, PartialEq)]
pub struct Page<T> {
    /// Objects on this page, in the order the service returned them.
    pub items: Vec<T>,
    /// Continuation token; `None` or empty means this was the last page.
    pub next_token: Option<String>,
}

impl<T> Page<T> {
    /// A final page holding `items`.
    pub fn last(items: Vec<T>) -> Self {
        Self {
            items,
            next_token: None,
        }
    }
}

/// A typed describe/list request.
///
/// The `Debug` rendering of a query is carried by not-found and too-many-results
/// errors for diagnostics.
pub trait Describe: fmt::Debug + Send + Sync {
    /// Object type the request lists.
    type Item: Send;

    /// Service error codes meaning "the filtered-for identifier does not exist".
    const NOT_FOUND_CODES: &'static [&'static str];
}

/// A client able to fetch one page of `Q`.
///
/// Implemented for the AWS SDK clients; tests provide scripted fakes.
pub trait DescribePages<Q: Describe>: Sync {
    /// Fetches the page starting at `next_token`.
    fn describe_page(
        &self,
        query: &Q,
        next_token: Option<String>,
    ) -> impl Future<Output = std::result::Result<Page<Q::Item>, ApiError>> + Send;
}

/// Identity and lifecycle of a remote object.
pub trait Resource {
    /// The provider-assigned identifier, compared against the requested one.
    fn resource_id(&self) -> Option<&str>;

    /// The lifecycle state name when it means the object is logically gone.
    fn terminal_state(&self) -> Option<&str> {
        None
    }
}

/// Lists every object matching `query`, following continuation tokens.
///
/// Zero matches is an empty `Vec`, not an error.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "aws_lookup.find_many", skip(client), err)
)]
pub async fn find_many<C, Q>(client: &C, query: &Q) -> Result<Vec<Q::Item>>
where
    C: DescribePages<Q>,
    Q: Describe,
{
    let mut items = Vec::new();
    let mut next_token = None;
    loop {
        let page = client
            .describe_page(query, next_token)
            .await
            .map_err(|error| Error::from_api(error, Q::NOT_FOUND_CODES, query))?;
        items.extend(page.items);
        match page.next_token {
            Some(token) if !token.is_empty() => next_token = Some(token),
            _ => break,
        }
    }
    Ok(items)
}

/// Looks up the single object matching `query`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "aws_lookup.find_one", skip(client), err)
)]
pub async fn find_one<C, Q>(client: &C, query: &Q) -> Result<Q::Item>
where
    C: DescribePages<Q>,
    Q: Describe,
{
    let mut items = find_many(client, query).await?;
    if items.len() > 1 {
        return Err(Error::too_many_results(items.len(), query));
    }
    items.pop().ok_or_else(|| Error::empty_result(query))
}

/// Looks up the object `id` and checks it is still alive and really is `id`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "aws_lookup.find_by_id", skip(client), err)
)]
pub async fn find_by_id<C, Q>(client: &C, query: &Q, id: &str) -> Result<Q::Item>
where
    C: DescribePages<Q>,
    Q: Describe,
    Q::Item: Resource,
{
    let item = find_one(client, query).await?;
    check_resource(item, query, id)
}

/// Applies the terminal state and eventual consistency checks to an object
/// fetched for `id`.
pub fn check_resource<T: Resource>(item: T, query: &impl fmt::Debug, id: &str) -> Result<T> {
    if let Some(state) = item.terminal_state() {
        return Err(Error::not_found(Some(state.to_string())).with_last_request(query));
    }
    if item.resource_id() != Some(id) {
        return Err(Error::not_found(None).with_last_request(query));
    }
    Ok(item)
}
