//! Scripted stand-in for the AWS clients.

use crate::{
    error::ApiError,
    find::{Describe, DescribePages, Page},
};

use std::{collections, sync::Mutex};

/// Replays canned pages for `Q` and records every call it receives.
pub(crate) struct Scripted<Q: Describe> {
    responses: Mutex<collections::VecDeque<Result<Page<Q::Item>, ApiError>>>,
    calls: Mutex<Vec<(String, Option<String>)>>,
}

impl<Q: Describe> Scripted<Q> {
    pub(crate) fn from_pages(responses: Vec<Result<Page<Q::Item>, ApiError>>) -> Self {
        Self {
            responses: Mutex::new(responses.into()),
            calls: Mutex::new(Vec::new()),
        }
    }

    /// Chains `pages` with tokens `token-1`, `token-2`, ...
    pub(crate) fn pages(pages: Vec<Vec<Q::Item>>) -> Self {
        let count = pages.len();
        let responses = pages
            .into_iter()
            .enumerate()
            .map(|(index, items)| {
                let next_token = (index + 1 < count).then(|| format!("token-{}", index + 1));
                Ok(Page { items, next_token })
            })
            .collect();
        Self::from_pages(responses)
    }

    pub(crate) fn items(items: Vec<Q::Item>) -> Self {
        Self::from_pages(vec![Ok(Page::last(items))])
    }

    pub(crate) fn error(code: &str) -> Self {
        Self::from_pages(vec![Err(ApiError::new(code, "scripted failure"))])
    }

    /// Continuation tokens passed to each call, in order.
    pub(crate) fn tokens(&self) -> Vec<Option<String>> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(_, token)| token.clone())
            .collect()
    }

    /// Debug rendering of each query received, in order.
    pub(crate) fn queries(&self) -> Vec<String> {
        self.calls
            .lock()
            .unwrap()
            .iter()
            .map(|(query, _)| query.clone())
            .collect()
    }
}

impl<Q: Describe> DescribePages<Q> for Scripted<Q> {
    async fn describe_page(
        &self,
        query: &Q,
        next_token: Option<String>,
    ) -> Result<Page<Q::Item>, ApiError> {
        self.calls
            .lock()
            .unwrap()
            .push((format!("{query:?}"), next_token));
        self.responses
            .lock()
            .unwrap()
            .pop_front()
            .unwrap_or_else(|| Ok(Page::last(Vec::new())))
    }
}
