//! CloudWatch RUM app monitor lookups.

use crate::{
    error::{ApiError, Result},
    find::{self, DescribePages, Page},
};

use aws_sdk_rum::{Client, types};

/// Error codes RUM returns for an unknown app monitor.
pub const NOT_FOUND_CODES: &[&str] = &["ResourceNotFoundException"];

/// GetAppMonitor request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetAppMonitor {
    /// Name of the app monitor.
    pub name: String,
}

impl find::Describe for GetAppMonitor {
    type Item = types::AppMonitor;
    const NOT_FOUND_CODES: &'static [&'static str] = NOT_FOUND_CODES;
}

impl DescribePages<GetAppMonitor> for Client {
    async fn describe_page(
        &self,
        query: &GetAppMonitor,
        _next_token: Option<String>,
    ) -> std::result::Result<Page<types::AppMonitor>, ApiError> {
        let output = self.get_app_monitor().name(&query.name).send().await?;
        Ok(Page::last(output.app_monitor.into_iter().collect()))
    }
}

/// ListAppMonitors request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ListAppMonitors;

impl find::Describe for ListAppMonitors {
    type Item = types::AppMonitorSummary;
    const NOT_FOUND_CODES: &'static [&'static str] = &[];
}

impl DescribePages<ListAppMonitors> for Client {
    async fn describe_page(
        &self,
        _query: &ListAppMonitors,
        next_token: Option<String>,
    ) -> std::result::Result<Page<types::AppMonitorSummary>, ApiError> {
        let output = self
            .list_app_monitors()
            .set_next_token(next_token)
            .send()
            .await?;
        Ok(Page {
            items: output.app_monitor_summaries.unwrap_or_default(),
            next_token: output.next_token,
        })
    }
}

impl find::Resource for types::AppMonitor {
    fn resource_id(&self) -> Option<&str> {
        self.name()
    }
}

/// The app monitor named `name`. A response without a monitor is not found.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "aws_lookup.rum.find_app_monitor_by_name", skip(client), err)
)]
pub async fn find_app_monitor_by_name<C>(client: &C, name: &str) -> Result<types::AppMonitor>
where
    C: DescribePages<GetAppMonitor>,
{
    let query = GetAppMonitor {
        name: name.to_string(),
    };
    find::find_by_id(client, &query, name).await
}

/// Summaries of every app monitor in the account and region.
pub async fn find_app_monitor_summaries<C>(client: &C) -> Result<Vec<types::AppMonitorSummary>>
where
    C: DescribePages<ListAppMonitors>,
{
    find::find_many(client, &ListAppMonitors).await
}
