//! Database Migration Service endpoint lookups.

use crate::{
    common::filter::Filters,
    error::{ApiError, Result},
    find::{self, DescribePages, Page},
};

use aws_sdk_databasemigration::{Client, types};

/// Error codes DMS returns for an unknown endpoint, on reads and deletes alike.
pub const NOT_FOUND_CODES: &[&str] = &["ResourceNotFoundFault"];

/// DescribeEndpoints request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeEndpoints {
    /// Filters evaluated by the service, e.g. `endpoint-id` or `engine-name`.
    pub filters: Filters,
}

impl DescribeEndpoints {
    /// Request for the endpoint whose identifier is `id`.
    pub fn by_id(id: impl Into<String>) -> Self {
        let id: String = id.into();
        Self {
            filters: Filters::custom("endpoint-id", [id]),
        }
    }
}

impl find::Describe for DescribeEndpoints {
    type Item = types::Endpoint;
    const NOT_FOUND_CODES: &'static [&'static str] = NOT_FOUND_CODES;
}

impl DescribePages<DescribeEndpoints> for Client {
    async fn describe_page(
        &self,
        query: &DescribeEndpoints,
        marker: Option<String>,
    ) -> std::result::Result<Page<types::Endpoint>, ApiError> {
        let output = self
            .describe_endpoints()
            .set_filters(query.filters.clone().try_into()?)
            .set_marker(marker)
            .send()
            .await?;
        Ok(Page {
            items: output.endpoints.unwrap_or_default(),
            next_token: output.marker,
        })
    }
}

impl find::Resource for types::Endpoint {
    fn resource_id(&self) -> Option<&str> {
        self.endpoint_identifier()
    }
}

/// Every endpoint matching `query`.
pub async fn find_endpoints<C>(
    client: &C,
    query: &DescribeEndpoints,
) -> Result<Vec<types::Endpoint>>
where
    C: DescribePages<DescribeEndpoints>,
{
    find::find_many(client, query).await
}

/// The single endpoint matching `query`.
pub async fn find_endpoint<C>(client: &C, query: &DescribeEndpoints) -> Result<types::Endpoint>
where
    C: DescribePages<DescribeEndpoints>,
{
    find::find_one(client, query).await
}

/// The endpoint whose identifier is `id`.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "aws_lookup.dms.find_endpoint_by_id", skip(client), err)
)]
pub async fn find_endpoint_by_id<C>(client: &C, id: &str) -> Result<types::Endpoint>
where
    C: DescribePages<DescribeEndpoints>,
{
    find::find_by_id(client, &DescribeEndpoints::by_id(id), id).await
}
