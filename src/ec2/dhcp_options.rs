use crate::{
    error::Result,
    find::{self, DescribePages},
};

use aws_sdk_ec2::types;

describe_query! {
    /// DescribeDhcpOptions request.
    DescribeDhcpOptions => DhcpOptions {
        operation: describe_dhcp_options,
        ids: set_dhcp_options_ids,
        filters: set_filters,
        output: dhcp_options,
        not_found: ["InvalidDhcpOptionID.NotFound"],
        pagination: next_token,
    }
}

impl find::Resource for types::DhcpOptions {
    fn resource_id(&self) -> Option<&str> {
        self.dhcp_options_id()
    }
}

/// Every DHCP options set matching `query`.
pub async fn find_dhcp_options_sets<C>(
    client: &C,
    query: &DescribeDhcpOptions,
) -> Result<Vec<types::DhcpOptions>>
where
    C: DescribePages<DescribeDhcpOptions>,
{
    find::find_many(client, query).await
}

/// The single DHCP options set matching `query`.
pub async fn find_dhcp_options<C>(
    client: &C,
    query: &DescribeDhcpOptions,
) -> Result<types::DhcpOptions>
where
    C: DescribePages<DescribeDhcpOptions>,
{
    find::find_one(client, query).await
}

/// The DHCP options set `id`.
pub async fn find_dhcp_options_by_id<C>(client: &C, id: &str) -> Result<types::DhcpOptions>
where
    C: DescribePages<DescribeDhcpOptions>,
{
    find::find_by_id(client, &DescribeDhcpOptions::by_id(id), id).await
}
