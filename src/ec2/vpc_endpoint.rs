use crate::{
    error::{Error, Result},
    find::{self, DescribePages},
};

use aws_sdk_ec2::types;

const VPC_ENDPOINT_DELETED: &str = "deleted";

describe_query! {
    /// DescribeVpcEndpoints request.
    DescribeVpcEndpoints => VpcEndpoint {
        operation: describe_vpc_endpoints,
        ids: set_vpc_endpoint_ids,
        filters: set_filters,
        output: vpc_endpoints,
        not_found: ["InvalidVpcEndpointId.NotFound"],
        pagination: next_token,
    }
}

impl find::Resource for types::VpcEndpoint {
    fn resource_id(&self) -> Option<&str> {
        self.vpc_endpoint_id()
    }

    // the service reports endpoint states in either case
    fn terminal_state(&self) -> Option<&str> {
        self.state()
            .map(types::State::as_str)
            .filter(|state| state.eq_ignore_ascii_case(VPC_ENDPOINT_DELETED))
    }
}

/// Every VPC endpoint matching `query`.
pub async fn find_vpc_endpoints<C>(
    client: &C,
    query: &DescribeVpcEndpoints,
) -> Result<Vec<types::VpcEndpoint>>
where
    C: DescribePages<DescribeVpcEndpoints>,
{
    find::find_many(client, query).await
}

/// The single VPC endpoint matching `query`.
pub async fn find_vpc_endpoint<C>(
    client: &C,
    query: &DescribeVpcEndpoints,
) -> Result<types::VpcEndpoint>
where
    C: DescribePages<DescribeVpcEndpoints>,
{
    find::find_one(client, query).await
}

/// The VPC endpoint `id`; a deleted one is not found.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "aws_lookup.ec2.find_vpc_endpoint_by_id", skip(client), err)
)]
pub async fn find_vpc_endpoint_by_id<C>(client: &C, id: &str) -> Result<types::VpcEndpoint>
where
    C: DescribePages<DescribeVpcEndpoints>,
{
    find::find_by_id(client, &DescribeVpcEndpoints::by_id(id), id).await
}

/// Succeeds when gateway endpoint `vpc_endpoint_id` routes through route table
/// `route_table_id`.
pub async fn find_vpc_endpoint_route_table_association_exists<C>(
    client: &C,
    vpc_endpoint_id: &str,
    route_table_id: &str,
) -> Result<()>
where
    C: DescribePages<DescribeVpcEndpoints>,
{
    let endpoint = find_vpc_endpoint_by_id(client, vpc_endpoint_id).await?;
    if endpoint.route_table_ids().iter().any(|id| id == route_table_id) {
        return Ok(());
    }
    Err(Error::not_found(Some(format!(
        "VPC Endpoint Route Table Association ({vpc_endpoint_id}/{route_table_id}) not found"
    ))))
}

/// Succeeds when interface endpoint `vpc_endpoint_id` has a network interface
/// in subnet `subnet_id`.
pub async fn find_vpc_endpoint_subnet_association_exists<C>(
    client: &C,
    vpc_endpoint_id: &str,
    subnet_id: &str,
) -> Result<()>
where
    C: DescribePages<DescribeVpcEndpoints>,
{
    let endpoint = find_vpc_endpoint_by_id(client, vpc_endpoint_id).await?;
    if endpoint.subnet_ids().iter().any(|id| id == subnet_id) {
        return Ok(());
    }
    Err(Error::not_found(Some(format!(
        "VPC Endpoint ({vpc_endpoint_id}) Subnet ({subnet_id}) Association not found"
    ))))
}
