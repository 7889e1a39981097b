use crate::{
    error::Result,
    find::{self, DescribePages},
};

use aws_sdk_ec2::types;

describe_query! {
    /// DescribeNatGateways request.
    DescribeNatGateways => NatGateway {
        operation: describe_nat_gateways,
        ids: set_nat_gateway_ids,
        filters: set_filter,
        output: nat_gateways,
        not_found: ["NatGatewayNotFound"],
        pagination: next_token,
    }
}

impl find::Resource for types::NatGateway {
    fn resource_id(&self) -> Option<&str> {
        self.nat_gateway_id()
    }

    fn terminal_state(&self) -> Option<&str> {
        match self.state()? {
            state @ types::NatGatewayState::Deleted => Some(state.as_str()),
            _ => None,
        }
    }
}

/// Every NAT gateway matching `query`, deleted ones included.
pub async fn find_nat_gateways<C>(
    client: &C,
    query: &DescribeNatGateways,
) -> Result<Vec<types::NatGateway>>
where
    C: DescribePages<DescribeNatGateways>,
{
    find::find_many(client, query).await
}

/// The single NAT gateway matching `query`.
pub async fn find_nat_gateway<C>(
    client: &C,
    query: &DescribeNatGateways,
) -> Result<types::NatGateway>
where
    C: DescribePages<DescribeNatGateways>,
{
    find::find_one(client, query).await
}

/// The NAT gateway `id`; a deleted one is not found.
pub async fn find_nat_gateway_by_id<C>(client: &C, id: &str) -> Result<types::NatGateway>
where
    C: DescribePages<DescribeNatGateways>,
{
    find::find_by_id(client, &DescribeNatGateways::by_id(id), id).await
}
