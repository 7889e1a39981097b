use crate::{
    error::Result,
    find::{self, DescribePages},
};

use aws_sdk_ec2::types;

describe_query! {
    /// DescribeCarrierGateways request.
    DescribeCarrierGateways => CarrierGateway {
        operation: describe_carrier_gateways,
        ids: set_carrier_gateway_ids,
        filters: set_filters,
        output: carrier_gateways,
        not_found: ["InvalidCarrierGatewayID.NotFound"],
        pagination: next_token,
    }
}

impl find::Resource for types::CarrierGateway {
    fn resource_id(&self) -> Option<&str> {
        self.carrier_gateway_id()
    }

    fn terminal_state(&self) -> Option<&str> {
        match self.state()? {
            state @ types::CarrierGatewayState::Deleted => Some(state.as_str()),
            _ => None,
        }
    }
}

/// The carrier gateway `id`. An empty listing or a deleted gateway is not
/// found.
pub async fn find_carrier_gateway_by_id<C>(client: &C, id: &str) -> Result<types::CarrierGateway>
where
    C: DescribePages<DescribeCarrierGateways>,
{
    find::find_by_id(client, &DescribeCarrierGateways::by_id(id), id).await
}
