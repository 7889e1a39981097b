use crate::{
    common::{cidr, filter::Filters},
    error::{Error, Result},
    find::{self, DescribePages},
};

use aws_sdk_ec2::types;

const CUSTOMER_GATEWAY_DELETED: &str = "deleted";

describe_query! {
    /// DescribeVpnGateways request.
    DescribeVpnGateways => VpnGateway {
        operation: describe_vpn_gateways,
        ids: set_vpn_gateway_ids,
        filters: set_filters,
        output: vpn_gateways,
        not_found: ["InvalidVpnGatewayID.NotFound"],
        pagination: single_page,
    }
}

describe_query! {
    /// DescribeCustomerGateways request.
    DescribeCustomerGateways => CustomerGateway {
        operation: describe_customer_gateways,
        ids: set_customer_gateway_ids,
        filters: set_filters,
        output: customer_gateways,
        not_found: ["InvalidCustomerGatewayID.NotFound"],
        pagination: single_page,
    }
}

describe_query! {
    /// DescribeVpnConnections request.
    DescribeVpnConnections => VpnConnection {
        operation: describe_vpn_connections,
        ids: set_vpn_connection_ids,
        filters: set_filters,
        output: vpn_connections,
        not_found: ["InvalidVpnConnectionID.NotFound"],
        pagination: single_page,
    }
}

fn deleted(state: Option<&types::VpnState>) -> Option<&str> {
    match state? {
        state @ types::VpnState::Deleted => Some(state.as_str()),
        _ => None,
    }
}

impl find::Resource for types::VpnGateway {
    fn resource_id(&self) -> Option<&str> {
        self.vpn_gateway_id()
    }

    fn terminal_state(&self) -> Option<&str> {
        deleted(self.state())
    }
}

impl find::Resource for types::CustomerGateway {
    fn resource_id(&self) -> Option<&str> {
        self.customer_gateway_id()
    }

    fn terminal_state(&self) -> Option<&str> {
        self.state().filter(|state| *state == CUSTOMER_GATEWAY_DELETED)
    }
}

impl find::Resource for types::VpnConnection {
    fn resource_id(&self) -> Option<&str> {
        self.vpn_connection_id()
    }

    fn terminal_state(&self) -> Option<&str> {
        deleted(self.state())
    }
}

/// The single VPN gateway matching `query`.
pub async fn find_vpn_gateway<C>(client: &C, query: &DescribeVpnGateways) -> Result<types::VpnGateway>
where
    C: DescribePages<DescribeVpnGateways>,
{
    find::find_one(client, query).await
}

/// The VPN gateway `id`; a deleted one is not found.
pub async fn find_vpn_gateway_by_id<C>(client: &C, id: &str) -> Result<types::VpnGateway>
where
    C: DescribePages<DescribeVpnGateways>,
{
    find::find_by_id(client, &DescribeVpnGateways::by_id(id), id).await
}

/// The attachment of VPN gateway `vpn_gateway_id` to VPC `vpc_id`. A detached
/// attachment is not found.
pub async fn find_vpn_gateway_vpc_attachment<C>(
    client: &C,
    vpn_gateway_id: &str,
    vpc_id: &str,
) -> Result<types::VpcAttachment>
where
    C: DescribePages<DescribeVpnGateways>,
{
    let vpn_gateway = find_vpn_gateway_by_id(client, vpn_gateway_id).await?;
    let attachment = vpn_gateway
        .vpc_attachments()
        .iter()
        .find(|attachment| attachment.vpc_id() == Some(vpc_id))
        .ok_or_else(|| Error::empty_result(&vpc_id))?;
    if let Some(state @ types::AttachmentStatus::Detached) = attachment.state() {
        return Err(Error::not_found(Some(state.as_str().to_string())).with_last_request(&vpc_id));
    }
    Ok(attachment.clone())
}

/// The single customer gateway matching `query`.
pub async fn find_customer_gateway<C>(
    client: &C,
    query: &DescribeCustomerGateways,
) -> Result<types::CustomerGateway>
where
    C: DescribePages<DescribeCustomerGateways>,
{
    find::find_one(client, query).await
}

/// The customer gateway `id`; a deleted one is not found.
pub async fn find_customer_gateway_by_id<C>(client: &C, id: &str) -> Result<types::CustomerGateway>
where
    C: DescribePages<DescribeCustomerGateways>,
{
    find::find_by_id(client, &DescribeCustomerGateways::by_id(id), id).await
}

/// The single VPN connection matching `query`.
pub async fn find_vpn_connection<C>(
    client: &C,
    query: &DescribeVpnConnections,
) -> Result<types::VpnConnection>
where
    C: DescribePages<DescribeVpnConnections>,
{
    find::find_one(client, query).await
}

/// The VPN connection `id`; a deleted one is not found.
pub async fn find_vpn_connection_by_id<C>(client: &C, id: &str) -> Result<types::VpnConnection>
where
    C: DescribePages<DescribeVpnConnections>,
{
    find::find_by_id(client, &DescribeVpnConnections::by_id(id), id).await
}

/// The live static route of VPN connection `vpn_connection_id` whose
/// destination is equivalent to `cidr_block`.
pub async fn find_vpn_connection_route<C>(
    client: &C,
    vpn_connection_id: &str,
    cidr_block: &str,
) -> Result<types::VpnStaticRoute>
where
    C: DescribePages<DescribeVpnConnections>,
{
    let query = DescribeVpnConnections::by_filters(Filters::attributes([
        ("route.destination-cidr-block", cidr_block),
        ("vpn-connection-id", vpn_connection_id),
    ]));
    let connection = find_vpn_connection(client, &query).await?;
    connection
        .routes()
        .iter()
        .find(|route| {
            route
                .destination_cidr_block()
                .is_some_and(|destination| cidr::cidr_blocks_equal(destination, cidr_block))
                && deleted(route.state()).is_none()
        })
        .cloned()
        .ok_or_else(|| {
            Error::not_found(Some(format!(
                "EC2 VPN Connection ({vpn_connection_id}) Route ({cidr_block}) not found"
            )))
        })
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::testing::Scripted;
    use rstest::rstest;

    fn vpn_gateway(id: &str, state: types::VpnState) -> types::VpnGateway {
        types::VpnGateway::builder()
            .vpn_gateway_id(id)
            .state(state)
            .vpc_attachments(
                types::VpcAttachment::builder()
                    .vpc_id("vpc-1")
                    .state(types::AttachmentStatus::Attached)
                    .build(),
            )
            .vpc_attachments(
                types::VpcAttachment::builder()
                    .vpc_id("vpc-2")
                    .state(types::AttachmentStatus::Detached)
                    .build(),
            )
            .build()
    }

    #[tokio::test]
    async fn test_find_vpn_gateway_by_id_deleted() {
        let client = Scripted::<DescribeVpnGateways>::items(vec![vpn_gateway(
            "vgw-1",
            types::VpnState::Deleted,
        )]);
        let error = find_vpn_gateway_by_id(&client, "vgw-1").await.unwrap_err();
        match error {
            Error::NotFound {
                message,
                last_request,
                ..
            } => {
                assert_eq!(message.as_deref(), Some("deleted"));
                assert_eq!(
                    last_request,
                    Some(format!("{:?}", DescribeVpnGateways::by_id("vgw-1")))
                );
            }
            other => panic!("expected not found, got {other:?}"),
        }
    }

    #[rstest]
    #[case::attached("vpc-1", None)]
    #[case::detached("vpc-2", Some("detached"))]
    #[case::unknown("vpc-3", Some("empty result"))]
    #[tokio::test]
    async fn test_find_vpn_gateway_vpc_attachment(
        #[case] vpc_id: &str,
        #[case] not_found: Option<&str>,
    ) {
        let client = Scripted::<DescribeVpnGateways>::items(vec![vpn_gateway(
            "vgw-1",
            types::VpnState::Available,
        )]);
        let result = find_vpn_gateway_vpc_attachment(&client, "vgw-1", vpc_id).await;
        match (result, not_found) {
            (Ok(attachment), None) => assert_eq!(attachment.vpc_id(), Some(vpc_id)),
            (Err(Error::NotFound { message, .. }), Some(expected)) => {
                assert_eq!(message.as_deref(), Some(expected))
            }
            (other, _) => panic!("unexpected result {other:?}"),
        }
    }

    #[rstest]
    #[case::available("available", true)]
    #[case::deleting("deleting", true)]
    #[case::deleted("deleted", false)]
    #[tokio::test]
    async fn test_find_customer_gateway_by_id(#[case] state: &str, #[case] found: bool) {
        let gateway = types::CustomerGateway::builder()
            .customer_gateway_id("cgw-1")
            .state(state)
            .build();
        let client = Scripted::<DescribeCustomerGateways>::items(vec![gateway]);
        let result = find_customer_gateway_by_id(&client, "cgw-1").await;
        assert_eq!(result.is_ok(), found);
    }

    #[tokio::test]
    async fn test_find_vpn_connection_by_id_ambiguous() {
        let connection = |id: &str| {
            types::VpnConnection::builder()
                .vpn_connection_id(id)
                .state(types::VpnState::Available)
                .build()
        };
        let client =
            Scripted::<DescribeVpnConnections>::items(vec![connection("vpn-1"), connection("vpn-2")]);
        let error = find_vpn_connection_by_id(&client, "vpn-1").await.unwrap_err();
        assert!(error.is_too_many_results());
    }

    #[rstest]
    #[case::live(types::VpnState::Available, true)]
    #[case::pending(types::VpnState::Pending, true)]
    #[case::deleted(types::VpnState::Deleted, false)]
    #[tokio::test]
    async fn test_find_vpn_connection_route(#[case] state: types::VpnState, #[case] found: bool) {
        let connection = types::VpnConnection::builder()
            .vpn_connection_id("vpn-1")
            .routes(
                types::VpnStaticRoute::builder()
                    .destination_cidr_block("192.168.0.0/24")
                    .state(state)
                    .build(),
            )
            .build();
        let client = Scripted::<DescribeVpnConnections>::items(vec![connection]);
        let result = find_vpn_connection_route(&client, "vpn-1", "192.168.0.0/24").await;
        match result {
            Ok(route) => {
                assert!(found);
                assert_eq!(route.destination_cidr_block(), Some("192.168.0.0/24"));
            }
            Err(error) => {
                assert!(!found);
                assert_eq!(
                    error.to_string(),
                    "EC2 VPN Connection (vpn-1) Route (192.168.0.0/24) not found"
                );
            }
        }
    }

    #[rstest]
    #[case::expanded("2001:0DB8:0:0::/56", true)]
    #[case::uppercase("2001:DB8::/56", true)]
    #[case::other_prefix("2001:db8::/64", false)]
    #[tokio::test]
    async fn test_find_vpn_connection_route_ipv6_notation(
        #[case] cidr_block: &str,
        #[case] found: bool,
    ) {
        let connection = types::VpnConnection::builder()
            .vpn_connection_id("vpn-1")
            .routes(
                types::VpnStaticRoute::builder()
                    .destination_cidr_block("2001:db8::/56")
                    .state(types::VpnState::Available)
                    .build(),
            )
            .build();
        let client = Scripted::<DescribeVpnConnections>::items(vec![connection]);
        let result = find_vpn_connection_route(&client, "vpn-1", cidr_block).await;
        assert_eq!(result.is_ok(), found);
        if let Ok(route) = result {
            assert_eq!(route.destination_cidr_block(), Some("2001:db8::/56"));
        }
    }
}
