use crate::{
    error::{Error, Result},
    find::{self, DescribePages},
};

use aws_sdk_ec2::types;

const ATTACHMENT_NOT_FOUND: &str = "InvalidTransitGatewayAttachmentID.NotFound";

describe_query! {
    /// DescribeTransitGatewayAttachments request.
    DescribeTransitGatewayAttachments => TransitGatewayAttachment {
        operation: describe_transit_gateway_attachments,
        ids: set_transit_gateway_attachment_ids,
        filters: set_filters,
        output: transit_gateway_attachments,
        not_found: [ATTACHMENT_NOT_FOUND],
        pagination: next_token,
    }
}

describe_query! {
    /// DescribeTransitGatewayVpcAttachments request.
    DescribeTransitGatewayVpcAttachments => TransitGatewayVpcAttachment {
        operation: describe_transit_gateway_vpc_attachments,
        ids: set_transit_gateway_attachment_ids,
        filters: set_filters,
        output: transit_gateway_vpc_attachments,
        not_found: [ATTACHMENT_NOT_FOUND],
        pagination: next_token,
    }
}

describe_query! {
    /// DescribeTransitGatewayConnects request.
    DescribeTransitGatewayConnects => TransitGatewayConnect {
        operation: describe_transit_gateway_connects,
        ids: set_transit_gateway_attachment_ids,
        filters: set_filters,
        output: transit_gateway_connects,
        not_found: [ATTACHMENT_NOT_FOUND],
        pagination: next_token,
    }
}

describe_query! {
    /// DescribeTransitGatewayConnectPeers request.
    DescribeTransitGatewayConnectPeers => TransitGatewayConnectPeer {
        operation: describe_transit_gateway_connect_peers,
        ids: set_transit_gateway_connect_peer_ids,
        filters: set_filters,
        output: transit_gateway_connect_peers,
        not_found: ["InvalidTransitGatewayConnectPeerID.NotFound"],
        pagination: next_token,
    }
}

impl find::Resource for types::TransitGatewayAttachment {
    fn resource_id(&self) -> Option<&str> {
        self.transit_gateway_attachment_id()
    }
}

impl find::Resource for types::TransitGatewayVpcAttachment {
    fn resource_id(&self) -> Option<&str> {
        self.transit_gateway_attachment_id()
    }

    fn terminal_state(&self) -> Option<&str> {
        match self.state()? {
            state @ (types::TransitGatewayAttachmentState::Deleted
            | types::TransitGatewayAttachmentState::Failed
            | types::TransitGatewayAttachmentState::Rejected) => Some(state.as_str()),
            _ => None,
        }
    }
}

impl find::Resource for types::TransitGatewayConnect {
    fn resource_id(&self) -> Option<&str> {
        self.transit_gateway_attachment_id()
    }

    fn terminal_state(&self) -> Option<&str> {
        match self.state()? {
            state @ types::TransitGatewayAttachmentState::Deleted => Some(state.as_str()),
            _ => None,
        }
    }
}

impl find::Resource for types::TransitGatewayConnectPeer {
    fn resource_id(&self) -> Option<&str> {
        self.transit_gateway_connect_peer_id()
    }

    fn terminal_state(&self) -> Option<&str> {
        match self.state()? {
            state @ types::TransitGatewayConnectPeerState::Deleted => Some(state.as_str()),
            _ => None,
        }
    }
}

/// Every transit gateway attachment matching `query`, whatever its resource type.
pub async fn find_transit_gateway_attachments<C>(
    client: &C,
    query: &DescribeTransitGatewayAttachments,
) -> Result<Vec<types::TransitGatewayAttachment>>
where
    C: DescribePages<DescribeTransitGatewayAttachments>,
{
    find::find_many(client, query).await
}

/// The single transit gateway attachment matching `query`.
pub async fn find_transit_gateway_attachment<C>(
    client: &C,
    query: &DescribeTransitGatewayAttachments,
) -> Result<types::TransitGatewayAttachment>
where
    C: DescribePages<DescribeTransitGatewayAttachments>,
{
    find::find_one(client, query).await
}

/// The transit gateway attachment `id`.
pub async fn find_transit_gateway_attachment_by_id<C>(
    client: &C,
    id: &str,
) -> Result<types::TransitGatewayAttachment>
where
    C: DescribePages<DescribeTransitGatewayAttachments>,
{
    find::find_by_id(client, &DescribeTransitGatewayAttachments::by_id(id), id).await
}

/// Every transit gateway VPC attachment matching `query`.
pub async fn find_transit_gateway_vpc_attachments<C>(
    client: &C,
    query: &DescribeTransitGatewayVpcAttachments,
) -> Result<Vec<types::TransitGatewayVpcAttachment>>
where
    C: DescribePages<DescribeTransitGatewayVpcAttachments>,
{
    find::find_many(client, query).await
}

/// The single transit gateway VPC attachment matching `query`. An attachment
/// listed without its options counts as no match.
pub async fn find_transit_gateway_vpc_attachment<C>(
    client: &C,
    query: &DescribeTransitGatewayVpcAttachments,
) -> Result<types::TransitGatewayVpcAttachment>
where
    C: DescribePages<DescribeTransitGatewayVpcAttachments>,
{
    let attachment = find::find_one(client, query).await?;
    if attachment.options().is_none() {
        return Err(Error::empty_result(query));
    }
    Ok(attachment)
}

/// The transit gateway VPC attachment `id`; a deleted, failed or rejected one
/// is not found.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(
        name = "aws_lookup.ec2.find_transit_gateway_vpc_attachment_by_id",
        skip(client),
        err
    )
)]
pub async fn find_transit_gateway_vpc_attachment_by_id<C>(
    client: &C,
    id: &str,
) -> Result<types::TransitGatewayVpcAttachment>
where
    C: DescribePages<DescribeTransitGatewayVpcAttachments>,
{
    let query = DescribeTransitGatewayVpcAttachments::by_id(id);
    let attachment = find_transit_gateway_vpc_attachment(client, &query).await?;
    find::check_resource(attachment, &query, id)
}

/// Every transit gateway Connect attachment matching `query`.
pub async fn find_transit_gateway_connects<C>(
    client: &C,
    query: &DescribeTransitGatewayConnects,
) -> Result<Vec<types::TransitGatewayConnect>>
where
    C: DescribePages<DescribeTransitGatewayConnects>,
{
    find::find_many(client, query).await
}

/// The single transit gateway Connect attachment matching `query`. An
/// attachment listed without its options counts as no match.
pub async fn find_transit_gateway_connect<C>(
    client: &C,
    query: &DescribeTransitGatewayConnects,
) -> Result<types::TransitGatewayConnect>
where
    C: DescribePages<DescribeTransitGatewayConnects>,
{
    let connect = find::find_one(client, query).await?;
    if connect.options().is_none() {
        return Err(Error::empty_result(query));
    }
    Ok(connect)
}

/// The transit gateway Connect attachment `id`; a deleted one is not found.
pub async fn find_transit_gateway_connect_by_id<C>(
    client: &C,
    id: &str,
) -> Result<types::TransitGatewayConnect>
where
    C: DescribePages<DescribeTransitGatewayConnects>,
{
    let query = DescribeTransitGatewayConnects::by_id(id);
    let connect = find_transit_gateway_connect(client, &query).await?;
    find::check_resource(connect, &query, id)
}

/// Every transit gateway Connect peer matching `query`.
pub async fn find_transit_gateway_connect_peers<C>(
    client: &C,
    query: &DescribeTransitGatewayConnectPeers,
) -> Result<Vec<types::TransitGatewayConnectPeer>>
where
    C: DescribePages<DescribeTransitGatewayConnectPeers>,
{
    find::find_many(client, query).await
}

/// The single transit gateway Connect peer matching `query`. A peer listed
/// without any BGP configuration counts as no match.
pub async fn find_transit_gateway_connect_peer<C>(
    client: &C,
    query: &DescribeTransitGatewayConnectPeers,
) -> Result<types::TransitGatewayConnectPeer>
where
    C: DescribePages<DescribeTransitGatewayConnectPeers>,
{
    let peer = find::find_one(client, query).await?;
    let has_bgp_configuration = peer
        .connect_peer_configuration()
        .is_some_and(|configuration| !configuration.bgp_configurations().is_empty());
    if !has_bgp_configuration {
        return Err(Error::empty_result(query));
    }
    Ok(peer)
}

/// The transit gateway Connect peer `id`; a deleted one is not found.
pub async fn find_transit_gateway_connect_peer_by_id<C>(
    client: &C,
    id: &str,
) -> Result<types::TransitGatewayConnectPeer>
where
    C: DescribePages<DescribeTransitGatewayConnectPeers>,
{
    let query = DescribeTransitGatewayConnectPeers::by_id(id);
    let peer = find_transit_gateway_connect_peer(client, &query).await?;
    find::check_resource(peer, &query, id)
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::testing::Scripted;
    use rstest::rstest;

    #[rstest]
    #[case::matching("tgw-attach-1", true)]
    #[case::stale_echo("tgw-attach-2", false)]
    #[tokio::test]
    async fn test_find_transit_gateway_attachment_by_id(
        #[case] returned_id: &str,
        #[case] found: bool,
    ) {
        let attachment = types::TransitGatewayAttachment::builder()
            .transit_gateway_attachment_id(returned_id)
            .resource_type(types::TransitGatewayAttachmentResourceType::Vpc)
            .state(types::TransitGatewayAttachmentState::Deleted)
            .build();
        let client = Scripted::<DescribeTransitGatewayAttachments>::items(vec![attachment]);
        let result = find_transit_gateway_attachment_by_id(&client, "tgw-attach-1").await;
        assert_eq!(result.is_ok(), found);
    }

    fn vpc_attachment(
        id: &str,
        state: types::TransitGatewayAttachmentState,
    ) -> types::TransitGatewayVpcAttachment {
        types::TransitGatewayVpcAttachment::builder()
            .transit_gateway_attachment_id(id)
            .state(state)
            .options(types::TransitGatewayVpcAttachmentOptions::builder().build())
            .build()
    }

    #[rstest]
    #[case::available(vpc_attachment("tgw-attach-1", types::TransitGatewayAttachmentState::Available), None)]
    #[case::pending_acceptance(
        vpc_attachment("tgw-attach-1", types::TransitGatewayAttachmentState::PendingAcceptance),
        None
    )]
    #[case::deleted(
        vpc_attachment("tgw-attach-1", types::TransitGatewayAttachmentState::Deleted),
        Some("deleted")
    )]
    #[case::failed(
        vpc_attachment("tgw-attach-1", types::TransitGatewayAttachmentState::Failed),
        Some("failed")
    )]
    #[case::rejected(
        vpc_attachment("tgw-attach-1", types::TransitGatewayAttachmentState::Rejected),
        Some("rejected")
    )]
    #[case::no_options(
        types::TransitGatewayVpcAttachment::builder()
            .transit_gateway_attachment_id("tgw-attach-1")
            .build(),
        Some("empty result")
    )]
    #[case::stale_echo(
        vpc_attachment("tgw-attach-2", types::TransitGatewayAttachmentState::Available),
        Some("couldn't find resource")
    )]
    #[tokio::test]
    async fn test_find_transit_gateway_vpc_attachment_by_id(
        #[case] returned: types::TransitGatewayVpcAttachment,
        #[case] not_found: Option<&str>,
    ) {
        let client = Scripted::<DescribeTransitGatewayVpcAttachments>::items(vec![returned]);
        let result = find_transit_gateway_vpc_attachment_by_id(&client, "tgw-attach-1").await;
        match (result, not_found) {
            (Ok(found), None) => {
                assert_eq!(found.transit_gateway_attachment_id(), Some("tgw-attach-1"))
            }
            (Err(error), Some(message)) => {
                assert!(error.is_not_found());
                assert_eq!(error.to_string(), message);
            }
            (other, _) => panic!("unexpected result {other:?}"),
        }
    }

    #[rstest]
    #[case::available(types::TransitGatewayAttachmentState::Available, None)]
    #[case::failed(types::TransitGatewayAttachmentState::Failed, None)]
    #[case::deleted(types::TransitGatewayAttachmentState::Deleted, Some("deleted"))]
    #[tokio::test]
    async fn test_find_transit_gateway_connect_by_id(
        #[case] state: types::TransitGatewayAttachmentState,
        #[case] not_found: Option<&str>,
    ) {
        let connect = types::TransitGatewayConnect::builder()
            .transit_gateway_attachment_id("tgw-attach-1")
            .transport_transit_gateway_attachment_id("tgw-attach-0")
            .state(state)
            .options(
                types::TransitGatewayConnectOptions::builder()
                    .protocol(types::ProtocolValue::Gre)
                    .build(),
            )
            .build();
        let client = Scripted::<DescribeTransitGatewayConnects>::items(vec![connect]);
        let result = find_transit_gateway_connect_by_id(&client, "tgw-attach-1").await;
        match (result, not_found) {
            (Ok(found), None) => {
                assert_eq!(found.transport_transit_gateway_attachment_id(), Some("tgw-attach-0"))
            }
            (Err(error), Some(message)) => assert_eq!(error.to_string(), message),
            (other, _) => panic!("unexpected result {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_find_transit_gateway_connect_without_options() {
        let connect = types::TransitGatewayConnect::builder()
            .transit_gateway_attachment_id("tgw-attach-1")
            .build();
        let client = Scripted::<DescribeTransitGatewayConnects>::items(vec![connect]);
        let error = find_transit_gateway_connect_by_id(&client, "tgw-attach-1")
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "empty result");
    }

    fn connect_peer(
        state: types::TransitGatewayConnectPeerState,
        bgp_configurations: Vec<types::TransitGatewayAttachmentBgpConfiguration>,
    ) -> types::TransitGatewayConnectPeer {
        types::TransitGatewayConnectPeer::builder()
            .transit_gateway_connect_peer_id("tgw-connect-peer-1")
            .state(state)
            .connect_peer_configuration(
                types::TransitGatewayConnectPeerConfiguration::builder()
                    .set_bgp_configurations(Some(bgp_configurations))
                    .build(),
            )
            .build()
    }

    fn bgp_configuration() -> types::TransitGatewayAttachmentBgpConfiguration {
        types::TransitGatewayAttachmentBgpConfiguration::builder()
            .peer_asn(64512)
            .build()
    }

    #[rstest]
    #[case::available(
        connect_peer(types::TransitGatewayConnectPeerState::Available, vec![bgp_configuration()]),
        None
    )]
    #[case::deleted(
        connect_peer(types::TransitGatewayConnectPeerState::Deleted, vec![bgp_configuration()]),
        Some("deleted")
    )]
    #[case::no_bgp(
        connect_peer(types::TransitGatewayConnectPeerState::Available, vec![]),
        Some("empty result")
    )]
    #[tokio::test]
    async fn test_find_transit_gateway_connect_peer_by_id(
        #[case] returned: types::TransitGatewayConnectPeer,
        #[case] not_found: Option<&str>,
    ) {
        let client = Scripted::<DescribeTransitGatewayConnectPeers>::items(vec![returned]);
        let result = find_transit_gateway_connect_peer_by_id(&client, "tgw-connect-peer-1").await;
        match (result, not_found) {
            (Ok(found), None) => {
                assert_eq!(found.transit_gateway_connect_peer_id(), Some("tgw-connect-peer-1"))
            }
            (Err(error), Some(message)) => {
                assert!(error.is_not_found());
                assert_eq!(error.to_string(), message);
            }
            (other, _) => panic!("unexpected result {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_find_transit_gateway_connect_peer_unknown() {
        let client = Scripted::<DescribeTransitGatewayConnectPeers>::error(
            "InvalidTransitGatewayConnectPeerID.NotFound",
        );
        let error = find_transit_gateway_connect_peer_by_id(&client, "tgw-connect-peer-1")
            .await
            .unwrap_err();
        assert!(error.is_not_found());
    }
}
