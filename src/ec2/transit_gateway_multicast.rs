use crate::{
    common::filter::Filters,
    error::{Error, Result},
    find::{self, DescribePages},
};

use aws_sdk_ec2::types;

const MULTICAST_DOMAIN_NOT_FOUND: &str = "InvalidTransitGatewayMulticastDomainId.NotFound";

describe_query! {
    /// DescribeTransitGatewayMulticastDomains request.
    DescribeTransitGatewayMulticastDomains => TransitGatewayMulticastDomain {
        operation: describe_transit_gateway_multicast_domains,
        ids: set_transit_gateway_multicast_domain_ids,
        filters: set_filters,
        output: transit_gateway_multicast_domains,
        not_found: [MULTICAST_DOMAIN_NOT_FOUND],
        pagination: next_token,
    }
}

scoped_query! {
    /// GetTransitGatewayMulticastDomainAssociations request.
    GetTransitGatewayMulticastDomainAssociations => TransitGatewayMulticastDomainAssociation {
        operation: get_transit_gateway_multicast_domain_associations,
        scope: transit_gateway_multicast_domain_id,
        output: multicast_domain_associations,
        not_found: [MULTICAST_DOMAIN_NOT_FOUND],
    }
}

scoped_query! {
    /// SearchTransitGatewayMulticastGroups request.
    SearchTransitGatewayMulticastGroups => TransitGatewayMulticastGroup {
        operation: search_transit_gateway_multicast_groups,
        scope: transit_gateway_multicast_domain_id,
        output: multicast_groups,
        not_found: [MULTICAST_DOMAIN_NOT_FOUND],
    }
}

impl find::Resource for types::TransitGatewayMulticastDomain {
    fn resource_id(&self) -> Option<&str> {
        self.transit_gateway_multicast_domain_id()
    }

    fn terminal_state(&self) -> Option<&str> {
        match self.state()? {
            state @ types::TransitGatewayMulticastDomainState::Deleted => Some(state.as_str()),
            _ => None,
        }
    }
}

/// How a network interface takes part in a multicast group.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
enum GroupRole {
    Member,
    Source,
}

impl GroupRole {
    fn filters(self, group_ip_address: &str) -> Filters {
        let (member, source) = match self {
            Self::Member => ("true", "false"),
            Self::Source => ("false", "true"),
        };
        Filters::attributes([
            ("group-ip-address", group_ip_address),
            ("is-group-member", member),
            ("is-group-source", source),
        ])
    }

    fn holds(self, group: &types::TransitGatewayMulticastGroup) -> bool {
        let flag = match self {
            Self::Member => group.group_member(),
            Self::Source => group.group_source(),
        };
        flag.unwrap_or_default()
    }
}

/// Every multicast domain matching `query`.
pub async fn find_transit_gateway_multicast_domains<C>(
    client: &C,
    query: &DescribeTransitGatewayMulticastDomains,
) -> Result<Vec<types::TransitGatewayMulticastDomain>>
where
    C: DescribePages<DescribeTransitGatewayMulticastDomains>,
{
    find::find_many(client, query).await
}

/// The single multicast domain matching `query`. A domain listed without its
/// options counts as no match.
pub async fn find_transit_gateway_multicast_domain<C>(
    client: &C,
    query: &DescribeTransitGatewayMulticastDomains,
) -> Result<types::TransitGatewayMulticastDomain>
where
    C: DescribePages<DescribeTransitGatewayMulticastDomains>,
{
    let domain = find::find_one(client, query).await?;
    if domain.options().is_none() {
        return Err(Error::empty_result(query));
    }
    Ok(domain)
}

/// The multicast domain `id`; a deleted one is not found.
pub async fn find_transit_gateway_multicast_domain_by_id<C>(
    client: &C,
    id: &str,
) -> Result<types::TransitGatewayMulticastDomain>
where
    C: DescribePages<DescribeTransitGatewayMulticastDomains>,
{
    let query = DescribeTransitGatewayMulticastDomains::by_id(id);
    let domain = find_transit_gateway_multicast_domain(client, &query).await?;
    find::check_resource(domain, &query, id)
}

/// Every multicast domain association matching `query`.
pub async fn find_transit_gateway_multicast_domain_associations<C>(
    client: &C,
    query: &GetTransitGatewayMulticastDomainAssociations,
) -> Result<Vec<types::TransitGatewayMulticastDomainAssociation>>
where
    C: DescribePages<GetTransitGatewayMulticastDomainAssociations>,
{
    find::find_many(client, query).await
}

/// The single multicast domain association matching `query`. An association
/// listed without its subnet counts as no match.
pub async fn find_transit_gateway_multicast_domain_association<C>(
    client: &C,
    query: &GetTransitGatewayMulticastDomainAssociations,
) -> Result<types::TransitGatewayMulticastDomainAssociation>
where
    C: DescribePages<GetTransitGatewayMulticastDomainAssociations>,
{
    let association = find::find_one(client, query).await?;
    if association.subnet().is_none() {
        return Err(Error::empty_result(query));
    }
    Ok(association)
}

/// The association of subnet `subnet_id` through attachment `attachment_id`
/// with multicast domain `multicast_domain_id`; a disassociated one is not found.
pub async fn find_transit_gateway_multicast_domain_association_by_three_part_key<C>(
    client: &C,
    multicast_domain_id: &str,
    attachment_id: &str,
    subnet_id: &str,
) -> Result<types::TransitGatewayMulticastDomainAssociation>
where
    C: DescribePages<GetTransitGatewayMulticastDomainAssociations>,
{
    let query = GetTransitGatewayMulticastDomainAssociations::new(
        multicast_domain_id,
        Filters::attributes([
            ("subnet-id", subnet_id),
            ("transit-gateway-attachment-id", attachment_id),
        ]),
    );
    let association = find_transit_gateway_multicast_domain_association(client, &query).await?;
    let subnet = association.subnet();
    if let Some(state @ types::TransitGatewayMulitcastDomainAssociationState::Disassociated) =
        subnet.and_then(types::SubnetAssociation::state)
    {
        return Err(Error::not_found(Some(state.as_str().to_string())).with_last_request(&query));
    }
    if association.transit_gateway_attachment_id() != Some(attachment_id)
        || subnet.and_then(types::SubnetAssociation::subnet_id) != Some(subnet_id)
    {
        return Err(Error::not_found(None).with_last_request(&query));
    }
    Ok(association)
}

/// Every multicast group registration matching `query`.
pub async fn find_transit_gateway_multicast_groups<C>(
    client: &C,
    query: &SearchTransitGatewayMulticastGroups,
) -> Result<Vec<types::TransitGatewayMulticastGroup>>
where
    C: DescribePages<SearchTransitGatewayMulticastGroups>,
{
    find::find_many(client, query).await
}

async fn find_transit_gateway_multicast_group<C>(
    client: &C,
    multicast_domain_id: &str,
    group_ip_address: &str,
    network_interface_id: &str,
    role: GroupRole,
) -> Result<types::TransitGatewayMulticastGroup>
where
    C: DescribePages<SearchTransitGatewayMulticastGroups>,
{
    let query =
        SearchTransitGatewayMulticastGroups::new(multicast_domain_id, role.filters(group_ip_address));
    let group = find_transit_gateway_multicast_groups(client, &query)
        .await?
        .into_iter()
        .find(|group| group.network_interface_id() == Some(network_interface_id))
        .ok_or_else(|| Error::empty_result(&query))?;
    if group.group_ip_address() != Some(group_ip_address) || !role.holds(&group) {
        return Err(Error::not_found(None).with_last_request(&query));
    }
    Ok(group)
}

/// The registration of network interface `network_interface_id` as a member of
/// multicast group `group_ip_address` in domain `multicast_domain_id`.
pub async fn find_transit_gateway_multicast_group_member_by_three_part_key<C>(
    client: &C,
    multicast_domain_id: &str,
    group_ip_address: &str,
    network_interface_id: &str,
) -> Result<types::TransitGatewayMulticastGroup>
where
    C: DescribePages<SearchTransitGatewayMulticastGroups>,
{
    find_transit_gateway_multicast_group(
        client,
        multicast_domain_id,
        group_ip_address,
        network_interface_id,
        GroupRole::Member,
    )
    .await
}

/// The registration of network interface `network_interface_id` as a source of
/// multicast group `group_ip_address` in domain `multicast_domain_id`.
pub async fn find_transit_gateway_multicast_group_source_by_three_part_key<C>(
    client: &C,
    multicast_domain_id: &str,
    group_ip_address: &str,
    network_interface_id: &str,
) -> Result<types::TransitGatewayMulticastGroup>
where
    C: DescribePages<SearchTransitGatewayMulticastGroups>,
{
    find_transit_gateway_multicast_group(
        client,
        multicast_domain_id,
        group_ip_address,
        network_interface_id,
        GroupRole::Source,
    )
    .await
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::testing::Scripted;
    use rstest::rstest;

    fn domain(state: types::TransitGatewayMulticastDomainState) -> types::TransitGatewayMulticastDomain {
        types::TransitGatewayMulticastDomain::builder()
            .transit_gateway_multicast_domain_id("tgw-mcast-domain-1")
            .state(state)
            .options(types::TransitGatewayMulticastDomainOptions::builder().build())
            .build()
    }

    #[rstest]
    #[case::available(domain(types::TransitGatewayMulticastDomainState::Available), None)]
    #[case::deleting(domain(types::TransitGatewayMulticastDomainState::Deleting), None)]
    #[case::deleted(domain(types::TransitGatewayMulticastDomainState::Deleted), Some("deleted"))]
    #[case::no_options(
        types::TransitGatewayMulticastDomain::builder()
            .transit_gateway_multicast_domain_id("tgw-mcast-domain-1")
            .build(),
        Some("empty result")
    )]
    #[tokio::test]
    async fn test_find_transit_gateway_multicast_domain_by_id(
        #[case] returned: types::TransitGatewayMulticastDomain,
        #[case] not_found: Option<&str>,
    ) {
        let client = Scripted::<DescribeTransitGatewayMulticastDomains>::items(vec![returned]);
        let result =
            find_transit_gateway_multicast_domain_by_id(&client, "tgw-mcast-domain-1").await;
        match (result, not_found) {
            (Ok(found), None) => assert!(found.options().is_some()),
            (Err(error), Some(message)) => {
                assert!(error.is_not_found());
                assert_eq!(error.to_string(), message);
            }
            (other, _) => panic!("unexpected result {other:?}"),
        }
    }

    fn association(
        attachment_id: &str,
        subnet_id: &str,
        state: types::TransitGatewayMulitcastDomainAssociationState,
    ) -> types::TransitGatewayMulticastDomainAssociation {
        types::TransitGatewayMulticastDomainAssociation::builder()
            .transit_gateway_attachment_id(attachment_id)
            .subnet(
                types::SubnetAssociation::builder()
                    .subnet_id(subnet_id)
                    .state(state)
                    .build(),
            )
            .build()
    }

    #[rstest]
    #[case::associated(
        association("tgw-attach-1", "subnet-1", types::TransitGatewayMulitcastDomainAssociationState::Associated),
        None
    )]
    #[case::disassociated(
        association("tgw-attach-1", "subnet-1", types::TransitGatewayMulitcastDomainAssociationState::Disassociated),
        Some("disassociated")
    )]
    #[case::other_subnet(
        association("tgw-attach-1", "subnet-2", types::TransitGatewayMulitcastDomainAssociationState::Associated),
        Some("couldn't find resource")
    )]
    #[case::no_subnet(
        types::TransitGatewayMulticastDomainAssociation::builder()
            .transit_gateway_attachment_id("tgw-attach-1")
            .build(),
        Some("empty result")
    )]
    #[tokio::test]
    async fn test_find_transit_gateway_multicast_domain_association_by_three_part_key(
        #[case] returned: types::TransitGatewayMulticastDomainAssociation,
        #[case] not_found: Option<&str>,
    ) {
        let client = Scripted::<GetTransitGatewayMulticastDomainAssociations>::items(vec![returned]);
        let result = find_transit_gateway_multicast_domain_association_by_three_part_key(
            &client,
            "tgw-mcast-domain-1",
            "tgw-attach-1",
            "subnet-1",
        )
        .await;
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

    fn group(
        group_ip_address: &str,
        network_interface_id: &str,
        member: bool,
    ) -> types::TransitGatewayMulticastGroup {
        types::TransitGatewayMulticastGroup::builder()
            .group_ip_address(group_ip_address)
            .network_interface_id(network_interface_id)
            .group_member(member)
            .group_source(!member)
            .build()
    }

    #[rstest]
    #[case::member("eni-2", Some(true))]
    #[case::other_interface("eni-3", None)]
    #[tokio::test]
    async fn test_find_transit_gateway_multicast_group_member(
        #[case] network_interface_id: &str,
        #[case] found: Option<bool>,
    ) {
        let client = Scripted::<SearchTransitGatewayMulticastGroups>::pages(vec![
            vec![group("224.0.0.1", "eni-1", true)],
            vec![group("224.0.0.1", "eni-2", true)],
        ]);
        let result = find_transit_gateway_multicast_group_member_by_three_part_key(
            &client,
            "tgw-mcast-domain-1",
            "224.0.0.1",
            network_interface_id,
        )
        .await;
        match (result, found) {
            (Ok(group), Some(_)) => assert_eq!(group.group_member(), Some(true)),
            (Err(error), None) => assert_eq!(error.to_string(), "empty result"),
            (other, _) => panic!("unexpected result {other:?}"),
        }
        let expected = SearchTransitGatewayMulticastGroups::new(
            "tgw-mcast-domain-1",
            Filters::attributes([
                ("group-ip-address", "224.0.0.1"),
                ("is-group-member", "true"),
                ("is-group-source", "false"),
            ]),
        );
        assert_eq!(client.queries()[0], format!("{expected:?}"));
    }

    #[rstest]
    #[case::source(group("224.0.0.1", "eni-1", false), None)]
    #[case::member_only(group("224.0.0.1", "eni-1", true), Some("couldn't find resource"))]
    #[case::other_group(group("224.0.0.2", "eni-1", false), Some("couldn't find resource"))]
    #[tokio::test]
    async fn test_find_transit_gateway_multicast_group_source(
        #[case] returned: types::TransitGatewayMulticastGroup,
        #[case] not_found: Option<&str>,
    ) {
        let client = Scripted::<SearchTransitGatewayMulticastGroups>::items(vec![returned]);
        let result = find_transit_gateway_multicast_group_source_by_three_part_key(
            &client,
            "tgw-mcast-domain-1",
            "224.0.0.1",
            "eni-1",
        )
        .await;
        match (result, not_found) {
            (Ok(group), None) => assert_eq!(group.group_source(), Some(true)),
            (Err(error), Some(message)) => {
                assert!(error.is_not_found());
                assert_eq!(error.to_string(), message);
            }
            (other, _) => panic!("unexpected result {other:?}"),
        }
    }

    #[tokio::test]
    async fn test_find_transit_gateway_multicast_groups_unknown_domain() {
        let client = Scripted::<SearchTransitGatewayMulticastGroups>::error(MULTICAST_DOMAIN_NOT_FOUND);
        let query = SearchTransitGatewayMulticastGroups::new("tgw-mcast-domain-1", Filters::default());
        let error = find_transit_gateway_multicast_groups(&client, &query)
            .await
            .unwrap_err();
        assert!(error.is_not_found());
    }
}
