use crate::{
    common::{self, filter::Filters},
    error::{ApiError, Error, Result},
    find::{self, DescribePages, Page},
};

use aws_sdk_ec2::{Client, types};

const CLIENT_VPN_ENDPOINT_NOT_FOUND: &str = "InvalidClientVpnEndpointId.NotFound";

describe_query! {
    /// DescribeClientVpnEndpoints request.
    DescribeClientVpnEndpoints => ClientVpnEndpoint {
        operation: describe_client_vpn_endpoints,
        ids: set_client_vpn_endpoint_ids,
        filters: set_filters,
        output: client_vpn_endpoints,
        not_found: [CLIENT_VPN_ENDPOINT_NOT_FOUND],
        pagination: next_token,
    }
}

scoped_query! {
    /// DescribeClientVpnAuthorizationRules request.
    DescribeClientVpnAuthorizationRules => AuthorizationRule {
        operation: describe_client_vpn_authorization_rules,
        scope: client_vpn_endpoint_id,
        output: authorization_rules,
        not_found: [CLIENT_VPN_ENDPOINT_NOT_FOUND],
    }
}

scoped_query! {
    /// DescribeClientVpnRoutes request.
    DescribeClientVpnRoutes => ClientVpnRoute {
        operation: describe_client_vpn_routes,
        scope: client_vpn_endpoint_id,
        output: routes,
        not_found: [CLIENT_VPN_ENDPOINT_NOT_FOUND],
    }
}

/// DescribeClientVpnTargetNetworks request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeClientVpnTargetNetworks {
    /// Client VPN endpoint the target networks are associated with.
    pub client_vpn_endpoint_id: String,
    /// Associations to describe; empty means no restriction.
    pub association_ids: Vec<String>,
    /// Filters evaluated by the service.
    pub filters: Filters,
}

impl find::Describe for DescribeClientVpnTargetNetworks {
    type Item = types::TargetNetwork;
    const NOT_FOUND_CODES: &'static [&'static str] = &[
        CLIENT_VPN_ENDPOINT_NOT_FOUND,
        "InvalidClientVpnAssociationId.NotFound",
    ];
}

impl DescribePages<DescribeClientVpnTargetNetworks> for Client {
    async fn describe_page(
        &self,
        query: &DescribeClientVpnTargetNetworks,
        next_token: Option<String>,
    ) -> std::result::Result<Page<types::TargetNetwork>, ApiError> {
        let output = self
            .describe_client_vpn_target_networks()
            .client_vpn_endpoint_id(&query.client_vpn_endpoint_id)
            .set_association_ids(common::non_empty(&query.association_ids))
            .set_filters(query.filters.clone().into())
            .set_next_token(next_token)
            .send()
            .await?;
        Ok(Page {
            items: output.client_vpn_target_networks.unwrap_or_default(),
            next_token: output.next_token,
        })
    }
}

impl find::Resource for types::ClientVpnEndpoint {
    fn resource_id(&self) -> Option<&str> {
        self.client_vpn_endpoint_id()
    }

    fn terminal_state(&self) -> Option<&str> {
        match self.status()?.code()? {
            code @ types::ClientVpnEndpointStatusCode::Deleted => Some(code.as_str()),
            _ => None,
        }
    }
}

/// Every Client VPN endpoint matching `query`.
pub async fn find_client_vpn_endpoints<C>(
    client: &C,
    query: &DescribeClientVpnEndpoints,
) -> Result<Vec<types::ClientVpnEndpoint>>
where
    C: DescribePages<DescribeClientVpnEndpoints>,
{
    find::find_many(client, query).await
}

/// The single Client VPN endpoint matching `query`. An endpoint listed without
/// a status counts as no match.
pub async fn find_client_vpn_endpoint<C>(
    client: &C,
    query: &DescribeClientVpnEndpoints,
) -> Result<types::ClientVpnEndpoint>
where
    C: DescribePages<DescribeClientVpnEndpoints>,
{
    let endpoint = find::find_one(client, query).await?;
    if endpoint.status().is_none() {
        return Err(Error::empty_result(query));
    }
    Ok(endpoint)
}

/// The Client VPN endpoint `id`; a deleted one is not found.
pub async fn find_client_vpn_endpoint_by_id<C>(
    client: &C,
    id: &str,
) -> Result<types::ClientVpnEndpoint>
where
    C: DescribePages<DescribeClientVpnEndpoints>,
{
    let query = DescribeClientVpnEndpoints::by_id(id);
    let endpoint = find_client_vpn_endpoint(client, &query).await?;
    find::check_resource(endpoint, &query, id)
}

/// Client connect handler options of Client VPN endpoint `id`. Options
/// without a status count as no match.
pub async fn find_client_vpn_endpoint_client_connect_response_options_by_id<C>(
    client: &C,
    id: &str,
) -> Result<types::ClientConnectResponseOptions>
where
    C: DescribePages<DescribeClientVpnEndpoints>,
{
    let endpoint = find_client_vpn_endpoint_by_id(client, id).await?;
    match endpoint.client_connect_options() {
        Some(options) if options.status().is_some() => Ok(options.clone()),
        _ => Err(Error::empty_result(&id)),
    }
}

/// Every authorization rule matching `query`.
pub async fn find_client_vpn_authorization_rules<C>(
    client: &C,
    query: &DescribeClientVpnAuthorizationRules,
) -> Result<Vec<types::AuthorizationRule>>
where
    C: DescribePages<DescribeClientVpnAuthorizationRules>,
{
    find::find_many(client, query).await
}

/// The single authorization rule matching `query`. A rule listed without a
/// status counts as no match.
pub async fn find_client_vpn_authorization_rule<C>(
    client: &C,
    query: &DescribeClientVpnAuthorizationRules,
) -> Result<types::AuthorizationRule>
where
    C: DescribePages<DescribeClientVpnAuthorizationRules>,
{
    let rule = find::find_one(client, query).await?;
    if rule.status().is_none() {
        return Err(Error::empty_result(query));
    }
    Ok(rule)
}

/// The authorization rule of endpoint `endpoint_id` granting access to
/// `target_network_cidr`, restricted to `access_group_id` unless it is empty.
pub async fn find_client_vpn_authorization_rule_by_three_part_key<C>(
    client: &C,
    endpoint_id: &str,
    target_network_cidr: &str,
    access_group_id: &str,
) -> Result<types::AuthorizationRule>
where
    C: DescribePages<DescribeClientVpnAuthorizationRules>,
{
    let query = DescribeClientVpnAuthorizationRules::new(
        endpoint_id,
        Filters::attributes([
            ("destination-cidr", target_network_cidr),
            ("group-id", access_group_id),
        ]),
    );
    find_client_vpn_authorization_rule(client, &query).await
}

/// Every target network association matching `query`.
pub async fn find_client_vpn_network_associations<C>(
    client: &C,
    query: &DescribeClientVpnTargetNetworks,
) -> Result<Vec<types::TargetNetwork>>
where
    C: DescribePages<DescribeClientVpnTargetNetworks>,
{
    find::find_many(client, query).await
}

/// The single target network association matching `query`. An association
/// listed without a status counts as no match.
pub async fn find_client_vpn_network_association<C>(
    client: &C,
    query: &DescribeClientVpnTargetNetworks,
) -> Result<types::TargetNetwork>
where
    C: DescribePages<DescribeClientVpnTargetNetworks>,
{
    let association = find::find_one(client, query).await?;
    if association.status().is_none() {
        return Err(Error::empty_result(query));
    }
    Ok(association)
}

/// The target network association `association_id` of endpoint
/// `endpoint_id`; a disassociated one is not found.
pub async fn find_client_vpn_network_association_by_ids<C>(
    client: &C,
    association_id: &str,
    endpoint_id: &str,
) -> Result<types::TargetNetwork>
where
    C: DescribePages<DescribeClientVpnTargetNetworks>,
{
    let query = DescribeClientVpnTargetNetworks {
        client_vpn_endpoint_id: endpoint_id.to_string(),
        association_ids: vec![association_id.to_string()],
        ..Default::default()
    };
    let association = find_client_vpn_network_association(client, &query).await?;
    let code = association.status().and_then(types::AssociationStatus::code);
    if let Some(code @ types::AssociationStatusCode::Disassociated) = code {
        return Err(Error::not_found(Some(code.as_str().to_string())).with_last_request(&query));
    }
    if association.client_vpn_endpoint_id() != Some(endpoint_id)
        || association.association_id() != Some(association_id)
    {
        return Err(Error::not_found(None).with_last_request(&query));
    }
    Ok(association)
}

/// Every Client VPN route matching `query`.
pub async fn find_client_vpn_routes<C>(
    client: &C,
    query: &DescribeClientVpnRoutes,
) -> Result<Vec<types::ClientVpnRoute>>
where
    C: DescribePages<DescribeClientVpnRoutes>,
{
    find::find_many(client, query).await
}

/// The single Client VPN route matching `query`. A route listed without a
/// status counts as no match.
pub async fn find_client_vpn_route<C>(
    client: &C,
    query: &DescribeClientVpnRoutes,
) -> Result<types::ClientVpnRoute>
where
    C: DescribePages<DescribeClientVpnRoutes>,
{
    let route = find::find_one(client, query).await?;
    if route.status().is_none() {
        return Err(Error::empty_result(query));
    }
    Ok(route)
}

/// The route of endpoint `endpoint_id` to `destination_cidr` through subnet
/// `target_subnet_id`.
pub async fn find_client_vpn_route_by_three_part_key<C>(
    client: &C,
    endpoint_id: &str,
    target_subnet_id: &str,
    destination_cidr: &str,
) -> Result<types::ClientVpnRoute>
where
    C: DescribePages<DescribeClientVpnRoutes>,
{
    let query = DescribeClientVpnRoutes::new(
        endpoint_id,
        Filters::attributes([
            ("destination-cidr", destination_cidr),
            ("target-subnet", target_subnet_id),
        ]),
    );
    find_client_vpn_route(client, &query).await
}
