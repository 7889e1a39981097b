use crate::{
    common::{cidr, filter::Filters},
    error::{ApiError, Error, Result},
    find::{self, DescribePages, Page},
};

use aws_sdk_ec2::{Client, types};

use super::route_table::ROUTE_TABLE_NOT_FOUND;

describe_query! {
    /// DescribeTransitGateways request.
    DescribeTransitGateways => TransitGateway {
        operation: describe_transit_gateways,
        ids: set_transit_gateway_ids,
        filters: set_filters,
        output: transit_gateways,
        not_found: ["InvalidTransitGatewayID.NotFound"],
        pagination: next_token,
    }
}

describe_query! {
    /// DescribeTransitGatewayRouteTables request.
    DescribeTransitGatewayRouteTables => TransitGatewayRouteTable {
        operation: describe_transit_gateway_route_tables,
        ids: set_transit_gateway_route_table_ids,
        filters: set_filters,
        output: transit_gateway_route_tables,
        not_found: [ROUTE_TABLE_NOT_FOUND],
        pagination: next_token,
    }
}

scoped_query! {
    /// GetTransitGatewayPrefixListReferences request.
    GetTransitGatewayPrefixListReferences => TransitGatewayPrefixListReference {
        operation: get_transit_gateway_prefix_list_references,
        scope: transit_gateway_route_table_id,
        output: transit_gateway_prefix_list_references,
        not_found: [ROUTE_TABLE_NOT_FOUND],
    }
}

scoped_query! {
    /// GetTransitGatewayRouteTablePropagations request.
    GetTransitGatewayRouteTablePropagations => TransitGatewayRouteTablePropagation {
        operation: get_transit_gateway_route_table_propagations,
        scope: transit_gateway_route_table_id,
        output: transit_gateway_route_table_propagations,
        not_found: [],
    }
}

/// SearchTransitGatewayRoutes request against one transit gateway route table.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SearchTransitGatewayRoutes {
    /// Transit gateway route table to search.
    pub route_table_id: String,
    /// Filters evaluated by the service; the call requires at least one.
    pub filters: Filters,
}

impl find::Describe for SearchTransitGatewayRoutes {
    type Item = types::TransitGatewayRoute;
    const NOT_FOUND_CODES: &'static [&'static str] = &[ROUTE_TABLE_NOT_FOUND];
}

impl DescribePages<SearchTransitGatewayRoutes> for Client {
    async fn describe_page(
        &self,
        query: &SearchTransitGatewayRoutes,
        _next_token: Option<String>,
    ) -> std::result::Result<Page<types::TransitGatewayRoute>, ApiError> {
        let output = self
            .search_transit_gateway_routes()
            .transit_gateway_route_table_id(&query.route_table_id)
            .set_filters(query.filters.clone().into())
            .send()
            .await?;
        Ok(Page::last(output.routes.unwrap_or_default()))
    }
}

impl find::Resource for types::TransitGateway {
    fn resource_id(&self) -> Option<&str> {
        self.transit_gateway_id()
    }

    fn terminal_state(&self) -> Option<&str> {
        match self.state()? {
            state @ types::TransitGatewayState::Deleted => Some(state.as_str()),
            _ => None,
        }
    }
}

/// Every transit gateway matching `query`.
pub async fn find_transit_gateways<C>(
    client: &C,
    query: &DescribeTransitGateways,
) -> Result<Vec<types::TransitGateway>>
where
    C: DescribePages<DescribeTransitGateways>,
{
    find::find_many(client, query).await
}

/// The single transit gateway matching `query`. A gateway listed without its
/// options counts as no match.
pub async fn find_transit_gateway<C>(
    client: &C,
    query: &DescribeTransitGateways,
) -> Result<types::TransitGateway>
where
    C: DescribePages<DescribeTransitGateways>,
{
    let transit_gateway = find::find_one(client, query).await?;
    if transit_gateway.options().is_none() {
        return Err(Error::empty_result(query));
    }
    Ok(transit_gateway)
}

/// The transit gateway `id`; a deleted one is not found.
pub async fn find_transit_gateway_by_id<C>(client: &C, id: &str) -> Result<types::TransitGateway>
where
    C: DescribePages<DescribeTransitGateways>,
{
    let query = DescribeTransitGateways::by_id(id);
    let transit_gateway = find_transit_gateway(client, &query).await?;
    find::check_resource(transit_gateway, &query, id)
}

/// Every transit gateway route table matching `query`.
pub async fn find_transit_gateway_route_tables<C>(
    client: &C,
    query: &DescribeTransitGatewayRouteTables,
) -> Result<Vec<types::TransitGatewayRouteTable>>
where
    C: DescribePages<DescribeTransitGatewayRouteTables>,
{
    find::find_many(client, query).await
}

/// The propagation of attachment `attachment_id` into transit gateway route
/// table `route_table_id`. An empty route table ID is not found without
/// calling the service.
pub async fn find_transit_gateway_route_table_propagation<C>(
    client: &C,
    route_table_id: &str,
    attachment_id: &str,
) -> Result<types::TransitGatewayRouteTablePropagation>
where
    C: DescribePages<GetTransitGatewayRouteTablePropagations>,
{
    if route_table_id.is_empty() {
        return Err(Error::not_found(None));
    }
    let query = GetTransitGatewayRouteTablePropagations::new(
        route_table_id,
        Filters::attributes([("transit-gateway-attachment-id", attachment_id)]),
    );
    find::find_many(client, &query)
        .await?
        .into_iter()
        .find(|propagation| propagation.transit_gateway_attachment_id() == Some(attachment_id))
        .ok_or_else(|| Error::not_found(None).with_last_request(&query))
}

/// Every prefix list reference matching `query`.
pub async fn find_transit_gateway_prefix_list_references<C>(
    client: &C,
    query: &GetTransitGatewayPrefixListReferences,
) -> Result<Vec<types::TransitGatewayPrefixListReference>>
where
    C: DescribePages<GetTransitGatewayPrefixListReferences>,
{
    find::find_many(client, query).await
}

/// The single prefix list reference matching `query`.
pub async fn find_transit_gateway_prefix_list_reference<C>(
    client: &C,
    query: &GetTransitGatewayPrefixListReferences,
) -> Result<types::TransitGatewayPrefixListReference>
where
    C: DescribePages<GetTransitGatewayPrefixListReferences>,
{
    find::find_one(client, query).await
}

/// The reference to prefix list `prefix_list_id` from transit gateway route
/// table `route_table_id`.
pub async fn find_transit_gateway_prefix_list_reference_by_two_part_key<C>(
    client: &C,
    route_table_id: &str,
    prefix_list_id: &str,
) -> Result<types::TransitGatewayPrefixListReference>
where
    C: DescribePages<GetTransitGatewayPrefixListReferences>,
{
    let query = GetTransitGatewayPrefixListReferences::new(
        route_table_id,
        Filters::attributes([("prefix-list-id", prefix_list_id)]),
    );
    let reference = find_transit_gateway_prefix_list_reference(client, &query).await?;
    if reference.prefix_list_id() != Some(prefix_list_id)
        || reference.transit_gateway_route_table_id() != Some(route_table_id)
    {
        return Err(Error::not_found(None).with_last_request(&query));
    }
    Ok(reference)
}

/// The static route of transit gateway route table `route_table_id` whose
/// destination is equivalent to `destination`.
///
/// The returned route carries its destination in canonical notation.
pub async fn find_transit_gateway_static_route<C>(
    client: &C,
    route_table_id: &str,
    destination: &str,
) -> Result<types::TransitGatewayRoute>
where
    C: DescribePages<SearchTransitGatewayRoutes>,
{
    let query = SearchTransitGatewayRoutes {
        route_table_id: route_table_id.to_string(),
        filters: Filters::attributes([("type", types::TransitGatewayRouteType::Static.as_str())]),
    };
    let routes = find::find_many(client, &query).await?;
    if routes.is_empty() {
        return Err(Error::empty_result(&query));
    }
    let mut route = routes
        .into_iter()
        .find(|route| {
            cidr::cidr_blocks_equal(route.destination_cidr_block().unwrap_or_default(), destination)
        })
        .ok_or_else(|| Error::not_found(None))?;
    if let Some(state @ types::TransitGatewayRouteState::Deleted) = route.state() {
        return Err(Error::not_found(Some(state.as_str().to_string())).with_last_request(&query));
    }
    route.destination_cidr_block = route
        .destination_cidr_block
        .as_deref()
        .map(cidr::canonical_cidr_block);
    Ok(route)
}
