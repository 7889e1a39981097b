use crate::{
    common::{cidr, filter::Filters},
    error::{Error, Result},
    find::{self, DescribePages},
};

use aws_sdk_ec2::types;

pub(crate) const ROUTE_TABLE_NOT_FOUND: &str = "InvalidRouteTableID.NotFound";

describe_query! {
    /// DescribeRouteTables request.
    DescribeRouteTables => RouteTable {
        operation: describe_route_tables,
        ids: set_route_table_ids,
        filters: set_filters,
        output: route_tables,
        not_found: [ROUTE_TABLE_NOT_FOUND],
        pagination: next_token,
    }
}

impl find::Resource for types::RouteTable {
    fn resource_id(&self) -> Option<&str> {
        self.route_table_id()
    }
}

/// Every route table matching `query`.
pub async fn find_route_tables<C>(
    client: &C,
    query: &DescribeRouteTables,
) -> Result<Vec<types::RouteTable>>
where
    C: DescribePages<DescribeRouteTables>,
{
    find::find_many(client, query).await
}

/// The single route table matching `query`.
pub async fn find_route_table<C>(
    client: &C,
    query: &DescribeRouteTables,
) -> Result<types::RouteTable>
where
    C: DescribePages<DescribeRouteTables>,
{
    find::find_one(client, query).await
}

/// The route table `id`.
pub async fn find_route_table_by_id<C>(client: &C, id: &str) -> Result<types::RouteTable>
where
    C: DescribePages<DescribeRouteTables>,
{
    find::find_by_id(client, &DescribeRouteTables::by_id(id), id).await
}

/// The main route table of VPC `vpc_id`.
pub async fn find_main_route_table_by_vpc_id<C>(
    client: &C,
    vpc_id: &str,
) -> Result<types::RouteTable>
where
    C: DescribePages<DescribeRouteTables>,
{
    let query = DescribeRouteTables::by_filters(Filters::attributes([
        ("association.main", "true"),
        ("vpc-id", vpc_id),
    ]));
    find_route_table(client, &query).await
}

fn is_disassociated(association: &types::RouteTableAssociation) -> bool {
    association
        .association_state()
        .and_then(types::RouteTableAssociationState::state)
        == Some(&types::RouteTableAssociationStateCode::Disassociated)
}

/// The route table association `association_id`.
pub async fn find_route_table_association_by_id<C>(
    client: &C,
    association_id: &str,
) -> Result<types::RouteTableAssociation>
where
    C: DescribePages<DescribeRouteTables>,
{
    let query = DescribeRouteTables::by_filters(Filters::attributes([(
        "association.route-table-association-id",
        association_id,
    )]));
    let route_table = find_route_table(client, &query).await?;
    let association = route_table
        .associations()
        .iter()
        .find(|association| association.route_table_association_id() == Some(association_id))
        .ok_or_else(|| Error::not_found(None))?;
    let state = association
        .association_state()
        .and_then(types::RouteTableAssociationState::state);
    if let Some(state @ types::RouteTableAssociationStateCode::Disassociated) = state {
        return Err(Error::not_found(Some(state.as_str().to_string())));
    }
    Ok(association.clone())
}

/// The association `association_id`, which must be a main route table
/// association.
pub async fn find_main_route_table_association_by_id<C>(
    client: &C,
    association_id: &str,
) -> Result<types::RouteTableAssociation>
where
    C: DescribePages<DescribeRouteTables>,
{
    let association = find_route_table_association_by_id(client, association_id).await?;
    if association.main() != Some(true) {
        return Err(Error::not_found(Some(format!(
            "{association_id} is not the association with the main route table"
        ))));
    }
    Ok(association)
}

/// The live main route table association of VPC `vpc_id`.
pub async fn find_main_route_table_association_by_vpc_id<C>(
    client: &C,
    vpc_id: &str,
) -> Result<types::RouteTableAssociation>
where
    C: DescribePages<DescribeRouteTables>,
{
    let route_table = find_main_route_table_by_vpc_id(client, vpc_id).await?;
    route_table
        .associations()
        .iter()
        .find(|association| association.main() == Some(true) && !is_disassociated(association))
        .cloned()
        .ok_or_else(|| Error::not_found(None))
}

async fn find_route<C, P>(
    client: &C,
    route_table_id: &str,
    matches: P,
    missing: impl FnOnce() -> String,
) -> Result<types::Route>
where
    C: DescribePages<DescribeRouteTables>,
    P: Fn(&types::Route) -> bool,
{
    let route_table = find_route_table_by_id(client, route_table_id).await?;
    route_table
        .routes()
        .iter()
        .find(|route| matches(route))
        .cloned()
        .ok_or_else(|| Error::not_found(Some(missing())))
}

/// The route of table `route_table_id` whose IPv4 destination is equivalent to
/// `destination`.
pub async fn find_route_by_ipv4_destination<C>(
    client: &C,
    route_table_id: &str,
    destination: &str,
) -> Result<types::Route>
where
    C: DescribePages<DescribeRouteTables>,
{
    find_route(
        client,
        route_table_id,
        |route| cidr::cidr_blocks_equal(route.destination_cidr_block().unwrap_or_default(), destination),
        || format!("Route in Route Table ({route_table_id}) with IPv4 destination ({destination}) not found"),
    )
    .await
}

/// The route of table `route_table_id` whose IPv6 destination is equivalent to
/// `destination`.
pub async fn find_route_by_ipv6_destination<C>(
    client: &C,
    route_table_id: &str,
    destination: &str,
) -> Result<types::Route>
where
    C: DescribePages<DescribeRouteTables>,
{
    find_route(
        client,
        route_table_id,
        |route| {
            cidr::cidr_blocks_equal(
                route.destination_ipv6_cidr_block().unwrap_or_default(),
                destination,
            )
        },
        || format!("Route in Route Table ({route_table_id}) with IPv6 destination ({destination}) not found"),
    )
    .await
}

/// The route of table `route_table_id` targeting prefix list `prefix_list_id`.
pub async fn find_route_by_prefix_list_id_destination<C>(
    client: &C,
    route_table_id: &str,
    prefix_list_id: &str,
) -> Result<types::Route>
where
    C: DescribePages<DescribeRouteTables>,
{
    find_route(
        client,
        route_table_id,
        |route| route.destination_prefix_list_id() == Some(prefix_list_id),
        || format!("Route in Route Table ({route_table_id}) with Prefix List ID destination ({prefix_list_id}) not found"),
    )
    .await
}

/// Succeeds when VPN gateway `gateway_id` propagates routes into table
/// `route_table_id`.
pub async fn find_vpn_gateway_route_propagation_exists<C>(
    client: &C,
    route_table_id: &str,
    gateway_id: &str,
) -> Result<()>
where
    C: DescribePages<DescribeRouteTables>,
{
    let route_table = find_route_table_by_id(client, route_table_id).await?;
    if route_table
        .propagating_vgws()
        .iter()
        .any(|propagation| propagation.gateway_id() == Some(gateway_id))
    {
        return Ok(());
    }
    Err(Error::not_found(Some(format!(
        "Route Table ({route_table_id}) VPN Gateway ({gateway_id}) route propagation not found"
    ))))
}
