use crate::{
    common::filter::Filters,
    error::{Error, Result},
    find::{self, DescribePages},
};

use aws_sdk_ec2::types;

describe_query! {
    /// DescribeInternetGateways request.
    DescribeInternetGateways => InternetGateway {
        operation: describe_internet_gateways,
        ids: set_internet_gateway_ids,
        filters: set_filters,
        output: internet_gateways,
        not_found: ["InvalidInternetGatewayID.NotFound"],
        pagination: next_token,
    }
}

describe_query! {
    /// DescribeEgressOnlyInternetGateways request.
    ///
    /// The service reports unknown identifiers as an empty listing, so no
    /// error code maps to not-found.
    DescribeEgressOnlyInternetGateways => EgressOnlyInternetGateway {
        operation: describe_egress_only_internet_gateways,
        ids: set_egress_only_internet_gateway_ids,
        filters: set_filters,
        output: egress_only_internet_gateways,
        not_found: [],
        pagination: next_token,
    }
}

impl find::Resource for types::InternetGateway {
    fn resource_id(&self) -> Option<&str> {
        self.internet_gateway_id()
    }
}

impl find::Resource for types::EgressOnlyInternetGateway {
    fn resource_id(&self) -> Option<&str> {
        self.egress_only_internet_gateway_id()
    }
}

/// Every internet gateway matching `query`.
pub async fn find_internet_gateways<C>(
    client: &C,
    query: &DescribeInternetGateways,
) -> Result<Vec<types::InternetGateway>>
where
    C: DescribePages<DescribeInternetGateways>,
{
    find::find_many(client, query).await
}

/// The single internet gateway matching `query`.
pub async fn find_internet_gateway<C>(
    client: &C,
    query: &DescribeInternetGateways,
) -> Result<types::InternetGateway>
where
    C: DescribePages<DescribeInternetGateways>,
{
    find::find_one(client, query).await
}

/// The internet gateway `id`.
pub async fn find_internet_gateway_by_id<C>(client: &C, id: &str) -> Result<types::InternetGateway>
where
    C: DescribePages<DescribeInternetGateways>,
{
    find::find_by_id(client, &DescribeInternetGateways::by_id(id), id).await
}

/// The attachment of internet gateway `internet_gateway_id` to VPC `vpc_id`.
///
/// An internet gateway attaches to at most one VPC, so more than one
/// attachment is reported as ambiguous.
pub async fn find_internet_gateway_attachment<C>(
    client: &C,
    internet_gateway_id: &str,
    vpc_id: &str,
) -> Result<types::InternetGatewayAttachment>
where
    C: DescribePages<DescribeInternetGateways>,
{
    let internet_gateway = find_internet_gateway_by_id(client, internet_gateway_id).await?;
    let attachment = match internet_gateway.attachments() {
        [] => return Err(Error::empty_result(&internet_gateway_id)),
        [attachment] => attachment,
        attachments => {
            return Err(Error::too_many_results(
                attachments.len(),
                &internet_gateway_id,
            ));
        }
    };
    if attachment.vpc_id() != Some(vpc_id) {
        return Err(Error::empty_result(&vpc_id));
    }
    Ok(attachment.clone())
}

/// Every egress-only internet gateway matching `query`.
pub async fn find_egress_only_internet_gateways<C>(
    client: &C,
    query: &DescribeEgressOnlyInternetGateways,
) -> Result<Vec<types::EgressOnlyInternetGateway>>
where
    C: DescribePages<DescribeEgressOnlyInternetGateways>,
{
    find::find_many(client, query).await
}

/// The single egress-only internet gateway matching `query`.
pub async fn find_egress_only_internet_gateway<C>(
    client: &C,
    query: &DescribeEgressOnlyInternetGateways,
) -> Result<types::EgressOnlyInternetGateway>
where
    C: DescribePages<DescribeEgressOnlyInternetGateways>,
{
    find::find_one(client, query).await
}

/// The egress-only internet gateway `id`.
pub async fn find_egress_only_internet_gateway_by_id<C>(
    client: &C,
    id: &str,
) -> Result<types::EgressOnlyInternetGateway>
where
    C: DescribePages<DescribeEgressOnlyInternetGateways>,
{
    find::find_by_id(client, &DescribeEgressOnlyInternetGateways::by_id(id), id).await
}

/// Internet gateways attached to VPC `vpc_id`.
pub fn attached_to_vpc(vpc_id: &str) -> DescribeInternetGateways {
    DescribeInternetGateways::by_filters(Filters::attributes([("attachment.vpc-id", vpc_id)]))
}
