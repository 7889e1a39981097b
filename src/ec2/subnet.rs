use crate::{
    common::filter::Filters,
    error::{ApiError, Error, Result},
    find::{self, DescribePages, Page},
};

use aws_sdk_ec2::{Client, types};

const SUBNET_NOT_FOUND: &str = "InvalidSubnetID.NotFound";

describe_query! {
    /// DescribeSubnets request.
    DescribeSubnets => Subnet {
        operation: describe_subnets,
        ids: set_subnet_ids,
        filters: set_filters,
        output: subnets,
        not_found: [SUBNET_NOT_FOUND],
        pagination: next_token,
    }
}

/// GetSubnetCidrReservations request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetSubnetCidrReservations {
    /// Subnet whose reservations are listed.
    pub subnet_id: String,
}

impl find::Describe for GetSubnetCidrReservations {
    type Item = types::SubnetCidrReservation;
    const NOT_FOUND_CODES: &'static [&'static str] = &[SUBNET_NOT_FOUND];
}

impl DescribePages<GetSubnetCidrReservations> for Client {
    async fn describe_page(
        &self,
        query: &GetSubnetCidrReservations,
        next_token: Option<String>,
    ) -> std::result::Result<Page<types::SubnetCidrReservation>, ApiError> {
        let output = self
            .get_subnet_cidr_reservations()
            .subnet_id(&query.subnet_id)
            .set_next_token(next_token)
            .send()
            .await?;
        let items = output
            .subnet_ipv4_cidr_reservations
            .unwrap_or_default()
            .into_iter()
            .chain(output.subnet_ipv6_cidr_reservations.unwrap_or_default())
            .collect();
        Ok(Page {
            items,
            next_token: output.next_token,
        })
    }
}

impl find::Resource for types::Subnet {
    fn resource_id(&self) -> Option<&str> {
        self.subnet_id()
    }
}

/// Every subnet matching `query`.
pub async fn find_subnets<C>(client: &C, query: &DescribeSubnets) -> Result<Vec<types::Subnet>>
where
    C: DescribePages<DescribeSubnets>,
{
    find::find_many(client, query).await
}

/// The single subnet matching `query`.
pub async fn find_subnet<C>(client: &C, query: &DescribeSubnets) -> Result<types::Subnet>
where
    C: DescribePages<DescribeSubnets>,
{
    find::find_one(client, query).await
}

/// The subnet `id`.
pub async fn find_subnet_by_id<C>(client: &C, id: &str) -> Result<types::Subnet>
where
    C: DescribePages<DescribeSubnets>,
{
    find::find_by_id(client, &DescribeSubnets::by_id(id), id).await
}

/// The IPv6 CIDR block association `association_id` of whichever subnet holds
/// it. A disassociated block is reported as not found.
pub async fn find_subnet_ipv6_cidr_block_association_by_id<C>(
    client: &C,
    association_id: &str,
) -> Result<types::SubnetIpv6CidrBlockAssociation>
where
    C: DescribePages<DescribeSubnets>,
{
    let query = DescribeSubnets::by_filters(Filters::attributes([(
        "ipv6-cidr-block-association.association-id",
        association_id,
    )]));
    let subnet = find_subnet(client, &query).await?;
    let association = subnet
        .ipv6_cidr_block_association_set()
        .iter()
        .find(|association| association.association_id() == Some(association_id))
        .ok_or_else(|| Error::not_found(None))?;
    let state = association
        .ipv6_cidr_block_state()
        .and_then(types::SubnetCidrBlockState::state);
    if let Some(state @ types::SubnetCidrBlockStateCode::Disassociated) = state {
        return Err(Error::not_found(Some(state.as_str().to_string())));
    }
    Ok(association.clone())
}

/// The IPv4 or IPv6 CIDR reservation `reservation_id` of subnet `subnet_id`.
pub async fn find_subnet_cidr_reservation_by_subnet_id_and_reservation_id<C>(
    client: &C,
    subnet_id: &str,
    reservation_id: &str,
) -> Result<types::SubnetCidrReservation>
where
    C: DescribePages<GetSubnetCidrReservations>,
{
    let query = GetSubnetCidrReservations {
        subnet_id: subnet_id.to_string(),
    };
    let reservations = find::find_many(client, &query).await?;
    if reservations.is_empty() {
        return Err(Error::empty_result(&query));
    }
    reservations
        .into_iter()
        .find(|reservation| reservation.subnet_cidr_reservation_id() == Some(reservation_id))
        .ok_or_else(|| Error::not_found(None).with_last_request(&query))
}
