use crate::{
    error::{Error, Result},
    find::{self, DescribePages},
};

use aws_sdk_ec2::types;

describe_query! {
    /// DescribeVpcPeeringConnections request.
    DescribeVpcPeeringConnections => VpcPeeringConnection {
        operation: describe_vpc_peering_connections,
        ids: set_vpc_peering_connection_ids,
        filters: set_filters,
        output: vpc_peering_connections,
        not_found: ["InvalidVpcPeeringConnectionID.NotFound"],
        pagination: next_token,
    }
}

impl find::Resource for types::VpcPeeringConnection {
    fn resource_id(&self) -> Option<&str> {
        self.vpc_peering_connection_id()
    }

    // https://docs.aws.amazon.com/vpc/latest/peering/vpc-peering-basics.html#vpc-peering-lifecycle
    fn terminal_state(&self) -> Option<&str> {
        use aws_sdk_ec2::types::VpcPeeringConnectionStateReasonCode as Code;

        match self.status()?.code()? {
            code @ (Code::Deleted | Code::Expired | Code::Failed | Code::Rejected) => {
                Some(code.as_str())
            }
            _ => None,
        }
    }
}

/// Every VPC peering connection matching `query`.
pub async fn find_vpc_peering_connections<C>(
    client: &C,
    query: &DescribeVpcPeeringConnections,
) -> Result<Vec<types::VpcPeeringConnection>>
where
    C: DescribePages<DescribeVpcPeeringConnections>,
{
    find::find_many(client, query).await
}

/// The single VPC peering connection matching `query`. A connection listed
/// without a status counts as no match.
pub async fn find_vpc_peering_connection<C>(
    client: &C,
    query: &DescribeVpcPeeringConnections,
) -> Result<types::VpcPeeringConnection>
where
    C: DescribePages<DescribeVpcPeeringConnections>,
{
    let connection = find::find_one(client, query).await?;
    if connection.status().is_none() {
        return Err(Error::empty_result(query));
    }
    Ok(connection)
}

/// The VPC peering connection `id`; one that ended its lifecycle is not found.
pub async fn find_vpc_peering_connection_by_id<C>(
    client: &C,
    id: &str,
) -> Result<types::VpcPeeringConnection>
where
    C: DescribePages<DescribeVpcPeeringConnections>,
{
    let query = DescribeVpcPeeringConnections::by_id(id);
    let connection = find_vpc_peering_connection(client, &query).await?;
    find::check_resource(connection, &query, id)
}
