use crate::{
    common::filter::Filters,
    error::{Error, Result},
    find::{self, DescribePages},
};

use aws_sdk_ec2::types;

describe_query! {
    /// DescribeNetworkAcls request.
    DescribeNetworkAcls => NetworkAcl {
        operation: describe_network_acls,
        ids: set_network_acl_ids,
        filters: set_filters,
        output: network_acls,
        not_found: ["InvalidNetworkAclID.NotFound"],
        pagination: next_token,
    }
}

impl find::Resource for types::NetworkAcl {
    fn resource_id(&self) -> Option<&str> {
        self.network_acl_id()
    }
}

/// Every network ACL matching `query`.
pub async fn find_network_acls<C>(
    client: &C,
    query: &DescribeNetworkAcls,
) -> Result<Vec<types::NetworkAcl>>
where
    C: DescribePages<DescribeNetworkAcls>,
{
    find::find_many(client, query).await
}

/// The single network ACL matching `query`.
pub async fn find_network_acl<C>(
    client: &C,
    query: &DescribeNetworkAcls,
) -> Result<types::NetworkAcl>
where
    C: DescribePages<DescribeNetworkAcls>,
{
    find::find_one(client, query).await
}

/// The network ACL `id`.
pub async fn find_network_acl_by_id<C>(client: &C, id: &str) -> Result<types::NetworkAcl>
where
    C: DescribePages<DescribeNetworkAcls>,
{
    find::find_by_id(client, &DescribeNetworkAcls::by_id(id), id).await
}

async fn find_association<C, P>(
    client: &C,
    filter: (&str, &str),
    matches: P,
) -> Result<types::NetworkAclAssociation>
where
    C: DescribePages<DescribeNetworkAcls>,
    P: Fn(&types::NetworkAclAssociation) -> bool,
{
    let query = DescribeNetworkAcls::by_filters(Filters::attributes([filter]));
    let network_acl = find_network_acl(client, &query).await?;
    network_acl
        .associations()
        .iter()
        .find(|association| matches(association))
        .cloned()
        .ok_or_else(|| Error::not_found(None))
}

/// The network ACL association `association_id`.
pub async fn find_network_acl_association_by_id<C>(
    client: &C,
    association_id: &str,
) -> Result<types::NetworkAclAssociation>
where
    C: DescribePages<DescribeNetworkAcls>,
{
    find_association(
        client,
        ("association.association-id", association_id),
        |association| association.network_acl_association_id() == Some(association_id),
    )
    .await
}

/// The network ACL association of subnet `subnet_id`.
pub async fn find_network_acl_association_by_subnet_id<C>(
    client: &C,
    subnet_id: &str,
) -> Result<types::NetworkAclAssociation>
where
    C: DescribePages<DescribeNetworkAcls>,
{
    find_association(
        client,
        ("association.subnet-id", subnet_id),
        |association| association.subnet_id() == Some(subnet_id),
    )
    .await
}

/// The entry of network ACL `network_acl_id` keyed by direction and rule
/// number.
pub async fn find_network_acl_entry<C>(
    client: &C,
    network_acl_id: &str,
    egress: bool,
    rule_number: i32,
) -> Result<types::NetworkAclEntry>
where
    C: DescribePages<DescribeNetworkAcls>,
{
    let query = DescribeNetworkAcls {
        ids: vec![network_acl_id.to_string()],
        filters: Filters::attributes([
            ("entry.egress", egress.to_string()),
            ("entry.rule-number", rule_number.to_string()),
        ]),
    };
    let network_acl = find_network_acl(client, &query).await?;
    network_acl
        .entries()
        .iter()
        .find(|entry| entry.egress() == Some(egress) && entry.rule_number() == Some(rule_number))
        .cloned()
        .ok_or_else(|| Error::not_found(None))
}

/// The default network ACL of VPC `vpc_id`.
pub async fn find_vpc_default_network_acl<C>(client: &C, vpc_id: &str) -> Result<types::NetworkAcl>
where
    C: DescribePages<DescribeNetworkAcls>,
{
    let query =
        DescribeNetworkAcls::by_filters(Filters::attributes([("default", "true"), ("vpc-id", vpc_id)]));
    find_network_acl(client, &query).await
}
