use crate::{
    common::filter::Filters,
    error::{Error, Result},
    find::{self, DescribePages},
};

use aws_sdk_ec2::types;

describe_query! {
    /// DescribeNetworkInterfaces request.
    DescribeNetworkInterfaces => NetworkInterface {
        operation: describe_network_interfaces,
        ids: set_network_interface_ids,
        filters: set_filters,
        output: network_interfaces,
        not_found: ["InvalidNetworkInterfaceID.NotFound"],
        pagination: next_token,
    }
}

impl find::Resource for types::NetworkInterface {
    fn resource_id(&self) -> Option<&str> {
        self.network_interface_id()
    }
}

/// Every network interface matching `query`.
pub async fn find_network_interfaces<C>(
    client: &C,
    query: &DescribeNetworkInterfaces,
) -> Result<Vec<types::NetworkInterface>>
where
    C: DescribePages<DescribeNetworkInterfaces>,
{
    find::find_many(client, query).await
}

/// The single network interface matching `query`.
pub async fn find_network_interface<C>(
    client: &C,
    query: &DescribeNetworkInterfaces,
) -> Result<types::NetworkInterface>
where
    C: DescribePages<DescribeNetworkInterfaces>,
{
    find::find_one(client, query).await
}

/// The network interface `id`.
pub async fn find_network_interface_by_id<C>(
    client: &C,
    id: &str,
) -> Result<types::NetworkInterface>
where
    C: DescribePages<DescribeNetworkInterfaces>,
{
    find::find_by_id(client, &DescribeNetworkInterfaces::by_id(id), id).await
}

/// Network interfaces attached to instances of account `attachment_instance_owner_id`
/// and carrying exactly `description`.
pub async fn find_network_interfaces_by_attachment_instance_owner_id_and_description<C>(
    client: &C,
    attachment_instance_owner_id: &str,
    description: &str,
) -> Result<Vec<types::NetworkInterface>>
where
    C: DescribePages<DescribeNetworkInterfaces>,
{
    let query = DescribeNetworkInterfaces::by_filters(Filters::attributes([
        ("attachment.instance-owner-id", attachment_instance_owner_id),
        ("description", description),
    ]));
    find_network_interfaces(client, &query).await
}

/// The attachment `id` of whichever network interface holds it.
pub async fn find_network_interface_attachment_by_id<C>(
    client: &C,
    id: &str,
) -> Result<types::NetworkInterfaceAttachment>
where
    C: DescribePages<DescribeNetworkInterfaces>,
{
    let query = DescribeNetworkInterfaces::by_filters(Filters::attributes([(
        "attachment.attachment-id",
        id,
    )]));
    let network_interface = find_network_interface(client, &query).await?;
    network_interface
        .attachment
        .ok_or_else(|| Error::empty_result(&query))
}

/// The membership of network interface `network_interface_id` in security
/// group `security_group_id`.
pub async fn find_network_interface_security_group<C>(
    client: &C,
    network_interface_id: &str,
    security_group_id: &str,
) -> Result<types::GroupIdentifier>
where
    C: DescribePages<DescribeNetworkInterfaces>,
{
    find_network_interface_by_id(client, network_interface_id)
        .await?
        .groups()
        .iter()
        .find(|group| group.group_id() == Some(security_group_id))
        .cloned()
        .ok_or_else(|| {
            Error::not_found(Some(format!(
                "Network Interface ({network_interface_id}) Security Group ({security_group_id}) not found"
            )))
        })
}
