use crate::{
    common::filter::Filters,
    error::Result,
    find::{self, DescribePages},
};

use aws_sdk_ec2::types;

const DEFAULT_SECURITY_GROUP_NAME: &str = "default";

describe_query! {
    /// DescribeSecurityGroups request.
    DescribeSecurityGroups => SecurityGroup {
        operation: describe_security_groups,
        ids: set_group_ids,
        filters: set_filters,
        output: security_groups,
        not_found: ["InvalidGroup.NotFound", "InvalidSecurityGroupID.NotFound"],
        pagination: next_token,
    }
}

impl find::Resource for types::SecurityGroup {
    fn resource_id(&self) -> Option<&str> {
        self.group_id()
    }
}

/// Every security group matching `query`.
pub async fn find_security_groups<C>(
    client: &C,
    query: &DescribeSecurityGroups,
) -> Result<Vec<types::SecurityGroup>>
where
    C: DescribePages<DescribeSecurityGroups>,
{
    find::find_many(client, query).await
}

/// The single security group matching `query`.
pub async fn find_security_group<C>(
    client: &C,
    query: &DescribeSecurityGroups,
) -> Result<types::SecurityGroup>
where
    C: DescribePages<DescribeSecurityGroups>,
{
    find::find_one(client, query).await
}

/// The security group `id`.
pub async fn find_security_group_by_id<C>(client: &C, id: &str) -> Result<types::SecurityGroup>
where
    C: DescribePages<DescribeSecurityGroups>,
{
    find::find_by_id(client, &DescribeSecurityGroups::by_id(id), id).await
}

/// The security group named `name` in VPC `vpc_id`.
pub async fn find_security_group_by_name_and_vpc_id<C>(
    client: &C,
    name: &str,
    vpc_id: &str,
) -> Result<types::SecurityGroup>
where
    C: DescribePages<DescribeSecurityGroups>,
{
    let query =
        DescribeSecurityGroups::by_filters(Filters::attributes([("group-name", name), ("vpc-id", vpc_id)]));
    find_security_group(client, &query).await
}

/// The default security group of VPC `vpc_id`.
pub async fn find_vpc_default_security_group<C>(
    client: &C,
    vpc_id: &str,
) -> Result<types::SecurityGroup>
where
    C: DescribePages<DescribeSecurityGroups>,
{
    find_security_group_by_name_and_vpc_id(client, DEFAULT_SECURITY_GROUP_NAME, vpc_id).await
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::testing::Scripted;
    use rstest::rstest;

    fn group(id: &str) -> types::SecurityGroup {
        types::SecurityGroup::builder()
            .group_id(id)
            .group_name("default")
            .vpc_id("vpc-1")
            .build()
    }

    #[rstest]
    #[case::legacy_code("InvalidGroup.NotFound")]
    #[case::id_code("InvalidSecurityGroupID.NotFound")]
    #[tokio::test]
    async fn test_find_security_group_by_id_not_found_codes(#[case] code: &str) {
        let client = Scripted::<DescribeSecurityGroups>::error(code);
        let error = find_security_group_by_id(&client, "sg-1").await.unwrap_err();
        assert!(error.is_not_found());
        assert_eq!(error.code(), Some(code));
    }

    #[tokio::test]
    async fn test_find_vpc_default_security_group() {
        let client = Scripted::<DescribeSecurityGroups>::items(vec![group("sg-1")]);
        let found = find_vpc_default_security_group(&client, "vpc-1")
            .await
            .unwrap();
        assert_eq!(found.group_id(), Some("sg-1"));
        let expected = DescribeSecurityGroups::by_filters(Filters::attributes([
            ("group-name", "default"),
            ("vpc-id", "vpc-1"),
        ]));
        assert_eq!(client.queries(), [format!("{expected:?}")]);
    }

    #[tokio::test]
    async fn test_find_security_group_by_name_and_vpc_id_ambiguous() {
        let client = Scripted::<DescribeSecurityGroups>::items(vec![group("sg-1"), group("sg-2")]);
        let error = find_security_group_by_name_and_vpc_id(&client, "default", "vpc-1")
            .await
            .unwrap_err();
        assert!(error.is_too_many_results());
    }
}
