use crate::{
    error::Result,
    find::{self, DescribePages},
};

use aws_sdk_ec2::types;

describe_query! {
    /// DescribeKeyPairs request; `ids` holds key names.
    DescribeKeyPairs => KeyPairInfo {
        operation: describe_key_pairs,
        ids: set_key_names,
        filters: set_filters,
        output: key_pairs,
        not_found: ["InvalidKeyPair.NotFound"],
        pagination: single_page,
    }
}

impl find::Resource for types::KeyPairInfo {
    fn resource_id(&self) -> Option<&str> {
        self.key_name()
    }
}

/// Every key pair matching `query`.
pub async fn find_key_pairs<C>(client: &C, query: &DescribeKeyPairs) -> Result<Vec<types::KeyPairInfo>>
where
    C: DescribePages<DescribeKeyPairs>,
{
    find::find_many(client, query).await
}

/// The single key pair matching `query`.
pub async fn find_key_pair<C>(client: &C, query: &DescribeKeyPairs) -> Result<types::KeyPairInfo>
where
    C: DescribePages<DescribeKeyPairs>,
{
    find::find_one(client, query).await
}

/// The key pair named `name`.
pub async fn find_key_pair_by_name<C>(client: &C, name: &str) -> Result<types::KeyPairInfo>
where
    C: DescribePages<DescribeKeyPairs>,
{
    find::find_by_id(client, &DescribeKeyPairs::by_id(name), name).await
}
