use crate::{
    common::cidr,
    error::{ApiError, Error, Result},
    find::{self, DescribePages, Page},
};

use aws_sdk_ec2::{Client, types};

const PREFIX_LIST_NOT_FOUND: &str = "InvalidPrefixListID.NotFound";

describe_query! {
    /// DescribeManagedPrefixLists request.
    DescribeManagedPrefixLists => ManagedPrefixList {
        operation: describe_managed_prefix_lists,
        ids: set_prefix_list_ids,
        filters: set_filters,
        output: prefix_lists,
        not_found: [PREFIX_LIST_NOT_FOUND],
        pagination: next_token,
    }
}

/// GetManagedPrefixListEntries request for the current version of one list.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct GetManagedPrefixListEntries {
    /// Prefix list whose entries to list.
    pub prefix_list_id: String,
}

impl find::Describe for GetManagedPrefixListEntries {
    type Item = types::PrefixListEntry;
    const NOT_FOUND_CODES: &'static [&'static str] = &[PREFIX_LIST_NOT_FOUND];
}

impl DescribePages<GetManagedPrefixListEntries> for Client {
    async fn describe_page(
        &self,
        query: &GetManagedPrefixListEntries,
        next_token: Option<String>,
    ) -> std::result::Result<Page<types::PrefixListEntry>, ApiError> {
        let output = self
            .get_managed_prefix_list_entries()
            .prefix_list_id(&query.prefix_list_id)
            .set_next_token(next_token)
            .send()
            .await?;
        Ok(Page {
            items: output.entries.unwrap_or_default(),
            next_token: output.next_token,
        })
    }
}

impl find::Resource for types::ManagedPrefixList {
    fn resource_id(&self) -> Option<&str> {
        self.prefix_list_id()
    }

    fn terminal_state(&self) -> Option<&str> {
        match self.state()? {
            state @ types::PrefixListState::DeleteComplete => Some(state.as_str()),
            _ => None,
        }
    }
}

/// The managed prefix list `id`; a deleted one is not found.
pub async fn find_managed_prefix_list_by_id<C>(
    client: &C,
    id: &str,
) -> Result<types::ManagedPrefixList>
where
    C: DescribePages<DescribeManagedPrefixLists>,
{
    find::find_by_id(client, &DescribeManagedPrefixLists::by_id(id), id).await
}

/// Every entry of managed prefix list `id`.
pub async fn find_managed_prefix_list_entries_by_id<C>(
    client: &C,
    id: &str,
) -> Result<Vec<types::PrefixListEntry>>
where
    C: DescribePages<GetManagedPrefixListEntries>,
{
    let query = GetManagedPrefixListEntries {
        prefix_list_id: id.to_string(),
    };
    find::find_many(client, &query).await
}

/// The entry of managed prefix list `id` whose CIDR block is equivalent to `cidr`.
pub async fn find_managed_prefix_list_entry_by_id_and_cidr<C>(
    client: &C,
    id: &str,
    cidr: &str,
) -> Result<types::PrefixListEntry>
where
    C: DescribePages<GetManagedPrefixListEntries>,
{
    find_managed_prefix_list_entries_by_id(client, id)
        .await?
        .into_iter()
        .find(|entry| {
            entry
                .cidr()
                .is_some_and(|entry_cidr| cidr::cidr_blocks_equal(entry_cidr, cidr))
        })
        .ok_or_else(|| Error::not_found(None))
}
