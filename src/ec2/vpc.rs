use crate::{
    common::{self, filter::Filters},
    error::{ApiError, Error, Result},
    find::{self, DescribePages, Page},
};

use aws_sdk_ec2::{
    Client, operation::describe_vpc_attribute::DescribeVpcAttributeOutput, types,
};

pub(crate) const VPC_NOT_FOUND: &str = "InvalidVpcID.NotFound";
const UNSUPPORTED_OPERATION: &str = "UnsupportedOperation";
const AUTH_FAILURE: &str = "AuthFailure";
const ADMINISTRATIVELY_DISABLED: &str = "This request has been administratively disabled";

describe_query! {
    /// DescribeVpcs request.
    ///
    /// ```rust
    /// use aws_lookup::{common::filter::Filters, ec2::vpc};
    ///
    /// let query = vpc::DescribeVpcs::by_filters(Filters::attributes([("is-default", "true")]));
    /// assert!(query.ids.is_empty());
    /// ```
    DescribeVpcs => Vpc {
        operation: describe_vpcs,
        ids: set_vpc_ids,
        filters: set_filters,
        output: vpcs,
        not_found: [VPC_NOT_FOUND],
        pagination: next_token,
    }
}

impl find::Resource for types::Vpc {
    fn resource_id(&self) -> Option<&str> {
        self.vpc_id()
    }
}

/// DescribeVpcAttribute request for a single attribute.
#[derive(Clone, Debug, PartialEq)]
pub struct DescribeVpcAttribute {
    /// The VPC to inspect.
    pub vpc_id: String,
    /// The attribute to fetch.
    pub attribute: types::VpcAttributeName,
}

impl find::Describe for DescribeVpcAttribute {
    type Item = DescribeVpcAttributeOutput;
    const NOT_FOUND_CODES: &'static [&'static str] = &[VPC_NOT_FOUND];
}

impl DescribePages<DescribeVpcAttribute> for Client {
    async fn describe_page(
        &self,
        query: &DescribeVpcAttribute,
        _next_token: Option<String>,
    ) -> std::result::Result<Page<DescribeVpcAttributeOutput>, ApiError> {
        let output = self
            .describe_vpc_attribute()
            .vpc_id(&query.vpc_id)
            .attribute(query.attribute.clone())
            .send()
            .await?;
        Ok(Page::last(vec![output]))
    }
}

describe_query! {
    /// DescribeVpcClassicLink request.
    DescribeVpcClassicLink => VpcClassicLink {
        operation: describe_vpc_classic_link,
        ids: set_vpc_ids,
        filters: set_filters,
        output: vpcs,
        not_found: [VPC_NOT_FOUND, UNSUPPORTED_OPERATION],
        pagination: single_page,
    }
}

impl find::Resource for types::VpcClassicLink {
    fn resource_id(&self) -> Option<&str> {
        self.vpc_id()
    }
}

/// DescribeVpcClassicLinkDnsSupport request.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct DescribeVpcClassicLinkDnsSupport {
    /// VPCs to describe; empty means every VPC.
    pub vpc_ids: Vec<String>,
}

impl find::Describe for DescribeVpcClassicLinkDnsSupport {
    type Item = types::ClassicLinkDnsSupport;
    const NOT_FOUND_CODES: &'static [&'static str] = &[VPC_NOT_FOUND, UNSUPPORTED_OPERATION];
}

impl DescribePages<DescribeVpcClassicLinkDnsSupport> for Client {
    async fn describe_page(
        &self,
        query: &DescribeVpcClassicLinkDnsSupport,
        next_token: Option<String>,
    ) -> std::result::Result<Page<types::ClassicLinkDnsSupport>, ApiError> {
        let output = self
            .describe_vpc_classic_link_dns_support()
            .set_vpc_ids(common::non_empty(&query.vpc_ids))
            .set_next_token(next_token)
            .send()
            .await?;
        Ok(Page {
            items: output.vpcs.unwrap_or_default(),
            next_token: output.next_token,
        })
    }
}

impl find::Resource for types::ClassicLinkDnsSupport {
    fn resource_id(&self) -> Option<&str> {
        self.vpc_id()
    }
}

type AttributeField = fn(&DescribeVpcAttributeOutput) -> Option<&types::AttributeBooleanValue>;

/// Every VPC matching `query`.
pub async fn find_vpcs<C>(client: &C, query: &DescribeVpcs) -> Result<Vec<types::Vpc>>
where
    C: DescribePages<DescribeVpcs>,
{
    find::find_many(client, query).await
}

/// The single VPC matching `query`.
pub async fn find_vpc<C>(client: &C, query: &DescribeVpcs) -> Result<types::Vpc>
where
    C: DescribePages<DescribeVpcs>,
{
    find::find_one(client, query).await
}

/// The VPC `id`.
pub async fn find_vpc_by_id<C>(client: &C, id: &str) -> Result<types::Vpc>
where
    C: DescribePages<DescribeVpcs>,
{
    find::find_by_id(client, &DescribeVpcs::by_id(id), id).await
}

/// Value of a boolean VPC attribute.
///
/// Only the DNS hostnames, DNS support and network address usage metrics
/// attributes are boolean; any other name fails with
/// [`Error::UnsupportedAttribute`] without calling the service.
#[cfg_attr(
    feature = "tracing",
    tracing::instrument(name = "aws_lookup.ec2.find_vpc_attribute", skip(client), err)
)]
pub async fn find_vpc_attribute<C>(
    client: &C,
    vpc_id: &str,
    attribute: types::VpcAttributeName,
) -> Result<bool>
where
    C: DescribePages<DescribeVpcAttribute>,
{
    let field: AttributeField = match &attribute {
        types::VpcAttributeName::EnableDnsHostnames => {
            DescribeVpcAttributeOutput::enable_dns_hostnames
        }
        types::VpcAttributeName::EnableDnsSupport => DescribeVpcAttributeOutput::enable_dns_support,
        types::VpcAttributeName::EnableNetworkAddressUsageMetrics => {
            DescribeVpcAttributeOutput::enable_network_address_usage_metrics
        }
        other => {
            return Err(Error::UnsupportedAttribute {
                kind: "VPC",
                name: other.as_str().to_string(),
            });
        }
    };
    let query = DescribeVpcAttribute {
        vpc_id: vpc_id.to_string(),
        attribute,
    };
    let output = find::find_one(client, &query).await?;
    field(&output)
        .and_then(types::AttributeBooleanValue::value)
        .ok_or_else(|| Error::empty_result(&query))
}

/// Succeeds when VPC `vpc_id` uses DHCP options set `dhcp_options_id`.
pub async fn find_vpc_dhcp_options_association<C>(
    client: &C,
    vpc_id: &str,
    dhcp_options_id: &str,
) -> Result<()>
where
    C: DescribePages<DescribeVpcs>,
{
    let vpc = find_vpc_by_id(client, vpc_id).await?;
    if vpc.dhcp_options_id() != Some(dhcp_options_id) {
        return Err(Error::not_found(Some(format!(
            "EC2 VPC ({vpc_id}) DHCP Options Set ({dhcp_options_id}) Association not found"
        ))));
    }
    Ok(())
}

/// Whether ClassicLink is enabled for VPC `vpc_id`. Regions without
/// ClassicLink report the VPC as not found.
pub async fn find_vpc_classic_link_enabled<C>(client: &C, vpc_id: &str) -> Result<bool>
where
    C: DescribePages<DescribeVpcClassicLink>,
{
    let query = DescribeVpcClassicLink::by_id(vpc_id);
    let vpc = find::find_by_id(client, &query, vpc_id).await?;
    Ok(vpc.classic_link_enabled().unwrap_or_default())
}

/// Whether ClassicLink DNS support is enabled for VPC `vpc_id`.
///
/// Regions without ClassicLink, including those where the call has been
/// administratively disabled, report the VPC as not found.
pub async fn find_vpc_classic_link_dns_supported<C>(client: &C, vpc_id: &str) -> Result<bool>
where
    C: DescribePages<DescribeVpcClassicLinkDnsSupport>,
{
    let query = DescribeVpcClassicLinkDnsSupport {
        vpc_ids: vec![vpc_id.to_string()],
    };
    let vpc = find::find_by_id(client, &query, vpc_id)
        .await
        .map_err(|error| match error {
            Error::Api(source) if administratively_disabled(&source) => {
                Error::from_api(source, &[AUTH_FAILURE], &query)
            }
            other => other,
        })?;
    Ok(vpc.classic_link_dns_supported().unwrap_or_default())
}

fn administratively_disabled(error: &ApiError) -> bool {
    error.code() == Some(AUTH_FAILURE)
        && error
            .message()
            .is_some_and(|message| message.contains(ADMINISTRATIVELY_DISABLED))
}

fn disassociated_state(state: Option<&types::VpcCidrBlockState>) -> Option<&str> {
    state
        .and_then(types::VpcCidrBlockState::state)
        .filter(|code| **code == types::VpcCidrBlockStateCode::Disassociated)
        .map(types::VpcCidrBlockStateCode::as_str)
}

/// The IPv4 CIDR block association `id`, along with the VPC holding it.
pub async fn find_vpc_cidr_block_association_by_id<C>(
    client: &C,
    id: &str,
) -> Result<(types::VpcCidrBlockAssociation, types::Vpc)>
where
    C: DescribePages<DescribeVpcs>,
{
    let query = DescribeVpcs::by_filters(Filters::attributes([(
        "cidr-block-association.association-id",
        id,
    )]));
    let vpc = find_vpc(client, &query).await?;
    let association = vpc
        .cidr_block_association_set()
        .iter()
        .find(|association| association.association_id() == Some(id))
        .cloned()
        .ok_or_else(|| Error::not_found(None))?;
    if let Some(state) = disassociated_state(association.cidr_block_state()) {
        return Err(Error::not_found(Some(state.to_string())));
    }
    Ok((association, vpc))
}

/// The IPv6 CIDR block association `id`, along with the VPC holding it.
pub async fn find_vpc_ipv6_cidr_block_association_by_id<C>(
    client: &C,
    id: &str,
) -> Result<(types::VpcIpv6CidrBlockAssociation, types::Vpc)>
where
    C: DescribePages<DescribeVpcs>,
{
    let query = DescribeVpcs::by_filters(Filters::attributes([(
        "ipv6-cidr-block-association.association-id",
        id,
    )]));
    let vpc = find_vpc(client, &query).await?;
    let association = vpc
        .ipv6_cidr_block_association_set()
        .iter()
        .find(|association| association.association_id() == Some(id))
        .cloned()
        .ok_or_else(|| Error::not_found(None))?;
    if let Some(state) = disassociated_state(association.ipv6_cidr_block_state()) {
        return Err(Error::not_found(Some(state.to_string())));
    }
    Ok((association, vpc))
}

#[cfg(test)]
mod tests {
    use super::*;

    use crate::testing::Scripted;
    use rstest::rstest;

    fn boolean(value: bool) -> types::AttributeBooleanValue {
        types::AttributeBooleanValue::builder().value(value).build()
    }

    #[tokio::test]
    async fn test_find_vpc_by_id() {
        let vpc = types::Vpc::builder().vpc_id("vpc-1").build();
        let client = Scripted::<DescribeVpcs>::items(vec![vpc.clone()]);
        assert_eq!(find_vpc_by_id(&client, "vpc-1").await.unwrap(), vpc);
        assert_eq!(
            client.queries(),
            [format!("{:?}", DescribeVpcs::by_id("vpc-1"))]
        );
    }

    #[tokio::test]
    async fn test_find_vpc_by_id_stale_echo() {
        let client =
            Scripted::<DescribeVpcs>::items(vec![types::Vpc::builder().vpc_id("vpc-2").build()]);
        let error = find_vpc_by_id(&client, "vpc-1").await.unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn test_find_vpc_by_id_not_found_code() {
        let client = Scripted::<DescribeVpcs>::error(VPC_NOT_FOUND);
        let error = find_vpc_by_id(&client, "vpc-1").await.unwrap_err();
        assert!(error.is_not_found());
        assert_eq!(error.code(), Some(VPC_NOT_FOUND));
    }

    #[tokio::test]
    async fn test_find_vpcs_empty() {
        let client = Scripted::<DescribeVpcs>::items(vec![]);
        let vpcs = find_vpcs(&client, &DescribeVpcs::default()).await.unwrap();
        assert!(vpcs.is_empty());
    }

    #[rstest]
    #[case::dns_hostnames(
        types::VpcAttributeName::EnableDnsHostnames,
        DescribeVpcAttributeOutput::builder()
            .enable_dns_hostnames(boolean(true))
            .enable_dns_support(boolean(false))
            .build(),
        true
    )]
    #[case::dns_support(
        types::VpcAttributeName::EnableDnsSupport,
        DescribeVpcAttributeOutput::builder()
            .enable_dns_hostnames(boolean(true))
            .enable_dns_support(boolean(false))
            .build(),
        false
    )]
    #[case::network_address_usage_metrics(
        types::VpcAttributeName::EnableNetworkAddressUsageMetrics,
        DescribeVpcAttributeOutput::builder()
            .enable_network_address_usage_metrics(boolean(true))
            .build(),
        true
    )]
    #[tokio::test]
    async fn test_find_vpc_attribute(
        #[case] attribute: types::VpcAttributeName,
        #[case] output: DescribeVpcAttributeOutput,
        #[case] expected: bool,
    ) {
        let client = Scripted::<DescribeVpcAttribute>::items(vec![output]);
        let value = find_vpc_attribute(&client, "vpc-1", attribute)
            .await
            .unwrap();
        assert_eq!(value, expected);
    }

    #[tokio::test]
    async fn test_find_vpc_attribute_missing_value() {
        let client = Scripted::<DescribeVpcAttribute>::items(vec![
            DescribeVpcAttributeOutput::builder().vpc_id("vpc-1").build(),
        ]);
        let error = find_vpc_attribute(&client, "vpc-1", types::VpcAttributeName::EnableDnsSupport)
            .await
            .unwrap_err();
        assert!(matches!(
            error,
            Error::NotFound { message: Some(ref message), .. } if message == "empty result"
        ));
    }

    #[tokio::test]
    async fn test_find_vpc_attribute_unsupported() {
        let client = Scripted::<DescribeVpcAttribute>::items(vec![]);
        let error = find_vpc_attribute(
            &client,
            "vpc-1",
            types::VpcAttributeName::from("enableClassicLink"),
        )
        .await
        .unwrap_err();
        assert!(matches!(
            error,
            Error::UnsupportedAttribute { kind: "VPC", ref name } if name == "enableClassicLink"
        ));
        assert!(client.queries().is_empty());
    }

    #[rstest]
    #[case::associated("dopt-1", true)]
    #[case::other_set("dopt-2", false)]
    #[tokio::test]
    async fn test_find_vpc_dhcp_options_association(
        #[case] dhcp_options_id: &str,
        #[case] found: bool,
    ) {
        let vpc = types::Vpc::builder()
            .vpc_id("vpc-1")
            .dhcp_options_id("dopt-1")
            .build();
        let client = Scripted::<DescribeVpcs>::items(vec![vpc]);
        let result = find_vpc_dhcp_options_association(&client, "vpc-1", dhcp_options_id).await;
        assert_eq!(result.is_ok(), found);
    }

    fn vpc_with_association(state: types::VpcCidrBlockStateCode) -> types::Vpc {
        types::Vpc::builder()
            .vpc_id("vpc-1")
            .cidr_block_association_set(
                types::VpcCidrBlockAssociation::builder()
                    .association_id("vpc-cidr-assoc-1")
                    .cidr_block("10.1.0.0/16")
                    .cidr_block_state(types::VpcCidrBlockState::builder().state(state).build())
                    .build(),
            )
            .build()
    }

    #[tokio::test]
    async fn test_find_vpc_cidr_block_association_by_id() {
        let vpc = vpc_with_association(types::VpcCidrBlockStateCode::Associated);
        let client = Scripted::<DescribeVpcs>::items(vec![vpc.clone()]);
        let (association, parent) =
            find_vpc_cidr_block_association_by_id(&client, "vpc-cidr-assoc-1")
                .await
                .unwrap();
        assert_eq!(association.cidr_block(), Some("10.1.0.0/16"));
        assert_eq!(parent, vpc);
    }

    #[tokio::test]
    async fn test_find_vpc_cidr_block_association_disassociated() {
        let vpc = vpc_with_association(types::VpcCidrBlockStateCode::Disassociated);
        let client = Scripted::<DescribeVpcs>::items(vec![vpc]);
        let error = find_vpc_cidr_block_association_by_id(&client, "vpc-cidr-assoc-1")
            .await
            .unwrap_err();
        assert_eq!(error.to_string(), "disassociated");
    }

    #[tokio::test]
    async fn test_find_vpc_ipv6_cidr_block_association_unmatched() {
        let vpc = types::Vpc::builder()
            .vpc_id("vpc-1")
            .ipv6_cidr_block_association_set(
                types::VpcIpv6CidrBlockAssociation::builder()
                    .association_id("vpc-cidr-assoc-2")
                    .build(),
            )
            .build();
        let client = Scripted::<DescribeVpcs>::items(vec![vpc]);
        let error = find_vpc_ipv6_cidr_block_association_by_id(&client, "vpc-cidr-assoc-1")
            .await
            .unwrap_err();
        assert!(error.is_not_found());
    }

    #[rstest]
    #[case::enabled(Some(true), true)]
    #[case::disabled(Some(false), false)]
    #[case::unset(None, false)]
    #[tokio::test]
    async fn test_find_vpc_classic_link_enabled(
        #[case] enabled: Option<bool>,
        #[case] expected: bool,
    ) {
        let vpc = types::VpcClassicLink::builder()
            .vpc_id("vpc-1")
            .set_classic_link_enabled(enabled)
            .build();
        let client = Scripted::<DescribeVpcClassicLink>::items(vec![vpc]);
        assert_eq!(find_vpc_classic_link_enabled(&client, "vpc-1").await.unwrap(), expected);
    }

    #[rstest]
    #[case::unsupported(UNSUPPORTED_OPERATION)]
    #[case::unknown_vpc(VPC_NOT_FOUND)]
    #[tokio::test]
    async fn test_find_vpc_classic_link_enabled_unavailable(#[case] code: &str) {
        let client = Scripted::<DescribeVpcClassicLink>::error(code);
        let error = find_vpc_classic_link_enabled(&client, "vpc-1").await.unwrap_err();
        assert!(error.is_not_found());
    }

    #[tokio::test]
    async fn test_find_vpc_classic_link_dns_supported() {
        let vpc = types::ClassicLinkDnsSupport::builder()
            .vpc_id("vpc-1")
            .classic_link_dns_supported(true)
            .build();
        let client = Scripted::<DescribeVpcClassicLinkDnsSupport>::items(vec![vpc]);
        assert!(find_vpc_classic_link_dns_supported(&client, "vpc-1").await.unwrap());
    }

    #[rstest]
    #[case::administratively_disabled(
        ApiError::new(AUTH_FAILURE, "This request has been administratively disabled."),
        true
    )]
    #[case::other_auth_failure(ApiError::new(AUTH_FAILURE, "credentials expired"), false)]
    #[case::unsupported(ApiError::new(UNSUPPORTED_OPERATION, "no ClassicLink here"), true)]
    #[tokio::test]
    async fn test_find_vpc_classic_link_dns_supported_errors(
        #[case] error: ApiError,
        #[case] not_found: bool,
    ) {
        let client = Scripted::<DescribeVpcClassicLinkDnsSupport>::from_pages(vec![Err(error)]);
        let error = find_vpc_classic_link_dns_supported(&client, "vpc-1")
            .await
            .unwrap_err();
        assert_eq!(error.is_not_found(), not_found);
        assert!(matches!(error.code(), Some(_)));
    }
}
