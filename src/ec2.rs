//! EC2 networking lookups.
//!
//! Every describe request is a query struct implementing [`crate::find::Describe`],
//! served by [`aws_sdk_ec2::Client`] through [`crate::find::DescribePages`]:
//! - Plural finders return every match, following pagination
//! - Singular finders require exactly one match
//! - `*_by_id` finders also reject terminal lifecycle states and stale echoes
//! - Sub-object finders scan an embedded collection of an already fetched parent

/// generate a describe query, its not-found codes and its EC2 client binding
macro_rules! describe_query {
    (
        $(#[$meta:meta])*
        $query:ident => $item:ident {
            operation: $operation:ident,
            ids: $set_ids:ident,
            filters: $set_filters:ident,
            output: $output:ident,
            not_found: [$($code:expr),* $(,)?],
            pagination: $pagination:ident $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $query {
            /// Identifiers to describe; empty means no restriction.
            pub ids: Vec<String>,
            /// Filters evaluated by the service.
            pub filters: $crate::common::filter::Filters,
        }

        impl $query {
            /// Request for the single identifier `id`.
            pub fn by_id(id: impl Into<String>) -> Self {
                Self {
                    ids: vec![id.into()],
                    ..Default::default()
                }
            }

            /// Request for every object matching `filters`.
            pub fn by_filters(filters: $crate::common::filter::Filters) -> Self {
                Self {
                    filters,
                    ..Default::default()
                }
            }
        }

        impl $crate::find::Describe for $query {
            type Item = ::aws_sdk_ec2::types::$item;
            const NOT_FOUND_CODES: &'static [&'static str] = &[$($code),*];
        }

        describe_query!(@client $pagination, $query, $item, $operation, $set_ids, $set_filters, $output);
    };
    (@client next_token, $query:ident, $item:ident, $operation:ident, $set_ids:ident, $set_filters:ident, $output:ident) => {
        impl $crate::find::DescribePages<$query> for ::aws_sdk_ec2::Client {
            async fn describe_page(
                &self,
                query: &$query,
                next_token: Option<String>,
            ) -> ::std::result::Result<
                $crate::find::Page<::aws_sdk_ec2::types::$item>,
                $crate::error::ApiError,
            > {
                let output = self
                    .$operation()
                    .$set_ids($crate::common::non_empty(&query.ids))
                    .$set_filters(query.filters.clone().into())
                    .set_next_token(next_token)
                    .send()
                    .await?;
                Ok($crate::find::Page {
                    items: output.$output.unwrap_or_default(),
                    next_token: output.next_token,
                })
            }
        }
    };
    (@client single_page, $query:ident, $item:ident, $operation:ident, $set_ids:ident, $set_filters:ident, $output:ident) => {
        impl $crate::find::DescribePages<$query> for ::aws_sdk_ec2::Client {
            async fn describe_page(
                &self,
                query: &$query,
                _next_token: Option<String>,
            ) -> ::std::result::Result<
                $crate::find::Page<::aws_sdk_ec2::types::$item>,
                $crate::error::ApiError,
            > {
                let output = self
                    .$operation()
                    .$set_ids($crate::common::non_empty(&query.ids))
                    .$set_filters(query.filters.clone().into())
                    .send()
                    .await?;
                Ok($crate::find::Page::last(output.$output.unwrap_or_default()))
            }
        }
    };
}

/// generate a describe query scoped to one parent object and its EC2 client binding
macro_rules! scoped_query {
    (
        $(#[$meta:meta])*
        $query:ident => $item:ident {
            operation: $operation:ident,
            scope: $scope:ident,
            output: $output:ident,
            not_found: [$($code:expr),* $(,)?] $(,)?
        }
    ) => {
        $(#[$meta])*
        #[derive(Clone, Debug, Default, PartialEq)]
        pub struct $query {
            /// Parent object the request is scoped to.
            pub $scope: String,
            /// Filters evaluated by the service.
            pub filters: $crate::common::filter::Filters,
        }

        impl $query {
            /// Request for the objects of `scope` matching `filters`.
            pub fn new(scope: impl Into<String>, filters: $crate::common::filter::Filters) -> Self {
                Self {
                    $scope: scope.into(),
                    filters,
                }
            }
        }

        impl $crate::find::Describe for $query {
            type Item = ::aws_sdk_ec2::types::$item;
            const NOT_FOUND_CODES: &'static [&'static str] = &[$($code),*];
        }

        impl $crate::find::DescribePages<$query> for ::aws_sdk_ec2::Client {
            async fn describe_page(
                &self,
                query: &$query,
                next_token: Option<String>,
            ) -> ::std::result::Result<
                $crate::find::Page<::aws_sdk_ec2::types::$item>,
                $crate::error::ApiError,
            > {
                let output = self
                    .$operation()
                    .$scope(&query.$scope)
                    .set_filters(query.filters.clone().into())
                    .set_next_token(next_token)
                    .send()
                    .await?;
                Ok($crate::find::Page {
                    items: output.$output.unwrap_or_default(),
                    next_token: output.next_token,
                })
            }
        }
    };
}

/// Carrier gateways.
pub mod carrier_gateway;

/// Client VPN endpoints, authorization rules, target networks and routes.
pub mod client_vpn;

/// DHCP options sets.
pub mod dhcp_options;

/// Internet gateways, egress-only internet gateways and their attachments.
pub mod internet_gateway;

/// Key pairs.
pub mod key_pair;

/// NAT gateways.
pub mod nat_gateway;

/// Network ACLs, their associations and entries.
pub mod network_acl;

/// Network interfaces, their attachments and security groups.
pub mod network_interface;

/// Managed prefix lists and their entries.
pub mod prefix_list;

/// Route tables, routes, associations and propagations.
pub mod route_table;

/// Security groups.
pub mod security_group;

/// Subnets, their IPv6 CIDR block associations and CIDR reservations.
pub mod subnet;

/// Transit gateways, their route tables, static routes, propagations and
/// prefix list references.
pub mod transit_gateway;

/// Transit gateway attachments, VPC attachments, Connect attachments and
/// Connect peers.
pub mod transit_gateway_attachment;

/// Transit gateway multicast domains, their associations and group members.
pub mod transit_gateway_multicast;

/// VPCs, their attributes, ClassicLink settings and CIDR block associations.
pub mod vpc;

/// VPC endpoints and their route table and subnet associations.
pub mod vpc_endpoint;

/// VPC peering connections.
pub mod vpc_peering;

/// VPN gateways, customer gateways and VPN connections.
pub mod vpn;
