#![deny(missing_docs)]

//! # AWS Lookup
//!
//! Typed, not-found aware lookups over the AWS EC2, DMS and CloudWatch RUM
//! describe APIs.
//!
//! ## Overview
//!
//! Every AWS describe call answers "no such object" in its own way: an error
//! code, an empty listing, an object stuck in a `deleted` state, or a stale
//! echo of a different object. This library folds all of them into one
//! [`error::Error::NotFound`] so callers can branch on a single condition:
//! - Plural finders return every match across all pages
//! - Singular finders require exactly one match
//! - `*_by_id` finders also reject terminal lifecycle states and identity mismatches
//! - Sub-object finders locate an association, route or entry inside a parent
//!
//! ## Quick Example
//!
//! ```no_run
//! use aws_lookup::{config, ec2, error, handler};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let sdk_config = config::AwsConfig::new("us-east-1").load().await;
//! let clients = config::Clients::new(&sdk_config);
//!
//! // NotFound covers an unknown ID, an empty listing and a deleted gateway alike
//! let gateway = ec2::vpn::find_vpn_gateway_by_id(&clients.ec2, "vgw-0123456789abcdef0").await;
//! match handler::read("EC2 VPN Gateway (vgw-0123456789abcdef0)", gateway, false)? {
//!     Some(gateway) => println!("{:?}", gateway.state()),
//!     None => println!("gone, dropping from state"),
//! }
//!
//! let route = ec2::route_table::find_route_by_ipv6_destination(
//!     &clients.ec2,
//!     "rtb-0123456789abcdef0",
//!     "2001:0DB8::/56",
//! )
//! .await;
//! if let Some(route) = error::optional(route)? {
//!     println!("{:?}", route.egress_only_internet_gateway_id());
//! }
//! # Ok(())
//! # }
//! ```
//!
//! ## Modules
//!
//! - [`mod@find`] - The paginated, not-found normalizing lookup core
//! - [`mod@ec2`] - EC2 networking finders
//! - [`mod@dms`] - DMS endpoint finders
//! - [`mod@rum`] - CloudWatch RUM app monitor finders
//! - [`mod@handler`] - How a lookup result maps onto refresh and delete outcomes

/// Filters and CIDR helpers shared by the service modules.
pub mod common;

/// Region, endpoint and credential settings, and the SDK clients built from them.
pub mod config;

pub mod dms;

pub mod ec2;

/// Lookup errors and their not-found classification.
pub mod error;

/// Generic finders over any paginated describe call.
///
/// This module provides:
/// - The [`find::Describe`] and [`find::DescribePages`] seam between queries and clients
/// - [`find::find_many`], [`find::find_one`] and [`find::find_by_id`]
/// - The [`find::Resource`] identity and lifecycle hooks
pub mod find;

/// Refresh and delete outcomes for callers that keep resource state.
pub mod handler;

pub mod rum;

#[cfg(test)]
mod testing;
