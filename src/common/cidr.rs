use std::net::{IpAddr, Ipv4Addr, Ipv6Addr};

fn parse(cidr: &str) -> Option<(IpAddr, u8)> {
    let (address, prefix) = cidr.split_once('/')?;
    if prefix.is_empty() || !prefix.bytes().all(|byte| byte.is_ascii_digit()) {
        return None;
    }
    let address: IpAddr = address.parse().ok()?;
    let prefix: u8 = prefix.parse().ok()?;
    let max_prefix = match address {
        IpAddr::V4(_) => 32,
        IpAddr::V6(_) => 128,
    };
    (prefix <= max_prefix).then_some((address, prefix))
}

fn network(address: IpAddr, prefix: u8) -> IpAddr {
    match address {
        IpAddr::V4(address) => {
            let mask = u32::MAX.checked_shl(32 - u32::from(prefix)).unwrap_or(0);
            IpAddr::V4(Ipv4Addr::from(u32::from(address) & mask))
        }
        IpAddr::V6(address) => {
            let mask = u128::MAX.checked_shl(128 - u32::from(prefix)).unwrap_or(0);
            IpAddr::V6(Ipv6Addr::from(u128::from(address) & mask))
        }
    }
}

/// Rewrites a CIDR block to its network address in canonical text form.
///
/// Host bits are cleared and IPv6 addresses are compressed, so
/// `2001:0DB8:0:0::/32` becomes `2001:db8::/32`. Input that does not parse is
/// returned unchanged.
pub fn canonical_cidr_block(cidr: &str) -> String {
    match parse(cidr) {
        Some((address, prefix)) => format!("{}/{prefix}", network(address, prefix)),
        None => cidr.to_string(),
    }
}

/// Whether two CIDR blocks denote the same address and prefix length,
/// whatever their textual notation.
///
/// Blocks that do not parse are never equal.
pub fn cidr_blocks_equal(a: &str, b: &str) -> bool {
    match (parse(a), parse(b)) {
        (Some(a), Some(b)) => a == b,
        _ => false,
    }
}
