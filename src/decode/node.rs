use std::net::{IpAddr, Ipv6Addr};

use memchr::{memchr, memrchr};

use crate::constants::{is_obfuscated, UNKNOWN};
use crate::error::ErrorKind;
use crate::types::{Node, NodePort};

/// Parses a decoded `by`/`for` value.
///
/// Accepted shapes: `unknown` (or empty), `_obfnode[:port]`, `ipv4[:port]`
/// and `"[" ipv6 "]" [":" port]`, where port is decimal or `_obfport`.
pub(crate) fn parse_node(s: &str) -> Result<Node, ErrorKind> {
    let s = s.trim();
    if s.is_empty() || s.eq_ignore_ascii_case(UNKNOWN) {
        return Ok(Node::Unknown);
    }

    let bytes = s.as_bytes();
    let mut port_pos = memrchr(b':', bytes);

    let node = match bytes[0] {
        b'_' => {
            let id = &s[..port_pos.unwrap_or(s.len())];
            if !is_obfuscated(id) {
                return Err(ErrorKind::InvalidObfuscatedNode);
            }
            Node::obfuscated(id)
        }
        b'[' => {
            let end = memchr(b']', bytes).ok_or(ErrorKind::MissingBracket)?;
            match port_pos {
                // a colon past the bracket is only valid as the port separator
                Some(pos) if pos > end => {
                    if pos != end + 1 {
                        return Err(ErrorKind::UnexpectedColon);
                    }
                }
                _ => {
                    port_pos = None;
                    if end != s.len() - 1 {
                        return Err(ErrorKind::TrailingAfterBracket);
                    }
                }
            }
            Node::ip(parse_ip(&s[1..end])?)
        }
        _ => Node::ip(parse_ip(&s[..port_pos.unwrap_or(s.len())])?),
    };

    match port_pos {
        None => Ok(node),
        Some(pos) => Ok(match parse_port(&s[pos + 1..])? {
            NodePort::Numeric(port) => node.with_port(port),
            NodePort::Obfuscated(port) => node.with_obfuscated_port(port),
        }),
    }
}

fn parse_ip(text: &str) -> Result<IpAddr, ErrorKind> {
    match text.parse::<IpAddr>() {
        Ok(ip) => Ok(ip),
        Err(err) => match text.split_once('%') {
            Some((addr, _)) if addr.parse::<Ipv6Addr>().is_ok() => {
                Err(ErrorKind::ZoneIdentifier)
            }
            _ => Err(err.into()),
        },
    }
}

fn parse_port(text: &str) -> Result<NodePort, ErrorKind> {
    if text.starts_with('_') {
        if !is_obfuscated(text) {
            return Err(ErrorKind::InvalidObfuscatedPort);
        }
        return Ok(NodePort::Obfuscated(text.into()));
    }
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return Err(ErrorKind::InvalidPort);
    }
    text.parse::<u16>()
        .map(NodePort::Numeric)
        .map_err(|_| ErrorKind::InvalidPort)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::Ipv4Addr;

    fn v6(s: &str) -> IpAddr {
        IpAddr::V6(s.parse().unwrap())
    }

    #[rstest::rstest]
    #[case("", Node::Unknown)]
    #[case("unknown", Node::Unknown)]
    #[case(" UnKnOwN ", Node::Unknown)]
    #[case("_gazonk", Node::obfuscated("_gazonk"))]
    #[case("_gazonk:80", Node::obfuscated("_gazonk").with_port(80))]
    #[case("_gazonk:_p-1", Node::obfuscated("_gazonk").with_obfuscated_port("_p-1"))]
    #[case("192.0.2.43", Node::ip(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 43))))]
    #[case(
        "192.0.2.43:47011",
        Node::ip(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 43))).with_port(47011)
    )]
    #[case(
        "192.0.2.43:_hidden",
        Node::ip(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 43))).with_obfuscated_port("_hidden")
    )]
    #[case("[2001:db8:cafe::17]", Node::ip(v6("2001:db8:cafe::17")))]
    #[case("[2001:db8:cafe::17]:4711", Node::ip(v6("2001:db8:cafe::17")).with_port(4711))]
    #[case("[::1]:0", Node::ip(v6("::1")).with_port(0))]
    fn test_parse_node(#[case] input: &str, #[case] expected: Node) {
        assert_eq!(parse_node(input).unwrap(), expected);
    }

    #[rstest::rstest]
    #[case("_*****", ErrorKind::InvalidObfuscatedNode)]
    #[case("_gazonk:_*****", ErrorKind::InvalidObfuscatedPort)]
    #[case("_gazonk:", ErrorKind::InvalidPort)]
    #[case("192.0.2.1:0x12", ErrorKind::InvalidPort)]
    #[case("192.0.2.1:+80", ErrorKind::InvalidPort)]
    #[case("192.0.2.1:65536", ErrorKind::InvalidPort)]
    #[case("[2001:db8:cafe::17:4711", ErrorKind::MissingBracket)]
    #[case("[2001:db8:cafe::17]4711", ErrorKind::TrailingAfterBracket)]
    #[case("[2001:db8:cafe::17]4711:", ErrorKind::UnexpectedColon)]
    #[case("[fe80::1%eth0]", ErrorKind::ZoneIdentifier)]
    #[case("[fe80::1%eth0]:80", ErrorKind::ZoneIdentifier)]
    #[case("::%]:00", ErrorKind::ZoneIdentifier)]
    fn test_parse_node_rejects(#[case] input: &str, #[case] expected: ErrorKind) {
        assert_eq!(parse_node(input).unwrap_err(), expected);
    }

    #[rstest::rstest]
    #[case("192.0.2.256")]
    #[case("[2001:db8:cafe::INVALID]")]
    #[case("example.com")]
    fn test_parse_node_surfaces_address_error(#[case] input: &str) {
        assert!(matches!(
            parse_node(input),
            Err(ErrorKind::InvalidAddress(_))
        ));
    }
}
