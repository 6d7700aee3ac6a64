use std::fmt;
use std::net::{IpAddr, SocketAddr};
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::decode::node::parse_node;
use crate::encode::writer::write_node;
use crate::error::ErrorKind;

/// Port attached to a [`Node`].
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum NodePort {
    Numeric(u16),
    /// Opaque port identifier, conventionally starting with `_`.
    Obfuscated(SmolStr),
}

impl From<u16> for NodePort {
    fn from(port: u16) -> Self {
        NodePort::Numeric(port)
    }
}

/// Identifies the interface or peer named by a `by` or `for` directive.
///
/// # Examples
/// ```
/// use std::net::{IpAddr, Ipv4Addr};
/// use forwarded_header::Node;
///
/// let node = Node::ip(IpAddr::V4(Ipv4Addr::new(192, 0, 2, 43))).with_port(47011);
/// assert_eq!(node.to_string(), "192.0.2.43:47011");
/// assert_eq!("192.0.2.43:47011".parse::<Node>().unwrap(), node);
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum Node {
    /// Absent, or the literal `unknown`.
    #[default]
    Unknown,
    Address {
        ip: IpAddr,
        port: Option<NodePort>,
    },
    Obfuscated {
        id: SmolStr,
        port: Option<NodePort>,
    },
}

impl Node {
    pub fn ip(ip: IpAddr) -> Self {
        Node::Address { ip, port: None }
    }

    pub fn socket(addr: SocketAddr) -> Self {
        Node::Address {
            ip: addr.ip(),
            port: Some(NodePort::Numeric(addr.port())),
        }
    }

    pub fn obfuscated(id: impl Into<SmolStr>) -> Self {
        Node::Obfuscated {
            id: id.into(),
            port: None,
        }
    }

    /// Attaches a numeric port. Has no effect on [`Node::Unknown`].
    pub fn with_port(self, port: u16) -> Self {
        self.with_node_port(NodePort::Numeric(port))
    }

    /// Attaches an obfuscated port. Has no effect on [`Node::Unknown`].
    pub fn with_obfuscated_port(self, port: impl Into<SmolStr>) -> Self {
        self.with_node_port(NodePort::Obfuscated(port.into()))
    }

    fn with_node_port(self, port: NodePort) -> Self {
        match self {
            Node::Unknown => Node::Unknown,
            Node::Address { ip, .. } => Node::Address {
                ip,
                port: Some(port),
            },
            Node::Obfuscated { id, .. } => Node::Obfuscated {
                id,
                port: Some(port),
            },
        }
    }

    pub fn is_unknown(&self) -> bool {
        matches!(self, Node::Unknown)
    }

    pub fn ip_addr(&self) -> Option<IpAddr> {
        match self {
            Node::Address { ip, .. } => Some(*ip),
            _ => None,
        }
    }

    pub fn port(&self) -> Option<&NodePort> {
        match self {
            Node::Unknown => None,
            Node::Address { port, .. } | Node::Obfuscated { port, .. } => port.as_ref(),
        }
    }

    /// Socket address, when the node is an address with a numeric port.
    pub fn socket_addr(&self) -> Option<SocketAddr> {
        match self {
            Node::Address {
                ip,
                port: Some(NodePort::Numeric(port)),
            } => Some(SocketAddr::new(*ip, *port)),
            _ => None,
        }
    }
}

impl From<IpAddr> for Node {
    fn from(ip: IpAddr) -> Self {
        Node::ip(ip)
    }
}

impl From<SocketAddr> for Node {
    fn from(addr: SocketAddr) -> Self {
        Node::socket(addr)
    }
}

impl FromStr for Node {
    type Err = ErrorKind;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        parse_node(s)
    }
}

impl fmt::Display for Node {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = String::new();
        write_node(&mut buf, self);
        f.write_str(&buf)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::net::{Ipv4Addr, Ipv6Addr};

    #[rstest::rstest]
    fn test_with_port_keeps_identity() {
        let node = Node::obfuscated("_gazonk").with_port(80);
        assert_eq!(
            node,
            Node::Obfuscated {
                id: "_gazonk".into(),
                port: Some(NodePort::Numeric(80)),
            }
        );
        let node = node.with_obfuscated_port("_p");
        assert_eq!(node.port(), Some(&NodePort::Obfuscated("_p".into())));
        assert_eq!(Node::Unknown.with_port(80), Node::Unknown);
    }

    #[rstest::rstest]
    fn test_socket_addr() {
        let addr = SocketAddr::new(IpAddr::V6(Ipv6Addr::LOCALHOST), 4711);
        let node = Node::from(addr);
        assert_eq!(node.socket_addr(), Some(addr));
        assert_eq!(node.ip_addr(), Some(addr.ip()));
        assert_eq!(node.to_string(), "[::1]:4711");

        let bare = Node::from(IpAddr::V4(Ipv4Addr::LOCALHOST));
        assert_eq!(bare.socket_addr(), None);
        assert_eq!(bare.port(), None);
    }

    #[rstest::rstest]
    fn test_display_unknown() {
        assert!(Node::default().is_unknown());
        assert_eq!(Node::Unknown.to_string(), "unknown");
    }
}
