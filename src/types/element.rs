use std::fmt;

use serde::{Deserialize, Serialize};
use smol_str::SmolStr;

use crate::encode::writer::Writer;
use crate::options::EncodeOptions;
use crate::types::Node;

/// One forwarded-element: the directives added by a single hop.
///
/// # Examples
/// ```
/// use forwarded_header::{ForwardedElement, Node};
///
/// let element = ForwardedElement::new()
///     .with_for(Node::obfuscated("_gazonk"))
///     .with_proto("https");
/// assert_eq!(element.to_string(), "for=_gazonk;proto=https");
/// assert_eq!(ForwardedElement::new().to_string(), "for=unknown");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub struct ForwardedElement {
    /// Interface where the request came in to the proxy.
    pub by_node: Node,
    /// Client that initiated the request, or a previous proxy in the chain.
    pub for_node: Node,
    /// Original `Host` header value, lowercase when decoded.
    pub host: Option<SmolStr>,
    /// Scheme used by the incoming request, lowercase when decoded.
    pub proto: Option<SmolStr>,
}

impl ForwardedElement {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_by(mut self, node: impl Into<Node>) -> Self {
        self.by_node = node.into();
        self
    }

    pub fn with_for(mut self, node: impl Into<Node>) -> Self {
        self.for_node = node.into();
        self
    }

    pub fn with_host(mut self, host: impl Into<SmolStr>) -> Self {
        self.host = Some(host.into());
        self
    }

    pub fn with_proto(mut self, proto: impl Into<SmolStr>) -> Self {
        self.proto = Some(proto.into());
        self
    }

    /// True when no directive would be rendered.
    pub fn is_empty(&self) -> bool {
        self.by_node.is_unknown()
            && self.for_node.is_unknown()
            && self.host.as_deref().map_or(true, str::is_empty)
            && self.proto.as_deref().map_or(true, str::is_empty)
    }
}

impl fmt::Display for ForwardedElement {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut writer = Writer::new(EncodeOptions::default());
        writer.write_element(self);
        f.write_str(&writer.finish())
    }
}
