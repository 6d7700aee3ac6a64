use std::net::IpAddr;

use crate::{
    constants::{EMPTY_ELEMENT, KEY_BY, KEY_FOR, KEY_HOST, KEY_PROTO, UNKNOWN},
    options::{EncodeOptions, Quoting},
    text::{
        buffer::TextBuffer,
        string::{needs_quoting, sanitize_obfuscated_into, write_quoted_into},
    },
    types::{ForwardedElement, Node, NodePort},
};

pub(crate) struct Writer {
    buffer: String,
    options: EncodeOptions,
    scratch: String,
}

impl Writer {
    pub fn new(options: EncodeOptions) -> Self {
        Self {
            buffer: String::new(),
            options,
            scratch: String::new(),
        }
    }

    pub fn finish(self) -> String {
        self.buffer
    }

    pub fn finish_bytes(self) -> Vec<u8> {
        self.buffer.into_bytes()
    }

    pub fn write_elements(&mut self, elements: &[ForwardedElement]) {
        for (i, element) in elements.iter().enumerate() {
            if i > 0 {
                self.buffer
                    .push_str(self.options.element_separator.as_str());
            }
            self.write_element(element);
        }
    }

    /// Writes `by`, `for`, `host`, `proto` in that order, skipping empty ones.
    pub fn write_element(&mut self, element: &ForwardedElement) {
        if element.is_empty() {
            self.buffer.push_str(EMPTY_ELEMENT);
            return;
        }
        let start = self.buffer.len();
        self.write_node_pair(start, KEY_BY, &element.by_node);
        self.write_node_pair(start, KEY_FOR, &element.for_node);
        if let Some(host) = &element.host {
            self.write_pair(start, KEY_HOST, host);
        }
        if let Some(proto) = &element.proto {
            self.write_pair(start, KEY_PROTO, proto);
        }
    }

    fn write_node_pair(&mut self, start: usize, key: &str, node: &Node) {
        if node.is_unknown() {
            return;
        }
        let mut scratch = std::mem::take(&mut self.scratch);
        scratch.clear();
        write_node(&mut scratch, node);
        self.write_pair(start, key, &scratch);
        self.scratch = scratch;
    }

    fn write_pair(&mut self, start: usize, key: &str, value: &str) {
        if value.is_empty() {
            return;
        }
        if self.buffer.len() > start {
            self.buffer.push(';');
        }
        self.buffer.push_str(key);
        self.buffer.push('=');
        self.write_value(value);
    }

    fn write_value(&mut self, value: &str) {
        match self.options.quoting {
            Quoting::Minimal if !needs_quoting(value) => self.buffer.push_str(value),
            _ => write_quoted_into(&mut self.buffer, value),
        }
    }
}

/// Node text before token/quoted-string encoding, e.g. `[2001:db8::17]:4711`.
pub(crate) fn write_node<B: TextBuffer>(out: &mut B, node: &Node) {
    let port = match node {
        Node::Unknown => {
            out.push_str(UNKNOWN);
            return;
        }
        Node::Address { ip, port } => {
            match ip {
                IpAddr::V4(v4) => out.push_display(v4),
                IpAddr::V6(v6) => {
                    out.push_byte(b'[');
                    out.push_display(v6);
                    out.push_byte(b']');
                }
            }
            port
        }
        Node::Obfuscated { id, port } => {
            sanitize_obfuscated_into(out, id);
            port
        }
    };

    match port {
        None => {}
        Some(NodePort::Numeric(port)) => {
            let mut buf = itoa::Buffer::new();
            out.push_byte(b':');
            out.push_str(buf.format(*port));
        }
        Some(NodePort::Obfuscated(port)) => {
            out.push_byte(b':');
            sanitize_obfuscated_into(out, port);
        }
    }
}
