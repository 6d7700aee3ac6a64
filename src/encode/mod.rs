pub(crate) mod writer;

use std::io::Write;

use crate::options::EncodeOptions;
use crate::types::ForwardedElement;

/// Encodes elements in canonical form.
///
/// Values are bare tokens where possible and quoted-strings otherwise,
/// elements are joined by `,`, and an element with nothing set is written as
/// `for=unknown`. An empty slice encodes to the empty string.
///
/// # Examples
/// ```
/// use std::net::{IpAddr, Ipv6Addr};
/// use forwarded_header::{serialize, ForwardedElement, Node};
///
/// let ip = IpAddr::V6(Ipv6Addr::new(0x2001, 0xdb8, 0xcafe, 0, 0, 0, 0, 0x17));
/// let elements = [
///     ForwardedElement::new().with_for(Node::ip(ip).with_port(4711)),
///     ForwardedElement::new(),
/// ];
/// assert_eq!(serialize(&elements), r#"for="[2001:db8:cafe::17]:4711",for=unknown"#);
/// assert_eq!(serialize(&[]), "");
/// ```
pub fn serialize(elements: &[ForwardedElement]) -> String {
    to_string_with_options(elements, &EncodeOptions::default())
}

pub fn to_string_with_options(elements: &[ForwardedElement], options: &EncodeOptions) -> String {
    let mut writer = writer::Writer::new(options.clone());
    writer.write_elements(elements);
    writer.finish()
}

pub fn to_vec(elements: &[ForwardedElement]) -> Vec<u8> {
    to_vec_with_options(elements, &EncodeOptions::default())
}

pub fn to_vec_with_options(elements: &[ForwardedElement], options: &EncodeOptions) -> Vec<u8> {
    let mut writer = writer::Writer::new(options.clone());
    writer.write_elements(elements);
    writer.finish_bytes()
}

pub fn to_writer<W: Write>(writer: W, elements: &[ForwardedElement]) -> std::io::Result<()> {
    to_writer_with_options(writer, elements, &EncodeOptions::default())
}

pub fn to_writer_with_options<W: Write>(
    mut writer: W,
    elements: &[ForwardedElement],
    options: &EncodeOptions,
) -> std::io::Result<()> {
    writer.write_all(&to_vec_with_options(elements, options))
}
