mod cursor;
pub(crate) mod node;
mod parser;

use crate::types::ForwardedElement;
use crate::Result;

use parser::LineParser;

/// Decodes one or more occurrences of the `Forwarded` header.
///
/// Each item is one header occurrence. Elements accumulate across items in
/// order, so `["a", "b, c"]` decodes the same as `["a, b, c"]`. The first
/// malformed element rejects the whole input.
///
/// # Examples
/// ```
/// use forwarded_header::{parse, Node};
///
/// let elements = parse(["for=192.0.2.43", r#"for="[2001:db8:cafe::17]", for=unknown"#]).unwrap();
/// assert_eq!(elements.len(), 3);
/// assert_eq!(elements[2].for_node, Node::Unknown);
/// ```
pub fn parse<I, S>(lines: I) -> Result<Vec<ForwardedElement>>
where
    I: IntoIterator<Item = S>,
    S: AsRef<str>,
{
    let mut elements = Vec::new();
    for (index, line) in lines.into_iter().enumerate() {
        let mut parser = LineParser::new(line.as_ref(), index);
        if let Err(err) = parser.parse_into(&mut elements) {
            tracing::debug!(
                line = err.line(),
                offset = err.offset(),
                error = %err.kind,
                "rejected forwarded header"
            );
            return Err(err);
        }
    }
    tracing::trace!(elements = elements.len(), "decoded forwarded header");
    Ok(elements)
}

/// Decodes a single header occurrence.
pub fn parse_str(input: &str) -> Result<Vec<ForwardedElement>> {
    parse([input])
}
