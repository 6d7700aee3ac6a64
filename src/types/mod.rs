mod element;
mod node;

pub use element::ForwardedElement;
pub use node::{Node, NodePort};
