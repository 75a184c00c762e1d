//! Receiver type resolution for Go method declarations
//!
//! A receiver's declared type is reduced to the bare name of the type the
//! method is bound to:
//! - `B` resolves to `B`
//! - `*B` resolves to `B` (one level of indirection only)
//! - `(B)` and `(*B)` are unwrapped first
//!
//! Everything else (`**B`, `pkg.B`, `B[T]`, ...) is reported as
//! [`GenError::ReceiverTypeUnresolved`]. Callers skip the method and keep going.

use crate::error::{GenError, GenResult};
use crate::loader::SourceUnit;
use tree_sitter::Node;

/// Syntactic shape of a receiver type expression
#[derive(Debug, Clone, Copy)]
pub enum ReceiverShape<'t> {
    /// Bare type name
    Named(Node<'t>),
    /// `*T`
    Pointer(Node<'t>),
    /// `(T)`
    Parenthesized(Node<'t>),
    /// Anything that cannot be reduced to a name
    Other(&'static str),
}

impl<'t> ReceiverShape<'t> {
    pub fn classify(node: Node<'t>) -> Self {
        match node.kind() {
            "type_identifier" => ReceiverShape::Named(node),
            "pointer_type" => match node.named_child(0) {
                Some(inner) => ReceiverShape::Pointer(inner),
                None => ReceiverShape::Other("pointer_type"),
            },
            "parenthesized_type" => match node.named_child(0) {
                Some(inner) => ReceiverShape::Parenthesized(inner),
                None => ReceiverShape::Other("parenthesized_type"),
            },
            other => ReceiverShape::Other(other),
        }
    }
}

/// Find the type expression of the first receiver in a receiver list.
///
/// Returns `None` when the list declares no receiver at all.
pub fn receiver_type_node(receiver_list: Node) -> Option<Node> {
    let mut cursor = receiver_list.walk();
    let declaration = receiver_list.named_children(&mut cursor).find(|child| {
        matches!(
            child.kind(),
            "parameter_declaration" | "variadic_parameter_declaration"
        )
    })?;
    declaration.child_by_field_name("type")
}

/// Reduce a receiver type expression to the name of the receiver's type.
///
/// `type_node` must come from `unit`'s tree. A name that cannot be read back
/// from `unit` is reported as unresolved.
pub fn resolve_receiver_type(
    type_node: Node,
    unit: &SourceUnit,
    method: &str,
) -> GenResult<String> {
    let mut current = type_node;
    let mut dereferenced = false;

    loop {
        match ReceiverShape::classify(current) {
            ReceiverShape::Named(name) => {
                let text = unit.node_text(&name);
                if text.is_empty() {
                    return Err(unresolved(method, "type name is outside the source text"));
                }
                return Ok(text.to_string());
            }
            ReceiverShape::Parenthesized(inner) => current = inner,
            ReceiverShape::Pointer(inner) if !dereferenced => {
                dereferenced = true;
                current = inner;
            }
            ReceiverShape::Pointer(_) => {
                return Err(unresolved(method, "more than one level of indirection"));
            }
            ReceiverShape::Other(kind) => {
                return Err(unresolved(
                    method,
                    &format!("'{kind}' is not reducible to a type name"),
                ));
            }
        }
    }
}

fn unresolved(method: &str, reason: &str) -> GenError {
    GenError::ReceiverTypeUnresolved {
        method: method.to_string(),
        reason: reason.to_string(),
    }
}
