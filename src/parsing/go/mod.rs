//! Go language support
//!
//! Tree-sitter-go backs all syntax work here. Nothing in this module performs
//! type checking: receivers are matched by name, imports by path.
//!
//! ## Module Components
//!
//! - [`parser`]: Tree-sitter integration and syntax error reporting
//! - [`imports`]: Per-file import collection and validation
//! - [`scanner`]: Single-pass collection of type and function declarations
//! - [`receiver`]: Reduction of receiver type expressions to type names

pub mod imports;
pub mod parser;
pub mod receiver;
pub mod scanner;

pub use imports::{ImportChecker, ImportRef};
pub use parser::GoParser;
pub use receiver::{ReceiverShape, receiver_type_node, resolve_receiver_type};
pub use scanner::{
    Declaration, DeclarationScanner, FieldDecl, FunctionDecl, ScanResult, StructRelation, TypeDecl,
};
