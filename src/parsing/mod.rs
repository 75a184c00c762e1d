//! Source parsing and syntax-tree analysis

pub mod go;

pub use go::{
    Declaration, DeclarationScanner, FunctionDecl, GoParser, ImportChecker, ImportRef,
    ReceiverShape, StructRelation, TypeDecl,
};
