//! Declaration scanning over a Go syntax tree
//!
//! One traversal per file collects type declarations and function
//! declarations in source order. Functions carry their receiver list as an
//! `Option`, so free functions never reach receiver resolution.

use crate::loader::SourceUnit;
use std::collections::HashSet;
use tree_sitter::Node;

/// A declaration of interest found while scanning
#[derive(Debug, Clone)]
pub enum Declaration<'t> {
    Type(TypeDecl),
    Function(FunctionDecl<'t>),
}

/// `type Name ...`
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TypeDecl {
    pub name: String,
    /// Present only for struct bodies
    pub fields: Option<Vec<FieldDecl>>,
}

/// One field line of a struct body
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDecl {
    /// Empty for embedded fields
    pub names: Vec<String>,
    /// Set only when the field type is a bare type name
    pub simple_type: Option<String>,
}

/// `func Name(...) ...` or `func (recv) Name(...) ...`
///
/// The nodes belong to `unit`'s tree and are only ever read through it.
#[derive(Debug, Clone)]
pub struct FunctionDecl<'t> {
    pub unit: &'t SourceUnit,
    pub name: String,
    pub receiver: Option<Node<'t>>,
    pub parameters: Option<Node<'t>>,
    pub result: Option<Node<'t>>,
}

impl FunctionDecl<'_> {
    pub fn is_method(&self) -> bool {
        self.receiver.is_some()
    }
}

/// A struct field whose type names another type declared in the same file
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StructRelation {
    pub owner: String,
    pub field_type: String,
}

/// Everything found in one file, in source order
#[derive(Debug)]
pub struct ScanResult<'t> {
    unit: &'t SourceUnit,
    pub declarations: Vec<Declaration<'t>>,
}

impl<'t> ScanResult<'t> {
    /// The file this result was scanned from
    pub fn unit(&self) -> &'t SourceUnit {
        self.unit
    }

    pub fn types(&self) -> impl Iterator<Item = &TypeDecl> {
        self.declarations.iter().filter_map(|decl| match decl {
            Declaration::Type(ty) => Some(ty),
            Declaration::Function(_) => None,
        })
    }

    pub fn functions(&self) -> impl Iterator<Item = &FunctionDecl<'t>> {
        self.declarations.iter().filter_map(|decl| match decl {
            Declaration::Function(func) => Some(func),
            Declaration::Type(_) => None,
        })
    }

    /// Names of every type declared anywhere in this file
    pub fn local_type_names(&self) -> HashSet<&str> {
        self.types().map(|ty| ty.name.as_str()).collect()
    }

    /// Struct fields referring by simple name to a type declared in this file
    pub fn struct_relations(&self) -> Vec<StructRelation> {
        let local = self.local_type_names();
        self.types().flat_map(|ty| ty.relations(&local)).collect()
    }
}

impl TypeDecl {
    /// Fields of this struct whose type is one of `local`
    pub fn relations(&self, local: &HashSet<&str>) -> Vec<StructRelation> {
        let Some(fields) = &self.fields else {
            return Vec::new();
        };
        fields
            .iter()
            .filter_map(|field| field.simple_type.as_ref())
            .filter(|field_type| local.contains(field_type.as_str()))
            .map(|field_type| StructRelation {
                owner: self.name.clone(),
                field_type: field_type.clone(),
            })
            .collect()
    }
}

/// Walks a [`SourceUnit`]'s tree collecting declarations
pub struct DeclarationScanner<'u> {
    unit: &'u SourceUnit,
}

impl<'u> DeclarationScanner<'u> {
    pub fn new(unit: &'u SourceUnit) -> Self {
        Self { unit }
    }

    pub fn scan(&self) -> ScanResult<'u> {
        let mut result = ScanResult {
            unit: self.unit,
            declarations: Vec::new(),
        };
        self.visit(self.unit.tree().root_node(), &mut result.declarations);
        result
    }

    fn visit(&self, node: Node<'u>, out: &mut Vec<Declaration<'u>>) {
        match node.kind() {
            "type_spec" | "type_alias" => {
                if let Some(decl) = self.type_decl(node) {
                    out.push(Declaration::Type(decl));
                }
            }
            "function_declaration" | "method_declaration" => {
                if let Some(decl) = self.function_decl(node) {
                    out.push(Declaration::Function(decl));
                }
            }
            _ => {}
        }

        // Nested declarations (types inside function bodies) are visited too
        let mut cursor = node.walk();
        for child in node.named_children(&mut cursor) {
            self.visit(child, out);
        }
    }

    fn type_decl(&self, node: Node<'u>) -> Option<TypeDecl> {
        let name_node = node.child_by_field_name("name")?;
        let name = self.unit.node_text(&name_node).to_string();

        let fields = node
            .child_by_field_name("type")
            .filter(|ty| node.kind() == "type_spec" && ty.kind() == "struct_type")
            .map(|ty| self.struct_fields(ty));

        Some(TypeDecl { name, fields })
    }

    fn struct_fields(&self, struct_node: Node<'u>) -> Vec<FieldDecl> {
        let mut fields = Vec::new();
        let mut cursor = struct_node.walk();
        for list in struct_node.named_children(&mut cursor) {
            if list.kind() != "field_declaration_list" {
                continue;
            }
            let mut list_cursor = list.walk();
            for field in list.named_children(&mut list_cursor) {
                if field.kind() == "field_declaration" {
                    fields.push(self.field_decl(field));
                }
            }
        }
        fields
    }

    fn field_decl(&self, field: Node<'u>) -> FieldDecl {
        let mut cursor = field.walk();
        let names = field
            .children_by_field_name("name", &mut cursor)
            .map(|n| self.unit.node_text(&n).to_string())
            .collect();

        // Composite, pointer, qualified and generic field types are not
        // same-file relations
        let embedded_pointer = {
            let mut cursor = field.walk();
            field.children(&mut cursor).any(|child| child.kind() == "*")
        };
        let simple_type = field
            .child_by_field_name("type")
            .filter(|ty| !embedded_pointer && ty.kind() == "type_identifier")
            .map(|ty| self.unit.node_text(&ty).to_string());

        FieldDecl { names, simple_type }
    }

    fn function_decl(&self, node: Node<'u>) -> Option<FunctionDecl<'u>> {
        let name_node = node.child_by_field_name("name")?;

        // `func () F()` has a receiver list with nothing in it
        let receiver = node.child_by_field_name("receiver").filter(|list| {
            let mut cursor = list.walk();
            list.named_children(&mut cursor).any(|child| {
                matches!(
                    child.kind(),
                    "parameter_declaration" | "variadic_parameter_declaration"
                )
            })
        });

        Some(FunctionDecl {
            unit: self.unit,
            name: self.unit.node_text(&name_node).to_string(),
            receiver,
            parameters: node.child_by_field_name("parameters"),
            result: node.child_by_field_name("result"),
        })
    }
}
