//! Per-file import checking.
//!
//! Each file is checked on its own: its import declarations are collected,
//! each path is validated, and the imported package name is derived from the
//! path. Optionally every import must be locatable under a source root.

use crate::error::{GenError, GenResult};
use crate::loader::SourceUnit;
use crate::locator::PackageLocator;
use tree_sitter::Node;

/// One entry of an import declaration
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImportRef {
    /// Import path without quotes
    pub path: String,
    /// Local name given in source (`f "fmt"`, `.`, `_`)
    pub alias: Option<String>,
}

impl ImportRef {
    /// Name the imported package declares for itself, guessed from its path.
    ///
    /// `net/http` -> `http`, `github.com/x/y/v2` -> `y`, `gopkg.in/yaml.v3` -> `yaml`
    pub fn package_name(&self) -> &str {
        let mut elements = self.path.rsplit('/');
        let last = elements.next().unwrap_or(self.path.as_str());

        if is_major_version(last) {
            if let Some(previous) = elements.next() {
                return previous;
            }
        }
        if let Some((base, version)) = last.rsplit_once('.') {
            if is_major_version(version) && !base.is_empty() {
                return base;
            }
        }
        last
    }
}

fn is_major_version(element: &str) -> bool {
    element
        .strip_prefix('v')
        .is_some_and(|digits| !digits.is_empty() && digits.bytes().all(|b| b.is_ascii_digit()))
}

/// Per-file import checker
pub struct ImportChecker<'l> {
    locator: Option<&'l PackageLocator>,
}

impl<'l> ImportChecker<'l> {
    /// Checker that only validates import syntax
    pub fn new() -> Self {
        Self { locator: None }
    }

    /// Checker that also requires each import to exist under a source root
    pub fn with_locator(locator: &'l PackageLocator) -> Self {
        Self {
            locator: Some(locator),
        }
    }

    /// Collect and check the imports of one file
    pub fn check(&self, unit: &SourceUnit) -> GenResult<Vec<ImportRef>> {
        let imports = collect_imports(unit);
        for import in &imports {
            self.check_import(unit, import)?;
        }
        Ok(imports)
    }

    fn check_import(&self, unit: &SourceUnit, import: &ImportRef) -> GenResult<()> {
        let fail = |reason: String| GenError::SemanticResolution {
            path: unit.path().to_path_buf(),
            import: import.path.clone(),
            reason,
        };

        if import.path.is_empty() {
            return Err(fail("empty import path".to_string()));
        }
        if let Some(bad) = import.path.chars().find(|c| is_forbidden(*c)) {
            return Err(fail(format!("invalid character {bad:?} in import path")));
        }

        // cgo pseudo package
        if import.path == "C" {
            return Ok(());
        }

        if let Some(locator) = self.locator {
            if !locator.exists_under_roots(&import.path) {
                return Err(fail("package not found under any source root".to_string()));
            }
        }
        Ok(())
    }
}

impl Default for ImportChecker<'_> {
    fn default() -> Self {
        Self::new()
    }
}

/// Characters Go rejects in import paths
fn is_forbidden(c: char) -> bool {
    c.is_whitespace()
        || c.is_control()
        || c == '\u{FFFD}'
        || "!\"#$%&'()*,:;<=>?[\\]^`{|}".contains(c)
}

fn collect_imports(unit: &SourceUnit) -> Vec<ImportRef> {
    let root = unit.tree().root_node();
    let mut imports = Vec::new();

    let mut cursor = root.walk();
    for declaration in root.named_children(&mut cursor) {
        if declaration.kind() != "import_declaration" {
            continue;
        }
        // import_declaration holds either one import_spec or an import_spec_list
        let mut decl_cursor = declaration.walk();
        for child in declaration.named_children(&mut decl_cursor) {
            match child.kind() {
                "import_spec" => imports.extend(import_spec(unit, child)),
                "import_spec_list" => {
                    let mut list_cursor = child.walk();
                    for spec in child.named_children(&mut list_cursor) {
                        if spec.kind() == "import_spec" {
                            imports.extend(import_spec(unit, spec));
                        }
                    }
                }
                _ => {}
            }
        }
    }
    imports
}

fn import_spec(unit: &SourceUnit, spec: Node) -> Option<ImportRef> {
    let path_node = spec.child_by_field_name("path")?;
    let path = unit
        .node_text(&path_node)
        .trim_matches(|c| c == '"' || c == '`')
        .to_string();
    let alias = spec
        .child_by_field_name("name")
        .map(|name| unit.node_text(&name).to_string());

    Some(ImportRef { path, alias })
}
