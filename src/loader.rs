//! Source discovery and parsing.
//!
//! Every file below the package directory with the configured extension is
//! read and parsed. The first read or parse failure aborts loading.

use crate::config::LoaderConfig;
use crate::error::{GenError, GenResult};
use crate::parsing::go::GoParser;
use std::path::{Path, PathBuf};
use tree_sitter::{Node, Tree};
use walkdir::WalkDir;

/// Byte span into a [`SourceUnit`]'s text
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Span {
    pub start: usize,
    pub end: usize,
}

impl Span {
    pub fn of(node: &Node) -> Self {
        Self {
            start: node.start_byte(),
            end: node.end_byte(),
        }
    }
}

/// One parsed file: the syntax tree plus the exact text it was built from
pub struct SourceUnit {
    path: PathBuf,
    text: String,
    tree: Tree,
}

impl SourceUnit {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn text(&self) -> &str {
        &self.text
    }

    pub fn tree(&self) -> &Tree {
        &self.tree
    }

    /// Original text covered by `node`
    pub fn node_text(&self, node: &Node) -> &str {
        self.slice(Span::of(node))
    }

    /// Original text covered by `span`, or "" if it falls outside this file
    pub fn slice(&self, span: Span) -> &str {
        self.text.get(span.start..span.end).unwrap_or("")
    }
}

impl std::fmt::Debug for SourceUnit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("SourceUnit")
            .field("path", &self.path)
            .field("bytes", &self.text.len())
            .finish()
    }
}

/// Walks a package directory and turns each Go file into a [`SourceUnit`]
pub struct SourceLoader {
    parser: GoParser,
    config: LoaderConfig,
}

impl SourceLoader {
    pub fn new(config: LoaderConfig) -> GenResult<Self> {
        Ok(Self {
            parser: GoParser::new()?,
            config,
        })
    }

    /// Paths that would be loaded from `root`, in visit order
    pub fn discover(&self, root: &Path) -> GenResult<Vec<PathBuf>> {
        let mut walker = WalkDir::new(root).follow_links(self.config.follow_links);
        if self.config.sort_entries {
            walker = walker.sort_by_file_name();
        }

        let mut paths = Vec::new();
        for entry in walker {
            let entry = entry.map_err(|e| GenError::Walk {
                path: e.path().unwrap_or(root).to_path_buf(),
                reason: e.to_string(),
            })?;
            if entry.file_type().is_dir() {
                continue;
            }
            if self.accepts(entry.path()) {
                paths.push(entry.into_path());
            }
        }
        Ok(paths)
    }

    fn accepts(&self, path: &Path) -> bool {
        let has_extension = path
            .extension()
            .and_then(|ext| ext.to_str())
            .is_some_and(|ext| ext == self.config.extension);
        if !has_extension {
            return false;
        }
        if self.config.include_tests {
            return true;
        }
        let test_suffix = format!("_test.{}", self.config.extension);
        !path
            .file_name()
            .and_then(|name| name.to_str())
            .is_some_and(|name| name.ends_with(&test_suffix))
    }

    /// Read and parse a single file
    pub fn load_file(&mut self, path: &Path) -> GenResult<SourceUnit> {
        let text = std::fs::read_to_string(path).map_err(|source| GenError::SourceRead {
            path: path.to_path_buf(),
            source,
        })?;
        let tree = self.parser.parse(path, &text)?;
        tracing::debug!("loaded {} ({} bytes)", path.display(), text.len());

        Ok(SourceUnit {
            path: path.to_path_buf(),
            text,
            tree,
        })
    }

    /// Load every matching file under `root`
    pub fn load_package(&mut self, root: &Path) -> GenResult<Vec<SourceUnit>> {
        let paths = self.discover(root)?;
        let mut units = Vec::with_capacity(paths.len());
        for path in paths {
            units.push(self.load_file(&path)?);
        }
        Ok(units)
    }

    /// Parse in-memory source as if it were read from `path`
    pub fn load_str(
        &mut self,
        path: impl Into<PathBuf>,
        text: impl Into<String>,
    ) -> GenResult<SourceUnit> {
        let path = path.into();
        let text = text.into();
        let tree = self.parser.parse(&path, &text)?;
        Ok(SourceUnit { path, text, tree })
    }
}
