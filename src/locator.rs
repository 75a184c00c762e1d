//! Package lookup on disk.
//!
//! A package identifier is tried, in order, against the working directory,
//! the workspace root and the system root. The first candidate that exists
//! wins; nothing checks that it actually contains Go files.

use crate::config::LocatorConfig;
use crate::error::{GenError, GenResult};
use std::path::{Path, PathBuf};

/// Directory believed to hold the target package
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PackageLocation {
    path: PathBuf,
    origin: LocationOrigin,
}

/// Which lookup layer produced a [`PackageLocation`]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LocationOrigin {
    WorkingDirectory,
    Workspace,
    System,
}

impl PackageLocation {
    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn origin(&self) -> LocationOrigin {
        self.origin
    }
}

/// Resolves package identifiers to directories
#[derive(Debug, Clone)]
pub struct PackageLocator {
    working_dir: PathBuf,
    workspace_root: Option<PathBuf>,
    system_root: Option<PathBuf>,
    source_subdir: String,
}

impl PackageLocator {
    pub fn new(working_dir: impl Into<PathBuf>, config: &LocatorConfig) -> Self {
        Self {
            working_dir: working_dir.into(),
            workspace_root: config.workspace_root.clone(),
            system_root: config.system_root.clone(),
            source_subdir: config.source_subdir.clone(),
        }
    }

    /// Build a locator rooted at the process working directory
    pub fn from_current_dir(config: &LocatorConfig) -> GenResult<Self> {
        let cwd = std::env::current_dir().map_err(|e| GenError::Config {
            reason: format!("cannot determine working directory: {e}"),
        })?;
        Ok(Self::new(cwd, config))
    }

    /// Candidate directories in lookup order. Unset roots contribute nothing.
    pub fn candidates(&self, package: &str) -> Vec<(LocationOrigin, PathBuf)> {
        let mut candidates = vec![(LocationOrigin::WorkingDirectory, self.working_dir.join(package))];
        if let Some(root) = &self.workspace_root {
            candidates.push((
                LocationOrigin::Workspace,
                root.join(&self.source_subdir).join(package),
            ));
        }
        if let Some(root) = &self.system_root {
            candidates.push((
                LocationOrigin::System,
                root.join(&self.source_subdir).join(package),
            ));
        }
        candidates
    }

    /// Resolve `package` to the first existing candidate directory.
    pub fn locate(&self, package: &str) -> GenResult<PackageLocation> {
        let candidates = self.candidates(package);
        for (origin, path) in &candidates {
            if path.exists() {
                tracing::debug!("package '{package}' found at {}", path.display());
                return Ok(PackageLocation {
                    path: path.clone(),
                    origin: *origin,
                });
            }
        }

        Err(GenError::PackageNotFound {
            package: package.to_string(),
            candidates: candidates.into_iter().map(|(_, path)| path).collect(),
        })
    }

    /// Whether `package` exists under the workspace or system root.
    ///
    /// Used for import paths, which never resolve against the working directory.
    pub fn exists_under_roots(&self, package: &str) -> bool {
        self.candidates(package)
            .into_iter()
            .filter(|(origin, _)| *origin != LocationOrigin::WorkingDirectory)
            .any(|(_, path)| path.exists())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs;
    use tempfile::TempDir;

    fn config(workspace: Option<&Path>, system: Option<&Path>) -> LocatorConfig {
        LocatorConfig {
            workspace_root: workspace.map(Path::to_path_buf),
            system_root: system.map(Path::to_path_buf),
            ..LocatorConfig::default()
        }
    }

    #[test]
    fn test_working_directory_wins() {
        let cwd = TempDir::new().unwrap();
        let gopath = TempDir::new().unwrap();
        fs::create_dir_all(cwd.path().join("pkg/alpha")).unwrap();
        fs::create_dir_all(gopath.path().join("src/pkg/alpha")).unwrap();

        let locator = PackageLocator::new(cwd.path(), &config(Some(gopath.path()), None));
        let location = locator.locate("pkg/alpha").unwrap();

        assert_eq!(location.origin(), LocationOrigin::WorkingDirectory);
        assert_eq!(location.path(), cwd.path().join("pkg/alpha"));
    }

    #[test]
    fn test_workspace_before_system() {
        let cwd = TempDir::new().unwrap();
        let gopath = TempDir::new().unwrap();
        let goroot = TempDir::new().unwrap();
        fs::create_dir_all(gopath.path().join("src/net/thing")).unwrap();
        fs::create_dir_all(goroot.path().join("src/net/thing")).unwrap();

        let locator = PackageLocator::new(
            cwd.path(),
            &config(Some(gopath.path()), Some(goroot.path())),
        );
        let location = locator.locate("net/thing").unwrap();

        assert_eq!(location.origin(), LocationOrigin::Workspace);
        assert_eq!(location.path(), gopath.path().join("src/net/thing"));
    }

    #[test]
    fn test_system_root_fallback() {
        let cwd = TempDir::new().unwrap();
        let goroot = TempDir::new().unwrap();
        fs::create_dir_all(goroot.path().join("src/strings")).unwrap();

        let locator = PackageLocator::new(cwd.path(), &config(None, Some(goroot.path())));
        let location = locator.locate("strings").unwrap();

        assert_eq!(location.origin(), LocationOrigin::System);
    }

    #[test]
    fn test_missing_package() {
        let cwd = TempDir::new().unwrap();
        let locator = PackageLocator::new(cwd.path(), &config(None, None));

        let err = locator.locate("does/not/exist").unwrap_err();
        match err {
            GenError::PackageNotFound { candidates, .. } => assert_eq!(candidates.len(), 1),
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_existence_is_the_only_check() {
        let cwd = TempDir::new().unwrap();
        fs::create_dir_all(cwd.path().join("empty")).unwrap();

        let locator = PackageLocator::new(cwd.path(), &config(None, None));
        assert!(locator.locate("empty").is_ok());
    }
}
