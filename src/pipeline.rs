//! End-to-end generation run.
//!
//! locate package -> load files -> per file: check imports, scan
//! declarations, extract matching methods -> render. Files are handled one at
//! a time in load order, which fixes the order of both diagnostics and methods.

use crate::config::Settings;
use crate::error::{GenError, GenResult};
use crate::extract::{MethodSet, SignatureExtractor};
use crate::loader::{SourceLoader, SourceUnit};
use crate::locator::{PackageLocation, PackageLocator};
use crate::parsing::go::{DeclarationScanner, ImportChecker};
use crate::render::{GeneratedInterface, InterfaceRenderer};
use std::fmt;
use std::path::PathBuf;

/// Informational line reported alongside the interface
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Diagnostic {
    /// A package imported by a file
    Import { file: PathBuf, name: String },
    /// A type declaration
    Type { name: String },
    /// A struct field naming another type from the same file
    Relation { owner: String, field_type: String },
}

impl fmt::Display for Diagnostic {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Diagnostic::Import { name, .. } => write!(f, "Package: {name}"),
            Diagnostic::Type { name } => write!(f, "Type: {name}"),
            Diagnostic::Relation { owner, field_type } => {
                write!(f, "Struct Found: {field_type} (field of {owner})")
            }
        }
    }
}

/// Everything a run produced
#[derive(Debug)]
pub struct Report {
    pub location: Option<PackageLocation>,
    pub files: Vec<PathBuf>,
    pub diagnostics: Vec<Diagnostic>,
    pub methods: MethodSet,
    /// Methods dropped because their receiver could not be resolved
    pub skipped: Vec<GenError>,
    pub interface: GeneratedInterface,
}

/// Runs the pipeline with one set of [`Settings`]
pub struct Generator {
    settings: Settings,
    locator: PackageLocator,
}

impl Generator {
    /// Generator whose package lookup starts at the process working directory
    pub fn new(settings: Settings) -> GenResult<Self> {
        let locator = PackageLocator::from_current_dir(&settings.locator)?;
        Ok(Self { settings, locator })
    }

    /// Generator with an explicit package locator
    pub fn with_locator(settings: Settings, locator: PackageLocator) -> Self {
        Self { settings, locator }
    }

    pub fn settings(&self) -> &Settings {
        &self.settings
    }

    /// Locate `package`, load it and build the interface of `type_name`
    pub fn run(&self, package: &str, type_name: &str) -> GenResult<Report> {
        let location = self.locator.locate(package)?;
        tracing::info!(
            "generating interface for {type_name} from {}",
            location.path().display()
        );

        let mut loader = SourceLoader::new(self.settings.loader.clone())?;
        let units = loader.load_package(location.path())?;

        let mut report = self.generate(&units, type_name)?;
        report.location = Some(location);
        Ok(report)
    }

    /// Build the interface of `type_name` from already loaded files
    pub fn generate(&self, units: &[SourceUnit], type_name: &str) -> GenResult<Report> {
        let checker = if self.settings.checker.require_resolvable_imports {
            ImportChecker::with_locator(&self.locator)
        } else {
            ImportChecker::new()
        };
        let extractor = SignatureExtractor::new(type_name);
        let show = &self.settings.diagnostics;

        let mut diagnostics = Vec::new();
        let mut methods = MethodSet::new();
        let mut skipped = Vec::new();

        for unit in units {
            if self.settings.checker.enabled {
                let imports = checker.check(unit)?;
                if show.imports {
                    diagnostics.extend(imports.iter().map(|import| Diagnostic::Import {
                        file: unit.path().to_path_buf(),
                        name: import.package_name().to_string(),
                    }));
                }
            }

            let scan = DeclarationScanner::new(unit).scan();
            let local = scan.local_type_names();
            for ty in scan.types() {
                if show.types {
                    diagnostics.push(Diagnostic::Type {
                        name: ty.name.clone(),
                    });
                }
                if show.relations {
                    diagnostics.extend(ty.relations(&local).into_iter().map(|relation| {
                        Diagnostic::Relation {
                            owner: relation.owner,
                            field_type: relation.field_type,
                        }
                    }));
                }
            }

            let extraction = extractor.extract(&scan)?;
            tracing::debug!(
                "{}: {} method(s) on {type_name}",
                unit.path().display(),
                extraction.methods.len()
            );
            methods.extend(extraction.methods);
            skipped.extend(extraction.skipped);
        }

        let interface = InterfaceRenderer::new(&self.settings.render).render(type_name, &methods);
        tracing::info!(
            "{} method(s) collected from {} file(s), {} skipped",
            methods.len(),
            units.len(),
            skipped.len()
        );

        Ok(Report {
            location: None,
            files: units.iter().map(|unit| unit.path().to_path_buf()).collect(),
            diagnostics,
            methods,
            skipped,
            interface,
        })
    }
}
