use ifacegen::config::LocatorConfig;
use ifacegen::{GenError, Generator, PackageLocator, Settings};
use std::fs;
use std::path::{Path, PathBuf};
use tempfile::TempDir;

fn fixtures_dir() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/go")
}

fn generator_in(dir: &Path) -> Generator {
    let settings = Settings::default();
    let locator = PackageLocator::new(dir, &LocatorConfig::default());
    Generator::with_locator(settings, locator)
}

fn write_package(files: &[(&str, &str)]) -> TempDir {
    let temp_dir = TempDir::new().unwrap();
    let package = temp_dir.path().join("pkg");
    fs::create_dir_all(&package).unwrap();
    for (name, code) in files {
        fs::write(package.join(name), code).unwrap();
    }
    temp_dir
}

#[test]
fn test_fixture_package_interface() {
    let report = generator_in(&fixtures_dir()).run("alpha", "B").unwrap();

    assert_eq!(
        report.methods.lines(),
        vec![
            "Count () int",
            "Sum (a, c int) (int, error)",
            "Printf (format string, args ...interface{})",
            "Reset ()",
            "Join (parts []string /* pieces */, sep string) string",
        ]
    );
    assert_eq!(
        report.interface.text,
        "type B interface {\n\
         \tCount () int\n\
         \tSum (a, c int) (int, error)\n\
         \tPrintf (format string, args ...interface{})\n\
         \tReset ()\n\
         \tJoin (parts []string /* pieces */, sep string) string\n\
         }"
    );
    assert!(report.skipped.is_empty());
}

#[test]
fn test_fixture_package_diagnostics() {
    let report = generator_in(&fixtures_dir()).run("alpha", "B").unwrap();
    let lines: Vec<_> = report.diagnostics.iter().map(ToString::to_string).collect();

    assert_eq!(
        lines,
        vec![
            "Package: errors",
            "Package: fmt",
            "Type: A",
            "Struct Found: B (field of A)",
            "Type: B",
            "Package: strings",
        ]
    );
}

#[test]
fn test_other_type_in_same_package() {
    let report = generator_in(&fixtures_dir()).run("alpha", "A").unwrap();
    assert_eq!(report.methods.lines(), vec!["Hello () string"]);
}

#[test]
fn test_repeated_runs_are_identical() {
    let generator = generator_in(&fixtures_dir());
    let first = generator.run("alpha", "B").unwrap();
    let second = generator.run("alpha", "B").unwrap();

    assert_eq!(first.methods, second.methods);
    assert_eq!(first.interface, second.interface);
    assert_eq!(first.files, second.files);
}

#[test]
fn test_package_with_only_free_functions() {
    let temp_dir = write_package(&[(
        "free.go",
        "package pkg\n\nfunc One() {}\n\nfunc Two(a int) (int, error) { return a, nil }\n",
    )]);

    let report = generator_in(temp_dir.path()).run("pkg", "B").unwrap();
    assert!(report.methods.is_empty());
    assert_eq!(report.interface.text, "type B interface {\n}");
}

#[test]
fn test_unresolvable_receiver_does_not_abort() {
    let temp_dir = write_package(&[(
        "mixed.go",
        "package pkg\n\n\
         func (b *B) Keep() {}\n\n\
         func (b **B) Drop() {}\n\n\
         func (l *List[T]) Generic() {}\n\n\
         func (b B) AlsoKeep(x int) bool { return x > 0 }\n",
    )]);

    let report = generator_in(temp_dir.path()).run("pkg", "B").unwrap();
    assert_eq!(report.methods.lines(), vec!["Keep ()", "AlsoKeep (x int) bool"]);
    assert_eq!(report.skipped.len(), 2);
    assert!(report.skipped.iter().all(|e| !e.is_fatal()));
}

#[test]
fn test_one_broken_file_aborts_the_run() {
    let temp_dir = write_package(&[
        ("good.go", "package pkg\n\nfunc (b B) Fine() {}\n"),
        ("bad.go", "package pkg\n\nfunc (b B) Broken( {\n"),
    ]);

    let err = generator_in(temp_dir.path()).run("pkg", "B").unwrap_err();
    assert!(err.is_fatal());
    assert!(matches!(err, GenError::SourceParse { ref path, .. } if path.ends_with("bad.go")));
}

#[test]
fn test_malformed_import_aborts_the_run() {
    let temp_dir = write_package(&[(
        "imports.go",
        "package pkg\n\nimport \"not valid\"\n\nfunc (b B) Fine() {}\n",
    )]);

    let err = generator_in(temp_dir.path()).run("pkg", "B").unwrap_err();
    assert!(matches!(err, GenError::SemanticResolution { .. }));
}

#[test]
fn test_disabled_checker_ignores_imports() {
    let temp_dir = write_package(&[(
        "imports.go",
        "package pkg\n\nimport \"not valid\"\n\nfunc (b B) Fine() {}\n",
    )]);
    let mut settings = Settings::default();
    settings.checker.enabled = false;
    let locator = PackageLocator::new(temp_dir.path(), &settings.locator);

    let report = Generator::with_locator(settings, locator)
        .run("pkg", "B")
        .unwrap();
    assert_eq!(report.methods.lines(), vec!["Fine ()"]);
}

#[test]
fn test_non_go_files_are_skipped() {
    let temp_dir = write_package(&[
        ("a.go", "package pkg\n\nfunc (b B) Fine() {}\n"),
        ("README.md", "func (b B) NotCode() {}\n"),
    ]);

    let report = generator_in(temp_dir.path()).run("pkg", "B").unwrap();
    assert_eq!(report.files.len(), 1);
    assert_eq!(report.methods.len(), 1);
}
