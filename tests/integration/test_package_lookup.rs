use ifacegen::config::LocatorConfig;
use ifacegen::{GenError, Generator, LocationOrigin, PackageLocator, Settings};
use std::fs;
use std::path::Path;
use tempfile::TempDir;

fn write_method(dir: &Path, method: &str) {
    fs::create_dir_all(dir).unwrap();
    fs::write(
        dir.join("b.go"),
        format!("package shared\n\nfunc (b B) {method}() {{}}\n"),
    )
    .unwrap();
}

#[test]
fn test_working_directory_shadows_workspace() {
    let cwd = TempDir::new().unwrap();
    let gopath = TempDir::new().unwrap();
    write_method(&cwd.path().join("shared"), "Local");
    write_method(&gopath.path().join("src/shared"), "Workspace");

    let config = LocatorConfig {
        workspace_root: Some(gopath.path().to_path_buf()),
        ..LocatorConfig::default()
    };
    let locator = PackageLocator::new(cwd.path(), &config);
    let report = Generator::with_locator(Settings::default(), locator)
        .run("shared", "B")
        .unwrap();

    assert_eq!(
        report.location.as_ref().map(|l| l.origin()),
        Some(LocationOrigin::WorkingDirectory)
    );
    assert_eq!(report.methods.lines(), vec!["Local ()"]);
}

#[test]
fn test_falls_back_to_system_root() {
    let cwd = TempDir::new().unwrap();
    let goroot = TempDir::new().unwrap();
    write_method(&goroot.path().join("src/shared"), "System");

    let config = LocatorConfig {
        system_root: Some(goroot.path().to_path_buf()),
        ..LocatorConfig::default()
    };
    let locator = PackageLocator::new(cwd.path(), &config);
    let report = Generator::with_locator(Settings::default(), locator)
        .run("shared", "B")
        .unwrap();

    assert_eq!(report.methods.lines(), vec!["System ()"]);
}

#[test]
fn test_unknown_package_is_fatal() {
    let cwd = TempDir::new().unwrap();
    let locator = PackageLocator::new(cwd.path(), &LocatorConfig::default());

    let err = Generator::with_locator(Settings::default(), locator)
        .run("missing/pkg", "B")
        .unwrap_err();
    assert!(matches!(err, GenError::PackageNotFound { .. }));
}
