//! End-to-end build tests.
//!
//! These run the standard plan against a temporary tree and check what lands
//! on disk.

use std::collections::BTreeSet;
use std::fs;
use std::path::{Path, PathBuf};

use logo_forge::{
    BatchDriver, BuildConfig, BuildPlan, Consumer, SHOWCASE_FILE_NAME, build,
};

fn config_in(root: &Path) -> BuildConfig {
    BuildConfig {
        dist_dir: root.join("dist"),
        app_dir: root.join("app"),
        ..BuildConfig::default()
    }
}

fn create_app_dirs(config: &BuildConfig) {
    let plan = BuildPlan::standard(config);
    for target in plan.targets.iter().filter(|t| t.optional) {
        fs::create_dir_all(&target.root).unwrap();
    }
}

fn files_under(dir: &Path) -> BTreeSet<PathBuf> {
    let mut files = BTreeSet::new();
    let mut pending = vec![dir.to_path_buf()];
    while let Some(current) = pending.pop() {
        for entry in fs::read_dir(&current).unwrap() {
            let path = entry.unwrap().path();
            if path.is_dir() {
                pending.push(path);
            } else {
                files.insert(path);
            }
        }
    }
    files
}

#[test]
fn full_build_writes_exactly_the_declared_paths() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    create_app_dirs(&config);

    let report = build(&config).unwrap();
    assert!(report.is_success());
    assert!(report.skipped.is_empty());

    let mut expected: BTreeSet<PathBuf> =
        BuildPlan::standard(&config).destinations().into_iter().collect();
    expected.insert(config.dist_dir.join(SHOWCASE_FILE_NAME));

    assert_eq!(files_under(dir.path()), expected);
}

#[test]
fn rasters_match_their_declared_dimensions() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    let plan = BuildPlan::standard(&config);

    BatchDriver::new(&config.geometry, &plan).run_all();

    for target in plan.targets.iter().filter(|t| !t.optional) {
        for spec in &target.rasters {
            let path = target.path_of(&spec.destination);
            let img = image::open(&path).unwrap();
            let size = spec.output_size();
            assert_eq!(
                (img.width(), img.height()),
                (size.width, size.height),
                "{}",
                path.display()
            );
        }
    }
}

#[test]
fn absent_app_dir_skips_only_that_consumer() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    create_app_dirs(&config);
    fs::remove_dir_all(config.app_dir.join("assets")).unwrap();

    let report = build(&config).unwrap();

    assert!(report.is_success());
    assert_eq!(report.skipped, vec![Consumer::AppAssets]);
    assert!(!config.app_dir.join("assets").exists());
    assert!(config.app_dir.join("hanzo-logo.png").is_file());
    assert!(
        config
            .app_dir
            .join("apps/hanzo-desktop/public/favicon.png")
            .is_file()
    );
}

#[test]
fn without_app_dirs_only_dist_is_written() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let report = build(&config).unwrap();

    assert!(report.is_success());
    assert_eq!(
        report.skipped,
        vec![
            Consumer::DesktopIcons,
            Consumer::DesktopPublic,
            Consumer::AppAssets,
            Consumer::AppRoot
        ]
    );
    assert!(!config.app_dir.exists());
    assert!(files_under(dir.path()).iter().all(|p| p.starts_with(&config.dist_dir)));
}

#[test]
fn blocked_directory_is_reported_and_build_continues() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());
    fs::create_dir_all(&config.dist_dir).unwrap();
    fs::write(config.dist_dir.join("apple"), b"not a directory").unwrap();

    let report = build(&config).unwrap();

    assert!(!report.is_success());
    let failed: Vec<_> = report.failed().collect();
    assert_eq!(failed.len(), 10);
    assert!(failed.iter().all(|i| i.consumer == Some(Consumer::Apple)));

    // consumers after the failing one still ran
    assert!(config.dist_dir.join("og/og-image.png").is_file());
    assert!(config.dist_dir.join("menubar/iconTemplate@3x.png").is_file());
    assert!(config.dist_dir.join(SHOWCASE_FILE_NAME).is_file());
}

#[test]
fn report_serializes_to_json() {
    let dir = tempfile::tempdir().unwrap();
    let config = config_in(dir.path());

    let report = build(&config).unwrap();
    let json = report.to_json_pretty().unwrap();
    let value: serde_json::Value = serde_json::from_str(&json).unwrap();

    let items = value["items"].as_array().unwrap();
    assert_eq!(items.len(), report.items.len());
    assert_eq!(items[0]["kind"], "source");
    assert_eq!(items[0]["status"], "written");
}
