//! Sequential batch execution of a [`BuildPlan`].
//!
//! The driver walks the plan in order and writes one artifact at a time.
//! A failing artifact is logged and recorded in the [`BuildReport`]; the
//! rest of the batch still runs. Callers decide what a failed report means
//! (the binary turns it into a non-zero exit status).

use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::compositor::{RasterArtifact, composite, write_artifact};
use crate::config::BuildConfig;
use crate::error::{BuildError, PlanError};
use crate::geometry::GeometryConfig;
use crate::icon::SizePx;
use crate::plan::{BuildPlan, Consumer, ConsumerTarget, OutputSpec, SourceSpec};
use crate::showcase::emit_showcase;
use crate::template::{LogoVariant, MarkupSet};

// ============================================================================
// Report
// ============================================================================

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum ArtifactKind {
    Source,
    Raster,
    Showcase,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", tag = "status")]
pub enum ItemStatus {
    Written,
    Failed { message: String },
}

/// What happened to one artifact.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ItemOutcome {
    pub consumer: Option<Consumer>,
    pub path: PathBuf,
    pub kind: ArtifactKind,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub variant: Option<LogoVariant>,
    pub width: u32,
    pub height: u32,
    #[serde(flatten)]
    pub status: ItemStatus,
}

impl ItemOutcome {
    pub fn is_written(&self) -> bool {
        self.status == ItemStatus::Written
    }
}

/// Per-item results of one batch run.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct BuildReport {
    pub items: Vec<ItemOutcome>,
    /// Optional consumers whose directories were absent.
    pub skipped: Vec<Consumer>,
}

impl BuildReport {
    pub fn written(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.items.iter().filter(|i| i.is_written())
    }

    pub fn failed(&self) -> impl Iterator<Item = &ItemOutcome> {
        self.items.iter().filter(|i| !i.is_written())
    }

    /// True when every attempted artifact was written.
    pub fn is_success(&self) -> bool {
        self.failed().next().is_none()
    }

    /// Paths of every written artifact, in write order.
    pub fn written_paths(&self) -> Vec<&Path> {
        self.written().map(|i| i.path.as_path()).collect()
    }

    pub fn to_json_pretty(&self) -> Result<String, serde_json::Error> {
        serde_json::to_string_pretty(self)
    }

    fn record(&mut self, outcome: ItemOutcome) {
        match &outcome.status {
            ItemStatus::Written if outcome.kind == ArtifactKind::Showcase => {
                log::info!("✓ {}", outcome.path.display())
            }
            ItemStatus::Written => log::info!(
                "✓ {} ({}×{})",
                outcome.path.display(),
                outcome.width,
                outcome.height
            ),
            ItemStatus::Failed { message } => {
                log::error!("✗ {}: {}", outcome.path.display(), message)
            }
        }
        self.items.push(outcome);
    }
}

// ============================================================================
// BatchDriver
// ============================================================================

/// Runs every artifact of a plan against one geometry.
pub struct BatchDriver<'a> {
    geometry: &'a GeometryConfig,
    plan: &'a BuildPlan,
}

impl<'a> BatchDriver<'a> {
    pub fn new(geometry: &'a GeometryConfig, plan: &'a BuildPlan) -> Self {
        Self { geometry, plan }
    }

    /// Writes every artifact of every available target, in plan order.
    pub fn run_all(&self) -> BuildReport {
        log::debug!("Preparing markup for {} variants", LogoVariant::ALL.len());
        let markup = MarkupSet::new(self.geometry);
        let mut report = BuildReport::default();

        for target in &self.plan.targets {
            if !target.is_available() {
                log::debug!(
                    "Skipping {}: {} does not exist",
                    target.consumer.title(),
                    target.root.display()
                );
                report.skipped.push(target.consumer);
                continue;
            }

            log::info!("{} ({})", target.consumer.title(), target.root.display());
            self.run_target(target, &markup, &mut report);
        }

        let failed = report.failed().count();
        if failed == 0 {
            log::info!("Build complete: {} artifacts written", report.items.len());
        } else {
            log::warn!(
                "Build finished with {} of {} artifacts failed",
                failed,
                report.items.len()
            );
        }
        report
    }

    fn run_target(&self, target: &ConsumerTarget, markup: &MarkupSet, report: &mut BuildReport) {
        let source_size = SizePx::square(self.geometry.view_box.round() as u32);

        for source in &target.sources {
            let path = target.path_of(&source.destination);
            let result = self.write_source(&path, source, markup);
            report.record(outcome(
                target.consumer,
                path,
                ArtifactKind::Source,
                Some(source.variant),
                source_size,
                result.map(|_| ()),
            ));
        }

        for spec in &target.rasters {
            let path = target.path_of(&spec.destination);
            let result = self.write_raster(&path, spec, markup);
            let size = match &result {
                Ok(size) => *size,
                Err(_) => spec.output_size(),
            };
            report.record(outcome(
                target.consumer,
                path,
                ArtifactKind::Raster,
                Some(spec.variant),
                size,
                result.map(|_| ()),
            ));
        }
    }

    fn write_source(
        &self,
        path: &Path,
        source: &SourceSpec,
        markup: &MarkupSet,
    ) -> Result<(), BuildError> {
        write_artifact(path, markup.get(source.variant).as_bytes())?;
        Ok(())
    }

    fn write_raster(
        &self,
        path: &Path,
        spec: &OutputSpec,
        markup: &MarkupSet,
    ) -> Result<SizePx, BuildError> {
        let icon = composite(markup.get(spec.variant), spec.size, &spec.compositing)?;
        let artifact = RasterArtifact::encode(path, &icon)?;
        artifact.write()?;
        Ok(artifact.size)
    }
}

fn outcome(
    consumer: Consumer,
    path: PathBuf,
    kind: ArtifactKind,
    variant: Option<LogoVariant>,
    size: SizePx,
    result: Result<(), BuildError>,
) -> ItemOutcome {
    ItemOutcome {
        consumer: Some(consumer),
        path,
        kind,
        variant,
        width: size.width,
        height: size.height,
        status: match result {
            Ok(()) => ItemStatus::Written,
            Err(e) => ItemStatus::Failed {
                message: e.to_string(),
            },
        },
    }
}

/// Builds the standard plan for `config`: validates it, runs the batch and
/// writes the showcase page.
///
/// Only an invalid plan is returned as an error; per-artifact failures are
/// in the report.
pub fn build(config: &BuildConfig) -> Result<BuildReport, PlanError> {
    let plan = BuildPlan::standard(config);
    plan.validate()?;

    let mut report = BatchDriver::new(&config.geometry, &plan).run_all();

    let showcase = config.dist_dir.join(crate::showcase::SHOWCASE_FILE_NAME);
    let status = match emit_showcase(&plan, config) {
        Ok(_) => ItemStatus::Written,
        Err(e) => ItemStatus::Failed {
            message: e.to_string(),
        },
    };
    report.record(ItemOutcome {
        consumer: None,
        path: showcase,
        kind: ArtifactKind::Showcase,
        variant: None,
        width: 0,
        height: 0,
        status,
    });

    Ok(report)
}

// ============================================================================
// Tests
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositor::{BackgroundFill, Compositing};
    use std::fs;

    fn small_plan(root: &Path) -> BuildPlan {
        BuildPlan::new(vec![
            ConsumerTarget::new(Consumer::Sources, root)
                .source(LogoVariant::Color, "logo.svg")
                .source(LogoVariant::Inverted, "logo-white.svg"),
            ConsumerTarget::new(Consumer::Icons, root.join("icons"))
                .rasters(LogoVariant::Color, [("logo-16.png", 16), ("logo-32.png", 32)]),
            ConsumerTarget::new(Consumer::Dock, root.join("dock")).raster(
                OutputSpec::new(LogoVariant::Inverted, 64, "dock-64.png")
                    .with_compositing(Compositing::rounded(BackgroundFill::BLACK)),
            ),
        ])
    }

    #[test]
    fn run_all_writes_every_artifact_in_order() {
        let dir = tempfile::tempdir().unwrap();
        let plan = small_plan(dir.path());
        let report = BatchDriver::new(&GeometryConfig::default(), &plan).run_all();

        assert!(report.is_success());
        let expected = plan.destinations();
        let written: Vec<PathBuf> = report.written_paths().iter().map(|p| p.to_path_buf()).collect();
        assert_eq!(written, expected);
        for path in &expected {
            assert!(path.is_file(), "{} missing", path.display());
        }
    }

    #[test]
    fn rasters_have_declared_dimensions() {
        let dir = tempfile::tempdir().unwrap();
        let plan = small_plan(dir.path());
        BatchDriver::new(&GeometryConfig::default(), &plan).run_all();

        let img = image::open(dir.path().join("icons/logo-32.png")).unwrap();
        assert_eq!((img.width(), img.height()), (32, 32));
        let img = image::open(dir.path().join("dock/dock-64.png")).unwrap();
        assert_eq!((img.width(), img.height()), (64, 64));
    }

    #[test]
    fn sources_hold_variant_markup() {
        let dir = tempfile::tempdir().unwrap();
        let plan = small_plan(dir.path());
        let geometry = GeometryConfig::default();
        BatchDriver::new(&geometry, &plan).run_all();

        let white = fs::read_to_string(dir.path().join("logo-white.svg")).unwrap();
        assert_eq!(white, crate::template::produce(&geometry, LogoVariant::Inverted));
    }

    #[test]
    fn failures_are_recorded_and_batch_continues() {
        let dir = tempfile::tempdir().unwrap();
        // a file where the icons directory should be
        fs::write(dir.path().join("icons"), b"").unwrap();

        let plan = small_plan(dir.path());
        let report = BatchDriver::new(&GeometryConfig::default(), &plan).run_all();

        assert!(!report.is_success());
        assert_eq!(report.failed().count(), 2);
        assert!(report.failed().all(|i| i.consumer == Some(Consumer::Icons)));
        assert!(dir.path().join("dock/dock-64.png").is_file());
        assert_eq!(report.written().count(), 3);
    }

    #[test]
    fn missing_optional_target_is_skipped() {
        let dir = tempfile::tempdir().unwrap();
        let mut plan = small_plan(dir.path());
        plan.targets.push(
            ConsumerTarget::new(Consumer::AppAssets, dir.path().join("app/assets"))
                .optional()
                .rasters(LogoVariant::Color, [("icon.png", 16)]),
        );

        let report = BatchDriver::new(&GeometryConfig::default(), &plan).run_all();

        assert!(report.is_success());
        assert_eq!(report.skipped, vec![Consumer::AppAssets]);
        assert_eq!(report.items.len(), 5);
        assert!(!dir.path().join("app").exists());
    }

    #[test]
    fn present_optional_target_is_built() {
        let dir = tempfile::tempdir().unwrap();
        fs::create_dir_all(dir.path().join("app/assets")).unwrap();
        let mut plan = small_plan(dir.path());
        plan.targets.push(
            ConsumerTarget::new(Consumer::AppAssets, dir.path().join("app/assets"))
                .optional()
                .rasters(LogoVariant::Color, [("icon.png", 16)]),
        );

        let report = BatchDriver::new(&GeometryConfig::default(), &plan).run_all();

        assert!(report.skipped.is_empty());
        assert!(dir.path().join("app/assets/icon.png").is_file());
    }

    #[test]
    fn report_serializes_status_inline() {
        let report = BuildReport {
            items: vec![ItemOutcome {
                consumer: Some(Consumer::Icons),
                path: PathBuf::from("dist/icons/logo-16.png"),
                kind: ArtifactKind::Raster,
                variant: Some(LogoVariant::Color),
                width: 16,
                height: 16,
                status: ItemStatus::Failed {
                    message: "boom".to_string(),
                },
            }],
            skipped: vec![Consumer::AppRoot],
        };

        let json = report.to_json_pretty().unwrap();
        assert!(json.contains("\"status\": \"failed\""));
        assert!(json.contains("\"message\": \"boom\""));
        assert!(json.contains("\"app-root\""));
    }

    #[test]
    fn build_ends_with_showcase() {
        let dir = tempfile::tempdir().unwrap();
        let config = BuildConfig {
            dist_dir: dir.path().join("dist"),
            app_dir: dir.path().join("app"),
            ..BuildConfig::default()
        };

        let report = build(&config).unwrap();

        assert!(report.is_success());
        let last = report.items.last().unwrap();
        assert_eq!(last.kind, ArtifactKind::Showcase);
        assert!(dir.path().join("dist/showcase.html").is_file());
        assert_eq!(report.skipped.len(), 4);
    }
}
