//! The declarative output table.
//!
//! A [`BuildPlan`] lists every artifact a build produces, grouped by the
//! [`Consumer`] that uses it. Plans are built from a [`BuildConfig`] and
//! validated once before anything is written.

use std::collections::HashSet;
use std::path::{Path, PathBuf};

use serde::{Deserialize, Serialize};

use crate::compositor::{Compositing, scaled};
use crate::config::BuildConfig;
use crate::error::PlanError;
use crate::icon::SizePx;
use crate::template::LogoVariant;

/// Corner radius of Apple touch icons as a share of their side.
const APPLE_CORNER_RATIO: f64 = 0.156;

// ============================================================================
// Consumer
// ============================================================================

/// Who an artifact group is generated for.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum Consumer {
    Sources,
    Icons,
    Favicon,
    Apple,
    OpenGraph,
    Dock,
    MenuBar,
    DesktopIcons,
    DesktopPublic,
    AppAssets,
    AppRoot,
}

impl Consumer {
    /// Human-readable heading for logs and the showcase.
    pub fn title(self) -> &'static str {
        match self {
            Self::Sources => "SVG Sources",
            Self::Icons => "Standard Icons",
            Self::Favicon => "Favicons",
            Self::Apple => "Apple Touch Icons",
            Self::OpenGraph => "Open Graph Images",
            Self::Dock => "Dock Icons",
            Self::MenuBar => "Menu Bar Icons",
            Self::DesktopIcons => "Desktop App Icons",
            Self::DesktopPublic => "Desktop App Web Icons",
            Self::AppAssets => "App Assets",
            Self::AppRoot => "App Logo",
        }
    }
}

// ============================================================================
// Specs
// ============================================================================

/// One raster artifact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputSpec {
    pub variant: LogoVariant,
    /// Nominal side in pixels. Letterboxed outputs take their dimensions
    /// from the compositing instead.
    pub size: u32,
    /// Path relative to the owning target's root.
    pub destination: PathBuf,
    pub compositing: Compositing,
}

impl OutputSpec {
    pub fn new(variant: LogoVariant, size: u32, destination: impl Into<PathBuf>) -> Self {
        Self {
            variant,
            size,
            destination: destination.into(),
            compositing: Compositing::None,
        }
    }

    pub fn with_compositing(mut self, compositing: Compositing) -> Self {
        self.compositing = compositing;
        self
    }

    /// Dimensions of the image this spec produces.
    pub fn output_size(&self) -> SizePx {
        self.compositing.output_size(self.size)
    }
}

/// One vector markup file written next to the rasters.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SourceSpec {
    pub variant: LogoVariant,
    pub destination: PathBuf,
}

impl SourceSpec {
    pub fn new(variant: LogoVariant, destination: impl Into<PathBuf>) -> Self {
        Self {
            variant,
            destination: destination.into(),
        }
    }
}

// ============================================================================
// ConsumerTarget
// ============================================================================

/// All artifacts for one consumer, rooted at one directory.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerTarget {
    pub consumer: Consumer,
    pub root: PathBuf,
    /// Optional targets are emitted only when `root` already exists.
    pub optional: bool,
    pub sources: Vec<SourceSpec>,
    pub rasters: Vec<OutputSpec>,
}

impl ConsumerTarget {
    pub fn new(consumer: Consumer, root: impl Into<PathBuf>) -> Self {
        Self {
            consumer,
            root: root.into(),
            optional: false,
            sources: Vec::new(),
            rasters: Vec::new(),
        }
    }

    /// Marks the target as depending on an existing directory.
    pub fn optional(mut self) -> Self {
        self.optional = true;
        self
    }

    pub fn source(mut self, variant: LogoVariant, destination: impl Into<PathBuf>) -> Self {
        self.sources.push(SourceSpec::new(variant, destination));
        self
    }

    pub fn raster(mut self, spec: OutputSpec) -> Self {
        self.rasters.push(spec);
        self
    }

    /// Adds one uncomposited raster per `(name, size)` pair.
    pub fn rasters<'a>(
        mut self,
        variant: LogoVariant,
        entries: impl IntoIterator<Item = (&'a str, u32)>,
    ) -> Self {
        self.rasters.extend(
            entries
                .into_iter()
                .map(|(name, size)| OutputSpec::new(variant, size, name)),
        );
        self
    }

    /// Whether this target should be emitted in the current environment.
    pub fn is_available(&self) -> bool {
        !self.optional || self.root.is_dir()
    }

    pub fn path_of(&self, destination: &Path) -> PathBuf {
        self.root.join(destination)
    }

    /// Absolute (root-joined) destinations of every artifact, sources first.
    pub fn destinations(&self) -> impl Iterator<Item = PathBuf> + '_ {
        self.sources
            .iter()
            .map(|s| self.path_of(&s.destination))
            .chain(self.rasters.iter().map(|r| self.path_of(&r.destination)))
    }

    pub fn len(&self) -> usize {
        self.sources.len() + self.rasters.len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}

// ============================================================================
// BuildPlan
// ============================================================================

/// The ordered set of consumer targets for one build.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct BuildPlan {
    pub targets: Vec<ConsumerTarget>,
}

impl BuildPlan {
    pub fn new(targets: Vec<ConsumerTarget>) -> Self {
        Self { targets }
    }

    /// Checks that every destination is declared once and every output has
    /// non-zero dimensions.
    pub fn validate(&self) -> Result<(), PlanError> {
        let mut seen = HashSet::new();
        for target in &self.targets {
            for spec in &target.rasters {
                if spec.output_size().is_empty() {
                    return Err(PlanError::ZeroSize(target.path_of(&spec.destination)));
                }
            }
            for path in target.destinations() {
                if !seen.insert(path.clone()) {
                    return Err(PlanError::DuplicateDestination(path));
                }
            }
        }
        Ok(())
    }

    /// Every declared destination, in plan order.
    pub fn destinations(&self) -> Vec<PathBuf> {
        self.targets.iter().flat_map(|t| t.destinations()).collect()
    }

    pub fn target(&self, consumer: Consumer) -> Option<&ConsumerTarget> {
        self.targets.iter().find(|t| t.consumer == consumer)
    }

    /// The full asset table: the `dist` tree plus the sibling application
    /// directories, which are probed at build time.
    pub fn standard(config: &BuildConfig) -> Self {
        let dist = &config.dist_dir;
        let app = &config.app_dir;
        let brand = config.brand.as_str();
        let desktop = app.join("apps").join(format!("{brand}-desktop"));
        let fill = config.background;

        let sources = ConsumerTarget::new(Consumer::Sources, dist)
            .source(LogoVariant::Color, format!("{brand}-logo.svg"))
            .source(LogoVariant::MonoOutline, format!("{brand}-logo-mono.svg"))
            .source(LogoVariant::Inverted, format!("{brand}-logo-white.svg"))
            .source(LogoVariant::MonoFilled, format!("{brand}-logo-menubar.svg"))
            .source(LogoVariant::Favicon, format!("{brand}-favicon.svg"));

        let mut icons = ConsumerTarget::new(Consumer::Icons, dist.join("icons"));
        for size in [16, 32, 64, 128, 256, 512, 1024] {
            icons = icons.raster(OutputSpec::new(
                LogoVariant::Color,
                size,
                format!("logo-{size}.png"),
            ));
        }
        for size in [16, 32, 64, 128] {
            icons = icons.raster(OutputSpec::new(
                LogoVariant::MonoOutline,
                size,
                format!("logo-mono-{size}.png"),
            ));
        }

        let mut favicon = ConsumerTarget::new(Consumer::Favicon, dist.join("favicon"));
        for size in [16, 32, 48, 64, 96, 128, 192, 256, 512] {
            favicon = favicon.raster(OutputSpec::new(
                LogoVariant::Favicon,
                size,
                format!("favicon-{size}.png"),
            ));
        }
        for size in [16, 32, 48] {
            favicon = favicon.raster(
                OutputSpec::new(LogoVariant::Inverted, size, format!("favicon-bg-{size}.png"))
                    .with_compositing(Compositing::rounded_with_radius(fill, 0)),
            );
        }

        let mut apple = ConsumerTarget::new(Consumer::Apple, dist.join("apple"));
        for size in [57, 60, 72, 76, 114, 120, 144, 152, 167, 180] {
            apple = apple.raster(
                OutputSpec::new(
                    LogoVariant::Color,
                    size,
                    format!("apple-touch-icon-{size}.png"),
                )
                .with_compositing(Compositing::rounded_with_radius(
                    fill,
                    scaled(size, APPLE_CORNER_RATIO),
                )),
            );
        }

        let og = ConsumerTarget::new(Consumer::OpenGraph, dist.join("og"))
            .raster(
                OutputSpec::new(LogoVariant::Inverted, 1200, "og-image.png")
                    .with_compositing(Compositing::letterbox(1200, 630, fill)),
            )
            .raster(
                OutputSpec::new(LogoVariant::Inverted, 1200, "twitter-card.png")
                    .with_compositing(Compositing::letterbox(1200, 600, fill)),
            )
            .raster(
                OutputSpec::new(LogoVariant::Inverted, 1200, "og-square.png")
                    .with_compositing(Compositing::letterbox(1200, 1200, fill)),
            );

        let mut dock = ConsumerTarget::new(Consumer::Dock, dist.join("dock"));
        for size in [64, 128, 256, 512, 1024] {
            dock = dock.raster(
                OutputSpec::new(LogoVariant::Inverted, size, format!("dock-{size}.png"))
                    .with_compositing(Compositing::rounded(fill)),
            );
        }
        for base in [128, 256, 512] {
            dock = dock.raster(
                OutputSpec::new(LogoVariant::Inverted, base * 2, format!("dock-{base}@2x.png"))
                    .with_compositing(Compositing::rounded(fill)),
            );
        }

        let menubar = ConsumerTarget::new(Consumer::MenuBar, dist.join("menubar"))
            .rasters(
                LogoVariant::MonoOutline,
                [
                    ("menubar-16.png", 16),
                    ("menubar-16@2x.png", 32),
                    ("menubar-16@3x.png", 48),
                    ("menubar-22.png", 22),
                    ("menubar-22@2x.png", 44),
                ],
            )
            .rasters(
                LogoVariant::MonoFilled,
                [
                    ("iconTemplate.png", 16),
                    ("iconTemplate@2x.png", 32),
                    ("iconTemplate@3x.png", 48),
                ],
            );

        let desktop_icons = ConsumerTarget::new(
            Consumer::DesktopIcons,
            desktop.join("src-tauri").join("icons"),
        )
        .optional()
        .source(LogoVariant::Color, "icon.svg")
        .rasters(
            LogoVariant::Color,
            [
                ("icon_16x16.png", 16),
                ("16x16.png", 16),
                ("icon_16x16@2x.png", 32),
                ("icon_32x32.png", 32),
                ("32x32.png", 32),
                ("icon_32x32@2x.png", 64),
                ("icon_128x128.png", 128),
                ("128x128.png", 128),
                ("icon_128x128@2x.png", 256),
                ("128x128@2x.png", 256),
                ("icon_256x256.png", 256),
                ("icon_256x256@2x.png", 512),
                ("icon_512x512.png", 512),
                ("icon_512x512@2x.png", 1024),
                ("icon_1024x1024.png", 1024),
            ],
        )
        .rasters(
            LogoVariant::MonoOutline,
            [
                ("iconTemplate.png", 16),
                ("tray-icon-macos.png", 16),
                ("iconTemplate@1.5x.png", 24),
                ("iconTemplate@2x.png", 32),
                ("iconTemplate@3x.png", 48),
            ],
        );

        let logo_png = format!("{brand}-logo.png");
        let desktop_public = ConsumerTarget::new(Consumer::DesktopPublic, desktop.join("public"))
            .optional()
            .source(LogoVariant::Color, format!("{brand}-logo.svg"))
            .rasters(
                LogoVariant::Color,
                [("favicon.png", 32), (logo_png.as_str(), 256)],
            );

        let app_assets = ConsumerTarget::new(Consumer::AppAssets, app.join("assets"))
            .optional()
            .rasters(LogoVariant::Color, [("icon.png", 512)]);

        let app_root = ConsumerTarget::new(Consumer::AppRoot, app)
            .optional()
            .rasters(LogoVariant::Color, [(logo_png.as_str(), 256)]);

        Self::new(vec![
            sources,
            icons,
            favicon,
            apple,
            og,
            dock,
            menubar,
            desktop_icons,
            desktop_public,
            app_assets,
            app_root,
        ])
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::compositor::BackgroundFill;

    fn plan() -> BuildPlan {
        BuildPlan::standard(&BuildConfig::default())
    }

    #[test]
    fn standard_plan_is_valid() {
        assert_eq!(plan().validate(), Ok(()));
    }

    #[test]
    fn standard_plan_counts() {
        let plan = plan();
        let count = |consumer| plan.target(consumer).map(ConsumerTarget::len);
        assert_eq!(count(Consumer::Sources), Some(5));
        assert_eq!(count(Consumer::Icons), Some(11));
        assert_eq!(count(Consumer::Favicon), Some(12));
        assert_eq!(count(Consumer::Apple), Some(10));
        assert_eq!(count(Consumer::OpenGraph), Some(3));
        assert_eq!(count(Consumer::Dock), Some(8));
        assert_eq!(count(Consumer::MenuBar), Some(8));
        assert_eq!(count(Consumer::DesktopIcons), Some(21));
        assert_eq!(count(Consumer::DesktopPublic), Some(3));
        assert_eq!(count(Consumer::AppAssets), Some(1));
        assert_eq!(count(Consumer::AppRoot), Some(1));
        assert_eq!(plan.destinations().len(), 83);
    }

    #[test]
    fn only_app_targets_are_optional() {
        for target in &plan().targets {
            let expected = matches!(
                target.consumer,
                Consumer::DesktopIcons
                    | Consumer::DesktopPublic
                    | Consumer::AppAssets
                    | Consumer::AppRoot
            );
            assert_eq!(target.optional, expected, "{:?}", target.consumer);
        }
    }

    #[test]
    fn apple_icons_use_ios_corner_radius() {
        let plan = plan();
        let apple = plan.target(Consumer::Apple).unwrap();
        let icon_180 = apple
            .rasters
            .iter()
            .find(|s| s.size == 180)
            .unwrap();
        assert_eq!(
            icon_180.compositing,
            Compositing::rounded_with_radius(BackgroundFill::BLACK, 28)
        );
    }

    #[test]
    fn retina_dock_icons_double_the_size() {
        let plan = plan();
        let dock = plan.target(Consumer::Dock).unwrap();
        let retina = dock
            .rasters
            .iter()
            .find(|s| s.destination == Path::new("dock-512@2x.png"))
            .unwrap();
        assert_eq!(retina.output_size(), SizePx::square(1024));
    }

    #[test]
    fn og_images_are_letterboxed() {
        let plan = plan();
        let og = plan.target(Consumer::OpenGraph).unwrap();
        let sizes: Vec<_> = og.rasters.iter().map(OutputSpec::output_size).collect();
        assert_eq!(
            sizes,
            vec![
                SizePx::new(1200, 630),
                SizePx::new(1200, 600),
                SizePx::new(1200, 1200)
            ]
        );
    }

    #[test]
    fn background_flows_into_compositing() {
        let config = BuildConfig {
            background: BackgroundFill::WHITE,
            ..BuildConfig::default()
        };
        let plan = BuildPlan::standard(&config);

        let composited: Vec<_> = plan
            .targets
            .iter()
            .flat_map(|t| &t.rasters)
            .filter_map(|s| s.compositing.background(s.size))
            .collect();
        assert_eq!(composited.len(), 24);
        assert!(composited.iter().all(|(fill, _)| *fill == BackgroundFill::WHITE));
    }

    #[test]
    fn brand_flows_into_paths() {
        let config = BuildConfig {
            brand: "zoo".to_string(),
            ..BuildConfig::default()
        };
        let plan = BuildPlan::standard(&config);
        let destinations = plan.destinations();
        assert!(destinations.contains(&PathBuf::from("dist/zoo-logo.svg")));
        assert!(destinations.contains(&PathBuf::from(
            "../app/apps/zoo-desktop/src-tauri/icons/icon.svg"
        )));
    }

    #[test]
    fn validate_rejects_duplicates() {
        let plan = BuildPlan::new(vec![
            ConsumerTarget::new(Consumer::Icons, "out")
                .rasters(LogoVariant::Color, [("a.png", 16)]),
            ConsumerTarget::new(Consumer::Favicon, "out")
                .rasters(LogoVariant::Favicon, [("a.png", 32)]),
        ]);
        assert_eq!(
            plan.validate(),
            Err(PlanError::DuplicateDestination(PathBuf::from("out/a.png")))
        );
    }

    #[test]
    fn validate_rejects_source_raster_collision() {
        let plan = BuildPlan::new(vec![
            ConsumerTarget::new(Consumer::Sources, "out")
                .source(LogoVariant::Color, "logo")
                .rasters(LogoVariant::Color, [("logo", 16)]),
        ]);
        assert!(matches!(plan.validate(), Err(PlanError::DuplicateDestination(_))));
    }

    #[test]
    fn validate_rejects_zero_sizes() {
        let plan = BuildPlan::new(vec![
            ConsumerTarget::new(Consumer::Icons, "out")
                .rasters(LogoVariant::Color, [("zero.png", 0)]),
        ]);
        assert_eq!(plan.validate(), Err(PlanError::ZeroSize(PathBuf::from("out/zero.png"))));

        let plan = BuildPlan::new(vec![ConsumerTarget::new(Consumer::OpenGraph, "out").raster(
            OutputSpec::new(LogoVariant::Inverted, 1200, "og.png")
                .with_compositing(Compositing::letterbox(1200, 0, BackgroundFill::BLACK)),
        )]);
        assert!(matches!(plan.validate(), Err(PlanError::ZeroSize(_))));
    }

    #[test]
    fn optional_target_probes_root() {
        let dir = tempfile::tempdir().unwrap();
        let present = ConsumerTarget::new(Consumer::AppAssets, dir.path()).optional();
        let absent = ConsumerTarget::new(Consumer::AppAssets, dir.path().join("missing")).optional();
        let required = ConsumerTarget::new(Consumer::Icons, dir.path().join("missing"));

        assert!(present.is_available());
        assert!(!absent.is_available());
        assert!(required.is_available());
    }
}
