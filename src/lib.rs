//! logo-forge: build-time generator for a brand's logo assets
//!
//! This crate produces every vector and raster asset a product family needs
//! from one parametric mark: SVG sources, favicons, touch icons, dock and
//! menu-bar icons, and social-card images.
//!
//! # Example
//!
//! ```no_run
//! use logo_forge::{BatchDriver, BuildConfig, BuildPlan};
//!
//! let config = BuildConfig::default();
//! let plan = BuildPlan::standard(&config);
//! plan.validate().unwrap();
//!
//! let report = BatchDriver::new(&config.geometry, &plan).run_all();
//! assert!(report.is_success());
//! ```
//!
//! # Markup only
//!
//! Templates are pure functions of the geometry and can be used without
//! touching the filesystem:
//!
//! ```
//! use logo_forge::{GeometryConfig, LogoVariant, OutputFormat, decode, resolve};
//!
//! let geometry = GeometryConfig::default();
//! let url = resolve(&geometry, LogoVariant::Inverted, OutputFormat::DataUrl);
//! let svg = decode(&url).unwrap();
//! assert!(svg.contains(r#"stroke="white""#));
//! ```

mod batch;
mod compositor;
mod config;
mod error;
mod geometry;
mod icon;
mod plan;
mod resolve;
mod showcase;
mod template;

pub use batch::{ArtifactKind, BatchDriver, BuildReport, ItemOutcome, ItemStatus, build};
pub use compositor::{
    BACKGROUND_LOGO_RATIO, BackgroundFill, Compositing, DEFAULT_CORNER_RATIO,
    LETTERBOX_LOGO_RATIO, RasterArtifact, background_markup, composite, composite_over,
    encode_png, render_svg, scaled, write_artifact,
};
pub use config::{BuildConfig, CONFIG_FILE_NAME};
pub use error::{
    BuildError, ConfigError, DecodeError, FilesystemError, PlanError, RasterizationError,
};
pub use geometry::{ColorGeometry, GeometryConfig, MonoGeometry, Point};
pub use icon::{Layout, RectPx, RenderedIcon, SizePx};
pub use plan::{BuildPlan, Consumer, ConsumerTarget, OutputSpec, SourceSpec};
pub use resolve::{DATA_URL_PREFIX, OutputFormat, decode, resolve};
pub use showcase::{SHOWCASE_FILE_NAME, emit_showcase, render_showcase};
pub use template::{
    Ink, LogoVariant, MarkupSet, color_markup, favicon_markup, filled_markup, outline_markup,
    produce, produce_with_ink,
};
