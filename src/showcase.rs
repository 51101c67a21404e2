//! Static HTML page for eyeballing a build.
//!
//! The page links every artifact of the non-optional targets relative to the
//! dist directory. It does not check that the files exist.

use std::path::{Component, Path, PathBuf};

use crate::compositor::{Compositing, write_artifact};
use crate::config::BuildConfig;
use crate::error::FilesystemError;
use crate::plan::{BuildPlan, ConsumerTarget, OutputSpec};
use crate::template::LogoVariant;

pub const SHOWCASE_FILE_NAME: &str = "showcase.html";

/// Largest on-page edge for a square raster preview.
const MAX_PREVIEW: u32 = 256;

const STYLE: &str = r#"
:root { --checker: repeating-conic-gradient(#ccc 0% 25%, #fff 0% 50%) 50% / 20px 20px; }
* { box-sizing: border-box; margin: 0; padding: 0; }
body { font-family: -apple-system, BlinkMacSystemFont, 'Segoe UI', Roboto, sans-serif; background: #1a1a1a; color: #fff; padding: 40px; line-height: 1.6; }
h1 { margin-bottom: 10px; font-size: 2rem; }
h2 { margin: 40px 0 20px; padding-bottom: 10px; border-bottom: 1px solid #333; }
.grid { display: flex; flex-wrap: wrap; gap: 20px; align-items: flex-end; }
.tile { display: flex; flex-direction: column; align-items: center; gap: 10px; }
.box { display: flex; align-items: center; justify-content: center; background: var(--checker); border-radius: 8px; padding: 10px; }
.box.dark { background: #111; }
.box.light { background: #f5f5f5; }
.box img { display: block; max-width: 100%; height: auto; }
.wide img { width: 600px; max-width: 100%; height: auto; border-radius: 8px; }
.label { font-size: 12px; color: #888; text-align: center; }
"#;

/// Builds the showcase document for `plan`.
pub fn render_showcase(plan: &BuildPlan, config: &BuildConfig) -> String {
    let title = format!("{} Logo Assets", escape(&config.brand));

    let mut html = format!(
        "<!DOCTYPE html>\n<html lang=\"en\">\n<head>\n<meta charset=\"UTF-8\">\n\
         <meta name=\"viewport\" content=\"width=device-width, initial-scale=1.0\">\n\
         <title>{title}</title>\n<style>{STYLE}</style>\n</head>\n<body>\n<h1>{title}</h1>\n"
    );

    for target in plan.targets.iter().filter(|t| !t.optional) {
        section(&mut html, target, &config.dist_dir);
    }

    html.push_str("</body>\n</html>\n");
    html
}

/// Writes the showcase to `<dist>/showcase.html` and returns its path.
pub fn emit_showcase(plan: &BuildPlan, config: &BuildConfig) -> Result<PathBuf, FilesystemError> {
    let path = config.dist_dir.join(SHOWCASE_FILE_NAME);
    write_artifact(&path, render_showcase(plan, config).as_bytes())?;
    Ok(path)
}

fn section(html: &mut String, target: &ConsumerTarget, dist: &Path) {
    if target.is_empty() {
        return;
    }
    html.push_str(&format!(
        "<section>\n<h2>{}</h2>\n<div class=\"grid\">\n",
        target.consumer.title()
    ));

    for source in &target.sources {
        let href = relative_href(&target.path_of(&source.destination), dist);
        html.push_str(&format!(
            "<div class=\"tile\"><div class=\"box {}\" style=\"width:120px;height:120px;\">\
             <img src=\"{href}\" alt=\"{}\" style=\"width:100px;height:100px;\"></div>\
             <span class=\"label\">{href}</span></div>\n",
            backdrop(source.variant),
            source.variant.name()
        ));
    }

    for spec in &target.rasters {
        raster_tile(html, target, spec, dist);
    }

    html.push_str("</div>\n</section>\n");
}

fn raster_tile(html: &mut String, target: &ConsumerTarget, spec: &OutputSpec, dist: &Path) {
    let href = relative_href(&target.path_of(&spec.destination), dist);
    let size = spec.output_size();
    let label = format!("{}×{}", size.width, size.height);

    if let Compositing::Letterbox { .. } = spec.compositing {
        html.push_str(&format!(
            "<div class=\"tile wide\"><img src=\"{href}\" alt=\"{label}\">\
             <span class=\"label\">{href} ({label})</span></div>\n"
        ));
        return;
    }

    let shown = size.width.min(MAX_PREVIEW);
    html.push_str(&format!(
        "<div class=\"tile\"><div class=\"box {}\"><img src=\"{href}\" alt=\"{label}\" \
         style=\"width:{shown}px;\"></div><span class=\"label\">{label}</span></div>\n",
        backdrop(spec.variant)
    ));
}

/// Background class that keeps a variant visible.
fn backdrop(variant: LogoVariant) -> &'static str {
    match variant {
        LogoVariant::MonoOutline | LogoVariant::MonoFilled => "light",
        LogoVariant::Inverted | LogoVariant::Color => "dark",
        LogoVariant::Favicon => "",
    }
}

/// `path` relative to `base`, with forward slashes.
fn relative_href(path: &Path, base: &Path) -> String {
    let relative = path.strip_prefix(base).unwrap_or(path);
    let parts: Vec<_> = relative
        .components()
        .filter_map(|c| match c {
            Component::Normal(part) => Some(part.to_string_lossy()),
            Component::ParentDir => Some("..".into()),
            _ => None,
        })
        .collect();
    escape(&parts.join("/"))
}

fn escape(text: &str) -> String {
    text.replace('&', "&amp;")
        .replace('<', "&lt;")
        .replace('>', "&gt;")
        .replace('"', "&quot;")
}
