//! Screenshot capture driver for portal tile images.
//!
//! Iterates the Cartesian product of capture targets, themes, and viewport
//! presets against a single shared browser instance, writing one PNG per
//! combination. A failing combination is logged and skipped; the batch
//! always runs to the end.

use crate::registry;
use crate::renderer::Renderer;
use std::fmt;
use std::path::PathBuf;
use std::time::Duration;
use thiserror::Error;
use tracing::{debug, warn};

/// Navigation timeout per task.
pub const NAV_TIMEOUT_MS: u64 = 30_000;

/// Fixed delay after navigation settles, so client-side rendering and
/// animations finish before capture. A heuristic, not a correctness
/// guarantee: the target sites expose no ready signal.
pub const SETTLE_DELAY_MS: u64 = 1_500;

/// Device scale factor for all captures (crisp high-DPI tiles).
pub const DEVICE_SCALE_FACTOR: f64 = 2.0;

/// Default output directory, relative to the working directory.
pub const DEFAULT_OUTPUT_DIR: &str = "static/screenshots";

/// Rendered theme variant, selected via the `theme` URL query parameter.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Theme {
    Dark,
    Light,
}

impl Theme {
    pub const ALL: [Theme; 2] = [Theme::Dark, Theme::Light];

    pub fn as_str(self) -> &'static str {
        match self {
            Theme::Dark => "dark",
            Theme::Light => "light",
        }
    }
}

impl fmt::Display for Theme {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A capture viewport preset.
#[derive(Debug, Clone, Copy)]
pub struct ViewportPreset {
    /// Filename suffix, empty for the primary preset.
    pub suffix: &'static str,
    pub width: u32,
    pub height: u32,
    pub label: &'static str,
}

/// Desktop and mobile tile presets.
pub const VIEWPORTS: [ViewportPreset; 2] = [
    ViewportPreset {
        suffix: "",
        width: 800,
        height: 500,
        label: "desktop",
    },
    ViewportPreset {
        suffix: "-mobile",
        width: 280,
        height: 600,
        label: "mobile",
    },
];

/// One site to capture: identifier plus base URL.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CaptureTarget {
    pub id: String,
    pub url: String,
}

/// Derive the capture targets from the content registry, in display order.
///
/// Packages with a live app are captured at the app URL, everything else at
/// its documentation URL.
pub fn targets_from_registry() -> Vec<CaptureTarget> {
    registry::packages()
        .iter()
        .map(|p| CaptureTarget {
            id: p.id.to_string(),
            url: p.app.clone().unwrap_or_else(|| p.docs.clone()),
        })
        .collect()
}

/// Batch configuration, with the production constants as defaults.
#[derive(Debug, Clone)]
pub struct CaptureOptions {
    pub output_dir: PathBuf,
    pub nav_timeout_ms: u64,
    pub settle_ms: u64,
}

impl Default for CaptureOptions {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from(DEFAULT_OUTPUT_DIR),
            nav_timeout_ms: NAV_TIMEOUT_MS,
            settle_ms: SETTLE_DELAY_MS,
        }
    }
}

/// A recoverable per-task failure. Caught at the task boundary; the batch
/// continues with the next combination.
#[derive(Debug, Error)]
pub enum CaptureError {
    #[error("page acquisition failed: {0}")]
    Page(anyhow::Error),
    #[error("viewport setup failed: {0}")]
    Viewport(anyhow::Error),
    #[error("navigation failed: {0}")]
    Navigation(anyhow::Error),
    #[error("screenshot capture failed: {0}")]
    Capture(anyhow::Error),
    #[error("write failed for {}: {source}", path.display())]
    Write {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Outcome of one batch run.
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// Labels of tasks whose PNG was written.
    pub captured: Vec<String>,
    /// Labels and errors of tasks that failed.
    pub failed: Vec<(String, CaptureError)>,
}

impl BatchSummary {
    pub fn total(&self) -> usize {
        self.captured.len() + self.failed.len()
    }
}

/// Build the themed URL variant for a capture target.
///
/// The parameter is appended at the string level, `&` when the base URL
/// already carries a query string, `?` otherwise. The base is never
/// re-normalized.
pub fn themed_url(base: &str, theme: Theme) -> String {
    let sep = if base.contains('?') { '&' } else { '?' };
    format!("{base}{sep}theme={theme}")
}

/// Output filename for one task: `{id}-{theme}{suffix}.png`.
pub fn filename(id: &str, theme: Theme, viewport: &ViewportPreset) -> String {
    format!("{id}-{theme}{}.png", viewport.suffix)
}

/// Run the full capture batch: every target, both themes, both viewports,
/// sequentially, one page per task against the shared browser.
///
/// Per-task failures are recorded in the summary and logged; only output
/// directory creation can fail the batch itself.
pub async fn run_batch(
    renderer: &dyn Renderer,
    targets: &[CaptureTarget],
    opts: &CaptureOptions,
) -> anyhow::Result<BatchSummary> {
    use anyhow::Context;

    std::fs::create_dir_all(&opts.output_dir).with_context(|| {
        format!(
            "failed to create output directory {}",
            opts.output_dir.display()
        )
    })?;

    let mut summary = BatchSummary::default();

    for target in targets {
        println!("\nCapturing {} ({}):", target.id, target.url);
        for theme in Theme::ALL {
            for viewport in &VIEWPORTS {
                let label = format!("{} {theme} {}", target.id, viewport.label);
                println!("  {label}...");

                match capture_one(renderer, target, theme, viewport, opts).await {
                    Ok(path) => {
                        println!("    Saved: {}", path.display());
                        summary.captured.push(label);
                    }
                    Err(e) => {
                        println!("    Error: {e}");
                        warn!(task = %label, "capture failed: {e}");
                        summary.failed.push((label, e));
                    }
                }
            }
        }
    }

    Ok(summary)
}

/// Capture one combination. The page context is released on every exit
/// path, including failures inside the capture itself.
async fn capture_one(
    renderer: &dyn Renderer,
    target: &CaptureTarget,
    theme: Theme,
    viewport: &ViewportPreset,
    opts: &CaptureOptions,
) -> Result<PathBuf, CaptureError> {
    let mut ctx = renderer.new_context().await.map_err(CaptureError::Page)?;

    let result = async {
        ctx.set_viewport(viewport.width, viewport.height, DEVICE_SCALE_FACTOR)
            .await
            .map_err(CaptureError::Viewport)?;

        let url = themed_url(&target.url, theme);
        let nav = ctx
            .navigate(&url, opts.nav_timeout_ms)
            .await
            .map_err(CaptureError::Navigation)?;
        debug!(url = %nav.final_url, load_ms = nav.load_time_ms, "navigation settled");

        tokio::time::sleep(Duration::from_millis(opts.settle_ms)).await;

        let png = ctx.screenshot_png().await.map_err(CaptureError::Capture)?;

        let path = opts
            .output_dir
            .join(filename(&target.id, theme, viewport));
        std::fs::write(&path, &png).map_err(|source| CaptureError::Write {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }
    .await;

    if let Err(e) = ctx.close().await {
        debug!("page close failed: {e}");
    }

    result
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn themed_url_appends_query_separator() {
        assert_eq!(
            themed_url("https://view.pathsim.org", Theme::Dark),
            "https://view.pathsim.org?theme=dark"
        );
        assert_eq!(
            themed_url("https://docs.pathsim.org/chem", Theme::Light),
            "https://docs.pathsim.org/chem?theme=light"
        );
    }

    #[test]
    fn themed_url_respects_existing_query() {
        assert_eq!(
            themed_url("https://view.pathsim.org?embed=1", Theme::Dark),
            "https://view.pathsim.org?embed=1&theme=dark"
        );
    }

    #[test]
    fn filename_scheme() {
        assert_eq!(filename("pathview", Theme::Dark, &VIEWPORTS[0]), "pathview-dark.png");
        assert_eq!(
            filename("pathview", Theme::Light, &VIEWPORTS[1]),
            "pathview-light-mobile.png"
        );
    }

    #[test]
    fn targets_derive_from_registry() {
        let targets = targets_from_registry();
        assert_eq!(targets.len(), 4);
        assert_eq!(targets[0].id, "pathview");
        assert_eq!(targets[0].url, "https://view.pathsim.org");
        assert_eq!(targets[1].id, "pathsim");
        assert_eq!(targets[1].url, "https://docs.pathsim.org/pathsim");
    }

    #[test]
    fn default_options_match_production_constants() {
        let opts = CaptureOptions::default();
        assert_eq!(opts.output_dir, PathBuf::from("static/screenshots"));
        assert_eq!(opts.nav_timeout_ms, 30_000);
        assert_eq!(opts.settle_ms, 1_500);
    }

    #[test]
    fn theme_set_is_closed_and_ordered() {
        assert_eq!(Theme::ALL.map(Theme::as_str), ["dark", "light"]);
    }
}
