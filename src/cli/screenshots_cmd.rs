//! `portal screenshots` — capture themed tile images for every ecosystem site.

use crate::capture::{self, CaptureOptions};
use crate::renderer::chromium::ChromiumRenderer;
use crate::renderer::Renderer;
use anyhow::{bail, Context, Result};
use std::path::PathBuf;
use tracing::info;

/// Run the capture batch. `sites` filters targets by identifier; empty
/// means all registry targets.
pub async fn run(output_dir: PathBuf, settle_ms: u64, sites: &[String]) -> Result<()> {
    let opts = CaptureOptions {
        output_dir,
        settle_ms,
        ..CaptureOptions::default()
    };

    let mut targets = capture::targets_from_registry();
    if !sites.is_empty() {
        for id in sites {
            if !targets.iter().any(|t| &t.id == id) {
                let known: Vec<&str> = targets.iter().map(|t| t.id.as_str()).collect();
                bail!("unknown site '{id}' (known: {})", known.join(", "));
            }
        }
        targets.retain(|t| sites.contains(&t.id));
    }

    println!("Launching browser...");
    let renderer = ChromiumRenderer::new()
        .await
        .context("browser launch failed")?;
    info!("Chromium renderer initialized");

    let result = capture::run_batch(&renderer, &targets, &opts).await;

    // Shut the browser down whether or not the batch ran to completion.
    renderer.shutdown().await?;

    let summary = result?;
    println!(
        "\nDone! {} captured, {} failed.",
        summary.captured.len(),
        summary.failed.len()
    );

    Ok(())
}
