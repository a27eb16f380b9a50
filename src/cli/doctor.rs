//! Environment readiness check.

use crate::capture;
use crate::renderer::chromium::find_chromium;
use anyhow::Result;
use std::path::Path;

/// Check Chromium availability, output directory writability, and the
/// derived capture targets.
pub async fn run() -> Result<()> {
    println!("Portal Doctor");
    println!("=============");
    println!();

    // OS and architecture
    let os = std::env::consts::OS;
    let arch = std::env::consts::ARCH;
    println!("OS:   {os}");
    println!("Arch: {arch}");
    println!();

    // Check Chromium
    let chromium_path = find_chromium();
    match &chromium_path {
        Some(path) => println!("[OK] Chromium found: {}", path.display()),
        None => println!(
            "[!!] Chromium NOT found. Install Chrome or set PORTAL_CHROMIUM_PATH."
        ),
    }

    // Check output directory writability
    let out_ok = output_dir_writable(Path::new(capture::DEFAULT_OUTPUT_DIR));
    if out_ok {
        println!(
            "[OK] Output directory {} is writable",
            capture::DEFAULT_OUTPUT_DIR
        );
    } else {
        println!(
            "[!!] Output directory {} is not writable",
            capture::DEFAULT_OUTPUT_DIR
        );
    }

    // Check derived capture targets
    let mut targets_ok = true;
    for target in capture::targets_from_registry() {
        match url::Url::parse(&target.url) {
            Ok(u) if u.scheme() == "https" => {
                println!("[OK] Target {}: {}", target.id, target.url)
            }
            _ => {
                println!("[!!] Target {} has a malformed URL: {}", target.id, target.url);
                targets_ok = false;
            }
        }
    }

    println!();
    let ready = chromium_path.is_some() && out_ok && targets_ok;
    if ready {
        println!("Status: READY");
    } else {
        println!("Status: NOT READY");
    }

    Ok(())
}

/// Probe writability by creating the directory and touching a file in it.
fn output_dir_writable(dir: &Path) -> bool {
    if std::fs::create_dir_all(dir).is_err() {
        return false;
    }
    let probe = dir.join(".doctor-probe");
    match std::fs::write(&probe, b"") {
        Ok(()) => {
            let _ = std::fs::remove_file(&probe);
            true
        }
        Err(_) => false,
    }
}
