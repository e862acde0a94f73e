//! # Watch Module
//!
//! Rebuilds palette variants whenever the base animation is saved.

use crate::commands;
use anyhow::{Context, Result};
use lottie_recolor::RecolorConfig;
use notify::{Event, EventKind, RecursiveMode, Watcher};
use std::ffi::OsStr;
use std::path::Path;
use std::sync::mpsc::{channel, Receiver, RecvTimeoutError};
use std::time::{Duration, Instant};

const DEBOUNCE: Duration = Duration::from_millis(500);

/// Watch `input` and regenerate variants into `out_dir` on every change.
pub fn watch_base(config: &RecolorConfig, input: &Path, out_dir: &Path) -> Result<()> {
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |result: notify::Result<Event>| {
        if let Ok(event) = result {
            let _ = tx.send(event);
        }
    })?;

    // Editors often replace the file instead of writing in place, so watch
    // the parent directory and filter by name.
    let dir = input
        .parent()
        .filter(|p| !p.as_os_str().is_empty())
        .unwrap_or(Path::new("."));
    let file_name = input
        .file_name()
        .with_context(|| format!("Not a file path: {}", input.display()))?
        .to_owned();
    watcher.watch(dir, RecursiveMode::NonRecursive)?;

    tracing::info!("Watching {} for changes...", input.display());
    tracing::info!("Output directory: {}", out_dir.display());
    tracing::info!("Press Ctrl+C to stop.\n");

    rebuild(config, input, out_dir);
    while wait_for_change(&rx, &file_name, DEBOUNCE) {
        rebuild(config, input, out_dir);
    }

    Ok(())
}

/// Blocks until `file_name` has changed and then stayed quiet for `debounce`.
/// Returns `false` once the watcher hangs up.
fn wait_for_change(rx: &Receiver<Event>, file_name: &OsStr, debounce: Duration) -> bool {
    let mut last_change: Option<Instant> = None;

    loop {
        let timeout = last_change.map_or(debounce, |at| debounce.saturating_sub(at.elapsed()));
        match rx.recv_timeout(timeout) {
            Ok(event) => {
                let touches_input = event
                    .paths
                    .iter()
                    .any(|p| p.file_name() == Some(file_name));
                if touches_input && is_content_change(&event.kind) {
                    last_change = Some(Instant::now());
                }
            }
            Err(RecvTimeoutError::Timeout) => {}
            Err(RecvTimeoutError::Disconnected) => return false,
        }
        // Unrelated events must not hold back a due rebuild.
        if last_change.is_some_and(|at| at.elapsed() >= debounce) {
            return true;
        }
    }
}

fn is_content_change(kind: &EventKind) -> bool {
    matches!(kind, EventKind::Create(_) | EventKind::Modify(_))
}

fn rebuild(config: &RecolorConfig, input: &Path, out_dir: &Path) {
    tracing::info!("Base changed: {}", input.display());
    match commands::cmd_variants(config, input, out_dir) {
        Ok(paths) => {
            for path in paths {
                tracing::info!("  → Generated {}", path.display());
            }
        }
        Err(e) => {
            tracing::error!("  → Failed to rebuild variants: {:#}", e);
        }
    }
}
