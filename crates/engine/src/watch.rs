// crates/engine/src/watch.rs
use crate::config::Config;
use crate::error::{EngineError, Result};
use log::{debug, warn};
use notify::{RecursiveMode, Watcher};
use std::ops::ControlFlow;
use std::path::Path;
use std::sync::mpsc::channel;

/// Watch the configured file and run the callback whenever it changes.
///
/// The callback runs once up front. This function blocks until the
/// callback returns [`ControlFlow::Break`] or the watcher shuts down.
///
/// # Errors
/// Returns [`EngineError::NoFileSelected`] without a file, or a
/// [`EngineError::Watch`] error if the watcher cannot be set up.
pub fn watch_loop<F>(config: &Config, mut on_event: F) -> Result<()>
where
    F: FnMut() -> ControlFlow<()>,
{
    let file = config.file.as_deref().ok_or(EngineError::NoFileSelected)?;
    let (tx, rx) = channel();

    let mut watcher = notify::recommended_watcher(move |res| match res {
        Ok(event) => {
            let _ = tx.send(event);
        }
        Err(e) => warn!("watch error: {e:?}"),
    })?;

    // Editors often replace the file instead of writing in place, so the
    // parent directory is watched and events are filtered by name.
    let dir = match file.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    watcher.watch(dir, RecursiveMode::NonRecursive)?;

    println!("[letter_counter] Watching {} ...", file.display());
    if on_event().is_break() {
        return Ok(());
    }

    let debounce_interval = config.watch_interval;

    while let Ok(event) = rx.recv() {
        if !event.paths.iter().any(|p| p.file_name() == file.file_name()) {
            continue;
        }
        debug!("change detected: {:?}", event.kind);

        // Debounce
        std::thread::sleep(debounce_interval);
        // Drain
        while rx.try_recv().is_ok() {}

        if on_event().is_break() {
            break;
        }
    }

    Ok(())
}
