//! Replay a gesture script against a label file.
//!
//! ```text
//! labelview <labels.json> <gestures.json> [--write]
//! ```
//!
//! Prints the final overlay markup to stderr and the updated labels as JSON
//! to stdout. With `--write` the label file is updated in place.

use anyhow::{Context, Result};
use std::path::PathBuf;

use labelview::replay::{GestureScript, replay};
use labelview::{ColorRegistry, LabelStore, LabelViewer, SharedColorRegistry, ViewerSettings, logging};

fn main() -> Result<()> {
    let settings = ViewerSettings::load();
    logging::init(Some(&settings.log_filter));

    let args: Vec<String> = std::env::args().skip(1).collect();
    let write_back = args.iter().any(|a| a == "--write");
    let paths: Vec<PathBuf> = args
        .iter()
        .filter(|a| !a.starts_with("--"))
        .map(PathBuf::from)
        .collect();
    let [labels_path, script_path] = paths.as_slice() else {
        eprintln!("usage: labelview <labels.json> <gestures.json> [--write]");
        std::process::exit(2);
    };

    let mut store = LabelStore::load(labels_path)
        .with_context(|| format!("loading labels from {}", labels_path.display()))?;
    let script = GestureScript::load(script_path)
        .with_context(|| format!("loading gestures from {}", script_path.display()))?;

    let palette = settings.palette_colors().unwrap_or_default();
    let colors = SharedColorRegistry::new(ColorRegistry::new(palette));
    let mut viewer = LabelViewer::with_settings(store.props(None), colors, &settings);

    let outcomes = replay(&mut viewer, &mut store, &script);
    let commits = outcomes.iter().filter(|o| o.is_commit()).count();
    tracing::info!(events = outcomes.len(), commits, "Replay finished");

    eprint!("{}", viewer.render().to_markup());
    println!("{}", serde_json::to_string_pretty(&store.to_file())?);

    if write_back && store.is_dirty() {
        store
            .save(labels_path)
            .with_context(|| format!("saving labels to {}", labels_path.display()))?;
    }
    Ok(())
}
