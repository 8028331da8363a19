//! Support for recording manager events to a file and replaying them later.
//!
//! This is used in development, to reproduce a gesture sequence outside of
//! whatever application was driving the manager.

use std::fs::File;
use std::io::{BufRead, BufReader, Write};
use std::path::Path;

use anyhow::{Context, bail};
use tracing::warn;

use crate::config::Settings;
use crate::manager::{Event, LayoutManager};
use crate::model::Node;

/// File to record incoming events.
#[derive(Debug, Default)]
pub struct Record {
    file: Option<File>,
}

// The format is simple:
// One line for the starting tree, followed by one line per event.

impl Record {
    pub fn none() -> Self {
        Record { file: None }
    }

    /// Records to `path`, overwriting it if it exists.
    pub fn create(path: &Path) -> anyhow::Result<Self> {
        let file = File::create(path)
            .with_context(|| format!("creating trace file {}", path.display()))?;
        Ok(Record { file: Some(file) })
    }

    pub fn is_recording(&self) -> bool {
        self.file.is_some()
    }

    pub(crate) fn start(&mut self, root: Option<&Node>) {
        self.write(&root);
    }

    pub(crate) fn on_event(&mut self, event: &Event) {
        self.write(event);
    }

    fn write(&mut self, value: &impl serde::Serialize) {
        let Some(file) = &mut self.file else { return };
        let result = ron::ser::to_string(value)
            .map_err(anyhow::Error::from)
            .and_then(|line| Ok(writeln!(file, "{line}")?));
        if let Err(e) = result {
            warn!("Stopped recording: {e}");
            self.file = None;
        }
    }
}

/// Rebuilds a manager by replaying the trace at `path`.
pub fn replay(path: &Path, settings: Settings) -> anyhow::Result<LayoutManager> {
    let file = File::open(path).with_context(|| format!("opening trace {}", path.display()))?;
    let mut lines = BufReader::new(file).lines();
    let Some(first) = lines.next() else {
        bail!("{} is empty", path.display());
    };
    let root: Option<Node> = ron::de::from_str(&first?).context("parsing starting tree")?;
    let mut manager = LayoutManager::with_root(settings, root);
    for (idx, line) in lines.enumerate() {
        let line = line?;
        if line.trim().is_empty() {
            continue;
        }
        let event: Event = ron::de::from_str(&line)
            .with_context(|| format!("parsing event on line {}", idx + 2))?;
        let _ = manager.handle(event);
    }
    Ok(manager)
}
