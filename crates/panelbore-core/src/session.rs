//! Baseline panel session
//!
//! The surrounding application keeps one baseline panel per editing
//! session and re-derives every displayed orientation from it. The
//! store follows a single-writer/multiple-reader discipline: transform
//! requests read the baseline, import/new-panel operations replace it.
//! Uses `parking_lot::RwLock`.

use crate::model::Panel;
use crate::transform::{self, Transform};
use parking_lot::RwLock;
use tracing::debug;

/// Holds the baseline panel a session's transforms are derived from.
///
/// Share across threads as `Arc<PanelSession>`; all methods take
/// `&self`.
#[derive(Debug, Default)]
pub struct PanelSession {
    baseline: RwLock<Option<Panel>>,
}

impl PanelSession {
    /// An empty session with no baseline loaded.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when a baseline panel is loaded.
    pub fn is_loaded(&self) -> bool {
        self.baseline.read().is_some()
    }

    /// Replace the baseline. Used at import and on explicit new-panel;
    /// every later view derives from this panel.
    pub fn import(&self, panel: Panel) {
        debug!(name = panel.name(), "replacing session baseline");
        *self.baseline.write() = Some(panel);
    }

    /// Discard the baseline.
    pub fn clear(&self) {
        *self.baseline.write() = None;
    }

    /// A copy of the baseline panel, untransformed.
    pub fn baseline(&self) -> Option<Panel> {
        self.baseline.read().clone()
    }

    /// Derive the panel for the requested orientation.
    ///
    /// Always computed from the baseline, so repeated or alternating
    /// requests never accumulate.
    pub fn view(&self, transform: Transform) -> Option<Panel> {
        self.baseline
            .read()
            .as_ref()
            .map(|panel| transform::apply(panel, transform))
    }
}
