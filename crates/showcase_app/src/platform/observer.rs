//! Simulated visibility primitive for the end-of-list anchor.
//!
//! Plays the part an intersection observer plays in a browser: once asked to
//! observe, it reports the anchor's visibility at the next layout pass and
//! then on every change, tagging each report with the generation it was
//! started for.

use showcase_core::Msg;
use showcase_logging::{showcase_debug, showcase_trace};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
struct Watch {
    generation: u64,
    last_reported: Option<bool>,
}

#[derive(Debug, Default)]
pub struct AnchorObserver {
    watch: Option<Watch>,
}

impl AnchorObserver {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_observing(&self) -> bool {
        self.watch.is_some()
    }

    pub fn observe(&mut self, generation: u64) {
        if let Some(previous) = self.watch {
            showcase_debug!("Observation {} replaced", previous.generation);
        }
        self.watch = Some(Watch {
            generation,
            last_reported: None,
        });
    }

    pub fn disconnect(&mut self) {
        if let Some(watch) = self.watch.take() {
            showcase_debug!("Observation {} disconnected", watch.generation);
        }
    }

    /// Feeds the anchor visibility after a layout pass and returns the
    /// report to deliver, if any. `None` means the anchor is not mounted.
    pub fn on_layout(&mut self, anchor_visible: Option<bool>) -> Option<Msg> {
        let watch = self.watch.as_mut()?;
        let visible = anchor_visible?;
        if watch.last_reported == Some(visible) {
            return None;
        }
        watch.last_reported = Some(visible);
        showcase_trace!(
            "Anchor visibility {} (generation {})",
            visible,
            watch.generation
        );
        Some(Msg::AnchorVisibility {
            generation: watch.generation,
            visible,
        })
    }
}

impl Drop for AnchorObserver {
    fn drop(&mut self) {
        self.disconnect();
    }
}
