//! Terminal stand-in for the world-map rendering collaborator.

use epimap_render::{ChoroplethMap, ColorAssignment};

/// Tracks what a real map renderer would currently be painting: the fills
/// applied on top of the default, and the date label.
#[derive(Debug, Default)]
pub struct TerminalMap {
    colors: ColorAssignment,
    date_label: Option<String>,
}

impl TerminalMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Countries currently painted over the default fill.
    pub fn colors(&self) -> &ColorAssignment {
        &self.colors
    }

    pub fn date_label(&self) -> Option<&str> {
        self.date_label.as_deref()
    }
}

impl ChoroplethMap for TerminalMap {
    fn apply(&mut self, colors: &ColorAssignment) {
        for (code, color) in colors {
            self.colors.insert(code.clone(), *color);
        }
    }

    fn reset(&mut self) {
        self.colors.clear();
    }

    fn set_date_label(&mut self, label: &str) {
        self.date_label = Some(label.to_string());
    }
}
