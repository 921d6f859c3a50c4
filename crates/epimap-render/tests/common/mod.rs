//! Shared test doubles for the render crate.

use epimap_model::{CodeTable, CountryCode};
use epimap_render::{ChoroplethMap, ColorAssignment};

/// Everything the map collaborator was asked to do, in order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MapEvent {
    Reset,
    Label(String),
    Apply(ColorAssignment),
}

/// A [`ChoroplethMap`] that records its calls.
#[derive(Debug, Default)]
pub struct RecordingMap {
    pub events: Vec<MapEvent>,
}

impl RecordingMap {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn last_apply(&self) -> Option<&ColorAssignment> {
        self.events.iter().rev().find_map(|event| match event {
            MapEvent::Apply(colors) => Some(colors),
            _ => None,
        })
    }

    pub fn last_label(&self) -> Option<&str> {
        self.events.iter().rev().find_map(|event| match event {
            MapEvent::Label(label) => Some(label.as_str()),
            _ => None,
        })
    }
}

impl ChoroplethMap for RecordingMap {
    fn apply(&mut self, colors: &ColorAssignment) {
        self.events.push(MapEvent::Apply(colors.clone()));
    }

    fn reset(&mut self) {
        self.events.push(MapEvent::Reset);
    }

    fn set_date_label(&mut self, label: &str) {
        self.events.push(MapEvent::Label(label.to_string()));
    }
}

pub fn code(raw: &str) -> CountryCode {
    CountryCode::parse(raw).expect("valid code")
}

pub fn table(pairs: &[(&str, &str)]) -> CodeTable {
    pairs
        .iter()
        .map(|(name, raw)| ((*name).to_string(), code(raw)))
        .collect()
}
