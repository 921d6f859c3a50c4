//! Interface to the world-map rendering collaborator.

use crate::color::ColorAssignment;

/// A choropleth world map.
///
/// `apply` paints the given countries on top of the current fills, leaving
/// every other region untouched; `reset` returns all regions to
/// [`crate::color::DEFAULT_FILL`]. Implementations live at the edges: the
/// CLI draws to the terminal, tests record the calls.
pub trait ChoroplethMap {
    fn apply(&mut self, colors: &ColorAssignment);
    fn reset(&mut self);
    fn set_date_label(&mut self, label: &str);
}
