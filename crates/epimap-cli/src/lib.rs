//! CLI library components for the outbreak atlas.

pub mod logging;
