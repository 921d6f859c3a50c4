//! Deterministic, cancellable playback over a reconstructed series.
//!
//! The scheduler owns nothing but its state machine; the series, lookup
//! table and map are passed into every call, and no wall clock exists in
//! here. A driver (the CLI loop) calls [`PlaybackScheduler::tick`] at the
//! playback cadence; tests call it directly.

use std::time::Duration;

use tracing::{debug, trace};

use epimap_model::{CodeTable, Series, strip_qualifier};

use crate::color::{ColorAssignment, encode};
use crate::map::ChoroplethMap;

/// Cadence a driver should tick at: one rendered frame per second.
pub const FRAME_INTERVAL: Duration = Duration::from_millis(1000);

/// Everything a frame is rendered from.
#[derive(Debug, Clone, Copy)]
pub struct PlaybackData<'a> {
    pub confirmed: &'a Series,
    pub deaths: &'a Series,
    pub codes: &'a CodeTable,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
enum State {
    #[default]
    Idle,
    Playing,
}

/// Two-state stepper replaying a series onto the map.
///
/// At most one playback is ever active: anything that starts a new pass or
/// interrupts (selection does) goes through `stop`, which is the whole
/// cancellation contract.
#[derive(Debug, Default)]
pub struct PlaybackScheduler {
    state: State,
    cursor: usize,
}

impl PlaybackScheduler {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn is_playing(&self) -> bool {
        self.state == State::Playing
    }

    /// Begins playback from the first date and renders frame 0 immediately.
    /// No-op while already playing.
    pub fn start(&mut self, data: &PlaybackData<'_>, map: &mut dyn ChoroplethMap) {
        if self.state == State::Playing {
            return;
        }
        debug!(frames = data.confirmed.len(), "starting playback");
        map.reset();
        self.cursor = 0;
        self.state = State::Playing;
        self.tick(data, map);
    }

    /// Cancels playback and returns the map to the default fill.
    /// No-op while idle.
    pub fn stop(&mut self, map: &mut dyn ChoroplethMap) {
        if self.state == State::Playing {
            debug!("stopping playback");
            self.state = State::Idle;
            map.reset();
        }
    }

    /// The single externally exposed control: pause if playing, otherwise
    /// behave as [`Self::start`].
    pub fn toggle(&mut self, data: &PlaybackData<'_>, map: &mut dyn ChoroplethMap) {
        match self.state {
            State::Playing => self.stop(map),
            State::Idle => self.start(data, map),
        }
    }

    /// Renders the frame at the cursor and advances one date.
    ///
    /// Past the last date the cursor wraps to the first and the map resets;
    /// playback loops until told to stop. Countries whose confirmed and
    /// deaths counts are both zero stay at the default fill.
    pub fn tick(&mut self, data: &PlaybackData<'_>, map: &mut dyn ChoroplethMap) {
        if self.state != State::Playing {
            return;
        }
        if self.cursor >= data.confirmed.len() {
            map.reset();
            self.cursor = 0;
        }
        let Some((date, snapshot)) = data.confirmed.entry(self.cursor) else {
            return;
        };

        let deaths_snapshot = data.deaths.get(date);
        let mut frame = ColorAssignment::new();
        for (name, confirmed) in snapshot.iter() {
            let deaths = deaths_snapshot
                .and_then(|snapshot| snapshot.get(name))
                .unwrap_or(0);
            if confirmed.saturating_add(deaths) == 0 {
                continue;
            }
            let Some(code) = data.codes.resolve(strip_qualifier(name)) else {
                trace!(name, date, "snapshot country does not resolve");
                continue;
            };
            frame.insert(code.clone(), encode(confirmed, deaths));
        }

        map.set_date_label(date);
        map.apply(&frame);
        self.cursor += 1;
    }
}
