//! Tests for the playback state machine.

mod common;

use common::{MapEvent, RecordingMap, code, table};

use epimap_model::{CodeTable, Series, Snapshot};
use epimap_render::{PlaybackData, PlaybackScheduler, encode};

fn series(entries: &[(&str, &[(&str, u64)])]) -> Series {
    let mut series = Series::new();
    for (date, counts) in entries {
        let mut snapshot = Snapshot::new();
        for (name, count) in *counts {
            snapshot.add((*name).to_string(), *count);
        }
        series.push((*date).to_string(), snapshot);
    }
    series
}

struct Fixture {
    confirmed: Series,
    deaths: Series,
    codes: CodeTable,
}

impl Fixture {
    fn data(&self) -> PlaybackData<'_> {
        PlaybackData {
            confirmed: &self.confirmed,
            deaths: &self.deaths,
            codes: &self.codes,
        }
    }
}

fn two_day_fixture() -> Fixture {
    Fixture {
        confirmed: series(&[
            ("1/22/20", &[("Finland", 1), ("Sweden", 0)]),
            ("1/23/20", &[("Finland", 2), ("Sweden", 1)]),
        ]),
        deaths: series(&[
            ("1/22/20", &[("Finland", 0), ("Sweden", 0)]),
            ("1/23/20", &[("Finland", 1), ("Sweden", 0)]),
        ]),
        codes: table(&[("Finland", "FIN"), ("Sweden", "SWE")]),
    }
}

#[test]
fn start_renders_frame_zero_immediately() {
    let fixture = two_day_fixture();
    let mut map = RecordingMap::new();
    let mut scheduler = PlaybackScheduler::new();

    scheduler.start(&fixture.data(), &mut map);

    assert!(scheduler.is_playing());
    assert_eq!(map.events[0], MapEvent::Reset);
    assert_eq!(map.last_label(), Some("1/22/20"));
    let frame = map.last_apply().expect("frame applied");
    assert_eq!(frame.get(&code("FIN")), Some(&encode(1, 0)));
}

#[test]
fn zero_activity_countries_stay_at_default_fill() {
    let fixture = two_day_fixture();
    let mut map = RecordingMap::new();
    let mut scheduler = PlaybackScheduler::new();

    scheduler.start(&fixture.data(), &mut map);

    let frame = map.last_apply().expect("frame applied");
    assert!(!frame.contains_key(&code("SWE")));
}

#[test]
fn toggle_twice_returns_to_idle_with_reset_map() {
    let fixture = two_day_fixture();
    let mut map = RecordingMap::new();
    let mut scheduler = PlaybackScheduler::new();

    scheduler.toggle(&fixture.data(), &mut map);
    assert!(scheduler.is_playing());
    scheduler.toggle(&fixture.data(), &mut map);

    assert!(!scheduler.is_playing());
    assert_eq!(map.events.last(), Some(&MapEvent::Reset));

    // Ticks after cancellation render nothing.
    let events = map.events.len();
    scheduler.tick(&fixture.data(), &mut map);
    assert_eq!(map.events.len(), events);
}

#[test]
fn playback_wraps_past_the_last_date() {
    let fixture = two_day_fixture();
    let mut map = RecordingMap::new();
    let mut scheduler = PlaybackScheduler::new();

    scheduler.start(&fixture.data(), &mut map);
    scheduler.tick(&fixture.data(), &mut map);
    assert_eq!(map.last_label(), Some("1/23/20"));

    // Cursor is now past the end; the next tick resets and replays frame 0.
    scheduler.tick(&fixture.data(), &mut map);
    assert!(scheduler.is_playing());
    assert_eq!(map.last_label(), Some("1/22/20"));
    let reset_count = map
        .events
        .iter()
        .filter(|event| **event == MapEvent::Reset)
        .count();
    assert_eq!(reset_count, 2);
}

#[test]
fn deaths_missing_from_snapshot_count_as_zero() {
    let fixture = Fixture {
        confirmed: series(&[("1/22/20", &[("Finland", 3)])]),
        deaths: series(&[("1/22/20", &[])]),
        codes: table(&[("Finland", "FIN")]),
    };
    let mut map = RecordingMap::new();
    let mut scheduler = PlaybackScheduler::new();

    scheduler.start(&fixture.data(), &mut map);

    let frame = map.last_apply().expect("frame applied");
    assert_eq!(frame.get(&code("FIN")), Some(&encode(3, 0)));
}

#[test]
fn qualified_snapshot_names_resolve_through_truncation() {
    let fixture = Fixture {
        confirmed: series(&[("1/22/20", &[("Congo (Kinshasa)", 4)])]),
        deaths: series(&[("1/22/20", &[("Congo (Kinshasa)", 1)])]),
        codes: table(&[("Congo", "COD")]),
    };
    let mut map = RecordingMap::new();
    let mut scheduler = PlaybackScheduler::new();

    scheduler.start(&fixture.data(), &mut map);

    let frame = map.last_apply().expect("frame applied");
    assert_eq!(frame.get(&code("COD")), Some(&encode(4, 1)));
}

#[test]
fn unresolvable_snapshot_names_are_skipped() {
    let fixture = Fixture {
        confirmed: series(&[("1/22/20", &[("Atlantis", 5)])]),
        deaths: series(&[("1/22/20", &[("Atlantis", 1)])]),
        codes: table(&[("Finland", "FIN")]),
    };
    let mut map = RecordingMap::new();
    let mut scheduler = PlaybackScheduler::new();

    scheduler.start(&fixture.data(), &mut map);

    let frame = map.last_apply().expect("frame applied");
    assert!(frame.is_empty());
}
