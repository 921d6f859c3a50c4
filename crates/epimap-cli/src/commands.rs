//! Subcommand implementations.

use std::thread;

use anyhow::{Context, Result, bail};
use chrono::Local;
use tracing::info;

use epimap_ingest::{EndpointConfig, FeedSource, HttpFeedSource};
use epimap_model::CaseRecord;
use epimap_reconcile::{build_code_table, date_key, default_overrides};
use epimap_render::{FRAME_INTERVAL, PlaybackScheduler, SelectionController, SelectionOutcome};
use epimap_session::{Session, initialize_session};

use crate::cli::{LookupArgs, PlaybackArgs, SnapshotArgs};
use crate::summary::{selection_table, snapshot_table};
use crate::terminal::TerminalMap;

fn feed_source(config: EndpointConfig) -> Result<HttpFeedSource> {
    info!(base_url = %config.base_url, "epimap starting");
    HttpFeedSource::new(config).context("construct feed client")
}

fn load_session(config: EndpointConfig) -> Result<Session> {
    let source = feed_source(config)?;
    initialize_session(&source)
}

/// Today's date in the same `M/D/YY` form the series keys use.
fn current_date_label() -> String {
    date_key(Local::now().date_naive())
}

pub fn run_snapshot(config: EndpointConfig, args: &SnapshotArgs) -> Result<()> {
    let session = load_session(config)?;

    let mut records: Vec<&CaseRecord> = session.cases.values().collect();
    records.sort_by(|a, b| {
        (b.confirmed, b.deaths)
            .cmp(&(a.confirmed, a.deaths))
            .then_with(|| a.country.cmp(&b.country))
    });
    if let Some(limit) = args.limit {
        records.truncate(limit);
    }

    println!("Situation on {}", current_date_label());
    println!("{}", snapshot_table(&records, &session.colors));
    Ok(())
}

pub fn run_countries(config: EndpointConfig) -> Result<()> {
    // Only the countries feed is needed for the name listing.
    let source = feed_source(config)?;
    let countries = source.countries().context("fetch countries feed")?;
    let codes = build_code_table(&countries, &default_overrides());
    for name in codes.names() {
        println!("{name}");
    }
    Ok(())
}

pub fn run_lookup(config: EndpointConfig, args: &LookupArgs) -> Result<()> {
    let session = load_session(config)?;
    let view = session.selection_view();

    let mut scheduler = PlaybackScheduler::new();
    let mut map = TerminalMap::new();
    let mut controller = SelectionController::new();

    for name in &args.names {
        match controller.select(name, &view, &mut scheduler, &mut map) {
            SelectionOutcome::Unresolved => println!("{name}: no such country"),
            SelectionOutcome::Deselected => println!("{name}: deselected"),
            SelectionOutcome::Selected => {
                println!("{name}: highlighted {} countries", map.colors().len());
            }
        }
    }

    if !controller.rows().is_empty() {
        println!("{}", selection_table(controller.rows()));
    }
    Ok(())
}

pub fn run_playback(config: EndpointConfig, args: &PlaybackArgs) -> Result<()> {
    let session = load_session(config)?;
    if session.confirmed.is_empty() {
        bail!("historical series is empty, nothing to replay");
    }
    let data = session.playback_data();

    let mut scheduler = PlaybackScheduler::new();
    let mut map = TerminalMap::new();

    scheduler.toggle(&data, &mut map);
    print_frame(&map);

    let mut rendered = 1usize;
    while scheduler.is_playing() && args.frames.is_none_or(|limit| rendered < limit) {
        thread::sleep(FRAME_INTERVAL);
        scheduler.tick(&data, &mut map);
        print_frame(&map);
        rendered += 1;
    }
    Ok(())
}

fn print_frame(map: &TerminalMap) {
    println!(
        "{:>8}  {} countries colored",
        map.date_label().unwrap_or("-"),
        map.colors().len()
    );
}
