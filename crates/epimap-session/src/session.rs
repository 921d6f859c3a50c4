//! Session initialization and the reconciled context object.

use anyhow::{Context, Result};
use tracing::info;

use epimap_ingest::FeedSource;
use epimap_model::{AdjacencyMap, CaseMap, CodeTable, Metric, Series};
use epimap_reconcile::{
    build_adjacency, build_code_table, default_overrides, map_cases, reconstruct,
};
use epimap_render::{ColorAssignment, PlaybackData, SelectionView, assign_colors};

/// Everything derived from the feeds for one session.
///
/// Built once by [`initialize_session`] and immutable afterwards; playback
/// and selection borrow from it and keep their own state elsewhere.
#[derive(Debug)]
pub struct Session {
    pub codes: CodeTable,
    pub cases: CaseMap,
    pub adjacency: AdjacencyMap,
    pub confirmed: Series,
    pub deaths: Series,
    pub colors: ColorAssignment,
}

impl Session {
    /// Borrowed inputs for the playback scheduler.
    pub fn playback_data(&self) -> PlaybackData<'_> {
        PlaybackData {
            confirmed: &self.confirmed,
            deaths: &self.deaths,
            codes: &self.codes,
        }
    }

    /// Borrowed inputs for the selection controller.
    pub fn selection_view(&self) -> SelectionView<'_> {
        SelectionView {
            codes: &self.codes,
            cases: &self.cases,
            adjacency: &self.adjacency,
            colors: &self.colors,
        }
    }

    /// All resolvable display names, sorted, for search-completion surfaces.
    pub fn country_names(&self) -> Vec<&str> {
        self.codes.names().collect()
    }
}

/// Loads the feeds in dependency order and reconciles them.
///
/// The countries feed must be reconciled before cases and neighbours,
/// since both are re-keyed through the code table; the historical series
/// loads last. Each stage is a pure function over the previous stages'
/// output, so a failed fetch leaves nothing half-built.
pub fn initialize_session(source: &dyn FeedSource) -> Result<Session> {
    let countries = source.countries().context("fetch countries feed")?;
    let codes = build_code_table(&countries, &default_overrides());
    info!(names = codes.len(), "code table ready");

    let cases_feed = source.cases().context("fetch cases feed")?;
    let cases = map_cases(&cases_feed, &codes);
    info!(countries = cases.len(), "case map ready");

    let neighbours = source.neighbours().context("fetch neighbours feed")?;
    let adjacency = build_adjacency(&neighbours);
    info!(countries = adjacency.len(), "adjacency map ready");

    let colors = assign_colors(&cases);

    let history = source.timeseries().context("fetch historical series feed")?;
    let confirmed =
        reconstruct(&history, Metric::Confirmed).context("reconstruct confirmed series")?;
    let deaths = reconstruct(&history, Metric::Deaths).context("reconstruct deaths series")?;
    info!(
        days = confirmed.len(),
        from = confirmed.first_date().unwrap_or("-"),
        "historical series ready"
    );

    Ok(Session {
        codes,
        cases,
        adjacency,
        confirmed,
        deaths,
        colors,
    })
}
