//! User selection: highlight a country with its neighbours and keep the
//! stats table rows in sync.

use tracing::debug;

use epimap_model::{AdjacencyMap, CaseMap, CodeTable, CountryCode};

use crate::color::ColorAssignment;
use crate::map::ChoroplethMap;
use crate::playback::PlaybackScheduler;

/// Read-only session state a selection is resolved against.
#[derive(Debug, Clone, Copy)]
pub struct SelectionView<'a> {
    pub codes: &'a CodeTable,
    pub cases: &'a CaseMap,
    pub adjacency: &'a AdjacencyMap,
    pub colors: &'a ColorAssignment,
}

/// Counts shown in a populated table row.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RowStats {
    pub confirmed: u64,
    pub deaths: u64,
    pub recovered: u64,
}

/// One stats-table row. `stats` is `None` for a country that resolves but
/// has no case record; the view renders placeholder dashes for it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct TableRow {
    pub country: String,
    pub stats: Option<RowStats>,
}

/// What a [`SelectionController::select`] call did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SelectionOutcome {
    /// The name had no canonical code; nothing changed.
    Unresolved,
    /// The country was already selected and has been toggled off.
    Deselected,
    /// The country was selected and highlighted.
    Selected,
}

/// Tracks the active selection and its table rows.
///
/// Thin composition over the resolver, adjacency and color outputs: no new
/// algorithms live here.
#[derive(Debug, Default)]
pub struct SelectionController {
    selected: Vec<CountryCode>,
    rows: Vec<TableRow>,
}

impl SelectionController {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selected codes in selection order.
    pub fn selected(&self) -> &[CountryCode] {
        &self.selected
    }

    /// Table rows, most recent selection first.
    pub fn rows(&self) -> &[TableRow] {
        &self.rows
    }

    /// Handles a user-entered country name.
    ///
    /// An unresolvable name is a no-op. Re-selecting a selected country
    /// toggles it off and rebuilds the table from the remaining selection
    /// in reverse-sorted name order. Otherwise the country and its colored
    /// neighbours are highlighted on an otherwise reset map (stopping any
    /// running playback first), and a row is prepended to the table.
    pub fn select(
        &mut self,
        name: &str,
        view: &SelectionView<'_>,
        scheduler: &mut PlaybackScheduler,
        map: &mut dyn ChoroplethMap,
    ) -> SelectionOutcome {
        let Some(code) = view.codes.resolve(name).cloned() else {
            debug!(name, "selection does not resolve to a code");
            return SelectionOutcome::Unresolved;
        };

        if let Some(position) = self.selected.iter().position(|selected| *selected == code) {
            self.selected.remove(position);
            self.rebuild_rows(view);
            debug!(code = %code, "selection toggled off");
            return SelectionOutcome::Deselected;
        }

        let mut highlight = ColorAssignment::new();
        if let Some(color) = view.colors.get(&code) {
            highlight.insert(code.clone(), *color);
        }
        for neighbour in view.adjacency.neighbours(&code) {
            if let Some(color) = view.colors.get(neighbour) {
                highlight.insert(neighbour.clone(), *color);
            }
        }

        scheduler.stop(map);
        map.reset();
        map.apply(&highlight);

        if let Some(row) = table_row(&code, view) {
            self.rows.insert(0, row);
        }
        debug!(code = %code, highlighted = highlight.len(), "selection highlighted");
        self.selected.push(code);
        SelectionOutcome::Selected
    }

    fn rebuild_rows(&mut self, view: &SelectionView<'_>) {
        let mut named: Vec<(String, CountryCode)> = self
            .selected
            .iter()
            .filter_map(|code| display_name(code, view).map(|name| (name, code.clone())))
            .collect();
        named.sort();
        named.reverse();
        self.rows = named
            .iter()
            .filter_map(|(_, code)| table_row(code, view))
            .collect();
    }
}

/// Builds the table row for a code: full counts if a case record exists, a
/// name-only row if the code is merely known, nothing otherwise.
pub fn table_row(code: &CountryCode, view: &SelectionView<'_>) -> Option<TableRow> {
    if let Some(record) = view.cases.get(code) {
        Some(TableRow {
            country: record.country.clone(),
            stats: Some(RowStats {
                confirmed: record.confirmed,
                deaths: record.deaths,
                recovered: record.recovered,
            }),
        })
    } else {
        view.codes.name_of(code).map(|name| TableRow {
            country: name.to_string(),
            stats: None,
        })
    }
}

fn display_name(code: &CountryCode, view: &SelectionView<'_>) -> Option<String> {
    view.cases
        .get(code)
        .map(|record| record.country.clone())
        .or_else(|| view.codes.name_of(code).map(str::to_string))
}
