//! Table construction for the terminal surfaces.

use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use epimap_model::CaseRecord;
use epimap_render::{ColorAssignment, DEFAULT_FILL, HslColor, TableRow};

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell(value: impl ToString) -> Cell {
    Cell::new(value.to_string()).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// Worldwide snapshot table: one row per country with case data, most
/// affected first.
pub fn snapshot_table(records: &[&CaseRecord], colors: &ColorAssignment) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Country"),
        header_cell("Confirmed"),
        header_cell("Deaths"),
        header_cell("Recovered"),
        header_cell("Color"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for record in records {
        let color = colors
            .get(&record.code)
            .map_or_else(|| DEFAULT_FILL.to_string(), HslColor::to_string);
        table.add_row(vec![
            Cell::new(&record.country),
            Cell::new(record.confirmed),
            Cell::new(record.deaths),
            Cell::new(record.recovered),
            Cell::new(color),
        ]);
    }
    table
}

/// Selection stats table, mirroring the search widget's table: full counts
/// when a case record exists, dashes for resolvable-but-caseless countries.
pub fn selection_table(rows: &[TableRow]) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Country"),
        header_cell("Confirmed"),
        header_cell("Deaths"),
        header_cell("Recovered"),
    ]);
    apply_table_style(&mut table);
    for index in 1..=3 {
        align_column(&mut table, index, CellAlignment::Right);
    }
    for row in rows {
        match row.stats {
            Some(stats) => table.add_row(vec![
                Cell::new(&row.country),
                Cell::new(stats.confirmed),
                Cell::new(stats.deaths),
                Cell::new(stats.recovered),
            ]),
            None => table.add_row(vec![
                Cell::new(&row.country),
                dim_cell("-"),
                dim_cell("-"),
                dim_cell("-"),
            ]),
        };
    }
    table
}
