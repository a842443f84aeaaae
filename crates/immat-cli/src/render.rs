//! Terminal tables and JSON output.

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use immat_core::{PlateCategory, PlateScheme};
use serde::Serialize;

use crate::report::{CheckReport, CheckedPlate};

/// Rows shown in the rejected-plates table of a batch run.
pub const MAX_REJECTED_ROWS: usize = 20;

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

/// One row per plate.
pub fn plates_table<'a>(plates: impl IntoIterator<Item = &'a CheckedPlate>) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Line"),
        header_cell("Input"),
        header_cell("Formatted"),
        header_cell("Scheme"),
        header_cell("Categories"),
        header_cell("Result"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    for plate in plates {
        let classification = &plate.classification;
        let categories = classification
            .categories
            .iter()
            .map(PlateCategory::label)
            .collect::<Vec<_>>()
            .join(", ");
        table.add_row(vec![
            plate.line.map_or_else(|| dim_cell("-"), Cell::new),
            Cell::new(format!("{:?}", classification.input)),
            Cell::new(&classification.formatted),
            classification
                .scheme
                .map_or_else(|| dim_cell("-"), |scheme| Cell::new(scheme.label())),
            if categories.is_empty() {
                dim_cell("-")
            } else {
                Cell::new(categories)
            },
            verdict_cell(plate.accepted),
        ]);
    }
    table
}

/// Per-category counts for a report.
pub fn counts_table(report: &CheckReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Category"),
        header_cell("Scheme"),
        header_cell("Plates"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    for category in PlateCategory::all() {
        let count = report.count_for(*category);
        table.add_row(vec![
            Cell::new(category.label()),
            Cell::new(category.scheme().label()),
            count_cell(count, Color::Green),
        ]);
    }
    table.add_row(vec![
        Cell::new("Invalid")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        count_cell(
            report
                .plates
                .iter()
                .filter(|plate| !plate.classification.valid)
                .count(),
            Color::Red,
        ),
    ]);
    table
}

/// Every supported category.
pub fn categories_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Code"),
        header_cell("Category"),
        header_cell("Scheme"),
        header_cell("Description"),
    ]);
    apply_table_style(&mut table);
    for scheme in PlateScheme::all() {
        for category in scheme.categories() {
            table.add_row(vec![
                Cell::new(category.as_str())
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold),
                Cell::new(category.label()),
                Cell::new(scheme.label()),
                Cell::new(category.description()),
            ]);
        }
    }
    table
}

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serialize JSON output")
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn verdict_cell(accepted: bool) -> Cell {
    if accepted {
        Cell::new("ok").fg(Color::Green)
    } else {
        Cell::new("rejected")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold)
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}
