//! Table and JSON rendering of command results.

use anyhow::{Context, Result};
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use rxmatch_model::{
    CrossCheckReport, InteractionSet, MatchResult, MedicationResolution, Severity,
};
use serde::Serialize;

const MISSING: &str = "-";

pub fn to_json<T: Serialize + ?Sized>(value: &T) -> Result<String> {
    serde_json::to_string_pretty(value).context("serialize output")
}

pub fn render_match(query: &str, result: &MatchResult, styled: bool) -> String {
    let Some(found) = result else {
        return format!("No catalog entry matches '{query}'.");
    };
    let mut table = new_table(styled);
    table.set_header(vec![
        header_cell("Query"),
        header_cell("Match"),
        header_cell("Reference"),
        header_cell("Distance"),
        header_cell("Similarity"),
    ]);
    align_column(&mut table, 3, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    table.add_row(vec![
        Cell::new(query),
        Cell::new(found.name()).add_attribute(Attribute::Bold),
        Cell::new(found.reference()),
        Cell::new(found.distance),
        Cell::new(format!("{:.0}%", found.similarity * 100.0)),
    ]);
    table.to_string()
}

pub fn render_medications(resolution: &MedicationResolution, styled: bool) -> String {
    let mut table = new_table(styled);
    table.set_header(vec![
        header_cell("Input"),
        header_cell("Drug"),
        header_cell("Reference"),
    ]);
    for found in &resolution.valid_drugs {
        table.add_row(vec![
            Cell::new(&found.input),
            Cell::new(&found.drug_name).fg(Color::Green),
            Cell::new(&found.reference),
        ]);
    }
    for missing in &resolution.not_found_drugs {
        table.add_row(vec![
            Cell::new(missing),
            Cell::new("not found").fg(Color::Red),
            Cell::new(MISSING),
        ]);
    }
    table.to_string()
}

pub fn render_interactions(drug: &str, set: &InteractionSet, styled: bool) -> String {
    if set.is_empty() {
        return format!("No interactions recorded for '{drug}'.");
    }
    let mut table = new_table(styled);
    table.set_header(vec![
        header_cell("Interaction"),
        header_cell("Severity"),
        header_cell("Professional"),
        header_cell("Patient"),
    ]);
    for record in set.knowns().chain(set.unknowns()) {
        table.add_row(vec![
            Cell::new(record.name()),
            severity_cell(record.severity(), &record.fragment.label),
            Cell::new(record.professional_description.as_deref().unwrap_or(MISSING)),
            Cell::new(record.patient_description.as_deref().unwrap_or(MISSING)),
        ]);
    }
    format!(
        "{table}\n{} known, {} unknown",
        set.known_count(),
        set.unknown_count()
    )
}

pub fn render_cross_check(report: &CrossCheckReport, styled: bool) -> String {
    if !report.has_interactions() {
        return format!(
            "No interactions with '{}' found.",
            report.prescribed_drug
        );
    }
    let mut table = new_table(styled);
    table.set_header(vec![
        header_cell("Drug"),
        header_cell("Interaction"),
        header_cell("Severity"),
        header_cell("Professional"),
        header_cell("Patient"),
    ]);
    for hit in &report.interactions {
        table.add_row(vec![
            Cell::new(&hit.drug),
            Cell::new(&hit.interaction),
            severity_cell(hit.severity, &hit.label),
            Cell::new(hit.professional_description.as_deref().unwrap_or(MISSING)),
            Cell::new(hit.patient_description.as_deref().unwrap_or(MISSING)),
        ]);
    }
    table.to_string()
}

fn new_table(styled: bool) -> Table {
    let mut table = Table::new();
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
    if styled {
        table.enforce_styling();
    } else {
        table.force_no_tty();
    }
    table
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn severity_cell(severity: Severity, label: &str) -> Cell {
    match severity {
        Severity::Major => Cell::new(label)
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        Severity::Moderate => Cell::new(label).fg(Color::Yellow),
        Severity::Minor => Cell::new(label).fg(Color::Green),
        Severity::Unknown => Cell::new(label).fg(Color::DarkGrey),
    }
}
