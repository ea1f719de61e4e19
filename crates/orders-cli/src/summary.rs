use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use crate::types::RunResult;

pub fn print_summary(result: &RunResult) {
    println!("Run: {}", result.run_id);
    if result.dry_run {
        println!("Output: skipped (dry run)");
    } else {
        println!("Output: {}", result.output_dir.display());
    }
    if let Some(path) = &result.report_path {
        println!("Cleanse report: {}", path.display());
    }

    let report = &result.report;
    let mut table = Table::new();
    table.set_header(vec![header_cell("Stage"), header_cell("Records")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Raw input"), Cell::new(report.input_count)]);
    table.add_row(vec![
        Cell::new("Duplicates removed"),
        drop_cell(report.duplicates_removed),
    ]);
    table.add_row(vec![
        Cell::new("Dropped: missing mandatory field"),
        drop_cell(report.dropped_missing_mandatory),
    ]);
    table.add_row(vec![
        Cell::new("Dropped: invalid email"),
        drop_cell(report.dropped_invalid_email),
    ]);
    table.add_row(vec![
        Cell::new("Dropped: invalid quantity"),
        drop_cell(report.dropped_invalid_quantity),
    ]);
    table.add_row(vec![
        Cell::new("Dropped: invalid unit price"),
        drop_cell(report.dropped_invalid_unit_price),
    ]);
    table.add_row(vec![
        Cell::new("Clean output")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
        Cell::new(report.output_count)
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if !result.partitions.is_empty() {
        let mut table = Table::new();
        table.set_header(vec![
            header_cell("Status"),
            header_cell("Records"),
            header_cell("Path"),
        ]);
        apply_summary_table_style(&mut table);
        align_column(&mut table, 1, CellAlignment::Right);
        for partition in &result.partitions {
            table.add_row(vec![
                Cell::new(&partition.status)
                    .fg(Color::Blue)
                    .add_attribute(Attribute::Bold),
                Cell::new(partition.records),
                Cell::new(partition.path.display()),
            ]);
        }
        println!();
        println!("Partitions:");
        println!("{table}");
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(120);
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

fn drop_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count).fg(Color::Yellow).add_attribute(Attribute::Bold)
    } else {
        Cell::new(count).fg(Color::DarkGrey)
    }
}
