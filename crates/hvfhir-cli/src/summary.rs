use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use hvfhir_cli::pipeline::{ConvertResult, ThingOutcome};

pub fn print_summary(result: &ConvertResult) {
    eprintln!("Input: {}", result.input.display());
    match (&result.output, result.written) {
        (Some(path), true) => eprintln!("Output: {}", path.display()),
        (None, true) => eprintln!("Output: stdout"),
        (_, false) => eprintln!("Output: not written (conversion errors)"),
    }
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Kind"),
        header_cell("Components"),
        header_cell("Extensions"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 3, CellAlignment::Right);
    for outcome in &result.outcomes {
        table.add_row(vec![
            Cell::new(outcome.index),
            Cell::new(outcome.kind.display()),
            count_cell(outcome, outcome.components),
            count_cell(outcome, outcome.extensions),
            status_cell(outcome),
        ]);
    }
    eprintln!("{table}");
    let errors = result.error_count();
    if errors > 0 {
        eprintln!("Errors:");
        for outcome in result.outcomes.iter() {
            if let Some(error) = &outcome.error {
                eprintln!("- #{}: {error}", outcome.index);
            }
        }
    }
}

pub fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
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

fn count_cell(outcome: &ThingOutcome, count: usize) -> Cell {
    if outcome.error.is_some() {
        dim_cell("-")
    } else {
        Cell::new(count)
    }
}

fn status_cell(outcome: &ThingOutcome) -> Cell {
    match outcome.error {
        Some(_) => Cell::new("ERROR")
            .fg(Color::Red)
            .add_attribute(Attribute::Bold),
        None => Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold),
    }
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
