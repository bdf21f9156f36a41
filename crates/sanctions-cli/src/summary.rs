use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use sanctions_cli::pipeline::RunResult;
use sanctions_model::DobPrecision;
use sanctions_validate::Severity;

const PRECISIONS: [DobPrecision; 5] = [
    DobPrecision::FullDate,
    DobPrecision::MonthYearOnly,
    DobPrecision::YearOnly,
    DobPrecision::Missing,
    DobPrecision::UnknownFailed,
];

pub fn print_summary(result: &RunResult) {
    println!("Input: {}", result.input.display());
    match &result.output {
        Some(path) => println!("Output: {}", path.display()),
        None => println!("Output: (dry run, not written)"),
    }
    print_stage_table(result);
    print_count_table(result);
    println!();
    println!("{}", result.report.render());
}

fn print_stage_table(result: &RunResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("#"), header_cell("Stage"), header_cell("ms")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    let mut total_ms = 0u128;
    for stage in &result.stages {
        total_ms += stage.duration_ms;
        table.add_row(vec![
            dim_cell(stage.number),
            Cell::new(stage.name),
            Cell::new(stage.duration_ms),
        ]);
    }
    table.add_row(vec![
        dim_cell("-"),
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(total_ms).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");
}

fn print_count_table(result: &RunResult) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Measure"), header_cell("Count")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);

    table.add_row(vec![Cell::new("Source rows"), Cell::new(result.source_rows)]);
    table.add_row(vec![
        Cell::new("Entities")
            .fg(Color::Blue)
            .add_attribute(Attribute::Bold),
        Cell::new(result.entity_count).add_attribute(Attribute::Bold),
    ]);
    for precision in PRECISIONS {
        table.add_row(vec![
            Cell::new(format!("DOB: {precision}")),
            count_cell(result.dob.count(precision), precision_color(precision)),
        ]);
    }
    table.add_row(vec![
        Cell::new("Country cells emptied"),
        count_cell(result.emptied_countries, Color::Yellow),
    ]);
    table.add_row(vec![
        Cell::new("Rows without a name"),
        count_cell(result.unnamed_rows, Color::Yellow),
    ]);
    for conversion in &result.cleaning.dates {
        table.add_row(vec![
            Cell::new(format!("{}: unparseable", conversion.column)),
            count_cell(conversion.failed, Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("Quality gate failures"),
        count_cell(result.report.count(Severity::Fail), Color::Red),
    ]);
    table.add_row(vec![
        Cell::new("Quality gate warnings"),
        count_cell(result.report.count(Severity::Warn), Color::Yellow),
    ]);
    println!("{table}");
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
        .set_width(80);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn precision_color(precision: DobPrecision) -> Color {
    match precision {
        DobPrecision::UnknownFailed => Color::Red,
        DobPrecision::Missing => Color::Yellow,
        _ => Color::Green,
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
