use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use attrgen_cli::types::GenerateResult;
use attrgen_output::SpliceReport;

pub fn print_summary(result: &GenerateResult) {
    if result.dry_run {
        println!("Dry run: nothing was written");
        println!("API version would become {}", result.version);
    } else {
        println!("API version {}", result.version);
    }
    println!("Schema: {}", result.schema.display());

    let mut table = Table::new();
    table.set_header(vec![header_cell("Item"), header_cell("Value")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    table.add_row(vec![Cell::new("Project"), Cell::new(&result.project)]);
    table.add_row(vec![
        Cell::new("API total attributes"),
        Cell::new(result.api_total),
    ]);
    table.add_row(vec![
        Cell::new("Project attributes"),
        Cell::new(result.project_count),
    ]);
    table.add_row(vec![Cell::new("Maximum id"), Cell::new(result.max_id)]);
    table.add_row(vec![
        Cell::new("Method enums"),
        Cell::new(result.method_enums),
    ]);
    table.add_row(vec![
        Cell::new("Duplicate check"),
        duplicate_cell(result.duplicates_clean),
    ]);
    println!("{table}");

    println!("Available ids: {}", format_ids(&result.available_ids));
    print_files(&result.files);
}

fn print_files(files: &[SpliceReport]) {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Regions"),
        header_cell("Filled"),
        header_cell("Changed"),
        header_cell("Written"),
    ]);
    apply_summary_table_style(&mut table);
    for index in 1..=4 {
        align_column(&mut table, index, CellAlignment::Center);
    }
    for file in files {
        table.add_row(vec![
            Cell::new(file.path.display()),
            Cell::new(file.regions),
            Cell::new(file.filled),
            flag_cell(file.changed),
            flag_cell(file.written),
        ]);
    }
    println!("{table}");
}

fn format_ids(ids: &[u32]) -> String {
    if ids.is_empty() {
        return "none".to_string();
    }
    ids.iter()
        .map(u32::to_string)
        .collect::<Vec<_>>()
        .join(", ")
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

fn duplicate_cell(clean: bool) -> Cell {
    if clean {
        Cell::new("ok").fg(Color::Green)
    } else {
        Cell::new("duplicates")
            .fg(Color::Yellow)
            .add_attribute(Attribute::Bold)
    }
}

fn flag_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("✓")
            .fg(Color::Green)
            .add_attribute(Attribute::Bold)
    } else {
        Cell::new("-").add_attribute(Attribute::Dim)
    }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}
