use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::UTF8_FULL;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pricelist_model::{NO_SUPPLIER_BUCKET, SeverityBand};

use pricelist_cli::types::{ConsolidateOutcome, RegroupOutcome, RunOutcome};

pub fn print_run_summary(outcome: &RunOutcome) {
    match outcome {
        RunOutcome::Consolidate(outcome) => print_consolidate_summary(outcome),
        RunOutcome::Regroup(outcome) => print_regroup_summary(outcome),
    }
}

pub fn print_consolidate_summary(outcome: &ConsolidateOutcome) {
    println!(
        "Input: {} ({} documents)",
        outcome.input_dir.display(),
        outcome.documents
    );
    println!("Output: {}", outcome.output.display());

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Supplier"),
        header_cell("Products"),
        header_cell("Priced"),
        header_cell("Check"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    align_column(&mut table, 2, CellAlignment::Right);
    for supplier in &outcome.suppliers {
        let check = if supplier.count_mismatch {
            Cell::new("product count differs").fg(Color::Yellow)
        } else {
            dim_cell("-")
        };
        table.add_row(vec![
            Cell::new(&supplier.name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            Cell::new(supplier.products),
            Cell::new(supplier.priced_products),
            check,
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        Cell::new(outcome.products).add_attribute(Attribute::Bold),
        Cell::new(outcome.products - outcome.unpriced_products).add_attribute(Attribute::Bold),
        dim_cell("-"),
    ]);
    println!("{table}");

    print_band_table(outcome);

    if !outcome.skipped.is_empty() {
        println!();
        println!("Skipped (not a simple price list):");
        for path in &outcome.skipped {
            println!("- {}", path.display());
        }
    }
    if !outcome.failures.is_empty() {
        eprintln!("Errors:");
        for failure in &outcome.failures {
            eprintln!("- {}: {}", failure.path.display(), failure.error);
        }
    }
}

fn print_band_table(outcome: &ConsolidateOutcome) {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Spread"), header_cell("Products")]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for (band, count) in outcome.bands.iter().rev() {
        table.add_row(vec![band_cell(*band), count_cell(*count)]);
    }
    table.add_row(vec![dim_cell("UNPRICED"), count_cell(outcome.unpriced_products)]);
    println!("{table}");
}

pub fn print_regroup_summary(outcome: &RegroupOutcome) {
    println!("Source: {}", outcome.source.display());
    println!("Suppliers: {}", outcome.supplier_count);

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("Supplier"),
        header_cell("Products"),
        header_cell("File"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 1, CellAlignment::Right);
    for bucket in &outcome.buckets {
        let name = if bucket.supplier == NO_SUPPLIER_BUCKET {
            dim_cell(&bucket.supplier)
        } else {
            Cell::new(&bucket.supplier)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold)
        };
        table.add_row(vec![
            name,
            count_cell(bucket.products),
            Cell::new(bucket.path.display()),
        ]);
    }
    println!("{table}");
    println!(
        "Products without an available supplier: {}",
        outcome.unassigned_products
    );
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

fn band_cell(band: SeverityBand) -> Cell {
    let color = match band {
        SeverityBand::High => Color::Red,
        SeverityBand::Medium => Color::Yellow,
        SeverityBand::Low => Color::Green,
    };
    Cell::new(band).fg(color).add_attribute(Attribute::Bold)
}

fn count_cell(count: usize) -> Cell {
    if count > 0 {
        Cell::new(count)
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
