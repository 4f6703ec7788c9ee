use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{
    Attribute, Cell, CellAlignment, Color, ColumnConstraint, ContentArrangement, Table, Width,
};

use roster_model::{AnalysisRun, DataType, PlayerAnalysis, StatsBreakdown};

pub fn print_run(run: &AnalysisRun) {
    let combined = &run.combined;
    println!(
        "{} players | {} dataset(s)",
        combined.total_players, combined.file_count
    );
    println!(
        "Batting files: {} | Pitching files: {}",
        combined.batting_count, combined.pitching_count
    );

    let mut table = Table::new();
    table.set_header(vec![
        header_cell("File"),
        header_cell("Type"),
        header_cell("Players"),
        header_cell("Stats"),
        header_cell("Warnings"),
    ]);
    apply_summary_table_style(&mut table);
    align_column(&mut table, 2, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Right);
    for analysis in &run.analyses {
        table.add_row(vec![
            Cell::new(&analysis.file_name)
                .fg(Color::Blue)
                .add_attribute(Attribute::Bold),
            data_type_cell(analysis.data_type),
            Cell::new(analysis.total_players),
            stats_cell(&analysis.stats_breakdown),
            count_cell(analysis.warnings.len(), Color::Yellow),
        ]);
    }
    table.add_row(vec![
        Cell::new("TOTAL")
            .fg(Color::Cyan)
            .add_attribute(Attribute::Bold),
        dim_cell("-"),
        Cell::new(combined.total_players).add_attribute(Attribute::Bold),
        dim_cell("-"),
        count_cell(combined.warnings.len(), Color::Yellow).add_attribute(Attribute::Bold),
    ]);
    println!("{table}");

    if !combined.warnings.is_empty() {
        println!();
        println!("Warnings:");
        for warning in &combined.warnings {
            println!("- {warning}");
        }
    }
    print_notes("Insights:", &run.analyses, |analysis| analysis.insights.as_slice());
    print_notes("Recommendations:", &run.analyses, |analysis| {
        analysis.opportunities.as_slice()
    });
}

fn print_notes(
    title: &str,
    analyses: &[PlayerAnalysis],
    notes: impl Fn(&PlayerAnalysis) -> &[String],
) {
    let lines: Vec<String> = analyses
        .iter()
        .flat_map(|analysis| {
            notes(analysis)
                .iter()
                .map(move |note| format!("- [{}] {note}", analysis.file_name))
        })
        .collect();
    if lines.is_empty() {
        return;
    }
    println!();
    println!("{title}");
    for line in lines {
        println!("{line}");
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
    if table.column_count() >= 5 {
        table.set_constraints(vec![
            ColumnConstraint::UpperBoundary(Width::Percentage(40)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
            ColumnConstraint::LowerBoundary(Width::Fixed(7)),
            ColumnConstraint::UpperBoundary(Width::Percentage(35)),
            ColumnConstraint::LowerBoundary(Width::Fixed(8)),
        ]);
    }
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

/// One `metric: value` line per breakdown entry.
fn stats_text(stats: &StatsBreakdown) -> String {
    stats
        .iter()
        .map(|(metric, average)| format!("{metric}: {average}"))
        .collect::<Vec<_>>()
        .join("\n")
}

fn stats_cell(stats: &StatsBreakdown) -> Cell {
    if stats.is_empty() {
        dim_cell("-")
    } else {
        Cell::new(stats_text(stats))
    }
}

fn data_type_cell(data_type: DataType) -> Cell {
    match data_type {
        DataType::Batting => Cell::new("Batting").fg(Color::Green),
        DataType::Pitching => Cell::new("Pitching").fg(Color::Magenta),
        DataType::Unknown => dim_cell("Unknown"),
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
