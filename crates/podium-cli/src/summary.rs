//! Terminal rendering of view reports.

use anyhow::Result;
use comfy_table::modifiers::UTF8_ROUND_CORNERS;
use comfy_table::presets::UTF8_FULL_CONDENSED;
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};
use polars::prelude::DataFrame;

use podium_model::View;
use podium_model::columns::{POSITION, STATUS, display};
use podium_transform::data_utils::{float_values, int_values, string_values};
use podium_transform::{CellStyle, highlight_fis_points, highlight_position, highlight_status};

use crate::report::{CrossCountryReport, LowerCupReport, Selection};

/// Render the cross-country dashboard as text.
pub fn render_cross_country(report: &CrossCountryReport) -> Result<String> {
    let mut out = heading(View::CrossCountry, &report.selection);
    if let Some(overview) = &report.overview {
        let mut totals = Table::new();
        totals.set_header(vec![header_cell("Discipline"), header_cell("WC Points")]);
        apply_table_style(&mut totals);
        align_column(&mut totals, 1, CellAlignment::Right);
        let last = overview.discipline_totals.len().saturating_sub(1);
        for (idx, total) in overview.discipline_totals.iter().enumerate() {
            if idx == last {
                totals.add_row(vec![
                    Cell::new(&total.discipline).add_attribute(Attribute::Bold),
                    Cell::new(total.points).add_attribute(Attribute::Bold),
                ]);
            } else {
                totals.add_row(vec![Cell::new(&total.discipline), Cell::new(total.points)]);
            }
        }
        out.push_str(&format!("{totals}\n"));

        let podiums = overview.podiums;
        let mut podium_table = Table::new();
        podium_table.set_header(vec![
            header_cell("Wins"),
            header_cell("2nd"),
            header_cell("3rd"),
            header_cell("Races"),
        ]);
        apply_table_style(&mut podium_table);
        podium_table.add_row(vec![
            Cell::new(podiums.wins),
            Cell::new(podiums.seconds),
            Cell::new(podiums.thirds),
            Cell::new(podiums.total),
        ]);
        out.push_str(&format!("{podium_table}\n"));

        let mut cards = Table::new();
        cards.set_header(vec![
            header_cell("Result"),
            header_cell("Count"),
            header_cell("vs. last season"),
        ]);
        apply_table_style(&mut cards);
        align_column(&mut cards, 1, CellAlignment::Right);
        align_column(&mut cards, 2, CellAlignment::Right);
        for card in overview.cards.cards() {
            cards.add_row(vec![
                Cell::new(card.label),
                Cell::new(card.value),
                delta_cell(card.delta),
            ]);
        }
        out.push_str(&format!("{cards}\n"));
    }
    out.push_str(&format!("{}\n", results_table(&report.table, None)?));
    Ok(out)
}

/// Render the lower cup dashboard as text.
pub fn render_lower_cup(report: &LowerCupReport) -> Result<String> {
    let mut out = heading(View::LowerCup, &report.selection);
    if let Some(overview) = &report.overview {
        let outcomes = overview.outcomes;
        let mut outcome_table = Table::new();
        outcome_table.set_header(vec![
            header_cell("Races"),
            header_cell("DNF"),
            header_cell("DSQ"),
        ]);
        apply_table_style(&mut outcome_table);
        outcome_table.add_row(vec![
            Cell::new(outcomes.races),
            Cell::new(outcomes.dnf),
            Cell::new(outcomes.dsq),
        ]);
        out.push_str(&format!("{outcome_table}\n"));

        if !overview.averages.is_empty() {
            let mut averages = Table::new();
            averages.set_header(vec![
                header_cell("Discipline"),
                header_cell("Avg. best two"),
            ]);
            apply_table_style(&mut averages);
            align_column(&mut averages, 1, CellAlignment::Right);
            for average in &overview.averages {
                averages.add_row(vec![
                    Cell::new(&average.discipline),
                    Cell::new(format!("{:.2}", average.points)),
                ]);
            }
            out.push_str(&format!("{averages}\n"));
        }

        let mut best = Table::new();
        best.set_header(vec![header_cell("Result"), header_cell("FIS Points")]);
        apply_table_style(&mut best);
        for card in &overview.best_results {
            for (n, result) in [(1, &card.best), (2, &card.second)] {
                let value = result.metric_value();
                let value_cell = if result.has_points() {
                    Cell::new(value)
                } else {
                    dim_cell(value)
                };
                best.add_row(vec![
                    Cell::new(result.metric_label(&card.discipline, n)),
                    value_cell,
                ]);
            }
        }
        out.push_str(&format!("{best}\n"));
    }
    out.push_str(&format!(
        "{}\n",
        results_table(&report.table, report.fis_range)?
    ));
    Ok(out)
}

/// Print a list of options under a title.
pub fn render_options(title: &str, values: &[String]) -> String {
    let mut table = Table::new();
    table.set_header(vec![header_cell(title)]);
    apply_table_style(&mut table);
    for value in values {
        table.add_row(vec![Cell::new(value)]);
    }
    format!("{table}\n")
}

fn heading(view: View, selection: &Selection) -> String {
    format!("{view} {}: {}\n", selection.season, selection.heading())
}

/// Result table with position, status and FIS points highlighting.
///
/// FIS points are only painted when `fis_range` is given.
fn results_table(df: &DataFrame, fis_range: Option<(f64, f64)>) -> Result<Table> {
    let mut table = Table::new();
    let names: Vec<String> = df
        .get_column_names()
        .into_iter()
        .map(|name| name.to_string())
        .collect();
    table.set_header(names.iter().map(|name| header_cell(name)).collect::<Vec<_>>());
    apply_table_style(&mut table);

    let mut columns = Vec::with_capacity(names.len());
    for name in &names {
        columns.push(column_cells(df, name, fis_range)?);
    }
    for row in 0..df.height() {
        table.add_row(
            columns
                .iter_mut()
                .map(|cells| std::mem::replace(&mut cells[row], Cell::new("")))
                .collect::<Vec<_>>(),
        );
    }
    Ok(table)
}

fn column_cells(df: &DataFrame, name: &str, fis_range: Option<(f64, f64)>) -> Result<Vec<Cell>> {
    let cells = match name {
        POSITION => int_values(df, name)?
            .into_iter()
            .map(|position| {
                let text = position.map(|value| value.to_string()).unwrap_or_default();
                styled_cell(text, highlight_position(position))
            })
            .collect(),
        STATUS => string_values(df, name)?
            .into_iter()
            .map(|status| {
                let style = highlight_status(status.as_deref());
                styled_cell(status.unwrap_or_default(), style)
            })
            .collect(),
        display::FIS_POINTS => float_values(df, name)?
            .into_iter()
            .map(|points| {
                let text = points.map(|value| format!("{value:.2}")).unwrap_or_default();
                match fis_range {
                    Some((min, max)) => styled_cell(text, highlight_fis_points(points, min, max)),
                    None => Cell::new(text),
                }
            })
            .collect(),
        _ => string_values(df, name)?
            .into_iter()
            .map(|value| Cell::new(value.unwrap_or_default()))
            .collect(),
    };
    Ok(cells)
}

fn styled_cell(text: String, style: CellStyle) -> Cell {
    match style.background() {
        Some(rgb) => Cell::new(text)
            .bg(Color::Rgb {
                r: rgb.r,
                g: rgb.g,
                b: rgb.b,
            })
            .fg(Color::Black),
        None => Cell::new(text),
    }
}

fn delta_cell(delta: i64) -> Cell {
    match delta {
        d if d > 0 => Cell::new(format!("+{d}")).fg(Color::Green),
        d if d < 0 => Cell::new(d).fg(Color::Red),
        d => dim_cell(d),
    }
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(160);
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

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
