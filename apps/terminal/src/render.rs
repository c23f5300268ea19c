//! Table and control-strip rendering.

use niftyboard_market_data::StockRow;
use niftyboard_table::{DisplayConfig, PageControl, TableSession};
use niftyboard_table::format::{chart_cell, delta_cell, format_inr, format_volume, percent_cell};
use tabled::builder::Builder;
use tabled::settings::Style;

const HEADERS: [&str; 13] = [
    "#",
    "Company",
    "Price (₹)",
    "Change (₹)",
    "Change (%)",
    "Open",
    "High",
    "Low",
    "Volume",
    "Trade Value",
    "52W High",
    "52W Low",
    "Chart",
];

/// Render the current Result Page plus the pagination strip.
pub fn draw(session: &TableSession, display: DisplayConfig) {
    let Some(page) = session.page() else {
        return;
    };

    let mut builder = Builder::default();
    builder.push_record(HEADERS);
    for (i, row) in page.rows.iter().enumerate() {
        builder.push_record(record(page.offset + i + 1, row));
    }

    let mut table = builder.build();
    if display.dark_mode {
        table.with(Style::modern());
    } else {
        table.with(Style::ascii());
    }
    println!("{}", table);

    println!("Page {} of {}", page.number, page.total_pages);
    let strip = control_strip(&session.controls());
    if !strip.is_empty() {
        println!("{}", strip);
    }
    println!("n(ext)  p(rev)  f(irst)  l(ast)  <page>  q(uit)");
}

fn record(serial: usize, row: &StockRow) -> [String; 13] {
    let company = match row.company_name() {
        Some(name) => format!("{} ({})", row.symbol, name),
        None => row.symbol.clone(),
    };
    [
        serial.to_string(),
        company,
        format_inr(row.last_price),
        delta_cell(row.change),
        percent_cell(row.p_change),
        format_inr(row.open),
        format_inr(row.day_high),
        format_inr(row.day_low),
        format_volume(row.total_traded_volume),
        format_inr(row.total_traded_value),
        format_inr(row.year_high),
        format_inr(row.year_low),
        chart_cell(row.chart_today_path.as_deref()),
    ]
}

fn control_strip(controls: &[PageControl]) -> String {
    controls
        .iter()
        .map(|control| match control {
            PageControl::First { enabled } => nav("<<", *enabled),
            PageControl::Prev { enabled } => nav("<", *enabled),
            PageControl::Page { number, current } => {
                if *current {
                    format!("[{}]", number)
                } else {
                    number.to_string()
                }
            }
            PageControl::Ellipsis => "...".to_string(),
            PageControl::Next { enabled } => nav(">", *enabled),
            PageControl::Last { enabled } => nav(">>", *enabled),
        })
        .collect::<Vec<_>>()
        .join(" ")
}

fn nav(glyph: &str, enabled: bool) -> String {
    if enabled {
        glyph.to_string()
    } else {
        format!("({})", glyph)
    }
}
