//! Terminal and JSON presentation of the projection and summary.

use std::sync::Arc;

use cashflow_config::Config;
use cashflow_core::{
    days_label, days_until, format_display_date, CashflowView, Clock, CurrencyFormatter,
    DateFormatter, DisplayDateFormatter, GroupedCurrencyFormatter, ProjectionService, Proximity,
    DEFAULT_SOON_HORIZON_DAYS,
};
use cashflow_domain::{Certainty, CertaintyFilter, Entry, EntryKind, Projection, Summary};
use chrono::NaiveDate;
use colored::{Color, Colorize};
use serde::Serialize;

const APP_TITLE: &str = "Cash Flow Calendar";
const CARD_LABEL_WIDTH: usize = 24;

#[derive(Clone)]
pub struct RenderOptions {
    pub currency_symbol: String,
    pub soon_horizon: i64,
    pub color: bool,
    pub title: Option<String>,
    pub currency: Arc<dyn CurrencyFormatter>,
    pub dates: Arc<dyn DateFormatter>,
}

impl Default for RenderOptions {
    fn default() -> Self {
        Self {
            currency_symbol: "£".into(),
            soon_horizon: DEFAULT_SOON_HORIZON_DAYS,
            color: false,
            title: None,
            currency: Arc::new(GroupedCurrencyFormatter),
            dates: Arc::new(DisplayDateFormatter),
        }
    }
}

impl RenderOptions {
    pub fn from_config(config: &Config) -> Self {
        Self {
            currency_symbol: config.currency_symbol.clone(),
            soon_horizon: config.soon_horizon(),
            color: config.ui_color_enabled,
            title: config.title.clone(),
            ..Self::default()
        }
    }
}

/// One projected entry with its day offset relative to the report date.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct TimelineRow {
    #[serde(flatten)]
    pub projection: Projection,
    pub display_date: String,
    pub days_until: i64,
    pub days_label: String,
    pub proximity: Proximity,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct CriticalNotice {
    pub description: String,
    pub date: NaiveDate,
    pub amount: f64,
    pub days_until: i64,
    pub days_label: String,
}

#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct LowPoint {
    pub date: NaiveDate,
    pub description: String,
    pub running_balance: f64,
}

/// Everything the presentation needs, evaluated against a single clock reading.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct Report {
    pub today: NaiveDate,
    pub high_certainty_only: bool,
    pub starting_balance: f64,
    pub closing_balance: f64,
    pub lowest_balance: Option<LowPoint>,
    pub summary: Summary,
    pub critical_notice: Option<CriticalNotice>,
    pub timeline: Vec<TimelineRow>,
}

impl Report {
    pub fn build(view: &mut CashflowView, clock: &dyn Clock, soon_horizon: i64) -> Self {
        let today = clock.today();
        let starting_balance = view.starting_balance();
        let high_certainty_only = view.filter() == CertaintyFilter::HighOnly;
        let summary = view.summary().clone();
        let projections = view.projection();
        let closing_balance = ProjectionService::closing_balance(projections, starting_balance);
        let lowest_balance =
            ProjectionService::lowest_point(projections).map(|projection| LowPoint {
                date: projection.entry.date,
                description: projection.entry.description.clone(),
                running_balance: projection.running_balance,
            });

        let timeline = projections
            .iter()
            .map(|projection| {
                let days = days_until(projection.entry.date, clock);
                TimelineRow {
                    projection: projection.clone(),
                    display_date: format_display_date(projection.entry.date),
                    days_until: days,
                    days_label: days_label(days),
                    proximity: Proximity::classify(days, soon_horizon),
                }
            })
            .collect();

        let critical_notice = summary.next_critical.as_ref().map(|entry| {
            let days = days_until(entry.date, clock);
            CriticalNotice {
                description: entry.description.clone(),
                date: entry.date,
                amount: entry.amount,
                days_until: days,
                days_label: days_label(days),
            }
        });

        Self {
            today,
            high_certainty_only,
            starting_balance,
            closing_balance,
            lowest_balance,
            summary,
            critical_notice,
            timeline,
        }
    }
}

pub fn render_json(report: &Report) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(report)
}

pub fn render_text(report: &Report, options: &RenderOptions) -> String {
    let money = |amount: f64| {
        options
            .currency
            .format_amount(amount, &options.currency_symbol)
    };
    let paint = |text: String, color: Color| {
        if options.color {
            text.color(color).to_string()
        } else {
            text
        }
    };
    let mut lines = Vec::new();

    lines.push(if options.color {
        APP_TITLE.bold().to_string()
    } else {
        APP_TITLE.to_string()
    });
    let today = options.dates.format_date(report.today);
    lines.push(match &options.title {
        Some(title) => format!("{title} - {today}"),
        None => today,
    });
    lines.push(String::new());

    let summary = &report.summary;
    lines.push(card("Due Out", paint(money(summary.total_out), Color::Red)));
    lines.push(card(
        "Expected In (certain)",
        paint(money(summary.total_in_high_certainty), Color::Green),
    ));
    lines.push(card(
        "Net Position",
        paint(
            money(summary.net_position_high),
            balance_color(summary.net_position_high),
        ),
    ));
    lines.push(card(
        "Net Position (all)",
        paint(
            money(summary.net_position_all),
            balance_color(summary.net_position_all),
        ),
    ));
    lines.push(card(
        "Next Critical",
        match &report.critical_notice {
            Some(notice) => paint(
                format!("{} {}", notice.days_label, notice.description),
                Color::Yellow,
            ),
            None => paint("Clear (no critical dates)".to_string(), Color::Green),
        },
    ));
    lines.push(String::new());

    lines.push(if report.high_certainty_only {
        "Timeline (high certainty only)".to_string()
    } else {
        "Timeline (all entries)".to_string()
    });
    lines.push(row(
        ' ',
        "Today",
        "",
        "Starting balance",
        String::new(),
        money(report.starting_balance),
    ));

    for item in &report.timeline {
        let entry = &item.projection.entry;
        let marker = match item.proximity {
            Proximity::Today => '>',
            Proximity::Soon => '!',
            Proximity::Past | Proximity::Later => ' ',
        };
        let line = row(
            marker,
            &options.dates.format_date(entry.date),
            &item.days_label,
            &describe(entry),
            amount_cell(entry, &money),
            money(item.projection.running_balance),
        );
        lines.push(style_row(line, entry, item, options.color));
    }

    lines.push(String::new());
    if let Some(low) = &report.lowest_balance {
        lines.push(format!(
            "Lowest balance: {} on {} ({})",
            paint(money(low.running_balance), balance_color(low.running_balance)),
            options.dates.format_date(low.date),
            low.description
        ));
    }
    lines.push(format!(
        "Closing balance: {}",
        paint(
            money(report.closing_balance),
            balance_color(report.closing_balance)
        )
    ));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn card(label: &str, value: String) -> String {
    format!("{label:<width$}{value}", width = CARD_LABEL_WIDTH)
}

fn row(
    marker: char,
    date: &str,
    label: &str,
    description: &str,
    amount: String,
    balance: String,
) -> String {
    format!("{marker} {date:<11}{label:<13}{description:<36}{amount:>12}{balance:>12}")
}

fn describe(entry: &Entry) -> String {
    if entry.certainty == Certainty::Complete {
        entry.description.clone()
    } else {
        format!("{} ({} certainty)", entry.description, entry.certainty)
    }
}

fn amount_cell(entry: &Entry, money: &dyn Fn(f64) -> String) -> String {
    match entry.kind {
        EntryKind::In => format!("+{}", money(entry.amount)),
        EntryKind::Out => format!("-{}", money(entry.amount)),
        EntryKind::Event => "-".to_string(),
    }
}

fn balance_color(amount: f64) -> Color {
    if amount >= 0.0 {
        Color::Green
    } else {
        Color::Red
    }
}

fn style_row(line: String, entry: &Entry, item: &TimelineRow, color: bool) -> String {
    if !color {
        return line;
    }
    let tint = match entry.kind {
        EntryKind::In => Color::Green,
        EntryKind::Out => Color::Red,
        EntryKind::Event => Color::Yellow,
    };
    let mut styled = line.color(tint);
    if matches!(entry.certainty, Certainty::Low) {
        styled = styled.italic();
    }
    styled = match item.proximity {
        Proximity::Past => styled.dimmed(),
        Proximity::Today | Proximity::Soon => styled.bold(),
        Proximity::Later => styled,
    };
    if item.projection.running_balance < 0.0 {
        styled = styled.underline();
    }
    styled.to_string()
}
