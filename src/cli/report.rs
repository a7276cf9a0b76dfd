use serde::Serialize;

use super::output::{apply_style, MessageKind};
use crate::currency::{format_amount, round_cents, CurrencyCode, LocaleConfig};
use crate::split::SplitReport;

const LABEL_WIDTH: usize = 11;

/// How a report is turned into text.
#[derive(Debug, Clone, Default)]
pub struct RenderOptions {
    pub currency: CurrencyCode,
    pub locale: LocaleConfig,
    pub color: bool,
    pub tolerance: f64,
}

impl RenderOptions {
    fn money(&self, amount: f64) -> String {
        format_amount(amount, &self.currency, &self.locale)
    }
}

pub fn render_text(report: &SplitReport, options: &RenderOptions) -> String {
    let mut lines = Vec::new();
    let title = match &report.restaurant {
        Some(name) => format!("Receipt Breakdown: {name}"),
        None => "Receipt Breakdown".to_string(),
    };
    lines.push(apply_style(MessageKind::Section, title, options.color));

    for person in &report.people {
        lines.push(String::new());
        lines.push(apply_style(
            MessageKind::Heading,
            format!("{} owes:", person.name),
            options.color,
        ));
        for (label, amount) in [
            ("Subtotal:", person.subtotal),
            ("Tax:", person.tax_share),
            ("Tip:", person.tip_share),
            ("Surcharge:", person.surcharge_share),
            ("Total:", person.total_due),
        ] {
            lines.push(format!(
                "  {label:<width$}{}",
                options.money(amount),
                width = LABEL_WIDTH
            ));
        }
    }

    lines.push(String::new());
    lines.push(apply_style(MessageKind::Separator, "", options.color));
    lines.push(format!(
        "{:<16}{}",
        "Grand total:",
        options.money(report.grand_total)
    ));
    lines.push(format!(
        "{:<16}{}",
        "Expected total:",
        options.money(report.expected_total)
    ));
    lines.push(reconciliation_line(report, options));

    let mut text = lines.join("\n");
    text.push('\n');
    text
}

fn reconciliation_line(report: &SplitReport, options: &RenderOptions) -> String {
    if report.is_reconciled(options.tolerance) {
        apply_style(MessageKind::Success, "totals reconcile", options.color)
    } else {
        let drift = report.grand_total - report.expected_total;
        // Sub-cent drift would display as zero.
        let shown = if round_cents(drift) == 0.0 {
            format!("{drift:e}")
        } else {
            options.money(drift)
        };
        apply_style(
            MessageKind::Warning,
            format!("totals differ by {shown}"),
            options.color,
        )
    }
}

#[derive(Debug, Serialize)]
struct JsonReport<'a> {
    #[serde(skip_serializing_if = "Option::is_none")]
    restaurant: Option<&'a str>,
    currency: &'a str,
    subtotal: f64,
    tax: f64,
    tip: f64,
    surcharge: f64,
    people: Vec<JsonPerson<'a>>,
    grand_total: f64,
    expected_total: f64,
    reconciled: bool,
}

#[derive(Debug, Serialize)]
struct JsonPerson<'a> {
    name: &'a str,
    subtotal: f64,
    tax: f64,
    tip: f64,
    surcharge: f64,
    total: f64,
}

/// JSON rendering with every amount rounded to cents.
pub fn render_json(
    report: &SplitReport,
    options: &RenderOptions,
) -> Result<String, serde_json::Error> {
    let body = JsonReport {
        restaurant: report.restaurant.as_deref(),
        currency: options.currency.as_str(),
        subtotal: round_cents(report.subtotal),
        tax: round_cents(report.tax),
        tip: round_cents(report.tip),
        surcharge: round_cents(report.surcharge),
        people: report
            .people
            .iter()
            .map(|person| JsonPerson {
                name: &person.name,
                subtotal: round_cents(person.subtotal),
                tax: round_cents(person.tax_share),
                tip: round_cents(person.tip_share),
                surcharge: round_cents(person.surcharge_share),
                total: round_cents(person.total_due),
            })
            .collect(),
        grand_total: round_cents(report.grand_total),
        expected_total: round_cents(report.expected_total),
        reconciled: report.is_reconciled(options.tolerance),
    };
    serde_json::to_string_pretty(&body)
}
