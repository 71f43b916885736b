//! Plain text rendering of a report.

use std::fmt::Write;

use finlens_core::reports::{LineItem, Report, ReportSide};

const LABEL_WIDTH: usize = 48;
const AMOUNT_WIDTH: usize = 18;

/// Renders both sides and the KPIs as a text table.
///
/// Headers are flush left, details indented. Unhighlighted rows are marked
/// with a leading `.` so near-zero balances read as muted.
pub fn table(report: &Report) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{} ({}, {})",
        report.name, report.as_of, report.reporting_currency
    );

    for (title, side) in [
        ("Aktiva", ReportSide::Assets),
        ("Passiva", ReportSide::Liabilities),
    ] {
        let _ = writeln!(out, "\n{title}");
        for line in report.lines(side) {
            row(&mut out, line);
        }
    }

    let kpis = report.kpis();
    let currency = report.reporting_currency;
    let _ = writeln!(out);
    for (label, value) in [
        ("Liquidität 1. Grades", kpis.liq1),
        ("Liquidität 2. Grades", kpis.liq2),
        ("Liquidität 3. Grades", kpis.liq3),
        ("Summe Aktiva", kpis.total_assets),
        ("Summe Passiva", kpis.total_liabilities),
        ("Kurzfr. Fremdkapital", kpis.short_term_debt),
    ] {
        let amount = finlens_shared::types::format_money(value, currency);
        let _ = writeln!(out, "{label:<LABEL_WIDTH$}{amount:>AMOUNT_WIDTH$}");
    }

    out
}

fn row(out: &mut String, line: &LineItem) {
    let marker = if line.is_highlighted { ' ' } else { '.' };
    let label = if line.is_section_header() {
        line.label.clone()
    } else {
        format!("  {}", line.label)
    };
    let amount = line.display_amount();
    let _ = write!(out, "{marker}{label:<LABEL_WIDTH$}{amount:>AMOUNT_WIDTH$}");
    if !line.is_section_header() && line.is_foreign() {
        let _ = write!(out, "  ({})", line.display_original_amount());
    }
    let _ = writeln!(out);
}
