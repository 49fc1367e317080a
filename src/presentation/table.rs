use comfy_table::{presets::UTF8_HORIZONTAL_ONLY, Table};

use crate::presentation::Report;

/// Tabular rendering of a report. Failures and the heading come first, the
/// table is left out when nobody matched.
pub fn render(report: &Report<'_>) -> String {
    let mut out: Vec<String> = report.failures.iter().map(ToString::to_string).collect();
    out.push(report.heading());
    if !report.is_empty() {
        out.push(author_table(report).to_string());
    }
    out.join("\n")
}

fn author_table(report: &Report<'_>) -> Table {
    let mut t = Table::new();
    t.load_preset(UTF8_HORIZONTAL_ONLY)
        .set_header(vec!["Author", "Releases", "Commits per release"]);
    for (author, releases) in report.rows() {
        let per_release = releases
            .iter()
            .map(|(release, n)| format!("{release}: {n}"))
            .collect::<Vec<_>>()
            .join(", ");
        t.add_row(vec![
            author.to_string(),
            report.qualifying(author).to_string(),
            per_release,
        ]);
    }
    t
}
