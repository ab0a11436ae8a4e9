//! Console output: report framing, status lines, the service table.

use comfy_table::{Cell, Color, ContentArrangement, Table, presets};
use console::style;
use indicatif::{ProgressBar, ProgressStyle};

use analyzer_core::catalog::KnownServiceCatalog;
use analyzer_types::report::{AnalysisRequest, ReportOutcome};

const REPORT_RULE_WIDTH: usize = 80;
const ROUND_RULE_WIDTH: usize = 50;

/// Print the status line for a resolved request.
pub fn print_resolution(request: &AnalysisRequest) {
    if request.is_known {
        println!(
            "{} Recognized service: {}",
            style("✓").green().bold(),
            style(&request.raw_input).cyan()
        );
    } else {
        println!(
            "{} Processing custom service description...",
            style("✓").green().bold()
        );
    }
}

/// Spinner shown while the completion request is in flight.
pub fn generation_spinner() -> ProgressBar {
    let spinner = ProgressBar::new_spinner();
    if let Ok(spinner_style) = ProgressStyle::default_spinner().template("{spinner:.cyan} {msg}") {
        spinner.set_style(spinner_style);
    }
    spinner.set_message("Generating analysis report...");
    spinner.enable_steady_tick(std::time::Duration::from_millis(80));
    spinner
}

/// Print a generation outcome framed by `=` rules.
///
/// Failures are framed the same way as reports.
pub fn print_outcome(outcome: &ReportOutcome) {
    let rule = "=".repeat(REPORT_RULE_WIDTH);
    println!();
    println!("{rule}");
    println!("{}", style("ANALYSIS REPORT").bold());
    println!("{rule}");
    println!("{}", outcome.text());
    println!("{rule}");
}

pub fn print_saved(path: &std::path::Path) {
    println!(
        "{} Report saved to: {}",
        style("✓").green().bold(),
        style(path.display()).cyan()
    );
}

/// Separator printed after each interactive round.
pub fn print_round_separator() {
    println!();
    println!("{}", "-".repeat(ROUND_RULE_WIDTH));
}

pub fn print_interactive_banner() {
    println!("{}", style("Service Analyzer - Interactive Mode").cyan().bold());
    println!("{}", "=".repeat(ROUND_RULE_WIDTH));
    println!("{}", style("Enter 'quit' or 'exit' to stop").dim());
    println!();
}

pub fn print_menu() {
    println!("Choose input method:");
    println!("  {} Known service name", style("1.").bold());
    println!("  {} Custom service description", style("2.").bold());
    println!("  {} Quit", style("3.").bold());
    println!();
}

/// Print the recognized services as a table.
pub fn print_service_table(catalog: &KnownServiceCatalog) {
    let mut table = Table::new();
    table.load_preset(presets::UTF8_FULL_CONDENSED);
    table.set_content_arrangement(ContentArrangement::Dynamic);

    table.set_header(vec![
        Cell::new("Service").fg(Color::White),
        Cell::new("Description").fg(Color::White),
    ]);

    for record in catalog.entries() {
        table.add_row(vec![
            Cell::new(record.id).fg(Color::Cyan),
            Cell::new(record.description),
        ]);
    }

    println!();
    println!("{table}");
    println!();
    println!(
        "  {} known services (matched case-insensitively)",
        style(catalog.len()).bold()
    );
    println!();
}
