//! Single-shot analysis: one input, one report, optional save.

use console::style;

use analyzer_core::report::generator::ReportGenerator;
use analyzer_core::report::sink::{ReportSaver, ReportSink};
use analyzer_types::report::ReportOutcome;

use super::display;

/// Resolve `input`, generate the report behind a spinner, and print it.
pub async fn generate_and_show(generator: &ReportGenerator, input: &str) -> ReportOutcome {
    let request = generator.resolve(input);
    display::print_resolution(&request);

    let spinner = display::generation_spinner();
    let outcome = generator.generate_for(&request).await;
    spinner.finish_and_clear();

    display::print_outcome(&outcome);
    outcome
}

/// Run one analysis for `input`, saving to `output` when given.
///
/// A blank `output` counts as absent. Save failures and generation
/// failures are reported but not fatal.
pub async fn run_single<S: ReportSink>(
    generator: &ReportGenerator,
    saver: &ReportSaver<S>,
    input: &str,
    output: Option<&str>,
) -> ReportOutcome {
    let outcome = generate_and_show(generator, input).await;

    if let Some(filename) = output.filter(|f| !f.trim().is_empty()) {
        match outcome.report() {
            Some(report) => {
                if let Some(path) = saver.save(report, Some(filename)).await {
                    println!();
                    display::print_saved(&path);
                }
            }
            None => {
                eprintln!(
                    "\n{} Report not saved to {}: generation failed.",
                    style("!").yellow().bold(),
                    filename
                );
            }
        }
    }

    outcome
}
