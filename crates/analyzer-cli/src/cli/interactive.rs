//! Interactive menu loop.
//!
//! The loop is an explicit state machine:
//!
//! ```text
//! SelectMethod --1/2--> AwaitingInput --text--> ShowingReport --ok--> OfferSave
//!      ^   |                 |                       |                   |
//!      |   +--3/quit--> Done +--blank--+             +--failed--+        |
//!      +-------------------------------+------------------------+--------+
//! ```
//!
//! Input goes through the [`Prompter`] seam: dialoguer on a terminal, plain
//! line reading otherwise (and in tests). End of input moves to `Done`.

use std::io::{BufRead, ErrorKind, Write};

use console::style;
use dialoguer::Input;

use analyzer_core::report::generator::ReportGenerator;
use analyzer_core::report::sink::{ReportSaver, ReportSink};
use analyzer_types::report::{Report, ReportOutcome};

use super::{analyze, display};

/// Source of user answers.
pub trait Prompter {
    /// Ask `prompt` and return the raw answer, or `None` when input is closed.
    fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>>;
}

/// Terminal prompter backed by dialoguer.
pub struct DialoguerPrompter;

impl Prompter for DialoguerPrompter {
    fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        let answer = Input::<String>::new()
            .with_prompt(prompt)
            .allow_empty(true)
            .interact_text();

        match answer {
            Ok(answer) => Ok(Some(answer)),
            Err(err) if is_closed_input(&err) => Ok(None),
            Err(err) => Err(err.into()),
        }
    }
}

/// Ctrl-D and Ctrl-C on a terminal end the session like closed stdin.
fn is_closed_input(err: &dialoguer::Error) -> bool {
    matches!(
        err,
        dialoguer::Error::IO(io_err)
            if matches!(io_err.kind(), ErrorKind::UnexpectedEof | ErrorKind::Interrupted)
    )
}

/// Line-based prompter for piped input.
pub struct LinePrompter<R, W> {
    reader: R,
    writer: W,
}

impl<R: BufRead, W: Write> LinePrompter<R, W> {
    pub fn new(reader: R, writer: W) -> Self {
        Self { reader, writer }
    }
}

impl<R: BufRead, W: Write> Prompter for LinePrompter<R, W> {
    fn ask(&mut self, prompt: &str) -> anyhow::Result<Option<String>> {
        write!(self.writer, "{prompt}: ")?;
        self.writer.flush()?;

        let mut line = String::new();
        if self.reader.read_line(&mut line)? == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }
}

/// Which kind of input the user picked from the menu.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputMethod {
    KnownService,
    Description,
}

impl InputMethod {
    fn prompt(self) -> &'static str {
        match self {
            InputMethod::KnownService => "Enter service name",
            InputMethod::Description => "Enter service description",
        }
    }
}

/// A parsed menu answer.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MenuChoice {
    Method(InputMethod),
    Quit,
}

impl MenuChoice {
    pub fn parse(answer: &str) -> Option<Self> {
        match answer.trim().to_lowercase().as_str() {
            "1" => Some(MenuChoice::Method(InputMethod::KnownService)),
            "2" => Some(MenuChoice::Method(InputMethod::Description)),
            "3" | "quit" | "exit" => Some(MenuChoice::Quit),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ShellState {
    SelectMethod,
    AwaitingInput(InputMethod),
    ShowingReport(ReportOutcome),
    OfferSave(Report),
    Done,
}

pub struct InteractiveShell<'a, S> {
    generator: &'a ReportGenerator,
    saver: &'a ReportSaver<S>,
    prompter: &'a mut dyn Prompter,
}

impl<'a, S: ReportSink> InteractiveShell<'a, S> {
    pub fn new(
        generator: &'a ReportGenerator,
        saver: &'a ReportSaver<S>,
        prompter: &'a mut dyn Prompter,
    ) -> Self {
        Self {
            generator,
            saver,
            prompter,
        }
    }

    /// Run the menu loop until the user quits or input ends.
    pub async fn run(&mut self) -> anyhow::Result<()> {
        display::print_interactive_banner();

        let mut state = ShellState::SelectMethod;
        while state != ShellState::Done {
            state = self.step(state).await?;
        }

        println!("Goodbye!");
        Ok(())
    }

    /// Advance the state machine by one transition.
    pub async fn step(&mut self, state: ShellState) -> anyhow::Result<ShellState> {
        let next = match state {
            ShellState::SelectMethod => {
                display::print_menu();
                let Some(answer) = self.prompter.ask("Your choice (1-3)")? else {
                    return Ok(ShellState::Done);
                };
                match MenuChoice::parse(&answer) {
                    Some(MenuChoice::Quit) => ShellState::Done,
                    Some(MenuChoice::Method(method)) => ShellState::AwaitingInput(method),
                    None => {
                        println!(
                            "{} Invalid choice. Please select 1, 2, or 3.",
                            style("?").yellow().bold()
                        );
                        ShellState::SelectMethod
                    }
                }
            }

            ShellState::AwaitingInput(method) => {
                let Some(answer) = self.prompter.ask(method.prompt())? else {
                    return Ok(ShellState::Done);
                };
                let input = answer.trim();
                if input.is_empty() {
                    println!(
                        "{} Invalid input. Please try again.",
                        style("?").yellow().bold()
                    );
                    ShellState::SelectMethod
                } else {
                    tracing::debug!(?method, "Interactive request");
                    let outcome = analyze::generate_and_show(self.generator, input).await;
                    ShellState::ShowingReport(outcome)
                }
            }

            ShellState::ShowingReport(outcome) => match outcome {
                ReportOutcome::Generated(report) => ShellState::OfferSave(report),
                ReportOutcome::Failed(_) => {
                    display::print_round_separator();
                    ShellState::SelectMethod
                }
            },

            ShellState::OfferSave(report) => {
                println!();
                let Some(answer) = self.prompter.ask("Save report to file? (y/n)")? else {
                    return Ok(ShellState::Done);
                };
                if matches!(answer.trim().to_lowercase().as_str(), "y" | "yes") {
                    let Some(filename) =
                        self.prompter.ask("Enter filename (press Enter for default)")?
                    else {
                        return Ok(ShellState::Done);
                    };
                    if let Some(path) = self.saver.save(&report, Some(&filename)).await {
                        display::print_saved(&path);
                    }
                }
                display::print_round_separator();
                ShellState::SelectMethod
            }

            ShellState::Done => ShellState::Done,
        };

        Ok(next)
    }
}
