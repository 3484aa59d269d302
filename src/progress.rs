use console::{Term, style};
use indicatif::{ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

/// Stderr spinner shown while tool probes run
pub struct ProgressReporter {
    term: Term,
    spinner: Option<ProgressBar>,
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            term: Term::stderr(),
            spinner: None,
        }
    }

    /// A reporter only when stderr is an interactive terminal
    pub fn for_terminal() -> Option<Self> {
        Term::stderr().is_term().then(Self::new)
    }

    fn create_spinner(&self, message: String) -> ProgressBar {
        // The template is a constant; fall back to indicatif's default if it
        // is ever rejected.
        let style = ProgressStyle::default_spinner()
            .template(SPINNER_TEMPLATE)
            .unwrap_or_else(|_| ProgressStyle::default_spinner())
            .tick_strings(SPINNER_FRAMES);

        let pb = ProgressBar::new_spinner();
        pb.set_style(style);
        pb.set_message(message);
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    pub fn start_probing(&mut self, ecosystem: &str, count: usize) {
        let _ = self.term.clear_line();
        let spinner = self.create_spinner(format!(
            "Checking {count} {} for {ecosystem}...",
            pluralize("tool", count)
        ));
        self.spinner = Some(spinner);
    }

    pub fn probing_tool(&self, tool: &str) {
        if let Some(ref pb) = self.spinner {
            pb.set_message(format!("Probing {}...", style(tool).bold()));
        }
    }

    pub fn finish_probing(&mut self, missing: usize) {
        if let Some(pb) = self.spinner.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        if missing == 0 {
            eprintln!("{} All critical tools found", style("✓").green());
        } else {
            eprintln!(
                "{} {} critical {} missing",
                style("⚠").yellow().bold(),
                style(missing).red().bold(),
                pluralize("tool", missing)
            );
        }
    }
}
