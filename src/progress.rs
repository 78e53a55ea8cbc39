use std::path::Path;
use std::sync::atomic::{AtomicUsize, Ordering};

use console::{Term, style};
use indicatif::{MultiProgress, ProgressBar, ProgressStyle};

use crate::constants::progress::{SPINNER_FRAMES, TICK_INTERVAL};
use crate::utils::string::pluralize;

// Progress bar style templates as constants
const PROGRESS_BAR_TEMPLATE: &str =
    "{msg} [{elapsed_precise}] {bar:40.cyan/blue} {pos}/{len} {per_sec}";
const SPINNER_TEMPLATE: &str = "{spinner:.cyan} {msg}";

pub struct ProgressReporter {
    term: Term,
    spinner_position: AtomicUsize,
    multi_progress: MultiProgress,
    current_bar: Option<ProgressBar>,
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
            spinner_position: AtomicUsize::new(0),
            multi_progress: MultiProgress::new(),
            current_bar: None,
        }
    }

    fn create_progress_bar(&mut self, len: u64, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new(len));
        if let Ok(bar_style) = ProgressStyle::default_bar().template(PROGRESS_BAR_TEMPLATE) {
            pb.set_style(bar_style.progress_chars("█▉▊▋▌▍▎▏ "));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn create_spinner(&mut self, message: &str) -> ProgressBar {
        let pb = self.multi_progress.add(ProgressBar::new_spinner());
        if let Ok(spinner_style) = ProgressStyle::default_spinner().template(SPINNER_TEMPLATE) {
            pb.set_style(spinner_style.tick_strings(&["◐", "◓", "◑", "◒", "✓"]));
        }
        pb.set_message(message.to_string());
        pb.enable_steady_tick(TICK_INTERVAL);
        pb
    }

    fn next_frame(&self) -> &'static str {
        let pos = self.spinner_position.fetch_add(1, Ordering::Relaxed) % SPINNER_FRAMES.len();
        SPINNER_FRAMES[pos]
    }

    pub fn start_discovery(&mut self) {
        let _ = self.term.clear_line();
        eprintln!("{} Discovering project modules...", style("🔍").cyan());
        let spinner = self.create_spinner("Scanning for descriptors...");
        self.current_bar = Some(spinner);
    }

    pub fn checking_descriptor(&self, path: &Path) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Checking: {}...", path.display()));
        } else {
            let _ = self.term.clear_line();
            eprint!(
                "\r{} Checking: {}... ",
                style(self.next_frame()).cyan(),
                style(path.display()).dim()
            );
        }
    }

    pub fn finish_discovery(&mut self, count: usize) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
        let _ = self.term.clear_line();
        eprintln!(
            "\r{} Discovery complete: found {} {}",
            style("✓").green(),
            style(count).yellow().bold(),
            pluralize("module", count)
        );
    }

    pub fn start_resolution(&mut self, total_modules: usize) -> ProgressBar {
        let pb = self.create_progress_bar(total_modules as u64, "Resolving modules");
        self.current_bar = Some(pb.clone());
        pb
    }

    pub fn module_resolved(&self, module_name: &str) {
        if let Some(ref pb) = self.current_bar {
            pb.set_message(format!("Resolved: {module_name}"));
            pb.inc(1);
        }
    }

    pub fn finish_resolution(&mut self) {
        if let Some(pb) = self.current_bar.take() {
            pb.finish_and_clear();
        }
    }

    pub fn graph_written(&self, nodes: usize, edges: usize, destination: &str) {
        eprintln!(
            "{} Wrote graph with {} {} and {} {} to {}",
            style("✓").green().bold(),
            style(nodes).yellow().bold(),
            pluralize("node", nodes),
            style(edges).yellow().bold(),
            pluralize("edge", edges),
            style(destination).cyan()
        );
    }
}
