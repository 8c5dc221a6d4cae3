//! Progress reporting for a parallel run

use botbench_application::ports::progress::ProgressNotifier;
use colored::Colorize;
use indicatif::{ProgressBar, ProgressStyle};
use std::sync::Mutex;

/// Reports run progress with a progress bar
pub struct ProgressReporter {
    bar: Mutex<Option<ProgressBar>>,
}

impl ProgressReporter {
    pub fn new() -> Self {
        Self {
            bar: Mutex::new(None),
        }
    }

    fn bar_style() -> ProgressStyle {
        ProgressStyle::default_bar()
            .template("{spinner:.green} {prefix:.bold.cyan} [{bar:40.cyan/blue}] {pos}/{len} {msg}")
            .unwrap()
            .progress_chars("=>-")
    }
}

impl Default for ProgressReporter {
    fn default() -> Self {
        Self::new()
    }
}

impl ProgressNotifier for ProgressReporter {
    fn on_run_start(&self, total_conversations: usize) {
        let pb = ProgressBar::new(total_conversations as u64);
        pb.set_style(Self::bar_style());
        pb.set_prefix("Conversations");
        pb.set_message("Running...");

        *self.bar.lock().unwrap() = Some(pb);
    }

    fn on_conversation_complete(&self, seed_index: usize, success: bool) {
        if let Some(pb) = self.bar.lock().unwrap().as_ref() {
            let status = if success {
                format!("{} conversation {}", "v".green(), seed_index + 1)
            } else {
                format!("{} conversation {}", "x".red(), seed_index + 1)
            };
            pb.set_message(status);
            pb.inc(1);
        }
    }

    fn on_run_complete(&self) {
        if let Some(pb) = self.bar.lock().unwrap().take() {
            pb.finish_with_message(format!("{}", "all conversations finished".green()));
        }
    }
}

/// Simple text-based progress (no fancy UI)
pub struct SimpleProgress;

impl ProgressNotifier for SimpleProgress {
    fn on_run_start(&self, total_conversations: usize) {
        println!(
            "{} Running {} conversations",
            "->".cyan(),
            total_conversations
        );
    }

    fn on_conversation_complete(&self, seed_index: usize, success: bool) {
        if success {
            println!("  {} conversation {}", "v".green(), seed_index + 1);
        } else {
            println!("  {} conversation {} (failed)", "x".red(), seed_index + 1);
        }
    }

    fn on_run_complete(&self) {
        println!();
    }
}
