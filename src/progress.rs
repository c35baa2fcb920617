// src/progress.rs
use std::io::{self, Write};

/// Lightweight progress reporting used by long-running stages (scrape/clean).
/// Frontends implement this to surface status to users.
pub trait Progress {
    /// Called at the start with the total number of items (if known).
    fn begin(&mut self, _total: usize) {}

    /// Called when one logical unit completes (a page, a row).
    fn item_done(&mut self, _id: u32) {}

    /// Called at the end, successful or not.
    fn finish(&mut self) {}
}

/// Single rewriting console line: `Scraping pages...\t\t[3/12]`.
pub struct ConsoleProgress {
    label: &'static str,
    total: usize,
    done: usize,
}

impl ConsoleProgress {
    pub fn new(label: &'static str) -> Self {
        Self { label, total: 0, done: 0 }
    }

    fn line(&self) -> String {
        format!("{}\t\t[{}/{}]", self.label, self.done, self.total)
    }
}

impl Progress for ConsoleProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        self.done = 0;
    }

    fn item_done(&mut self, _id: u32) {
        self.done += 1;
        let mut out = io::stdout().lock();
        let _ = write!(out, "{}\r", self.line());
        let _ = out.flush();
    }

    fn finish(&mut self) {
        println!("\n");
    }
}

/// Records every call, for asserting on stage lifecycles.
#[cfg(test)]
#[derive(Debug, Default)]
pub(crate) struct Recording {
    pub total: Option<usize>,
    pub done: Vec<u32>,
    pub finished: bool,
}

#[cfg(test)]
impl Progress for Recording {
    fn begin(&mut self, total: usize) {
        self.total = Some(total);
    }
    fn item_done(&mut self, id: u32) {
        self.done.push(id);
    }
    fn finish(&mut self) {
        self.finished = true;
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn console_line_counts_items() {
        let mut p = ConsoleProgress::new("Cleaning entries...");
        p.begin(4);
        p.item_done(0);
        p.item_done(1);
        assert_eq!(p.line(), "Cleaning entries...\t\t[2/4]");
    }
}
