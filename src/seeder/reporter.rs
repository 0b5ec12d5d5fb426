//! Seeding progress output port.
//!
//! [`SeedReporter`] receives one callback per reconciliation step. The
//! console implementation prints the line format operators (and scripts
//! grepping the output) rely on.

use crate::domain::prompt::PromptAlias;

use super::report::SeedReport;

/// Progress notifier for a seeding run
///
/// All methods have default no-op implementations.
pub trait SeedReporter: Send + Sync {
    /// The prompt already exists and was left alone
    fn on_skip(&self, _name: &str) {}

    /// A new version was registered
    fn on_created(&self, _name: &str, _version: u64) {}

    /// An alias now points at the new version
    fn on_alias(&self, _name: &str, _alias: &PromptAlias, _version: u64) {}

    /// Every definition was processed
    fn on_complete(&self, _report: &SeedReport) {}
}

pub fn skip_line(name: &str) -> String {
    format!("[skip] '{}' already exists", name)
}

pub fn created_line(name: &str, version: u64) -> String {
    format!("[created] '{}' v{}", name, version)
}

pub fn alias_line(name: &str, alias: &PromptAlias, version: u64) -> String {
    format!("[alias] '{}' → {} = v{}", name, alias, version)
}

pub const DONE_LINE: &str = "Done.";

/// Writes progress lines to stdout
#[derive(Debug, Default, Clone, Copy)]
pub struct ConsoleReporter;

impl SeedReporter for ConsoleReporter {
    fn on_skip(&self, name: &str) {
        println!("{}", skip_line(name));
    }

    fn on_created(&self, name: &str, version: u64) {
        println!("{}", created_line(name, version));
    }

    fn on_alias(&self, name: &str, alias: &PromptAlias, version: u64) {
        println!("{}", alias_line(name, alias, version));
    }

    fn on_complete(&self, _report: &SeedReport) {
        println!("{}", DONE_LINE);
    }
}
