// Seeder modules
//
// Reconciles the compiled-in prompt catalog against the remote registry:
// existence check, register, alias, report.

pub mod catalog;
pub mod errors;
pub mod reconcile;
pub mod report;
pub mod reporter;

// Re-export main types
pub use errors::{SeedError, SeedResult};
pub use reconcile::{LookupPolicy, Seeder};
pub use report::{SeedEntry, SeedReport};
pub use reporter::{ConsoleReporter, SeedReporter};
