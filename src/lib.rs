// Wrestling Standings - Core Library
// Results log → bouts → team and wrestler standings → CSV reports

pub mod config;
pub mod parser;
pub mod report;
pub mod rules;
pub mod run;
pub mod scoring;

// Re-export commonly used types
pub use config::RunConfig;
pub use parser::{Bout, BoutExtractor, Competitor, ParsedLog, BOUT_PATTERN};
pub use report::{export_reports, write_team_report, write_wrestler_report};
pub use rules::{advancement_points, bonus_points, placement_points};
pub use run::run;
pub use scoring::{tally, Standings, TeamStanding, WrestlerRecord, WrestlerStanding};

/// Library version
pub const VERSION: &str = env!("CARGO_PKG_VERSION");
