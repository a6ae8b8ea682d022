// ⚙️ Run configuration - where the results log is read and reports are written

use std::path::{Path, PathBuf};

/// Results log read when no path is given
pub const DEFAULT_INPUT: &str = "vhsl_girls_states_matches.txt";

pub const TEAM_REPORT: &str = "team_scores.csv";
pub const WRESTLER_REPORT: &str = "wrestler_scores.csv";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RunConfig {
    /// Plain-text results log, one bout per line
    pub input: PathBuf,

    /// Team ranking CSV
    pub team_report: PathBuf,

    /// Wrestler listing CSV
    pub wrestler_report: PathBuf,
}

impl RunConfig {
    /// Reports go into `dir` under their fixed names
    pub fn in_dir<P: AsRef<Path>>(dir: P, input: PathBuf) -> Self {
        let dir = dir.as_ref();
        RunConfig {
            input,
            team_report: dir.join(TEAM_REPORT),
            wrestler_report: dir.join(WRESTLER_REPORT),
        }
    }

    /// Build from command-line arguments (program name already stripped).
    /// The first argument, if any, replaces the default input path.
    pub fn from_args<I: IntoIterator<Item = String>>(args: I) -> Self {
        let input = args
            .into_iter()
            .next()
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_INPUT));

        RunConfig {
            input,
            ..RunConfig::default()
        }
    }
}

impl Default for RunConfig {
    fn default() -> Self {
        RunConfig {
            input: PathBuf::from(DEFAULT_INPUT),
            team_report: PathBuf::from(TEAM_REPORT),
            wrestler_report: PathBuf::from(WRESTLER_REPORT),
        }
    }
}
