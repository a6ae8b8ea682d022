// 📄 Report Writer - Team and wrestler CSV exports
//
// team_scores.csv      Rank, Team, Total Points
// wrestler_scores.csv  Team, Wrestler, Total Points, Advancement Pts, Bonus Pts, Placement Pts
//                      (blank row between teams)

use crate::config::RunConfig;
use crate::scoring::{Standings, TeamStanding, WrestlerStanding};
use anyhow::{Context, Result};
use csv::{Terminator, Writer, WriterBuilder};
use serde::Serialize;
use std::fs::File;
use std::io::Write;
use std::path::Path;

pub const TEAM_HEADER: [&str; 3] = ["Rank", "Team", "Total Points"];

pub const WRESTLER_HEADER: [&str; 6] = [
    "Team",
    "Wrestler",
    "Total Points",
    "Advancement Pts",
    "Bonus Pts",
    "Placement Pts",
];

/// Flattened wrestler row (field order = column order)
#[derive(Debug, Serialize)]
struct WrestlerRow<'a> {
    team: &'a str,
    wrestler: &'a str,
    total: f64,
    advancement: f64,
    bonus: f64,
    placement: f64,
}

impl<'a> From<&WrestlerStanding<'a>> for WrestlerRow<'a> {
    fn from(standing: &WrestlerStanding<'a>) -> Self {
        let record = standing.record;
        WrestlerRow {
            team: &record.team,
            wrestler: standing.name,
            total: record.total,
            advancement: record.advancement,
            bonus: record.bonus,
            placement: record.placement,
        }
    }
}

/// Headers are written by hand so empty reports still get them.
fn report_writer<W: Write>(out: W) -> Writer<W> {
    WriterBuilder::new()
        .has_headers(false)
        .terminator(Terminator::CRLF)
        .from_writer(out)
}

// ============================================================================
// WRITERS
// ============================================================================

/// Write the team ranking
pub fn write_team_report<W: Write>(out: W, teams: &[TeamStanding]) -> Result<()> {
    let mut wtr = report_writer(out);
    wtr.write_record(TEAM_HEADER)
        .context("Failed to write team report header")?;

    for team in teams {
        wtr.serialize(team)
            .with_context(|| format!("Failed to write team row: {}", team.team))?;
    }

    wtr.flush().context("Failed to flush team report")?;
    Ok(())
}

/// Write the wrestler listing, with a blank row each time the team changes.
///
/// Each team block gets its own csv writer; the separator is a bare line
/// break written straight to the sink (csv would quote an empty record).
pub fn write_wrestler_report<W: Write>(mut out: W, wrestlers: &[WrestlerStanding<'_>]) -> Result<()> {
    let mut header = report_writer(&mut out);
    header
        .write_record(WRESTLER_HEADER)
        .context("Failed to write wrestler report header")?;
    header.flush().context("Failed to flush wrestler report")?;
    drop(header);

    let blocks = wrestlers.chunk_by(|a, b| a.record.team == b.record.team);
    for (i, block) in blocks.enumerate() {
        if i > 0 {
            out.write_all(b"\r\n")
                .context("Failed to write team separator")?;
        }

        let mut wtr = report_writer(&mut out);
        for standing in block {
            wtr.serialize(WrestlerRow::from(standing))
                .with_context(|| format!("Failed to write wrestler row: {}", standing.name))?;
        }
        wtr.flush().context("Failed to flush wrestler report")?;
    }

    Ok(())
}

fn create_report(path: &Path) -> Result<File> {
    File::create(path).with_context(|| format!("Failed to create report: {}", path.display()))
}

/// Write both reports to the paths in `config`
pub fn export_reports(config: &RunConfig, standings: &Standings) -> Result<()> {
    let teams = standings.ranked_teams();
    write_team_report(create_report(&config.team_report)?, &teams)?;
    log::info!("Wrote {} teams to {}", teams.len(), config.team_report.display());

    let wrestlers = standings.sorted_wrestlers();
    write_wrestler_report(create_report(&config.wrestler_report)?, &wrestlers)?;
    log::info!(
        "Wrote {} wrestlers to {}",
        wrestlers.len(),
        config.wrestler_report.display()
    );

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
