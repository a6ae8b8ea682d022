// 🧮 Score Aggregator - Team and wrestler standings
// Applies the rulebook to each bout and accumulates running totals
//
// Attribution rules:
//   placement points  → winner AND loser (only in placement matches)
//   advancement/bonus → winner only
//
// Every point given to a wrestler is given to the team named on the same
// bout, so team totals and wrestler totals always sum to the same value.

use crate::parser::Bout;
use crate::rules::{advancement_points, bonus_points, placement_points};
use serde::Serialize;
use std::collections::HashMap;

// ============================================================================
// RECORDS
// ============================================================================

/// Running totals for one wrestler
///
/// Invariant: `total == advancement + bonus + placement`
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WrestlerRecord {
    /// Team label from the most recent bout this wrestler appeared in
    pub team: String,
    pub total: f64,
    pub advancement: f64,
    pub bonus: f64,
    pub placement: f64,
}

impl WrestlerRecord {
    fn add_placement(&mut self, points: f64) {
        self.placement += points;
        self.total += points;
    }

    fn add_win(&mut self, advancement: f64, bonus: f64) {
        self.advancement += advancement;
        self.bonus += bonus;
        self.total += advancement + bonus;
    }
}

/// One row of the team ranking
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct TeamStanding {
    /// 1-based position in the ranking
    pub rank: usize,
    pub team: String,
    pub total: f64,
}

/// One row of the wrestler listing
#[derive(Debug, Clone, PartialEq)]
pub struct WrestlerStanding<'a> {
    pub name: &'a str,
    pub record: &'a WrestlerRecord,
}

// ============================================================================
// STANDINGS
// ============================================================================

/// Accumulators for one scoring run
///
/// Teams keep the order in which they first received points; the ranking
/// sort is stable, so equal totals stay in that order.
#[derive(Debug, Clone, Default)]
pub struct Standings {
    /// (team, total) in first-award order
    teams: Vec<(String, f64)>,

    /// team → index into `teams`
    team_index: HashMap<String, usize>,

    wrestlers: HashMap<String, WrestlerRecord>,

    bouts_scored: usize,
}

impl Standings {
    pub fn new() -> Self {
        Self::default()
    }

    /// Score a single bout
    pub fn record(&mut self, bout: &Bout) {
        self.bouts_scored += 1;

        // Both wrestlers are registered on every bout; the latest team label wins
        self.wrestler_mut(&bout.winner.name).team = bout.winner.team.clone();
        self.wrestler_mut(&bout.loser.name).team = bout.loser.team.clone();

        // Placement points, gated on the winner's share
        let (winner_place, loser_place) = placement_points(&bout.round);
        if winner_place > 0.0 {
            self.wrestler_mut(&bout.winner.name).add_placement(winner_place);
            self.add_team_points(&bout.winner.team, winner_place);

            self.wrestler_mut(&bout.loser.name).add_placement(loser_place);
            self.add_team_points(&bout.loser.team, loser_place);
        }

        // Advancement and bonus go to the winner only
        let advancement = advancement_points(&bout.round);
        let bonus = bonus_points(&bout.method);
        self.wrestler_mut(&bout.winner.name).add_win(advancement, bonus);
        self.add_team_points(&bout.winner.team, advancement + bonus);
    }

    /// Get-or-insert a zeroed wrestler record
    fn wrestler_mut(&mut self, name: &str) -> &mut WrestlerRecord {
        self.wrestlers.entry(name.to_string()).or_default()
    }

    /// Adding 0.0 still creates the team entry
    fn add_team_points(&mut self, team: &str, points: f64) {
        match self.team_index.get(team) {
            Some(&i) => self.teams[i].1 += points,
            None => {
                self.team_index.insert(team.to_string(), self.teams.len());
                self.teams.push((team.to_string(), points));
            }
        }
    }

    // ========================================================================
    // QUERIES
    // ========================================================================

    pub fn team_score(&self, team: &str) -> Option<f64> {
        self.team_index.get(team).map(|&i| self.teams[i].1)
    }

    pub fn wrestler(&self, name: &str) -> Option<&WrestlerRecord> {
        self.wrestlers.get(name)
    }

    pub fn team_count(&self) -> usize {
        self.teams.len()
    }

    pub fn wrestler_count(&self) -> usize {
        self.wrestlers.len()
    }

    pub fn bouts_scored(&self) -> usize {
        self.bouts_scored
    }

    pub fn team_points_total(&self) -> f64 {
        self.teams.iter().map(|(_, total)| total).sum()
    }

    pub fn wrestler_points_total(&self) -> f64 {
        self.wrestlers.values().map(|w| w.total).sum()
    }

    /// Teams by total descending; ties keep first-award order
    pub fn ranked_teams(&self) -> Vec<TeamStanding> {
        let mut sorted: Vec<&(String, f64)> = self.teams.iter().collect();
        sorted.sort_by(|a, b| b.1.total_cmp(&a.1));

        sorted
            .into_iter()
            .enumerate()
            .map(|(i, (team, total))| TeamStanding {
                rank: i + 1,
                team: team.clone(),
                total: *total,
            })
            .collect()
    }

    /// Wrestlers by (team, name), both ascending
    pub fn sorted_wrestlers(&self) -> Vec<WrestlerStanding<'_>> {
        let mut rows: Vec<WrestlerStanding<'_>> = self
            .wrestlers
            .iter()
            .map(|(name, record)| WrestlerStanding { name, record })
            .collect();
        rows.sort_by(|a, b| {
            a.record
                .team
                .cmp(&b.record.team)
                .then_with(|| a.name.cmp(b.name))
        });
        rows
    }
}

/// Score a sequence of bouts from scratch
pub fn tally<'a, I>(bouts: I) -> Standings
where
    I: IntoIterator<Item = &'a Bout>,
{
    let mut standings = Standings::new();
    for bout in bouts {
        standings.record(bout);
    }
    standings
}

// ============================================================================
// TESTS
// ============================================================================
