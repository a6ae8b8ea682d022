// 🏷️ Scoring Rules - NFHS individual tournament scoring
// Advancement, bonus and placement points as pure lookups

// ============================================================================
// ADVANCEMENT POINTS
// ============================================================================

/// Round labels worth full advancement credit (championship bracket)
const CHAMPIONSHIP_ROUNDS: [&str; 3] = ["Champ.", "Quarterfinal", "Semifinal"];

/// Round label prefix for the consolation bracket
const CONSOLATION_ROUND: &str = "Cons.";

/// Advancement points for winning a bout in the given round.
///
/// Matching is case-sensitive substring containment on the round label:
/// championship rounds are worth 2.0, consolation rounds 1.0, anything
/// else (placement matches included) 0.0.
pub fn advancement_points(round_name: &str) -> f64 {
    if CHAMPIONSHIP_ROUNDS.iter().any(|r| round_name.contains(r)) {
        2.0
    } else if round_name.contains(CONSOLATION_ROUND) {
        1.0
    } else {
        0.0
    }
}

// ============================================================================
// BONUS POINTS
// ============================================================================

/// Win methods that count like a fall
const FALL_EQUIVALENTS: [&str; 3] = ["forfeit", "default", "disqualification"];

/// Bonus points for the manner of victory.
///
/// The method is lowercased before lookup. Order matters: a plain fall is
/// checked first with "tech" excluded, so "Tech Fall" falls through to its
/// own 1.5 branch.
pub fn bonus_points(win_method: &str) -> f64 {
    let method = win_method.to_lowercase();

    if method.contains("fall") && !method.contains("tech") {
        return 2.0;
    }
    if FALL_EQUIVALENTS.iter().any(|m| method.contains(m)) {
        return 2.0;
    }
    if method.contains("tech fall") {
        return 1.5;
    }
    if method.contains("major decision") {
        return 1.0;
    }
    0.0
}

// ============================================================================
// PLACEMENT POINTS
// ============================================================================

/// Placement matches in priority order: (round label, winner pts, loser pts)
const PLACEMENT_TABLE: [(&str, f64, f64); 3] = [
    ("1st Place Match", 16.0, 12.0),
    ("3rd Place Match", 10.0, 9.0),
    ("5th Place Match", 7.0, 6.0),
];

/// Placement points as `(winner, loser)`; `(0.0, 0.0)` when the round is
/// not a placement match.
pub fn placement_points(round_name: &str) -> (f64, f64) {
    PLACEMENT_TABLE
        .iter()
        .find(|(label, _, _)| round_name.contains(label))
        .map(|&(_, winner, loser)| (winner, loser))
        .unwrap_or((0.0, 0.0))
}

// ============================================================================
// TESTS
// ============================================================================
