// 🏗️ Bout Parser - Match Extractor
// Turns free-text result lines into structured bouts

use anyhow::{Context, Result};
use regex::Regex;
use std::fs;
use std::path::Path;

// ============================================================================
// CORE TYPES
// ============================================================================

/// One side of a bout as it appears in the result line
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Competitor {
    /// Wrestler name, exactly as written (no normalization)
    pub name: String,

    /// Team label from the parentheses after the name
    pub team: String,
}

impl Competitor {
    pub fn new(name: impl Into<String>, team: impl Into<String>) -> Self {
        Competitor {
            name: name.into(),
            team: team.into(),
        }
    }
}

/// Bout - one parsed result line
///
/// Immutable once extracted; the aggregator consumes it and drops it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Bout {
    /// Bracket stage, e.g. "Champ. Round 1" or "1st Place Match"
    pub round: String,

    pub winner: Competitor,

    /// Win method as written ("Fall", "Tech Fall", "Decision", ...)
    pub method: String,

    pub loser: Competitor,
}

// ============================================================================
// EXTRACTOR
// ============================================================================

/// Shape of a result line:
/// `<round> - <winner> (<team>) ... won <method> over <loser> (<team>)`
///
/// Every group is lazy so the first occurrence of each delimiter wins.
/// Anything after the loser's team (scores, fall times) is ignored.
pub const BOUT_PATTERN: &str = r"^(.*?) - (.*?) \((.*?)\).*? won (.*?) over (.*?) \((.*?)\)";

/// BoutExtractor - compiled line pattern
pub struct BoutExtractor {
    pattern: Regex,
}

impl BoutExtractor {
    pub fn new() -> Result<Self> {
        let pattern = Regex::new(BOUT_PATTERN).context("Failed to compile bout pattern")?;
        Ok(BoutExtractor { pattern })
    }

    /// Extract a bout from one line, or `None` when the line does not have
    /// the expected shape (headers, blank lines, byes).
    pub fn extract(&self, line: &str) -> Option<Bout> {
        let caps = self.pattern.captures(line.trim())?;
        let group = |i: usize| {
            caps.get(i)
                .map(|m| m.as_str().trim().to_string())
                .unwrap_or_default()
        };

        Some(Bout {
            round: group(1),
            winner: Competitor::new(group(2), group(3)),
            method: group(4),
            loser: Competitor::new(group(5), group(6)),
        })
    }

    /// Run the extractor over every line of a results log, in order.
    ///
    /// `\n`, `\r\n` and a lone `\r` all end a line.
    pub fn parse_log(&self, text: &str) -> ParsedLog {
        let mut parsed = ParsedLog::default();
        let text = text.replace("\r\n", "\n").replace('\r', "\n");

        for (line_num, line) in text.lines().enumerate() {
            parsed.lines_read += 1;

            match self.extract(line) {
                Some(bout) => parsed.bouts.push(bout),
                None => {
                    parsed.lines_skipped += 1;
                    if !line.trim().is_empty() {
                        log::debug!("Skipping line {}: {:?}", line_num + 1, line);
                    }
                }
            }
        }

        parsed
    }

    /// Read a UTF-8 results file and parse it
    pub fn load_log(&self, path: &Path) -> Result<ParsedLog> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("Failed to read results file: {}", path.display()))?;

        Ok(self.parse_log(&text))
    }
}

// ============================================================================
// PARSED LOG
// ============================================================================

/// Bouts from one results log plus line counts
#[derive(Debug, Clone, Default)]
pub struct ParsedLog {
    /// Bouts in input order
    pub bouts: Vec<Bout>,

    pub lines_read: usize,

    /// Lines that did not match the bout shape
    pub lines_skipped: usize,
}

impl ParsedLog {
    pub fn summary(&self) -> String {
        format!(
            "{} bouts from {} lines ({} skipped)",
            self.bouts.len(),
            self.lines_read,
            self.lines_skipped
        )
    }
}

// ============================================================================
// TESTS
// ============================================================================

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;
    use tempfile::TempDir;

    fn extractor() -> BoutExtractor {
        BoutExtractor::new().unwrap()
    }

    #[test]
    fn test_extract_championship_fall() {
        let line = "Champ. Round 1 - Jane Doe (Lakeview) won Fall over Amy Lee (Westview) 1:23";
        let bout = extractor().extract(line).unwrap();

        assert_eq!(bout.round, "Champ. Round 1");
        assert_eq!(bout.winner, Competitor::new("Jane Doe", "Lakeview"));
        assert_eq!(bout.method, "Fall");
        assert_eq!(bout.loser, Competitor::new("Amy Lee", "Westview"));
    }

    #[test]
    fn test_extract_skips_text_between_team_and_won() {
        let line = "Semifinal - Kim Park (North Ridge) 32-4 won by Major Decision over Lia Cruz (Oakton) 12-2";
        let bout = extractor().extract(line).unwrap();

        assert_eq!(bout.winner, Competitor::new("Kim Park", "North Ridge"));
        assert_eq!(bout.method, "by Major Decision");
        assert_eq!(bout.loser, Competitor::new("Lia Cruz", "Oakton"));
    }

    #[test]
    fn test_extract_keeps_method_case() {
        let line = "Cons. Round 2 - A B (T1) won TECH FALL over C D (T2) TF 17-2";
        let bout = extractor().extract(line).unwrap();
        assert_eq!(bout.method, "TECH FALL");
    }

    #[test]
    fn test_extract_trims_surrounding_whitespace() {
        let line = "   1st Place Match - John Smith ( Eastview ) won  Decision  over Bob Ray (Lakeview)   \t";
        let bout = extractor().extract(line).unwrap();

        assert_eq!(bout.round, "1st Place Match");
        assert_eq!(bout.winner, Competitor::new("John Smith", "Eastview"));
        assert_eq!(bout.method, "Decision");
        assert_eq!(bout.loser, Competitor::new("Bob Ray", "Lakeview"));
    }

    #[test]
    fn test_extract_earliest_delimiter_wins() {
        // First " - " ends the round; first " (" ends the winner
        let line = "Cons. Semi - Final - Ana (Ice) (Fire) won Fall over Bea (Rock)";
        let bout = extractor().extract(line).unwrap();

        assert_eq!(bout.round, "Cons. Semi");
        assert_eq!(bout.winner.name, "Final - Ana");
        assert_eq!(bout.winner.team, "Ice");
        assert_eq!(bout.loser, Competitor::new("Bea", "Rock"));
    }

    #[test]
    fn test_extract_rejects_non_bout_lines() {
        let ex = extractor();

        assert!(ex.extract("").is_none());
        assert!(ex.extract("   ").is_none());
        assert!(ex.extract("106 lbs - Girls State Championship").is_none());
        assert!(ex.extract("Champ. Round 1 - Jane Doe (Lakeview) received a bye").is_none());
        // Missing loser team parentheses
        assert!(ex.extract("Champ. Round 1 - Jane Doe (Lakeview) won Fall over Amy Lee").is_none());
    }

    #[test]
    fn test_parse_log_counts_lines() {
        let text = "\
106 Girls Bracket
Champ. Round 1 - Jane Doe (Lakeview) won Fall over Amy Lee (Westview) 1:23

1st Place Match - John Smith (Eastview) won Decision over Bob Ray (Lakeview) 5-2
";
        let parsed = extractor().parse_log(text);

        assert_eq!(parsed.lines_read, 4);
        assert_eq!(parsed.lines_skipped, 2);
        assert_eq!(parsed.bouts.len(), 2);
        assert_eq!(parsed.bouts[0].winner.name, "Jane Doe");
        assert_eq!(parsed.bouts[1].winner.name, "John Smith");
        assert_eq!(parsed.summary(), "2 bouts from 4 lines (2 skipped)");
    }

    #[test]
    fn test_parse_log_handles_crlf() {
        let text = "Quarterfinal - A (X) won Forfeit over B (Y)\r\nQuarterfinal - C (X) won Fall over D (Y)\r\n";
        let parsed = extractor().parse_log(text);

        assert_eq!(parsed.bouts.len(), 2);
        assert_eq!(parsed.bouts[1].loser, Competitor::new("D", "Y"));
    }

    #[test]
    fn test_parse_log_handles_bare_cr() {
        let text = "Quarterfinal - A (X) won Fall over B (Y)\rQuarterfinal - C (X) won Fall over D (Y)\r";
        let parsed = extractor().parse_log(text);

        assert_eq!(parsed.lines_read, 2);
        assert_eq!(parsed.bouts.len(), 2);
        assert_eq!(parsed.bouts[0].loser, Competitor::new("B", "Y"));
        assert_eq!(parsed.bouts[1].winner, Competitor::new("C", "X"));
    }

    #[test]
    fn test_parse_log_mixed_line_endings() {
        let text = "header\r\nQuarterfinal - A (X) won Fall over B (Y)\r\rSemifinal - C (X) won Forfeit over D (Y)\n";
        let parsed = extractor().parse_log(text);

        // header, bout, blank, bout
        assert_eq!(parsed.lines_read, 4);
        assert_eq!(parsed.lines_skipped, 2);
        assert_eq!(parsed.bouts.len(), 2);
    }

    #[test]
    fn test_load_log_from_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("matches.txt");
        let mut file = fs::File::create(&path).unwrap();
        writeln!(file, "Champ. Round 1 - Jane Doe (Lakeview) won Fall over Amy Lee (Westview) 1:23").unwrap();
        writeln!(file, "not a bout").unwrap();

        let parsed = extractor().load_log(&path).unwrap();
        assert_eq!(parsed.bouts.len(), 1);
        assert_eq!(parsed.lines_skipped, 1);
    }

    #[test]
    fn test_load_log_missing_file() {
        let dir = TempDir::new().unwrap();
        let result = extractor().load_log(&dir.path().join("missing.txt"));

        assert!(result.is_err());
        let message = format!("{:#}", result.unwrap_err());
        assert!(message.contains("Failed to read results file"));
    }
}
