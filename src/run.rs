// 🤼 Standings run - read results log → score bouts → write reports
//
// A missing or unreadable results log is reported on stderr and ends the
// run without touching either report; it is not an error for the caller.

use crate::config::RunConfig;
use crate::parser::BoutExtractor;
use crate::report::export_reports;
use crate::scoring::tally;
use anyhow::Result;

pub fn run(config: &RunConfig) -> Result<()> {
    println!("🤼 Wrestling Standings v{}", crate::VERSION);
    println!("━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━━");

    // 1. Read results log
    if !config.input.exists() {
        eprintln!("❌ Could not find file '{}'", config.input.display());
        eprintln!("   Place the results log in the working directory");
        eprintln!("   or pass its path as the first argument.");
        return Ok(());
    }

    println!("\n📂 Reading {}...", config.input.display());
    let extractor = BoutExtractor::new()?;
    let parsed = match extractor.load_log(&config.input) {
        Ok(parsed) => parsed,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            return Ok(());
        }
    };
    println!("✓ Parsed {}", parsed.summary());

    // 2. Score bouts
    println!("\n🧮 Scoring bouts...");
    let standings = tally(&parsed.bouts);
    log::info!(
        "Scored {} bouts: {} teams, {} wrestlers, {:.1} points",
        standings.bouts_scored(),
        standings.team_count(),
        standings.wrestler_count(),
        standings.team_points_total()
    );
    println!(
        "✓ {} teams, {} wrestlers",
        standings.team_count(),
        standings.wrestler_count()
    );

    // 3. Write reports
    println!("\n💾 Writing reports...");
    export_reports(config, &standings)?;
    println!("✓ Successfully generated '{}'", config.team_report.display());
    println!(
        "✓ Successfully generated '{}' with spaced teams",
        config.wrestler_report.display()
    );

    Ok(())
}

// ============================================================================
// TESTS
// ============================================================================
