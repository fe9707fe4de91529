//! Display functions for command results

use super::formatters::{create_progress_bar, paint_code, score_to_pegs};
use crate::commands::{AnalysisResult, CheckResult};
use colored::Colorize;

/// Print the result of checking one guess
pub fn print_check_result(result: &CheckResult) {
    println!("\n{}", "─".repeat(40).cyan());
    println!(
        "Secret: {}   Guess: {}",
        paint_code(result.secret),
        paint_code(result.guess)
    );
    println!("{}", "─".repeat(40).cyan());

    println!("  Right color, right place: {}", result.score.exact());
    println!("  Right color, wrong place: {}", result.score.color_only());
    println!("  Pegs:                     {}", score_to_pegs(result.score));

    if result.score.is_perfect() {
        println!("\n{}", "✅ Code broken!".green().bold());
    }
}

/// Print the result of guess analysis
pub fn print_analysis_result(result: &AnalysisResult) {
    println!("\n{}", "═".repeat(60).cyan());
    println!(
        " {} {} ",
        "GUESS ANALYSIS:".bright_cyan().bold(),
        paint_code(result.guess)
    );
    println!("{}", "═".repeat(60).cyan());

    println!("\n📊 Against {} possible secrets:", result.total_secrets);
    println!(
        "   Entropy:     {}",
        format!("{:.3} bits", result.entropy).bright_yellow()
    );
    println!(
        "   Expected:    {:.1} secrets remain",
        result.expected_remaining
    );
    println!("   Worst case:  {} secrets", result.worst_case);

    println!("\n📈 {}", "Partitions:".bright_cyan().bold());
    for (score, count) in &result.partitions {
        let pct = *count as f64 / result.total_secrets as f64 * 100.0;
        let bar = create_progress_bar(pct, 100.0, 30);
        println!(
            "   {} ({}/{}) {} {count:4} ({pct:5.1}%)",
            score_to_pegs(*score),
            score.exact(),
            score.color_only(),
            bar.green()
        );
    }
}
