//! Terminal output formatting with colors.

use colored::Colorize;

use crate::result::{HybridResult, TestResult};
use crate::types::Alternative;

/// Format a `TestResult` for human-readable terminal output.
///
/// Uses ANSI colors for the significance verdict and renders a p-value of
/// exactly zero as the bound `p < 1/replicates` rather than "p = 0".
pub fn format_result(result: &TestResult) -> String {
    let mut output = String::new();

    let header = if result.p_value_bound() < 0.05 {
        format!(
            "{} {}",
            "\u{2713}".green().bold(),
            "SIGNIFICANT AT 0.05".green().bold()
        )
    } else {
        "NOT SIGNIFICANT AT 0.05".dimmed().bold().to_string()
    };
    output.push_str(&header);
    output.push('\n');

    output.push_str(&format!("  Observed statistic: {:.4}\n", result.observed));
    output.push_str(&format!(
        "  Null distribution:  mean {:.4}, sd {:.4} ({} replicates)\n",
        result.null_mean, result.null_sd, result.replicates
    ));
    output.push_str(&format!("  z-score: {:.3}\n", result.z_score));

    let p_line = if result.is_p_bounded() {
        format!(
            "  p < {:.4} ({})",
            result.p_value_bound(),
            "below replicate resolution".italic()
        )
    } else {
        format!("  p = {:.4}", result.p_value)
    };
    output.push_str(&p_line);
    output.push('\n');

    output.push_str(&format!(
        "  Alternative: {}\n",
        format_alternative(result.alternative)
    ));

    output
}

/// Format a `HybridResult` for human-readable terminal output.
pub fn format_hybrid_result(result: &HybridResult) -> String {
    let mut output = String::new();

    output.push_str(&"HYBRID INDEPENDENT-SAMPLE TEST".bold().to_string());
    output.push('\n');
    output.push_str(&format!(
        "  Replicate differences: mean {:.4}, sd {:.4} ({} replicates)\n",
        result.mean, result.sd, result.replicates
    ));

    let prop = result.proportion_nonnegative;
    let prop_str = format!("  P(indep diff >= relabeled diff) = {prop:.3}");
    let prop_colored = if (0.4..=0.6).contains(&prop) {
        prop_str.dimmed().to_string()
    } else {
        prop_str.yellow().to_string()
    };
    output.push_str(&prop_colored);
    output.push('\n');

    output
}

/// Format an `Alternative` for display.
fn format_alternative(alternative: Alternative) -> &'static str {
    match alternative {
        Alternative::TwoSided => "two-sided",
        Alternative::Greater => "greater",
        Alternative::Less => "less",
    }
}
