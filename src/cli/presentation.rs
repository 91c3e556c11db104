//! CLI presentation: terminal formatting for run results.

use crate::aggregate::RunSummary;

/// One success notice per written digest, then the completion line.
pub fn format_run_summary(summary: &RunSummary) -> String {
    let mut out = String::new();
    for path in &summary.written {
        out.push_str(&format!(
            "File '{}' has been generated successfully.\n",
            path.display()
        ));
    }
    out.push_str("All directories have been processed.");
    out
}
