//! Aggregation of comparison records into a verdict

use std::path::PathBuf;

use crate::compare::CellComparison;

/// Message reported when every examined cell matched.
pub const SUCCESS_MESSAGE: &str = "Worksheets are identical.";

/// The aggregated result of one comparison run.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ComparisonOutcome {
    /// Whether every examined cell matched
    pub success: bool,
    /// Share of failing cells, in whole percent (0..=100)
    pub error_rate: u8,
    /// Number of failing records
    pub failed: usize,
    /// Number of records examined
    pub total: usize,
    /// Human-readable verdict; on failure, a header plus one line per
    /// failing cell
    pub message: String,
    /// Where the annotated diff report was written, when one was
    pub report: Option<PathBuf>,
}

impl ComparisonOutcome {
    /// Reduce records to a verdict.
    ///
    /// An empty record set is vacuously successful. On failure, every failing
    /// record (in original order) also gets its per-cell line stored back into
    /// its `message` field so the report writer can reuse it as a cell note.
    pub fn aggregate(records: &mut [CellComparison]) -> Self {
        let total = records.len();
        let failed = records.iter().filter(|r| !r.equal).count();

        if failed == 0 {
            return Self {
                success: true,
                error_rate: 0,
                failed: 0,
                total,
                message: SUCCESS_MESSAGE.to_string(),
                report: None,
            };
        }

        // total > 0 here since failed > 0
        let error_rate = (failed as f64 * 100.0 / total as f64).round() as u8;

        let mut message = format!("{}% ({} of {}) error rate.", error_rate, failed, total);
        for record in records.iter_mut().filter(|r| !r.equal) {
            let line = record.describe();
            message.push('\n');
            message.push_str(&line);
            record.message = Some(line);
        }

        Self {
            success: false,
            error_rate,
            failed,
            total,
            message,
            report: None,
        }
    }
}
