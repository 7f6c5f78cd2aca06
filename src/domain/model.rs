use serde::{Deserialize, Serialize};

/// One row of the book-returns log. Dates stay textual until transform,
/// where they are parsed as `mm/dd/yyyy`.
#[derive(Debug, Clone, Deserialize)]
pub struct ReturnRecord {
    pub patron_id: String,
    pub date_returned: String,
    pub date_due: String,
}

/// One row of the fee report. `late_fees` is pre-rendered to two decimals.
#[derive(Debug, Clone, Serialize)]
pub struct FeeSummary {
    pub patron_id: String,
    pub late_fees: String,
}

#[derive(Debug, Clone)]
pub struct TransformResult {
    pub summaries: Vec<FeeSummary>,
    pub csv_output: String,
}
