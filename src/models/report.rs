use serde::Serialize;

/// The three calibrated scores, each in [0, 10].
#[derive(Debug, Clone, Copy, Serialize)]
pub struct ScoreBreakdown {
    pub empathy: f64,
    pub response_time: f64,
    /// Weighted combination, rounded to one decimal place.
    pub overall: f64,
}

/// Output record of one audit run.
///
/// Renderers consume exactly these fields; the record itself carries no
/// identity beyond the run it describes.
#[derive(Debug, Clone, Serialize)]
pub struct AuditReport {
    /// Local wall-clock time of the analysis, `DD/MM/YYYY HH:MM:SS`.
    pub analyzed_at: String,
    /// Conversation span between earliest and latest message, `HH:MM:SS`.
    pub total_duration: String,
    pub total_messages: usize,
    pub customer_messages: usize,
    pub agent_messages: usize,
    /// Agent messages containing at least one positive marker.
    pub positive_messages: usize,
    /// Arithmetic mean of the recorded response latencies, in seconds.
    pub mean_response_secs: f64,
    /// Latencies above the slow-response threshold.
    pub slow_responses: usize,
    pub scores: ScoreBreakdown,
}
