use std::io::Write;
use std::path::Path;

use anyhow::{Context, Result};

use crate::models::AuditReport;

/// Machine-readable report output.
pub struct ReportWriter<'a> {
    report: &'a AuditReport,
}

impl<'a> ReportWriter<'a> {
    pub fn new(report: &'a AuditReport) -> Self {
        Self { report }
    }

    /// Write the report to a JSON file.
    pub fn write_json(&self, path: &Path) -> Result<()> {
        let file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        serde_json::to_writer_pretty(file, self.report).context("Failed to write JSON")?;
        Ok(())
    }
}

/// Human-readable report output.
pub struct ReportRenderer<'a> {
    report: &'a AuditReport,
}

impl<'a> ReportRenderer<'a> {
    pub fn new(report: &'a AuditReport) -> Self {
        Self { report }
    }

    /// Format the report as display text.
    pub fn format(&self) -> String {
        let report = self.report;
        let mut output = String::new();

        output.push_str("Audit Report\n");
        output.push_str("============\n");
        output.push_str(&format!("Analyzed at:       {}\n", report.analyzed_at));
        output.push_str(&format!("Total duration:    {}\n", report.total_duration));
        output.push_str(&format!("Total messages:    {}\n", report.total_messages));
        output.push_str(&format!("Customer messages: {}\n", report.customer_messages));
        output.push_str(&format!("Agent messages:    {}\n", report.agent_messages));
        output.push('\n');

        output.push_str("Scores\n");
        output.push_str("------\n");
        output.push_str(&format!("Empathy:       {:.1}/10\n", report.scores.empathy));
        output.push_str(&format!(
            "Response time: {:.1}/10\n",
            report.scores.response_time
        ));
        output.push_str(&format!("Overall:       {:.1}/10\n", report.scores.overall));
        output.push('\n');

        output.push_str("Details\n");
        output.push_str("-------\n");
        output.push_str(&format!(
            "Positive messages:  {}\n",
            report.positive_messages
        ));
        output.push_str(&format!(
            "Mean response time: {:.1}s\n",
            report.mean_response_secs
        ));
        output.push_str(&format!("Slow responses:     {}\n", report.slow_responses));
        output.push('\n');

        output.push_str("Recommendations\n");
        output.push_str("---------------\n");
        output.push_str(&format!("{}\n", overall_assessment(report.scores.overall)));
        if report.slow_responses > 0 {
            output.push_str(&format!(
                "Reduce response time ({} slow responses found).\n",
                report.slow_responses
            ));
        }
        if report.positive_messages < 3 {
            output.push_str("Increase use of positive, empathetic language.\n");
        }

        output
    }

    /// Write the formatted report to a text file.
    pub fn write_file(&self, path: &Path) -> Result<()> {
        let mut file = std::fs::File::create(path)
            .with_context(|| format!("Failed to create file: {:?}", path))?;
        write!(file, "{}", self.format())?;
        Ok(())
    }
}

fn overall_assessment(overall: f64) -> &'static str {
    if overall >= 8.0 {
        "Excellent service, keep it up."
    } else if overall >= 6.0 {
        "Good service with room for improvement."
    } else if overall >= 4.0 {
        "Average service; focus on empathy and responsiveness."
    } else {
        "Service needs significant improvement."
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::ScoreBreakdown;

    fn sample_report() -> AuditReport {
        AuditReport {
            analyzed_at: "01/08/2026 14:30:00".to_string(),
            total_duration: "00:02:00".to_string(),
            total_messages: 4,
            customer_messages: 2,
            agent_messages: 2,
            positive_messages: 1,
            mean_response_secs: 42.5,
            slow_responses: 1,
            scores: ScoreBreakdown {
                empathy: 7.0,
                response_time: 4.0,
                overall: 5.8,
            },
        }
    }

    #[test]
    fn test_write_json_exposes_all_fields() {
        let report = sample_report();
        let file = tempfile::NamedTempFile::new().unwrap();

        ReportWriter::new(&report).write_json(file.path()).unwrap();

        let value: serde_json::Value =
            serde_json::from_str(&std::fs::read_to_string(file.path()).unwrap()).unwrap();
        assert_eq!(value["total_messages"], 4);
        assert_eq!(value["customer_messages"], 2);
        assert_eq!(value["agent_messages"], 2);
        assert_eq!(value["positive_messages"], 1);
        assert_eq!(value["mean_response_secs"], 42.5);
        assert_eq!(value["slow_responses"], 1);
        assert_eq!(value["total_duration"], "00:02:00");
        assert_eq!(value["scores"]["empathy"], 7.0);
        assert_eq!(value["scores"]["response_time"], 4.0);
        assert_eq!(value["scores"]["overall"], 5.8);
    }

    #[test]
    fn test_format_contains_scores_and_recommendations() {
        let report = sample_report();
        let text = ReportRenderer::new(&report).format();

        assert!(text.contains("Empathy:       7.0/10"));
        assert!(text.contains("Response time: 4.0/10"));
        assert!(text.contains("Overall:       5.8/10"));
        assert!(text.contains("Average service"));
        assert!(text.contains("1 slow responses found"));
        assert!(text.contains("positive, empathetic language"));
    }

    #[test]
    fn test_assessment_tiers() {
        assert_eq!(overall_assessment(9.0), "Excellent service, keep it up.");
        assert_eq!(
            overall_assessment(8.0),
            "Excellent service, keep it up."
        );
        assert_eq!(
            overall_assessment(6.5),
            "Good service with room for improvement."
        );
        assert_eq!(
            overall_assessment(4.0),
            "Average service; focus on empathy and responsiveness."
        );
        assert_eq!(
            overall_assessment(3.9),
            "Service needs significant improvement."
        );
    }
}
