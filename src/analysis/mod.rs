pub mod empathy;
pub mod response_time;

pub use empathy::count_positive_messages;
pub use response_time::{ResponseTimeStats, analyze_response_times};

use chrono::{Local, NaiveTime};

use crate::criteria::CriteriaSet;
use crate::models::{AuditReport, Message, Role, ScoreBreakdown};

/// Run the full audit over an ordered message sequence.
///
/// Partitions messages by role, measures response latency and positive
/// language, scores both axes against the criteria, and stamps the result
/// with the local wall clock. Degenerate inputs (no messages, no agent
/// messages, no latency pairs) produce a valid report, never an error.
pub fn audit(messages: &[Message], criteria: &CriteriaSet) -> AuditReport {
    let customer: Vec<&Message> = messages
        .iter()
        .filter(|m| m.role() == Role::Customer)
        .collect();
    let agent: Vec<&Message> = messages.iter().filter(|m| m.role() == Role::Agent).collect();

    let positive_messages = count_positive_messages(&agent, &criteria.positive_markers());
    let stats = analyze_response_times(&customer, &agent, criteria.slow_threshold_secs());

    let empathy = criteria.score_empathy(positive_messages, agent.len());
    let response_time = criteria.score_response_time(stats.mean_seconds);
    let overall = criteria.final_score(empathy, response_time);

    AuditReport {
        analyzed_at: Local::now().format("%d/%m/%Y %H:%M:%S").to_string(),
        total_duration: total_duration(messages),
        total_messages: messages.len(),
        customer_messages: customer.len(),
        agent_messages: agent.len(),
        positive_messages,
        mean_response_secs: stats.mean_seconds,
        slow_responses: stats.slow_responses,
        scores: ScoreBreakdown {
            empathy,
            response_time,
            overall,
        },
    }
}

/// Span between the earliest and latest message as zero-padded `HH:MM:SS`.
///
/// Messages without a time sort as midnight. If either end of the sorted
/// sequence has no time, or the span comes out negative, the duration is
/// `00:00:00`.
pub fn total_duration(messages: &[Message]) -> String {
    let mut by_time: Vec<&Message> = messages.iter().collect();
    by_time.sort_by_key(|m| m.time_of_day.unwrap_or(NaiveTime::MIN));

    let first = by_time.first().and_then(|m| m.seconds_of_day());
    let last = by_time.last().and_then(|m| m.seconds_of_day());

    match (first, last) {
        (Some(start), Some(end)) if end >= start => format_hms(end - start),
        _ => "00:00:00".to_string(),
    }
}

fn format_hms(total_secs: i64) -> String {
    let hours = total_secs / 3600;
    let minutes = (total_secs % 3600) / 60;
    let seconds = total_secs % 60;
    format!("{:02}:{:02}:{:02}", hours, minutes, seconds)
}
