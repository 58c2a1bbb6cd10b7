use chrono::NaiveTime;

use crate::models::{Message, Role};

/// Latency metrics for one conversation.
#[derive(Debug, Clone)]
pub struct ResponseTimeStats {
    /// Every recorded customer-to-agent latency in seconds, in time order.
    /// May contain negative values when message ordering is inconsistent.
    pub latencies: Vec<i64>,
    /// Arithmetic mean of `latencies`, exactly 0.0 when none were recorded.
    pub mean_seconds: f64,
    /// Latencies strictly above the slow threshold.
    pub slow_responses: usize,
}

/// Pair each agent message with the most recent customer message and
/// measure the latency between them.
///
/// The customer and agent sets are concatenated in that order and
/// stable-sorted by time of day, so on equal times a customer message
/// anchors the pair regardless of file order. Messages without a resolvable
/// time sort as midnight; they can still take over as the anchor, but a pair
/// is only recorded when both sides carry a time. Consecutive agent messages
/// all pair against the same anchor.
pub fn analyze_response_times(
    customer: &[&Message],
    agent: &[&Message],
    slow_threshold_secs: i64,
) -> ResponseTimeStats {
    let mut merged: Vec<&Message> = Vec::with_capacity(customer.len() + agent.len());
    merged.extend_from_slice(customer);
    merged.extend_from_slice(agent);
    merged.sort_by_key(|m| m.time_of_day.unwrap_or(NaiveTime::MIN));

    let mut latencies = Vec::new();
    let mut slow_responses = 0;
    let mut pending_customer: Option<&Message> = None;

    for message in merged {
        match message.role() {
            Role::Customer => pending_customer = Some(message),
            Role::Agent => {
                if let Some(customer_message) = pending_customer {
                    if let (Some(asked), Some(replied)) =
                        (customer_message.seconds_of_day(), message.seconds_of_day())
                    {
                        let latency = replied - asked;
                        if latency > slow_threshold_secs {
                            slow_responses += 1;
                        }
                        latencies.push(latency);
                    }
                }
            }
            Role::Other => {}
        }
    }

    let mean_seconds = if latencies.is_empty() {
        0.0
    } else {
        latencies.iter().sum::<i64>() as f64 / latencies.len() as f64
    };

    ResponseTimeStats {
        latencies,
        mean_seconds,
        slow_responses,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn message(timestamp: Option<&str>, author: &str, content: &str) -> Message {
        Message::new(
            timestamp.map(str::to_owned),
            author.to_owned(),
            content.to_owned(),
        )
    }

    fn split_roles(messages: &[Message]) -> (Vec<&Message>, Vec<&Message>) {
        let customer = messages
            .iter()
            .filter(|m| m.role() == Role::Customer)
            .collect();
        let agent = messages.iter().filter(|m| m.role() == Role::Agent).collect();
        (customer, agent)
    }

    #[test]
    fn test_latencies_and_slow_count() {
        let messages = vec![
            message(Some("[09:00:00]"), "Cliente", "Olá"),
            message(Some("[09:00:05]"), "Atendente", "Olá! Como posso ajudá-lo?"),
            message(Some("[09:00:40]"), "Cliente", "Tenho um problema"),
            message(Some("[09:02:00]"), "Atendente", "Vou verificar"),
        ];
        let (customer, agent) = split_roles(&messages);

        let stats = analyze_response_times(&customer, &agent, 30);

        assert_eq!(stats.latencies, vec![5, 80]);
        assert_eq!(stats.mean_seconds, 42.5);
        assert_eq!(stats.slow_responses, 1);
    }

    #[test]
    fn test_agent_before_any_customer_yields_no_sample() {
        let messages = vec![
            message(Some("[09:00:00]"), "Atendente", "Bom dia"),
            message(Some("[09:00:10]"), "Cliente", "Olá"),
        ];
        let (customer, agent) = split_roles(&messages);

        let stats = analyze_response_times(&customer, &agent, 30);

        assert!(stats.latencies.is_empty());
        assert_eq!(stats.mean_seconds, 0.0);
        assert_eq!(stats.slow_responses, 0);
    }

    #[test]
    fn test_consecutive_agent_replies_share_one_anchor() {
        let messages = vec![
            message(Some("[09:00:00]"), "Cliente", "Olá"),
            message(Some("[09:00:10]"), "Atendente", "Um momento"),
            message(Some("[09:00:50]"), "Atendente", "Encontrei o cadastro"),
        ];
        let (customer, agent) = split_roles(&messages);

        let stats = analyze_response_times(&customer, &agent, 30);

        assert_eq!(stats.latencies, vec![10, 50]);
        assert_eq!(stats.slow_responses, 1);
    }

    #[test]
    fn test_untimed_messages_produce_no_samples() {
        let messages = vec![
            message(Some("[09:00:00]"), "Cliente", "Olá"),
            message(None, "Cliente", "Ainda aí?"),
            message(Some("[09:00:30]"), "Atendente", "Sim, estou aqui"),
        ];
        let (customer, agent) = split_roles(&messages);

        // The untimed customer message sorts to midnight, so the timed
        // customer message remains the anchor at 09:00:30.
        let stats = analyze_response_times(&customer, &agent, 30);

        assert_eq!(stats.latencies, vec![30]);
        assert_eq!(stats.slow_responses, 0);
    }

    #[test]
    fn test_equal_times_anchor_on_customer_regardless_of_file_order() {
        let messages = vec![
            message(Some("[09:00:00]"), "Atendente", "Bom dia"),
            message(Some("[09:00:00]"), "Cliente", "Olá"),
        ];
        let (customer, agent) = split_roles(&messages);

        let stats = analyze_response_times(&customer, &agent, 30);

        assert_eq!(stats.latencies, vec![0]);
    }

    #[test]
    fn test_out_of_order_input_is_resorted_by_time() {
        let messages = vec![
            message(Some("[09:01:00]"), "Atendente", "Resolvido"),
            message(Some("[09:00:00]"), "Cliente", "Olá"),
        ];
        let (customer, agent) = split_roles(&messages);

        let stats = analyze_response_times(&customer, &agent, 30);

        assert_eq!(stats.latencies, vec![60]);
        assert_eq!(stats.slow_responses, 1);
    }

    #[test]
    fn test_non_role_authors_are_excluded() {
        let messages = vec![
            message(Some("[09:00:00]"), "Cliente", "Olá"),
            message(Some("[09:00:10]"), "Sistema", "Transferindo para um agente"),
            message(Some("[09:00:20]"), "Atendente", "Olá"),
        ];
        let (customer, agent) = split_roles(&messages);

        let stats = analyze_response_times(&customer, &agent, 30);
        assert_eq!(stats.latencies, vec![20]);
    }
}
