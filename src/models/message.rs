use chrono::NaiveTime;

/// Author label for the customer side, matched case-insensitively.
pub const CUSTOMER_LABEL: &str = "cliente";
/// Author label for the agent side, matched case-insensitively.
pub const AGENT_LABEL: &str = "atendente";

/// Conversation role derived from a message's author label.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Role {
    Customer,
    Agent,
    Other,
}

impl Role {
    pub fn from_label(label: &str) -> Self {
        let label = label.to_lowercase();
        if label == CUSTOMER_LABEL {
            Role::Customer
        } else if label == AGENT_LABEL {
            Role::Agent
        } else {
            Role::Other
        }
    }
}

/// One parsed conversation turn.
///
/// Immutable after parsing. `time_of_day` is derived from `raw_timestamp` at
/// construction; a missing or malformed timestamp leaves it `None` rather
/// than failing, and such messages are excluded from latency pairing.
#[derive(Debug, Clone, PartialEq)]
pub struct Message {
    /// The bracketed timestamp text as it appeared, e.g. `[09:00:15]`.
    pub raw_timestamp: Option<String>,
    /// Author label, trimmed, free text.
    pub author: String,
    /// Message text, trimmed.
    pub content: String,
    /// Wall-clock time parsed from `raw_timestamp`.
    pub time_of_day: Option<NaiveTime>,
}

impl Message {
    pub fn new(raw_timestamp: Option<String>, author: String, content: String) -> Self {
        let time_of_day = raw_timestamp.as_deref().and_then(parse_time_of_day);
        Self {
            raw_timestamp,
            author,
            content,
            time_of_day,
        }
    }

    pub fn role(&self) -> Role {
        Role::from_label(&self.author)
    }

    /// Seconds since midnight, if this message carries a resolvable time.
    pub fn seconds_of_day(&self) -> Option<i64> {
        use chrono::Timelike;
        self.time_of_day
            .map(|t| i64::from(t.num_seconds_from_midnight()))
    }
}

fn parse_time_of_day(raw: &str) -> Option<NaiveTime> {
    NaiveTime::parse_from_str(raw, "[%H:%M:%S]").ok()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_time_of_day_derived_from_timestamp() {
        let message = Message::new(
            Some("[09:01:30]".to_string()),
            "Cliente".to_string(),
            "Olá".to_string(),
        );

        assert_eq!(message.time_of_day, NaiveTime::from_hms_opt(9, 1, 30));
        assert_eq!(message.seconds_of_day(), Some(9 * 3600 + 60 + 30));
    }

    #[test]
    fn test_missing_timestamp_leaves_time_absent() {
        let message = Message::new(None, "Cliente".to_string(), "Olá".to_string());

        assert_eq!(message.time_of_day, None);
        assert_eq!(message.seconds_of_day(), None);
    }

    #[test]
    fn test_out_of_range_timestamp_leaves_time_absent() {
        let message = Message::new(
            Some("[99:00:00]".to_string()),
            "Cliente".to_string(),
            "Olá".to_string(),
        );

        assert_eq!(message.time_of_day, None);
    }

    #[test]
    fn test_role_matching_is_case_insensitive() {
        assert_eq!(Role::from_label("Cliente"), Role::Customer);
        assert_eq!(Role::from_label("CLIENTE"), Role::Customer);
        assert_eq!(Role::from_label("atendente"), Role::Agent);
        assert_eq!(Role::from_label("Atendente"), Role::Agent);
        assert_eq!(Role::from_label("Supervisor"), Role::Other);
    }
}
