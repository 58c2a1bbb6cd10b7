use crate::models::Message;

/// Count agent messages containing at least one positive marker.
///
/// Matching is a case-insensitive substring check; a message counts at most
/// once no matter how many markers it contains.
pub fn count_positive_messages(agent_messages: &[&Message], markers: &[String]) -> usize {
    agent_messages
        .iter()
        .filter(|message| {
            let content = message.content.to_lowercase();
            markers
                .iter()
                .any(|marker| content.contains(&marker.to_lowercase()))
        })
        .count()
}
