use chrono::{DateTime, Utc};

use crate::domain::conversation::{
    entities::{Role, StoredMessage},
    value_objects::{GetHistoryInput, HistoryExport},
};

pub const HISTORY_PAGE_LIMIT: u64 = 100;

/// Keeps the messages matching the search term (case-insensitive substring)
/// and the role filter. Input order is preserved.
pub fn filter_messages(messages: Vec<StoredMessage>, input: &GetHistoryInput) -> Vec<StoredMessage> {
    let needle = input
        .search
        .as_deref()
        .map(str::trim)
        .filter(|s| !s.is_empty())
        .map(str::to_lowercase);

    messages
        .into_iter()
        .filter(|m| input.role.matches(m.role))
        .filter(|m| match &needle {
            Some(needle) => m.content.to_lowercase().contains(needle),
            None => true,
        })
        .collect()
}

/// Renders newest-first messages as a chronological transcript.
pub fn render_transcript(messages: &[StoredMessage]) -> String {
    messages
        .iter()
        .rev()
        .map(|m| {
            let speaker = match m.role {
                Role::User => "You",
                Role::Assistant | Role::System => "Assistant",
            };
            format!("{}: {}", speaker, m.content)
        })
        .collect::<Vec<_>>()
        .join("\n\n")
}

pub fn export_file_name(now: DateTime<Utc>) -> String {
    format!("chat-history-{}.txt", now.format("%Y-%m-%d"))
}

pub fn build_export(messages: &[StoredMessage], now: DateTime<Utc>) -> HistoryExport {
    HistoryExport {
        file_name: export_file_name(now),
        content: render_transcript(messages),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::conversation::value_objects::RoleFilter;
    use chrono::TimeZone;
    use uuid::Uuid;

    fn newest_first() -> Vec<StoredMessage> {
        let user_id = Uuid::new_v4();
        vec![
            StoredMessage::new(user_id, Role::Assistant, "Try pasta with peas".to_string()),
            StoredMessage::new(user_id, Role::User, "Any PASTA ideas?".to_string()),
            StoredMessage::new(user_id, Role::Assistant, "Hello! How can I help?".to_string()),
        ]
    }

    #[test]
    fn test_search_is_case_insensitive() {
        let input = GetHistoryInput {
            search: Some("pasta".to_string()),
            ..Default::default()
        };

        let filtered = filter_messages(newest_first(), &input);

        assert_eq!(filtered.len(), 2);
    }

    #[test]
    fn test_role_filter_combines_with_search() {
        let input = GetHistoryInput {
            search: Some("pasta".to_string()),
            role: RoleFilter::User,
            limit: None,
        };

        let filtered = filter_messages(newest_first(), &input);

        assert_eq!(filtered.len(), 1);
        assert_eq!(filtered[0].content, "Any PASTA ideas?");
    }

    #[test]
    fn test_transcript_is_chronological() {
        let transcript = render_transcript(&newest_first());

        assert_eq!(
            transcript,
            "Assistant: Hello! How can I help?\n\nYou: Any PASTA ideas?\n\nAssistant: Try pasta with peas"
        );
    }

    #[test]
    fn test_export_file_name_uses_date() {
        let now = Utc.with_ymd_and_hms(2025, 3, 9, 18, 30, 0).unwrap();

        assert_eq!(export_file_name(now), "chat-history-2025-03-09.txt");
    }
}
