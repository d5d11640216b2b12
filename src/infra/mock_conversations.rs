use crate::{
    domain::{
        chat::{ChatKind, ChatSummary},
        message::Message,
    },
    usecases::conversations::{ConversationError, ConversationRepository, Delivery, Viewer},
};

const MOCK_MESSAGE_DISCARDED: &str = "MOCK_MESSAGE_DISCARDED";

/// Sender id used for messages written by the other party.
pub const OTHER_SENDER_ID: &str = "other";

/// Static in-memory conversations. Outgoing messages are dropped.
#[derive(Debug, Clone, Copy, Default)]
pub struct MockConversationRepository;

impl MockConversationRepository {
    fn conversations() -> Vec<ChatSummary> {
        vec![
            ChatSummary {
                chat_id: "1".to_owned(),
                title: "Ahmet Yılmaz".to_owned(),
                last_message_preview: "Merhaba, nasılsın?".to_owned(),
                timestamp_label: "10:30".to_owned(),
                unread_count: 2,
                kind: ChatKind::Direct,
            },
            ChatSummary {
                chat_id: "2".to_owned(),
                title: "Proje Grubu".to_owned(),
                last_message_preview: "Ali: Toplantı saat kaçta?".to_owned(),
                timestamp_label: "Dün".to_owned(),
                unread_count: 0,
                kind: ChatKind::Group,
            },
        ]
    }
}

impl ConversationRepository for MockConversationRepository {
    fn list_conversations(&self) -> Result<Vec<ChatSummary>, ConversationError> {
        Ok(Self::conversations())
    }

    // Every conversation shows the same exchange; the reply is attributed to
    // the viewer.
    fn list_messages(
        &self,
        chat_id: &str,
        viewer: &Viewer<'_>,
    ) -> Result<Vec<Message>, ConversationError> {
        if !Self::conversations()
            .iter()
            .any(|chat| chat.chat_id == chat_id)
        {
            return Err(ConversationError::NotFound(chat_id.to_owned()));
        }

        Ok(vec![
            Message {
                id: "1".to_owned(),
                sender_id: OTHER_SENDER_ID.to_owned(),
                sender_name: "Ahmet Yılmaz".to_owned(),
                content: "Merhaba, nasılsın?".to_owned(),
                timestamp_label: "10:25".to_owned(),
            },
            Message {
                id: "2".to_owned(),
                sender_id: viewer.uid.to_owned(),
                sender_name: viewer.display_name.to_owned(),
                content: "İyiyim, teşekkürler! Sen nasılsın?".to_owned(),
                timestamp_label: "10:26".to_owned(),
            },
        ])
    }

    fn send_message(&self, chat_id: &str, text: &str) -> Result<Delivery, ConversationError> {
        tracing::info!(
            code = MOCK_MESSAGE_DISCARDED,
            chat_id,
            chars = text.chars().count(),
            "mock repository discarded outgoing message"
        );
        Ok(Delivery::Discarded)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const VIEWER: Viewer<'static> = Viewer {
        uid: "uid-7",
        display_name: "Ayşe",
    };

    #[test]
    fn lists_direct_and_group_conversations() {
        let chats = MockConversationRepository
            .list_conversations()
            .expect("mock conversations");

        assert_eq!(chats.len(), 2);
        assert_eq!(chats[0].title, "Ahmet Yılmaz");
        assert_eq!(chats[0].unread_count, 2);
        assert!(!chats[0].is_group());
        assert!(chats[1].is_group());
        assert_eq!(chats[1].timestamp_label, "Dün");
    }

    #[test]
    fn second_message_belongs_to_viewer() {
        let messages = MockConversationRepository
            .list_messages("2", &VIEWER)
            .expect("mock messages");

        assert_eq!(messages.len(), 2);
        assert!(!messages[0].is_outgoing_for(VIEWER.uid));
        assert!(messages[1].is_outgoing_for(VIEWER.uid));
        assert_eq!(messages[1].sender_name, "Ayşe");
    }

    #[test]
    fn unknown_conversation_is_not_found() {
        let result = MockConversationRepository.list_messages("42", &VIEWER);

        assert_eq!(result, Err(ConversationError::NotFound("42".to_owned())));
    }

    #[test]
    fn send_discards_message() {
        let delivery = MockConversationRepository
            .send_message("1", "hello")
            .expect("mock send");

        assert_eq!(delivery, Delivery::Discarded);
    }
}
