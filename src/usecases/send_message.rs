//! Use case for sending a message to the open conversation.
//!
//! Validation happens here; delivery is left to the [`ConversationRepository`].
//! The caller clears the composer afterwards and never appends the text to the
//! displayed conversation.

use thiserror::Error;

use super::conversations::{ConversationError, ConversationRepository, Delivery};

/// Command to send a message to the conversation open in the chat screen.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SendMessageCommand {
    pub chat_id: Option<String>,
    pub text: String,
}

/// Domain-level errors for the send message operation.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SendMessageError {
    /// No conversation is open.
    #[error("no conversation selected")]
    NoConversationSelected,
    /// Message text is empty after trimming whitespace.
    #[error("message text is empty")]
    EmptyMessage,
    /// Target conversation was not found.
    #[error("conversation not found")]
    ChatNotFound,
    /// Conversation source is temporarily unavailable.
    #[error("conversation source temporarily unavailable")]
    TemporarilyUnavailable,
}

/// Validates the command and hands the trimmed text to the repository.
///
/// # Errors
/// Returns `NoConversationSelected` or `EmptyMessage` without touching the
/// repository; repository failures are mapped to domain errors.
pub fn send_message(
    repository: &dyn ConversationRepository,
    command: SendMessageCommand,
) -> Result<Delivery, SendMessageError> {
    let chat_id = command
        .chat_id
        .ok_or(SendMessageError::NoConversationSelected)?;

    let text = command.text.trim();
    if text.is_empty() {
        return Err(SendMessageError::EmptyMessage);
    }

    repository
        .send_message(&chat_id, text)
        .map_err(map_source_error)
}

fn map_source_error(error: ConversationError) -> SendMessageError {
    match error {
        ConversationError::NotFound(_) => SendMessageError::ChatNotFound,
        ConversationError::Unavailable => SendMessageError::TemporarilyUnavailable,
    }
}

#[cfg(test)]
mod tests {
    use std::cell::RefCell;

    use super::*;
    use crate::{
        domain::{chat::ChatSummary, message::Message},
        usecases::conversations::Viewer,
    };

    struct StubRepository {
        result: Result<Delivery, ConversationError>,
        captured_chat_id: RefCell<Option<String>>,
        captured_text: RefCell<Option<String>>,
    }

    impl StubRepository {
        fn with_result(result: Result<Delivery, ConversationError>) -> Self {
            Self {
                result,
                captured_chat_id: RefCell::new(None),
                captured_text: RefCell::new(None),
            }
        }
    }

    impl ConversationRepository for StubRepository {
        fn list_conversations(&self) -> Result<Vec<ChatSummary>, ConversationError> {
            Ok(Vec::new())
        }

        fn list_messages(
            &self,
            _chat_id: &str,
            _viewer: &Viewer<'_>,
        ) -> Result<Vec<Message>, ConversationError> {
            Ok(Vec::new())
        }

        fn send_message(&self, chat_id: &str, text: &str) -> Result<Delivery, ConversationError> {
            *self.captured_chat_id.borrow_mut() = Some(chat_id.to_owned());
            *self.captured_text.borrow_mut() = Some(text.to_owned());
            self.result.clone()
        }
    }

    fn command(chat_id: Option<&str>, text: &str) -> SendMessageCommand {
        SendMessageCommand {
            chat_id: chat_id.map(ToOwned::to_owned),
            text: text.to_owned(),
        }
    }

    #[test]
    fn rejects_send_without_open_conversation() {
        let repository = StubRepository::with_result(Ok(Delivery::Delivered));

        let result = send_message(&repository, command(None, "hello"));

        assert_eq!(result, Err(SendMessageError::NoConversationSelected));
        assert!(repository.captured_text.borrow().is_none());
    }

    #[test]
    fn rejects_whitespace_only_message() {
        let repository = StubRepository::with_result(Ok(Delivery::Delivered));

        let result = send_message(&repository, command(Some("1"), "   \n\t  "));

        assert_eq!(result, Err(SendMessageError::EmptyMessage));
        assert!(repository.captured_chat_id.borrow().is_none());
    }

    #[test]
    fn trims_text_and_passes_chat_id() {
        let repository = StubRepository::with_result(Ok(Delivery::Discarded));

        let result = send_message(&repository, command(Some("2"), "  merhaba  "));

        assert_eq!(result, Ok(Delivery::Discarded));
        assert_eq!(*repository.captured_chat_id.borrow(), Some("2".to_owned()));
        assert_eq!(*repository.captured_text.borrow(), Some("merhaba".to_owned()));
    }

    #[test]
    fn maps_repository_errors() {
        let missing =
            StubRepository::with_result(Err(ConversationError::NotFound("9".to_owned())));
        let offline = StubRepository::with_result(Err(ConversationError::Unavailable));

        assert_eq!(
            send_message(&missing, command(Some("9"), "hello")),
            Err(SendMessageError::ChatNotFound)
        );
        assert_eq!(
            send_message(&offline, command(Some("1"), "hello")),
            Err(SendMessageError::TemporarilyUnavailable)
        );
    }
}
