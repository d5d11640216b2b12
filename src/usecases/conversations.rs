//! Conversation data seam for the chat screen.
//!
//! The chat screen reads conversations and messages through
//! [`ConversationRepository`]; bootstrap injects the in-memory mock, tests
//! inject stubs.

use thiserror::Error;

use crate::domain::{
    chat::ChatSummary, chat_list_state::ChatListState, message::Message,
    shell_state::ChatScreenState,
};

const CONVERSATIONS_LOAD_FAILED: &str = "CONVERSATIONS_LOAD_FAILED";
const MESSAGES_LOAD_FAILED: &str = "MESSAGES_LOAD_FAILED";

/// The signed-in user as seen by the repository when building messages.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewer<'a> {
    pub uid: &'a str,
    pub display_name: &'a str,
}

/// What happened to an outgoing message.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Delivery {
    #[cfg_attr(not(test), allow(dead_code))]
    Delivered,
    /// Accepted and dropped; nothing will show up in the conversation.
    Discarded,
}

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConversationError {
    #[error("conversation source is unavailable")]
    #[cfg_attr(not(test), allow(dead_code))]
    Unavailable,
    #[error("conversation {0} was not found")]
    NotFound(String),
}

pub trait ConversationRepository {
    fn list_conversations(&self) -> Result<Vec<ChatSummary>, ConversationError>;

    fn list_messages(
        &self,
        chat_id: &str,
        viewer: &Viewer<'_>,
    ) -> Result<Vec<Message>, ConversationError>;

    fn send_message(&self, chat_id: &str, text: &str) -> Result<Delivery, ConversationError>;
}

impl<T> ConversationRepository for &T
where
    T: ConversationRepository + ?Sized,
{
    fn list_conversations(&self) -> Result<Vec<ChatSummary>, ConversationError> {
        (*self).list_conversations()
    }

    fn list_messages(
        &self,
        chat_id: &str,
        viewer: &Viewer<'_>,
    ) -> Result<Vec<Message>, ConversationError> {
        (*self).list_messages(chat_id, viewer)
    }

    fn send_message(&self, chat_id: &str, text: &str) -> Result<Delivery, ConversationError> {
        (*self).send_message(chat_id, text)
    }
}

pub fn refresh_chat_list(repository: &dyn ConversationRepository, chat_list: &mut ChatListState) {
    chat_list.set_loading();

    match repository.list_conversations() {
        Ok(chats) => chat_list.set_ready(chats),
        Err(error) => {
            tracing::warn!(
                code = CONVERSATIONS_LOAD_FAILED,
                error = %error,
                "failed to load conversations"
            );
            chat_list.set_error();
        }
    }
}

/// Opens the conversation currently selected in the list. Returns `false` when
/// nothing is selected.
pub fn open_selected_chat(
    repository: &dyn ConversationRepository,
    chat: &mut ChatScreenState,
    viewer: &Viewer<'_>,
) -> bool {
    let Some(summary) = chat.chat_list.selected_chat().cloned() else {
        return false;
    };

    chat.open_chat.set_loading(&summary);
    chat.message_input.clear();

    match repository.list_messages(&summary.chat_id, viewer) {
        Ok(messages) => chat.open_chat.set_ready(messages),
        Err(error) => {
            tracing::warn!(
                code = MESSAGES_LOAD_FAILED,
                chat_id = %summary.chat_id,
                error = %error,
                "failed to load messages"
            );
            chat.open_chat.set_error();
        }
    }

    true
}
