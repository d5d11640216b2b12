use super::{
    chat::{ChatKind, ChatSummary},
    message::Message,
};

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum OpenChatUiState {
    Empty,
    Loading,
    Ready,
    Error,
}

/// The conversation shown in the message pane.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OpenChatState {
    chat_id: Option<String>,
    chat_title: String,
    chat_kind: ChatKind,
    messages: Vec<Message>,
    ui_state: OpenChatUiState,
}

impl Default for OpenChatState {
    fn default() -> Self {
        Self {
            chat_id: None,
            chat_title: String::new(),
            chat_kind: ChatKind::Direct,
            messages: Vec::new(),
            ui_state: OpenChatUiState::Empty,
        }
    }
}

impl OpenChatState {
    pub fn chat_id(&self) -> Option<&str> {
        self.chat_id.as_deref()
    }

    pub fn chat_title(&self) -> &str {
        &self.chat_title
    }

    pub fn chat_kind(&self) -> ChatKind {
        self.chat_kind
    }

    pub fn messages(&self) -> &[Message] {
        &self.messages
    }

    pub fn ui_state(&self) -> OpenChatUiState {
        self.ui_state.clone()
    }

    pub fn is_open(&self) -> bool {
        self.chat_id.is_some()
    }

    pub fn set_loading(&mut self, chat: &ChatSummary) {
        self.chat_id = Some(chat.chat_id.clone());
        self.chat_title = chat.title.clone();
        self.chat_kind = chat.kind;
        self.messages.clear();
        self.ui_state = OpenChatUiState::Loading;
    }

    pub fn set_ready(&mut self, messages: Vec<Message>) {
        self.messages = messages;
        self.ui_state = OpenChatUiState::Ready;
    }

    pub fn set_error(&mut self) {
        self.messages.clear();
        self.ui_state = OpenChatUiState::Error;
    }
}
