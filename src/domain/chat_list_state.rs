use super::chat::ChatSummary;

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChatListUiState {
    Loading,
    Ready,
    Empty,
    Error,
}

/// Conversation list with a search filter; the selection indexes the
/// filtered view.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatListState {
    ui_state: ChatListUiState,
    chats: Vec<ChatSummary>,
    query: String,
    selected_index: Option<usize>,
}

impl Default for ChatListState {
    fn default() -> Self {
        Self {
            ui_state: ChatListUiState::Loading,
            chats: Vec::new(),
            query: String::new(),
            selected_index: None,
        }
    }
}

impl ChatListState {
    pub fn ui_state(&self) -> ChatListUiState {
        self.ui_state.clone()
    }

    pub fn query(&self) -> &str {
        &self.query
    }

    pub fn visible_chats(&self) -> Vec<&ChatSummary> {
        let needle = self.query.trim().to_lowercase();
        self.chats
            .iter()
            .filter(|chat| needle.is_empty() || chat.title.to_lowercase().contains(&needle))
            .collect()
    }

    pub fn selected_index(&self) -> Option<usize> {
        self.selected_index
    }

    pub fn selected_chat(&self) -> Option<&ChatSummary> {
        self.selected_index
            .and_then(|index| self.visible_chats().get(index).copied())
    }

    pub fn set_loading(&mut self) {
        self.ui_state = ChatListUiState::Loading;
        self.chats.clear();
        self.selected_index = None;
    }

    pub fn set_ready(&mut self, chats: Vec<ChatSummary>) {
        if chats.is_empty() {
            self.set_empty();
            return;
        }

        let previous_selected_chat_id = self.selected_chat().map(|chat| chat.chat_id.clone());
        self.ui_state = ChatListUiState::Ready;
        self.chats = chats;
        self.reselect(previous_selected_chat_id.as_deref());
    }

    pub fn set_empty(&mut self) {
        self.ui_state = ChatListUiState::Empty;
        self.chats.clear();
        self.selected_index = None;
    }

    pub fn set_error(&mut self) {
        self.ui_state = ChatListUiState::Error;
        self.chats.clear();
        self.selected_index = None;
    }

    pub fn set_query(&mut self, query: &str) {
        let previous_selected_chat_id = self.selected_chat().map(|chat| chat.chat_id.clone());
        self.query = query.to_owned();
        self.reselect(previous_selected_chat_id.as_deref());
    }

    pub fn select_next(&mut self) {
        let Some(index) = self.selected_index else {
            return;
        };

        let last_index = self.visible_chats().len().saturating_sub(1);
        self.selected_index = Some(std::cmp::min(index.saturating_add(1), last_index));
    }

    pub fn select_previous(&mut self) {
        let Some(index) = self.selected_index else {
            return;
        };

        self.selected_index = Some(index.saturating_sub(1));
    }

    fn reselect(&mut self, previous_selected_chat_id: Option<&str>) {
        let index = {
            let visible = self.visible_chats();
            resolve_selection_index(&visible, previous_selected_chat_id)
        };
        self.selected_index = index;
    }
}

fn resolve_selection_index(
    chats: &[&ChatSummary],
    previous_selected_chat_id: Option<&str>,
) -> Option<usize> {
    if chats.is_empty() {
        return None;
    }

    previous_selected_chat_id
        .and_then(|chat_id| chats.iter().position(|chat| chat.chat_id == chat_id))
        .or(Some(0))
}
