/// Kind of conversation for rendering purposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ChatKind {
    /// One-to-one conversation.
    #[default]
    Direct,
    Group,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ChatSummary {
    pub chat_id: String,
    pub title: String,
    pub last_message_preview: String,
    /// Preformatted label such as `10:30` or `Dün`.
    pub timestamp_label: String,
    pub unread_count: u32,
    pub kind: ChatKind,
}

impl ChatSummary {
    pub fn is_group(&self) -> bool {
        self.kind == ChatKind::Group
    }
}

/// Avatar initials: first letter of up to two words, upper-cased.
pub fn initials(name: &str) -> String {
    name.split(' ')
        .filter_map(|word| word.chars().next())
        .flat_map(char::to_uppercase)
        .take(2)
        .collect()
}
