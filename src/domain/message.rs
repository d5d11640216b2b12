#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Message {
    pub id: String,
    pub sender_id: String,
    pub sender_name: String,
    pub content: String,
    /// Preformatted label such as `10:25`.
    pub timestamp_label: String,
}

impl Message {
    /// Returns true when the message was written by the viewing user.
    pub fn is_outgoing_for(&self, viewer_uid: &str) -> bool {
        self.sender_id == viewer_uid
    }
}
