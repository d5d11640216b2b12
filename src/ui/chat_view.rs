use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span, Text},
    widgets::{Block, Borders, List, ListItem, ListState, Paragraph},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::domain::{
    chat::{initials, ChatKind, ChatSummary},
    chat_list_state::ChatListUiState,
    message::Message,
    open_chat_state::{OpenChatState, OpenChatUiState},
    shell_state::{ActivePane, ChatScreenState},
};

use super::{
    styles,
    text_input::{render_text_field, FieldOptions},
};

const ONLINE_LABEL: &str = "Çevrimiçi";
const GROUP_MEMBERS_LABEL: &str = "3 üye";

pub fn render_chat_screen(
    frame: &mut Frame<'_>,
    area: Rect,
    chat: &ChatScreenState,
    profile_name: &str,
    viewer_uid: &str,
) {
    let [sidebar_area, conversation_area] = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(32), Constraint::Percentage(68)])
        .areas(area);

    let [profile_area, search_area, list_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Length(3),
            Constraint::Min(1),
        ])
        .areas(sidebar_area);

    let [header_area, messages_area, input_area] = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(3),
            Constraint::Min(1),
            Constraint::Length(3),
        ])
        .areas(conversation_area);

    render_identity_header(
        frame,
        profile_area,
        profile_name,
        ONLINE_LABEL,
        styles::inactive_panel_border_style(),
    );
    render_text_field(
        frame,
        search_area,
        &chat.search,
        FieldOptions {
            title: "Ara",
            placeholder: "Sohbet ara... (/)",
            focused: chat.active_pane == ActivePane::Search,
            masked: false,
        },
    );
    render_chat_list(frame, list_area, chat);

    if chat.open_chat.is_open() {
        render_identity_header(
            frame,
            header_area,
            chat.open_chat.chat_title(),
            chat_subtitle(chat.open_chat.chat_kind()),
            styles::inactive_panel_border_style(),
        );
    } else {
        frame.render_widget(
            Block::default()
                .borders(Borders::ALL)
                .border_style(styles::inactive_panel_border_style()),
            header_area,
        );
    }
    render_messages(frame, messages_area, &chat.open_chat, viewer_uid);
    render_text_field(
        frame,
        input_area,
        &chat.message_input,
        FieldOptions {
            title: "Mesaj",
            placeholder: composer_placeholder(&chat.open_chat),
            focused: chat.active_pane == ActivePane::MessageInput,
            masked: false,
        },
    );
}

fn render_identity_header(
    frame: &mut Frame<'_>,
    area: Rect,
    name: &str,
    subtitle: &str,
    border_style: Style,
) {
    let paragraph = Paragraph::new(identity_line(name, subtitle)).block(
        Block::default()
            .borders(Borders::ALL)
            .border_style(border_style),
    );
    frame.render_widget(paragraph, area);
}

fn identity_line(name: &str, subtitle: &str) -> Line<'static> {
    Line::from(vec![
        Span::styled(format!(" {} ", initials(name)), styles::avatar_style()),
        Span::raw(" "),
        Span::styled(name.to_owned(), styles::chat_name_style()),
        Span::raw("  "),
        Span::styled(subtitle.to_owned(), styles::presence_style()),
    ])
}

pub fn chat_subtitle(kind: ChatKind) -> &'static str {
    match kind {
        ChatKind::Group => GROUP_MEMBERS_LABEL,
        ChatKind::Direct => ONLINE_LABEL,
    }
}

fn render_chat_list(frame: &mut Frame<'_>, area: Rect, chat: &ChatScreenState) {
    let is_active = chat.active_pane == ActivePane::ChatList;
    let border_style = if is_active {
        styles::active_panel_border_style()
    } else {
        styles::inactive_panel_border_style()
    };
    let block = Block::default()
        .title("Sohbetler")
        .borders(Borders::ALL)
        .border_style(border_style);

    let chat_list = &chat.chat_list;
    let visible = chat_list.visible_chats();
    let placeholder = match chat_list.ui_state() {
        ChatListUiState::Loading => Some("Sohbetler yükleniyor...".to_owned()),
        ChatListUiState::Empty => Some("Henüz sohbet yok".to_owned()),
        ChatListUiState::Error => Some("Sohbetler yüklenemedi".to_owned()),
        ChatListUiState::Ready if visible.is_empty() => Some(no_match_text(chat_list.query())),
        ChatListUiState::Ready => None,
    };

    if let Some(message) = placeholder {
        frame.render_widget(Paragraph::new(message).block(block), area);
        return;
    }

    let inner_width = area.width.saturating_sub(2) as usize;
    let items: Vec<ListItem<'static>> = visible
        .iter()
        .map(|summary| ListItem::new(chat_list_item_text(summary, inner_width)))
        .collect();

    let list = List::new(items)
        .block(block)
        .highlight_style(Style::default().add_modifier(Modifier::REVERSED | Modifier::BOLD));

    let mut list_state = ListState::default();
    list_state.select(chat_list.selected_index());
    frame.render_stateful_widget(list, area, &mut list_state);
}

fn no_match_text(query: &str) -> String {
    format!("\"{}\" için sonuç bulunamadı", query.trim())
}

/// Two-line row: avatar, name and time, then preview and unread badge.
fn chat_list_item_text(chat: &ChatSummary, width: usize) -> Text<'static> {
    let avatar = format!(" {} ", initials(&chat.title));
    let group_marker = if chat.is_group() { " #" } else { "" };
    let used = avatar.width() + 1 + chat.title.width() + group_marker.len();
    let padding = width.saturating_sub(used + chat.timestamp_label.width()).max(1);

    let first = Line::from(vec![
        Span::styled(avatar.clone(), styles::avatar_style()),
        Span::raw(" "),
        Span::styled(chat.title.clone(), styles::chat_name_style()),
        Span::styled(group_marker.to_owned(), styles::chat_preview_style()),
        Span::raw(" ".repeat(padding)),
        Span::styled(chat.timestamp_label.clone(), styles::timestamp_style()),
    ]);

    let indent = " ".repeat(avatar.width() + 1);
    let badge = if chat.unread_count > 0 {
        format!(" [{}]", chat.unread_count)
    } else {
        String::new()
    };
    let preview_room = width.saturating_sub(indent.len() + badge.len());
    let preview = truncate_to_width(&chat.last_message_preview, preview_room);
    let badge_padding = preview_room.saturating_sub(preview.width());

    let mut second = vec![
        Span::raw(indent),
        Span::styled(preview, styles::chat_preview_style()),
    ];
    if !badge.is_empty() {
        second.push(Span::raw(" ".repeat(badge_padding)));
        second.push(Span::styled(badge, styles::unread_count_style()));
    }

    Text::from(vec![first, Line::from(second)])
}

fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_owned();
    }

    let mut truncated = String::new();
    let limit = max_width.saturating_sub(3);
    for ch in text.chars() {
        let next_width = truncated.width() + ch.to_string().width();
        if next_width > limit {
            break;
        }
        truncated.push(ch);
    }
    truncated.push_str("...");
    truncated
}

fn render_messages(frame: &mut Frame<'_>, area: Rect, open_chat: &OpenChatState, viewer_uid: &str) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styles::inactive_panel_border_style());

    let placeholder = match open_chat.ui_state() {
        OpenChatUiState::Empty => Some("Mesajlaşmaya başlamak için bir sohbet seçin"),
        OpenChatUiState::Loading => Some("Mesajlar yükleniyor..."),
        OpenChatUiState::Error => Some("Mesajlar yüklenemedi"),
        OpenChatUiState::Ready if open_chat.messages().is_empty() => Some("Henüz mesaj yok"),
        OpenChatUiState::Ready => None,
    };

    if let Some(message) = placeholder {
        frame.render_widget(
            Paragraph::new(message)
                .alignment(Alignment::Center)
                .block(block),
            area,
        );
        return;
    }

    let lines: Vec<Line<'static>> = open_chat
        .messages()
        .iter()
        .flat_map(|message| message_lines(message, viewer_uid))
        .collect();

    // Keep the newest messages in view.
    let inner_height = area.height.saturating_sub(2) as usize;
    let scroll = lines.len().saturating_sub(inner_height).min(u16::MAX as usize) as u16;

    frame.render_widget(Paragraph::new(lines).block(block).scroll((scroll, 0)), area);
}

/// Incoming messages sit on the left with the sender's name; the viewer's own
/// sit on the right.
fn message_lines(message: &Message, viewer_uid: &str) -> Vec<Line<'static>> {
    if message.is_outgoing_for(viewer_uid) {
        vec![
            Line::from(vec![
                Span::styled(message.content.clone(), styles::outgoing_message_style()),
                Span::raw(" "),
                Span::styled(message.timestamp_label.clone(), styles::message_time_style()),
            ])
            .alignment(Alignment::Right),
            Line::default(),
        ]
    } else {
        vec![
            Line::from(Span::styled(
                message.sender_name.clone(),
                styles::message_sender_style(),
            )),
            Line::from(vec![
                Span::styled(message.content.clone(), styles::incoming_message_style()),
                Span::raw(" "),
                Span::styled(message.timestamp_label.clone(), styles::message_time_style()),
            ]),
            Line::default(),
        ]
    }
}

fn composer_placeholder(open_chat: &OpenChatState) -> &'static str {
    if open_chat.is_open() {
        "Mesaj yazın... (i)"
    } else {
        "Önce bir sohbet seçin"
    }
}
