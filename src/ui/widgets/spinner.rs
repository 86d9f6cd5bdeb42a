use crate::state::State;
use crate::ui::widgets::styling;
use ratatui::{
    layout::Alignment,
    text::{Line, Span},
    widgets::Paragraph,
};

/// Animation frames, advanced once per tick.
///
pub const FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

pub const LABEL: &str = "Loading expenses...";

/// Return a paragraph showing the current spinner frame, vertically centered
/// for an area of the given height.
///
pub fn widget(state: &State, height: u16) -> Paragraph<'static> {
    let theme = state.get_theme();
    let frame = FRAMES[*state.get_spinner_index() % FRAMES.len()];
    let mut lines = vec![Line::from(""); height.saturating_sub(1) as usize / 2];
    lines.push(Line::from(vec![
        Span::styled(frame, styling::heading_style(theme)),
        Span::raw(" "),
        Span::styled(LABEL, styling::muted_text_style(theme)),
    ]));
    Paragraph::new(lines).alignment(Alignment::Center)
}
