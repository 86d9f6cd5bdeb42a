use super::Frame;
use crate::state::{Load, State};
use crate::ui::widgets::styling;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    widgets::Paragraph,
};

const CONTROLS: &str = " q: quit, j/k: move, g/G: first/last, l: log";

/// Return the status text for the right side of the footer.
///
fn status_text(state: &State) -> String {
    match state.get_load() {
        Load::Loading => "loading ".to_string(),
        Load::Failed => "failed ".to_string(),
        Load::Loaded(expenses) => match state
            .get_selected_row()
            .and_then(|i| expenses.get(i).map(|expense| (i, expense)))
        {
            Some((i, expense)) => format!("#{} {}/{} ", expense.id, i + 1, expenses.len()),
            None => format!("0/{} ", expenses.len()),
        },
    }
}

/// Render footer widget.
///
pub fn footer(frame: &mut Frame, size: Rect, state: &State) {
    let style = styling::footer_style(state.get_theme());
    let columns = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Min(0), Constraint::Length(28)])
        .split(size);

    frame.render_widget(Paragraph::new(CONTROLS).style(style), columns[0]);
    frame.render_widget(
        Paragraph::new(status_text(state))
            .style(style)
            .alignment(Alignment::Right),
        columns[1],
    );
}
