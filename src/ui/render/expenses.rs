use super::Frame;
use crate::expenses::{Expense, CAPITALIZED_COLUMNS, COLUMNS};
use crate::state::State;
use crate::ui::widgets::{spinner, styling};
use crate::ui::Theme;
use crate::utils::formatting::capitalize_words;
use ratatui::{
    layout::{Alignment, Constraint, Direction, Layout, Rect},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Row, Table, Wrap},
};

pub const HEADING: &str = "Expenses";
pub const ERROR_MESSAGE: &str = "An error has occured, please refresh the page.";

const COLUMN_WIDTHS: [Constraint; 6] = [
    Constraint::Percentage(10),
    Constraint::Percentage(20),
    Constraint::Percentage(12),
    Constraint::Percentage(16),
    Constraint::Percentage(28),
    Constraint::Percentage(14),
];

/// Render the expenses region: a spinner while loading, the error message
/// after a failure, or the table once loaded.
///
pub fn expenses(frame: &mut Frame, size: Rect, state: &mut State) {
    let theme = state.get_theme().clone();
    let block = Block::default()
        .borders(Borders::ALL)
        .border_style(styling::normal_block_border_style(&theme));

    if state.get_load().is_loading() {
        frame.render_widget(spinner::widget(state, size.height).block(block), size);
        return;
    }
    if state.get_load().is_failed() {
        frame.render_widget(error_message(&theme, size.height).block(block), size);
        return;
    }

    let inner = block.inner(size);
    frame.render_widget(
        block.border_style(styling::active_block_border_style(&theme)),
        size,
    );
    if let Some((expenses, table_state)) = state.table_parts() {
        let rows = Layout::default()
            .direction(Direction::Vertical)
            .constraints([
                Constraint::Length(1),
                Constraint::Length(1),
                Constraint::Min(0),
            ])
            .split(inner);
        frame.render_widget(
            Paragraph::new(Span::styled(HEADING, styling::heading_style(&theme))),
            rows[0],
        );
        frame.render_widget(
            Block::default()
                .borders(Borders::TOP)
                .border_style(styling::normal_block_border_style(&theme)),
            rows[1],
        );
        frame.render_stateful_widget(table(expenses, &theme), rows[2], table_state);
    }
}

fn error_message(theme: &Theme, height: u16) -> Paragraph<'static> {
    let mut lines = vec![Line::from(""); height.saturating_sub(1) as usize / 2];
    lines.push(Line::from(Span::styled(
        ERROR_MESSAGE,
        styling::error_text_style(theme),
    )));
    Paragraph::new(lines)
        .alignment(Alignment::Center)
        .wrap(Wrap { trim: true })
}

/// Build the table with one row per expense in the given order. Category and
/// status are capitalised here only; the expenses keep their values.
///
fn table<'a>(expenses: &[Expense], theme: &Theme) -> Table<'a> {
    let header = Row::new(COLUMNS).style(styling::table_header_style(theme));
    let rows: Vec<Row> = expenses
        .iter()
        .map(|expense| {
            let mut cells = expense.cells();
            for column in CAPITALIZED_COLUMNS {
                cells[column] = capitalize_words(&cells[column]);
            }
            Row::new(cells)
        })
        .collect();

    Table::new(rows, COLUMN_WIDTHS)
        .header(header)
        .style(styling::normal_text_style(theme))
        .highlight_style(styling::highlighted_row_style(theme))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::expenses::{Amount, DateValue, ExpenseId, LoadError};
    use crate::logger::LogBuffer;
    use crate::ui::render;
    use ratatui::{backend::TestBackend, Terminal};
    use std::sync::mpsc;

    fn expense(id: i64, merchant: &str, category: &str) -> Expense {
        Expense {
            id: ExpenseId::Number(id.into()),
            date: DateValue::Text("2023-01-05".to_string()),
            merchant: merchant.to_string(),
            amount: Amount::Number(serde_json::Number::from_f64(12.5).unwrap()),
            category: category.to_string(),
            description: "Taxi".to_string(),
            status: "approved".to_string(),
        }
    }

    fn draw(state: &mut State) -> Vec<String> {
        let mut terminal = Terminal::new(TestBackend::new(100, 20)).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        buffer
            .content
            .chunks(buffer.area.width as usize)
            .map(|row| row.iter().map(|cell| cell.symbol()).collect::<String>())
            .collect()
    }

    fn contains(lines: &[String], text: &str) -> bool {
        lines.iter().any(|line| line.contains(text))
    }

    fn resolved(outcome: Result<Vec<Expense>, LoadError>) -> State {
        let (tx, _rx) = mpsc::channel();
        let mut state = State::new(tx, LogBuffer::new(), Theme::default());
        let ticket = state.begin_load().unwrap();
        state.resolve(ticket, outcome);
        state
    }

    #[test]
    fn loading_shows_only_spinner() {
        let lines = draw(&mut State::default());
        assert!(contains(&lines, spinner::LABEL));
        assert!(!contains(&lines, ERROR_MESSAGE));
        assert!(!contains(&lines, "Merchant"));
    }

    #[test]
    fn loaded_shows_table() {
        let mut state = resolved(Ok(vec![expense(1, "Acme", "travel")]));
        let lines = draw(&mut state);
        assert!(!contains(&lines, spinner::LABEL));
        assert!(!contains(&lines, ERROR_MESSAGE));
        assert!(contains(&lines, HEADING));

        let header = lines.iter().find(|l| l.contains("Merchant")).unwrap();
        let positions: Vec<usize> = COLUMNS.iter().map(|c| header.find(c).unwrap()).collect();
        assert!(positions.windows(2).all(|w| w[0] < w[1]));

        let row = lines.iter().find(|l| l.contains("Acme")).unwrap();
        for cell in ["Jan 05", "$12.5", "Travel", "Taxi", "Approved"] {
            assert!(row.contains(cell), "missing {} in {:?}", cell, row);
        }
        // Drawn capitalised, stored verbatim
        assert_eq!(state.get_load().expenses().unwrap()[0].category, "travel");
    }

    #[test]
    fn loaded_empty_shows_headers_only() {
        let mut state = resolved(Ok(vec![]));
        let lines = draw(&mut state);
        assert!(contains(&lines, "Description"));
        assert!(!contains(&lines, "$"));
        assert!(!contains(&lines, spinner::LABEL));
        assert!(!contains(&lines, ERROR_MESSAGE));
    }

    #[test]
    fn rows_follow_server_order() {
        let mut state = resolved(Ok(vec![
            expense(3, "Zeta", "travel"),
            expense(1, "Alpha", "meals"),
            expense(2, "Mid", "office"),
        ]));
        let lines = draw(&mut state);
        let line_of = |text: &str| lines.iter().position(|l| l.contains(text)).unwrap();
        assert!(line_of("Zeta") < line_of("Alpha"));
        assert!(line_of("Alpha") < line_of("Mid"));
    }

    #[test]
    fn failure_shows_only_error() {
        let error = serde_json::from_str::<Vec<Expense>>("<html>").unwrap_err();
        let mut state = resolved(Err(error.into()));
        let lines = draw(&mut state);
        assert!(contains(&lines, ERROR_MESSAGE));
        assert!(!contains(&lines, spinner::LABEL));
        assert!(!contains(&lines, "Merchant"));
        assert_eq!(state.get_title(), crate::state::ERROR_TITLE);
    }

    #[test]
    fn capitalizes_multi_word_category() {
        let mut state = resolved(Ok(vec![expense(1, "Acme", "office supplies")]));
        let lines = draw(&mut state);
        assert!(contains(&lines, "Office Supplies"));
    }
}
