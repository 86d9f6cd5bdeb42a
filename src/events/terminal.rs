use crate::state::State;
use anyhow::Result;
use crossterm::{
    event,
    event::{Event as CrosstermEvent, KeyCode, KeyEvent, KeyEventKind, KeyModifiers},
};
use log::*;
use std::{sync::mpsc, thread, time::Duration};

/// Specify terminal event poll rate in milliseconds.
///
const TICK_RATE_IN_MS: u64 = 60;

/// Specify different terminal event types.
///
#[derive(Debug)]
pub enum Event<I> {
    Input(I),
    Tick,
}

/// Specify struct for managing terminal events channel.
///
pub struct Handler {
    rx: mpsc::Receiver<Event<KeyEvent>>,
    _tx: mpsc::Sender<Event<KeyEvent>>,
}

impl Handler {
    /// Return new instance after spawning new input polling thread.
    ///
    pub fn new() -> Self {
        let (tx, rx) = mpsc::channel();
        let tx_clone = tx.clone();
        thread::spawn(move || loop {
            let tick_rate = Duration::from_millis(TICK_RATE_IN_MS);
            match event::poll(tick_rate) {
                Ok(true) => match event::read() {
                    Ok(CrosstermEvent::Key(key)) if key.kind == KeyEventKind::Press => {
                        if tx_clone.send(Event::Input(key)).is_err() {
                            break;
                        }
                    }
                    Ok(_) => (),
                    Err(e) => {
                        error!("Failed to read terminal event: {}", e);
                        break;
                    }
                },
                Ok(false) => (),
                Err(e) => {
                    error!("Failed to poll terminal events: {}", e);
                    break;
                }
            }
            if tx_clone.send(Event::Tick).is_err() {
                break;
            }
        });
        Handler { rx, _tx: tx }
    }

    /// Receive next terminal event and handle it accordingly. Returns result
    /// with value true if should continue or false if exit was requested.
    ///
    pub fn handle_next(&self, state: &mut State) -> Result<bool> {
        match self.rx.recv()? {
            Event::Input(event) => Ok(handle_key(event, state)),
            Event::Tick => {
                state.advance_spinner_index();
                Ok(true)
            }
        }
    }
}

/// Apply a key press to the state. Returns false if exit was requested.
///
pub fn handle_key(event: KeyEvent, state: &mut State) -> bool {
    match event {
        KeyEvent {
            code: KeyCode::Char('c'),
            modifiers: KeyModifiers::CONTROL,
            ..
        }
        | KeyEvent {
            code: KeyCode::Char('q') | KeyCode::Esc,
            ..
        } => {
            debug!("Processing exit terminal event '{:?}'...", event);
            return false;
        }
        KeyEvent {
            code: KeyCode::Char('j') | KeyCode::Down,
            ..
        } => {
            state.next_row();
        }
        KeyEvent {
            code: KeyCode::Char('k') | KeyCode::Up,
            ..
        } => {
            state.previous_row();
        }
        KeyEvent {
            code: KeyCode::Char('g') | KeyCode::Home,
            ..
        } => {
            state.first_row();
        }
        KeyEvent {
            code: KeyCode::Char('G') | KeyCode::End,
            ..
        } => {
            state.last_row();
        }
        KeyEvent {
            code: KeyCode::Char('l'),
            ..
        } => {
            state.toggle_log();
        }
        _ => (),
    }
    true
}

#[cfg(test)]
mod tests {
    use super::*;

    fn key(code: KeyCode) -> KeyEvent {
        KeyEvent::new(code, KeyModifiers::NONE)
    }

    #[test]
    fn quit_keys() {
        let mut state = State::default();
        assert!(!handle_key(key(KeyCode::Char('q')), &mut state));
        assert!(!handle_key(key(KeyCode::Esc), &mut state));
        assert!(!handle_key(
            KeyEvent::new(KeyCode::Char('c'), KeyModifiers::CONTROL),
            &mut state
        ));
    }

    #[test]
    fn plain_c_does_not_quit() {
        let mut state = State::default();
        assert!(handle_key(key(KeyCode::Char('c')), &mut state));
    }

    #[test]
    fn toggle_log_key() {
        let mut state = State::default();
        assert!(handle_key(key(KeyCode::Char('l')), &mut state));
        assert!(state.is_log_visible());
    }

    #[test]
    fn navigation_keys_without_rows() {
        let mut state = State::default();
        for code in [KeyCode::Char('j'), KeyCode::Up, KeyCode::End, KeyCode::Char('g')] {
            assert!(handle_key(key(code), &mut state));
        }
        assert_eq!(state.get_selected_row(), None);
    }
}
