use super::load::{Load, LoadTicket};
use crate::app::NetworkEventSender;
use crate::events::network::Event as NetworkEvent;
use crate::expenses::{Expense, LoadError};
use crate::logger::LogBuffer;
use crate::ui::{Theme, SPINNER_FRAME_COUNT};
use log::*;
use ratatui::widgets::TableState;

/// Window title while the view is healthy.
///
pub const TITLE: &str = "Expenses | Tipalti";

/// Window title once loading failed.
///
pub const ERROR_TITLE: &str = "An error occured";

/// Houses data representative of application state.
///
pub struct State {
    net_sender: Option<NetworkEventSender>,
    load: Load,
    pending_ticket: Option<LoadTicket>,
    load_requested: bool,
    title: &'static str,
    title_changed: bool,
    spinner_index: usize,
    table_state: TableState,
    log_visible: bool,
    log: LogBuffer,
    theme: Theme,
}

/// Defines default application state.
///
impl Default for State {
    fn default() -> State {
        State {
            net_sender: None,
            load: Load::Loading,
            pending_ticket: None,
            load_requested: false,
            title: TITLE,
            title_changed: true,
            spinner_index: 0,
            table_state: TableState::default(),
            log_visible: false,
            log: LogBuffer::new(),
            theme: Theme::default(),
        }
    }
}

impl State {
    /// Return new state for a freshly mounted view.
    ///
    pub fn new(net_sender: NetworkEventSender, log: LogBuffer, theme: Theme) -> Self {
        State {
            net_sender: Some(net_sender),
            log,
            theme,
            ..State::default()
        }
    }

    /// Issue the one request of this mount. Returns the ticket owning the
    /// request, or None if a request was already issued.
    ///
    pub fn begin_load(&mut self) -> Option<LoadTicket> {
        if self.load_requested {
            debug!("Expenses were already requested for this view.");
            return None;
        }
        self.load_requested = true;
        let ticket = LoadTicket::issue();
        self.pending_ticket = Some(ticket);
        info!("Loading expenses...");
        let sent = match &self.net_sender {
            Some(sender) => sender
                .send(NetworkEvent::LoadExpenses { ticket })
                .map_err(|e| e.to_string()),
            None => Err("no network channel".to_string()),
        };
        if let Err(e) = sent {
            error!("Failed to dispatch expenses request: {}", e);
            self.fail();
        }
        Some(ticket)
    }

    /// Apply the outcome of the request identified by the ticket. Returns
    /// false when the ticket is not pending, such as after unmount.
    ///
    pub fn resolve(
        &mut self,
        ticket: LoadTicket,
        outcome: Result<Vec<Expense>, LoadError>,
    ) -> bool {
        if self.pending_ticket != Some(ticket) {
            warn!("Ignoring expenses result for {:?} that is no longer pending.", ticket);
            return false;
        }
        self.pending_ticket = None;
        match outcome {
            Ok(expenses) => {
                info!("Loaded {} expenses.", expenses.len());
                self.table_state
                    .select(if expenses.is_empty() { None } else { Some(0) });
                self.load = Load::Loaded(expenses);
            }
            Err(e) => {
                error!("Failed to load expenses: {}", e);
                self.fail();
            }
        }
        true
    }

    fn fail(&mut self) {
        self.pending_ticket = None;
        self.load = Load::Failed;
        self.set_title(ERROR_TITLE);
    }

    /// Release the pending request so a late result is ignored.
    ///
    pub fn unmount(&mut self) {
        if let Some(ticket) = self.pending_ticket.take() {
            debug!("Abandoning pending expenses request {:?}.", ticket);
        }
    }

    /// Return the current load progress.
    ///
    pub fn get_load(&self) -> &Load {
        &self.load
    }

    /// Return whether a request result is still awaited.
    ///
    pub fn is_pending(&self) -> bool {
        self.pending_ticket.is_some()
    }

    /// Return the window title.
    ///
    pub fn get_title(&self) -> &'static str {
        self.title
    }

    fn set_title(&mut self, title: &'static str) {
        if self.title != title {
            self.title = title;
            self.title_changed = true;
        }
    }

    /// Return the window title if it changed since the last call.
    ///
    pub fn take_title_change(&mut self) -> Option<&'static str> {
        if self.title_changed {
            self.title_changed = false;
            Some(self.title)
        } else {
            None
        }
    }

    /// Advance the spinner index.
    ///
    pub fn advance_spinner_index(&mut self) -> &mut Self {
        self.spinner_index += 1;
        if self.spinner_index >= SPINNER_FRAME_COUNT {
            self.spinner_index = 0;
        }
        self
    }

    /// Return the current spinner index.
    ///
    pub fn get_spinner_index(&self) -> &usize {
        &self.spinner_index
    }

    fn row_count(&self) -> usize {
        self.load.expenses().map_or(0, |e| e.len())
    }

    /// Move the row highlight down, stopping at the last row.
    ///
    pub fn next_row(&mut self) -> &mut Self {
        let count = self.row_count();
        if count > 0 {
            let next = match self.table_state.selected() {
                Some(i) if i + 1 < count => i + 1,
                Some(i) => i,
                None => 0,
            };
            self.table_state.select(Some(next));
        }
        self
    }

    /// Move the row highlight up, stopping at the first row.
    ///
    pub fn previous_row(&mut self) -> &mut Self {
        if self.row_count() > 0 {
            let previous = self.table_state.selected().map_or(0, |i| i.saturating_sub(1));
            self.table_state.select(Some(previous));
        }
        self
    }

    /// Highlight the first row.
    ///
    pub fn first_row(&mut self) -> &mut Self {
        if self.row_count() > 0 {
            self.table_state.select(Some(0));
        }
        self
    }

    /// Highlight the last row.
    ///
    pub fn last_row(&mut self) -> &mut Self {
        let count = self.row_count();
        if count > 0 {
            self.table_state.select(Some(count - 1));
        }
        self
    }

    /// Return the index of the highlighted row.
    ///
    pub fn get_selected_row(&self) -> Option<usize> {
        self.table_state.selected()
    }

    /// Return the loaded expenses together with the table state for
    /// rendering.
    ///
    pub fn table_parts(&mut self) -> Option<(&[Expense], &mut TableState)> {
        match &self.load {
            Load::Loaded(expenses) => Some((expenses.as_slice(), &mut self.table_state)),
            _ => None,
        }
    }

    /// Show or hide the log panel.
    ///
    pub fn toggle_log(&mut self) -> &mut Self {
        self.log_visible = !self.log_visible;
        self
    }

    /// Return whether the log panel is shown.
    ///
    pub fn is_log_visible(&self) -> bool {
        self.log_visible
    }

    /// Return the most recent log entries.
    ///
    pub fn get_log_entries(&self, count: usize) -> Vec<String> {
        self.log.tail(count)
    }

    /// Return the active theme.
    ///
    pub fn get_theme(&self) -> &Theme {
        &self.theme
    }
}
