use crate::expenses::Expenses;
use crate::state::{LoadTicket, State};
use anyhow::Result;
use log::*;
use std::sync::Arc;
use tokio::sync::Mutex;

/// Specify different network event types.
///
#[derive(Debug, Clone)]
pub enum Event {
    LoadExpenses { ticket: LoadTicket },
}

/// Specify struct for managing state with network events.
///
pub struct Handler<'a> {
    state: &'a Arc<Mutex<State>>,
    expenses: &'a Expenses,
}

impl<'a> Handler<'a> {
    /// Return new instance with reference to state.
    ///
    pub fn new(state: &'a Arc<Mutex<State>>, expenses: &'a Expenses) -> Self {
        Handler { state, expenses }
    }

    /// Handle network events by type.
    ///
    pub async fn handle(&mut self, event: Event) -> Result<()> {
        debug!("Processing network event '{:?}'...", event);
        match event {
            Event::LoadExpenses { ticket } => self.load_expenses(ticket).await,
        }
        Ok(())
    }

    /// Fetch expenses and hand the outcome to the state. The state lock is
    /// not held while the request is in flight.
    ///
    async fn load_expenses(&mut self, ticket: LoadTicket) {
        info!("Fetching expenses...");
        let outcome = self.expenses.list().await;
        let mut state = self.state.lock().await;
        state.resolve(ticket, outcome);
    }
}
