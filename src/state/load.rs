use crate::expenses::Expense;
use std::sync::atomic::{AtomicU64, Ordering};

static NEXT_TICKET: AtomicU64 = AtomicU64::new(1);

/// Progress of the single expenses request of a mount.
///
#[derive(Clone, Debug, PartialEq)]
pub enum Load {
    Loading,
    Failed,
    Loaded(Vec<Expense>),
}

impl Load {
    pub fn is_loading(&self) -> bool {
        matches!(self, Load::Loading)
    }

    pub fn is_failed(&self) -> bool {
        matches!(self, Load::Failed)
    }

    /// Return the loaded expenses, if any.
    ///
    pub fn expenses(&self) -> Option<&[Expense]> {
        match self {
            Load::Loaded(expenses) => Some(expenses.as_slice()),
            _ => None,
        }
    }
}

/// Identifies the in-flight request owned by a mounted view. Results carrying
/// a ticket the state no longer waits for are dropped.
///
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub struct LoadTicket(u64);

impl LoadTicket {
    /// Return a ticket that has never been handed out before.
    ///
    pub fn issue() -> Self {
        LoadTicket(NEXT_TICKET.fetch_add(1, Ordering::Relaxed))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn tickets_are_unique() {
        let a = LoadTicket::issue();
        let b = LoadTicket::issue();
        assert_ne!(a, b);
    }

    #[test]
    fn expenses_only_when_loaded() {
        assert!(Load::Loading.expenses().is_none());
        assert!(Load::Failed.expenses().is_none());
        assert_eq!(Load::Loaded(vec![]).expenses(), Some(&[][..]));
    }
}
