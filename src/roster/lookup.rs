//! Client-side lookup bookkeeping.
//!
//! A new lookup may be submitted while a previous one is still in flight. Every lookup takes a
//! ticket from [`LookupSequence`] and its results are only applied while that ticket is still
//! the latest one, so a slow response can never overwrite a newer one.

/// Ticket identifying one submitted lookup.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord)]
pub struct LookupTicket(u64);

#[derive(Debug, Clone, Default)]
pub struct LookupSequence {
    latest: u64,
}

impl LookupSequence {
    /// Starts a new lookup, invalidating all previously issued tickets.
    pub fn begin(&mut self) -> LookupTicket {
        self.latest += 1;
        LookupTicket(self.latest)
    }

    pub fn is_current(&self, ticket: LookupTicket) -> bool {
        ticket.0 == self.latest
    }
}

/// Presentation state of a lookup.
#[derive(Debug, Clone, PartialEq, Default)]
pub enum LookupState<T> {
    /// Nothing was requested yet
    #[default]
    Idle,
    Loading,
    Loaded(T),
    Failed(String),
}

impl<T> LookupState<T> {
    pub fn is_loading(&self) -> bool {
        matches!(self, Self::Loading)
    }

    pub fn loaded(&self) -> Option<&T> {
        match self {
            Self::Loaded(value) => Some(value),
            _ => None,
        }
    }

    pub fn error(&self) -> Option<&str> {
        match self {
            Self::Failed(message) => Some(message),
            _ => None,
        }
    }
}
