//! List fetch state with stale-response protection

/// What the list area currently shows
#[derive(Debug, Clone, PartialEq)]
pub enum Listing<R> {
    Loading,
    Loaded(Vec<R>),
    Failed(String),
}

/// Handle for one in-flight list request
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct FetchTicket {
    generation: u64,
    pub page: u32,
}

/// List state plus a fetch generation.
///
/// Every fetch takes a ticket; only the result for the newest ticket is
/// applied, so a slow response for page 1 can't overwrite page 2.
#[derive(Debug, Clone, PartialEq)]
pub struct ListingState<R> {
    listing: Listing<R>,
    generation: u64,
}

impl<R> Default for ListingState<R> {
    fn default() -> Self {
        Self {
            listing: Listing::Loading,
            generation: 0,
        }
    }
}

impl<R> ListingState<R> {
    pub fn begin(&mut self, page: u32) -> FetchTicket {
        self.generation += 1;
        self.listing = Listing::Loading;
        FetchTicket {
            generation: self.generation,
            page,
        }
    }

    /// Applies a fetch result. Returns false when the ticket was superseded.
    pub fn apply(&mut self, ticket: FetchTicket, result: Result<Vec<R>, String>) -> bool {
        if ticket.generation != self.generation {
            tracing::debug!(page = ticket.page, "Dropping stale list response");
            return false;
        }
        self.listing = match result {
            Ok(items) => Listing::Loaded(items),
            Err(message) => Listing::Failed(message),
        };
        true
    }

    pub fn listing(&self) -> &Listing<R> {
        &self.listing
    }

    /// Items of the last successful fetch; empty while loading or failed
    pub fn items(&self) -> &[R] {
        match &self.listing {
            Listing::Loaded(items) => items,
            _ => &[],
        }
    }

    pub fn is_loading(&self) -> bool {
        matches!(self.listing, Listing::Loading)
    }

    pub fn error(&self) -> Option<&str> {
        match &self.listing {
            Listing::Failed(message) => Some(message),
            _ => None,
        }
    }
}
