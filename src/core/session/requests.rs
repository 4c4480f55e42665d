use std::collections::HashMap;

/// A slice of state filled by a read request.
///
/// `Session` is shared by every user action issued while one session lasts;
/// only logout or a new login supersedes it.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Slot {
    Session,
    Profile,
    Stats,
    Jobs,
    JobDetails,
    Wallet,
}

/// Identifies one issued request. Only the newest ticket of a slot may write to it.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Ticket {
    slot: Slot,
    generation: u64,
}

impl Ticket {
    pub fn slot(&self) -> Slot {
        self.slot
    }
}

#[derive(Debug, Clone, Default)]
pub struct RequestTracker {
    counter: u64,
    latest: HashMap<Slot, u64>,
}

impl RequestTracker {
    pub fn issue(&mut self, slot: Slot) -> Ticket {
        self.counter += 1;
        self.latest.insert(slot, self.counter);
        Ticket {
            slot,
            generation: self.counter,
        }
    }

    /// The slot's outstanding ticket, issuing one if none is live.
    pub fn current(&mut self, slot: Slot) -> Ticket {
        match self.latest.get(&slot) {
            Some(&generation) => Ticket { slot, generation },
            None => self.issue(slot),
        }
    }

    pub fn is_current(&self, ticket: Ticket) -> bool {
        self.latest.get(&ticket.slot) == Some(&ticket.generation)
    }

    /// Every outstanding ticket becomes stale. Generations keep counting up.
    pub fn invalidate_all(&mut self) {
        self.latest.clear();
    }
}
