//! Open-ticket notifications.

mod poller;

pub use poller::{PollerHandle, TicketPoller, TicketSource};
