//! TicketCreate: reserve sequence numbers for later use.

use crate::field::Field;
use crate::variant::{transaction_variant, TransactionVariant};

transaction_variant! {
    /// Set aside one or more sequence numbers as tickets.
    TicketCreate, [TicketCount]
}

impl TicketCreate {
    pub fn ticket_count(&self) -> Option<u32> {
        self.record().uint32(Field::TicketCount)
    }
}
