pub mod booking;
pub mod ticket;

pub use booking::Booking;
pub use ticket::TicketTier;
