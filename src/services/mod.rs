pub mod booking;
pub mod payment;
pub mod purchase;
pub mod ticket;

pub use booking::BookingService;
pub use payment::{PaymentGateway, SimulatedGateway};
pub use purchase::{PurchaseOutcome, PurchaseService};
pub use ticket::TicketService;
