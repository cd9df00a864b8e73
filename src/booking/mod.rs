pub mod client;
pub mod models;

pub use client::{parse_reply, BookingBackend, BookingClient, BookingError};
pub use models::{BookingReply, BookingRequest, TimeSlot, UnknownTimeSlot};
