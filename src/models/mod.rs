pub mod booking;

pub use booking::{BookingDraft, BookingField};
