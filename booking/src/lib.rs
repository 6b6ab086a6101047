//! Everything about taking a booking request that doesn't need a browser: checking the chosen
//! day and time against our hours, keeping track of the form, and writing the WhatsApp message.

mod error;
mod service;
mod draft;
mod form;
pub mod hours;
pub mod message;

pub use error::ValidationError;
pub use service::{Service, UnknownService};
pub use draft::{Draft, Field, FieldErrors, ValidBooking};
pub use form::{BookingForm, Dispatcher, SubmitOutcome};
pub use hours::{OpenStatus, ScheduleDay};
