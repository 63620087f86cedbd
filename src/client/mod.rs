//! Client side of the waitlist: the signup form's state machine and the
//! HTTP client it submits through.

pub mod form;
pub mod transport;

pub use form::{Confirmation, FormOutcome, FormState, WaitlistForm};
pub use transport::WaitlistClient;
