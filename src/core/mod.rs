pub mod message;
pub mod waitlist;

pub use crate::domain::model::{Acknowledgement, Category, Delivery, OutboundEmail, SignupRequest};
pub use crate::domain::ports::{ConfigProvider, EmailProvider};
pub use crate::utils::error::Result;
