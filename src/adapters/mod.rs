// Adapters layer: concrete implementations for external systems (email provider, HTTP server, serverless events).

pub mod function;
pub mod http;
pub mod resend;
