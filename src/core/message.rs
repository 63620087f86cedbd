use crate::domain::model::{OutboundEmail, SignupRequest};

pub const DEFAULT_SENDER: &str = "Remote Contractor System <onboarding@resend.dev>";

pub fn welcome_subject(label: &str) -> String {
    format!("Welcome to the {} Waitlist", label)
}

pub fn welcome_html(label: &str) -> String {
    format!(
        r#"
<div style="font-family: sans-serif; padding: 20px;">
  <h1>You're on the list!</h1>
  <p>Thanks for your interest in the <strong>{label}</strong>.</p>
  <p>We've secured your spot on the waitlist and will notify you as soon as doors open.</p>
  <hr />
  <p style="font-size: 12px; color: #888;">Remote Contractor System &bull; 2026</p>
</div>
"#
    )
}

/// Builds the welcome email for one signup. Subject and body differ only by
/// the category label.
pub fn compose_welcome(sender: &str, request: &SignupRequest) -> OutboundEmail {
    let label = request.category.label();

    OutboundEmail {
        from: sender.to_string(),
        to: vec![request.email.clone()],
        subject: welcome_subject(label),
        html: welcome_html(label),
    }
}
