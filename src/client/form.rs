use crate::client::transport::WaitlistClient;
use crate::domain::model::{Category, SignupBody};
use crate::utils::error::Result;

pub const ALERT_MESSAGE: &str = "Something went wrong. Please try again.";
pub const CONFIRMATION_HEADLINE: &str = "You're on the list";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormState {
    Idle,
    Submitting,
    Submitted,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Confirmation {
    pub headline: String,
    pub detail: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormOutcome {
    /// Nothing was sent: empty email, or the form was not idle.
    Ignored,
    Confirmed(Confirmation),
    /// Blocking alert; the form is editable again.
    Alerted(String),
}

/// Waitlist signup form: idle → submitting → submitted, or back to idle on failure.
#[derive(Debug, Clone)]
pub struct WaitlistForm {
    title: String,
    category: Category,
    email: String,
    state: FormState,
}

impl WaitlistForm {
    pub fn new(category: Category) -> Self {
        Self::with_title(category.form_title(), category)
    }

    pub fn with_title(title: impl Into<String>, category: Category) -> Self {
        Self {
            title: title.into(),
            category,
            email: String::new(),
            state: FormState::Idle,
        }
    }

    pub fn state(&self) -> FormState {
        self.state
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn email(&self) -> &str {
        &self.email
    }

    /// Input is only editable while idle.
    pub fn set_email(&mut self, email: impl Into<String>) {
        if self.state == FormState::Idle {
            self.email = email.into();
        }
    }

    pub fn can_submit(&self) -> bool {
        self.state == FormState::Idle
    }

    pub fn submit_label(&self) -> String {
        match self.state {
            FormState::Submitting => "SECURE PLACEMENT...".to_string(),
            _ => format!("GET NOTIFIED FOR {}", self.title.to_uppercase()),
        }
    }

    /// Moves to `Submitting` and returns the payload, or `None` when there is
    /// nothing to send.
    pub fn begin(&mut self) -> Option<SignupBody> {
        if !self.can_submit() || self.email.is_empty() {
            return None;
        }
        self.state = FormState::Submitting;
        Some(SignupBody::new(self.email.clone(), &self.category))
    }

    pub fn finish(&mut self, result: Result<()>) -> FormOutcome {
        match result {
            Ok(()) => {
                self.state = FormState::Submitted;
                FormOutcome::Confirmed(Confirmation {
                    headline: CONFIRMATION_HEADLINE.to_string(),
                    detail: format!(
                        "We'll notify you as soon as the {} doors open.",
                        self.title
                    ),
                })
            }
            Err(e) => {
                tracing::error!("Error: {}", e);
                self.state = FormState::Idle;
                FormOutcome::Alerted(ALERT_MESSAGE.to_string())
            }
        }
    }

    pub async fn submit(&mut self, client: &WaitlistClient) -> FormOutcome {
        let Some(body) = self.begin() else {
            return FormOutcome::Ignored;
        };
        let result = client.submit(&body).await;
        self.finish(result)
    }
}
