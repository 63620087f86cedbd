use crate::utils::error::{Result, WaitlistError};
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;
use std::fmt;

pub const MASTERMIND_LABEL: &str = "Mastermind";
pub const RETREAT_LABEL: &str = "Remote Retreat";

/// Signup category carried in the `type` field of a submission.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Category {
    Mastermind,
    Retreat,
    System,
    /// Any other tag, kept verbatim. An absent `type` lands here as `""`.
    Unrecognized(String),
}

impl Category {
    pub fn parse(tag: &str) -> Self {
        match tag {
            "mastermind" => Category::Mastermind,
            "retreat" => Category::Retreat,
            "system" => Category::System,
            other => Category::Unrecognized(other.to_string()),
        }
    }

    pub fn tag(&self) -> &str {
        match self {
            Category::Mastermind => "mastermind",
            Category::Retreat => "retreat",
            Category::System => "system",
            Category::Unrecognized(raw) => raw,
        }
    }

    /// Label used in the welcome email.
    ///
    /// System access signups share the retreat wording. Unrecognized tags
    /// fall back to the same wording and are logged.
    pub fn label(&self) -> &'static str {
        match self {
            Category::Mastermind => MASTERMIND_LABEL,
            Category::Retreat => RETREAT_LABEL,
            Category::System => RETREAT_LABEL,
            Category::Unrecognized(raw) => {
                tracing::warn!(category = %raw, "unrecognized signup category, using '{}' label", RETREAT_LABEL);
                RETREAT_LABEL
            }
        }
    }

    /// Title shown on the signup form for this category.
    pub fn form_title(&self) -> &'static str {
        match self {
            Category::Mastermind => "Mastermind",
            Category::Retreat => "Remote Retreat",
            Category::System => "System Access",
            Category::Unrecognized(_) => "Waitlist",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.tag())
    }
}

/// Wire shape of a waitlist submission, shared by the endpoint and the form client.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct SignupBody {
    #[serde(default)]
    pub email: Option<String>,
    #[serde(default, rename = "type", deserialize_with = "any_tag")]
    pub kind: Option<String>,
}

// Non-string tags are kept as their JSON text so they parse as unrecognized.
fn any_tag<'de, D>(deserializer: D) -> std::result::Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    Ok(match Value::deserialize(deserializer)? {
        Value::Null => None,
        Value::String(tag) => Some(tag),
        other => Some(other.to_string()),
    })
}

impl SignupBody {
    pub fn new(email: impl Into<String>, category: &Category) -> Self {
        Self {
            email: Some(email.into()),
            kind: Some(category.tag().to_string()),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct SignupRequest {
    pub email: String,
    pub category: Category,
}

impl SignupRequest {
    /// Decodes a raw request body. Anything that is not a JSON object is an
    /// unexpected failure; a missing or empty email is an input error.
    pub fn from_body(body: &[u8]) -> Result<Self> {
        let body: SignupBody = serde_json::from_slice(body).map_err(WaitlistError::MalformedBody)?;
        Self::try_from(body)
    }
}

impl TryFrom<SignupBody> for SignupRequest {
    type Error = WaitlistError;

    fn try_from(body: SignupBody) -> Result<Self> {
        let email = match body.email {
            Some(email) if !email.is_empty() => email,
            _ => return Err(WaitlistError::MissingEmail),
        };

        Ok(Self {
            email,
            category: Category::parse(body.kind.as_deref().unwrap_or_default()),
        })
    }
}

/// Message handed to the email provider.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub html: String,
}

/// Provider receipt for an accepted send.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Delivery {
    pub id: String,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Acknowledgement {
    pub message: String,
    pub data: Delivery,
}

impl Acknowledgement {
    pub const SENT: &'static str = "Email sent successfully";

    pub fn sent(data: Delivery) -> Self {
        Self {
            message: Self::SENT.to_string(),
            data,
        }
    }
}
