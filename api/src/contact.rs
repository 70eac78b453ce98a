use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::post_json;

pub const CONTACT_ENDPOINT: &str = "/api/contact";

// the body of POST /api/contact
//
// all four fields are trimmed, non-empty strings by the time the client sends them
#[derive(Clone, Debug, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub subject: String,
    pub message: String,
}

impl ContactMessage {
    pub fn to_json(&self) -> anyhow::Result<String> {
        Ok(serde_json::to_string(self)?)
    }
}

pub async fn send_contact(endpoint: &str, message: &ContactMessage) -> anyhow::Result<()> {
    debug!(endpoint, "sending contact message");

    post_json(endpoint, message).await
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn wire_format_uses_the_four_field_names() {
        let message = ContactMessage {
            name: "Ada".to_owned(),
            email: "ada@example.com".to_owned(),
            subject: "Hello".to_owned(),
            message: "Hi".to_owned(),
        };

        let value: serde_json::Value = serde_json::from_str(&message.to_json().unwrap()).unwrap();

        assert_eq!(
            value,
            serde_json::json!({
                "name": "Ada",
                "email": "ada@example.com",
                "subject": "Hello",
                "message": "Hi",
            })
        );
    }
}
