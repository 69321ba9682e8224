use thiserror::Error;

pub const SUBJECT: &str = "New contact message";

/// How long the sent/failed banner stays before the form goes back to idle.
pub const STATUS_RESET_MS: u32 = 5_000;

#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

#[derive(Debug, Error, PartialEq)]
pub enum ContactError {
    #[error("Please enter your email address.")]
    MissingEmail,
    #[error("That email address doesn't look right.")]
    InvalidEmail,
    #[error("Please write a short message.")]
    MissingMessage,
    #[error("Couldn't open your mail app. Please email us directly at {0}.")]
    Handoff(String),
}

#[derive(Clone, Debug, PartialEq)]
pub enum FormStatus {
    Idle,
    Sent,
    Failed(String),
}

impl ContactMessage {
    pub fn validate(&self) -> Result<(), ContactError> {
        let email = self.email.trim();
        if email.is_empty() {
            return Err(ContactError::MissingEmail);
        }
        if !email.contains('@') || email.starts_with('@') || email.ends_with('@') {
            return Err(ContactError::InvalidEmail);
        }
        if self.message.trim().is_empty() {
            return Err(ContactError::MissingMessage);
        }
        Ok(())
    }

    pub fn body(&self) -> String {
        format!(
            "Name: {}\nEmail: {}\nMessage: {}",
            self.name, self.email, self.message
        )
    }
}

/// Builds the `mailto:` link handed to the visitor's mail client.
pub fn mailto_link(recipient: &str, msg: &ContactMessage) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        recipient,
        urlencoding::encode(SUBJECT),
        urlencoding::encode(&msg.body())
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactMessage {
        ContactMessage {
            name: "Aisyah Rahman".to_string(),
            email: "aisyah@example.com".to_string(),
            message: "We need a booking bot & a new site.\nBudget is flexible?".to_string(),
        }
    }

    fn query_param(link: &str, key: &str) -> String {
        let query = link.split_once('?').map(|(_, q)| q).unwrap_or("");
        let raw = query
            .split('&')
            .find_map(|pair| pair.strip_prefix(&format!("{}=", key)))
            .unwrap_or("");
        urlencoding::decode(raw).unwrap().into_owned()
    }

    #[test]
    fn mailto_has_exact_subject_and_all_fields() {
        let msg = filled();
        let link = mailto_link("hello@nexadigital.my", &msg);

        assert!(link.starts_with("mailto:hello@nexadigital.my?"));
        assert_eq!(query_param(&link, "subject"), "New contact message");

        let body = query_param(&link, "body");
        let lines: Vec<&str> = body.splitn(3, '\n').collect();
        assert_eq!(lines[0], "Name: Aisyah Rahman");
        assert_eq!(lines[1], "Email: aisyah@example.com");
        assert!(body.contains(&msg.message));
    }

    #[test]
    fn special_characters_do_not_break_the_query() {
        let link = mailto_link("hello@nexadigital.my", &filled());
        let query = link.split_once('?').unwrap().1;
        // the '&' and '?' in the message are encoded, so only two params remain
        assert_eq!(query.split('&').count(), 2);
    }

    #[test]
    fn email_and_message_are_required() {
        let mut msg = filled();
        msg.name.clear();
        assert_eq!(msg.validate(), Ok(()));

        msg.email = "   ".to_string();
        assert_eq!(msg.validate(), Err(ContactError::MissingEmail));

        msg.email = "not-an-email".to_string();
        assert_eq!(msg.validate(), Err(ContactError::InvalidEmail));

        msg.email = "a@b.co".to_string();
        msg.message = "\n".to_string();
        assert_eq!(msg.validate(), Err(ContactError::MissingMessage));
    }

    #[test]
    fn handoff_error_points_to_address() {
        let err = ContactError::Handoff("hello@nexadigital.my".to_string());
        assert!(err.to_string().contains("hello@nexadigital.my"));
    }
}
