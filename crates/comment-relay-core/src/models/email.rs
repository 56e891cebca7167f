/// Outgoing email model
use typed_builder::TypedBuilder;

/// A plain-text email handed to an [`EmailSender`](crate::services::EmailSender)
#[derive(Debug, Clone, PartialEq, Eq, TypedBuilder)]
pub struct OutgoingEmail {
    #[builder(setter(into))]
    pub from: String,
    #[builder(setter(into))]
    pub to: String,
    #[builder(setter(into))]
    pub subject: String,
    #[builder(setter(into))]
    pub body_text: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_outgoing_email_builder() {
        let email = OutgoingEmail::builder()
            .from("noreply@acme.com")
            .to("admin@acme.com")
            .subject("New User Comment")
            .body_text(String::from("hello"))
            .build();

        assert_eq!(email.from, "noreply@acme.com");
        assert_eq!(email.to, "admin@acme.com");
        assert_eq!(email.body_text, "hello");
    }
}
