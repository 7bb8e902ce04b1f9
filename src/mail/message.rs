//! Outbound message assembly.

use lettre::message::{Mailbox, Message, MultiPart};
use lettre::Address;

use crate::contact::ContactSubmission;
use crate::mail::MailError;

/// Assemble the notification email for one submission.
///
/// `from` carries the submitter's (sanitized) name and address so the
/// notification reads like a message from them; `to` is the configured
/// recipient. The body ships as plain-text and HTML alternatives, with
/// newline-to-`<br/>` conversion applied only to the HTML variant.
pub fn build_message(
    submission: &ContactSubmission,
    recipient: &Mailbox,
) -> Result<Message, MailError> {
    let from = Mailbox::new(
        Some(submission.name.clone()),
        submission.email.parse::<Address>()?,
    );

    Message::builder()
        .from(from)
        .to(recipient.clone())
        .subject(format!("Portfolio contact form: {}", submission.name))
        .multipart(MultiPart::alternative_plain_html(
            text_body(submission),
            html_body(submission),
        ))
        .map_err(MailError::Message)
}

fn text_body(submission: &ContactSubmission) -> String {
    format!(
        "You received a new message from your portfolio contact form:\n\n\
         Name: {}\nEmail: {}\n\nMessage:\n{}",
        submission.name, submission.email, submission.message
    )
}

fn html_body(submission: &ContactSubmission) -> String {
    format!(
        "<p>You received a new message from your portfolio contact form:</p>\
         <p><strong>Name:</strong> {}<br/><strong>Email:</strong> {}</p>\
         <p><strong>Message:</strong><br/>{}</p>",
        submission.name,
        submission.email,
        submission.message.replace('\n', "<br/>")
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    fn recipient() -> Mailbox {
        "inbox@example.com".parse().unwrap()
    }

    #[test]
    fn from_carries_submitter_identity() {
        let submission = ContactSubmission::sanitized("Ann", "ann@x.com", "Hello, long enough.");
        let message = build_message(&submission, &recipient()).unwrap();
        let rendered = String::from_utf8(message.formatted()).unwrap();

        assert!(rendered.contains("Ann"));
        assert!(rendered.contains("ann@x.com"));
        assert!(rendered.contains("Subject: Portfolio contact form: Ann"));
        assert!(rendered.contains("To: inbox@example.com"));
    }

    #[test]
    fn newlines_become_breaks_only_in_html() {
        let submission =
            ContactSubmission::sanitized("Ann", "ann@x.com", "line one\nline two here");

        let text = text_body(&submission);
        let html = html_body(&submission);

        assert!(text.contains("line one\nline two here"));
        assert!(!text.contains("<br/>"));
        assert!(html.contains("line one<br/>line two here"));
    }

    #[test]
    fn sanitized_payload_never_reaches_the_body() {
        let submission =
            ContactSubmission::sanitized("Ann", "ann@x.com", "see ${evil} and <script>alert</script>");

        let text = text_body(&submission);
        let html = html_body(&submission);

        for body in [text, html] {
            assert!(!body.contains("${"));
            assert!(!body.contains("<script>"));
        }
    }

    #[test]
    fn unparseable_sender_address_is_rejected() {
        let submission = ContactSubmission {
            name: "Ann".into(),
            email: "definitely not an address".into(),
            message: "Hello, long enough.".into(),
        };

        assert!(matches!(
            build_message(&submission, &recipient()),
            Err(MailError::Address(_))
        ));
    }
}
