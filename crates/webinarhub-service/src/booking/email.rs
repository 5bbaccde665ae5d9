//! Composition of the organizer notification mail.

use webinarhub_core::traits::EmailMessage;

/// Subject line for every new-participant notification.
const NEW_PARTICIPANT_SUBJECT: &str = "New Participant";

/// Build the mail sent to a webinar's organizer after a booking.
///
/// The subject and body are a fixed contract; monitoring and tests match
/// on the exact strings.
pub fn new_participant_email(
    organizer_email: &str,
    registrant_email: &str,
    webinar_title: &str,
) -> EmailMessage {
    EmailMessage {
        to: organizer_email.to_string(),
        subject: NEW_PARTICIPANT_SUBJECT.to_string(),
        body: format!(
            "User {registrant_email} has successfully registered for the webinar \"{webinar_title}\"."
        ),
    }
}
