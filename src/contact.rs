use log::{error, info};

use crate::actions::{mailto_url, MailComposer};
use crate::config;

pub const SUCCESS_MESSAGE: &str = "Thank you for your inquiry! We will get back to you soon.";
pub const FAILURE_MESSAGE: &str = "There was an error submitting your form. Please try again.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ContactField {
    Name,
    Email,
    Company,
    Role,
    Message,
}

impl ContactField {
    pub fn is_required(self) -> bool {
        matches!(self, ContactField::Name | ContactField::Email)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    Sent,
    Failed,
}

impl SubmitStatus {
    pub fn is_success(self) -> bool {
        self == SubmitStatus::Sent
    }

    pub fn message(self) -> &'static str {
        match self {
            SubmitStatus::Sent => SUCCESS_MESSAGE,
            SubmitStatus::Failed => FAILURE_MESSAGE,
        }
    }
}

/// Values of the demo request form as typed. Nothing is escaped or
/// validated beyond the two required fields.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ContactForm {
    pub name: String,
    pub email: String,
    pub company: String,
    pub role: String,
    pub message: String,
}

fn or_placeholder<'a>(value: &'a str, placeholder: &'a str) -> &'a str {
    if value.is_empty() {
        placeholder
    } else {
        value
    }
}

impl ContactForm {
    pub fn get(&self, field: ContactField) -> &str {
        match field {
            ContactField::Name => &self.name,
            ContactField::Email => &self.email,
            ContactField::Company => &self.company,
            ContactField::Role => &self.role,
            ContactField::Message => &self.message,
        }
    }

    pub fn set(&mut self, field: ContactField, value: String) {
        let slot = match field {
            ContactField::Name => &mut self.name,
            ContactField::Email => &mut self.email,
            ContactField::Company => &mut self.company,
            ContactField::Role => &mut self.role,
            ContactField::Message => &mut self.message,
        };
        *slot = value;
    }

    /// First required field left empty, matching what the browser's
    /// `required` attribute would block.
    pub fn missing_required(&self) -> Option<ContactField> {
        [ContactField::Name, ContactField::Email]
            .into_iter()
            .find(|field| self.get(*field).is_empty())
    }

    pub fn subject(&self) -> String {
        format!("Contact Form Submission - {}", self.name)
    }

    pub fn body(&self) -> String {
        format!(
            "New contact form submission:\n\n\
             Name: {}\n\
             Email: {}\n\
             Company: {}\n\
             Role: {}\n\n\
             Message:\n\
             {}\n\n\
             Please respond to this inquiry as soon as possible.",
            self.name,
            self.email,
            or_placeholder(&self.company, "Not provided"),
            or_placeholder(&self.role, "Not provided"),
            or_placeholder(&self.message, "No message provided"),
        )
    }

    pub fn mailto(&self) -> String {
        mailto_url(config::CONTACT_EMAIL, &self.subject(), &self.body())
    }

    /// Asks `composer` to open a pre-filled mail. Fields are cleared only
    /// when the request goes through; a missing required field stops
    /// before the composer is touched.
    pub fn submit(&mut self, composer: &dyn MailComposer) -> Result<SubmitStatus, ContactField> {
        if let Some(field) = self.missing_required() {
            return Err(field);
        }

        match composer.compose(&self.mailto()) {
            Ok(()) => {
                info!("Contact request handed to mail client");
                *self = ContactForm::default();
                Ok(SubmitStatus::Sent)
            }
            Err(e) => {
                error!("Form submission error: {}", e);
                Ok(SubmitStatus::Failed)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn filled() -> ContactForm {
        ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            company: "Analytical Engines".into(),
            role: "Partner".into(),
            message: "Interested in the seed round.".into(),
        }
    }

    #[test]
    fn body_uses_placeholders_for_blank_optionals() {
        let form = ContactForm {
            name: "Ada".into(),
            email: "ada@example.com".into(),
            ..Default::default()
        };
        let body = form.body();
        assert!(body.starts_with("New contact form submission:\n\nName: Ada\n"));
        assert!(body.contains("Company: Not provided\nRole: Not provided\n"));
        assert!(body.contains("Message:\nNo message provided\n\n"));
        assert!(body.ends_with("Please respond to this inquiry as soon as possible."));
    }

    #[test]
    fn body_embeds_values_verbatim() {
        let mut form = filled();
        form.set(ContactField::Name, "Ada\r\nBcc: someone@else".into());
        assert!(form.body().contains("Name: Ada\r\nBcc: someone@else\n"));
        assert_eq!(form.subject(), "Contact Form Submission - Ada\r\nBcc: someone@else");
    }

    #[test]
    fn required_fields_checked_in_order() {
        assert_eq!(ContactForm::default().missing_required(), Some(ContactField::Name));
        let mut form = ContactForm::default();
        form.set(ContactField::Name, "Ada".into());
        assert_eq!(form.missing_required(), Some(ContactField::Email));
        form.set(ContactField::Email, "ada@example.com".into());
        assert_eq!(form.missing_required(), None);
    }

    #[test]
    fn whitespace_counts_as_present() {
        let form = ContactForm {
            name: " ".into(),
            email: "not-an-email".into(),
            ..Default::default()
        };
        assert_eq!(form.missing_required(), None);
    }

    #[test]
    fn only_name_and_email_required() {
        assert!(ContactField::Name.is_required());
        assert!(ContactField::Email.is_required());
        assert!(!ContactField::Company.is_required());
        assert!(!ContactField::Role.is_required());
        assert!(!ContactField::Message.is_required());
    }

    #[test]
    fn status_messages() {
        assert!(SubmitStatus::Sent.is_success());
        assert!(!SubmitStatus::Failed.is_success());
        assert_eq!(SubmitStatus::Sent.message(), SUCCESS_MESSAGE);
        assert_eq!(SubmitStatus::Failed.message(), FAILURE_MESSAGE);
    }
}
