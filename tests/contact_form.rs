use std::cell::RefCell;

use cognivus_site::actions::{ComposeError, MailComposer};
use cognivus_site::config::CONTACT_EMAIL;
use cognivus_site::contact::{
    ContactField, ContactForm, SubmitStatus, FAILURE_MESSAGE, SUCCESS_MESSAGE,
};

#[derive(Default)]
struct Outbox {
    sent: RefCell<Vec<String>>,
}

impl MailComposer for Outbox {
    fn compose(&self, url: &str) -> Result<(), ComposeError> {
        self.sent.borrow_mut().push(url.to_string());
        Ok(())
    }
}

struct Blocked;

impl MailComposer for Blocked {
    fn compose(&self, _url: &str) -> Result<(), ComposeError> {
        Err(ComposeError::NoWindow)
    }
}

fn ada() -> ContactForm {
    let mut form = ContactForm::default();
    form.set(ContactField::Name, "Ada".into());
    form.set(ContactField::Email, "ada@example.com".into());
    form
}

#[test]
fn successful_submit_sends_once_and_clears() {
    let outbox = Outbox::default();
    let mut form = ada();

    let status = form.submit(&outbox).unwrap();

    let sent = outbox.sent.borrow();
    assert_eq!(sent.len(), 1);
    assert!(sent[0].starts_with(&format!("mailto:{}?subject=", CONTACT_EMAIL)));
    assert!(sent[0].contains("Contact%20Form%20Submission%20-%20Ada"));
    assert!(sent[0].contains("ada%40example.com"));
    assert_eq!(form, ContactForm::default());
    assert_eq!(status, SubmitStatus::Sent);
    assert_eq!(status.message(), SUCCESS_MESSAGE);
}

#[test]
fn failed_submit_keeps_fields() {
    let mut form = ada();
    form.set(ContactField::Message, "Send the data room link".into());
    let before = form.clone();

    let status = form.submit(&Blocked).unwrap();

    assert_eq!(form, before);
    assert!(!status.is_success());
    assert_eq!(status.message(), FAILURE_MESSAGE);
}

#[test]
fn missing_name_never_reaches_composer() {
    let outbox = Outbox::default();
    let mut form = ContactForm::default();
    form.set(ContactField::Email, "ada@example.com".into());

    assert_eq!(form.submit(&outbox), Err(ContactField::Name));
    assert!(outbox.sent.borrow().is_empty());
}

#[test]
fn missing_email_never_reaches_composer() {
    let outbox = Outbox::default();
    let mut form = ContactForm::default();
    form.set(ContactField::Name, "Ada".into());
    form.set(ContactField::Company, "Analytical Engines".into());

    assert_eq!(form.submit(&outbox), Err(ContactField::Email));
    assert!(outbox.sent.borrow().is_empty());
    assert_eq!(form.get(ContactField::Company), "Analytical Engines");
}

#[test]
fn second_submit_after_success_is_blocked() {
    let outbox = Outbox::default();
    let mut form = ada();
    form.submit(&outbox).unwrap();

    assert_eq!(form.submit(&outbox), Err(ContactField::Name));
    assert_eq!(outbox.sent.borrow().len(), 1);
}
