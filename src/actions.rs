//! Button actions shared across sections: pre-filled mail requests and
//! in-page scrolling.

use log::{debug, info, warn};
use thiserror::Error;
use web_sys::{ScrollBehavior, ScrollIntoViewOptions, ScrollLogicalPosition, ScrollToOptions};
use yew::prelude::*;

use crate::config;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ComposeError {
    #[error("no browser window available")]
    NoWindow,
    #[error("mail compose request was rejected: {0}")]
    Rejected(String),
}

/// Something that can hand a `mailto:` URL to the user's mail client.
pub trait MailComposer {
    fn compose(&self, url: &str) -> Result<(), ComposeError>;
}

/// Opens the URL through `window.open`, like following a link.
#[derive(Debug, Default, Clone, Copy)]
pub struct BrowserComposer;

impl MailComposer for BrowserComposer {
    fn compose(&self, url: &str) -> Result<(), ComposeError> {
        let window = web_sys::window().ok_or(ComposeError::NoWindow)?;
        // Mail handlers usually hand back no window, so only a thrown error counts.
        window
            .open_with_url(url)
            .map(|_| ())
            .map_err(|e| ComposeError::Rejected(format!("{:?}", e)))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MailTemplate {
    InvestorDemo,
    PitchDeck,
    TechnicalOverview,
    Consultation,
    SalesInquiry,
}

impl MailTemplate {
    pub const ALL: [MailTemplate; 5] = [
        MailTemplate::InvestorDemo,
        MailTemplate::PitchDeck,
        MailTemplate::TechnicalOverview,
        MailTemplate::Consultation,
        MailTemplate::SalesInquiry,
    ];

    pub fn subject(self) -> &'static str {
        match self {
            MailTemplate::InvestorDemo => "Investor Demo Request - Cognivus",
            MailTemplate::PitchDeck => "Pitch Deck Request - Cognivus",
            MailTemplate::TechnicalOverview => "Technical Overview Request - Cognivus",
            MailTemplate::Consultation => "Consultation Request - Cognivus",
            MailTemplate::SalesInquiry => "Sales Inquiry - Cognivus",
        }
    }

    pub fn body(self) -> &'static str {
        match self {
            MailTemplate::InvestorDemo => concat!(
                "Hello,\n\n",
                "I would like to schedule a demo of the Cognivus AI platform to discuss investment opportunities.\n\n",
                "Please let me know your availability for a 30-minute demonstration.\n\n",
                "Best regards,"
            ),
            MailTemplate::PitchDeck => concat!(
                "Hello,\n\n",
                "I would like to request a copy of the Cognivus pitch deck for investment review.\n\n",
                "Please send the latest version at your earliest convenience.\n\n",
                "Best regards,"
            ),
            MailTemplate::TechnicalOverview => concat!(
                "Hello,\n\n",
                "I would like to request the technical overview document for the Cognivus platform.\n\n",
                "Please send the latest technical documentation.\n\n",
                "Best regards,"
            ),
            MailTemplate::Consultation => concat!(
                "Hello,\n\n",
                "I would like to schedule a consultation to discuss how Cognivus can help with our drug discovery needs.\n\n",
                "Please let me know your availability.\n\n",
                "Best regards,"
            ),
            MailTemplate::SalesInquiry => concat!(
                "Hello,\n\n",
                "I'm interested in learning more about Cognivus's platform and pricing options.\n\n",
                "Please contact me to discuss our requirements.\n\n",
                "Best regards,"
            ),
        }
    }

    pub fn url(self) -> String {
        mailto_url(config::CONTACT_EMAIL, self.subject(), self.body())
    }
}

/// Builds `mailto:{address}?subject=..&body=..`. The address goes in as
/// given; subject and body are percent-encoded.
pub fn mailto_url(address: &str, subject: &str, body: &str) -> String {
    format!(
        "mailto:{}?subject={}&body={}",
        address,
        urlencoding::encode(subject),
        urlencoding::encode(body)
    )
}

/// Fire-and-forget: the caller never learns whether the mail was sent.
pub fn send_template(template: MailTemplate, composer: &dyn MailComposer) {
    info!("Opening mail compose for {:?}", template);
    if let Err(e) = composer.compose(&template.url()) {
        warn!("Could not open mail compose for {:?}: {}", template, e);
    }
}

pub fn mail_callback(template: MailTemplate) -> Callback<MouseEvent> {
    Callback::from(move |_: MouseEvent| send_template(template, &BrowserComposer))
}

/// Smooth-scrolls to the element matching `anchor` (e.g. `#market`).
/// Returns false when nothing matches; that case is otherwise a no-op.
pub fn scroll_to_section(anchor: &str) -> bool {
    let Some(document) = web_sys::window().and_then(|w| w.document()) else {
        return false;
    };
    match document.query_selector(anchor) {
        Ok(Some(element)) => {
            let options = ScrollIntoViewOptions::new();
            options.set_behavior(ScrollBehavior::Smooth);
            options.set_block(ScrollLogicalPosition::Start);
            element.scroll_into_view_with_scroll_into_view_options(&options);
            true
        }
        Ok(None) => {
            debug!("No section matches {}", anchor);
            false
        }
        Err(_) => {
            warn!("Invalid section selector {}", anchor);
            false
        }
    }
}

pub fn scroll_to_top() {
    if let Some(window) = web_sys::window() {
        let options = ScrollToOptions::new();
        options.set_top(0.0);
        options.set_behavior(ScrollBehavior::Smooth);
        window.scroll_to_with_scroll_to_options(&options);
    }
}

pub fn show_notice(text: &str) {
    if let Some(window) = web_sys::window() {
        if window.alert_with_message(text).is_err() {
            warn!("Could not show notice");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::cell::RefCell;

    #[derive(Default)]
    struct Recorder {
        urls: RefCell<Vec<String>>,
    }

    impl MailComposer for Recorder {
        fn compose(&self, url: &str) -> Result<(), ComposeError> {
            self.urls.borrow_mut().push(url.to_string());
            Ok(())
        }
    }

    struct Refusing;

    impl MailComposer for Refusing {
        fn compose(&self, _url: &str) -> Result<(), ComposeError> {
            Err(ComposeError::Rejected("popup blocked".into()))
        }
    }

    #[test]
    fn mailto_encodes_subject_and_body() {
        let url = mailto_url("a@b.c", "Hi there", "Line 1\nLine 2");
        assert_eq!(url, "mailto:a@b.c?subject=Hi%20there&body=Line%201%0ALine%202");
    }

    #[test]
    fn mailto_keeps_address_verbatim() {
        let url = mailto_url("ops+deals@cognivus.ca", "", "");
        assert!(url.starts_with("mailto:ops+deals@cognivus.ca?"));
        assert!(url.ends_with("?subject=&body="));
    }

    #[test]
    fn every_template_targets_contact_address() {
        for template in MailTemplate::ALL {
            let url = template.url();
            assert!(url.starts_with(&format!("mailto:{}?subject=", config::CONTACT_EMAIL)));
            assert!(template.subject().ends_with("- Cognivus"));
            assert!(template.body().starts_with("Hello,\n\n"));
            assert!(template.body().ends_with("Best regards,"));
        }
    }

    #[test]
    fn investor_demo_url() {
        insta::assert_snapshot!(
            mailto_url(config::CONTACT_EMAIL, MailTemplate::InvestorDemo.subject(), ""),
            @"mailto:ryanmota@cognivus.ca?subject=Investor%20Demo%20Request%20-%20Cognivus&body="
        );
    }

    #[test]
    fn send_template_issues_one_request() {
        let recorder = Recorder::default();
        send_template(MailTemplate::PitchDeck, &recorder);
        let urls = recorder.urls.borrow();
        assert_eq!(urls.len(), 1);
        assert!(urls[0].contains("Pitch%20Deck%20Request"));
    }

    #[test]
    fn send_template_swallows_failures() {
        send_template(MailTemplate::SalesInquiry, &Refusing);
    }
}
