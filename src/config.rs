use log::Level;

pub const COMPANY: &str = "Cognivus";
pub const CONTACT_EMAIL: &str = "ryanmota@cognivus.ca";
pub const LOCATION: &str = "Niagara Falls, ON";
pub const DOCUMENT_TITLE: &str = "Cognivus | AI-First Drug Discovery";
pub const LOGO_SRC: &str = "/assets/cognivus.png";

pub const LINKEDIN_URL: &str = "https://linkedin.com/company/biologic-ai";
pub const TWITTER_URL: &str = "https://twitter.com/biologic_ai";
pub const GITHUB_URL: &str = "https://github.com/biologic-ai";

/// Fraction of a section that must be visible before its entrance plays.
pub const REVEAL_THRESHOLD: f64 = 0.1;

/// Scroll offset in pixels after which the navigation bar turns opaque.
pub const NAV_SCROLL_THRESHOLD: f64 = 50.0;

#[cfg(debug_assertions)]
pub fn log_level() -> Level {
    Level::Debug // Verbose console output when running locally
}

#[cfg(not(debug_assertions))]
pub fn log_level() -> Level {
    Level::Info
}
