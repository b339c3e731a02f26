use chrono::Datelike;
use yew::prelude::*;

use crate::actions::{scroll_to_section, scroll_to_top, show_notice};
use crate::components::logo::{Logo, LogoSize};
use crate::config;
use crate::content::NavLink;
use crate::icons::Icon;

/// `#technology` has no section of its own; following it does nothing.
pub const QUICK_LINKS: &[NavLink] = &[
    NavLink { label: "Technology", anchor: "#technology" },
    NavLink { label: "Results", anchor: "#results" },
    NavLink { label: "Market", anchor: "#market" },
    NavLink { label: "Team", anchor: "#team" },
    NavLink { label: "Investment", anchor: "#investment" },
];

pub struct Disclaimer {
    pub title: &'static str,
    pub body: &'static str,
}

pub const DISCLAIMERS: &[Disclaimer] = &[
    Disclaimer {
        title: "Investment Disclaimer",
        body: "This presentation is for informational purposes only and does not constitute an offer to sell \
               or a solicitation of an offer to buy any securities. Past performance does not guarantee future results.",
    },
    Disclaimer {
        title: "Drug Development Risks",
        body: "Drug development involves substantial risks and uncertainties. Success in preclinical studies \
               does not guarantee clinical success. Regulatory approval is not assured.",
    },
    Disclaimer {
        title: "Forward-Looking Statements",
        body: "This presentation contains forward-looking statements that involve risks and uncertainties. \
               Actual results may differ materially from those projected in forward-looking statements.",
    },
];

struct SocialLink {
    label: &'static str,
    href: &'static str,
    icon: Icon,
}

const SOCIAL_LINKS: &[SocialLink] = &[
    SocialLink { label: "LinkedIn", href: config::LINKEDIN_URL, icon: Icon::Linkedin },
    SocialLink { label: "Twitter", href: config::TWITTER_URL, icon: Icon::Twitter },
    SocialLink { label: "GitHub", href: config::GITHUB_URL, icon: Icon::Github },
];

pub fn copyright(year: i32) -> String {
    format!("© {} {}. All rights reserved.", year, config::COMPANY)
}

pub fn privacy_notice() -> String {
    format!("Privacy Policy - Please contact {} for our privacy policy.", config::CONTACT_EMAIL)
}

pub fn terms_notice() -> String {
    format!("Terms of Service - Please contact {} for our terms of service.", config::CONTACT_EMAIL)
}

#[function_component(Footer)]
pub fn footer() -> Html {
    let year = chrono::Utc::now().year();

    let on_privacy = Callback::from(|_: MouseEvent| show_notice(&privacy_notice()));
    let on_terms = Callback::from(|_: MouseEvent| show_notice(&terms_notice()));
    let on_top = Callback::from(|_: MouseEvent| scroll_to_top());

    html! {
        <footer class="site-footer">
            <div class="container footer-inner">
                <div class="footer-grid">
                    <div class="footer-company">
                        <Logo size={LogoSize::Large} />
                        <p class="footer-tagline">{"AI-First Drug Discovery Platform"}</p>
                        <p class="footer-blurb">
                            {"Revolutionizing drug discovery with AI. 90.8% AUC model performance, generating \
                              synthesis-optimized compounds for breakthrough treatments."}
                        </p>
                        <div class="footer-social">
                            { for SOCIAL_LINKS.iter().map(|link| html! {
                                <a
                                    key={link.label}
                                    href={link.href}
                                    target="_blank"
                                    rel="noopener noreferrer"
                                    aria-label={link.label}
                                >
                                    {link.icon.view()}
                                </a>
                            }) }
                        </div>
                    </div>

                    <div>
                        <h4>{"Quick Links"}</h4>
                        <ul class="footer-links">
                            { for QUICK_LINKS.iter().map(|link| {
                                let anchor = link.anchor;
                                html! {
                                    <li key={link.label}>
                                        <button onclick={Callback::from(move |_: MouseEvent| { scroll_to_section(anchor); })}>
                                            {link.label}
                                        </button>
                                    </li>
                                }
                            }) }
                        </ul>
                    </div>

                    <div>
                        <h4>{"Contact"}</h4>
                        <div class="footer-contact">
                            <div class="footer-contact-row">
                                <span class="footer-contact-icon contact-blue">{Icon::Mail.view()}</span>
                                <div>
                                    <div class="footer-contact-label">{"Email"}</div>
                                    <div>{config::CONTACT_EMAIL}</div>
                                </div>
                            </div>
                            <div class="footer-contact-row">
                                <span class="footer-contact-icon contact-purple">{Icon::MapPin.view()}</span>
                                <div>
                                    <div class="footer-contact-label">{"Location"}</div>
                                    <div>{config::LOCATION}</div>
                                </div>
                            </div>
                        </div>
                    </div>
                </div>

                <div class="footer-disclaimers">
                    { for DISCLAIMERS.iter().map(|disclaimer| html! {
                        <div key={disclaimer.title}>
                            <h5>{disclaimer.title}</h5>
                            <p>{disclaimer.body}</p>
                        </div>
                    }) }
                </div>

                <div class="footer-bottom">
                    <div class="footer-copyright">{copyright(year)}</div>
                    <div class="footer-legal">
                        <button onclick={on_privacy}>{"Privacy Policy"}</button>
                        <button onclick={on_terms}>{"Terms of Service"}</button>
                        <button class="scroll-top" onclick={on_top} title="Scroll to top">
                            {Icon::ArrowUp.view()}
                        </button>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .site-footer {
                    background: #f3f4f6;
                    color: #111827;
                }
                .footer-inner {
                    padding-top: 4rem;
                    padding-bottom: 4rem;
                }
                .footer-grid {
                    display: grid;
                    grid-template-columns: 2fr 1fr 1fr;
                    gap: 2rem;
                }
                .footer-grid h4 {
                    font-size: 1.125rem;
                    font-weight: 600;
                    margin: 0 0 1.5rem 0;
                }
                .footer-tagline {
                    font-size: 0.875rem;
                    color: #4b5563;
                    margin: 1rem 0 1.5rem 0;
                }
                .footer-blurb {
                    color: #374151;
                    max-width: 28rem;
                    margin: 0 0 1.5rem 0;
                }
                .footer-social {
                    display: flex;
                    gap: 1rem;
                }
                .footer-social a {
                    width: 2.5rem;
                    height: 2.5rem;
                    border-radius: 0.5rem;
                    background: #e5e7eb;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: inherit;
                    text-decoration: none;
                    transition: background 0.2s ease, color 0.2s ease;
                }
                .footer-social a:hover {
                    background: #2563eb;
                    color: #ffffff;
                }
                .footer-links {
                    list-style: none;
                    margin: 0;
                    padding: 0;
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .footer-links button, .footer-legal button {
                    background: none;
                    border: none;
                    padding: 0;
                    font: inherit;
                    color: #374151;
                    cursor: pointer;
                    text-align: left;
                    transition: color 0.2s ease;
                }
                .footer-links button:hover {
                    color: #2563eb;
                }
                .footer-contact {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .footer-contact-row {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #374151;
                }
                .footer-contact-icon {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 0.5rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    color: #ffffff;
                }
                .contact-blue { background: #2563eb; }
                .contact-purple { background: #7c3aed; }
                .footer-contact-label {
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                .footer-disclaimers {
                    margin-top: 3rem;
                    padding-top: 2rem;
                    border-top: 1px solid #1f2937;
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 2rem;
                }
                .footer-disclaimers h5 {
                    font-weight: 600;
                    margin: 0 0 0.75rem 0;
                }
                .footer-disclaimers p, .footer-copyright {
                    font-size: 0.875rem;
                    color: #9ca3af;
                    margin: 0;
                }
                .footer-bottom {
                    margin-top: 2rem;
                    padding-top: 2rem;
                    border-top: 1px solid #1f2937;
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .footer-legal {
                    display: flex;
                    align-items: center;
                    gap: 1.5rem;
                }
                .footer-legal button {
                    font-size: 0.875rem;
                    color: #9ca3af;
                }
                .footer-legal button:hover {
                    color: #4b5563;
                }
                .footer-legal .scroll-top {
                    width: 3rem;
                    height: 3rem;
                    border-radius: 0.75rem;
                    background: linear-gradient(90deg, #2563eb, #9333ea);
                    color: #ffffff;
                    font-size: 1.25rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    box-shadow: 0 10px 15px rgba(15, 23, 42, 0.15);
                    transition: transform 0.2s ease;
                }
                .footer-legal .scroll-top:hover {
                    color: #ffffff;
                    transform: translateY(-2px) scale(1.1);
                }
                @media (max-width: 1024px) {
                    .footer-grid, .footer-disclaimers {
                        grid-template-columns: 1fr;
                    }
                }
                @media (max-width: 768px) {
                    .footer-bottom {
                        flex-direction: column;
                    }
                }
                "#}
            </style>
        </footer>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn copyright_line() {
        insta::assert_snapshot!(copyright(2025), @"© 2025 Cognivus. All rights reserved.");
    }

    #[test]
    fn notices_point_at_contact_address() {
        assert_eq!(
            privacy_notice(),
            "Privacy Policy - Please contact ryanmota@cognivus.ca for our privacy policy."
        );
        assert_eq!(
            terms_notice(),
            "Terms of Service - Please contact ryanmota@cognivus.ca for our terms of service."
        );
    }

    #[test]
    fn quick_links_keep_dead_technology_anchor() {
        assert_eq!(QUICK_LINKS[0].anchor, "#technology");
        assert_eq!(QUICK_LINKS.len(), 5);
    }
}
