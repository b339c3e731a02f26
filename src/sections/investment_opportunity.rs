use log::debug;
use web_sys::{HtmlFormElement, HtmlInputElement, HtmlTextAreaElement};
use yew::prelude::*;

use crate::actions::BrowserComposer;
use crate::components::cards::{section_header, ShareBars};
use crate::config;
use crate::contact::{ContactField, ContactForm, SubmitStatus};
use crate::content::{Feature, Share};
use crate::icons::Icon;
use crate::reveal::{reveal_classes, reveal_delay, use_reveal, Entrance};
use crate::theme::Tone;

pub const INVESTMENT_HIGHLIGHTS: &[(Feature, &str)] = &[
    (
        Feature {
            icon: Icon::Target,
            title: "Validated Technology",
            description: "90.8% AUC performance with BACE1 leads",
        },
        "Proven",
    ),
    (
        Feature {
            icon: Icon::Zap,
            title: "500x Faster",
            description: "Than traditional drug discovery",
        },
        "Revolutionary",
    ),
    (
        Feature {
            icon: Icon::DollarSign,
            title: "$8.2B Market",
            description: "AI drug discovery market by 2030",
        },
        "Massive",
    ),
    (
        Feature {
            icon: Icon::Brain,
            title: "Advanced Tech",
            description: "Unique synthesis optimization approach",
        },
        "Advanced",
    ),
];

pub struct FundingDetail {
    pub title: &'static str,
    pub subtitle: &'static str,
    pub value: &'static str,
    pub unit: &'static str,
    pub tone: Tone,
}

pub const FUNDING_DETAILS: &[FundingDetail] = &[
    FundingDetail {
        title: "Seed Round",
        subtitle: "Series A preparation",
        value: "$4.25M",
        unit: "Target",
        tone: Tone::Blue,
    },
    FundingDetail {
        title: "Timeline",
        subtitle: "Wet lab validation",
        value: "6-12",
        unit: "Months",
        tone: Tone::Green,
    },
    FundingDetail {
        title: "Next Milestone",
        subtitle: "Series A raise",
        value: "$10.6M",
        unit: "Target",
        tone: Tone::Purple,
    },
];

pub const USE_OF_FUNDS: &[Share] = &[
    Share { label: "Wet Lab Validation", percentage: 40, amount: Some("$1.7M"), tone: Tone::Blue },
    Share { label: "Team Expansion", percentage: 30, amount: Some("$1.3M"), tone: Tone::Blue },
    Share { label: "Platform Development", percentage: 20, amount: Some("$0.85M"), tone: Tone::Blue },
    Share { label: "Legal & Compliance", percentage: 10, amount: Some("$0.4M"), tone: Tone::Blue },
];

pub const INVESTMENT_THESIS: &[Feature] = &[
    Feature {
        icon: Icon::Award,
        title: "Proven Technology",
        description: "90.8% AUC performance validated with BACE1 leads",
    },
    Feature {
        icon: Icon::TrendingUp,
        title: "Massive Market",
        description: "$8.2B AI drug discovery market growing at 18.2% CAGR",
    },
    Feature {
        icon: Icon::Target,
        title: "First Mover Advantage",
        description: "Only AI platform with proven synthesis optimization",
    },
];

pub const DEMO_EXPECTATIONS: &[&str] = &[
    "30-minute platform demonstration",
    "Detailed technical overview",
    "Investment opportunity discussion",
    "Q&A session",
];

fn update_field(form: &UseStateHandle<ContactForm>, field: ContactField, value: String) {
    let mut next = (**form).clone();
    next.set(field, value);
    form.set(next);
}

fn input_handler(form: &UseStateHandle<ContactForm>, field: ContactField) -> Callback<InputEvent> {
    let form = form.clone();
    Callback::from(move |e: InputEvent| {
        let input: HtmlInputElement = e.target_unchecked_into();
        update_field(&form, field, input.value());
    })
}

#[function_component(DemoRequestForm)]
pub fn demo_request_form() -> Html {
    let form = use_state(ContactForm::default);
    let status = use_state(|| None::<SubmitStatus>);
    let form_ref = use_node_ref();

    let onsubmit = {
        let form = form.clone();
        let status = status.clone();
        let form_ref = form_ref.clone();
        Callback::from(move |e: SubmitEvent| {
            e.prevent_default();
            let mut next = (*form).clone();
            match next.submit(&BrowserComposer) {
                Ok(outcome) => {
                    status.set(Some(outcome));
                    form.set(next);
                }
                Err(field) => {
                    debug!("Demo request is missing {:?}", field);
                    if let Some(element) = form_ref.cast::<HtmlFormElement>() {
                        element.report_validity();
                    }
                }
            }
        })
    };

    let on_message = {
        let form = form.clone();
        Callback::from(move |e: InputEvent| {
            let area: HtmlTextAreaElement = e.target_unchecked_into();
            update_field(&form, ContactField::Message, area.value());
        })
    };

    html! {
        <form class="demo-form" ref={form_ref} onsubmit={onsubmit}>
            <div class="form-pair">
                <div>
                    <label for="demo-name">{"Name *"}</label>
                    <input
                        id="demo-name"
                        type="text"
                        name="name"
                        required=true
                        placeholder="Your name"
                        value={form.name.clone()}
                        oninput={input_handler(&form, ContactField::Name)}
                    />
                </div>
                <div>
                    <label for="demo-email">{"Email *"}</label>
                    <input
                        id="demo-email"
                        type="email"
                        name="email"
                        required=true
                        placeholder="your@email.com"
                        value={form.email.clone()}
                        oninput={input_handler(&form, ContactField::Email)}
                    />
                </div>
            </div>
            <div class="form-pair">
                <div>
                    <label for="demo-company">{"Company"}</label>
                    <input
                        id="demo-company"
                        type="text"
                        name="company"
                        placeholder="Your company"
                        value={form.company.clone()}
                        oninput={input_handler(&form, ContactField::Company)}
                    />
                </div>
                <div>
                    <label for="demo-role">{"Role"}</label>
                    <input
                        id="demo-role"
                        type="text"
                        name="role"
                        placeholder="Your role"
                        value={form.role.clone()}
                        oninput={input_handler(&form, ContactField::Role)}
                    />
                </div>
            </div>
            <div>
                <label for="demo-message">{"Message"}</label>
                <textarea
                    id="demo-message"
                    name="message"
                    rows="4"
                    placeholder="Tell us about your investment interests..."
                    value={form.message.clone()}
                    oninput={on_message}
                />
            </div>

            {
                if let Some(outcome) = *status {
                    let tone = if outcome.is_success() { "form-status success" } else { "form-status failure" };
                    html! { <div class={tone}>{outcome.message()}</div> }
                } else {
                    html! {}
                }
            }

            <button type="submit" class="btn btn-primary btn-lg btn-block">
                {"Schedule Demo"}
                {Icon::ArrowRight.view()}
            </button>
        </form>
    }
}

#[function_component(InvestmentOpportunity)]
pub fn investment_opportunity() -> Html {
    let (node, revealed) = use_reveal();

    html! {
        <section id="investment" class="section" ref={node}>
            <div class="container">
                { section_header(
                    "Investment Opportunity",
                    "Join us in revolutionizing drug discovery. Cognivus is seeking seed funding to \
                     validate our AI predictions through wet lab testing and scale our platform.",
                    revealed,
                ) }

                <div class="grid grid-2 investment-top">
                    <div class={classes!("investment-stack", reveal_classes(Entrance::FromLeft, revealed))} style={reveal_delay(0.2)}>
                        <div class="gradient-panel">
                            <h3 class="block-title">{"Investment Highlights"}</h3>
                            <div class="highlight-list">
                                { for INVESTMENT_HIGHLIGHTS.iter().map(|(highlight, badge)| html! {
                                    <div key={highlight.title} class="feature-row">
                                        <div class={Tone::Blue.tile_class()}>{highlight.icon.view()}</div>
                                        <div class="highlight-body">
                                            <div class="highlight-head">
                                                <h4>{highlight.title}</h4>
                                                <span class="highlight-badge">{*badge}</span>
                                            </div>
                                            <p>{highlight.description}</p>
                                        </div>
                                    </div>
                                }) }
                            </div>
                        </div>

                        <div class="card">
                            <h3 class="block-title">{"Funding Details"}</h3>
                            <div class="row-list">
                                { for FUNDING_DETAILS.iter().map(|detail| html! {
                                    <div key={detail.title} class="row-item">
                                        <div>
                                            <div class="row-title">{detail.title}</div>
                                            <div class="row-subtitle">{detail.subtitle}</div>
                                        </div>
                                        <div class="funding-figure">
                                            <div class={classes!("funding-value", detail.tone.text_class())}>{detail.value}</div>
                                            <div class="row-subtitle">{detail.unit}</div>
                                        </div>
                                    </div>
                                }) }
                            </div>
                        </div>
                    </div>

                    <div class={classes!("card", reveal_classes(Entrance::FromRight, revealed))} style={reveal_delay(0.4)}>
                        <h3 class="block-title">{"Use of Funds"}</h3>
                        <ShareBars shares={USE_OF_FUNDS} revealed={revealed} />
                        <div class="card-footnote">
                            <div class="footnote-value text-green">{"$4.25M Total"}</div>
                            <div class="footnote-label">{"Seed funding target"}</div>
                        </div>
                    </div>
                </div>

                <div class={classes!("gradient-banner", "thesis", reveal_classes(Entrance::Up, revealed))} style={reveal_delay(0.6)}>
                    <h3 class="panel-title">{"Investment Thesis"}</h3>
                    <div class="grid grid-3">
                        { for INVESTMENT_THESIS.iter().map(|thesis| html! {
                            <div key={thesis.title} class="feature-column">
                                <div class="thesis-tile">{thesis.icon.view()}</div>
                                <h4>{thesis.title}</h4>
                                <p>{thesis.description}</p>
                            </div>
                        }) }
                    </div>
                </div>

                <div class={classes!("card", reveal_classes(Entrance::Up, revealed))} style={reveal_delay(0.8)}>
                    <h3 class="panel-title">{"Schedule Investor Demo"}</h3>
                    <div class="grid grid-2">
                        <div>
                            <h4 class="contact-title">{"Get in Touch"}</h4>
                            <div class="feature-row">
                                <div class={Tone::Blue.tile_class()}>{Icon::Mail.view()}</div>
                                <div>
                                    <div class="row-title">{"Email"}</div>
                                    <div class="row-subtitle">{config::CONTACT_EMAIL}</div>
                                </div>
                            </div>
                            <div class="expectations">
                                <h5>{"What to Expect"}</h5>
                                <ul class="check-list">
                                    { for DEMO_EXPECTATIONS.iter().map(|item| html! { <li key={*item}>{*item}</li> }) }
                                </ul>
                            </div>
                        </div>
                        <DemoRequestForm />
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .investment-top {
                    margin-bottom: 4rem;
                }
                .investment-stack {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .block-title {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin: 0 0 1.5rem 0;
                }
                .highlight-list {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .highlight-body {
                    flex: 1;
                }
                .highlight-head {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                }
                .highlight-badge {
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #059669;
                    background: #d1fae5;
                    padding: 0.25rem 0.5rem;
                    border-radius: 9999px;
                }
                .funding-figure {
                    text-align: right;
                }
                .funding-value {
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                .thesis {
                    margin-bottom: 4rem;
                }
                .thesis .feature-column p {
                    color: #dbeafe;
                }
                .thesis .feature-column h4 {
                    color: #ffffff;
                }
                .thesis-tile {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 1rem;
                    background: rgba(255, 255, 255, 0.2);
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                }
                .contact-title {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin: 0 0 1.5rem 0;
                }
                .expectations {
                    margin-top: 2rem;
                    padding: 1rem;
                    background: #eff6ff;
                    border-radius: 0.75rem;
                }
                .expectations h5 {
                    font-size: 1rem;
                    font-weight: 600;
                    margin: 0 0 0.75rem 0;
                }
                .demo-form {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .form-pair {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 1rem;
                }
                .demo-form label {
                    display: block;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #374151;
                    margin-bottom: 0.5rem;
                }
                .demo-form input, .demo-form textarea {
                    width: 100%;
                    padding: 0.75rem 1rem;
                    border: 1px solid #d1d5db;
                    border-radius: 0.5rem;
                    font: inherit;
                }
                .demo-form input:focus, .demo-form textarea:focus {
                    outline: none;
                    border-color: transparent;
                    box-shadow: 0 0 0 2px #3b82f6;
                }
                .form-status {
                    padding: 1rem;
                    border-radius: 0.5rem;
                }
                .form-status.success {
                    background: #dcfce7;
                    color: #15803d;
                }
                .form-status.failure {
                    background: #fee2e2;
                    color: #b91c1c;
                }
                @media (max-width: 768px) {
                    .form-pair {
                        grid-template-columns: 1fr;
                    }
                }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn use_of_funds_matches_copy() {
        let percentages: Vec<u8> = USE_OF_FUNDS.iter().map(|s| s.percentage).collect();
        assert_eq!(percentages, [40, 30, 20, 10]);
        let amounts: Vec<&str> = USE_OF_FUNDS.iter().filter_map(|s| s.amount).collect();
        assert_eq!(amounts, ["$1.7M", "$1.3M", "$0.85M", "$0.4M"]);
    }

    #[test]
    fn seed_target_is_first_funding_detail() {
        assert_eq!(FUNDING_DETAILS[0].value, "$4.25M");
        assert_eq!(FUNDING_DETAILS[2].value, "$10.6M");
    }
}
