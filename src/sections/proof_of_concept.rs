use yew::prelude::*;

use crate::actions::{mail_callback, MailTemplate};
use crate::components::cards::{ShareBars, StatGrid};
use crate::content::{Feature, Share, StatCard};
use crate::icons::Icon;
use crate::reveal::{reveal_classes, reveal_delay, use_reveal, Entrance};
use crate::theme::Tone;

pub struct CompoundProperty {
    pub property: &'static str,
    pub range: &'static str,
    pub status: &'static str,
}

pub const RESULTS: &[StatCard] = &[
    StatCard {
        value: "5",
        label: "Lead Compounds",
        description: "Structure-based BACE1 inhibitors",
        icon: Icon::TestTube,
        tone: Tone::Blue,
    },
    StatCard {
        value: "90.8%",
        label: "Model Performance",
        description: "AUC score (vs industry 80%)",
        icon: Icon::Target,
        tone: Tone::Green,
    },
    StatCard {
        value: "0.630",
        label: "R² Score",
        description: "Model correlation coefficient",
        icon: Icon::CheckCircle,
        tone: Tone::Purple,
    },
    StatCard {
        value: "7.01/10",
        label: "Synthesis Score",
        description: "Average feasibility rating",
        icon: Icon::TrendingUp,
        tone: Tone::Orange,
    },
];

pub const LEAD_STATUS: &[Share] = &[
    Share { label: "Ready for Testing", percentage: 60, amount: None, tone: Tone::Green },
    Share { label: "Optimization Needed", percentage: 25, amount: None, tone: Tone::Blue },
    Share { label: "Further Analysis", percentage: 15, amount: None, tone: Tone::Yellow },
];

pub const COMPOUND_PROPERTIES: &[CompoundProperty] = &[
    CompoundProperty { property: "Molecular Weight", range: "150-490 Da", status: "Optimal" },
    CompoundProperty { property: "LogP", range: "1.8-3.9", status: "Drug-like" },
    CompoundProperty { property: "Regulatory Risk", range: "98.9% Low Risk", status: "Excellent" },
    CompoundProperty { property: "Binding Affinity", range: "Ki < 100 nM", status: "Strong" },
];

pub const VALIDATION_SUMMARY: &[(Feature, &str)] = &[
    (
        Feature { icon: Icon::Zap, title: "Speed", description: "Than traditional methods" },
        "500x Faster",
    ),
    (
        Feature { icon: Icon::Shield, title: "Performance", description: "Model performance score" },
        "90.8% AUC",
    ),
    (
        Feature { icon: Icon::CheckCircle, title: "Correlation", description: "Model correlation strength" },
        "0.630 R²",
    ),
];

#[function_component(ProofOfConcept)]
pub fn proof_of_concept() -> Html {
    let (node, revealed) = use_reveal();

    html! {
        <section id="results" class="section" ref={node}>
            <div class="container">
                <div class={classes!("section-header", reveal_classes(Entrance::Up, revealed))}>
                    <div class="pill">{Icon::Award.view()}{"Validated Results"}</div>
                    <h2>{"BACE1 Inhibitor Proof of Concept"}</h2>
                    <p>
                        {"Our platform's proof-of-concept generated 5 promising BACE1 inhibitor leads for Alzheimer's disease, \
                          ready for wet lab validation with strong AI model performance."}
                    </p>
                </div>

                <StatGrid stats={RESULTS} revealed={revealed} />

                <div class="grid grid-2">
                    <div class={classes!("card", reveal_classes(Entrance::FromLeft, revealed))} style={reveal_delay(0.4)}>
                        <div class="card-title">
                            <div class={Tone::Green.tile_class()}>{Icon::BarChart.view()}</div>
                            <h3>{"Lead Compound Status"}</h3>
                        </div>
                        <ShareBars shares={LEAD_STATUS} revealed={revealed} />
                        <div class="card-footnote">
                            <div class="footnote-value text-green">{"5"}</div>
                            <div class="footnote-label">{"Lead compounds generated"}</div>
                        </div>
                    </div>

                    <div class={classes!("card", reveal_classes(Entrance::FromRight, revealed))} style={reveal_delay(0.6)}>
                        <div class="card-title">
                            <div class={Tone::Blue.tile_class()}>{Icon::TestTube.view()}</div>
                            <h3>{"Compound Properties"}</h3>
                        </div>
                        <div class="row-list">
                            { for COMPOUND_PROPERTIES.iter().map(|prop| html! {
                                <div key={prop.property} class="row-item">
                                    <div>
                                        <div class="row-title">{prop.property}</div>
                                        <div class="row-subtitle">{prop.range}</div>
                                    </div>
                                    <div class="row-status">
                                        <span class="text-green">{prop.status}</span>
                                        <span class="dot dot-green"></span>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>

                <div class={classes!("gradient-panel", "summary-panel", reveal_classes(Entrance::Up, revealed))} style={reveal_delay(0.8)}>
                    <div class="summary-head">
                        <h3>{"Platform Validation Summary"}</h3>
                        <p>
                            {"Our BACE1 inhibitor proof-of-concept demonstrates the platform's ability to generate \
                              promising drug candidates ready for experimental validation."}
                        </p>
                    </div>
                    <div class="grid grid-3">
                        { for VALIDATION_SUMMARY.iter().map(|(feature, value)| html! {
                            <div key={feature.title} class="feature-column">
                                <div class={Tone::Blue.tile_class()}>{feature.icon.view()}</div>
                                <div class="summary-value">{*value}</div>
                                <h4>{feature.title}</h4>
                                <p>{feature.description}</p>
                            </div>
                        }) }
                    </div>
                </div>

                <div class={classes!("card", "closing-cta", reveal_classes(Entrance::Up, revealed))} style={reveal_delay(1.0)}>
                    <h3>{"Ready for Wet Lab Validation"}</h3>
                    <p>
                        {"Our AI platform generated promising BACE1 inhibitor leads ready for experimental testing. \
                          The next step is wet lab validation to confirm binding predictions."}
                    </p>
                    <button class="btn btn-primary btn-lg" onclick={mail_callback(MailTemplate::InvestorDemo)}>
                        {"Schedule Investor Demo"}
                    </button>
                </div>
            </div>
            <style>
                {r#"
                #results .section-header .pill {
                    margin-bottom: 1.5rem;
                }
                .summary-panel {
                    margin-top: 4rem;
                }
                .summary-head {
                    text-align: center;
                    margin-bottom: 2rem;
                }
                .summary-head h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin: 0 0 1rem 0;
                }
                .summary-head p {
                    color: #4b5563;
                    max-width: 42rem;
                    margin: 0 auto;
                }
                .summary-value {
                    font-size: 1.25rem;
                    font-weight: 700;
                    color: #111827;
                }
                "#}
            </style>
        </section>
    }
}
