use yew::prelude::*;

use crate::actions::{mail_callback, MailTemplate};
use crate::components::cards::{feature_row, section_header};
use crate::content::Feature;
use crate::icons::Icon;
use crate::reveal::{reveal_classes, reveal_delay, use_reveal, Entrance};
use crate::theme::Tone;

pub const PROBLEMS: &[Feature] = &[
    Feature {
        icon: Icon::Clock,
        title: "Slow Time-to-Market",
        description: "3-5 years for lead identification vs weeks with AI",
    },
    Feature {
        icon: Icon::DollarSign,
        title: "Capital Inefficiency",
        description: "$2.6B average drug development cost",
    },
    Feature {
        icon: Icon::XMark,
        title: "High Failure Rates",
        description: "80% of compounds fail synthesis feasibility",
    },
];

pub const SOLUTIONS: &[Feature] = &[
    Feature {
        icon: Icon::Zap,
        title: "Rapid Market Entry",
        description: "6 weeks vs 3-5 years for lead compounds",
    },
    Feature {
        icon: Icon::DollarSign,
        title: "Capital Efficiency",
        description: "500x cost reduction in discovery phase",
    },
    Feature {
        icon: Icon::CheckCircle,
        title: "Higher Success Rates",
        description: "AI-optimized lead generation vs manual methods",
    },
];

fn column(title: &str, icon: Icon, tone: Tone, items: &[Feature], revealed: bool, base_delay: f64) -> Html {
    html! {
        <div class={format!("contrast-panel panel-{}", tone.name())}>
            <div class="contrast-head">
                <div class={tone.tile_class()}>{icon.view()}</div>
                <h3>{title}</h3>
            </div>
            <div class="contrast-items">
                { for items.iter().enumerate().map(|(index, item)| {
                    feature_row(item, tone.tile_class(), revealed, base_delay + index as f64 * 0.1)
                }) }
            </div>
        </div>
    }
}

#[function_component(ProblemSolution)]
pub fn problem_solution() -> Html {
    let (node, revealed) = use_reveal();

    html! {
        <section id="problem-solution" class="section" ref={node}>
            <div class="container">
                { section_header(
                    "Market Opportunity & Solution",
                    "The $8.2B AI drug discovery market is driven by critical inefficiencies in traditional \
                     pharmaceutical R&D. Our platform directly addresses these multi-billion dollar pain points.",
                    revealed,
                ) }

                <div class="grid grid-2">
                    <div class={reveal_classes(Entrance::FromLeft, revealed)} style={reveal_delay(0.2)}>
                        { column("Market Pain Points", Icon::XMark, Tone::Red, PROBLEMS, revealed, 0.3) }
                    </div>
                    <div class={reveal_classes(Entrance::FromRight, revealed)} style={reveal_delay(0.4)}>
                        { column("Cognivus Advantage", Icon::CheckCircle, Tone::Green, SOLUTIONS, revealed, 0.5) }
                    </div>
                </div>

                <div class={classes!("gradient-panel", "closing-cta", reveal_classes(Entrance::Up, revealed))} style={reveal_delay(0.8)}>
                    <h3>{"Ready to Transform Drug Discovery?"}</h3>
                    <p>
                        {"Join us in revolutionizing how new drugs are discovered. Our validated platform \
                          is ready to scale to any disease target."}
                    </p>
                    <button class="btn btn-primary btn-lg" onclick={mail_callback(MailTemplate::TechnicalOverview)}>
                        {"See Our Technology in Action"}
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .contrast-panel {
                    border-radius: 1rem;
                    padding: 2rem;
                    height: 100%;
                }
                .panel-red {
                    background: #fef2f2;
                    border: 1px solid #fee2e2;
                }
                .panel-green {
                    background: #ecfdf5;
                    border: 1px solid #d1fae5;
                }
                .contrast-head {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    margin-bottom: 2rem;
                }
                .contrast-head h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin: 0;
                }
                .contrast-items {
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                "#}
            </style>
        </section>
    }
}
