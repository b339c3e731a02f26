use yew::prelude::*;

use crate::actions::{mail_callback, MailTemplate};
use crate::components::cards::section_header;
use crate::content::DetailedFeature;
use crate::icons::Icon;
use crate::reveal::{reveal_classes, reveal_delay, stagger, use_reveal, Entrance};
use crate::theme::Tone;

pub const ADVANTAGES: &[DetailedFeature] = &[
    DetailedFeature {
        icon: Icon::Shield,
        title: "Proprietary Technology",
        description: "Unique synthesis optimization approach provides sustainable competitive advantage",
        details: &[
            "Novel AI-driven synthesis planning",
            "Proprietary retrosynthetic algorithms",
            "Advanced algorithmic framework",
            "Trade secret methodologies",
        ],
        tone: Tone::Blue,
    },
    DetailedFeature {
        icon: Icon::Award,
        title: "First-Mover Advantage",
        description: "Only validated AI platform with proven synthesis optimization",
        details: &[
            "First to market with validated results",
            "Academic partnerships established",
            "PhD-level team expertise",
            "Published research validation",
        ],
        tone: Tone::Green,
    },
    DetailedFeature {
        icon: Icon::Brain,
        title: "Scalable Technology",
        description: "Platform architecture designed for rapid expansion to 500+ targets",
        details: &[
            "Multi-target drug discovery",
            "Disease-agnostic approach",
            "Automated model retraining",
            "Cloud-native infrastructure",
        ],
        tone: Tone::Purple,
    },
];

#[function_component(CompetitiveAdvantages)]
pub fn competitive_advantages() -> Html {
    let (node, revealed) = use_reveal();

    html! {
        <section class="section muted" ref={node}>
            <div class="container">
                { section_header(
                    "Sustainable Competitive Moats",
                    "Multiple layers of defensibility protect our market position and ensure \
                     long-term competitive advantages in the AI drug discovery space.",
                    revealed,
                ) }

                <div class="grid grid-3 advantages">
                    { for ADVANTAGES.iter().enumerate().map(|(index, advantage)| html! {
                        <div
                            key={advantage.title}
                            class={classes!("card", reveal_classes(Entrance::Up, revealed))}
                            style={stagger(0.3, index)}
                        >
                            <div class="advantage-head">
                                <div class={advantage.tone.tile_class()}>{advantage.icon.view()}</div>
                                <div>
                                    <h3>{advantage.title}</h3>
                                    <p>{advantage.description}</p>
                                </div>
                            </div>
                            <ul class="check-list">
                                { for advantage.details.iter().map(|detail| html! { <li key={*detail}>{*detail}</li> }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class={classes!("gradient-panel", "closing-cta", reveal_classes(Entrance::Up, revealed))} style={reveal_delay(1.0)}>
                    <div class="tile tile-blue big-tile">{Icon::Award.view()}</div>
                    <h3>{"The Only AI Platform with Proven Synthesis Optimization"}</h3>
                    <p>
                        {"While other AI drug discovery companies focus on binding prediction, \
                          Cognivus uniquely optimizes for synthesis feasibility - the critical \
                          bottleneck in drug development."}
                    </p>
                    <div class="cta-row">
                        <button class="btn btn-primary" onclick={mail_callback(MailTemplate::InvestorDemo)}>
                            {"Schedule Investor Demo"}
                        </button>
                        <button class="btn btn-secondary" onclick={mail_callback(MailTemplate::PitchDeck)}>
                            {"Download Pitch Deck"}
                        </button>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .advantages {
                    margin-bottom: 4rem;
                }
                .advantage-head {
                    display: flex;
                    align-items: flex-start;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .advantage-head h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin: 0 0 0.5rem 0;
                }
                .advantage-head p {
                    color: #4b5563;
                    margin: 0;
                }
                "#}
            </style>
        </section>
    }
}
