use yew::prelude::*;

use crate::actions::{mail_callback, MailTemplate};
use crate::icons::Icon;
use crate::reveal::{reveal_classes, reveal_delay, use_reveal, Entrance};

pub struct KeyMetric {
    pub value: &'static str,
    pub label: &'static str,
    pub icon: Icon,
}

pub struct PipelineStep {
    pub step: &'static str,
    pub title: &'static str,
    pub desc: &'static str,
}

pub const KEY_METRICS: &[KeyMetric] = &[
    KeyMetric { value: "$8.2B", label: "Market Size", icon: Icon::Zap },
    KeyMetric { value: "18.2%", label: "Market CAGR", icon: Icon::Target },
    KeyMetric { value: "90.8%", label: "AI Accuracy", icon: Icon::TrendingUp },
];

pub const PIPELINE: &[PipelineStep] = &[
    PipelineStep { step: "1", title: "Target Analysis", desc: "BACE1 Protein" },
    PipelineStep { step: "2", title: "AI Generation", desc: "5 Lead Compounds" },
    PipelineStep { step: "3", title: "AI Model", desc: "90.8% AUC Score" },
    PipelineStep { step: "4", title: "Ready for", desc: "Wet Lab Testing" },
];

#[function_component(Hero)]
pub fn hero() -> Html {
    // In view at load, so this plays right after mount.
    let (node, revealed) = use_reveal();

    html! {
        <section class="hero" ref={node}>
            <div class="container hero-grid">
                <div class={classes!("hero-copy", reveal_classes(Entrance::FromLeft, revealed))}>
                    <div class={classes!("pill", reveal_classes(Entrance::Up, revealed))} style={reveal_delay(0.2)}>
                        <span class="dot dot-green"></span>
                        {"AI-Generated BACE1 Leads for Alzheimer's"}
                    </div>

                    <h1 class={reveal_classes(Entrance::Up, revealed)} style={reveal_delay(0.3)}>
                        <span class="gradient-text">{"500x Faster"}</span>
                        <br />
                        {"Drug Discovery"}
                        <br />
                        {"with AI"}
                    </h1>

                    <p class={classes!("hero-subtitle", reveal_classes(Entrance::Up, revealed))} style={reveal_delay(0.4)}>
                        {"Revolutionary AI platform targeting the $8.2B drug discovery market growing at 18.2% CAGR. \
                          Validated technology with 90.8% AUC accuracy and optimized synthesis \
                          optimization provides first-mover advantage in rapidly expanding market."}
                    </p>

                    <div class={classes!("hero-metrics", reveal_classes(Entrance::Up, revealed))} style={reveal_delay(0.5)}>
                        { for KEY_METRICS.iter().map(|metric| html! {
                            <div key={metric.label} class="hero-metric">
                                <div class="tile tile-blue">{metric.icon.view()}</div>
                                <div class="hero-metric-value">{metric.value}</div>
                                <div class="hero-metric-label">{metric.label}</div>
                            </div>
                        }) }
                    </div>

                    <div class={classes!("hero-ctas", reveal_classes(Entrance::Up, revealed))} style={reveal_delay(0.6)}>
                        <button class="btn btn-primary btn-lg" onclick={mail_callback(MailTemplate::InvestorDemo)}>
                            {"Schedule Investor Demo"}
                            {Icon::ArrowRight.view()}
                        </button>
                        <button class="btn btn-secondary btn-lg" onclick={mail_callback(MailTemplate::PitchDeck)}>
                            {"Download Pitch Deck"}
                            {Icon::ArrowRight.view()}
                        </button>
                    </div>

                    <div class={classes!("hero-trust", reveal_classes(Entrance::Up, revealed))} style={reveal_delay(0.7)}>
                        <span><span class="dot dot-green"></span>{"5 BACE1 Lead Compounds Generated"}</span>
                        <span><span class="dot dot-blue"></span>{"IP Portfolio Protected"}</span>
                    </div>
                </div>

                <div class={classes!("hero-visual", reveal_classes(Entrance::FromRight, revealed))} style={reveal_delay(0.4)}>
                    <div class="hero-visual-back tilt-right"></div>
                    <div class="hero-visual-back tilt-left"></div>
                    <div class="hero-card">
                        <div class="hero-card-head">
                            <h3>{"Validated Technology Platform"}</h3>
                            <p>{"BACE1 Inhibitor Proof-of-Concept Results"}</p>
                        </div>
                        <div class="pipeline">
                            { for PIPELINE.iter().map(|item| html! {
                                <div key={item.step} class="pipeline-step">
                                    <div class="pipeline-number">{item.step}</div>
                                    <div>
                                        <div class="pipeline-title">{item.title}</div>
                                        <div class="pipeline-desc">{item.desc}</div>
                                    </div>
                                </div>
                            }) }
                        </div>
                        <div class="hero-summary">
                            <div>
                                <div class="hero-summary-value text-blue">{"5"}</div>
                                <div class="hero-summary-label">{"Lead Compounds"}</div>
                            </div>
                            <div>
                                <div class="hero-summary-value text-green">{"90.8%"}</div>
                                <div class="hero-summary-label">{"AUC Score"}</div>
                            </div>
                        </div>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .hero {
                    padding: 6rem 0 4rem 0;
                    background: linear-gradient(135deg, #eff6ff, #ffffff, #ecfdf5);
                }
                .hero-grid {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 3rem;
                    align-items: center;
                }
                .hero-copy {
                    display: flex;
                    flex-direction: column;
                    gap: 2rem;
                    align-items: flex-start;
                }
                .hero h1 {
                    font-size: 3.75rem;
                    font-weight: 800;
                    line-height: 1.1;
                    color: #111827;
                    margin: 0;
                }
                .gradient-text {
                    background: linear-gradient(90deg, #2563eb, #059669);
                    -webkit-background-clip: text;
                    -webkit-text-fill-color: transparent;
                }
                .hero-subtitle {
                    font-size: 1.25rem;
                    color: #4b5563;
                    line-height: 1.6;
                    margin: 0;
                }
                .hero-metrics {
                    display: grid;
                    grid-template-columns: repeat(3, minmax(0, 1fr));
                    gap: 1.5rem;
                    width: 100%;
                }
                .hero-metric {
                    text-align: center;
                }
                .hero-metric .tile {
                    margin-bottom: 0.75rem;
                }
                .hero-metric-value {
                    font-size: 1.5rem;
                    font-weight: 700;
                    color: #111827;
                }
                .hero-metric-label, .hero-summary-label, .pipeline-desc {
                    font-size: 0.875rem;
                    color: #4b5563;
                }
                .hero-ctas {
                    display: flex;
                    flex-wrap: wrap;
                    gap: 1rem;
                }
                .hero-trust {
                    display: flex;
                    gap: 1.5rem;
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                .hero-trust > span {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                }
                .hero-visual {
                    position: relative;
                }
                .hero-visual-back {
                    position: absolute;
                    inset: 0;
                    border-radius: 1.5rem;
                }
                .tilt-right {
                    background: linear-gradient(135deg, #dbeafe, #d1fae5);
                    transform: rotate(3deg);
                }
                .tilt-left {
                    background: linear-gradient(135deg, #bfdbfe, #a7f3d0);
                    transform: rotate(-2deg);
                }
                .hero-card {
                    position: relative;
                    background: #ffffff;
                    border-radius: 1.5rem;
                    padding: 2rem;
                    box-shadow: 0 25px 50px rgba(15, 23, 42, 0.25);
                    border: 1px solid #f3f4f6;
                    display: flex;
                    flex-direction: column;
                    gap: 1.5rem;
                }
                .hero-card-head {
                    text-align: center;
                }
                .hero-card-head h3 {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin: 0 0 0.5rem 0;
                }
                .hero-card-head p {
                    color: #4b5563;
                    margin: 0;
                }
                .pipeline {
                    display: flex;
                    flex-direction: column;
                    gap: 1rem;
                }
                .pipeline-step {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    padding: 1rem;
                    background: #f9fafb;
                    border-radius: 0.75rem;
                }
                .pipeline-number {
                    width: 2rem;
                    height: 2rem;
                    border-radius: 9999px;
                    background: #2563eb;
                    color: #ffffff;
                    font-weight: 700;
                    font-size: 0.875rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .pipeline-title {
                    font-weight: 600;
                    color: #111827;
                }
                .hero-summary {
                    display: grid;
                    grid-template-columns: repeat(2, minmax(0, 1fr));
                    gap: 1rem;
                    text-align: center;
                    background: linear-gradient(90deg, #eff6ff, #ecfdf5);
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                }
                .hero-summary-value {
                    font-size: 1.5rem;
                    font-weight: 700;
                }
                @media (max-width: 1024px) {
                    .hero-grid {
                        grid-template-columns: 1fr;
                    }
                    .hero h1 {
                        font-size: 3rem;
                    }
                }
                "#}
            </style>
        </section>
    }
}
