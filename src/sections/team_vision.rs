use yew::prelude::*;

use crate::actions::{mail_callback, MailTemplate};
use crate::components::cards::section_header;
use crate::content::DetailedFeature;
use crate::icons::Icon;
use crate::reveal::{reveal_classes, reveal_delay, stagger, use_reveal, Entrance};
use crate::theme::Tone;

pub const FOUNDER_NAME: &str = "Ryan";
pub const FOUNDER_TITLE: &str = "Founder & CEO";
pub const FOUNDER_BIO: &str = "Software Engineering graduate from triOS College with expertise in full-stack \
    development, mobile applications, and AI/ML systems. Self-taught in artificial intelligence and machine \
    learning with a passionate focus on applying technology to solve complex problems in drug discovery and \
    healthcare innovation.";

pub const FOUNDER_EXPERTISE: &[&str] = &[
    "Software Engineering, triOS College Business Technology Healthcare",
    "Self-Taught AI/ML Specialist with High Interest in Drug Discovery",
    "Patent-Pending AI Technology for Synthesis Optimization",
    "90.8% AUC Performance with BACE1 Leads",
];

pub const VISION_STATEMENT: &str = "To revolutionize drug discovery by making it 500x faster and more \
    accessible, enabling breakthrough treatments for diseases that currently have no cure. We envision a \
    world where AI-powered drug discovery democratizes access to life-saving therapeutics.";

pub const VISION_GOALS: &[&str] = &[
    "Democratize drug discovery",
    "Accelerate breakthrough treatments",
    "Reduce healthcare costs globally",
    "Enable precision medicine for all",
];

pub const VISION_PILLARS: &[DetailedFeature] = &[
    DetailedFeature {
        icon: Icon::Brain,
        title: "Universal AI Platform",
        description: "Scales to any protein target and disease area",
        details: &[
            "Multi-target drug discovery",
            "Rapid target switching",
            "Customizable pipelines",
            "Continuous learning",
        ],
        tone: Tone::Blue,
    },
    DetailedFeature {
        icon: Icon::Target,
        title: "Synthesis-First Approach",
        description: "AI optimization for practical drug development",
        details: &[
            "Synthesis feasibility scoring",
            "Route optimization",
            "Cost-benefit analysis",
            "Manufacturing considerations",
        ],
        tone: Tone::Blue,
    },
    DetailedFeature {
        icon: Icon::Globe,
        title: "Global Impact",
        description: "Democratizing drug discovery worldwide",
        details: &[
            "Accessible to small biotechs",
            "Rare disease focus",
            "Global health initiatives",
            "Affordable therapeutics",
        ],
        tone: Tone::Blue,
    },
];

pub const CURRENT_CAPABILITIES: &[&str] = &[
    "5 BACE1 lead compounds (Alzheimer's)",
    "90.8% AUC model performance",
    "0.630 R² correlation score",
    "Patent-pending technology",
];

pub const FUTURE_TARGETS: &[&str] = &[
    "Oncology (multiple cancer types)",
    "Rare genetic disorders",
    "Infectious diseases",
    "Autoimmune conditions",
];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MilestoneStatus {
    Completed,
    InProgress,
    Target,
}

impl MilestoneStatus {
    pub fn label(self) -> &'static str {
        match self {
            MilestoneStatus::Completed => "Completed",
            MilestoneStatus::InProgress => "In Progress",
            MilestoneStatus::Target => "Target",
        }
    }

    fn modifier(self) -> &'static str {
        match self {
            MilestoneStatus::Completed => "completed",
            MilestoneStatus::InProgress => "in-progress",
            MilestoneStatus::Target => "target",
        }
    }

    /// How much of the milestone's progress bar is filled.
    pub fn progress(self) -> u8 {
        match self {
            MilestoneStatus::Completed => 100,
            MilestoneStatus::InProgress => 75,
            MilestoneStatus::Target => 0,
        }
    }

    fn icon(self) -> Icon {
        match self {
            MilestoneStatus::Completed => Icon::CheckCircle,
            MilestoneStatus::InProgress | MilestoneStatus::Target => Icon::Clock,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Milestone {
    pub year: &'static str,
    pub milestone: &'static str,
    pub status: MilestoneStatus,
    pub description: &'static str,
}

pub const MILESTONES: &[Milestone] = &[
    Milestone {
        year: "2025",
        milestone: "Platform Development",
        status: MilestoneStatus::Completed,
        description: "BACE1 lead generation with 90.8% AUC performance",
    },
    Milestone {
        year: "2026",
        milestone: "Wet Lab Testing",
        status: MilestoneStatus::InProgress,
        description: "Synthesis and biological validation of lead compounds",
    },
    Milestone {
        year: "2027",
        milestone: "Clinical Partnerships",
        status: MilestoneStatus::Target,
        description: "Pharma partnerships and preclinical development",
    },
    Milestone {
        year: "2028",
        milestone: "FDA Submissions",
        status: MilestoneStatus::Target,
        description: "IND applications and clinical trial preparation",
    },
];

fn icon_list(items: &[&'static str], icon: Icon, item_class: &'static str) -> Html {
    html! {
        <div class="icon-list">
            { for items.iter().map(|item| html! {
                <div key={*item} class={classes!("icon-list-item", item_class)}>
                    <span class="icon-list-glyph">{icon.view()}</span>
                    <span>{*item}</span>
                </div>
            }) }
        </div>
    }
}

fn milestone_card(milestone: &Milestone, revealed: bool, index: usize) -> Html {
    let status = milestone.status.modifier();
    html! {
        <div
            key={milestone.year}
            class={classes!("milestone", format!("milestone-{}", status), reveal_classes(Entrance::Up, revealed))}
            style={reveal_delay(1.2 + index as f64 * 0.2)}
        >
            <div class="milestone-year">
                {milestone.year}
                <span class="milestone-badge-icon">{milestone.status.icon().view()}</span>
            </div>
            <div class="milestone-card">
                <h4>{milestone.milestone}</h4>
                <p>{milestone.description}</p>
                <div class="milestone-status">
                    {milestone.status.icon().view()}
                    {milestone.status.label()}
                </div>
                <div class="bar-track milestone-track">
                    <div
                        class="bar-fill milestone-fill"
                        style={format!("width: {}%;", if revealed { milestone.status.progress() } else { 0 })}
                    ></div>
                </div>
            </div>
        </div>
    }
}

#[function_component(TeamVision)]
pub fn team_vision() -> Html {
    let (node, revealed) = use_reveal();

    html! {
        <section id="team" class="section muted" ref={node}>
            <div class="container">
                { section_header(
                    "Team & Vision",
                    "Led by a visionary founder with deep expertise in AI and drug discovery, \
                     Cognivus is building the future of pharmaceutical innovation.",
                    revealed,
                ) }

                <div class="grid grid-2 team-intro">
                    <div class={classes!("card", reveal_classes(Entrance::FromLeft, revealed))} style={reveal_delay(0.2)}>
                        <div class="founder-head">
                            <div class="founder-avatar">{Icon::User.view()}</div>
                            <div>
                                <h3>{FOUNDER_NAME}</h3>
                                <p>{FOUNDER_TITLE}</p>
                            </div>
                        </div>
                        <p class="team-copy">{FOUNDER_BIO}</p>
                        { icon_list(FOUNDER_EXPERTISE, Icon::CheckCircle, "") }
                    </div>

                    <div class={classes!("gradient-panel", reveal_classes(Entrance::FromRight, revealed))} style={reveal_delay(0.4)}>
                        <div class="card-title">
                            <div class={Tone::Blue.tile_class()}>{Icon::Lightbulb.view()}</div>
                            <h3>{"Our Vision"}</h3>
                        </div>
                        <p class="team-copy">{VISION_STATEMENT}</p>
                        { icon_list(VISION_GOALS, Icon::Star, "") }
                    </div>
                </div>

                <div class="grid grid-3 pillars">
                    { for VISION_PILLARS.iter().enumerate().map(|(index, pillar)| html! {
                        <div
                            key={pillar.title}
                            class={classes!("card", reveal_classes(Entrance::Up, revealed))}
                            style={stagger(0.6, index)}
                        >
                            <div class={pillar.tone.tile_class()}>{pillar.icon.view()}</div>
                            <h3 class="pillar-title">{pillar.title}</h3>
                            <p class="team-copy">{pillar.description}</p>
                            <ul class="check-list">
                                { for pillar.details.iter().map(|detail| html! { <li key={*detail}>{*detail}</li> }) }
                            </ul>
                        </div>
                    }) }
                </div>

                <div class={classes!("card", "roadmap", reveal_classes(Entrance::Up, revealed))} style={reveal_delay(0.8)}>
                    <h3 class="panel-title">{"Platform Scalability & Roadmap"}</h3>
                    <div class="grid grid-2">
                        <div>
                            <h4>{"Current Capabilities"}</h4>
                            { icon_list(CURRENT_CAPABILITIES, Icon::CheckCircle, "tinted-green") }
                        </div>
                        <div>
                            <h4>{"Future Disease Targets"}</h4>
                            { icon_list(FUTURE_TARGETS, Icon::Target, "tinted-blue") }
                        </div>
                    </div>
                </div>

                <div class={classes!("gradient-panel", "timeline", reveal_classes(Entrance::Up, revealed))} style={reveal_delay(1.0)}>
                    <h3 class="panel-title">{"Development Timeline"}</h3>
                    <div class="grid grid-4">
                        { for MILESTONES.iter().enumerate().map(|(index, milestone)| milestone_card(milestone, revealed, index)) }
                    </div>
                </div>

                <div class={classes!("card", "closing-cta", reveal_classes(Entrance::Up, revealed))} style={reveal_delay(1.2)}>
                    <h3>{"Join Our Mission"}</h3>
                    <p>
                        {"Help us revolutionize drug discovery and bring life-saving treatments to patients \
                          faster than ever before. Our validated platform is ready to scale to any disease target."}
                    </p>
                    <div class="cta-row">
                        <button class="btn btn-primary" onclick={mail_callback(MailTemplate::InvestorDemo)}>
                            {"Schedule Investor Demo"}
                            {Icon::ArrowRight.view()}
                        </button>
                        <button class="btn btn-secondary" onclick={mail_callback(MailTemplate::PitchDeck)}>
                            {"Download Pitch Deck"}
                            {Icon::ArrowRight.view()}
                        </button>
                    </div>
                </div>
            </div>
            <style>
                {r#"
                .team-intro, .pillars {
                    margin-bottom: 4rem;
                }
                .founder-head {
                    display: flex;
                    align-items: center;
                    gap: 1rem;
                    margin-bottom: 1.5rem;
                }
                .founder-head h3 {
                    font-size: 1.5rem;
                    font-weight: 700;
                    margin: 0;
                }
                .founder-head p {
                    color: #4b5563;
                    margin: 0;
                }
                .founder-avatar {
                    width: 4rem;
                    height: 4rem;
                    border-radius: 1rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-size: 2rem;
                    background: linear-gradient(135deg, #2563eb, #059669);
                    color: #ffffff;
                }
                .team-copy {
                    color: #4b5563;
                    line-height: 1.7;
                    margin: 0 0 1.5rem 0;
                }
                .pillar-title {
                    font-size: 1.25rem;
                    font-weight: 700;
                    margin: 1.5rem 0 1rem 0;
                }
                .icon-list {
                    display: flex;
                    flex-direction: column;
                    gap: 0.75rem;
                }
                .icon-list-item {
                    display: flex;
                    align-items: center;
                    gap: 0.75rem;
                    color: #374151;
                }
                .icon-list-glyph {
                    flex-shrink: 0;
                }
                .tinted-green {
                    padding: 0.75rem;
                    background: #ecfdf5;
                    border-radius: 0.5rem;
                }
                .tinted-blue {
                    padding: 0.75rem;
                    background: #eff6ff;
                    border-radius: 0.5rem;
                }
                .roadmap {
                    margin-bottom: 4rem;
                }
                .roadmap h4 {
                    font-size: 1.25rem;
                    font-weight: 600;
                    margin: 0 0 1.5rem 0;
                }
                .milestone {
                    text-align: center;
                }
                .milestone-year {
                    position: relative;
                    width: 4rem;
                    height: 4rem;
                    border-radius: 9999px;
                    margin: 0 auto 1.5rem auto;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                    font-weight: 700;
                    color: #ffffff;
                    box-shadow: 0 10px 15px rgba(15, 23, 42, 0.1);
                    transition: transform 0.3s ease;
                }
                .milestone:hover .milestone-year {
                    transform: scale(1.1);
                }
                .milestone-badge-icon {
                    position: absolute;
                    top: -0.5rem;
                    right: -0.5rem;
                    width: 1.5rem;
                    height: 1.5rem;
                    border-radius: 9999px;
                    background: #ffffff;
                    font-size: 0.75rem;
                    display: flex;
                    align-items: center;
                    justify-content: center;
                }
                .milestone-completed .milestone-year { background: linear-gradient(135deg, #4ade80, #16a34a); }
                .milestone-in-progress .milestone-year { background: linear-gradient(135deg, #60a5fa, #2563eb); }
                .milestone-target .milestone-year { background: linear-gradient(135deg, #d1d5db, #6b7280); }
                .milestone-card {
                    background: #ffffff;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    border: 1px solid #f3f4f6;
                    box-shadow: 0 4px 6px rgba(15, 23, 42, 0.05);
                }
                .milestone-card h4 {
                    font-size: 1.125rem;
                    font-weight: 700;
                    margin: 0 0 0.75rem 0;
                }
                .milestone-card p {
                    font-size: 0.875rem;
                    color: #4b5563;
                    margin: 0 0 1rem 0;
                }
                .milestone-status {
                    display: inline-flex;
                    align-items: center;
                    gap: 0.5rem;
                    padding: 0.5rem 1rem;
                    border-radius: 9999px;
                    font-size: 0.875rem;
                    font-weight: 600;
                }
                .milestone-completed .milestone-status { background: #dcfce7; color: #15803d; }
                .milestone-in-progress .milestone-status { background: #dbeafe; color: #1d4ed8; }
                .milestone-target .milestone-status { background: #f3f4f6; color: #374151; }
                .milestone-track {
                    margin-top: 1rem;
                    height: 0.5rem;
                }
                .milestone-completed .milestone-fill { background: #22c55e; }
                .milestone-in-progress .milestone-fill { background: #3b82f6; }
                .milestone-target .milestone-fill { background: #9ca3af; }
                "#}
            </style>
        </section>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_labels_and_progress() {
        assert_eq!(MilestoneStatus::Completed.label(), "Completed");
        assert_eq!(MilestoneStatus::InProgress.label(), "In Progress");
        assert_eq!(MilestoneStatus::Target.label(), "Target");
        assert_eq!(MilestoneStatus::Completed.progress(), 100);
        assert_eq!(MilestoneStatus::Target.progress(), 0);
    }

    #[test]
    fn roadmap_runs_forward() {
        let years: Vec<&str> = MILESTONES.iter().map(|m| m.year).collect();
        assert_eq!(years, ["2025", "2026", "2027", "2028"]);
        assert_eq!(MILESTONES[0].status, MilestoneStatus::Completed);
        assert_eq!(MILESTONES[1].status, MilestoneStatus::InProgress);
    }
}
