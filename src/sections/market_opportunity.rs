use yew::prelude::*;

use crate::actions::{mail_callback, MailTemplate};
use crate::components::cards::{feature_column, section_header, StatGrid};
use crate::components::growth_chart::{GrowthChart, GrowthPoint};
use crate::content::{Feature, StatCard};
use crate::icons::Icon;
use crate::reveal::{reveal_classes, reveal_delay, use_reveal, Entrance};
use crate::theme::Tone;

pub struct MarketSegment {
    pub segment: &'static str,
    pub market_size: &'static str,
    pub growth: &'static str,
    pub description: &'static str,
}

pub struct MarketPosition {
    pub title: &'static str,
    pub description: &'static str,
    pub badge: &'static str,
}

pub const MARKET_DATA: &[StatCard] = &[
    StatCard {
        value: "$8.2B",
        label: "Addressable Market",
        description: "AI drug discovery market by 2030",
        icon: Icon::DollarSign,
        tone: Tone::Blue,
    },
    StatCard {
        value: "18.2%",
        label: "CAGR Growth",
        description: "Annual growth rate expected",
        icon: Icon::TrendingUp,
        tone: Tone::Green,
    },
    StatCard {
        value: "500+",
        label: "Disease Targets",
        description: "Potential protein targets",
        icon: Icon::Target,
        tone: Tone::Purple,
    },
    StatCard {
        value: "$2.6B",
        label: "Average Drug Cost",
        description: "Traditional development cost",
        icon: Icon::TestTube,
        tone: Tone::Orange,
    },
];

pub const GROWTH_TRAJECTORY: &[GrowthPoint] = &[
    GrowthPoint { year: 2025, market: "$2.5B", market_billions: 2.5, phase: "Current Market" },
    GrowthPoint { year: 2026, market: "$3.2B", market_billions: 3.2, phase: "Projected Growth" },
    GrowthPoint { year: 2028, market: "$5.4B", market_billions: 5.4, phase: "Accelerated Adoption" },
    GrowthPoint { year: 2030, market: "$8.2B", market_billions: 8.2, phase: "Market Maturity" },
];

pub const MARKET_SEGMENTS: &[MarketSegment] = &[
    MarketSegment {
        segment: "Alzheimer's Disease",
        market_size: "$4.2B",
        growth: "6.8% CAGR",
        description: "BACE1 inhibitors and other targets",
    },
    MarketSegment {
        segment: "Oncology",
        market_size: "$185B",
        growth: "8.5% CAGR",
        description: "Multiple cancer targets",
    },
    MarketSegment {
        segment: "Rare Diseases",
        market_size: "$165B",
        growth: "9.2% CAGR",
        description: "Orphan drug opportunities",
    },
    MarketSegment {
        segment: "Infectious Diseases",
        market_size: "$42B",
        growth: "5.4% CAGR",
        description: "Antimicrobial resistance",
    },
];

pub const MARKET_DRIVERS: &[Feature] = &[
    Feature {
        icon: Icon::DollarSign,
        title: "Cost Pressure",
        description: "Pharma companies seeking 500x cost reduction in R&D",
    },
    Feature {
        icon: Icon::Clock,
        title: "Time to Market",
        description: "Urgent need for faster drug development cycles",
    },
    Feature {
        icon: Icon::Brain,
        title: "AI Adoption",
        description: "Rapid adoption of AI/ML in pharmaceutical industry",
    },
    Feature {
        icon: Icon::Target,
        title: "Precision Medicine",
        description: "Growing demand for targeted therapeutics",
    },
    Feature {
        icon: Icon::Users,
        title: "Patient Demand",
        description: "Increasing patient demand for novel treatments",
    },
    Feature {
        icon: Icon::BarChart,
        title: "Regulatory Support",
        description: "FDA and EMA supporting AI-driven drug development",
    },
];

pub const MARKET_POSITION: &[MarketPosition] = &[
    MarketPosition {
        title: "First Mover Advantage",
        description: "First AI platform with proven synthesis focus",
        badge: "Patent-Pending",
    },
    MarketPosition {
        title: "Proven Technology",
        description: "90.8% AUC performance with BACE1 leads",
        badge: "Validated",
    },
    MarketPosition {
        title: "Scalable Platform",
        description: "Ready to address any disease target",
        badge: "Universal",
    },
];

#[function_component(MarketOpportunity)]
pub fn market_opportunity() -> Html {
    let (node, revealed) = use_reveal();

    html! {
        <section id="market" class="section" ref={node}>
            <div class="container">
                { section_header(
                    "$8.2B Market Opportunity",
                    "The AI drug discovery market is experiencing strong growth, driven by \
                     the urgent need for faster, more efficient drug development processes.",
                    revealed,
                ) }

                <StatGrid stats={MARKET_DATA} revealed={revealed} />

                <div class="grid grid-2">
                    <div class={classes!("card", reveal_classes(Entrance::FromLeft, revealed))} style={reveal_delay(0.4)}>
                        <div class="card-title">
                            <div class={Tone::Green.tile_class()}>{Icon::TrendingUp.view()}</div>
                            <h3>{"Market Growth Trajectory"}</h3>
                        </div>
                        <GrowthChart points={GROWTH_TRAJECTORY} />
                        <div class="row-list">
                            { for GROWTH_TRAJECTORY.iter().map(|period| html! {
                                <div key={period.year} class="row-item">
                                    <div>
                                        <div class="row-title">{period.year}</div>
                                        <div class="row-subtitle">{period.phase}</div>
                                    </div>
                                    <div class="row-figure">
                                        <div class="figure-value text-green">{period.market}</div>
                                        <div class="row-subtitle">{"Market Size"}</div>
                                    </div>
                                </div>
                            }) }
                        </div>
                        <div class="card-footnote">
                            <div class="footnote-value text-green">{"18.2% CAGR"}</div>
                            <div class="footnote-label">{"Compound Annual Growth Rate"}</div>
                        </div>
                    </div>

                    <div class={classes!("card", reveal_classes(Entrance::FromRight, revealed))} style={reveal_delay(0.6)}>
                        <div class="card-title">
                            <div class={Tone::Blue.tile_class()}>{Icon::Globe.view()}</div>
                            <h3>{"Key Market Segments"}</h3>
                        </div>
                        <div class="row-list">
                            { for MARKET_SEGMENTS.iter().map(|segment| html! {
                                <div key={segment.segment} class="segment">
                                    <div class="segment-line">
                                        <h4>{segment.segment}</h4>
                                        <span class="text-green">{segment.growth}</span>
                                    </div>
                                    <div class="segment-line">
                                        <p>{segment.description}</p>
                                        <span class="segment-size text-blue">{segment.market_size}</span>
                                    </div>
                                </div>
                            }) }
                        </div>
                    </div>
                </div>

                <div class={classes!("gradient-panel", "drivers", reveal_classes(Entrance::Up, revealed))} style={reveal_delay(0.8)}>
                    <h3 class="panel-title">{"Market Drivers & Industry Trends"}</h3>
                    <div class="grid grid-3">
                        { for MARKET_DRIVERS.iter().map(|driver| html! {
                            <div key={driver.title} class="driver-card">
                                { feature_column(driver, Tone::Blue.tile_class()) }
                            </div>
                        }) }
                    </div>
                </div>

                <div class={classes!("card", "position", reveal_classes(Entrance::Up, revealed))} style={reveal_delay(1.0)}>
                    <h3 class="panel-title">{"Cognivus's Market Position"}</h3>
                    <div class="grid grid-3">
                        { for MARKET_POSITION.iter().map(|position| html! {
                            <div key={position.title} class="feature-column">
                                <div class="tile tile-green big-tile">{Icon::ArrowUpRight.view()}</div>
                                <h4>{position.title}</h4>
                                <p>{position.description}</p>
                                <span class="pill">{position.badge}</span>
                            </div>
                        }) }
                    </div>
                </div>

                <div class={classes!("gradient-banner", "closing-cta", reveal_classes(Entrance::Up, revealed))} style={reveal_delay(1.2)}>
                    <h3>{"Join the AI Drug Discovery Revolution"}</h3>
                    <p class="banner-copy">
                        {"Cognivus is positioned to capture a significant share of the $8.2B \
                          AI drug discovery market with our validated, synthesis-optimized platform."}
                    </p>
                    <button class="btn btn-light btn-lg" onclick={mail_callback(MailTemplate::InvestorDemo)}>
                        {"Schedule Investor Demo"}
                    </button>
                </div>
            </div>
            <style>
                {r#"
                .growth-chart {
                    margin-bottom: 1.5rem;
                }
                .row-figure {
                    text-align: right;
                }
                .figure-value {
                    font-size: 1.25rem;
                    font-weight: 700;
                }
                .segment {
                    padding: 1rem;
                    background: #f9fafb;
                    border-radius: 0.75rem;
                }
                .segment-line {
                    display: flex;
                    align-items: center;
                    justify-content: space-between;
                    gap: 1rem;
                }
                .segment-line h4 {
                    margin: 0 0 0.5rem 0;
                    font-weight: 600;
                }
                .segment-line p {
                    margin: 0;
                    font-size: 0.875rem;
                    color: #4b5563;
                }
                .segment-size {
                    font-size: 1.125rem;
                    font-weight: 700;
                }
                .drivers, .position {
                    margin-top: 4rem;
                }
                .driver-card {
                    background: #ffffff;
                    border-radius: 0.75rem;
                    padding: 1.5rem;
                    box-shadow: 0 1px 2px rgba(15, 23, 42, 0.05);
                }
                .driver-card .feature-column {
                    align-items: flex-start;
                    text-align: left;
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
    fn chart_values_match_display_copy() {
        for point in GROWTH_TRAJECTORY {
            let shown: f64 = point
                .market
                .trim_start_matches('$')
                .trim_end_matches('B')
                .parse()
                .unwrap();
            assert_eq!(shown, point.market_billions, "{}", point.year);
        }
    }

    #[test]
    fn trajectory_is_chronological() {
        assert!(GROWTH_TRAJECTORY.windows(2).all(|pair| pair[0].year < pair[1].year));
    }
}
