use yew::prelude::*;

use crate::content::{Feature, Share, StatCard};
use crate::reveal::{reveal_classes, reveal_delay, stagger, Entrance};

pub fn section_header(title: &str, subtitle: &str, revealed: bool) -> Html {
    html! {
        <div class={classes!("section-header", reveal_classes(Entrance::Up, revealed))}>
            <h2>{title}</h2>
            <p>{subtitle}</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StatGridProps {
    pub stats: &'static [StatCard],
    pub revealed: bool,
}

#[function_component(StatGrid)]
pub fn stat_grid(props: &StatGridProps) -> Html {
    html! {
        <div class="grid grid-4 stat-grid">
            { for props.stats.iter().enumerate().map(|(index, stat)| html! {
                <div
                    key={stat.label}
                    class={classes!("card", "soft", reveal_classes(Entrance::Up, props.revealed))}
                    style={stagger(0.0, index)}
                >
                    <div class={stat.tone.tile_class()}>{stat.icon.view()}</div>
                    <div class="stat-value">{stat.value}</div>
                    <div class="stat-label">{stat.label}</div>
                    <p class="stat-description">{stat.description}</p>
                </div>
            }) }
            <style>
                {r#"
                .stat-grid {
                    margin-bottom: 4rem;
                }
                .stat-grid .tile {
                    margin: 0 auto 1rem auto;
                }
                .stat-value {
                    font-size: 1.875rem;
                    font-weight: 700;
                    color: #111827;
                    margin-bottom: 0.5rem;
                }
                .stat-label {
                    font-weight: 600;
                    color: #374151;
                    margin-bottom: 0.5rem;
                }
                .stat-description {
                    font-size: 0.875rem;
                    color: #4b5563;
                    margin: 0;
                }
                "#}
            </style>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ShareBarsProps {
    pub shares: &'static [Share],
    pub revealed: bool,
}

/// Horizontal percentage bars; widths stay at zero until revealed so the
/// fill animates in.
#[function_component(ShareBars)]
pub fn share_bars(props: &ShareBarsProps) -> Html {
    html! {
        <div class="share-bars">
            { for props.shares.iter().map(|share| html! {
                <div key={share.label} class="share-row">
                    <div class="share-head">
                        <span class="share-label">{share.label}</span>
                        <span class="share-percent">{format!("{}%", share.percentage)}</span>
                    </div>
                    <div class="bar-track">
                        <div
                            class={share.tone.bar_class()}
                            style={if props.revealed { share.width_style() } else { "width: 0%;".to_string() }}
                        ></div>
                    </div>
                    {
                        if let Some(amount) = share.amount {
                            html! { <div class="share-amount">{amount}</div> }
                        } else {
                            html! {}
                        }
                    }
                </div>
            }) }
            <style>
                {r#"
                .share-bars {
                    display: flex;
                    flex-direction: column;
                    gap: 1.25rem;
                }
                .share-head {
                    display: flex;
                    justify-content: space-between;
                    align-items: center;
                    margin-bottom: 0.5rem;
                }
                .share-label {
                    font-weight: 500;
                    color: #374151;
                }
                .share-percent {
                    font-size: 0.875rem;
                    color: #6b7280;
                }
                .share-amount {
                    text-align: right;
                    font-size: 0.875rem;
                    font-weight: 500;
                    color: #2563eb;
                    margin-top: 0.5rem;
                }
                "#}
            </style>
        </div>
    }
}

/// Icon tile beside a title and description, as used in the problem,
/// solution and highlight lists.
pub fn feature_row(feature: &Feature, tone_class: String, revealed: bool, delay: f64) -> Html {
    html! {
        <div
            class={classes!("feature-row", reveal_classes(Entrance::Up, revealed))}
            style={reveal_delay(delay)}
        >
            <div class={tone_class}>{feature.icon.view()}</div>
            <div>
                <h4>{feature.title}</h4>
                <p>{feature.description}</p>
            </div>
        </div>
    }
}

/// Centered icon, title and copy; used for the three-up summaries.
pub fn feature_column(feature: &Feature, tone_class: String) -> Html {
    html! {
        <div class="feature-column">
            <div class={tone_class}>{feature.icon.view()}</div>
            <h4>{feature.title}</h4>
            <p>{feature.description}</p>
        </div>
    }
}
