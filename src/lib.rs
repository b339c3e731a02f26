use log::{error, info};

pub mod accordion;
pub mod actions;
pub mod app;
pub mod config;
pub mod contact;
pub mod content;
pub mod icons;
pub mod reveal;
pub mod theme;

pub mod components {
    pub mod cards;
    pub mod growth_chart;
    pub mod logo;
    pub mod navigation;
}

pub mod sections {
    pub mod competitive_advantages;
    pub mod faq;
    pub mod footer;
    pub mod hero;
    pub mod investment_opportunity;
    pub mod market_opportunity;
    pub mod problem_solution;
    pub mod proof_of_concept;
    pub mod team_vision;
}

pub fn run() {
    // Initialize console error panic hook for better error messages
    console_error_panic_hook::set_once();

    console_log::init_with_level(config::log_level()).expect("error initializing log");

    if let Err(e) = theme::mount_global_styles() {
        error!("Could not mount global styles: {}", e);
    }

    info!("Starting {} site", config::COMPANY);
    yew::Renderer::<app::App>::new().render();
}
