use yew::prelude::*;

use crate::config;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogoSize {
    Small,
    #[default]
    Medium,
    Large,
    XLarge,
}

impl LogoSize {
    pub fn height_rem(self) -> f32 {
        match self {
            LogoSize::Small => 3.0,
            LogoSize::Medium => 4.0,
            LogoSize::Large => 5.0,
            LogoSize::XLarge => 5.5,
        }
    }
}

#[derive(Properties, PartialEq)]
pub struct LogoProps {
    #[prop_or_default]
    pub size: LogoSize,
    #[prop_or_default]
    pub class: Classes,
}

#[function_component(Logo)]
pub fn logo(props: &LogoProps) -> Html {
    html! {
        <div class={classes!("logo", props.class.clone())}>
            <img
                src={config::LOGO_SRC}
                alt={config::COMPANY}
                style={format!("height: {}rem; width: auto; display: block;", props.size.height_rem())}
            />
        </div>
    }
}
