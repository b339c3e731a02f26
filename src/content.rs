//! Record shapes shared by the section tables. The tables themselves live
//! next to the section that renders them.

use crate::icons::Icon;
use crate::theme::Tone;

/// Big number with a caption, e.g. "$8.2B / Addressable Market".
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StatCard {
    pub value: &'static str,
    pub label: &'static str,
    pub description: &'static str,
    pub icon: Icon,
    pub tone: Tone,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Feature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DetailedFeature {
    pub icon: Icon,
    pub title: &'static str,
    pub description: &'static str,
    pub details: &'static [&'static str],
    pub tone: Tone,
}

/// One bar of a percentage breakdown. Percentages are display copy and
/// are not checked to add up.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Share {
    pub label: &'static str,
    pub percentage: u8,
    pub amount: Option<&'static str>,
    pub tone: Tone,
}

impl Share {
    pub fn width_style(&self) -> String {
        format!("width: {}%;", self.percentage.min(100))
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NavLink {
    pub label: &'static str,
    pub anchor: &'static str,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn share_width_is_clamped() {
        let share = Share {
            label: "Overfull",
            percentage: 140,
            amount: None,
            tone: Tone::Blue,
        };
        assert_eq!(share.width_style(), "width: 100%;");
    }
}
