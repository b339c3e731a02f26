use yew::prelude::*;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    ArrowRight,
    ArrowUp,
    ArrowUpRight,
    Award,
    BarChart,
    Brain,
    Calendar,
    CheckCircle,
    Clock,
    Close,
    DollarSign,
    Github,
    Globe,
    HelpCircle,
    Lightbulb,
    Linkedin,
    Mail,
    MapPin,
    Menu,
    Shield,
    Star,
    Target,
    TestTube,
    TrendingUp,
    Twitter,
    User,
    Users,
    XMark,
    Zap,
}

impl Icon {
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::ArrowRight => "→",
            Icon::ArrowUp => "↑",
            Icon::ArrowUpRight => "↗",
            Icon::Award => "🏅",
            Icon::BarChart => "📊",
            Icon::Brain => "🧠",
            Icon::Calendar => "📅",
            Icon::CheckCircle => "✅",
            Icon::Clock => "⏱",
            Icon::Close => "✕",
            Icon::DollarSign => "$",
            Icon::Github => "GH",
            Icon::Globe => "🌐",
            Icon::HelpCircle => "?",
            Icon::Lightbulb => "💡",
            Icon::Linkedin => "in",
            Icon::Mail => "✉",
            Icon::MapPin => "📍",
            Icon::Menu => "☰",
            Icon::Shield => "🛡",
            Icon::Star => "★",
            Icon::Target => "🎯",
            Icon::TestTube => "🧪",
            Icon::TrendingUp => "📈",
            Icon::Twitter => "X",
            Icon::User => "👤",
            Icon::Users => "👥",
            Icon::XMark => "✗",
            Icon::Zap => "⚡",
        }
    }

    pub fn view(self) -> Html {
        html! { <span class="icon" aria-hidden="true">{self.glyph()}</span> }
    }
}
