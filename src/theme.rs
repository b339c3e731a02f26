//! Site-wide palette and base stylesheet, mounted once at start-up.

use stylist::ast::Sheet;
use stylist::GlobalStyle;

pub type StyleError = stylist::Error;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Palette {
    pub primary_blue: &'static str,
    pub primary_green: &'static str,
    pub accent_blue: &'static str,
    pub accent_green: &'static str,
    pub font_stack: &'static str,
}

pub const PALETTE: Palette = Palette {
    primary_blue: "#0f172a",
    primary_green: "#059669",
    accent_blue: "#3b82f6",
    accent_green: "#10b981",
    font_stack: "'Inter', system-ui, sans-serif",
};

/// Colour family used for icon tiles, badges and bars.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tone {
    Blue,
    Green,
    Purple,
    Orange,
    Yellow,
    Red,
}

impl Tone {
    pub fn name(self) -> &'static str {
        match self {
            Tone::Blue => "blue",
            Tone::Green => "green",
            Tone::Purple => "purple",
            Tone::Orange => "orange",
            Tone::Yellow => "yellow",
            Tone::Red => "red",
        }
    }

    /// Soft background tile with a strong glyph colour.
    pub fn tile_class(self) -> String {
        format!("tile tile-{}", self.name())
    }

    pub fn bar_class(self) -> String {
        format!("bar-fill bar-{}", self.name())
    }

    pub fn text_class(self) -> String {
        format!("text-{}", self.name())
    }
}

pub fn root_variables(palette: &Palette) -> String {
    format!(
        ":root {{ --primary-blue: {}; --primary-green: {}; --accent-blue: {}; --accent-green: {}; --font-sans: {}; }}",
        palette.primary_blue,
        palette.primary_green,
        palette.accent_blue,
        palette.accent_green,
        palette.font_stack,
    )
}

pub fn global_css(palette: &Palette) -> String {
    let mut css = root_variables(palette);
    css.push_str(BASE_CSS);
    css
}

pub fn mount_global_styles() -> Result<GlobalStyle, StyleError> {
    let sheet: Sheet = global_css(&PALETTE).parse()?;
    GlobalStyle::new(sheet)
}

const BASE_CSS: &str = r#"
html {
    scroll-behavior: smooth;
}

body {
    margin: 0;
    font-family: var(--font-sans);
    color: #111827;
    background: #ffffff;
    -webkit-font-smoothing: antialiased;
}

*, *::before, *::after {
    box-sizing: border-box;
}

.container {
    max-width: 1200px;
    margin: 0 auto;
    padding: 0 1.5rem;
}

.section {
    padding: 5rem 0;
}

.section.muted {
    background: #f9fafb;
}

.section-header {
    text-align: center;
    margin-bottom: 4rem;
}

.section-header h2 {
    font-size: 2.25rem;
    font-weight: 700;
    color: #111827;
    margin: 0 0 1.5rem 0;
}

.section-header p {
    font-size: 1.25rem;
    color: #4b5563;
    max-width: 48rem;
    margin: 0 auto;
}

.btn {
    display: inline-flex;
    align-items: center;
    justify-content: center;
    gap: 0.5rem;
    padding: 0.75rem 1.5rem;
    border-radius: 0.75rem;
    font-weight: 600;
    font-size: 1rem;
    border: none;
    cursor: pointer;
    transition: transform 0.2s ease, box-shadow 0.2s ease, background 0.2s ease;
}

.btn:hover {
    transform: scale(1.05);
}

.btn:active {
    transform: scale(0.95);
}

.btn-primary {
    background: linear-gradient(90deg, var(--accent-blue), var(--primary-green));
    color: #ffffff;
    box-shadow: 0 10px 20px rgba(59, 130, 246, 0.25);
}

.btn-secondary {
    background: #ffffff;
    color: var(--primary-blue);
    border: 2px solid #e5e7eb;
}

.btn-light {
    background: #ffffff;
    color: #2563eb;
}

.btn-lg {
    padding: 1rem 2rem;
    font-size: 1.125rem;
}

.btn-block {
    width: 100%;
}

.card {
    background: #ffffff;
    border-radius: 1rem;
    padding: 2rem;
    box-shadow: 0 10px 25px rgba(15, 23, 42, 0.08);
    border: 1px solid #f3f4f6;
}

.card.soft {
    background: #f9fafb;
    box-shadow: none;
    border: none;
    padding: 1.5rem;
    text-align: center;
}

.gradient-panel {
    background: linear-gradient(90deg, #eff6ff, #ecfdf5);
    border: 1px solid #dbeafe;
    border-radius: 1rem;
    padding: 2rem;
}

.gradient-banner {
    background: linear-gradient(90deg, #2563eb, #059669);
    color: #ffffff;
    border-radius: 1rem;
    padding: 2rem;
}

.grid {
    display: grid;
    gap: 1.5rem;
}

.grid-2 { grid-template-columns: repeat(2, minmax(0, 1fr)); gap: 3rem; }
.grid-3 { grid-template-columns: repeat(3, minmax(0, 1fr)); gap: 2rem; }
.grid-4 { grid-template-columns: repeat(4, minmax(0, 1fr)); }

@media (max-width: 1024px) {
    .grid-2, .grid-4 { grid-template-columns: repeat(2, minmax(0, 1fr)); }
}

@media (max-width: 768px) {
    .grid-2, .grid-3, .grid-4 { grid-template-columns: 1fr; }
    .section-header h2 { font-size: 1.875rem; }
}

.cta-row {
    display: flex;
    flex-wrap: wrap;
    gap: 1rem;
    justify-content: center;
}

.pill {
    display: inline-flex;
    align-items: center;
    gap: 0.5rem;
    padding: 0.5rem 1rem;
    border-radius: 9999px;
    font-size: 0.875rem;
    font-weight: 500;
    background: #d1fae5;
    color: #047857;
}

.tile {
    width: 3rem;
    height: 3rem;
    border-radius: 0.75rem;
    display: inline-flex;
    align-items: center;
    justify-content: center;
    font-size: 1.4rem;
    flex-shrink: 0;
}

.tile-blue { background: #dbeafe; color: #2563eb; }
.tile-green { background: #d1fae5; color: #059669; }
.tile-purple { background: #ede9fe; color: #7c3aed; }
.tile-orange { background: #ffedd5; color: #ea580c; }
.tile-yellow { background: #fef9c3; color: #ca8a04; }
.tile-red { background: #fee2e2; color: #dc2626; }

.text-blue { color: #2563eb; }
.text-green { color: #059669; }
.text-purple { color: #7c3aed; }
.text-orange { color: #ea580c; }
.text-yellow { color: #ca8a04; }
.text-red { color: #dc2626; }

.check-list {
    list-style: none;
    margin: 0;
    padding: 0;
    display: flex;
    flex-direction: column;
    gap: 0.75rem;
}

.check-list li::before {
    content: "✓";
    color: var(--accent-green);
    font-weight: 700;
    margin-right: 0.75rem;
}

.bar-track {
    width: 100%;
    height: 0.75rem;
    background: #e5e7eb;
    border-radius: 9999px;
    overflow: hidden;
}

.bar-fill {
    height: 100%;
    border-radius: 9999px;
    transition: width 1s ease-out;
}

.bar-blue { background: #3b82f6; }
.bar-green { background: #22c55e; }
.bar-yellow { background: #eab308; }
.bar-purple { background: #8b5cf6; }
.bar-orange { background: #f97316; }
.bar-red { background: #ef4444; }

.big-tile {
    width: 4rem;
    height: 4rem;
    border-radius: 1rem;
    font-size: 2rem;
    margin-bottom: 1.5rem;
}

.dot {
    display: inline-block;
    width: 0.5rem;
    height: 0.5rem;
    border-radius: 9999px;
}

.dot-green { background: #22c55e; }
.dot-blue { background: #3b82f6; }

.feature-row {
    display: flex;
    align-items: flex-start;
    gap: 1rem;
}

.feature-row h4, .feature-column h4 {
    font-size: 1.125rem;
    font-weight: 600;
    color: #111827;
    margin: 0 0 0.5rem 0;
}

.feature-row p, .feature-column p {
    color: #4b5563;
    margin: 0;
}

.feature-column {
    display: flex;
    flex-direction: column;
    align-items: center;
    text-align: center;
    gap: 0.5rem;
}

.feature-column .tile {
    margin-bottom: 0.5rem;
}

.card-title {
    display: flex;
    align-items: center;
    gap: 0.75rem;
    margin-bottom: 1.5rem;
}

.card-title h3 {
    font-size: 1.5rem;
    font-weight: 700;
    margin: 0;
}

.card-footnote {
    margin-top: 1.5rem;
    padding: 1rem;
    background: #ecfdf5;
    border-radius: 0.75rem;
    text-align: center;
}

.footnote-value {
    font-size: 1.5rem;
    font-weight: 700;
}

.footnote-label {
    font-size: 0.875rem;
    color: #4b5563;
}

.row-list {
    display: flex;
    flex-direction: column;
    gap: 1rem;
}

.row-item {
    display: flex;
    align-items: center;
    justify-content: space-between;
    padding: 1rem;
    background: #f9fafb;
    border-radius: 0.75rem;
}

.row-title {
    font-weight: 600;
    color: #111827;
}

.row-subtitle {
    font-size: 0.875rem;
    color: #4b5563;
}

.row-status {
    display: flex;
    align-items: center;
    gap: 0.5rem;
    font-weight: 500;
}

.panel-title {
    font-size: 1.5rem;
    font-weight: 700;
    text-align: center;
    margin: 0 0 2rem 0;
}

.closing-cta {
    margin-top: 4rem;
    text-align: center;
}

.closing-cta h3 {
    font-size: 1.5rem;
    font-weight: 700;
    margin: 0 0 1rem 0;
}

.closing-cta > p {
    color: #4b5563;
    max-width: 42rem;
    margin: 0 auto 1.5rem auto;
}

.gradient-banner.closing-cta > p {
    color: #dbeafe;
}

.reveal {
    opacity: 0;
    transition-property: opacity, transform;
    transition-duration: 0.8s;
    transition-timing-function: ease-out;
}

.reveal-up { transform: translateY(50px); }
.reveal-left { transform: translateX(-50px); }
.reveal-right { transform: translateX(50px); }

.reveal.revealed {
    opacity: 1;
    transform: none;
}

@media (prefers-reduced-motion: reduce) {
    .reveal {
        transition: none;
        transform: none;
    }
}
"#;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn root_variables_carry_palette() {
        let vars = root_variables(&PALETTE);
        assert!(vars.starts_with(":root {"));
        assert!(vars.contains("--primary-blue: #0f172a;"));
        assert!(vars.contains("--primary-green: #059669;"));
        assert!(vars.contains("--accent-blue: #3b82f6;"));
        assert!(vars.contains("--accent-green: #10b981;"));
        assert!(vars.contains("--font-sans: 'Inter', system-ui, sans-serif;"));
    }

    #[test]
    fn global_css_parses() {
        let parsed: Result<Sheet, _> = global_css(&PALETTE).parse();
        assert!(parsed.is_ok());
    }

    #[test]
    fn tone_classes() {
        assert_eq!(Tone::Purple.tile_class(), "tile tile-purple");
        assert_eq!(Tone::Green.bar_class(), "bar-fill bar-green");
        assert_eq!(Tone::Orange.text_class(), "text-orange");
    }
}
