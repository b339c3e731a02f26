use log::warn;
use plotters::prelude::*;
use plotters_canvas::CanvasBackend;
use web_sys::HtmlCanvasElement;
use yew::prelude::*;

const BAR_COLOR: RGBColor = RGBColor(5, 150, 105);

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct GrowthPoint {
    pub year: u16,
    /// Display copy, e.g. "$5.4B".
    pub market: &'static str,
    pub market_billions: f64,
    pub phase: &'static str,
}

/// Top of the y axis: tallest bar plus 10% headroom.
pub fn chart_ceiling(points: &[GrowthPoint]) -> f64 {
    let tallest = points
        .iter()
        .map(|point| point.market_billions)
        .fold(0.0_f64, f64::max);
    if tallest > 0.0 {
        tallest * 1.1
    } else {
        1.0
    }
}

fn draw_growth_chart(canvas: HtmlCanvasElement, points: &[GrowthPoint]) -> Result<(), String> {
    let backend = CanvasBackend::with_canvas_object(canvas)
        .ok_or_else(|| "canvas backend unavailable".to_string())?;
    let root = backend.into_drawing_area();
    root.fill(&WHITE).map_err(|e| e.to_string())?;

    let mut chart = ChartBuilder::on(&root)
        .margin(10)
        .x_label_area_size(30)
        .y_label_area_size(50)
        .build_cartesian_2d(0..points.len(), 0.0..chart_ceiling(points))
        .map_err(|e| e.to_string())?;

    chart
        .configure_mesh()
        .disable_x_mesh()
        .x_labels(points.len())
        .x_label_formatter(&|x| {
            points
                .get(*x)
                .map(|point| point.year.to_string())
                .unwrap_or_default()
        })
        .y_label_formatter(&|y| format!("${:.0}B", y))
        .draw()
        .map_err(|e| e.to_string())?;

    chart
        .draw_series(points.iter().enumerate().map(|(i, point)| {
            Rectangle::new([(i, 0.0), (i + 1, point.market_billions)], BAR_COLOR.filled())
        }))
        .map_err(|e| e.to_string())?;

    root.present().map_err(|e| e.to_string())?;
    Ok(())
}

#[derive(Properties, PartialEq)]
pub struct GrowthChartProps {
    pub points: &'static [GrowthPoint],
}

#[function_component(GrowthChart)]
pub fn growth_chart(props: &GrowthChartProps) -> Html {
    let canvas_ref = use_node_ref();

    {
        let canvas_ref = canvas_ref.clone();
        let points = props.points;
        use_effect_with_deps(move |_| {
            if let Some(canvas) = canvas_ref.cast::<HtmlCanvasElement>() {
                canvas.set_width(600);
                canvas.set_height(320);
                if let Err(e) = draw_growth_chart(canvas, points) {
                    warn!("Could not draw market growth chart: {}", e);
                }
            }
            || ()
        }, ());
    }

    html! {
        <div class="growth-chart">
            <canvas
                ref={canvas_ref}
                width="600"
                height="320"
                style="max-width: 100%; height: auto;"
            />
        </div>
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn ceiling_leaves_headroom() {
        let points = [
            GrowthPoint { year: 2025, market: "$2.5B", market_billions: 2.5, phase: "Current Market" },
            GrowthPoint { year: 2030, market: "$8.2B", market_billions: 8.2, phase: "Market Maturity" },
        ];
        assert!((chart_ceiling(&points) - 9.02).abs() < 1e-9);
    }

    #[test]
    fn empty_chart_still_has_an_axis() {
        assert_eq!(chart_ceiling(&[]), 1.0);
    }
}
