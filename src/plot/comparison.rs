//! # 温度对比图
//!
//! 每颗行星一个面板：水平线段表示温度范围，圆点表示平衡温度，
//! 两端和圆点处标注数值。附加说明（压力、紫外）写在面板左上角。
//!
//! ## 依赖关系
//! - 被 `commands/compare.rs` 调用
//! - 使用 `models/comparison.rs`

use super::{canvas_size, is_svg, plot_err, BLUE, GREEN, RED};
use crate::error::{ExobiomaError, Result};
use crate::models::TemperatureComparison;

use plotters::prelude::*;
use plotters::style::text_anchor::{HPos, Pos, VPos};
use std::path::Path;

const ORANGE: RGBColor = RGBColor(255, 165, 0);
const PURPLE: RGBColor = RGBColor(128, 0, 128);
const GOLD: RGBColor = RGBColor(255, 215, 0);

/// 配色方案
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonStyle {
    /// 蓝色估算范围，红色目录平衡温度
    Exoplanet,
    /// 每颗行星固定颜色，黄色平衡温度
    SolarSystem,
}

impl ComparisonStyle {
    pub fn range_color(&self, name: &str) -> RGBColor {
        match self {
            ComparisonStyle::Exoplanet => BLUE,
            ComparisonStyle::SolarSystem => match name {
                "Venus" => ORANGE,
                "Earth" => GREEN,
                "Mars" => RED,
                "Jupiter" => PURPLE,
                _ => BLUE,
            },
        }
    }

    fn marker_color(&self) -> RGBColor {
        match self {
            ComparisonStyle::Exoplanet => RED,
            ComparisonStyle::SolarSystem => GOLD,
        }
    }

    fn marker_label_color(&self) -> RGBColor {
        match self {
            ComparisonStyle::Exoplanet => RED,
            ComparisonStyle::SolarSystem => RGBColor(0, 0, 0),
        }
    }

    fn range_label(&self) -> &'static str {
        match self {
            ComparisonStyle::Exoplanet => "Estimated Temp Range",
            ComparisonStyle::SolarSystem => "Observed Temp Range",
        }
    }

    fn marker_label(&self) -> &'static str {
        match self {
            ComparisonStyle::Exoplanet => "Catalog Equilibrium Temp",
            ComparisonStyle::SolarSystem => "Equilibrium Temp",
        }
    }
}

/// 生成对比图，画布高度为 `panel_height × 行星数`
pub fn generate_comparison_plot(
    comparisons: &[TemperatureComparison],
    style: ComparisonStyle,
    output_path: &Path,
    width: u32,
    panel_height: u32,
) -> Result<()> {
    if comparisons.is_empty() {
        return Err(ExobiomaError::InvalidArgument(
            "no planets to compare".to_string(),
        ));
    }
    let panels = u32::try_from(comparisons.len()).ok();
    let (width, height) = canvas_size(
        Some(width),
        panels.and_then(|n| panel_height.checked_mul(n)),
    )?;

    if is_svg(output_path) {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_comparison_chart(&root, comparisons, style)?;
        root.present().map_err(plot_err)?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_comparison_chart(&root, comparisons, style)?;
        root.present().map_err(plot_err)?;
    }
    Ok(())
}

fn draw_comparison_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    comparisons: &[TemperatureComparison],
    style: ComparisonStyle,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let panels = root.split_evenly((comparisons.len(), 1));
    for (area, comparison) in panels.iter().zip(comparisons) {
        draw_panel(area, comparison, style)?;
    }
    Ok(())
}

fn draw_panel<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    c: &TemperatureComparison,
    style: ComparisonStyle,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let (x_min, x_max) = c.x_range();
    let color = style.range_color(&c.name);
    let marker = style.marker_color();

    let mut chart = ChartBuilder::on(area)
        .caption(&c.name, ("sans-serif", 20).into_font().color(&color))
        .margin(15)
        .x_label_area_size(40)
        .y_label_area_size(0)
        .build_cartesian_2d(x_min..x_max, -1.0..1.0)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .disable_y_mesh()
        .disable_y_axis()
        .x_labels(c.axis.map_or(10, |axis| axis.tick_count()))
        .x_label_formatter(&|v| format!("{:.0}", v))
        .x_desc("Temperature (K)")
        .axis_desc_style(("sans-serif", 14))
        .draw()
        .map_err(plot_err)?;

    // 温度范围
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(c.min_k, 0.0), (c.max_k, 0.0)],
            color.stroke_width(3),
        )))
        .map_err(plot_err)?
        .label(style.range_label())
        .legend(move |(x, y)| PathElement::new(vec![(x, y), (x + 20, y)], color.stroke_width(3)));

    // 平衡温度
    chart
        .draw_series(std::iter::once(Circle::new(
            (c.equilibrium_k, 0.0),
            6,
            marker.filled(),
        )))
        .map_err(plot_err)?
        .label(style.marker_label())
        .legend(move |(x, y)| Circle::new((x + 10, y), 4, marker.filled()));

    // 数值标注
    let font = ("sans-serif", 13).into_font();
    let labels = [
        (
            c.min_k,
            font.color(&color).pos(Pos::new(HPos::Right, VPos::Bottom)),
        ),
        (
            c.max_k,
            font.color(&color).pos(Pos::new(HPos::Left, VPos::Top)),
        ),
        (
            c.equilibrium_k,
            font.color(&style.marker_label_color())
                .pos(Pos::new(HPos::Center, VPos::Bottom)),
        ),
    ];
    for (value, text_style) in labels {
        chart
            .draw_series(std::iter::once(Text::new(
                format!("{:.0}", value),
                (value, 0.08),
                text_style,
            )))
            .map_err(plot_err)?;
    }

    for (i, note) in c.notes.iter().enumerate() {
        chart
            .draw_series(std::iter::once(Text::new(
                note.clone(),
                (x_min + (x_max - x_min) * 0.02, 0.85 - 0.2 * i as f64),
                ("sans-serif", 11).into_font().color(&BLACK),
            )))
            .map_err(plot_err)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.7))
        .border_style(&BLACK)
        .label_font(("sans-serif", 11))
        .draw()
        .map_err(plot_err)?;

    Ok(())
}
