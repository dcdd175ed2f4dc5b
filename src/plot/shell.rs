//! # 宜居壳层剖面图
//!
//! 以同心圆表示大气层，颜色对应 log10 压力 (atm)；
//! 绿色虚线圆标出宜居壳层的内外边界，右侧为颜色条。
//!
//! ## 依赖关系
//! - 被 `commands/shell.rs` 调用
//! - 使用 `physics/shell.rs` 的 HabitableShell

use super::{canvas_size, is_svg, plot_err, ColorMap, Normalization, LIME_GREEN, SADDLE_BROWN};
use crate::error::Result;
use crate::physics::shell::{log_pressure_atm, HabitableShell};

use plotters::prelude::*;
use std::f64::consts::PI;
use std::path::Path;

/// 最多绘制的大气层数
const MAX_RINGS: usize = 400;
const CIRCLE_SEGMENTS: usize = 180;
const DASH_COUNT: usize = 60;
/// 视野半宽（相对半径）
const VIEW_EXTENT: f64 = 1.2;

/// 地球用蓝 → 绿，其余天体用蓝 → 绿 → 红
pub fn shell_colormap(body_name: &str) -> ColorMap {
    if body_name.eq_ignore_ascii_case("Earth") {
        ColorMap::blue_green()
    } else {
        ColorMap::blue_green_red()
    }
}

/// 以原点为中心的圆周采样点（首尾闭合）
fn circle_points(radius: f64, segments: usize) -> Vec<(f64, f64)> {
    (0..=segments)
        .map(|i| {
            let theta = 2.0 * PI * i as f64 / segments as f64;
            (radius * theta.cos(), radius * theta.sin())
        })
        .collect()
}

/// 虚线圆：每段占半个周期
fn dashed_circle(radius: f64) -> Vec<Vec<(f64, f64)>> {
    let period = 2.0 * PI / DASH_COUNT as f64;
    (0..DASH_COUNT)
        .map(|k| {
            let start = period * k as f64;
            (0..4)
                .map(|j| {
                    let theta = start + period * 0.5 * j as f64 / 3.0;
                    (radius * theta.cos(), radius * theta.sin())
                })
                .collect()
        })
        .collect()
}

/// 比例尺长度：视野宽度 1/5 向下取整到 10 的幂 (m)
pub fn scale_bar_length(radius_m: f64) -> f64 {
    let span = 2.0 * VIEW_EXTENT * radius_m / 5.0;
    10f64.powf(span.log10().floor())
}

/// 生成壳层图
pub fn generate_shell_plot(
    shell: &HabitableShell,
    colormap: &ColorMap,
    output_path: &Path,
    size: u32,
) -> Result<()> {
    let (width, size) = canvas_size(size.checked_add(size / 6), Some(size))?;
    if is_svg(output_path) {
        let root = SVGBackend::new(output_path, (width, size)).into_drawing_area();
        draw_shell_chart(&root, shell, colormap)?;
        root.present().map_err(plot_err)?;
    } else {
        let root = BitMapBackend::new(output_path, (width, size)).into_drawing_area();
        draw_shell_chart(&root, shell, colormap)?;
        root.present().map_err(plot_err)?;
    }
    Ok(())
}

fn draw_shell_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    shell: &HabitableShell,
    colormap: &ColorMap,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE).map_err(plot_err)?;

    let (w, _) = root.dim_in_pixel();
    let (left, right) = root.split_horizontally(w * 6 / 7);

    let (vmin, vmax) = shell.log_pressure_range_atm();
    let norm = Normalization::centered(vmin, 0.0, vmax);

    draw_rings(&left, shell, colormap, &norm)?;
    draw_colorbar(&right, colormap, &norm)?;
    Ok(())
}

fn draw_rings<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    shell: &HabitableShell,
    colormap: &ColorMap,
    norm: &Normalization,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let r_planet = shell.body.radius_m;
    let extent = VIEW_EXTENT * r_planet;

    let mut chart = ChartBuilder::on(area)
        .caption(&shell.body.name, ("sans-serif", 26).into_font())
        .margin(20)
        .build_cartesian_2d(-extent..extent, -extent..extent)
        .map_err(plot_err)?;

    if shell.body.is_rocky() {
        chart
            .draw_series(std::iter::once(Polygon::new(
                circle_points(r_planet, CIRCLE_SEGMENTS),
                SADDLE_BROWN.filled(),
            )))
            .map_err(plot_err)?;
    }

    // 大气层
    let layers: Vec<(f64, f64)> = shell.visible_layers().collect();
    let stride = (layers.len() / MAX_RINGS).max(1);
    chart
        .draw_series(layers.iter().step_by(stride).map(|(r, p)| {
            let color = colormap.at(norm.apply(log_pressure_atm(*p)));
            PathElement::new(circle_points(*r, CIRCLE_SEGMENTS), color.stroke_width(2))
        }))
        .map_err(plot_err)?;

    // 壳层边界
    for radius in [shell.inner_radius_m, shell.outer_radius_m] {
        chart
            .draw_series(
                dashed_circle(radius)
                    .into_iter()
                    .map(|dash| PathElement::new(dash, LIME_GREEN.stroke_width(2))),
            )
            .map_err(plot_err)?;
    }

    // 标注
    let label_style = ("sans-serif", 15).into_font().color(&BLACK);
    let annotations = [
        (
            format!("Shell thickness: {:.2} km", shell.thickness_m() / 1000.0),
            (-0.95 * extent, -0.85 * extent),
        ),
        (
            format!("Shell volume: {:.2e} km³", shell.volume_km3()),
            (-0.95 * extent, -0.93 * extent),
        ),
        (
            format!("Radius: {:.0} km", r_planet / 1000.0),
            (0.55 * extent, 0.93 * extent),
        ),
    ];
    for (text, pos) in annotations {
        chart
            .draw_series(std::iter::once(Text::new(text, pos, label_style.clone())))
            .map_err(plot_err)?;
    }

    // 比例尺
    let scale = scale_bar_length(r_planet);
    let (x0, y0) = (0.5 * extent, -0.9 * extent);
    chart
        .draw_series(std::iter::once(PathElement::new(
            vec![(x0, y0), (x0 + scale, y0)],
            BLACK.stroke_width(2),
        )))
        .map_err(plot_err)?;
    chart
        .draw_series(std::iter::once(Text::new(
            format!("{:.0} km", scale / 1000.0),
            (x0, y0 - 0.03 * extent),
            label_style,
        )))
        .map_err(plot_err)?;

    Ok(())
}

fn draw_colorbar<DB: DrawingBackend>(
    area: &DrawingArea<DB, plotters::coord::Shift>,
    colormap: &ColorMap,
    norm: &Normalization,
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    let (vmin, vmax) = norm.bounds();
    let (vmin, vmax) = if vmax > vmin {
        (vmin, vmax)
    } else {
        (vmin - 1.0, vmax + 1.0)
    };

    let mut chart = ChartBuilder::on(area)
        .margin_top(60)
        .margin_bottom(60)
        .margin_right(10)
        .y_label_area_size(55)
        .build_cartesian_2d(0.0..1.0, vmin..vmax)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .disable_mesh()
        .disable_x_axis()
        .y_desc("Log Pressure (atm)")
        .y_label_formatter(&|v| format!("{:.0}", v))
        .draw()
        .map_err(plot_err)?;

    let steps = 200;
    let dv = (vmax - vmin) / steps as f64;
    chart
        .draw_series((0..steps).map(|i| {
            let v = vmin + dv * i as f64;
            let color = colormap.at(norm.apply(v + dv / 2.0));
            Rectangle::new([(0.0, v), (1.0, v + dv)], color.filled())
        }))
        .map_err(plot_err)?;

    Ok(())
}
