//! # 可居住性图表
//!
//! 使用 `plotters` 绘制压力-温度平面上的大气剖面散点与微生物耐受矩形。
//!
//! ## 图表内容
//! - x 轴：压力 (atm，对数坐标)
//! - y 轴：温度 (°C)
//! - 每个天体一种颜色的散点
//! - 每种微生物一个红色耐受矩形，中心标注名称
//!
//! ## 依赖关系
//! - 被 `commands/habitability.rs` 调用
//! - 使用 `plotters` 渲染图表

use crate::error::Result;
use crate::models::{AtmosphericProfile, ExtremophileTolerance};
use crate::plot::{canvas_size, is_svg, plot_err};

use plotters::prelude::*;
use std::path::Path;

/// 按天体名称分组（保持首次出现顺序）
pub fn group_by_body(profiles: &[AtmosphericProfile]) -> Vec<(String, Vec<(f64, f64)>)> {
    let mut groups: Vec<(String, Vec<(f64, f64)>)> = Vec::new();

    for p in profiles {
        if !(p.pressure_atm > 0.0 && p.pressure_atm.is_finite() && p.temperature_c.is_finite()) {
            continue;
        }
        let point = (p.pressure_atm, p.temperature_c);
        match groups.iter_mut().find(|(name, _)| *name == p.name) {
            Some((_, points)) => points.push(point),
            None => groups.push((p.name.clone(), vec![point])),
        }
    }

    groups
}

/// 计算坐标范围，覆盖所有散点和耐受矩形
fn chart_bounds(
    groups: &[(String, Vec<(f64, f64)>)],
    tolerances: &[ExtremophileTolerance],
) -> ((f64, f64), (f64, f64)) {
    let mut xs: Vec<f64> = groups
        .iter()
        .flat_map(|(_, pts)| pts.iter().map(|(x, _)| *x))
        .collect();
    let mut ys: Vec<f64> = groups
        .iter()
        .flat_map(|(_, pts)| pts.iter().map(|(_, y)| *y))
        .collect();

    for t in tolerances {
        xs.extend([t.pressure_atm.min, t.pressure_atm.max]);
        ys.extend([t.temperature_c.min, t.temperature_c.max]);
    }

    let xs: Vec<f64> = xs.into_iter().filter(|x| *x > 0.0 && x.is_finite()).collect();
    let ys: Vec<f64> = ys.into_iter().filter(|y| y.is_finite()).collect();

    let x_min = xs.iter().copied().fold(f64::INFINITY, f64::min);
    let x_max = xs.iter().copied().fold(f64::NEG_INFINITY, f64::max);
    let y_min = ys.iter().copied().fold(f64::INFINITY, f64::min);
    let y_max = ys.iter().copied().fold(f64::NEG_INFINITY, f64::max);

    let (x_min, x_max) = if x_min.is_finite() && x_max.is_finite() {
        (x_min / 2.0, x_max * 2.0)
    } else {
        (1e-3, 1e3)
    };
    let (y_min, y_max) = if y_min.is_finite() && y_max.is_finite() {
        let margin = ((y_max - y_min).abs() * 0.1).max(5.0);
        (y_min - margin, y_max + margin)
    } else {
        (-100.0, 100.0)
    };

    ((x_min, x_max), (y_min, y_max))
}

/// 生成可居住性图表（PNG 或 SVG，按扩展名判断）
pub fn generate_habitability_plot(
    profiles: &[AtmosphericProfile],
    tolerances: &[ExtremophileTolerance],
    output_path: &Path,
    width: u32,
    height: u32,
) -> Result<()> {
    let (width, height) = canvas_size(Some(width), Some(height))?;
    if is_svg(output_path) {
        let root = SVGBackend::new(output_path, (width, height)).into_drawing_area();
        draw_habitability_chart(&root, profiles, tolerances)?;
        root.present()
            .map_err(plot_err)?;
    } else {
        let root = BitMapBackend::new(output_path, (width, height)).into_drawing_area();
        draw_habitability_chart(&root, profiles, tolerances)?;
        root.present()
            .map_err(plot_err)?;
    }
    Ok(())
}

fn draw_habitability_chart<DB: DrawingBackend>(
    root: &DrawingArea<DB, plotters::coord::Shift>,
    profiles: &[AtmosphericProfile],
    tolerances: &[ExtremophileTolerance],
) -> Result<()>
where
    DB::ErrorType: 'static,
{
    root.fill(&WHITE)
        .map_err(plot_err)?;

    let groups = group_by_body(profiles);
    let ((x_min, x_max), (y_min, y_max)) = chart_bounds(&groups, tolerances);

    let mut chart = ChartBuilder::on(root)
        .caption(
            "Atmospheric habitability for extremophile microorganisms",
            ("sans-serif", 24).into_font(),
        )
        .margin(20)
        .x_label_area_size(50)
        .y_label_area_size(60)
        .build_cartesian_2d((x_min..x_max).log_scale(), y_min..y_max)
        .map_err(plot_err)?;

    chart
        .configure_mesh()
        .x_desc("Pressure (atm)")
        .y_desc("Temperature (°C)")
        .x_label_formatter(&|x| format!("{:.0e}", x))
        .axis_desc_style(("sans-serif", 16))
        .draw()
        .map_err(plot_err)?;

    // 天体散点
    for (i, (name, points)) in groups.iter().enumerate() {
        let color = Palette99::pick(i).to_rgba();
        chart
            .draw_series(
                points
                    .iter()
                    .map(move |(x, y)| Circle::new((*x, *y), 4, color.filled())),
            )
            .map_err(plot_err)?
            .label(name.as_str())
            .legend(move |(x, y)| Circle::new((x + 10, y), 4, color.filled()));
    }

    // 耐受矩形
    let edge = RED.mix(0.5);
    for t in tolerances {
        let (p, temp) = (t.pressure_atm, t.temperature_c);
        if !(p.min > 0.0 && p.max.is_finite() && temp.min.is_finite() && temp.max.is_finite()) {
            continue;
        }

        chart
            .draw_series(std::iter::once(Rectangle::new(
                [(p.min, temp.min), (p.max, temp.max)],
                edge.stroke_width(1),
            )))
            .map_err(plot_err)?;

        chart
            .draw_series(std::iter::once(Text::new(
                t.name.clone(),
                (p.midpoint(), temp.midpoint()),
                ("sans-serif", 11).into_font().color(&BLACK),
            )))
            .map_err(plot_err)?;
    }

    chart
        .configure_series_labels()
        .position(SeriesLabelPosition::UpperRight)
        .background_style(&WHITE.mix(0.8))
        .border_style(&BLACK)
        .draw()
        .map_err(plot_err)?;

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn profile(name: &str, pressure: f64, temperature: f64) -> AtmosphericProfile {
        AtmosphericProfile {
            name: name.to_string(),
            altitude_km: 0.0,
            pressure_atm: pressure,
            temperature_c: temperature,
            humidity_pct: 50.0,
            ph: 7.0,
            xray_msv_per_year: 0.0,
            uv_w_per_m2: 0.0,
        }
    }

    #[test]
    fn test_group_by_body() {
        let profiles = vec![
            profile("Venus", 92.0, 464.0),
            profile("Earth", 1.0, 15.0),
            profile("Venus", 0.5, 27.0),
            // 对数坐标无法表示零压力
            profile("Mars", 0.0, -60.0),
        ];
        let groups = group_by_body(&profiles);
        assert_eq!(groups.len(), 2);
        assert_eq!(groups[0].0, "Venus");
        assert_eq!(groups[0].1, vec![(92.0, 464.0), (0.5, 27.0)]);
        assert_eq!(groups[1].0, "Earth");
    }

    #[test]
    fn test_chart_bounds_fallback() {
        let ((x0, x1), (y0, y1)) = chart_bounds(&[], &[]);
        assert!(x0 > 0.0 && x1 > x0);
        assert!(y1 > y0);
    }
}
