//! # 绘图公共模块
//!
//! ## 子模块
//! - `comparison` - 温度范围对比图
//! - `shell` - 宜居壳层剖面图
//!
//! 本文件提供后端选择、颜色映射与归一化。
//!
//! ## 依赖关系
//! - 被 `habitability/plot.rs` 与 `commands/` 使用
//! - 使用 `plotters`

pub mod comparison;
pub mod shell;

pub use comparison::generate_comparison_plot;
pub use shell::generate_shell_plot;

use crate::error::{ExobiomaError, Result};

use plotters::style::RGBColor;
use std::fmt::Debug;
use std::path::Path;

/// 输出扩展名为 `.svg` 时使用 SVG 后端，否则输出位图
pub fn is_svg(path: &Path) -> bool {
    path.extension()
        .and_then(|e| e.to_str())
        .map(|e| e.eq_ignore_ascii_case("svg"))
        .unwrap_or(false)
}

/// 校验画布尺寸；`None` 表示计算时溢出
pub(crate) fn canvas_size(width: Option<u32>, height: Option<u32>) -> Result<(u32, u32)> {
    match (width, height) {
        (Some(w), Some(h)) if w > 0 && h > 0 => Ok((w, h)),
        (Some(_), Some(_)) => Err(ExobiomaError::InvalidArgument(
            "chart width and height must be greater than zero".to_string(),
        )),
        _ => Err(ExobiomaError::InvalidArgument(
            "chart size is too large".to_string(),
        )),
    }
}

/// plotters 错误转换
pub(crate) fn plot_err<E: Debug>(e: E) -> ExobiomaError {
    ExobiomaError::PlotError(format!("{:?}", e))
}

// ─────────────────────────────────────────────────────────────
// 颜色映射
// ─────────────────────────────────────────────────────────────

pub const BLUE: RGBColor = RGBColor(0, 0, 255);
pub const GREEN: RGBColor = RGBColor(0, 128, 0);
pub const RED: RGBColor = RGBColor(255, 0, 0);
pub const LIME_GREEN: RGBColor = RGBColor(50, 205, 50);
pub const SADDLE_BROWN: RGBColor = RGBColor(139, 69, 19);

/// 等距分段线性颜色映射
#[derive(Debug, Clone)]
pub struct ColorMap {
    stops: Vec<RGBColor>,
}

impl ColorMap {
    pub fn new(stops: Vec<RGBColor>) -> Self {
        Self { stops }
    }

    /// 蓝 → 绿 → 红
    pub fn blue_green_red() -> Self {
        Self::new(vec![BLUE, GREEN, RED])
    }

    /// 蓝 → 绿
    pub fn blue_green() -> Self {
        Self::new(vec![BLUE, GREEN])
    }

    /// t ∈ [0, 1] 处的颜色，超出范围取端点
    pub fn at(&self, t: f64) -> RGBColor {
        match self.stops.len() {
            0 => RGBColor(0, 0, 0),
            1 => self.stops[0],
            n => {
                let t = if t.is_nan() { 0.0 } else { t.clamp(0.0, 1.0) };
                let pos = t * (n - 1) as f64;
                let i = (pos.floor() as usize).min(n - 2);
                let frac = pos - i as f64;
                let (a, b) = (self.stops[i], self.stops[i + 1]);
                let lerp = |x: u8, y: u8| (x as f64 + (y as f64 - x as f64) * frac).round() as u8;
                RGBColor(lerp(a.0, b.0), lerp(a.1, b.1), lerp(a.2, b.2))
            }
        }
    }
}

/// 把数值归一化到 [0, 1]
///
/// 中心值严格位于范围内时用双斜率归一化（中心映射到 0.5），否则线性。
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Normalization {
    TwoSlope { vmin: f64, vcenter: f64, vmax: f64 },
    Linear { vmin: f64, vmax: f64 },
}

impl Normalization {
    pub fn centered(vmin: f64, vcenter: f64, vmax: f64) -> Self {
        if vmin < vcenter && vcenter < vmax {
            Normalization::TwoSlope {
                vmin,
                vcenter,
                vmax,
            }
        } else {
            Normalization::Linear { vmin, vmax }
        }
    }

    pub fn apply(&self, v: f64) -> f64 {
        let t = match *self {
            Normalization::TwoSlope {
                vmin,
                vcenter,
                vmax,
            } => {
                if v < vcenter {
                    0.5 * (v - vmin) / (vcenter - vmin)
                } else {
                    0.5 + 0.5 * (v - vcenter) / (vmax - vcenter)
                }
            }
            Normalization::Linear { vmin, vmax } => {
                if vmax > vmin {
                    (v - vmin) / (vmax - vmin)
                } else {
                    0.0
                }
            }
        };
        t.clamp(0.0, 1.0)
    }

    pub fn bounds(&self) -> (f64, f64) {
        match *self {
            Normalization::TwoSlope { vmin, vmax, .. } | Normalization::Linear { vmin, vmax } => {
                (vmin, vmax)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_svg() {
        assert!(is_svg(Path::new("out/chart.svg")));
        assert!(is_svg(Path::new("chart.SVG")));
        assert!(!is_svg(Path::new("chart.png")));
        assert!(!is_svg(Path::new("chart")));
    }

    #[test]
    fn test_canvas_size() {
        assert_eq!(canvas_size(Some(700), Some(520)).unwrap(), (700, 520));
        assert!(canvas_size(Some(0), Some(520)).is_err());
        assert!(canvas_size(Some(700), Some(0)).is_err());
        assert!(canvas_size(None, Some(520)).is_err());
        assert!(canvas_size(Some(700), u32::MAX.checked_mul(2)).is_err());
    }

    #[test]
    fn test_colormap_stops() {
        let cmap = ColorMap::blue_green_red();
        assert_eq!(cmap.at(0.0), BLUE);
        assert_eq!(cmap.at(0.5), GREEN);
        assert_eq!(cmap.at(1.0), RED);
        assert_eq!(cmap.at(-3.0), BLUE);
        assert_eq!(cmap.at(7.0), RED);
        assert_eq!(cmap.at(0.25), RGBColor(0, 64, 128));
    }

    #[test]
    fn test_two_slope_normalization() {
        let norm = Normalization::centered(-10.0, 0.0, 2.0);
        assert!(matches!(norm, Normalization::TwoSlope { .. }));
        assert_eq!(norm.apply(-10.0), 0.0);
        assert_eq!(norm.apply(-5.0), 0.25);
        assert_eq!(norm.apply(0.0), 0.5);
        assert_eq!(norm.apply(1.0), 0.75);
        assert_eq!(norm.apply(2.0), 1.0);
        assert_eq!(norm.apply(5.0), 1.0);
    }

    #[test]
    fn test_linear_fallback() {
        // 范围不跨越中心
        let norm = Normalization::centered(-10.0, 0.0, 0.0);
        assert!(matches!(norm, Normalization::Linear { .. }));
        assert_eq!(norm.apply(-5.0), 0.5);
        assert_eq!(Normalization::centered(1.0, 0.0, 1.0).apply(1.0), 0.0);
    }
}
