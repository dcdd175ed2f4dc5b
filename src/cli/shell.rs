//! # shell 子命令 CLI 定义
//!
//! 内置天体（Venus, Earth, Jupiter, Saturn）或自定义参数。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/shell.rs`

use clap::{Args, ValueEnum};
use std::path::PathBuf;

/// 图像输出格式
#[derive(Debug, Clone, Copy, ValueEnum, PartialEq, Eq, Default)]
pub enum ImageFormat {
    /// PNG image
    #[default]
    Png,
    /// SVG vector image
    Svg,
}

impl std::fmt::Display for ImageFormat {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ImageFormat::Png => write!(f, "png"),
            ImageFormat::Svg => write!(f, "svg"),
        }
    }
}

/// shell 子命令参数
#[derive(Args, Debug)]
pub struct ShellArgs {
    /// Preset bodies to model (venus, earth, jupiter, saturn); all presets if omitted
    #[arg(conflicts_with = "radius_km")]
    pub bodies: Vec<String>,

    /// Name of a custom body
    #[arg(long, requires = "radius_km")]
    pub name: Option<String>,

    /// Radius of a custom body (km)
    #[arg(long, requires = "surface_pressure")]
    pub radius_km: Option<f64>,

    /// Surface pressure of a custom body (Pa)
    #[arg(long, requires = "radius_km")]
    pub surface_pressure: Option<f64>,

    /// Atmospheric scale height of a custom rocky body (km)
    #[arg(long, requires = "radius_km", conflicts_with = "center_pressure")]
    pub scale_height_km: Option<f64>,

    /// Centre pressure of a custom gaseous body (Pa)
    #[arg(long, requires = "radius_km")]
    pub center_pressure: Option<f64>,

    /// Directory for the shell charts
    #[arg(short, long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Chart format
    #[arg(short, long, value_enum, default_value_t = ImageFormat::Png)]
    pub format: ImageFormat,

    /// Chart height in pixels; the colour bar adds to the width
    #[arg(long, default_value_t = 900)]
    pub size: u32,

    /// Skip chart generation
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,
}
