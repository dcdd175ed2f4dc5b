//! # compare 子命令 CLI 定义
//!
//! 两种模式：
//! - 系外行星：目录平衡温度 vs 估算温度范围
//! - `--solar-system`：内置太阳系参考数据，三组图写入 `--output-dir`
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/compare.rs`

use super::parse_delimiter;
use super::shell::ImageFormat;

use clap::Args;
use std::path::PathBuf;

/// compare 子命令参数
#[derive(Args, Debug, Clone)]
pub struct CompareArgs {
    /// Plot the built-in solar system reference table
    #[arg(long, default_value_t = false, conflicts_with_all = ["catalog", "planets", "output"])]
    pub solar_system: bool,

    /// Exoplanet catalog providing pl_eqt
    #[arg(long, required_unless_present = "solar_system")]
    pub catalog: Option<PathBuf>,

    /// Field delimiter of the catalog (single character or 'tab')
    #[arg(short, long, default_value = "tab", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Estimate CSV written by the estimate command
    #[arg(long, default_value = "exoplanet_results.csv")]
    pub results: PathBuf,

    /// Comma separated planet names to compare
    #[arg(long, value_delimiter = ',', required_unless_present = "solar_system")]
    pub planets: Vec<String>,

    /// Output chart for the exoplanet comparison (.png or .svg)
    #[arg(short, long, default_value = "exoplanet_comparison.png")]
    pub output: PathBuf,

    /// Directory for the solar system charts
    #[arg(long, default_value = ".")]
    pub output_dir: PathBuf,

    /// Format of the solar system charts
    #[arg(short, long, value_enum, default_value_t = ImageFormat::Png)]
    pub format: ImageFormat,

    /// Figure width in pixels
    #[arg(long, default_value_t = 700)]
    pub width: u32,

    /// Height of each planet panel in pixels
    #[arg(long, default_value_t = 260)]
    pub panel_height: u32,
}
