//! # match 子命令 CLI 定义
//!
//! 读取大气剖面表与极端微生物耐受表，输出每个组合的判定结果。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/habitability.rs`

use super::parse_delimiter;

use clap::Args;
use std::path::PathBuf;

/// match 子命令参数
#[derive(Args, Debug)]
pub struct MatchArgs {
    /// Atmospheric profile table (one row per body and altitude)
    pub atmosphere: PathBuf,

    /// Extremophile tolerance table (one row per organism)
    pub extremophiles: PathBuf,

    /// Field delimiter of both input tables (single character or 'tab')
    #[arg(short, long, default_value = ",", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Filename for the verdict CSV
    #[arg(long, default_value = "exobioma_results.csv")]
    pub output_csv: PathBuf,

    /// Filename for the habitability chart (.png or .svg)
    #[arg(long, default_value = "exobioma_graph.png")]
    pub output_plot: PathBuf,

    /// Skip chart generation
    #[arg(long, default_value_t = false)]
    pub no_plot: bool,

    /// Figure width in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 1400)]
    pub width: u32,

    /// Figure height in pixels (for PNG) or points (for SVG)
    #[arg(long, default_value_t = 900)]
    pub height: u32,
}
