//! # estimate 子命令 CLI 定义
//!
//! 对系外行星目录逐行估算温度、压力与高能辐射范围。
//!
//! ## 依赖关系
//! - 被 `cli/mod.rs` 使用
//! - 参数传递给 `commands/estimate.rs`

use super::parse_delimiter;
use crate::physics::EstimatorConfig;

use clap::Args;
use std::path::PathBuf;

/// estimate 子命令参数
#[derive(Args, Debug)]
pub struct EstimateArgs {
    /// Exoplanet catalog (NASA Exoplanet Archive layout, '#' comment lines allowed)
    pub catalog: PathBuf,

    /// Field delimiter of the catalog (single character or 'tab')
    #[arg(short, long, default_value = "tab", value_parser = parse_delimiter)]
    pub delimiter: u8,

    /// Filename for the estimate CSV
    #[arg(short, long, default_value = "exoplanet_results.csv")]
    pub output: PathBuf,

    /// Random seed for reproducible sampling (random if omitted)
    #[arg(long)]
    pub seed: Option<u64>,

    /// Number of samples drawn per distribution
    #[arg(long, default_value_t = 1000)]
    pub samples: usize,

    /// Bond albedo used for the equilibrium temperature
    #[arg(long, default_value_t = 0.3)]
    pub albedo: f64,

    /// Day-night heat redistribution efficiency (0 = none, 1 = full)
    #[arg(long, default_value_t = 0.5)]
    pub efficiency: f64,

    /// Greenhouse correction scale factor
    #[arg(long, default_value_t = crate::physics::constants::GHE_ALPHA)]
    pub ghe_alpha: f64,

    /// Greenhouse correction exponent
    #[arg(long, default_value_t = crate::physics::constants::GHE_BETA)]
    pub ghe_beta: f64,

    /// Log-space standard deviation of the surface pressure distribution
    #[arg(long, default_value_t = 2.0)]
    pub pressure_sigma: f64,

    /// Number of parallel jobs (0 = all cores)
    #[arg(short, long, default_value_t = 0)]
    pub jobs: usize,

    /// Number of planets to print in the summary table
    #[arg(long, default_value_t = 10)]
    pub top_n: usize,
}

impl EstimateArgs {
    /// 转换为估算器配置
    pub fn config(&self) -> EstimatorConfig {
        EstimatorConfig {
            albedo: self.albedo,
            efficiency_factor: self.efficiency,
            ghe_alpha: self.ghe_alpha,
            ghe_beta: self.ghe_beta,
            samples: self.samples,
            pressure_log_sigma: self.pressure_sigma,
        }
    }
}
