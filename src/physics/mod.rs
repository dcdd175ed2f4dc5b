//! # 物理模型模块
//!
//! ## 子模块
//! - `constants` - 物理常数与默认参数
//! - `temperature` - 昼夜温度与温室修正
//! - `pressure` - 表面压力与标高
//! - `radiation` - 恒星 X 射线 / 紫外通量
//! - `estimator` - 单颗系外行星的环境估算
//! - `shell` - 宜居压力壳层
//! - `export` - 估算结果 CSV 读写
//!
//! ## 依赖关系
//! - 被 `commands/estimate.rs`, `commands/shell.rs`, `commands/compare.rs` 使用
//! - 使用 `models/exoplanet.rs`

pub mod constants;
pub mod estimator;
pub mod export;
pub mod pressure;
pub mod radiation;
pub mod shell;
pub mod temperature;

pub use estimator::{Estimation, EstimatorConfig, PlanetaryEnvironmentEstimator};
pub use shell::{BodyKind, HabitableShell, ShellBody};

use thiserror::Error;

/// 分布构造失败
#[derive(Error, Debug)]
pub enum SamplingError {
    #[error("{label} must be a finite non-negative number, got {value}")]
    InvalidParameter { label: &'static str, value: f64 },

    #[error("invalid normal distribution: {0}")]
    Normal(#[from] rand_distr::NormalError),
}

impl SamplingError {
    /// 检查分布参数：有限且非负
    pub fn check(label: &'static str, value: f64) -> Result<(), SamplingError> {
        if value.is_finite() && value >= 0.0 {
            Ok(())
        } else {
            Err(SamplingError::InvalidParameter { label, value })
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_check_rejects_non_finite_and_negative() {
        assert!(SamplingError::check("x", 0.0).is_ok());
        assert!(SamplingError::check("x", 12.5).is_ok());
        assert!(SamplingError::check("x", -1.0).is_err());
        assert!(SamplingError::check("x", f64::NAN).is_err());
        assert!(SamplingError::check("x", f64::INFINITY).is_err());
    }
}
