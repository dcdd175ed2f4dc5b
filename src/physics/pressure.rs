//! # 表面压力分布
//!
//! ## 算法概述
//! 1. 表面重力 g = GM/R²，标高 H = k_B T_eq / (2 m_H g)
//! 2. 以 1 bar 为中心、固定对数离散度的对数正态分布采样 N 次 (Pa)
//! 3. 乘以 g / g⊕，换算为 bar，并截断到 [1e-12, 1e4] bar
//!
//! ## 依赖关系
//! - 被 `physics/estimator.rs` 调用
//! - 使用 `rand_distr::LogNormal` 采样

use super::constants::{EARTH_GRAVITY, G, K_B, M_H, PA_PER_BAR};
use super::SamplingError;
use crate::models::Range;

use rand::Rng;
use rand_distr::{Distribution, LogNormal};

/// 最低压力 (bar)：1 皮巴
pub const MIN_PRESSURE_BAR: f64 = 1e-12;
/// 最高压力 (bar)
pub const MAX_PRESSURE_BAR: f64 = 1e4;
/// 对数正态分布的中心 (Pa)
pub const BASE_PRESSURE_PA: f64 = 1e5;

/// 表面重力加速度 (m/s²)
pub fn surface_gravity(mass_kg: f64, radius_m: f64) -> f64 {
    G * mass_kg / (radius_m * radius_m)
}

/// 大气标高 (m)
pub fn scale_height(temp_equilibrium: f64, gravity: f64) -> f64 {
    K_B * temp_equilibrium / (2.0 * M_H * gravity)
}

/// 采样得到的压力分布
#[derive(Debug, Clone)]
pub struct PressureDistribution {
    /// 压力样本 (bar)
    pub samples: Vec<f64>,
    /// 标高 (m)
    pub scale_height: f64,
}

impl PressureDistribution {
    pub fn range(&self) -> Option<Range> {
        Range::of_samples(&self.samples)
    }
}

/// 压力采样
pub fn sample_pressure<R: Rng + ?Sized>(
    rng: &mut R,
    mass_kg: f64,
    radius_m: f64,
    temp_equilibrium: f64,
    log_sigma: f64,
    num_samples: usize,
) -> Result<PressureDistribution, SamplingError> {
    let gravity = surface_gravity(mass_kg, radius_m);
    SamplingError::check("surface gravity", gravity)?;
    SamplingError::check("pressure dispersion", log_sigma)?;

    let height = scale_height(temp_equilibrium, gravity);
    let gravity_factor = gravity / EARTH_GRAVITY;

    let dist = LogNormal::new(BASE_PRESSURE_PA.ln(), log_sigma)?;
    let samples = (0..num_samples)
        .map(|_| {
            let pa = dist.sample(rng) * gravity_factor;
            (pa / PA_PER_BAR).clamp(MIN_PRESSURE_BAR, MAX_PRESSURE_BAR)
        })
        .collect();

    Ok(PressureDistribution {
        samples,
        scale_height: height,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::constants::{EARTH_MASS, EARTH_RADIUS};
    use approx::assert_relative_eq;
    use rand::SeedableRng;
    use rand_chacha::ChaCha8Rng;

    #[test]
    fn test_earth_gravity() {
        assert_relative_eq!(
            surface_gravity(EARTH_MASS, EARTH_RADIUS),
            9.82,
            max_relative = 1e-2
        );
    }

    #[test]
    fn test_scale_height() {
        // 纯氢近似下 H ≈ k_B T / (2 m_H g)
        let h = scale_height(255.0, 9.82);
        assert_relative_eq!(h, 1.380649e-23 * 255.0 / (2.0 * 1.6735575e-27 * 9.82));
        assert!(h > 100_000.0 && h < 120_000.0);
    }

    #[test]
    fn test_samples_within_bounds_for_extreme_gravity() {
        let mut rng = ChaCha8Rng::seed_from_u64(1);
        // 极小和极大重力
        for (mass, radius) in [(1e10, EARTH_RADIUS), (EARTH_MASS * 1e6, 1e3)] {
            let dist = sample_pressure(&mut rng, mass, radius, 255.0, 2.0, 1000).unwrap();
            assert_eq!(dist.samples.len(), 1000);
            for p in &dist.samples {
                assert!((MIN_PRESSURE_BAR..=MAX_PRESSURE_BAR).contains(p), "{}", p);
            }
        }
    }

    #[test]
    fn test_earth_median_near_one_bar() {
        let mut rng = ChaCha8Rng::seed_from_u64(2024);
        let dist = sample_pressure(&mut rng, EARTH_MASS, EARTH_RADIUS, 255.0, 2.0, 4001).unwrap();
        let mut sorted = dist.samples.clone();
        sorted.sort_by(|a, b| a.partial_cmp(b).unwrap());
        let median = sorted[sorted.len() / 2];
        // 中位数 ≈ 1 bar × g/g⊕；log 空间标准误约 0.04
        assert!(median > 0.8 && median < 1.25, "median = {}", median);
    }

    #[test]
    fn test_range_reports_min_max() {
        let mut rng = ChaCha8Rng::seed_from_u64(5);
        let dist = sample_pressure(&mut rng, EARTH_MASS, EARTH_RADIUS, 255.0, 2.0, 200).unwrap();
        let range = dist.range().unwrap();
        assert!(range.min <= range.max);
        assert!(dist.samples.iter().all(|p| *p >= range.min && *p <= range.max));
    }

    #[test]
    fn test_zero_radius_is_error() {
        let mut rng = ChaCha8Rng::seed_from_u64(0);
        assert!(sample_pressure(&mut rng, EARTH_MASS, 0.0, 255.0, 2.0, 10).is_err());
    }
}
