//! # 潮汐锁定行星的昼夜温度
//!
//! ## 算法概述
//! 1. 由入射通量与反照率计算辐射平衡温度 T_eq
//! 2. 由行星质量、半径计算逃逸速度 v_esc
//! 3. 动态温室修正 c = 1 + Σ(gas) · α (T_eq / v_esc)^β
//! 4. 按热再分配效率 ε 拆分昼面 / 夜面温度
//! 5. 以 5% 相对标准差的正态分布各采样 N 次，再截断：
//!    昼面截断到 [0, 2000] K，夜面逐样本截断到 [0, 昼面同序号样本]
//!
//! ## 依赖关系
//! - 被 `physics/estimator.rs` 调用
//! - 使用 `rand_distr::Normal` 采样

use super::constants::{CH4_GREENHOUSE, CO2_GREENHOUSE, G, H2O_GREENHOUSE, SIGMA};
use super::SamplingError;
use crate::models::Range;

use rand::Rng;
use rand_distr::{Distribution, Normal};

/// 昼面温度上限 (K)
pub const MAX_DAY_TEMPERATURE: f64 = 2000.0;
/// 采样的相对标准差
pub const RELATIVE_SPREAD: f64 = 0.05;

/// 检测到的温室气体
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct GreenhouseGases {
    pub h2o: bool,
    pub co2: bool,
    pub ch4: bool,
}

impl GreenhouseGases {
    /// 已检测气体的贡献之和
    pub fn contribution(&self) -> f64 {
        let mut sum = 0.0;
        if self.h2o {
            sum += H2O_GREENHOUSE;
        }
        if self.co2 {
            sum += CO2_GREENHOUSE;
        }
        if self.ch4 {
            sum += CH4_GREENHOUSE;
        }
        sum
    }
}

/// 辐射平衡温度 (K)
///
/// `T_eq = (S (1 − A) / 4σ)^¼`，S 为入射通量 (W/m²)，A 为反照率
pub fn equilibrium_temperature(insolation: f64, albedo: f64) -> f64 {
    ((insolation * (1.0 - albedo)) / (4.0 * SIGMA)).powf(0.25)
}

/// 逃逸速度 (m/s)
pub fn escape_velocity(mass_kg: f64, radius_m: f64) -> f64 {
    (2.0 * G * mass_kg / radius_m).sqrt()
}

/// 温室修正因子
pub fn greenhouse_correction(
    temp_equilibrium: f64,
    escape_velocity: f64,
    contribution: f64,
    alpha: f64,
    beta: f64,
) -> f64 {
    let ghe_base = alpha * (temp_equilibrium / escape_velocity).powf(beta);
    1.0 + contribution * ghe_base
}

/// 温度模型参数
#[derive(Debug, Clone, Copy)]
pub struct TemperatureModel {
    pub albedo: f64,
    /// 昼夜热再分配效率 ε (0 = 无再分配)
    pub efficiency_factor: f64,
    pub alpha: f64,
    pub beta: f64,
}

/// 确定性的昼夜温度（采样前）
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct DayNightTemperature {
    pub equilibrium: f64,
    pub day: f64,
    pub night: f64,
}

impl TemperatureModel {
    pub fn day_night(
        &self,
        insolation: f64,
        mass_kg: f64,
        radius_m: f64,
        greenhouse: GreenhouseGases,
    ) -> DayNightTemperature {
        let t_eq = equilibrium_temperature(insolation, self.albedo);
        let v_esc = escape_velocity(mass_kg, radius_m);
        let correction =
            greenhouse_correction(t_eq, v_esc, greenhouse.contribution(), self.alpha, self.beta);

        let eps = self.efficiency_factor;
        let day = t_eq * ((2.0 * (1.0 - self.albedo)) / (2.0 - eps)).powf(0.25) * correction;
        let night = t_eq * (eps / (2.0 - eps)).powf(0.25) * correction;

        DayNightTemperature {
            equilibrium: t_eq,
            day,
            night,
        }
    }
}

/// 采样得到的昼夜温度分布
#[derive(Debug, Clone)]
pub struct TemperatureDistribution {
    pub equilibrium: f64,
    pub day: Vec<f64>,
    pub night: Vec<f64>,
}

impl TemperatureDistribution {
    /// (夜面最小值, 昼面最大值)
    pub fn range(&self) -> Option<Range> {
        let min = Range::of_samples(&self.night)?.min;
        let max = Range::of_samples(&self.day)?.max;
        Some(Range::new(min, max))
    }
}

/// 围绕确定性温度进行采样并截断
pub fn sample_temperatures<R: Rng + ?Sized>(
    rng: &mut R,
    temperatures: DayNightTemperature,
    num_samples: usize,
) -> Result<TemperatureDistribution, SamplingError> {
    SamplingError::check("day temperature", temperatures.day)?;
    SamplingError::check("night temperature", temperatures.night)?;

    let day_dist = Normal::new(temperatures.day, temperatures.day * RELATIVE_SPREAD)?;
    let night_dist = Normal::new(temperatures.night, temperatures.night * RELATIVE_SPREAD)?;

    let day: Vec<f64> = (0..num_samples)
        .map(|_| day_dist.sample(rng).clamp(0.0, MAX_DAY_TEMPERATURE))
        .collect();
    let night_raw: Vec<f64> = (0..num_samples).map(|_| night_dist.sample(rng)).collect();

    // 夜面温度不能高于同一样本的昼面温度
    let night = night_raw
        .into_iter()
        .zip(&day)
        .map(|(n, d)| n.max(0.0).min(*d))
        .collect();

    Ok(TemperatureDistribution {
        equilibrium: temperatures.equilibrium,
        day,
        night,
    })
}
