//! # 行星环境估算器
//!
//! 对单条系外行星记录依次计算：昼夜温度分布、表面压力分布、
//! 行星处恒星 X 射线 / 紫外通量，并把分布归约为 (min, max)。
//!
//! ## 退化输入处理
//! - 质量 / 半径 / 入射通量无法使用（NaN、非正、无法解析）：
//!   输出一行所有范围为空的结果，行星仍保留在结果表中
//! - 其它计算错误（恒星参数无法解析、分布参数非有限等）：整条记录跳过
//!
//! 两种处理方式不一致，保持原有行为，未经确认不要合并。
//!
//! ## 随机源
//! 由调用方注入任意 `rand::Rng`，测试可用固定种子得到确定结果。
//!
//! ## 依赖关系
//! - 被 `commands/estimate.rs` 调用
//! - 使用 `physics/temperature.rs`, `physics/pressure.rs`, `physics/radiation.rs`
//! - 使用 `models/exoplanet.rs`

use super::constants::{
    DEFAULT_SPECTRAL_TYPE, DEFAULT_STELLAR_MASS, DEFAULT_STELLAR_METALLICITY,
    DEFAULT_STELLAR_TEMP, EARTH_MASS, EARTH_RADIUS, GHE_ALPHA, GHE_BETA, SOLAR_CONSTANT,
};
use super::pressure::sample_pressure;
use super::radiation::estimate_xray_uv_luminosity;
use super::temperature::{sample_temperatures, GreenhouseGases, TemperatureModel};
use crate::error::{ExobiomaError, Result};
use crate::models::{ExoplanetRecord, PlanetaryEstimate, Range, Reading};

use rand::Rng;

/// 估算器配置
#[derive(Debug, Clone, Copy)]
pub struct EstimatorConfig {
    /// Bond 反照率
    pub albedo: f64,
    /// 昼夜热再分配效率 ε ∈ [0, 1]
    pub efficiency_factor: f64,
    pub ghe_alpha: f64,
    pub ghe_beta: f64,
    /// 每个分布的采样数
    pub samples: usize,
    /// 压力对数正态分布的 σ
    pub pressure_log_sigma: f64,
}

impl Default for EstimatorConfig {
    fn default() -> Self {
        EstimatorConfig {
            albedo: 0.3,
            efficiency_factor: 0.5,
            ghe_alpha: GHE_ALPHA,
            ghe_beta: GHE_BETA,
            samples: 1000,
            pressure_log_sigma: 2.0,
        }
    }
}

impl EstimatorConfig {
    /// 检查参数取值
    pub fn validate(&self) -> Result<()> {
        if !(0.0..1.0).contains(&self.albedo) {
            return Err(ExobiomaError::InvalidArgument(format!(
                "albedo must be in [0, 1), got {}",
                self.albedo
            )));
        }
        if !(0.0..=1.0).contains(&self.efficiency_factor) {
            return Err(ExobiomaError::InvalidArgument(format!(
                "efficiency factor must be in [0, 1], got {}",
                self.efficiency_factor
            )));
        }
        if self.samples == 0 {
            return Err(ExobiomaError::InvalidArgument(
                "number of samples must be at least 1".to_string(),
            ));
        }
        if !(self.pressure_log_sigma.is_finite() && self.pressure_log_sigma >= 0.0) {
            return Err(ExobiomaError::InvalidArgument(format!(
                "pressure dispersion must be a non-negative number, got {}",
                self.pressure_log_sigma
            )));
        }
        Ok(())
    }

    fn temperature_model(&self) -> TemperatureModel {
        TemperatureModel {
            albedo: self.albedo,
            efficiency_factor: self.efficiency_factor,
            alpha: self.ghe_alpha,
            beta: self.ghe_beta,
        }
    }
}

/// 解析并补全默认值后的输入（SI 单位）
#[derive(Debug, Clone, PartialEq)]
pub struct PlanetInputs {
    pub mass_kg: f64,
    pub radius_m: f64,
    /// 入射通量 (W/m²)
    pub insolation: f64,
    pub stellar_temp: f64,
    pub metallicity: f64,
    /// 恒星质量 (M☉)
    pub stellar_mass: f64,
    pub spectral_type: String,
    pub greenhouse: GreenhouseGases,
}

/// 行星参数：缺失用默认值；存在但不可用返回 None
fn planet_quantity(reading: &Reading, default: f64, unit: f64) -> Option<f64> {
    match reading {
        Reading::Missing => Some(default),
        Reading::Value(v) if v.is_finite() && *v > 0.0 => Some(v * unit),
        _ => None,
    }
}

/// 恒星参数：缺失或 NaN 用默认值；无法解析或无穷大为计算错误
fn stellar_quantity(name: &str, field: &str, reading: &Reading, default: f64) -> Result<f64> {
    match reading {
        Reading::Missing => Ok(default),
        Reading::Value(v) if v.is_nan() => Ok(default),
        Reading::Value(v) if v.is_finite() => Ok(*v),
        Reading::Value(v) => Err(ExobiomaError::record(name, format!("{} is {}", field, v))),
        Reading::Invalid(text) => Err(ExobiomaError::record(
            name,
            format!("{} '{}' is not a number", field, text),
        )),
    }
}

/// 温室气体标记：值为 1 视为存在
fn gas_flag(name: &str, field: &str, reading: &Reading) -> Result<bool> {
    match reading {
        Reading::Missing => Ok(false),
        Reading::Value(v) => Ok(*v == 1.0),
        Reading::Invalid(text) => Err(ExobiomaError::record(
            name,
            format!("{} '{}' is not a presence flag", field, text),
        )),
    }
}

impl PlanetInputs {
    /// 从目录记录解析
    ///
    /// - `Ok(Some(_))`: 输入可用
    /// - `Ok(None)`: 质量 / 半径 / 入射通量不可用
    /// - `Err(_)`: 其它字段错误，记录应被跳过
    pub fn resolve(record: &ExoplanetRecord) -> Result<Option<PlanetInputs>> {
        let name = record.pl_name.as_str();

        let mass = planet_quantity(&record.pl_masse, EARTH_MASS, EARTH_MASS);
        let radius = planet_quantity(&record.pl_rade, EARTH_RADIUS, EARTH_RADIUS);
        let insolation = planet_quantity(&record.pl_insol, SOLAR_CONSTANT, SOLAR_CONSTANT);

        let stellar_temp =
            stellar_quantity(name, "st_teff", &record.st_teff, DEFAULT_STELLAR_TEMP)?;
        let metallicity =
            stellar_quantity(name, "st_met", &record.st_met, DEFAULT_STELLAR_METALLICITY)?;
        let stellar_mass =
            stellar_quantity(name, "st_mass", &record.st_mass, DEFAULT_STELLAR_MASS)?;

        let greenhouse = GreenhouseGases {
            h2o: gas_flag(name, "h2o_presence", &record.h2o_presence)?,
            co2: gas_flag(name, "co2_presence", &record.co2_presence)?,
            ch4: gas_flag(name, "ch4_presence", &record.ch4_presence)?,
        };

        let (mass_kg, radius_m, insolation) = match (mass, radius, insolation) {
            (Some(m), Some(r), Some(s)) => (m, r, s),
            _ => return Ok(None),
        };

        Ok(Some(PlanetInputs {
            mass_kg,
            radius_m,
            insolation,
            stellar_temp,
            metallicity,
            stellar_mass,
            spectral_type: record
                .st_spectype
                .clone()
                .unwrap_or_else(|| DEFAULT_SPECTRAL_TYPE.to_string()),
            greenhouse,
        }))
    }
}

/// 单条记录的估算结果
#[derive(Debug, Clone, PartialEq)]
pub enum Estimation {
    /// 完整估算
    Complete(PlanetaryEstimate),
    /// 输入不可用，输出空范围行
    Unusable(PlanetaryEstimate),
    /// 计算错误，不输出
    Skipped { planet_name: String, reason: String },
}

impl Estimation {
    /// 输出表中的行（跳过的记录没有行）
    #[cfg(test)]
    pub fn row(&self) -> Option<&PlanetaryEstimate> {
        match self {
            Estimation::Complete(e) | Estimation::Unusable(e) => Some(e),
            Estimation::Skipped { .. } => None,
        }
    }

    pub fn into_row(self) -> Option<PlanetaryEstimate> {
        match self {
            Estimation::Complete(e) | Estimation::Unusable(e) => Some(e),
            Estimation::Skipped { .. } => None,
        }
    }
}

/// 行星环境估算器
#[derive(Debug, Clone, Default)]
pub struct PlanetaryEnvironmentEstimator {
    config: EstimatorConfig,
}

impl PlanetaryEnvironmentEstimator {
    pub fn new(config: EstimatorConfig) -> Self {
        Self { config }
    }

    /// 估算单条记录
    pub fn estimate<R: Rng + ?Sized>(&self, record: &ExoplanetRecord, rng: &mut R) -> Estimation {
        let inputs = match PlanetInputs::resolve(record) {
            Ok(Some(inputs)) => inputs,
            Ok(None) => return Estimation::Unusable(PlanetaryEstimate::unusable(&record.pl_name)),
            Err(e) => {
                return Estimation::Skipped {
                    planet_name: record.pl_name.clone(),
                    reason: e.to_string(),
                }
            }
        };

        match self.estimate_inputs(&record.pl_name, &inputs, rng) {
            Ok(estimate) => Estimation::Complete(estimate),
            Err(e) => Estimation::Skipped {
                planet_name: record.pl_name.clone(),
                reason: e.to_string(),
            },
        }
    }

    /// 对已解析的输入执行全部计算
    pub fn estimate_inputs<R: Rng + ?Sized>(
        &self,
        name: &str,
        inputs: &PlanetInputs,
        rng: &mut R,
    ) -> Result<PlanetaryEstimate> {
        let cfg = &self.config;

        // 温度
        let day_night = cfg.temperature_model().day_night(
            inputs.insolation,
            inputs.mass_kg,
            inputs.radius_m,
            inputs.greenhouse,
        );
        let temperatures = sample_temperatures(rng, day_night, cfg.samples)
            .map_err(|e| ExobiomaError::record(name, e.to_string()))?;

        // 压力
        let pressure = sample_pressure(
            rng,
            inputs.mass_kg,
            inputs.radius_m,
            temperatures.equilibrium,
            cfg.pressure_log_sigma,
            cfg.samples,
        )
        .map_err(|e| ExobiomaError::record(name, e.to_string()))?;

        // 辐射
        let emission = estimate_xray_uv_luminosity(
            inputs.stellar_mass,
            inputs.stellar_temp,
            inputs.metallicity,
            Some(inputs.spectral_type.as_str()),
        );
        let flux = emission.flux_at_insolation(inputs.insolation);

        let estimate = PlanetaryEstimate {
            planet_name: name.to_string(),
            temperature_k: temperatures.range(),
            pressure_bar: pressure.range(),
            xray_flux: Some(Range::point(flux.xray)),
            uv_flux: Some(Range::point(flux.uv)),
            equilibrium_temperature_k: Some(temperatures.equilibrium),
            scale_height_km: Some(pressure.scale_height / 1000.0),
        };

        check_finite(&estimate)?;
        Ok(estimate)
    }
}

/// 任何非有限结果都视为计算错误
fn check_finite(estimate: &PlanetaryEstimate) -> Result<()> {
    let ranges = [
        ("temperature", estimate.temperature_k),
        ("pressure", estimate.pressure_bar),
        ("X-ray flux", estimate.xray_flux),
        ("UV flux", estimate.uv_flux),
    ];
    for (label, range) in ranges {
        match range {
            Some(r) if r.is_finite() => {}
            Some(r) => {
                return Err(ExobiomaError::record(
                    &estimate.planet_name,
                    format!("{} range ({}, {}) is not finite", label, r.min, r.max),
                ))
            }
            None => {
                return Err(ExobiomaError::record(
                    &estimate.planet_name,
                    format!("{} range is empty", label),
                ))
            }
        }
    }
    Ok(())
}
