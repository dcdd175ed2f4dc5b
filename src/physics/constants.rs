//! # 物理常数与默认参数
//!
//! 全部为编译期常量（SI 单位，另有注明除外）。

/// 引力常数 (m³ kg⁻¹ s⁻²)
pub const G: f64 = 6.67430e-11;
/// 玻尔兹曼常数 (J/K)
pub const K_B: f64 = 1.380649e-23;
/// 氢原子质量 (kg)
pub const M_H: f64 = 1.6735575e-27;
/// 斯特藩-玻尔兹曼常数 (W m⁻² K⁻⁴)
pub const SIGMA: f64 = 5.670374419e-8;
/// 太阳光度 (W)
pub const L_SUN: f64 = 3.828e26;
/// 太阳有效温度 (K)
pub const T_SUN: f64 = 5778.0;

/// 地球质量 (kg)
pub const EARTH_MASS: f64 = 5.972e24;
/// 地球半径 (m)
pub const EARTH_RADIUS: f64 = 6.371e6;
/// 地球处太阳常数 (W/m²)
pub const SOLAR_CONSTANT: f64 = 1361.0;
/// 地表重力加速度 (m/s²)
pub const EARTH_GRAVITY: f64 = 9.8;

pub const PA_PER_BAR: f64 = 1e5;
pub const PA_PER_ATM: f64 = 101_325.0;

// ─────────────────────────────────────────────────────────────
// 缺失数据时的默认值（地球 / 太阳）
// ─────────────────────────────────────────────────────────────
pub const DEFAULT_STELLAR_TEMP: f64 = T_SUN;
pub const DEFAULT_STELLAR_METALLICITY: f64 = 0.0;
/// 太阳质量单位
pub const DEFAULT_STELLAR_MASS: f64 = 1.0;
pub const DEFAULT_SPECTRAL_TYPE: &str = "G2V";

// ─────────────────────────────────────────────────────────────
// 温室效应参数
// ─────────────────────────────────────────────────────────────
pub const GHE_ALPHA: f64 = 0.18;
pub const GHE_BETA: f64 = 2.5;

pub const H2O_GREENHOUSE: f64 = 0.10;
pub const CO2_GREENHOUSE: f64 = 0.15;
pub const CH4_GREENHOUSE: f64 = 0.20;
