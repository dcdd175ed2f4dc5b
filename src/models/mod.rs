//! # 数据模型模块
//!
//! 定义大气剖面、微生物耐受范围、系外行星记录、估算结果与温度对比。
//!
//! ## 依赖关系
//! - 被 `parsers/`, `habitability/`, `physics/` 和 `commands/` 使用
//! - 子模块: atmosphere, comparison, exoplanet

pub mod atmosphere;
pub mod comparison;
pub mod exoplanet;

pub use atmosphere::{AtmosphericProfile, ExtremophileTolerance, HabitabilityVerdict, Interval};
pub use comparison::TemperatureComparison;
pub use exoplanet::{ExoplanetRecord, PlanetaryEstimate, Range, Reading};
