//! # 大气剖面与极端微生物耐受数据模型
//!
//! ## 依赖关系
//! - 被 `parsers/atmosphere.rs` 构造
//! - 被 `habitability/` 使用

use serde::{Deserialize, Serialize};

/// 闭区间 [min, max]
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Interval {
    pub min: f64,
    pub max: f64,
}

impl Interval {
    pub fn new(min: f64, max: f64) -> Self {
        Interval { min, max }
    }

    /// 闭区间包含判断；任一值为 NaN 时视为未知，返回 false
    pub fn contains(&self, value: f64) -> bool {
        if value.is_nan() || self.min.is_nan() || self.max.is_nan() {
            return false;
        }
        self.min <= value && value <= self.max
    }

    pub fn midpoint(&self) -> f64 {
        (self.min + self.max) / 2.0
    }
}

/// 某天体在某一高度处的大气环境
#[derive(Debug, Clone, PartialEq)]
pub struct AtmosphericProfile {
    /// 天体名称
    pub name: String,
    pub altitude_km: f64,
    /// 压力 (atm)
    pub pressure_atm: f64,
    /// 温度 (°C)
    pub temperature_c: f64,
    /// 相对湿度 (%)
    pub humidity_pct: f64,
    pub ph: f64,
    /// X 射线剂量 (mSv/年)
    pub xray_msv_per_year: f64,
    /// 紫外辐照度 (W/m²)
    pub uv_w_per_m2: f64,
}

/// 极端微生物的环境耐受范围
#[derive(Debug, Clone, PartialEq)]
pub struct ExtremophileTolerance {
    pub name: String,
    pub pressure_atm: Interval,
    pub temperature_c: Interval,
    pub humidity_pct: Interval,
    pub ph: Interval,
    /// 辐射只有上限，零辐射总是可以耐受
    pub xray_max_msv_per_year: f64,
    pub uv_max_w_per_m2: f64,
}

/// 单个 (大气剖面, 微生物) 组合的可居住性判定
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct HabitabilityVerdict {
    pub body: String,
    pub altitude_km: f64,
    pub organism: String,
    pub habitable: bool,
}
