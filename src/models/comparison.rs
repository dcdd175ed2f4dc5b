//! # 温度对比数据
//!
//! 把平衡温度与温度范围放在一起比较：
//! - 系外行星：目录中的 `pl_eqt` 对比估算得到的温度范围
//! - 太阳系：内置参考表，按温度量级分三组绘制，横轴固定
//!
//! ## 依赖关系
//! - 被 `commands/compare.rs` 构造
//! - 被 `plot/comparison.rs` 绘制

use super::{ExoplanetRecord, PlanetaryEstimate};
use crate::error::{ExobiomaError, Result};

/// 固定横轴 (K)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TemperatureAxis {
    pub min: f64,
    pub max: f64,
    /// 刻度间隔
    pub step: f64,
}

impl TemperatureAxis {
    /// 含两端的刻度数量
    pub fn tick_count(&self) -> usize {
        ((self.max - self.min) / self.step).round() as usize + 1
    }
}

/// 一颗行星的温度对比
#[derive(Debug, Clone, PartialEq)]
pub struct TemperatureComparison {
    pub name: String,
    pub equilibrium_k: f64,
    pub min_k: f64,
    pub max_k: f64,
    /// 附加说明（压力、紫外范围等），显示在图例中
    pub notes: Vec<String>,
    /// 未设置时按数值自动确定横轴
    pub axis: Option<TemperatureAxis>,
}

impl TemperatureComparison {
    pub fn new(name: &str, equilibrium_k: f64, min_k: f64, max_k: f64) -> Self {
        TemperatureComparison {
            name: name.to_string(),
            equilibrium_k,
            min_k,
            max_k,
            notes: Vec::new(),
            axis: None,
        }
    }

    /// 横轴范围：固定轴优先，否则覆盖全部数值并两侧各留 3%
    pub fn x_range(&self) -> (f64, f64) {
        if let Some(axis) = self.axis {
            return (axis.min, axis.max);
        }
        let lo = self.min_k.min(self.max_k).min(self.equilibrium_k);
        let hi = self.min_k.max(self.max_k).max(self.equilibrium_k);
        if hi > lo {
            (lo * 0.97, hi * 1.03)
        } else {
            (lo - 1.0, hi + 1.0)
        }
    }
}

/// 太阳系参考数据：(名称, 平衡温度, 最低, 最高) K
///
/// 木星的最高值低于最低值（外层大气），保持原样。
const SOLAR_SYSTEM: [(&str, f64, f64, f64); 5] = [
    ("Venus", 227.0, 437.0, 737.0),
    ("Earth", 255.0, 184.0, 330.0),
    ("Mars", 210.0, 130.0, 308.0),
    ("Jupiter", 110.0, 165.0, 112.0),
    ("Neptune", 47.0, 55.0, 72.0),
];

/// 内置的太阳系对比表
pub fn solar_system() -> Vec<TemperatureComparison> {
    SOLAR_SYSTEM
        .iter()
        .map(|(name, eq, min, max)| TemperatureComparison::new(name, *eq, *min, *max))
        .collect()
}

/// 太阳系分组：(文件名前缀, 行星, 横轴下限, 横轴上限)
const SOLAR_SYSTEM_GROUPS: [(&str, &[&str], f64, f64); 3] = [
    ("jupiter_neptune", &["Jupiter", "Neptune"], 0.0, 200.0),
    ("earth_mars", &["Earth", "Mars"], 100.0, 400.0),
    ("venus", &["Venus"], 100.0, 800.0),
];

const SOLAR_SYSTEM_TICK_STEP: f64 = 50.0;

/// 一张对比图包含的行星
#[derive(Debug, Clone, PartialEq)]
pub struct ComparisonGroup {
    /// 输出文件名前缀
    pub stem: String,
    pub planets: Vec<TemperatureComparison>,
}

/// 太阳系参考数据按温度量级分组，每组共用固定横轴
pub fn solar_system_groups() -> Vec<ComparisonGroup> {
    let table = solar_system();
    SOLAR_SYSTEM_GROUPS
        .iter()
        .map(|(stem, names, min, max)| {
            let axis = TemperatureAxis {
                min: *min,
                max: *max,
                step: SOLAR_SYSTEM_TICK_STEP,
            };
            let planets = names
                .iter()
                .filter_map(|name| table.iter().find(|c| c.name == *name))
                .map(|c| TemperatureComparison {
                    axis: Some(axis),
                    ..c.clone()
                })
                .collect();
            ComparisonGroup {
                stem: stem.to_string(),
                planets,
            }
        })
        .collect()
}

/// 由目录与估算结果构造指定行星的对比
pub fn exoplanet_comparisons(
    names: &[String],
    catalog: &[ExoplanetRecord],
    estimates: &[PlanetaryEstimate],
) -> Result<Vec<TemperatureComparison>> {
    names
        .iter()
        .map(|name| {
            let record = catalog.iter().find(|r| r.pl_name == *name).ok_or_else(|| {
                ExobiomaError::InvalidArgument(format!("planet '{}' is not in the catalog", name))
            })?;
            let estimate = estimates
                .iter()
                .find(|e| e.planet_name == *name)
                .ok_or_else(|| {
                    ExobiomaError::InvalidArgument(format!(
                        "planet '{}' has no estimate in the results file",
                        name
                    ))
                })?;

            let eqt = record
                .pl_eqt
                .value()
                .filter(|v| v.is_finite())
                .ok_or_else(|| {
                    ExobiomaError::InvalidArgument(format!(
                        "planet '{}' has no equilibrium temperature (pl_eqt) in the catalog",
                        name
                    ))
                })?;
            let temperature = estimate.temperature_k.ok_or_else(|| {
                ExobiomaError::InvalidArgument(format!(
                    "planet '{}' has no estimated temperature range",
                    name
                ))
            })?;

            let mut comparison =
                TemperatureComparison::new(name, eqt, temperature.min, temperature.max);
            if let Some(p) = estimate.pressure_bar {
                comparison
                    .notes
                    .push(format!("Pressure: {:.2e} - {:.2e} bar", p.min, p.max));
            }
            if let Some(uv) = estimate.uv_flux {
                comparison
                    .notes
                    .push(format!("UV Radiation: {:.2e} - {:.2e}", uv.min, uv.max));
            }
            Ok(comparison)
        })
        .collect()
}
