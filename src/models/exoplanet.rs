//! # 系外行星输入记录与估算结果数据模型
//!
//! ## 依赖关系
//! - 被 `parsers/exoplanet.rs` 构造
//! - 被 `physics/estimator.rs`, `physics/export.rs` 使用

use serde::{Deserialize, Serialize};

/// 目录中表示"无数据"的记号（不区分大小写）
const NA_TOKENS: [&str; 3] = ["nan", "na", "n/a"];

/// 单元格为空或为缺失记号
pub fn is_na_token(text: &str) -> bool {
    let text = text.trim();
    text.is_empty() || NA_TOKENS.iter().any(|t| text.eq_ignore_ascii_case(t))
}

/// 表格中的一个数值读数
///
/// 区分"没有数据"（空单元格或缺列）与"有数据但无法解析"，
/// 两者在估算器中的处理方式不同。
#[derive(Debug, Clone, PartialEq, Default)]
pub enum Reading {
    #[default]
    Missing,
    Value(f64),
    Invalid(String),
}

impl Reading {
    /// 从单元格文本解析；空白为 Missing，`NA` 等缺失记号与 `nan` 一样读作 NaN
    pub fn parse(cell: Option<&str>) -> Self {
        match cell {
            None => Reading::Missing,
            Some(text) if text.trim().is_empty() => Reading::Missing,
            Some(text) if is_na_token(text) => Reading::Value(f64::NAN),
            Some(text) => match text.parse::<f64>() {
                Ok(v) => Reading::Value(v),
                Err(_) => Reading::Invalid(text.to_string()),
            },
        }
    }

    pub fn value(&self) -> Option<f64> {
        match self {
            Reading::Value(v) => Some(*v),
            _ => None,
        }
    }
}

/// 系外行星目录中的一行
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ExoplanetRecord {
    pub pl_name: String,
    /// 行星质量 (M⊕)
    pub pl_masse: Reading,
    /// 行星半径 (R⊕)
    pub pl_rade: Reading,
    /// 入射通量 (S⊕)
    pub pl_insol: Reading,
    /// 目录给出的平衡温度 (K)，仅用于对比图
    pub pl_eqt: Reading,
    /// 恒星有效温度 (K)
    pub st_teff: Reading,
    /// 恒星金属丰度 [Fe/H]
    pub st_met: Reading,
    /// 恒星质量 (M☉)
    pub st_mass: Reading,
    pub st_spectype: Option<String>,
    pub h2o_presence: Reading,
    pub co2_presence: Reading,
    pub ch4_presence: Reading,
}

#[cfg(test)]
impl ExoplanetRecord {
    pub fn new(pl_name: impl Into<String>) -> Self {
        ExoplanetRecord {
            pl_name: pl_name.into(),
            ..Default::default()
        }
    }
}

/// 数值范围 (min, max)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Range {
    pub min: f64,
    pub max: f64,
}

impl Range {
    pub fn new(min: f64, max: f64) -> Self {
        Range { min, max }
    }

    /// 单值范围
    pub fn point(value: f64) -> Self {
        Range {
            min: value,
            max: value,
        }
    }

    /// 样本的 (min, max)；空样本返回 None
    pub fn of_samples(samples: &[f64]) -> Option<Self> {
        if samples.is_empty() {
            return None;
        }
        let min = samples.iter().copied().fold(f64::INFINITY, f64::min);
        let max = samples.iter().copied().fold(f64::NEG_INFINITY, f64::max);
        Some(Range { min, max })
    }

    pub fn is_finite(&self) -> bool {
        self.min.is_finite() && self.max.is_finite()
    }
}

/// 单颗行星的环境估算结果
#[derive(Debug, Clone, PartialEq, Default)]
pub struct PlanetaryEstimate {
    pub planet_name: String,
    /// 夜面最低 / 昼面最高温度 (K)
    pub temperature_k: Option<Range>,
    /// 表面压力 (bar)
    pub pressure_bar: Option<Range>,
    /// 行星处恒星 X 射线通量 (W/m²)
    pub xray_flux: Option<Range>,
    /// 行星处恒星紫外通量 (W/m²)
    pub uv_flux: Option<Range>,
    pub equilibrium_temperature_k: Option<f64>,
    pub scale_height_km: Option<f64>,
}

impl PlanetaryEstimate {
    /// 所有范围为空的结果行（输入不可用）
    pub fn unusable(planet_name: impl Into<String>) -> Self {
        PlanetaryEstimate {
            planet_name: planet_name.into(),
            ..Default::default()
        }
    }

    #[cfg(test)]
    pub fn is_null(&self) -> bool {
        self.temperature_k.is_none()
            && self.pressure_bar.is_none()
            && self.xray_flux.is_none()
            && self.uv_flux.is_none()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_reading_parse() {
        assert_eq!(Reading::parse(None), Reading::Missing);
        assert_eq!(Reading::parse(Some("1.5")), Reading::Value(1.5));
        assert!(matches!(Reading::parse(Some("nan")), Reading::Value(v) if v.is_nan()));
        for token in ["NA", "n/a", "N/A", "NaN"] {
            assert!(matches!(Reading::parse(Some(token)), Reading::Value(v) if v.is_nan()));
        }
        assert_eq!(Reading::parse(Some("  ")), Reading::Missing);
        assert_eq!(
            Reading::parse(Some("heavy")),
            Reading::Invalid("heavy".to_string())
        );
    }

    #[test]
    fn test_na_tokens() {
        assert!(is_na_token(""));
        assert!(is_na_token(" nan "));
        assert!(is_na_token("NA"));
        assert!(is_na_token("N/A"));
        assert!(!is_na_token("G2V"));
        assert!(!is_na_token("0"));
    }

    #[test]
    fn test_range_of_samples() {
        let r = Range::of_samples(&[3.0, -1.0, 7.5, 2.0]).unwrap();
        assert_eq!(r, Range::new(-1.0, 7.5));
        assert!(Range::of_samples(&[]).is_none());
    }

    #[test]
    fn test_unusable_estimate_is_null() {
        let est = PlanetaryEstimate::unusable("Kepler-1143 c");
        assert!(est.is_null());
        assert_eq!(est.planet_name, "Kepler-1143 c");
    }
}
