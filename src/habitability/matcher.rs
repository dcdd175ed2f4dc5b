//! # 可居住性匹配器
//!
//! 判断极端微生物能否在给定大气环境中存活。
//!
//! ## 判定规则
//! 六个维度全部满足才判定为可居住：
//! 1. 压力、温度、湿度、pH 落在耐受闭区间内（`min ≤ v ≤ max`）
//! 2. X 射线与紫外辐射不超过耐受上限（无下限）
//!
//! 读数或边界为 NaN 时该维度判为不满足（耐受情况未知）。
//!
//! ## 依赖关系
//! - 被 `commands/habitability.rs` 调用
//! - 使用 `parsers/atmosphere.rs` 校验与解析输入表
//! - 使用 `models/atmosphere.rs`

use crate::error::Result;
use crate::models::{AtmosphericProfile, ExtremophileTolerance, HabitabilityVerdict};
use crate::parsers::atmosphere;
use crate::parsers::Table;

/// 各维度的判定结果
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct HabitabilityChecks {
    pub pressure: bool,
    pub temperature: bool,
    pub humidity: bool,
    pub ph: bool,
    pub xray: bool,
    pub uv: bool,
}

impl HabitabilityChecks {
    /// 所有维度都满足
    pub fn all(&self) -> bool {
        self.pressure && self.temperature && self.humidity && self.ph && self.xray && self.uv
    }
}

/// 辐射上限判定；任一值为 NaN 视为未知
fn within_limit(value: f64, max: f64) -> bool {
    if value.is_nan() || max.is_nan() {
        return false;
    }
    value <= max
}

/// 逐维度判定
pub fn evaluate(profile: &AtmosphericProfile, tolerance: &ExtremophileTolerance) -> HabitabilityChecks {
    HabitabilityChecks {
        pressure: tolerance.pressure_atm.contains(profile.pressure_atm),
        temperature: tolerance.temperature_c.contains(profile.temperature_c),
        humidity: tolerance.humidity_pct.contains(profile.humidity_pct),
        ph: tolerance.ph.contains(profile.ph),
        xray: within_limit(profile.xray_msv_per_year, tolerance.xray_max_msv_per_year),
        uv: within_limit(profile.uv_w_per_m2, tolerance.uv_max_w_per_m2),
    }
}

/// 可居住性判定
pub fn is_habitable(profile: &AtmosphericProfile, tolerance: &ExtremophileTolerance) -> bool {
    evaluate(profile, tolerance).all()
}

/// 对所有 (剖面, 微生物) 组合求判定
///
/// 剖面在外层、微生物在内层，保持输入顺序；结果数量为 |剖面| × |微生物|。
pub fn match_habitability(
    profiles: &[AtmosphericProfile],
    tolerances: &[ExtremophileTolerance],
) -> Vec<HabitabilityVerdict> {
    let mut verdicts = Vec::with_capacity(profiles.len() * tolerances.len());

    for profile in profiles {
        for tolerance in tolerances {
            verdicts.push(HabitabilityVerdict {
                body: profile.name.clone(),
                altitude_km: profile.altitude_km,
                organism: tolerance.name.clone(),
                habitable: is_habitable(profile, tolerance),
            });
        }
    }

    verdicts
}

/// 匹配结果及其输入
#[derive(Debug, Clone)]
pub struct MatchOutput {
    pub profiles: Vec<AtmosphericProfile>,
    pub tolerances: Vec<ExtremophileTolerance>,
    pub verdicts: Vec<HabitabilityVerdict>,
}

/// 从原始表格出发：先校验两张表结构，再解析并匹配
pub fn match_tables(atmosphere_table: &Table, extremophile_table: &Table) -> Result<MatchOutput> {
    atmosphere::validate_schema(atmosphere_table, extremophile_table)?;

    let profiles = atmosphere::parse_profiles(atmosphere_table)?;
    let tolerances = atmosphere::parse_tolerances(extremophile_table)?;
    let verdicts = match_habitability(&profiles, &tolerances);

    Ok(MatchOutput {
        profiles,
        tolerances,
        verdicts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::ExobiomaError;
    use crate::models::Interval;
    use crate::parsers::TableOptions;

    fn profile() -> AtmosphericProfile {
        AtmosphericProfile {
            name: "Earth".to_string(),
            altitude_km: 0.0,
            pressure_atm: 1.0,
            temperature_c: 20.0,
            humidity_pct: 50.0,
            ph: 7.0,
            xray_msv_per_year: 0.0,
            uv_w_per_m2: 0.0,
        }
    }

    fn tolerance() -> ExtremophileTolerance {
        ExtremophileTolerance {
            name: "Mesophile".to_string(),
            pressure_atm: Interval::new(0.5, 2.0),
            temperature_c: Interval::new(0.0, 40.0),
            humidity_pct: Interval::new(20.0, 80.0),
            ph: Interval::new(5.0, 9.0),
            xray_max_msv_per_year: 10.0,
            uv_max_w_per_m2: 10.0,
        }
    }

    #[test]
    fn test_reference_pair_is_habitable() {
        assert!(is_habitable(&profile(), &tolerance()));
    }

    #[test]
    fn test_pressure_out_of_range() {
        let mut t = tolerance();
        t.pressure_atm = Interval::new(5.0, 10.0);
        let checks = evaluate(&profile(), &t);
        assert!(!checks.pressure);
        assert!(checks.temperature && checks.humidity && checks.ph && checks.xray && checks.uv);
        assert!(!is_habitable(&profile(), &t));
    }

    #[test]
    fn test_single_fault_flips_verdict() {
        let base = profile();
        let mutations: [fn(&mut AtmosphericProfile); 6] = [
            |p| p.pressure_atm = 3.0,
            |p| p.temperature_c = 80.0,
            |p| p.humidity_pct = 5.0,
            |p| p.ph = 2.0,
            |p| p.xray_msv_per_year = 11.0,
            |p| p.uv_w_per_m2 = 10.5,
        ];

        for (i, mutate) in mutations.iter().enumerate() {
            let mut p = base.clone();
            mutate(&mut p);
            let checks = evaluate(&p, &tolerance());
            let failed = [
                checks.pressure,
                checks.temperature,
                checks.humidity,
                checks.ph,
                checks.xray,
                checks.uv,
            ]
            .iter()
            .filter(|ok| !**ok)
            .count();
            assert_eq!(failed, 1, "mutation {i} should break exactly one leg");
            assert!(!is_habitable(&p, &tolerance()), "mutation {i}");
        }
    }

    #[test]
    fn test_bounds_are_inclusive() {
        let t = tolerance();
        for (pressure, temperature, humidity, ph) in
            [(0.5, 0.0, 20.0, 5.0), (2.0, 40.0, 80.0, 9.0)]
        {
            let p = AtmosphericProfile {
                pressure_atm: pressure,
                temperature_c: temperature,
                humidity_pct: humidity,
                ph,
                xray_msv_per_year: 10.0,
                uv_w_per_m2: 10.0,
                ..profile()
            };
            assert!(is_habitable(&p, &t));
        }
    }

    #[test]
    fn test_nan_means_not_habitable() {
        // 读数未知
        let p = AtmosphericProfile {
            humidity_pct: f64::NAN,
            ..profile()
        };
        assert!(!is_habitable(&p, &tolerance()));

        // 区间边界未知
        let mut t = tolerance();
        t.ph = Interval::new(f64::NAN, 9.0);
        assert!(!is_habitable(&profile(), &t));

        // 辐射上限未知
        let mut t = tolerance();
        t.uv_max_w_per_m2 = f64::NAN;
        assert!(!is_habitable(&profile(), &t));
    }

    #[test]
    fn test_cross_product_order_and_size() {
        let profiles = vec![
            profile(),
            AtmosphericProfile {
                name: "Venus".to_string(),
                altitude_km: 55.0,
                ..profile()
            },
        ];
        let tolerances = vec![
            tolerance(),
            ExtremophileTolerance {
                name: "Piezophile".to_string(),
                pressure_atm: Interval::new(5.0, 10.0),
                ..tolerance()
            },
            ExtremophileTolerance {
                name: "Acidophile".to_string(),
                ..tolerance()
            },
        ];

        let verdicts = match_habitability(&profiles, &tolerances);
        assert_eq!(verdicts.len(), profiles.len() * tolerances.len());

        let order: Vec<_> = verdicts
            .iter()
            .map(|v| (v.body.as_str(), v.organism.as_str()))
            .collect();
        assert_eq!(
            order,
            vec![
                ("Earth", "Mesophile"),
                ("Earth", "Piezophile"),
                ("Earth", "Acidophile"),
                ("Venus", "Mesophile"),
                ("Venus", "Piezophile"),
                ("Venus", "Acidophile"),
            ]
        );
        assert_eq!(verdicts[3].altitude_km, 55.0);
        assert!(!verdicts[1].habitable);
        assert!(verdicts[2].habitable);
    }

    #[test]
    fn test_empty_inputs() {
        assert!(match_habitability(&[], &[tolerance()]).is_empty());
        assert!(match_habitability(&[profile()], &[]).is_empty());
    }

    #[test]
    fn test_match_tables_aborts_on_schema_error() {
        let atmo = Table::from_reader(
            "name,altitude_km,pressure_atm,temperature_c,humidity_pct,ph,xray_msv_per_year\nEarth,0,1,20,50,7,0\n"
                .as_bytes(),
            TableOptions::default(),
            "atmo.csv",
        )
        .unwrap();
        let ext = Table::from_reader(
            "name\nMesophile\n".as_bytes(),
            TableOptions::default(),
            "ext.csv",
        )
        .unwrap();

        let err = match_tables(&atmo, &ext).unwrap_err();
        match err {
            ExobiomaError::SchemaError { field, present, .. } => {
                assert_eq!(field, "uv_w_per_m2");
                assert!(present.contains("atmo.csv"));
                assert!(present.contains("ext.csv: [name]"));
            }
            other => panic!("unexpected error: {other}"),
        }
    }

    #[test]
    fn test_match_tables() {
        let atmo = Table::from_reader(
            "name,altitude_km,pressure_atm,temperature_c,humidity_pct,ph,xray_msv_per_year,uv_w_per_m2\nEarth,0,1,20,50,7,0,0\n"
                .as_bytes(),
            TableOptions::default(),
            "atmo.csv",
        )
        .unwrap();
        let ext = Table::from_reader(
            "name,pressure_min_atm,pressure_max_atm,temperature_min_c,temperature_max_c,humidity_min_pct,humidity_max_pct,ph_min,ph_max,xray_max_msv_per_year,uv_max_w_per_m2\nMesophile,0.5,2,0,40,20,80,5,9,10,10\n"
                .as_bytes(),
            TableOptions::default(),
            "ext.csv",
        )
        .unwrap();

        let output = match_tables(&atmo, &ext).unwrap();
        assert_eq!(output.verdicts.len(), 1);
        assert!(output.verdicts[0].habitable);
        assert_eq!(output.profiles.len(), 1);
        assert_eq!(output.tolerances.len(), 1);
    }
}
