//! # 恒星 X 射线 / 紫外辐射估算
//!
//! ## 经验关系
//! - L_X  = L☉ · 1e-6 · M*³ · (T*/T☉)⁴ · 10^[Fe/H] · f(光谱型)
//! - L_UV = L☉ · 1e-2 · M*² · (T*/T☉)⁵ · 10^[Fe/H] · f(光谱型)
//!
//! 行星处通量 F = L / (4π d²)，其中 d 由入射通量按平方反比反推，
//! 而不是使用目录中的实际轨道半长轴。
//!
//! ## 依赖关系
//! - 被 `physics/estimator.rs` 调用

use super::constants::{L_SUN, T_SUN};

use std::f64::consts::PI;

/// 光谱型修正因子
///
/// 取光谱型首字母（忽略大小写与首尾空白）；无法识别或缺失时为 1。
pub fn spectral_factor(spectral_type: Option<&str>) -> f64 {
    let class = spectral_type
        .and_then(|s| s.trim().chars().next())
        .map(|c| c.to_ascii_uppercase());

    match class {
        Some('O') => 1000.0,
        Some('B') => 100.0,
        Some('A') => 10.0,
        Some('F') => 1.0,
        Some('G') => 0.1,
        Some('K') => 0.01,
        Some('M') => 0.001,
        _ => 1.0,
    }
}

/// 恒星高能辐射光度 (W)
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StellarEmission {
    pub xray_luminosity: f64,
    pub uv_luminosity: f64,
}

/// 估算 X 射线和紫外光度
pub fn estimate_xray_uv_luminosity(
    stellar_mass: f64,
    stellar_temp: f64,
    metallicity: f64,
    spectral_type: Option<&str>,
) -> StellarEmission {
    let metallicity_factor = 10f64.powf(metallicity);
    let factor = spectral_factor(spectral_type);
    let temp_ratio = stellar_temp / T_SUN;

    StellarEmission {
        xray_luminosity: L_SUN
            * 1e-6
            * stellar_mass.powi(3)
            * temp_ratio.powi(4)
            * metallicity_factor
            * factor,
        uv_luminosity: L_SUN
            * 1e-2
            * stellar_mass.powi(2)
            * temp_ratio.powi(5)
            * metallicity_factor
            * factor,
    }
}

/// 由入射通量 (W/m²) 反推恒星距离 (m)
pub fn distance_from_insolation(insolation: f64) -> f64 {
    (L_SUN / (4.0 * PI * insolation)).sqrt()
}

/// 平方反比通量 (W/m²)
pub fn flux_at_distance(luminosity: f64, distance: f64) -> f64 {
    luminosity / (4.0 * PI * distance * distance)
}

/// 行星处的高能辐射通量
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct StellarFlux {
    pub xray: f64,
    pub uv: f64,
}

impl StellarEmission {
    pub fn flux_at_insolation(&self, insolation: f64) -> StellarFlux {
        let distance = distance_from_insolation(insolation);
        StellarFlux {
            xray: flux_at_distance(self.xray_luminosity, distance),
            uv: flux_at_distance(self.uv_luminosity, distance),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::physics::constants::SOLAR_CONSTANT;
    use approx::assert_relative_eq;

    #[test]
    fn test_spectral_factor_lookup() {
        assert_eq!(spectral_factor(Some("O9V")), 1000.0);
        assert_eq!(spectral_factor(Some("B2")), 100.0);
        assert_eq!(spectral_factor(Some("A0V")), 10.0);
        assert_eq!(spectral_factor(Some("F5")), 1.0);
        assert_eq!(spectral_factor(Some("G2V")), 0.1);
        assert_eq!(spectral_factor(Some("K1 V")), 0.01);
        assert_eq!(spectral_factor(Some("M5.5 V")), 0.001);
    }

    #[test]
    fn test_spectral_factor_case_insensitive() {
        assert_eq!(spectral_factor(Some("m4")), spectral_factor(Some("M4")));
        assert_eq!(spectral_factor(Some("  k2v")), 0.01);
    }

    #[test]
    fn test_spectral_factor_defaults_to_one() {
        assert_eq!(spectral_factor(None), 1.0);
        assert_eq!(spectral_factor(Some("")), 1.0);
        assert_eq!(spectral_factor(Some("WD")), 1.0);
        assert_eq!(spectral_factor(Some("L3")), 1.0);
    }

    #[test]
    fn test_solar_luminosity() {
        let sun = estimate_xray_uv_luminosity(1.0, T_SUN, 0.0, Some("G2V"));
        assert_relative_eq!(sun.xray_luminosity, L_SUN * 1e-7, max_relative = 1e-12);
        assert_relative_eq!(sun.uv_luminosity, L_SUN * 1e-3, max_relative = 1e-12);
    }

    #[test]
    fn test_luminosity_scaling() {
        let base = estimate_xray_uv_luminosity(1.0, T_SUN, 0.0, None);
        let heavy = estimate_xray_uv_luminosity(2.0, T_SUN, 0.0, None);
        assert_relative_eq!(heavy.xray_luminosity / base.xray_luminosity, 8.0);
        assert_relative_eq!(heavy.uv_luminosity / base.uv_luminosity, 4.0);

        let hot = estimate_xray_uv_luminosity(1.0, 2.0 * T_SUN, 0.0, None);
        assert_relative_eq!(hot.xray_luminosity / base.xray_luminosity, 16.0);
        assert_relative_eq!(hot.uv_luminosity / base.uv_luminosity, 32.0);

        let metal_rich = estimate_xray_uv_luminosity(1.0, T_SUN, 1.0, None);
        assert_relative_eq!(metal_rich.xray_luminosity / base.xray_luminosity, 10.0);
    }

    #[test]
    fn test_distance_from_solar_constant() {
        // 1361 W/m² 对应约 1 AU
        let d = distance_from_insolation(SOLAR_CONSTANT);
        assert_relative_eq!(d, 1.496e11, max_relative = 5e-3);
    }

    #[test]
    fn test_flux_scales_with_insolation() {
        let sun = estimate_xray_uv_luminosity(1.0, T_SUN, 0.0, Some("G2V"));
        let earth = sun.flux_at_insolation(SOLAR_CONSTANT);
        let closer = sun.flux_at_insolation(4.0 * SOLAR_CONSTANT);
        assert_relative_eq!(closer.xray / earth.xray, 4.0, max_relative = 1e-12);
        // F = L · S / L☉
        assert_relative_eq!(earth.uv, 1e-3 * SOLAR_CONSTANT, max_relative = 1e-12);
    }
}
