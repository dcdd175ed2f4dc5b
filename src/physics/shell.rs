//! # 宜居压力壳层
//!
//! 计算天体的垂直压力剖面，以及压力落在 [1e-5, 1e8] Pa 范围内的球壳。
//!
//! ## 压力模型
//! - 岩质行星：P(h) = Pₛ · e^(−h/H)，h ∈ [0, 0.2R]，1000 个采样点
//! - 气态巨行星：P(r) = P꜀ (1 − (r/R)²) + Pₛ (r/R)²，r ∈ [0, 1.2R]，10000 个采样点
//!
//! 壳层边界由剖面反向（压力升序）后线性插值得到，插值超出采样范围时
//! 取端点值。
//!
//! ## 依赖关系
//! - 被 `commands/shell.rs` 调用
//! - 被 `plot/shell.rs` 使用

use super::constants::PA_PER_ATM;
use crate::error::{ExobiomaError, Result};

use std::f64::consts::PI;

/// 宜居压力下限 (Pa)
pub const SHELL_PRESSURE_MIN_PA: f64 = 1e-5;
/// 宜居压力上限 (Pa)
pub const SHELL_PRESSURE_MAX_PA: f64 = 1e8;

const ROCKY_SAMPLES: usize = 1000;
const GASEOUS_SAMPLES: usize = 10_000;
/// 岩质行星大气建模高度（相对半径）
const ROCKY_ATMOSPHERE_FRACTION: f64 = 0.2;
/// 气态行星建模范围（相对半径）
const GASEOUS_EXTENT: f64 = 1.2;

/// Pa → atm
pub fn pa_to_atm(pa: f64) -> f64 {
    pa / PA_PER_ATM
}

/// 球壳体积 (km³)，半径单位 m
pub fn shell_volume_km3(inner_radius: f64, outer_radius: f64) -> f64 {
    4.0 / 3.0 * PI * (outer_radius.powi(3) - inner_radius.powi(3)) / 1e9
}

/// 含端点的等间距采样
pub fn linspace(start: f64, end: f64, n: usize) -> Vec<f64> {
    match n {
        0 => Vec::new(),
        1 => vec![start],
        _ => {
            let step = (end - start) / (n - 1) as f64;
            (0..n)
                .map(|i| if i == n - 1 { end } else { start + step * i as f64 })
                .collect()
        }
    }
}

/// 一维线性插值
///
/// `xp` 须为升序。`x` 超出范围时返回端点对应的 `fp` 值；空输入返回 NaN。
pub fn interp(x: f64, xp: &[f64], fp: &[f64]) -> f64 {
    let n = xp.len().min(fp.len());
    if n == 0 {
        return f64::NAN;
    }
    if x <= xp[0] {
        return fp[0];
    }
    if x >= xp[n - 1] {
        return fp[n - 1];
    }

    // xp[i - 1] <= x < xp[i]
    let i = xp[..n].partition_point(|v| *v <= x);
    let (x0, x1) = (xp[i - 1], xp[i]);
    let (y0, y1) = (fp[i - 1], fp[i]);
    if x1 == x0 {
        return y1;
    }
    y0 + (x - x0) * (y1 - y0) / (x1 - x0)
}

/// 岩质大气的指数压力
pub fn pressure_rocky(height: f64, scale_height: f64, surface_pressure: f64) -> f64 {
    surface_pressure * (-height / scale_height).exp()
}

/// 气态巨行星的二次压力剖面
pub fn pressure_gaseous(
    radius: f64,
    planet_radius: f64,
    center_pressure: f64,
    surface_pressure: f64,
) -> f64 {
    let x2 = (radius / planet_radius).powi(2);
    center_pressure * (1.0 - x2) + surface_pressure * x2
}

// ─────────────────────────────────────────────────────────────
// 天体定义
// ─────────────────────────────────────────────────────────────

/// 天体类型
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BodyKind {
    /// 岩质行星，带大气标高 (m)
    Rocky { scale_height_m: f64 },
    /// 气态巨行星，带中心压力 (Pa)
    Gaseous { center_pressure_pa: f64 },
}

/// 壳层计算的输入天体
#[derive(Debug, Clone, PartialEq)]
pub struct ShellBody {
    pub name: String,
    pub radius_m: f64,
    pub surface_pressure_pa: f64,
    pub kind: BodyKind,
}

impl ShellBody {
    pub fn rocky(name: &str, radius_m: f64, surface_pressure_pa: f64, scale_height_m: f64) -> Self {
        ShellBody {
            name: name.to_string(),
            radius_m,
            surface_pressure_pa,
            kind: BodyKind::Rocky { scale_height_m },
        }
    }

    pub fn gaseous(
        name: &str,
        radius_m: f64,
        surface_pressure_pa: f64,
        center_pressure_pa: f64,
    ) -> Self {
        ShellBody {
            name: name.to_string(),
            radius_m,
            surface_pressure_pa,
            kind: BodyKind::Gaseous { center_pressure_pa },
        }
    }

    /// 内置天体：金星、地球、木星、土星
    pub fn presets() -> Vec<ShellBody> {
        vec![
            ShellBody::rocky("Venus", 6052e3, 9.2e6, 15_900.0),
            ShellBody::rocky("Earth", 6371e3, 1.01325e5, 8_500.0),
            ShellBody::gaseous("Jupiter", 71_492e3, 1e5, 2e11),
            ShellBody::gaseous("Saturn", 60_268e3, 1e5, 2e10),
        ]
    }

    /// 按名称查找内置天体（忽略大小写）
    pub fn preset(name: &str) -> Option<ShellBody> {
        Self::presets()
            .into_iter()
            .find(|b| b.name.eq_ignore_ascii_case(name.trim()))
    }

    pub fn is_rocky(&self) -> bool {
        matches!(self.kind, BodyKind::Rocky { .. })
    }

    /// 检查参数是否能得到单调的压力剖面
    pub fn validate(&self) -> Result<()> {
        let positive = |label: &str, v: f64| -> Result<()> {
            if v.is_finite() && v > 0.0 {
                Ok(())
            } else {
                Err(ExobiomaError::InvalidArgument(format!(
                    "{} of '{}' must be a positive number, got {}",
                    label, self.name, v
                )))
            }
        };

        positive("radius", self.radius_m)?;
        positive("surface pressure", self.surface_pressure_pa)?;
        match self.kind {
            BodyKind::Rocky { scale_height_m } => positive("scale height", scale_height_m)?,
            BodyKind::Gaseous { center_pressure_pa } => {
                positive("center pressure", center_pressure_pa)?;
                if center_pressure_pa <= self.surface_pressure_pa {
                    return Err(ExobiomaError::InvalidArgument(format!(
                        "center pressure of '{}' ({:e} Pa) must exceed its surface pressure ({:e} Pa)",
                        self.name, center_pressure_pa, self.surface_pressure_pa
                    )));
                }
            }
        }
        Ok(())
    }

    /// 采样压力剖面：(半径 m, 压力 Pa)，半径升序
    pub fn pressure_profile(&self) -> Vec<(f64, f64)> {
        let r_planet = self.radius_m;
        match self.kind {
            BodyKind::Rocky { scale_height_m } => {
                linspace(0.0, r_planet * ROCKY_ATMOSPHERE_FRACTION, ROCKY_SAMPLES)
                    .into_iter()
                    .map(|h| {
                        (
                            r_planet + h,
                            pressure_rocky(h, scale_height_m, self.surface_pressure_pa),
                        )
                    })
                    .collect()
            }
            BodyKind::Gaseous { center_pressure_pa } => {
                linspace(0.0, r_planet * GASEOUS_EXTENT, GASEOUS_SAMPLES)
                    .into_iter()
                    .map(|r| {
                        (
                            r,
                            pressure_gaseous(
                                r,
                                r_planet,
                                center_pressure_pa,
                                self.surface_pressure_pa,
                            ),
                        )
                    })
                    .collect()
            }
        }
    }

    /// 计算宜居壳层
    pub fn habitable_shell(&self) -> Result<HabitableShell> {
        self.validate()?;

        let profile = self.pressure_profile();

        // 压力随半径递减，反向后为升序
        let pressure_asc: Vec<f64> = profile.iter().rev().map(|(_, p)| *p).collect();
        let radius_desc: Vec<f64> = profile.iter().rev().map(|(r, _)| *r).collect();

        let (inner, outer) = match self.kind {
            BodyKind::Rocky { .. } => {
                let inner = interp(SHELL_PRESSURE_MAX_PA, &pressure_asc, &radius_desc);
                let outer = profile.last().map(|(r, _)| *r).unwrap_or(self.radius_m);
                (inner, outer)
            }
            BodyKind::Gaseous { .. } => (
                interp(SHELL_PRESSURE_MAX_PA, &pressure_asc, &radius_desc),
                interp(SHELL_PRESSURE_MIN_PA, &pressure_asc, &radius_desc),
            ),
        };

        Ok(HabitableShell {
            body: self.clone(),
            profile,
            inner_radius_m: inner,
            outer_radius_m: outer,
        })
    }
}

// ─────────────────────────────────────────────────────────────
// 壳层结果
// ─────────────────────────────────────────────────────────────

/// 宜居壳层计算结果
#[derive(Debug, Clone)]
pub struct HabitableShell {
    pub body: ShellBody,
    /// (半径 m, 压力 Pa)
    pub profile: Vec<(f64, f64)>,
    pub inner_radius_m: f64,
    pub outer_radius_m: f64,
}

impl HabitableShell {
    /// 壳层厚度 (m)
    pub fn thickness_m(&self) -> f64 {
        self.outer_radius_m - self.inner_radius_m
    }

    pub fn volume_km3(&self) -> f64 {
        shell_volume_km3(self.inner_radius_m, self.outer_radius_m)
    }

    /// 需要绘制的大气层：(半径 m, 压力 Pa)
    ///
    /// 不含最后一个采样点；岩质行星只画压力高于宜居下限的层，
    /// 气态行星只画正压力层。
    pub fn visible_layers(&self) -> impl Iterator<Item = (f64, f64)> + '_ {
        let floor = if self.body.is_rocky() {
            SHELL_PRESSURE_MIN_PA
        } else {
            0.0
        };
        let n = self.profile.len().saturating_sub(1);
        self.profile[..n]
            .iter()
            .copied()
            .filter(move |(_, p)| *p > floor)
    }

    /// 剖面的 log10 压力范围 (atm)，压力截断到 1e-10 atm 以上
    pub fn log_pressure_range_atm(&self) -> (f64, f64) {
        let logs = self.profile.iter().map(|(_, p)| log_pressure_atm(*p));
        let min = logs.clone().fold(f64::INFINITY, f64::min);
        let max = logs.fold(f64::NEG_INFINITY, f64::max);
        (min, max)
    }
}

/// log10(P / 1 atm)，非正压力截断到 1e-10 atm
pub fn log_pressure_atm(pa: f64) -> f64 {
    pa_to_atm(pa).max(1e-10).log10()
}
