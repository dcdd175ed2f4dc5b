//! # 估算结果 CSV 读写
//!
//! 每颗行星一行；空范围写为空单元格。读取用于温度对比图。
//!
//! ## 依赖关系
//! - 被 `commands/estimate.rs`, `commands/compare.rs` 调用
//! - 使用 `csv` + `serde`

use crate::error::{ExobiomaError, Result};
use crate::models::{PlanetaryEstimate, Range};

use serde::{Deserialize, Serialize};
use std::path::Path;

/// CSV 中的一行
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EstimateRow {
    pub planet_name: String,
    pub min_temperature_k: Option<f64>,
    pub max_temperature_k: Option<f64>,
    pub min_pressure_bar: Option<f64>,
    pub max_pressure_bar: Option<f64>,
    pub min_xray_flux_w_m2: Option<f64>,
    pub max_xray_flux_w_m2: Option<f64>,
    pub min_uv_flux_w_m2: Option<f64>,
    pub max_uv_flux_w_m2: Option<f64>,
    pub equilibrium_temperature_k: Option<f64>,
    pub scale_height_km: Option<f64>,
}

fn split(range: Option<Range>) -> (Option<f64>, Option<f64>) {
    match range {
        Some(r) => (Some(r.min), Some(r.max)),
        None => (None, None),
    }
}

fn join(min: Option<f64>, max: Option<f64>) -> Option<Range> {
    match (min, max) {
        (Some(min), Some(max)) => Some(Range::new(min, max)),
        _ => None,
    }
}

impl From<&PlanetaryEstimate> for EstimateRow {
    fn from(e: &PlanetaryEstimate) -> Self {
        let (min_temperature_k, max_temperature_k) = split(e.temperature_k);
        let (min_pressure_bar, max_pressure_bar) = split(e.pressure_bar);
        let (min_xray_flux_w_m2, max_xray_flux_w_m2) = split(e.xray_flux);
        let (min_uv_flux_w_m2, max_uv_flux_w_m2) = split(e.uv_flux);
        EstimateRow {
            planet_name: e.planet_name.clone(),
            min_temperature_k,
            max_temperature_k,
            min_pressure_bar,
            max_pressure_bar,
            min_xray_flux_w_m2,
            max_xray_flux_w_m2,
            min_uv_flux_w_m2,
            max_uv_flux_w_m2,
            equilibrium_temperature_k: e.equilibrium_temperature_k,
            scale_height_km: e.scale_height_km,
        }
    }
}

impl From<EstimateRow> for PlanetaryEstimate {
    fn from(row: EstimateRow) -> Self {
        PlanetaryEstimate {
            planet_name: row.planet_name,
            temperature_k: join(row.min_temperature_k, row.max_temperature_k),
            pressure_bar: join(row.min_pressure_bar, row.max_pressure_bar),
            xray_flux: join(row.min_xray_flux_w_m2, row.max_xray_flux_w_m2),
            uv_flux: join(row.min_uv_flux_w_m2, row.max_uv_flux_w_m2),
            equilibrium_temperature_k: row.equilibrium_temperature_k,
            scale_height_km: row.scale_height_km,
        }
    }
}

/// 导出估算结果
pub fn to_csv(estimates: &[PlanetaryEstimate], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for estimate in estimates {
        wtr.serialize(EstimateRow::from(estimate))?;
    }

    wtr.flush().map_err(|e| ExobiomaError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}

/// 读取估算结果
pub fn read_csv(path: &Path) -> Result<Vec<PlanetaryEstimate>> {
    if !path.exists() {
        return Err(ExobiomaError::FileNotFound {
            path: path.display().to_string(),
        });
    }

    let mut rdr = csv::ReaderBuilder::new()
        .trim(csv::Trim::All)
        .from_path(path)?;

    let mut estimates = Vec::new();
    for row in rdr.deserialize::<EstimateRow>() {
        estimates.push(row?.into());
    }
    Ok(estimates)
}
