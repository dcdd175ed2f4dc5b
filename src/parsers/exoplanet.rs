//! # 系外行星目录解析器
//!
//! 读取 NASA Exoplanet Archive 风格的目录（制表符分隔，`#` 注释行）。
//!
//! ## 列要求
//! - `pl_name` 必需，缺失时返回 `SchemaError`
//! - 其余列可选：缺列等价于每一行该字段为空，由估算器使用默认值
//!
//! ## 依赖关系
//! - 被 `commands/estimate.rs`, `commands/compare.rs` 调用
//! - 使用 `parsers/table.rs`
//! - 使用 `models/exoplanet.rs`

use super::table::{cell, Column, Table};
use crate::error::{ExobiomaError, Result};
use crate::models::exoplanet::is_na_token;
use crate::models::{ExoplanetRecord, Reading};

pub const PL_NAME: Column = Column::new("pl_name", &[]);
pub const PL_MASSE: Column = Column::new("pl_masse", &[]);
pub const PL_RADE: Column = Column::new("pl_rade", &[]);
pub const PL_INSOL: Column = Column::new("pl_insol", &[]);
pub const PL_EQT: Column = Column::new("pl_eqt", &[]);
pub const ST_TEFF: Column = Column::new("st_teff", &[]);
pub const ST_MET: Column = Column::new("st_met", &[]);
pub const ST_MASS: Column = Column::new("st_mass", &[]);
pub const ST_SPECTYPE: Column = Column::new("st_spectype", &[]);
pub const H2O_PRESENCE: Column = Column::new("h2o_presence", &[]);
pub const CO2_PRESENCE: Column = Column::new("co2_presence", &[]);
pub const CH4_PRESENCE: Column = Column::new("ch4_presence", &[]);

/// 解析目录表格
pub fn parse_catalog(table: &Table) -> Result<Vec<ExoplanetRecord>> {
    let name_idx = table
        .find(&PL_NAME)
        .ok_or_else(|| ExobiomaError::SchemaError {
            field: PL_NAME.name.to_string(),
            table: table.source().to_string(),
            present: format!("  {}", table.describe_headers()),
        })?;

    let masse = table.find(&PL_MASSE);
    let rade = table.find(&PL_RADE);
    let insol = table.find(&PL_INSOL);
    let eqt = table.find(&PL_EQT);
    let teff = table.find(&ST_TEFF);
    let met = table.find(&ST_MET);
    let smass = table.find(&ST_MASS);
    let spectype = table.find(&ST_SPECTYPE);
    let h2o = table.find(&H2O_PRESENCE);
    let co2 = table.find(&CO2_PRESENCE);
    let ch4 = table.find(&CH4_PRESENCE);

    let records = table
        .rows()
        .iter()
        .map(|row| ExoplanetRecord {
            pl_name: cell(row, Some(name_idx)).unwrap_or_default().to_string(),
            pl_masse: Reading::parse(cell(row, masse)),
            pl_rade: Reading::parse(cell(row, rade)),
            pl_insol: Reading::parse(cell(row, insol)),
            pl_eqt: Reading::parse(cell(row, eqt)),
            st_teff: Reading::parse(cell(row, teff)),
            st_met: Reading::parse(cell(row, met)),
            st_mass: Reading::parse(cell(row, smass)),
            st_spectype: cell(row, spectype)
                .filter(|s| !is_na_token(s))
                .map(str::to_string),
            h2o_presence: parse_flag(cell(row, h2o)),
            co2_presence: parse_flag(cell(row, co2)),
            ch4_presence: parse_flag(cell(row, ch4)),
        })
        .collect();

    Ok(records)
}

/// 温室气体标记：接受数值以及 true/false
fn parse_flag(text: Option<&str>) -> Reading {
    match text.map(str::to_ascii_lowercase).as_deref() {
        Some("true") | Some("yes") => Reading::Value(1.0),
        Some("false") | Some("no") => Reading::Value(0.0),
        _ => Reading::parse(text),
    }
}
