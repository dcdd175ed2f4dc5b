//! # 大气剖面与极端微生物表格解析器
//!
//! 校验两张输入表的列结构，并把每行转换为类型化记录。
//!
//! ## 列要求
//! 所有列均为必需。缺少任一列时返回 `SchemaError`，
//! 错误信息同时列出两张表实际拥有的全部列名，便于排查输入文件不匹配。
//!
//! ## 依赖关系
//! - 被 `habitability/matcher.rs` 调用
//! - 使用 `parsers/table.rs`
//! - 使用 `models/atmosphere.rs`

use super::table::{cell, Column, Table};
use crate::error::{ExobiomaError, Result};
use crate::models::{AtmosphericProfile, ExtremophileTolerance, Interval};

use csv::StringRecord;

// ─────────────────────────────────────────────────────────────
// 大气剖面列
// ─────────────────────────────────────────────────────────────
pub const NAME: Column = Column::new("name", &["Nome"]);
pub const ALTITUDE: Column = Column::new("altitude_km", &["Altitudine(km)"]);
pub const PRESSURE: Column = Column::new("pressure_atm", &["Pressione(atm)"]);
pub const TEMPERATURE: Column = Column::new("temperature_c", &["Temperatura(°C)"]);
pub const HUMIDITY: Column = Column::new("humidity_pct", &["Umidita(%)"]);
pub const PH: Column = Column::new("ph", &["pH"]);
pub const XRAY: Column = Column::new("xray_msv_per_year", &["Radiazioni_X(mSv/anno)"]);
pub const UV: Column = Column::new("uv_w_per_m2", &["Radiazioni_UV(W/m2)"]);

pub const PROFILE_COLUMNS: [Column; 8] = [
    NAME,
    ALTITUDE,
    PRESSURE,
    TEMPERATURE,
    HUMIDITY,
    PH,
    XRAY,
    UV,
];

// ─────────────────────────────────────────────────────────────
// 微生物耐受列
// ─────────────────────────────────────────────────────────────
pub const PRESSURE_MIN: Column = Column::new("pressure_min_atm", &["Pressione_min(atm)"]);
pub const PRESSURE_MAX: Column = Column::new("pressure_max_atm", &["Pressione_max(atm)"]);
pub const TEMPERATURE_MIN: Column = Column::new("temperature_min_c", &["Temperatura_min(°C)"]);
pub const TEMPERATURE_MAX: Column = Column::new("temperature_max_c", &["Temperatura_max(°C)"]);
pub const HUMIDITY_MIN: Column = Column::new("humidity_min_pct", &["Umidita_min(%)"]);
pub const HUMIDITY_MAX: Column = Column::new("humidity_max_pct", &["Umidita_max(%)"]);
pub const PH_MIN: Column = Column::new("ph_min", &["pH_min"]);
pub const PH_MAX: Column = Column::new("ph_max", &["pH_max"]);
pub const XRAY_MAX: Column =
    Column::new("xray_max_msv_per_year", &["Radiazioni_X_max(mSv/anno)"]);
pub const UV_MAX: Column = Column::new("uv_max_w_per_m2", &["Radiazioni_UV_max(W/m2)"]);

pub const TOLERANCE_COLUMNS: [Column; 11] = [
    NAME,
    PRESSURE_MIN,
    PRESSURE_MAX,
    TEMPERATURE_MIN,
    TEMPERATURE_MAX,
    HUMIDITY_MIN,
    HUMIDITY_MAX,
    PH_MIN,
    PH_MAX,
    XRAY_MAX,
    UV_MAX,
];

/// 同时校验两张表的列结构
pub fn validate_schema(atmosphere: &Table, extremophiles: &Table) -> Result<()> {
    let present = || {
        format!(
            "  atmosphere   {}\n  extremophile {}",
            atmosphere.describe_headers(),
            extremophiles.describe_headers()
        )
    };

    for column in &PROFILE_COLUMNS {
        if atmosphere.find(column).is_none() {
            return Err(ExobiomaError::SchemaError {
                field: column.name.to_string(),
                table: atmosphere.source().to_string(),
                present: present(),
            });
        }
    }

    for column in &TOLERANCE_COLUMNS {
        if extremophiles.find(column).is_none() {
            return Err(ExobiomaError::SchemaError {
                field: column.name.to_string(),
                table: extremophiles.source().to_string(),
                present: present(),
            });
        }
    }

    Ok(())
}

/// 行访问器：列索引已解析完毕
struct RowReader<'a> {
    table: &'a Table,
    row: &'a StringRecord,
    /// 文件中的行号（表头为第 1 行）
    line: usize,
}

impl<'a> RowReader<'a> {
    fn index(&self, column: &Column) -> Result<usize> {
        self.table
            .find(column)
            .ok_or_else(|| ExobiomaError::SchemaError {
                field: column.name.to_string(),
                table: self.table.source().to_string(),
                present: format!("  {}", self.table.describe_headers()),
            })
    }

    fn text(&self, column: &Column) -> Result<String> {
        let idx = self.index(column)?;
        Ok(cell(self.row, Some(idx)).unwrap_or_default().to_string())
    }

    /// 数值单元格；空单元格视为未知 (NaN)
    fn number(&self, column: &Column) -> Result<f64> {
        let idx = self.index(column)?;
        match cell(self.row, Some(idx)) {
            None => Ok(f64::NAN),
            Some(text) => text.parse::<f64>().map_err(|e| ExobiomaError::ParseError {
                path: self.table.source().to_string(),
                row: self.line,
                column: column.name.to_string(),
                reason: format!("'{}' is not a number ({})", text, e),
            }),
        }
    }

    fn interval(&self, min: &Column, max: &Column) -> Result<Interval> {
        Ok(Interval::new(self.number(min)?, self.number(max)?))
    }
}

fn readers(table: &Table) -> impl Iterator<Item = RowReader<'_>> {
    table.rows().iter().enumerate().map(move |(i, row)| RowReader {
        table,
        row,
        line: i + 2,
    })
}

/// 解析大气剖面表
pub fn parse_profiles(table: &Table) -> Result<Vec<AtmosphericProfile>> {
    readers(table)
        .map(|r| {
            Ok(AtmosphericProfile {
                name: r.text(&NAME)?,
                altitude_km: r.number(&ALTITUDE)?,
                pressure_atm: r.number(&PRESSURE)?,
                temperature_c: r.number(&TEMPERATURE)?,
                humidity_pct: r.number(&HUMIDITY)?,
                ph: r.number(&PH)?,
                xray_msv_per_year: r.number(&XRAY)?,
                uv_w_per_m2: r.number(&UV)?,
            })
        })
        .collect()
}

/// 解析极端微生物耐受表
pub fn parse_tolerances(table: &Table) -> Result<Vec<ExtremophileTolerance>> {
    readers(table)
        .map(|r| {
            Ok(ExtremophileTolerance {
                name: r.text(&NAME)?,
                pressure_atm: r.interval(&PRESSURE_MIN, &PRESSURE_MAX)?,
                temperature_c: r.interval(&TEMPERATURE_MIN, &TEMPERATURE_MAX)?,
                humidity_pct: r.interval(&HUMIDITY_MIN, &HUMIDITY_MAX)?,
                ph: r.interval(&PH_MIN, &PH_MAX)?,
                xray_max_msv_per_year: r.number(&XRAY_MAX)?,
                uv_max_w_per_m2: r.number(&UV_MAX)?,
            })
        })
        .collect()
}
