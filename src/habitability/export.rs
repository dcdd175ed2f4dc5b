//! # 可居住性结果导出
//!
//! 把判定结果写入 CSV（每个 剖面 × 微生物 组合一行）。
//!
//! ## 依赖关系
//! - 被 `commands/habitability.rs` 调用
//! - 使用 `csv` + `serde` 写入

use crate::error::{ExobiomaError, Result};
use crate::models::HabitabilityVerdict;

use std::path::Path;

/// 导出判定结果为 CSV
pub fn to_csv(verdicts: &[HabitabilityVerdict], output_path: &Path) -> Result<()> {
    let mut wtr = csv::Writer::from_path(output_path)?;

    for verdict in verdicts {
        wtr.serialize(verdict)?;
    }

    wtr.flush().map_err(|e| ExobiomaError::FileWriteError {
        path: output_path.display().to_string(),
        source: e,
    })?;

    Ok(())
}
