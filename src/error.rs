//! # 统一错误处理模块
//!
//! 定义 exobioma 的所有错误类型，使用 `thiserror` 派生。
//!
//! ## 依赖关系
//! - 被所有其他模块使用
//! - 无外部模块依赖

use thiserror::Error;

/// exobioma 统一错误类型
#[derive(Error, Debug)]
pub enum ExobiomaError {
    // ─────────────────────────────────────────────────────────────
    // I/O 错误
    // ─────────────────────────────────────────────────────────────
    #[error("Failed to read file: {path}")]
    FileReadError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("Failed to write file: {path}")]
    FileWriteError {
        path: String,
        #[source]
        source: std::io::Error,
    },

    #[error("File not found: {path}")]
    FileNotFound { path: String },

    // ─────────────────────────────────────────────────────────────
    // 表格结构与解析错误
    // ─────────────────────────────────────────────────────────────
    #[error("Missing required column '{field}' in {table}\nColumns present:\n{present}")]
    SchemaError {
        field: String,
        table: String,
        present: String,
    },

    #[error("Failed to parse {path}, row {row}, column '{column}'\nReason: {reason}")]
    ParseError {
        path: String,
        row: usize,
        column: String,
        reason: String,
    },

    // ─────────────────────────────────────────────────────────────
    // 单条记录计算错误（由估算器在本地恢复）
    // ─────────────────────────────────────────────────────────────
    #[error("Cannot evaluate record '{name}': {reason}")]
    RecordError { name: String, reason: String },

    // ─────────────────────────────────────────────────────────────
    // 参数错误
    // ─────────────────────────────────────────────────────────────
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    // ─────────────────────────────────────────────────────────────
    // CSV / 绘图错误
    // ─────────────────────────────────────────────────────────────
    #[error("CSV error: {0}")]
    CsvError(#[from] csv::Error),

    #[error("Plot rendering failed: {0}")]
    PlotError(String),
}

impl ExobiomaError {
    /// 构造单条记录错误
    pub fn record(name: &str, reason: impl Into<String>) -> Self {
        ExobiomaError::RecordError {
            name: name.to_string(),
            reason: reason.into(),
        }
    }
}

/// Result 类型别名
pub type Result<T> = std::result::Result<T, ExobiomaError>;
