//! # 解析器模块
//!
//! 提供分隔文本表格读取和各类输入表的类型化解析。
//!
//! ## 依赖关系
//! - 被 `commands/` 和 `habitability/` 模块使用
//! - 使用 `models/` 数据模型
//! - 子模块: table, atmosphere, exoplanet

pub mod atmosphere;
pub mod exoplanet;
pub mod table;

pub use table::{Table, TableOptions};
