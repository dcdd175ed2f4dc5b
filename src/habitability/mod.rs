//! # 可居住性分析模块
//!
//! 判断极端微生物与大气环境的相容性。
//!
//! ## 子模块
//! - `matcher`: 六维判定与交叉匹配
//! - `export`: 结果导出
//! - `plot`: 图表生成
//!
//! ## 依赖关系
//! - 被 `commands/habitability.rs` 使用
//! - 使用 `models/atmosphere.rs`, `parsers/atmosphere.rs`

pub mod export;
pub mod matcher;
pub mod plot;

pub use matcher::match_tables;
