//! # 命令执行模块
//!
//! 实现各子命令的业务逻辑。
//!
//! ## 依赖关系
//! - 被 `main.rs` 调用
//! - 使用 `cli/`, `parsers/`, `habitability/`, `physics/`, `plot/`, `utils/`
//! - 子模块: habitability, estimate, shell, compare

pub mod compare;
pub mod estimate;
pub mod habitability;
pub mod shell;

use crate::cli::Commands;
use crate::error::Result;

/// 执行命令
pub fn run(cmd: Commands) -> Result<()> {
    match cmd {
        Commands::Match(args) => habitability::execute(args),
        Commands::Estimate(args) => estimate::execute(args),
        Commands::Shell(args) => shell::execute(args),
        Commands::Compare(args) => compare::execute(args),
    }
}
