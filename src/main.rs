//! # Exobioma - 极端微生物与行星环境分析工具
//!
//! 判断极端微生物能否在给定大气层中存活，并由系外行星目录估算行星环境。
//!
//! ## 子命令
//! - `match`    - 大气剖面 × 微生物耐受范围 可居住性判定
//! - `estimate` - 系外行星温度、压力与辐射范围估算 (Monte Carlo)
//! - `shell`    - 宜居压力壳层计算与剖面图
//! - `compare`  - 平衡温度与温度范围对比图
//!
//! ## 依赖关系
//! ```text
//! main.rs
//!   ├── cli/          (命令行参数定义)
//!   ├── commands/     (命令执行逻辑)
//!   │     ├── parsers/      (表格读取与列解析)
//!   │     ├── habitability/ (匹配、导出、绘图)
//!   │     ├── physics/      (估算器、壳层模型)
//!   │     ├── plot/         (壳层图、对比图)
//!   │     ├── batch/        (并行处理)
//!   │     └── models/       (数据模型)
//!   ├── utils/        (工具函数)
//!   └── error.rs      (错误处理)
//! ```

mod batch;
mod cli;
mod commands;
mod error;
mod habitability;
mod models;
mod parsers;
mod physics;
mod plot;
mod utils;

use clap::Parser;
use cli::Cli;

fn main() {
    #[cfg(windows)]
    colored::control::set_virtual_terminal(true).ok();

    let cli = Cli::parse();

    if let Err(e) = commands::run(cli.command) {
        utils::output::print_error(&format!("{}", e));
        std::process::exit(1);
    }
}
