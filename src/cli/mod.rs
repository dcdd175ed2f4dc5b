//! # CLI 模块
//!
//! 使用 `clap` 定义命令行参数和子命令。
//!
//! ## 命令结构
//! - `match`: 极端微生物与大气剖面的可居住性匹配
//! - `estimate`: 系外行星环境估算
//! - `shell`: 宜居压力壳层
//! - `compare`: 温度范围对比图
//!
//! ## 依赖关系
//! - 被 `main.rs` 使用
//! - 子模块: habitability, estimate, shell, compare

pub mod compare;
pub mod estimate;
pub mod habitability;
pub mod shell;

use clap::{Parser, Subcommand};

/// exobioma - 行星可居住性与大气环境估算工具箱
#[derive(Parser)]
#[command(name = "exobioma")]
#[command(author = "Changjiang Wu")]
#[command(version)]
#[command(
    about = "Planetary habitability and atmospheric environment estimation toolkit",
    long_about = None
)]
#[command(propagate_version = true)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,
}

/// 可用的子命令
#[derive(Subcommand)]
pub enum Commands {
    /// Match extremophile tolerances against atmospheric profiles
    Match(habitability::MatchArgs),

    /// Estimate temperature, pressure and radiation ranges for exoplanets
    Estimate(estimate::EstimateArgs),

    /// Compute the life-compatible pressure shell of a planet
    Shell(shell::ShellArgs),

    /// Plot estimated temperature ranges against equilibrium temperatures
    Compare(compare::CompareArgs),
}

/// 解析单字节分隔符（支持 `\t` 与 `tab`）
pub fn parse_delimiter(input: &str) -> Result<u8, String> {
    match input {
        "\\t" | "tab" | "\t" => Ok(b'\t'),
        s if s.len() == 1 && s.is_ascii() => Ok(s.as_bytes()[0]),
        s => Err(format!(
            "Invalid delimiter '{}'. Use a single ASCII character or 'tab'",
            s
        )),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use clap::CommandFactory;

    #[test]
    fn test_cli_definition() {
        Cli::command().debug_assert();
    }

    #[test]
    fn test_parse_delimiter() {
        assert_eq!(parse_delimiter(","), Ok(b','));
        assert_eq!(parse_delimiter(";"), Ok(b';'));
        assert_eq!(parse_delimiter("tab"), Ok(b'\t'));
        assert_eq!(parse_delimiter("\\t"), Ok(b'\t'));
        assert!(parse_delimiter(",,").is_err());
        assert!(parse_delimiter("°").is_err());
    }

    #[test]
    fn test_parse_match_command() {
        let cli = Cli::try_parse_from([
            "exobioma",
            "match",
            "atmosfere.csv",
            "estremofili.csv",
            "--no-plot",
        ])
        .unwrap();
        match cli.command {
            Commands::Match(args) => {
                assert_eq!(args.atmosphere.to_str(), Some("atmosfere.csv"));
                assert!(args.no_plot);
                assert_eq!(args.delimiter, b',');
            }
            _ => panic!("expected match"),
        }
    }

    #[test]
    fn test_parse_estimate_command() {
        let cli = Cli::try_parse_from([
            "exobioma",
            "estimate",
            "database230-430.txt",
            "--seed",
            "42",
            "--jobs",
            "2",
        ])
        .unwrap();
        match cli.command {
            Commands::Estimate(args) => {
                assert_eq!(args.seed, Some(42));
                assert_eq!(args.jobs, 2);
                assert_eq!(args.delimiter, b'\t');
                assert_eq!(args.samples, 1000);
            }
            _ => panic!("expected estimate"),
        }
    }

    #[test]
    fn test_compare_requires_mode() {
        assert!(Cli::try_parse_from(["exobioma", "compare"]).is_err());
        assert!(Cli::try_parse_from(["exobioma", "compare", "--solar-system"]).is_ok());
        assert!(Cli::try_parse_from([
            "exobioma",
            "compare",
            "--solar-system",
            "--output-dir",
            "figs",
            "--format",
            "svg",
        ])
        .is_ok());
        assert!(
            Cli::try_parse_from(["exobioma", "compare", "--solar-system", "-o", "x.png"]).is_err()
        );
        assert!(Cli::try_parse_from([
            "exobioma",
            "compare",
            "--catalog",
            "db.txt",
            "--planets",
            "Proxima Cen b,TOI-715 b",
        ])
        .is_ok());
    }
}
