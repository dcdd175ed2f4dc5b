//! # compare 子命令实现
//!
//! - 系外行星模式：一张图，每颗行星一个面板
//! - 太阳系模式：三张分组图，写入 `--output-dir`
//!
//! ## 依赖关系
//! - 使用 `cli/compare.rs` 定义的 CompareArgs
//! - 使用 `parsers/exoplanet.rs` 读取目录，`physics/export.rs` 读取估算结果
//! - 使用 `plot/comparison.rs` 绘图

use crate::cli::compare::CompareArgs;
use crate::error::{ExobiomaError, Result};
use crate::models::comparison::{exoplanet_comparisons, solar_system_groups};
use crate::models::TemperatureComparison;
use crate::parsers::{exoplanet, Table, TableOptions};
use crate::physics::export;
use crate::plot::{self, comparison::ComparisonStyle};
use crate::utils::{output, progress};

use std::fs;
use std::path::PathBuf;

/// 一张待绘制的对比图
#[derive(Debug, Clone)]
pub struct ComparisonChart {
    pub path: PathBuf,
    pub style: ComparisonStyle,
    pub planets: Vec<TemperatureComparison>,
}

/// 根据参数准备要绘制的图
pub fn plan_charts(args: &CompareArgs) -> Result<Vec<ComparisonChart>> {
    if args.solar_system {
        return Ok(solar_system_groups()
            .into_iter()
            .map(|group| ComparisonChart {
                path: args.output_dir.join(format!(
                    "{}_temperature_comparison.{}",
                    group.stem, args.format
                )),
                style: ComparisonStyle::SolarSystem,
                planets: group.planets,
            })
            .collect());
    }

    let catalog_path = args.catalog.as_ref().ok_or_else(|| {
        ExobiomaError::InvalidArgument("--catalog is required without --solar-system".to_string())
    })?;
    let planets: Vec<String> = args
        .planets
        .iter()
        .map(|p| p.trim().to_string())
        .filter(|p| !p.is_empty())
        .collect();
    if planets.is_empty() {
        return Err(ExobiomaError::InvalidArgument(
            "--planets needs at least one planet name".to_string(),
        ));
    }

    let table = Table::from_path(
        catalog_path,
        TableOptions {
            delimiter: args.delimiter,
            ..TableOptions::catalog()
        },
    )?;
    let catalog = exoplanet::parse_catalog(&table)?;
    let estimates = export::read_csv(&args.results)?;

    Ok(vec![ComparisonChart {
        path: args.output.clone(),
        style: ComparisonStyle::Exoplanet,
        planets: exoplanet_comparisons(&planets, &catalog, &estimates)?,
    }])
}

/// 执行温度对比
pub fn execute(args: CompareArgs) -> Result<()> {
    output::print_header("Temperature Range Comparison");

    let charts = plan_charts(&args)?;

    if args.solar_system {
        fs::create_dir_all(&args.output_dir).map_err(|e| ExobiomaError::FileWriteError {
            path: args.output_dir.display().to_string(),
            source: e,
        })?;
    }

    for chart in &charts {
        for c in &chart.planets {
            output::print_info(&format!(
                "{}: equilibrium {:.0} K, range {:.0} - {:.0} K",
                c.name, c.equilibrium_k, c.min_k, c.max_k
            ));
        }

        let spinner = progress::create_spinner("Rendering comparison chart")?;
        let rendered = plot::generate_comparison_plot(
            &chart.planets,
            chart.style,
            &chart.path,
            args.width,
            args.panel_height,
        );
        spinner.finish_and_clear();
        rendered?;

        output::print_saved("Comparison chart", &chart.path);
    }
    Ok(())
}
