//! # estimate 子命令实现
//!
//! ## 流程
//! 1. 读取系外行星目录（制表符分隔，`#` 注释行）
//! 2. 按记录并行估算；第 i 条记录使用种子相同、流编号为 i 的 ChaCha8，
//!    结果与并行度无关
//! 3. 导出 CSV（跳过的记录不输出），打印预览表与统计
//!
//! ## 依赖关系
//! - 使用 `cli/estimate.rs` 定义的 EstimateArgs
//! - 使用 `batch/` 模块进行并行处理
//! - 使用 `physics/` 模块进行估算与导出

use crate::batch::{BatchSummary, RecordRunner};
use crate::cli::estimate::EstimateArgs;
use crate::error::Result;
use crate::models::{ExoplanetRecord, PlanetaryEstimate, Range};
use crate::parsers::{exoplanet, Table, TableOptions};
use crate::physics::{export, Estimation, PlanetaryEnvironmentEstimator};
use crate::utils::output;

use rand::SeedableRng;
use rand_chacha::ChaCha8Rng;
use tabled::{Table as TextTable, Tabled};

/// 预览表的一行
#[derive(Debug, Clone, Tabled)]
struct EstimateRow {
    #[tabled(rename = "Planet")]
    planet: String,
    #[tabled(rename = "T (K)")]
    temperature: String,
    #[tabled(rename = "P (bar)")]
    pressure: String,
    #[tabled(rename = "X-ray (W/m²)")]
    xray: String,
    #[tabled(rename = "UV (W/m²)")]
    uv: String,
}

fn fmt_fixed(range: Option<Range>) -> String {
    match range {
        Some(r) => format!("{:.0} - {:.0}", r.min, r.max),
        None => "-".to_string(),
    }
}

fn fmt_sci(range: Option<Range>) -> String {
    match range {
        Some(r) if r.min == r.max => format!("{:.2e}", r.min),
        Some(r) => format!("{:.2e} - {:.2e}", r.min, r.max),
        None => "-".to_string(),
    }
}

impl From<&PlanetaryEstimate> for EstimateRow {
    fn from(e: &PlanetaryEstimate) -> Self {
        EstimateRow {
            planet: e.planet_name.clone(),
            temperature: fmt_fixed(e.temperature_k),
            pressure: fmt_sci(e.pressure_bar),
            xray: fmt_sci(e.xray_flux),
            uv: fmt_sci(e.uv_flux),
        }
    }
}

/// 对全部记录进行估算，结果保持输入顺序
pub fn estimate_all(
    estimator: &PlanetaryEnvironmentEstimator,
    records: &[ExoplanetRecord],
    seed: u64,
    runner: &RecordRunner,
) -> Result<Vec<Estimation>> {
    runner.run(records, |i, record| {
        let mut rng = ChaCha8Rng::seed_from_u64(seed);
        rng.set_stream(i as u64);
        estimator.estimate(record, &mut rng)
    })
}

/// 执行系外行星环境估算
pub fn execute(args: EstimateArgs) -> Result<()> {
    output::print_header("Exoplanet Environment Estimation");

    let config = args.config();
    config.validate()?;

    let table = Table::from_path(
        &args.catalog,
        TableOptions {
            delimiter: args.delimiter,
            ..TableOptions::catalog()
        },
    )?;
    let records = exoplanet::parse_catalog(&table)?;

    if records.is_empty() {
        output::print_warning(&format!(
            "No planets found in '{}', nothing written",
            args.catalog.display()
        ));
        return Ok(());
    }

    output::print_info(&format!(
        "Loaded {} planets from '{}'",
        records.len(),
        args.catalog.display()
    ));

    let seed = args.seed.unwrap_or_else(rand::random);
    let runner = RecordRunner::new(args.jobs);
    output::print_info(&format!(
        "Sampling {} draws per distribution, seed {}, {} jobs",
        config.samples,
        seed,
        runner.jobs()
    ));

    let estimator = PlanetaryEnvironmentEstimator::new(config);
    let results = estimate_all(&estimator, &records, seed, &runner)?;
    let summary = BatchSummary::from_results(&results);

    let estimates: Vec<PlanetaryEstimate> =
        results.into_iter().filter_map(Estimation::into_row).collect();

    export::to_csv(&estimates, &args.output)?;

    // 预览表
    if args.top_n > 0 && !estimates.is_empty() {
        output::print_header(&format!(
            "First {} Estimates",
            args.top_n.min(estimates.len())
        ));
        let rows: Vec<EstimateRow> = estimates
            .iter()
            .take(args.top_n)
            .map(EstimateRow::from)
            .collect();
        println!("{}", TextTable::new(&rows));
    }

    output::print_separator();
    output::print_success(&format!(
        "{} planets processed: {} estimated, {} with unusable inputs, {} skipped",
        summary.total(),
        summary.estimated,
        summary.unusable,
        summary.skipped
    ));

    if !summary.skips.is_empty() {
        output::print_warning("Skipped planets:");
        for (name, reason) in summary.skips.iter().take(10) {
            output::print_skip(&format!("{}: {}", name, reason));
        }
        if summary.skips.len() > 10 {
            output::print_warning(&format!("  ... and {} more", summary.skips.len() - 10));
        }
    }

    output::print_saved("Estimates", &args.output);
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Reading;
    use crate::physics::EstimatorConfig;

    fn records() -> Vec<ExoplanetRecord> {
        (0..40)
            .map(|i| ExoplanetRecord {
                pl_masse: Reading::Value(0.5 + i as f64 * 0.1),
                pl_rade: Reading::Value(0.8 + i as f64 * 0.02),
                pl_insol: Reading::Value(0.2 + i as f64 * 0.05),
                ..ExoplanetRecord::new(format!("Planet {}", i))
            })
            .collect()
    }

    #[test]
    fn test_results_independent_of_jobs() {
        let estimator = PlanetaryEnvironmentEstimator::new(EstimatorConfig {
            samples: 200,
            ..Default::default()
        });
        let records = records();
        let serial = estimate_all(&estimator, &records, 7, &RecordRunner::new(1).quiet()).unwrap();
        let parallel =
            estimate_all(&estimator, &records, 7, &RecordRunner::new(4).quiet()).unwrap();
        assert_eq!(serial, parallel);
        assert_eq!(serial.len(), records.len());
    }

    #[test]
    fn test_records_get_distinct_streams() {
        let estimator = PlanetaryEnvironmentEstimator::new(EstimatorConfig {
            samples: 50,
            ..Default::default()
        });
        // 两条输入完全相同的记录
        let same = vec![ExoplanetRecord::new("A"), ExoplanetRecord::new("A")];
        let out = estimate_all(&estimator, &same, 1, &RecordRunner::new(2).quiet()).unwrap();
        assert_ne!(out[0], out[1]);
    }

    #[test]
    fn test_range_formatting() {
        assert_eq!(fmt_fixed(Some(Range::new(184.2, 330.6))), "184 - 331");
        assert_eq!(fmt_fixed(None), "-");
        assert_eq!(fmt_sci(Some(Range::point(0.00123))), "1.23e-3");
    }

    #[test]
    fn test_execute_end_to_end() {
        let dir = tempfile::tempdir().unwrap();
        let catalog = dir.path().join("database230-430.txt");
        std::fs::write(
            &catalog,
            "# NASA Exoplanet Archive\n\
             pl_name\tpl_masse\tpl_rade\tpl_insol\tst_teff\tst_spectype\n\
             Proxima Cen b\t1.07\t1.1\t0.65\t2900\tM5.5 V\n\
             Kepler-1143 c\tnan\t2.3\t5.1\t5100\tK\n\
             LTT 1445 A b\t2.87\t1.3\t5.7\thot\tM3\n",
        )
        .unwrap();
        let output_path = dir.path().join("exoplanet_results.csv");

        execute(EstimateArgs {
            catalog,
            delimiter: b'\t',
            output: output_path.clone(),
            seed: Some(42),
            samples: 100,
            albedo: 0.3,
            efficiency: 0.5,
            ghe_alpha: 0.18,
            ghe_beta: 2.5,
            pressure_sigma: 2.0,
            jobs: 2,
            top_n: 5,
        })
        .unwrap();

        let back = export::read_csv(&output_path).unwrap();
        let names: Vec<_> = back.iter().map(|e| e.planet_name.as_str()).collect();
        // LTT 1445 A b 的恒星温度无法解析，被跳过
        assert_eq!(names, ["Proxima Cen b", "Kepler-1143 c"]);
        assert!(!back[0].is_null());
        assert!(back[1].is_null());
    }
}
