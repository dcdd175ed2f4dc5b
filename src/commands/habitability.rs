//! # match 子命令实现
//!
//! ## 流程
//! 1. 读取两张表并校验结构（缺列立即报错，不产生部分结果）
//! 2. 大气剖面 × 微生物 全组合判定
//! 3. 打印可存活组合与每种微生物的汇总表
//! 4. 导出 CSV，生成图表
//!
//! ## 依赖关系
//! - 使用 `cli/habitability.rs` 定义的 MatchArgs
//! - 使用 `habitability/` 模块进行判定、导出与绘图

use crate::cli::habitability::MatchArgs;
use crate::error::Result;
use crate::habitability::{self, export, plot};
use crate::models::HabitabilityVerdict;
use crate::parsers::{Table, TableOptions};
use crate::utils::{output, progress};

use tabled::{Table as TextTable, Tabled};

/// 每种微生物的汇总行
#[derive(Debug, Clone, PartialEq, Tabled)]
pub struct OrganismSummary {
    #[tabled(rename = "Organism")]
    pub organism: String,
    #[tabled(rename = "Habitable sites")]
    pub habitable_sites: usize,
    #[tabled(rename = "Evaluated")]
    pub evaluated: usize,
    #[tabled(rename = "Bodies")]
    pub bodies: String,
}

/// 按微生物汇总（保持首次出现顺序）
pub fn summarize(verdicts: &[HabitabilityVerdict]) -> Vec<OrganismSummary> {
    let mut rows: Vec<(OrganismSummary, Vec<String>)> = Vec::new();

    for v in verdicts {
        let idx = match rows.iter().position(|(s, _)| s.organism == v.organism) {
            Some(i) => i,
            None => {
                rows.push((
                    OrganismSummary {
                        organism: v.organism.clone(),
                        habitable_sites: 0,
                        evaluated: 0,
                        bodies: String::new(),
                    },
                    Vec::new(),
                ));
                rows.len() - 1
            }
        };

        let (summary, bodies) = &mut rows[idx];
        summary.evaluated += 1;
        if v.habitable {
            summary.habitable_sites += 1;
            if !bodies.contains(&v.body) {
                bodies.push(v.body.clone());
            }
        }
    }

    rows.into_iter()
        .map(|(mut summary, bodies)| {
            summary.bodies = if bodies.is_empty() {
                "-".to_string()
            } else {
                bodies.join(", ")
            };
            summary
        })
        .collect()
}

/// 执行可居住性匹配
pub fn execute(args: MatchArgs) -> Result<()> {
    output::print_header("Extremophile Habitability Matching");

    let options = TableOptions {
        delimiter: args.delimiter,
        comment: None,
    };
    let atmosphere = Table::from_path(&args.atmosphere, options)?;
    let extremophiles = Table::from_path(&args.extremophiles, options)?;

    output::print_info(&format!(
        "Loaded {} atmospheric profiles from '{}'",
        atmosphere.len(),
        args.atmosphere.display()
    ));
    output::print_info(&format!(
        "Loaded {} extremophiles from '{}'",
        extremophiles.len(),
        args.extremophiles.display()
    ));

    let result = habitability::match_tables(&atmosphere, &extremophiles)?;

    if result.verdicts.is_empty() {
        output::print_warning("No profile/organism pairs to evaluate, nothing written");
        return Ok(());
    }

    // 可存活组合
    let habitable: Vec<&HabitabilityVerdict> =
        result.verdicts.iter().filter(|v| v.habitable).collect();
    if habitable.is_empty() {
        output::print_warning("No organism can survive in any of the given atmospheres");
    } else {
        output::print_success(&format!(
            "{} of {} combinations are habitable:",
            habitable.len(),
            result.verdicts.len()
        ));
        for v in &habitable {
            output::print_survival(&v.organism, &v.body, v.altitude_km);
        }
    }

    output::print_header("Summary by Organism");
    println!("{}", TextTable::new(summarize(&result.verdicts)));

    export::to_csv(&result.verdicts, &args.output_csv)?;
    output::print_saved("Verdicts", &args.output_csv);

    if !args.no_plot {
        let spinner = progress::create_spinner("Rendering habitability chart")?;
        let rendered = plot::generate_habitability_plot(
            &result.profiles,
            &result.tolerances,
            &args.output_plot,
            args.width,
            args.height,
        );
        spinner.finish_and_clear();
        rendered?;
        output::print_saved("Chart", &args.output_plot);
    }

    output::print_done("Matching complete");
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn verdict(body: &str, organism: &str, habitable: bool) -> HabitabilityVerdict {
        HabitabilityVerdict {
            body: body.to_string(),
            altitude_km: 0.0,
            organism: organism.to_string(),
            habitable,
        }
    }

    #[test]
    fn test_summarize_per_organism() {
        let verdicts = vec![
            verdict("Venus", "Deinococcus radiodurans", true),
            verdict("Venus", "Picrophilus torridus", false),
            verdict("Mars", "Deinococcus radiodurans", true),
            verdict("Mars", "Picrophilus torridus", false),
            verdict("Venus", "Deinococcus radiodurans", true),
        ];
        let rows = summarize(&verdicts);
        assert_eq!(rows.len(), 2);
        assert_eq!(rows[0].organism, "Deinococcus radiodurans");
        assert_eq!(rows[0].habitable_sites, 3);
        assert_eq!(rows[0].evaluated, 3);
        assert_eq!(rows[0].bodies, "Venus, Mars");
        assert_eq!(rows[1].habitable_sites, 0);
        assert_eq!(rows[1].bodies, "-");
    }

    #[test]
    fn test_execute_writes_csv() {
        let dir = tempfile::tempdir().unwrap();
        let atmosphere = dir.path().join("atmosfere.csv");
        let extremophiles = dir.path().join("estremofili.csv");
        std::fs::write(
            &atmosphere,
            "Nome,Altitudine(km),Pressione(atm),Temperatura(°C),Umidita(%),pH,Radiazioni_X(mSv/anno),Radiazioni_UV(W/m2)\n\
             Venus,55,0.5,27,50,1,0.1,10\n",
        )
        .unwrap();
        std::fs::write(
            &extremophiles,
            "Nome,Pressione_min(atm),Pressione_max(atm),Temperatura_min(°C),Temperatura_max(°C),Umidita_min(%),Umidita_max(%),pH_min,pH_max,Radiazioni_X_max(mSv/anno),Radiazioni_UV_max(W/m2)\n\
             Acidianus infernus,0.1,2,0,90,10,100,0,3,1,50\n",
        )
        .unwrap();

        let output_csv = dir.path().join("exobioma_results.csv");
        execute(MatchArgs {
            atmosphere,
            extremophiles,
            delimiter: b',',
            output_csv: output_csv.clone(),
            output_plot: dir.path().join("exobioma_graph.png"),
            no_plot: true,
            width: 800,
            height: 600,
        })
        .unwrap();

        let content = std::fs::read_to_string(&output_csv).unwrap();
        assert!(content.contains("Venus,55.0,Acidianus infernus,true"));
    }

    #[test]
    fn test_execute_empty_table_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let atmosphere = dir.path().join("a.csv");
        let extremophiles = dir.path().join("e.csv");
        std::fs::write(
            &atmosphere,
            "name,altitude_km,pressure_atm,temperature_c,humidity_pct,ph,xray_msv_per_year,uv_w_per_m2\n",
        )
        .unwrap();
        std::fs::write(
            &extremophiles,
            "name,pressure_min_atm,pressure_max_atm,temperature_min_c,temperature_max_c,humidity_min_pct,humidity_max_pct,ph_min,ph_max,xray_max_msv_per_year,uv_max_w_per_m2\n\
             Thermococcus,1,2,50,100,0,100,5,9,10,10\n",
        )
        .unwrap();

        let output_csv = dir.path().join("out.csv");
        execute(MatchArgs {
            atmosphere,
            extremophiles,
            delimiter: b',',
            output_csv: output_csv.clone(),
            output_plot: dir.path().join("out.png"),
            no_plot: false,
            width: 800,
            height: 600,
        })
        .unwrap();
        assert!(!output_csv.exists());
    }
}
