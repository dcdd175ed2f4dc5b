//! # shell 子命令实现
//!
//! 计算内置或自定义天体的宜居压力壳层，打印汇总表并生成剖面图。
//!
//! ## 依赖关系
//! - 使用 `cli/shell.rs` 定义的 ShellArgs
//! - 使用 `physics/shell.rs` 计算
//! - 使用 `plot/shell.rs` 绘图

use crate::cli::shell::ShellArgs;
use crate::error::{ExobiomaError, Result};
use crate::physics::shell::pa_to_atm;
use crate::physics::{BodyKind, HabitableShell, ShellBody};
use crate::plot::{self, shell::shell_colormap};
use crate::utils::output;

use std::fs;
use tabled::{Table as TextTable, Tabled};

/// 汇总表的一行
#[derive(Debug, Clone, Tabled)]
struct ShellRow {
    #[tabled(rename = "Body")]
    body: String,
    #[tabled(rename = "Type")]
    kind: &'static str,
    #[tabled(rename = "Radius (km)")]
    radius: String,
    #[tabled(rename = "Surface P (atm)")]
    surface_pressure: String,
    #[tabled(rename = "Shell (km)")]
    bounds: String,
    #[tabled(rename = "Thickness (km)")]
    thickness: String,
    #[tabled(rename = "Volume (km³)")]
    volume: String,
}

impl From<&HabitableShell> for ShellRow {
    fn from(shell: &HabitableShell) -> Self {
        let kind = match shell.body.kind {
            BodyKind::Rocky { .. } => "rocky",
            BodyKind::Gaseous { .. } => "gaseous",
        };
        ShellRow {
            body: shell.body.name.clone(),
            kind,
            radius: format!("{:.0}", shell.body.radius_m / 1000.0),
            surface_pressure: format!("{:.3e}", pa_to_atm(shell.body.surface_pressure_pa)),
            bounds: format!(
                "{:.1} - {:.1}",
                shell.inner_radius_m / 1000.0,
                shell.outer_radius_m / 1000.0
            ),
            thickness: format!("{:.2}", shell.thickness_m() / 1000.0),
            volume: format!("{:.2e}", shell.volume_km3()),
        }
    }
}

/// 由命令行参数确定要计算的天体
pub fn resolve_bodies(args: &ShellArgs) -> Result<Vec<ShellBody>> {
    if let Some(radius_km) = args.radius_km {
        let surface = args.surface_pressure.ok_or_else(|| {
            ExobiomaError::InvalidArgument(
                "--surface-pressure is required for a custom body".to_string(),
            )
        })?;
        let name = args.name.as_deref().unwrap_or("Custom");

        let body = match (args.scale_height_km, args.center_pressure) {
            (Some(h), None) => ShellBody::rocky(name, radius_km * 1e3, surface, h * 1e3),
            (None, Some(pc)) => ShellBody::gaseous(name, radius_km * 1e3, surface, pc),
            _ => {
                return Err(ExobiomaError::InvalidArgument(
                    "a custom body needs exactly one of --scale-height-km (rocky) or --center-pressure (gaseous)"
                        .to_string(),
                ))
            }
        };
        return Ok(vec![body]);
    }

    if args.bodies.is_empty() {
        return Ok(ShellBody::presets());
    }

    args.bodies
        .iter()
        .map(|name| {
            ShellBody::preset(name).ok_or_else(|| {
                let known: Vec<String> = ShellBody::presets().into_iter().map(|b| b.name).collect();
                ExobiomaError::InvalidArgument(format!(
                    "Unknown body '{}'. Available presets: {}",
                    name,
                    known.join(", ")
                ))
            })
        })
        .collect()
}

/// 执行宜居壳层计算
pub fn execute(args: ShellArgs) -> Result<()> {
    output::print_header("Life-Compatible Pressure Shell");

    let bodies = resolve_bodies(&args)?;

    // 先计算全部天体，参数错误时不产生任何文件
    let shells = bodies
        .iter()
        .map(ShellBody::habitable_shell)
        .collect::<Result<Vec<_>>>()?;

    if !args.no_plot {
        fs::create_dir_all(&args.output_dir).map_err(|e| ExobiomaError::FileWriteError {
            path: args.output_dir.display().to_string(),
            source: e,
        })?;
    }

    for shell in &shells {
        output::print_info(&format!(
            "{}: habitable shell from {:.1} km to {:.1} km",
            shell.body.name,
            shell.inner_radius_m / 1000.0,
            shell.outer_radius_m / 1000.0
        ));

        if !args.no_plot {
            let file_name = format!(
                "{}_shell.{}",
                shell.body.name.to_lowercase().replace(' ', "_"),
                args.format
            );
            let path = args.output_dir.join(file_name);
            plot::generate_shell_plot(shell, &shell_colormap(&shell.body.name), &path, args.size)?;
            output::print_saved("Shell chart", &path);
        }
    }

    output::print_header("Habitable Shells");
    let rows: Vec<ShellRow> = shells.iter().map(ShellRow::from).collect();
    println!("{}", TextTable::new(&rows));

    output::print_done(&format!("{} bodies processed", shells.len()));
    Ok(())
}
