//! # 批量执行器
//!
//! 并行处理目录中的每条记录。
//!
//! ## 功能
//! - 基于 rayon 的并行迭代，结果保持输入顺序
//! - 进度条显示
//! - 估算结果分类统计
//!
//! ## 依赖关系
//! - 被 `commands/estimate.rs` 调用
//! - 使用 `utils/progress.rs` 创建进度条
//! - 使用 `rayon` 进行并行计算

use crate::error::{ExobiomaError, Result};
use crate::physics::Estimation;
use crate::utils::progress;

use rayon::prelude::*;

/// 估算结果统计
#[derive(Debug, Default)]
pub struct BatchSummary {
    /// 完整估算数量
    pub estimated: usize,
    /// 输入不可用（输出空行）数量
    pub unusable: usize,
    /// 跳过数量
    pub skipped: usize,
    /// 跳过详情 (行星名称, 原因)
    pub skips: Vec<(String, String)>,
}

impl BatchSummary {
    /// 合并单条结果
    pub fn merge(&mut self, result: &Estimation) {
        match result {
            Estimation::Complete(_) => self.estimated += 1,
            Estimation::Unusable(_) => self.unusable += 1,
            Estimation::Skipped {
                planet_name,
                reason,
            } => {
                self.skipped += 1;
                self.skips.push((planet_name.clone(), reason.clone()));
            }
        }
    }

    pub fn from_results(results: &[Estimation]) -> Self {
        let mut summary = BatchSummary::default();
        for result in results {
            summary.merge(result);
        }
        summary
    }

    /// 总处理数量
    pub fn total(&self) -> usize {
        self.estimated + self.unusable + self.skipped
    }
}

/// 记录级并行执行器
pub struct RecordRunner {
    /// 并行作业数
    jobs: usize,
    show_progress: bool,
}

impl RecordRunner {
    /// 创建执行器，`jobs = 0` 表示使用全部 CPU 核心
    pub fn new(jobs: usize) -> Self {
        let jobs = if jobs == 0 { num_cpus::get() } else { jobs };
        Self {
            jobs,
            show_progress: true,
        }
    }

    /// 关闭进度条
    #[cfg(test)]
    pub fn quiet(mut self) -> Self {
        self.show_progress = false;
        self
    }

    pub fn jobs(&self) -> usize {
        self.jobs
    }

    /// 并行处理记录；处理函数接收记录序号与记录本身
    pub fn run<T, R, F>(&self, records: &[T], processor: F) -> Result<Vec<R>>
    where
        T: Sync,
        R: Send,
        F: Fn(usize, &T) -> R + Sync + Send,
    {
        let pb = if self.show_progress {
            progress::create_progress_bar(records.len() as u64, "Estimating")?
        } else {
            indicatif::ProgressBar::hidden()
        };

        // 配置 rayon 线程池
        let pool = rayon::ThreadPoolBuilder::new()
            .num_threads(self.jobs)
            .build()
            .map_err(|e| {
                ExobiomaError::InvalidArgument(format!("cannot start {} workers: {}", self.jobs, e))
            })?;

        let results: Vec<R> = pool.install(|| {
            records
                .par_iter()
                .enumerate()
                .map(|(i, record)| {
                    let result = processor(i, record);
                    pb.inc(1);
                    result
                })
                .collect()
        });

        pb.finish_and_clear();
        Ok(results)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PlanetaryEstimate;

    #[test]
    fn test_jobs_zero_means_all_cores() {
        assert_eq!(RecordRunner::new(0).jobs(), num_cpus::get());
        assert_eq!(RecordRunner::new(3).jobs(), 3);
    }

    #[test]
    fn test_results_keep_input_order() {
        let records: Vec<u64> = (0..500).collect();
        let out = RecordRunner::new(4)
            .quiet()
            .run(&records, |i, r| (i, r * 2))
            .unwrap();
        assert_eq!(out.len(), 500);
        for (i, (idx, doubled)) in out.into_iter().enumerate() {
            assert_eq!(idx, i);
            assert_eq!(doubled, i as u64 * 2);
        }
    }

    #[test]
    fn test_summary_counts() {
        let results = vec![
            Estimation::Complete(PlanetaryEstimate::unusable("a")),
            Estimation::Unusable(PlanetaryEstimate::unusable("b")),
            Estimation::Skipped {
                planet_name: "c".into(),
                reason: "bad st_teff".into(),
            },
            Estimation::Complete(PlanetaryEstimate::unusable("d")),
        ];
        let summary = BatchSummary::from_results(&results);
        assert_eq!(summary.estimated, 2);
        assert_eq!(summary.unusable, 1);
        assert_eq!(summary.skipped, 1);
        assert_eq!(summary.total(), 4);
        assert_eq!(summary.skips[0].0, "c");
    }
}
