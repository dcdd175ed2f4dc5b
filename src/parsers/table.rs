//! # 分隔文本表格读取器
//!
//! 把 CSV/TSV 文件读取为带表头的字符串表格，并按列名（含别名）定位列。
//!
//! ## 功能
//! - 可配置分隔符与注释字符
//! - 列名匹配忽略大小写与首尾空白
//! - 支持原始数据文件中的意大利语列名别名
//!
//! ## 依赖关系
//! - 被 `parsers/atmosphere.rs`, `parsers/exoplanet.rs` 使用
//! - 使用 `csv` crate

use crate::error::{ExobiomaError, Result};

use csv::{ReaderBuilder, StringRecord, Trim};
use std::fs::File;
use std::io::Read;
use std::path::Path;

/// 列定义：规范名称 + 可接受的别名
#[derive(Debug, Clone, Copy)]
pub struct Column {
    pub name: &'static str,
    pub aliases: &'static [&'static str],
}

impl Column {
    pub const fn new(name: &'static str, aliases: &'static [&'static str]) -> Self {
        Column { name, aliases }
    }

    /// 检查表头是否对应本列
    fn matches(&self, header: &str) -> bool {
        let header = header.trim();
        header.eq_ignore_ascii_case(self.name)
            || self.aliases.iter().any(|a| header.eq_ignore_ascii_case(a))
    }
}

/// 读取选项
#[derive(Debug, Clone, Copy)]
pub struct TableOptions {
    pub delimiter: u8,
    pub comment: Option<u8>,
}

impl Default for TableOptions {
    fn default() -> Self {
        TableOptions {
            delimiter: b',',
            comment: None,
        }
    }
}

impl TableOptions {
    /// 制表符分隔、`#` 注释（系外行星目录格式）
    pub fn catalog() -> Self {
        TableOptions {
            delimiter: b'\t',
            comment: Some(b'#'),
        }
    }
}

/// 内存中的表格
#[derive(Debug, Clone)]
pub struct Table {
    /// 来源描述（文件路径）
    source: String,
    headers: Vec<String>,
    rows: Vec<StringRecord>,
}

impl Table {
    /// 从文件读取
    pub fn from_path(path: &Path, options: TableOptions) -> Result<Table> {
        if !path.exists() {
            return Err(ExobiomaError::FileNotFound {
                path: path.display().to_string(),
            });
        }
        let file = File::open(path).map_err(|e| ExobiomaError::FileReadError {
            path: path.display().to_string(),
            source: e,
        })?;
        Self::from_reader(file, options, &path.display().to_string())
    }

    /// 从任意 reader 读取
    pub fn from_reader<R: Read>(reader: R, options: TableOptions, source: &str) -> Result<Table> {
        let mut rdr = ReaderBuilder::new()
            .delimiter(options.delimiter)
            .comment(options.comment)
            .trim(Trim::All)
            .flexible(true)
            .from_reader(reader);

        let headers = rdr
            .headers()?
            .iter()
            .map(|h| h.trim().to_string())
            .collect::<Vec<_>>();

        let rows = rdr.records().collect::<std::result::Result<Vec<_>, _>>()?;

        Ok(Table {
            source: source.to_string(),
            headers,
            rows,
        })
    }

    pub fn source(&self) -> &str {
        &self.source
    }

    #[cfg(test)]
    pub fn headers(&self) -> &[String] {
        &self.headers
    }

    pub fn rows(&self) -> &[StringRecord] {
        &self.rows
    }

    pub fn len(&self) -> usize {
        self.rows.len()
    }

    /// 查找列索引（可选列）
    pub fn find(&self, column: &Column) -> Option<usize> {
        self.headers.iter().position(|h| column.matches(h))
    }

    /// 表头列表，用于错误信息
    pub fn describe_headers(&self) -> String {
        format!("{}: [{}]", self.source, self.headers.join(", "))
    }
}

/// 读取单元格（越界或空白都视为空）
pub fn cell(row: &StringRecord, index: Option<usize>) -> Option<&str> {
    index
        .and_then(|i| row.get(i))
        .map(str::trim)
        .filter(|s| !s.is_empty())
}

#[cfg(test)]
mod tests {
    use super::*;

    const NAME: Column = Column::new("name", &["Nome"]);
    const PRESSURE: Column = Column::new("pressure_atm", &["Pressione(atm)"]);

    #[test]
    fn test_read_csv_with_aliases() {
        let data = "Nome,Pressione(atm)\nVenus,92\nEarth, 1.0 \n";
        let table = Table::from_reader(data.as_bytes(), TableOptions::default(), "mem").unwrap();

        assert_eq!(table.len(), 2);
        assert_eq!(table.find(&NAME), Some(0));
        assert_eq!(table.find(&PRESSURE), Some(1));
        assert_eq!(cell(&table.rows()[1], table.find(&PRESSURE)), Some("1.0"));
    }

    #[test]
    fn test_header_match_is_case_insensitive() {
        let data = "NAME, Pressure_ATM\nMars,0.006\n";
        let table = Table::from_reader(data.as_bytes(), TableOptions::default(), "mem").unwrap();
        assert_eq!(table.find(&NAME), Some(0));
        assert_eq!(table.find(&PRESSURE), Some(1));
    }

    #[test]
    fn test_catalog_options_skip_comments() {
        let data = "# NASA exoplanet archive export\n# columns follow\npl_name\tpl_masse\nProxima Cen b\t1.07\nTOI-715 b\t\n";
        let table = Table::from_reader(data.as_bytes(), TableOptions::catalog(), "mem").unwrap();

        assert_eq!(table.headers(), &["pl_name".to_string(), "pl_masse".to_string()]);
        assert_eq!(table.len(), 2);

        let mass = Column::new("pl_masse", &[]);
        assert_eq!(cell(&table.rows()[1], table.find(&mass)), None);
    }

    #[test]
    fn test_missing_column() {
        let data = "name\nEarth\n";
        let table = Table::from_reader(data.as_bytes(), TableOptions::default(), "mem").unwrap();
        assert_eq!(table.find(&PRESSURE), None);
        assert_eq!(cell(&table.rows()[0], None), None);
        assert_eq!(table.describe_headers(), "mem: [name]");
    }
}
