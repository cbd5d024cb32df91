// ==========================================
// 学校值勤排班系统 - 教师课表 CSV 导入
// ==========================================
// 格式: 首行表头;每行 = 教师姓名 + 最多 10 节课程
// 规则: 姓名去除引号/逗号后为空或不含字母的行丢弃
//       非 UTF-8 字节按替换字符解码,不影响其他行
// ==========================================

use crate::domain::teacher::Teacher;
use crate::engine::workload_core::PERIODS_PER_DAY;
use crate::importer::error::{ImportError, ImportResult};
use csv::ReaderBuilder;
use std::fs::File;
use std::io::Read;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

// ==========================================
// TeacherCsvReader - 教师课表读取器
// ==========================================
pub struct TeacherCsvReader;

impl TeacherCsvReader {
    /// 读取教师课表文件
    ///
    /// # 返回
    /// - Ok(Vec<Teacher>): 按文件行顺序排列的教师
    /// - Err(FileNotFound / FileReadError / CsvParseError)
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn read_path(path: impl AsRef<Path>) -> ImportResult<Vec<Teacher>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let teachers = Self::read_from(File::open(path)?)?;
        info!(teachers_count = teachers.len(), "教师课表读取完成");
        Ok(teachers)
    }

    /// 读取失败时记录日志并返回空名册
    pub fn load_or_empty(path: impl AsRef<Path>) -> Vec<Teacher> {
        Self::read_path(path).unwrap_or_else(|e| {
            warn!(error = %e, "教师课表读取失败,使用空名册");
            Vec::new()
        })
    }

    /// 从任意输入读取 (首行为表头)
    pub fn read_from<R: Read>(input: R) -> ImportResult<Vec<Teacher>> {
        let mut reader = ReaderBuilder::new()
            .has_headers(true)
            .flexible(true) // 允许行长度不一致
            .from_reader(input);

        let mut teachers = Vec::new();
        for (row_idx, result) in reader.byte_records().enumerate() {
            let record = result?;

            let Some(name) = record
                .get(0)
                .and_then(|raw| Self::clean_name(&String::from_utf8_lossy(raw)))
            else {
                debug!(row = row_idx + 2, "姓名无效,跳过该行");
                continue;
            };
            if std::str::from_utf8(record.as_slice()).is_err() {
                warn!(row = row_idx + 2, teacher = %name, "该行含非 UTF-8 字符,已替换");
            }

            let periods = record
                .iter()
                .skip(1)
                .take(PERIODS_PER_DAY)
                .map(|course| String::from_utf8_lossy(course).trim().to_string());
            teachers.push(Teacher::with_schedule(name, periods));
        }

        Ok(teachers)
    }

    /// 清洗教师姓名
    ///
    /// # 返回
    /// - Some(name): 去除 `"` `'` `,` 并去空白后的姓名
    /// - None: 清洗后为空或不含任何字母
    pub fn clean_name(raw: &str) -> Option<String> {
        let cleaned = raw.replace(['"', '\'', ','], "");
        let cleaned = cleaned.trim();
        if cleaned.chars().any(|c| c.is_ascii_alphabetic()) {
            Some(cleaned.to_string())
        } else {
            None
        }
    }
}
