// ==========================================
// 学校值勤排班系统 - 校历 ICS 导入
// ==========================================
// 格式: BEGIN:VEVENT / END:VEVENT 事件块
// 属性: SUMMARY / DTSTART / DTEND / DESCRIPTION (忽略 ;VALUE=DATE 等参数)
// 规则: 日期解析失败或缺少必填属性的事件块丢弃
//       事件内嵌组件 (VALARM 等) 的属性不计入事件本身
// ==========================================

use crate::domain::calendar::Holiday;
use crate::importer::error::{ImportError, ImportResult};
use chrono::NaiveDate;
use std::path::Path;
use tracing::{debug, info, instrument, warn};

const ICS_DATE_FORMAT: &str = "%Y%m%d";

/// 解析中的事件块
#[derive(Debug, Default)]
struct EventDraft {
    summary: Option<String>,
    start: Option<NaiveDate>,
    end: Option<NaiveDate>,
    description: String,
    malformed: bool,
    // 事件内嵌组件的层数
    nested_depth: usize,
}

impl EventDraft {
    fn finish(self, line: usize) -> Option<Holiday> {
        if self.malformed {
            return None;
        }
        match (self.summary, self.start, self.end) {
            (Some(summary), Some(start), Some(end)) => {
                Some(Holiday::new(summary, start, end, self.description))
            }
            _ => {
                debug!(line, "事件块缺少 SUMMARY/DTSTART/DTEND,丢弃");
                None
            }
        }
    }
}

// ==========================================
// CalendarIcsReader - 校历读取器
// ==========================================
pub struct CalendarIcsReader;

impl CalendarIcsReader {
    /// 读取校历文件
    ///
    /// # 返回
    /// - Ok(Vec<Holiday>): 按文件顺序排列的事件
    /// - Err(FileNotFound / FileReadError)
    #[instrument(skip_all, fields(path = %path.as_ref().display()))]
    pub fn read_path(path: impl AsRef<Path>) -> ImportResult<Vec<Holiday>> {
        let path = path.as_ref();
        if !path.exists() {
            return Err(ImportError::FileNotFound(path.display().to_string()));
        }

        let content = std::fs::read_to_string(path)?;
        let holidays = Self::parse_str(&content);
        info!(holidays_count = holidays.len(), "校历读取完成");
        Ok(holidays)
    }

    /// 读取失败时记录日志并返回空事件列表
    pub fn load_or_empty(path: impl AsRef<Path>) -> Vec<Holiday> {
        Self::read_path(path).unwrap_or_else(|e| {
            warn!(error = %e, "校历读取失败,使用空事件列表");
            Vec::new()
        })
    }

    /// 解析 ICS 文本
    pub fn parse_str(content: &str) -> Vec<Holiday> {
        let mut holidays = Vec::new();
        let mut draft: Option<EventDraft> = None;

        for (line_no, line) in unfold_lines(content) {
            let Some((name, value)) = split_property(&line) else {
                continue;
            };

            match (name.as_str(), draft.as_mut()) {
                ("BEGIN", _) if value.eq_ignore_ascii_case("VEVENT") => {
                    draft = Some(EventDraft::default());
                }
                ("END", Some(event)) if event.nested_depth > 0 => {
                    event.nested_depth -= 1;
                }
                ("END", Some(_)) if value.eq_ignore_ascii_case("VEVENT") => {
                    if let Some(holiday) = draft.take().and_then(|d| d.finish(line_no)) {
                        holidays.push(holiday);
                    }
                }
                ("BEGIN", Some(event)) => event.nested_depth += 1,
                (_, Some(event)) if event.nested_depth > 0 => {}
                ("SUMMARY", Some(event)) => event.summary = Some(unescape_text(value)),
                ("DESCRIPTION", Some(event)) => event.description = unescape_text(value),
                ("DTSTART", Some(event)) | ("DTEND", Some(event)) => {
                    match Self::parse_date(value, line_no, &name) {
                        Ok(date) if name == "DTSTART" => event.start = Some(date),
                        Ok(date) => event.end = Some(date),
                        Err(e) => {
                            warn!(error = %e, "事件日期解析失败,丢弃该事件");
                            event.malformed = true;
                        }
                    }
                }
                _ => {}
            }
        }

        holidays
    }

    /// 解析 ICS 日期值
    ///
    /// # 规则
    /// - 取 'T' 之前的部分,只保留数字,按 YYYYMMDD 解析
    pub fn parse_date(value: &str, line: usize, field: &str) -> ImportResult<NaiveDate> {
        let date_part = value.split('T').next().unwrap_or(value);
        let digits: String = date_part.chars().filter(|c| c.is_ascii_digit()).collect();
        NaiveDate::parse_from_str(&digits, ICS_DATE_FORMAT).map_err(|_| {
            ImportError::DateFormatError {
                line,
                field: field.to_string(),
                value: value.to_string(),
            }
        })
    }
}

/// 展开折行 (以空格或制表符开头的行并入上一行),返回 (起始行号, 内容)
fn unfold_lines(content: &str) -> Vec<(usize, String)> {
    let mut lines: Vec<(usize, String)> = Vec::new();
    for (idx, raw) in content.lines().enumerate() {
        match (raw.strip_prefix([' ', '\t']), lines.last_mut()) {
            (Some(continuation), Some((_, previous))) => previous.push_str(continuation),
            _ => lines.push((idx + 1, raw.to_string())),
        }
    }
    lines
}

/// 拆分属性行: 名称 (忽略 ; 之后的参数,转大写) + 值
fn split_property(line: &str) -> Option<(String, &str)> {
    let (head, value) = line.split_once(':')?;
    let name = head.split(';').next().unwrap_or(head).trim().to_ascii_uppercase();
    Some((name, value.trim()))
}

/// 文本反转义 (自左向右单次扫描,`\\` 之后的字符不再参与转义)
fn unescape_text(value: &str) -> String {
    let mut out = String::with_capacity(value.len());
    let mut chars = value.chars();
    while let Some(c) = chars.next() {
        if c != '\\' {
            out.push(c);
            continue;
        }
        match chars.next() {
            Some('n') | Some('N') => out.push('\n'),
            Some(escaped @ (',' | ';' | '\\')) => out.push(escaped),
            Some(other) => {
                out.push('\\');
                out.push(other);
            }
            None => out.push('\\'),
        }
    }
    out
}
