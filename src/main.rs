// ==========================================
// 学校值勤排班系统 - 命令行入口
// ==========================================
// 用法: duty-roster <teachers.csv> <calendar.ics> [config.json]
// 输出: stdout 打印排班结果 JSON,日志写入 stderr
// ==========================================

use anyhow::{bail, Context, Result};
use duty_roster::config::{ConfigManager, RosterConfigReader};
use duty_roster::domain::TeacherRosterSummary;
use duty_roster::engine::{DutyAssigner, TermTemplate};
use duty_roster::importer::{CalendarIcsReader, TeacherCsvReader};
use duty_roster::logging;
use serde::Serialize;
use std::path::PathBuf;
use std::sync::Arc;

/// 命令行输出
#[derive(Serialize)]
struct RosterOutput<'a> {
    version: &'a str,
    summary: duty_roster::engine::AssignmentSummary,
    roster: TeacherRosterSummary,
    templates: Vec<&'a TermTemplate>,
}

fn print_usage() {
    eprintln!("==================================================");
    eprintln!("{} v{}", duty_roster::APP_NAME, duty_roster::VERSION);
    eprintln!("==================================================");
    eprintln!("用法: duty-roster <teachers.csv> <calendar.ics> [config.json]");
    eprintln!();
    eprintln!("环境变量:");
    eprintln!("  RUST_LOG                日志级别 (默认 info)");
    eprintln!("  DUTY_ROSTER_CONFIG      配置文件路径");
    eprintln!("  DUTY_ROSTER_LOG_FORMAT  日志格式 text/json");
}

fn main() -> Result<()> {
    logging::init();

    let mut args = std::env::args().skip(1);
    let (Some(teachers_path), Some(calendar_path)) = (args.next(), args.next()) else {
        print_usage();
        bail!("缺少输入文件参数");
    };
    let config_path = args.next().map(PathBuf::from);

    let config = ConfigManager::load(config_path.as_deref()).context("加载排班配置失败")?;
    tracing::info!(
        source = ?config.source(),
        start = %config.school_year().start,
        end = %config.school_year().end,
        "排班配置就绪"
    );

    let teachers = TeacherCsvReader::load_or_empty(&teachers_path);
    let holidays = CalendarIcsReader::load_or_empty(&calendar_path);
    let roster = TeacherRosterSummary::from_teachers(&teachers);
    for warning in &roster.warnings {
        tracing::warn!("{}", warning);
    }

    let assigner = DutyAssigner::new(Arc::new(config));
    let mut calendar = assigner.prepare_calendar(holidays);
    let result = assigner.assign(&mut calendar, &teachers);

    let output = RosterOutput {
        version: duty_roster::VERSION,
        summary: result.summary(),
        roster,
        templates: result.templates.iter().collect(),
    };
    let json = serde_json::to_string_pretty(&output).context("序列化排班结果失败")?;
    println!("{}", json);

    Ok(())
}
