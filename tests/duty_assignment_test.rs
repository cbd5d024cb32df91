// ==========================================
// 值勤排班流程集成测试
// ==========================================
// 测试目标: 验证校历初始化 → 模板构建 → 模板投影的整体结果
// 覆盖范围: 上课日、节次冲突、学期上限、模板一致性、幂等性、公平选择
// ==========================================

mod helpers;

use chrono::{Datelike, Weekday};
use duty_roster::config::{ConfigManager, RosterConfig};
use duty_roster::logging;
use duty_roster::domain::{Calendar, Duty, DutyGrid, JobType, Rotation, Teacher, Term};
use duty_roster::engine::{
    DutyAssigner, DutyLedger, EligibilityFilter, FairnessSelector, ScheduleProjector,
    TermTemplateBuilder,
};
use helpers::{date, full_time_staff, school_year_holidays, TeacherBuilder};
use std::collections::HashMap;
use std::sync::Arc;

// ==========================================
// 测试辅助函数
// ==========================================

/// 全年名册: 20 位满负荷教师 + 若干特殊岗位
fn full_roster() -> Vec<Teacher> {
    let mut teachers = full_time_staff(20);

    // 体育课 → 免值勤
    teachers.push(
        TeacherBuilder::new("Coach")
            .course(0, "PPL1OP-01")
            .teaches(&[1, 2, 3])
            .build(),
    );

    // 7 节课 → 超负荷,上限 0
    teachers.push(
        TeacherBuilder::new("Overloaded")
            .teaches(&[0, 1, 2, 3, 4, 5, 6])
            .build(),
    );

    // 人工指定 HEAD → 上限 10
    let mut head = TeacherBuilder::new("Department Head")
        .teaches(&[0, 1, 2, 3, 4, 5])
        .build();
    head.set_job_type(JobType::Head);
    teachers.push(head);

    teachers
}

fn run_full_year() -> (Calendar, Vec<Teacher>, duty_roster::engine::AssignmentResult) {
    let assigner = DutyAssigner::new(Arc::new(RosterConfig::default()));
    let teachers = full_roster();
    let mut calendar = assigner.prepare_calendar(school_year_holidays());
    let result = assigner.assign(&mut calendar, &teachers);
    (calendar, teachers, result)
}

fn assigned_names(duty: &Duty) -> impl Iterator<Item = &String> {
    Rotation::ALL
        .into_iter()
        .flat_map(move |rotation| duty.teachers(rotation).iter())
}

// ==========================================
// 测试用例
// ==========================================

#[test]
fn test_full_year_calendar_shape() {
    println!("\n=== 测试：全年校历 ===");
    logging::init_test();

    let (calendar, _, result) = run_full_year();

    // 最后上课日事件把学年截止到 2025-06-26
    assert_eq!(calendar.days.first().map(|d| d.date), Some(date(2024, 9, 3)));
    assert_eq!(calendar.days.last().map(|d| d.date), Some(date(2025, 6, 26)));

    for day in &calendar.days {
        if matches!(day.date.weekday(), Weekday::Sat | Weekday::Sun) {
            assert!(!day.is_school_day, "周末不应为上课日: {}", day.date);
        }
    }
    assert!(!calendar.is_school_day(date(2024, 9, 27)));
    assert!(calendar.is_school_day(date(2024, 9, 26)));
    assert!(!calendar.is_school_day(date(2025, 1, 27)));
    // 非停课事件不影响上课
    assert!(calendar.is_school_day(date(2025, 4, 8)));

    // 4 个学期 × 5 个星期
    assert_eq!(result.templates.len(), 20);
    assert!(result.projection.days_without_template.is_empty());
    assert_eq!(
        result.projection.projected_days,
        calendar.school_days().count()
    );

    println!("✓ 校历天数: {}", calendar.days.len());
    println!("  - 上课日: {}", calendar.school_days().count());
    println!("  - 模板数: {}", result.templates.len());
    println!("=== 测试通过 ===\n");
}

#[test]
fn test_no_teacher_assigned_during_own_class() {
    println!("\n=== 测试：节次冲突 ===");
    logging::init_test();

    let (calendar, teachers, _) = run_full_year();
    let by_name: HashMap<&str, &Teacher> = teachers.iter().map(|t| (t.name(), t)).collect();

    let mut checked = 0;
    for day in calendar.school_days() {
        for (slot, _, duty) in day.duties.duties() {
            assert!(duty.day1_teachers.len() <= 1);
            assert!(duty.day2_teachers.len() <= 1);

            for name in assigned_names(duty) {
                let teacher = by_name[name.as_str()];
                if let Some(period) = EligibilityFilter::period_for_slot(slot) {
                    assert!(
                        !teacher.has_class_in_period(period),
                        "{} 在 {} 第 {} 节有课却被排值勤",
                        name,
                        day.date,
                        period + 1
                    );
                }
                assert!(teacher.max_duties_per_term() > 0, "{} 上限为 0 却被排值勤", name);
                checked += 1;
            }
        }
    }

    assert!(checked > 0);
    println!("✓ 已检查分配: {}", checked);
    println!("=== 测试通过 ===\n");
}

#[test]
fn test_term_caps_match_ledger_snapshots() {
    println!("\n=== 测试：学期上限 ===");
    logging::init_test();

    let (_, teachers, result) = run_full_year();

    for report in &result.term_reports {
        let mut counts: HashMap<&str, u32> = HashMap::new();
        for template in result.templates.iter().filter(|t| t.term == report.term) {
            for (_, _, duty) in template.day1.duties() {
                for name in &duty.day1_teachers {
                    *counts.entry(name.as_str()).or_insert(0) += 1;
                }
            }
            for (_, _, duty) in template.day2.duties() {
                for name in &duty.day2_teachers {
                    *counts.entry(name.as_str()).or_insert(0) += 1;
                }
            }
        }

        for (idx, teacher) in teachers.iter().enumerate() {
            let count = counts.get(teacher.name()).copied().unwrap_or(0);
            assert_eq!(count, report.ledger.assigned(idx), "{}", teacher.name());
            assert!(count <= teacher.max_duties_per_term());
        }

        println!(
            "  - {}: 已排 {} / 未排 {}",
            report.term, report.stats.cells_assigned, report.stats.cells_unassigned
        );
    }

    // HEAD 上限 10
    let head_idx = teachers
        .iter()
        .position(|t| t.name() == "Department Head")
        .unwrap();
    assert_eq!(teachers[head_idx].max_duties_per_term(), 10);
    println!("=== 测试通过 ===\n");
}

#[test]
fn test_days_sharing_term_and_weekday_are_identical() {
    println!("\n=== 测试：模板一致性 ===");
    logging::init_test();

    let (calendar, _, result) = run_full_year();

    let mut seen: HashMap<(Term, u32), &DutyGrid> = HashMap::new();
    for day in calendar.school_days() {
        let template = result.templates.for_date(day.date).unwrap();
        assert_eq!(day.duties, template.merged_grid());

        let key = (Term::of(day.date), day.date.weekday().num_days_from_monday());
        match seen.get(&key) {
            Some(first) => assert_eq!(*first, &day.duties, "date={}", day.date),
            None => {
                seen.insert(key, &day.duties);
            }
        }
    }

    assert_eq!(seen.len(), 20);
    println!("=== 测试通过 ===\n");
}

#[test]
fn test_projection_and_assignment_are_repeatable() {
    println!("\n=== 测试：幂等性 ===");
    logging::init_test();

    let (mut calendar, teachers, result) = run_full_year();
    let first = calendar.days.clone();

    ScheduleProjector::new().project(&mut calendar, &result.templates);
    assert_eq!(calendar.days, first);

    let assigner = DutyAssigner::new(Arc::new(RosterConfig::default()));
    let rerun = assigner.assign(&mut calendar, &teachers);
    assert_eq!(calendar.days, first);
    assert_ne!(rerun.run_id, result.run_id);

    println!("=== 测试通过 ===\n");
}

#[test]
fn test_zero_candidate_cell_leaves_other_cells_assigned() {
    println!("\n=== 测试：无候选岗位 ===");
    logging::init_test();

    let config = RosterConfig {
        school_year_start: date(2024, 9, 30),
        school_year_end: date(2024, 10, 4),
        ..RosterConfig::default()
    };
    let assigner = DutyAssigner::new(Arc::new(ConfigManager::from_config(config).unwrap()));

    // 三人第 1 节均有课,第 2 节均空堂
    let teachers: Vec<Teacher> = ["A", "B", "C"]
        .iter()
        .map(|name| TeacherBuilder::new(name).teaches(&[0, 2, 3, 4, 5, 6]).build())
        .collect();

    let mut calendar = assigner.prepare_calendar(Vec::new());
    let result = assigner.assign(&mut calendar, &teachers);
    assert!(result.unassigned_cells() > 0);

    let monday = calendar.day(date(2024, 9, 30)).unwrap();
    for position in 0..2 {
        assert!(monday.duties.get(0, position).unwrap().day1_teachers.is_empty());
        assert!(monday.duties.get(0, position).unwrap().day2_teachers.is_empty());
    }
    assert_eq!(monday.duties.get(1, 0).unwrap().day1_teachers, vec!["A".to_string()]);
    assert_eq!(monday.duties.get(1, 1).unwrap().day1_teachers, vec!["B".to_string()]);

    println!("=== 测试通过 ===\n");
}

#[test]
fn test_fairness_prefers_lowest_count_then_input_order() {
    println!("\n=== 测试：公平选择 ===");
    logging::init_test();

    // A/B/C 均为 2/6 负荷 (上限 6),第 1 节空堂
    let teachers: Vec<Teacher> = ["A", "B", "C"]
        .iter()
        .map(|name| TeacherBuilder::new(name).teaches(&[1, 2]).build())
        .collect();
    assert!(teachers.iter().all(|t| t.max_duties_per_term() == 6));

    let filter = EligibilityFilter::new();
    let selector = FairnessSelector::new();
    let tuesday = date(2024, 10, 1);
    let mut ledger = DutyLedger::from_counts(vec![4, 5, 6]);

    // Day1: C 已达上限,A 计数最低
    let eligible = filter.eligible_teachers(&teachers, &ledger, 0, tuesday, Rotation::Day1);
    assert_eq!(eligible, vec![0, 1]);
    assert_eq!(selector.select(eligible, &mut ledger), Some(0));

    // Day2: A/B 并列,按名册顺序选 A
    let eligible = filter.eligible_teachers(&teachers, &ledger, 0, tuesday, Rotation::Day2);
    assert_eq!(selector.select(eligible, &mut ledger), Some(0));
    assert_eq!(ledger.counts(), &[6, 5, 6]);

    // A 也到上限后只剩 B
    let eligible = filter.eligible_teachers(&teachers, &ledger, 0, tuesday, Rotation::Day1);
    assert_eq!(eligible, vec![1]);

    println!("=== 测试通过 ===\n");
}

#[test]
fn test_empty_roster_produces_unassigned_calendar() {
    println!("\n=== 测试：空名册 ===");
    logging::init_test();

    let builder = TermTemplateBuilder::default();
    let assigner = DutyAssigner::new(Arc::new(RosterConfig::default()));
    let mut calendar = assigner.prepare_calendar(school_year_holidays());

    let mut ledger = DutyLedger::default();
    let build = builder.build_all(&calendar, &[], &mut ledger);
    assert_eq!(build.book.len(), 20);

    let result = assigner.assign(&mut calendar, &[]);
    assert!(calendar
        .school_days()
        .all(|d| d.duties.duties().all(|(_, _, duty)| assigned_names(duty).count() == 0)));
    assert_eq!(result.unassigned_cells(), 20 * 2 * 24);

    println!("=== 测试通过 ===\n");
}
