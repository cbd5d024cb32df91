// ==========================================
// 测试数据构建器 - 用于集成测试
// ==========================================

use chrono::NaiveDate;
use duty_roster::domain::{Holiday, Teacher};
use duty_roster::engine::workload_core::PERIODS_PER_DAY;

pub fn date(y: i32, m: u32, d: u32) -> NaiveDate {
    NaiveDate::from_ymd_opt(y, m, d).unwrap()
}

// ==========================================
// Teacher 构建器
// ==========================================

pub struct TeacherBuilder {
    name: String,
    periods: Vec<String>,
}

impl TeacherBuilder {
    pub fn new(name: &str) -> Self {
        Self {
            name: name.to_string(),
            periods: vec![String::new(); PERIODS_PER_DAY],
        }
    }

    /// 在指定节次安排普通课程
    pub fn teaches(mut self, period_indices: &[usize]) -> Self {
        for &idx in period_indices {
            self.periods[idx] = format!("MPM2D-0{}", idx + 1);
        }
        self
    }

    /// 在指定节次安排指定课程
    pub fn course(mut self, period_index: usize, code: &str) -> Self {
        self.periods[period_index] = code.to_string();
        self
    }

    pub fn build(self) -> Teacher {
        Teacher::with_schedule(self.name, self.periods)
    }
}

/// 一组满负荷教师: 第 i 位在 i%8 与 (i+3)%8 节空堂,其余 6 个必修节有课
pub fn full_time_staff(count: usize) -> Vec<Teacher> {
    (0..count)
        .map(|i| {
            let free = [i % 8, (i + 3) % 8];
            let teaching: Vec<usize> = (0..8).filter(|p| !free.contains(p)).collect();
            TeacherBuilder::new(&format!("Teacher {:02}", i))
                .teaches(&teaching)
                .build()
        })
        .collect()
}

// ==========================================
// 校历事件
// ==========================================

/// 2024-2025 学年校历事件
pub fn school_year_holidays() -> Vec<Holiday> {
    vec![
        Holiday::new("PA Days", date(2024, 9, 27), date(2024, 9, 27), ""),
        Holiday::new("Holidays", date(2024, 10, 14), date(2024, 10, 14), "Thanksgiving"),
        Holiday::new("Holidays", date(2024, 12, 23), date(2025, 1, 3), "Winter Break"),
        Holiday::new("Exams", date(2025, 1, 23), date(2025, 1, 29), ""),
        Holiday::new("Holidays", date(2025, 3, 17), date(2025, 3, 21), "March Break"),
        Holiday::new("Spirit Week", date(2025, 4, 7), date(2025, 4, 11), ""),
        Holiday::new("Last Day of School", date(2025, 6, 26), date(2025, 6, 26), ""),
    ]
}
