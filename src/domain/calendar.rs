// ==========================================
// 学校值勤排班系统 - 校历领域模型
// ==========================================
// 职责: 校历日、值勤格网、值勤岗位、假期区间
// 红线: 值勤格网固定 12×2,按 (time_slot, position) 定位
// ==========================================

use crate::domain::types::Rotation;
use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 每日值勤时段数
pub const TIME_SLOTS: usize = 12;

/// 每时段值勤岗位数
pub const POSITIONS_PER_SLOT: usize = 2;

// ==========================================
// Holiday - 校历事件 (假期/PA Day/考试等)
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Holiday {
    pub summary: String,     // 类别摘要
    pub start: NaiveDate,    // 起始日 (含)
    pub end: NaiveDate,      // 结束日 (含)
    pub description: String,
}

impl Holiday {
    pub fn new(
        summary: impl Into<String>,
        start: NaiveDate,
        end: NaiveDate,
        description: impl Into<String>,
    ) -> Self {
        Self {
            summary: summary.into(),
            start,
            end,
            description: description.into(),
        }
    }

    /// 日期是否落在区间内 (两端均含)
    pub fn covers(&self, date: NaiveDate) -> bool {
        self.start <= date && date <= self.end
    }

    /// 摘要是否包含任一关键字 (不区分大小写)
    pub fn matches_any(&self, keywords: &[String]) -> bool {
        let summary = self.summary.to_lowercase();
        keywords
            .iter()
            .filter(|k| !k.trim().is_empty())
            .any(|k| summary.contains(&k.to_lowercase()))
    }
}

// ==========================================
// Duty - 值勤岗位
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Duty {
    pub name: String,
    pub room: String,
    pub time_label: String,
    pub day1_teachers: Vec<String>,
    pub day2_teachers: Vec<String>,
}

impl Duty {
    pub fn new(
        name: impl Into<String>,
        room: impl Into<String>,
        time_label: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            room: room.into(),
            time_label: time_label.into(),
            day1_teachers: Vec::new(),
            day2_teachers: Vec::new(),
        }
    }

    /// 复制岗位描述,不带任何排班
    pub fn placeholder(&self) -> Self {
        Self::new(self.name.clone(), self.room.clone(), self.time_label.clone())
    }

    pub fn teachers(&self, rotation: Rotation) -> &[String] {
        match rotation {
            Rotation::Day1 => &self.day1_teachers,
            Rotation::Day2 => &self.day2_teachers,
        }
    }

    /// 追加教师 (空名忽略)
    pub fn add_teacher(&mut self, rotation: Rotation, teacher: impl Into<String>) {
        let teacher = teacher.into();
        if teacher.trim().is_empty() {
            return;
        }
        match rotation {
            Rotation::Day1 => self.day1_teachers.push(teacher),
            Rotation::Day2 => self.day2_teachers.push(teacher),
        }
    }

    pub fn is_unassigned(&self, rotation: Rotation) -> bool {
        self.teachers(rotation).is_empty()
    }
}

// ==========================================
// DutyGrid - 固定尺寸值勤格网
// ==========================================
// 用途: 定长数组,Clone 即深拷贝
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct DutyGrid {
    cells: [[Option<Duty>; POSITIONS_PER_SLOT]; TIME_SLOTS],
}

impl Default for DutyGrid {
    fn default() -> Self {
        Self {
            cells: std::array::from_fn(|_| std::array::from_fn(|_| None)),
        }
    }
}

impl DutyGrid {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, time_slot: usize, position: usize) -> Option<&Duty> {
        self.cells.get(time_slot)?.get(position)?.as_ref()
    }

    pub fn get_mut(&mut self, time_slot: usize, position: usize) -> Option<&mut Duty> {
        self.cells.get_mut(time_slot)?.get_mut(position)?.as_mut()
    }

    /// 放置岗位 (越界时忽略,返回 false)
    pub fn set(&mut self, time_slot: usize, position: usize, duty: Option<Duty>) -> bool {
        match self
            .cells
            .get_mut(time_slot)
            .and_then(|row| row.get_mut(position))
        {
            Some(cell) => {
                *cell = duty;
                true
            }
            None => false,
        }
    }

    /// 按 (time_slot, position) 顺序遍历已放置的岗位
    pub fn duties(&self) -> impl Iterator<Item = (usize, usize, &Duty)> + '_ {
        self.cells.iter().enumerate().flat_map(|(slot, row)| {
            row.iter()
                .enumerate()
                .filter_map(move |(pos, cell)| cell.as_ref().map(|duty| (slot, pos, duty)))
        })
    }

    pub fn duties_mut(&mut self) -> impl Iterator<Item = (usize, usize, &mut Duty)> + '_ {
        self.cells.iter_mut().enumerate().flat_map(|(slot, row)| {
            row.iter_mut()
                .enumerate()
                .filter_map(move |(pos, cell)| cell.as_mut().map(|duty| (slot, pos, duty)))
        })
    }

    pub fn duty_count(&self) -> usize {
        self.duties().count()
    }

    /// 复制格网结构,清空所有排班
    pub fn placeholders(&self) -> Self {
        let mut grid = self.clone();
        for (_, _, duty) in grid.duties_mut() {
            duty.day1_teachers.clear();
            duty.day2_teachers.clear();
        }
        grid
    }
}

// ==========================================
// Day - 校历日
// ==========================================
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Day {
    pub date: NaiveDate,
    pub is_school_day: bool,
    pub duties: DutyGrid,
}

impl Day {
    pub fn new(date: NaiveDate, is_school_day: bool) -> Self {
        Self {
            date,
            is_school_day,
            duties: DutyGrid::new(),
        }
    }
}

// ==========================================
// SchoolYear - 学年区间
// ==========================================
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct SchoolYear {
    pub start: NaiveDate,
    pub end: NaiveDate,
}

impl SchoolYear {
    pub fn new(start: NaiveDate, end: NaiveDate) -> Self {
        Self { start, end }
    }

    /// 用"最后上课日"事件覆盖学年结束日
    ///
    /// 摘要包含 marker 的首个事件,其起始日作为学年结束日;找不到则保持不变
    pub fn with_last_day_from(self, holidays: &[Holiday], marker: &str) -> Self {
        if marker.trim().is_empty() {
            return self;
        }
        let marker = marker.to_lowercase();
        match holidays
            .iter()
            .find(|h| h.summary.to_lowercase().contains(&marker))
        {
            Some(last_day) => Self {
                start: self.start,
                end: last_day.start,
            },
            None => self,
        }
    }

    /// 学年内所有日期 (两端均含)
    pub fn dates(&self) -> impl Iterator<Item = NaiveDate> {
        let end = self.end;
        self.start.iter_days().take_while(move |d| *d <= end)
    }
}

// ==========================================
// Calendar - 校历
// ==========================================
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct Calendar {
    pub holidays: Vec<Holiday>,
    pub days: Vec<Day>,
}

impl Calendar {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_holidays(holidays: Vec<Holiday>) -> Self {
        Self {
            holidays,
            days: Vec::new(),
        }
    }

    pub fn day(&self, date: NaiveDate) -> Option<&Day> {
        self.days.iter().find(|d| d.date == date)
    }

    /// 未收录的日期视为非上课日
    pub fn is_school_day(&self, date: NaiveDate) -> bool {
        self.day(date).map(|d| d.is_school_day).unwrap_or(false)
    }

    pub fn school_days(&self) -> impl Iterator<Item = &Day> + '_ {
        self.days.iter().filter(|d| d.is_school_day)
    }
}
