// ==========================================
// 学校值勤排班系统 - 值勤岗位目录
// ==========================================
// 职责: 固定 12 时段 × 2 岗位的命名拓扑
// 规则: 名称按 time_slot * 2 + position 索引,超出目录长度时回退为 "Duty N"
// ==========================================

use crate::domain::calendar::{Duty, DutyGrid, POSITIONS_PER_SLOT, TIME_SLOTS};

/// 默认岗位目录 (按时段排列)
pub const DEFAULT_DUTY_NAMES: [&str; 11] = [
    // 第 1 节
    "[per 1] Hall",
    // 第 2 节
    "[per 2] Hall",
    // 午餐 A
    "[Lun A] Cafeteria",
    "[Lun A] Library",
    "[Lun A] DDP Rm 209",
    // 午餐 B
    "[Lun B] Cafeteria",
    "[Lun B] Library",
    // 第 3 节
    "[per 3] Hall",
    "[per 3] Library",
    // 第 4 节
    "[per 4] Hall",
    "[per 4] Library",
];

pub const DEFAULT_ROOM: &str = "Various";

// ==========================================
// DutyCatalog - 值勤岗位目录
// ==========================================
#[derive(Debug, Clone)]
pub struct DutyCatalog {
    names: Vec<String>,
    room: String,
}

impl Default for DutyCatalog {
    fn default() -> Self {
        Self::new(
            DEFAULT_DUTY_NAMES.iter().map(|n| n.to_string()).collect(),
            DEFAULT_ROOM,
        )
    }
}

impl DutyCatalog {
    pub fn new(names: Vec<String>, room: impl Into<String>) -> Self {
        Self {
            names,
            room: room.into(),
        }
    }

    pub fn cell_index(time_slot: usize, position: usize) -> usize {
        time_slot * POSITIONS_PER_SLOT + position
    }

    /// 岗位名称
    pub fn name_for(&self, time_slot: usize, position: usize) -> String {
        let index = Self::cell_index(time_slot, position);
        self.names
            .get(index)
            .cloned()
            .unwrap_or_else(|| format!("Duty {}", index + 1))
    }

    pub fn time_label(time_slot: usize) -> String {
        format!("Slot {}", time_slot + 1)
    }

    /// 生成一天的空值勤格网 (24 个已命名、未排班的岗位)
    pub fn seed_grid(&self) -> DutyGrid {
        let mut grid = DutyGrid::new();
        for time_slot in 0..TIME_SLOTS {
            for position in 0..POSITIONS_PER_SLOT {
                let duty = Duty::new(
                    self.name_for(time_slot, position),
                    self.room.clone(),
                    Self::time_label(time_slot),
                );
                grid.set(time_slot, position, Some(duty));
            }
        }
        grid
    }
}
