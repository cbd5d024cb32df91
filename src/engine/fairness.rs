// ==========================================
// 学校值勤排班系统 - 公平选择引擎
// ==========================================
// 职责: 在有资格的教师中挑选本学期值勤最少者
// 输入: 有资格教师下标 (输入顺序) + 值勤计数账本
// 输出: 选中教师下标,账本即时 +1
// 规则: 贪心、顺序相关,非全局最优
// ==========================================

use serde::{Deserialize, Serialize};

// ==========================================
// DutyLedger - 学期值勤计数账本
// ==========================================
// 下标与教师列表一一对应;学期切换时显式 reset
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct DutyLedger {
    counts: Vec<u32>,
}

impl DutyLedger {
    pub fn new(teacher_count: usize) -> Self {
        Self {
            counts: vec![0; teacher_count],
        }
    }

    /// 从已有计数创建 (用于续排或测试)
    pub fn from_counts(counts: Vec<u32>) -> Self {
        Self { counts }
    }

    /// 教师本学期已排值勤数 (越界视为 0)
    pub fn assigned(&self, teacher_index: usize) -> u32 {
        self.counts.get(teacher_index).copied().unwrap_or(0)
    }

    pub fn increment(&mut self, teacher_index: usize) {
        if teacher_index >= self.counts.len() {
            self.counts.resize(teacher_index + 1, 0);
        }
        self.counts[teacher_index] += 1;
    }

    /// 学期切换: 全部清零
    pub fn reset(&mut self) {
        self.counts.iter_mut().for_each(|c| *c = 0);
    }

    pub fn counts(&self) -> &[u32] {
        &self.counts
    }

    pub fn total(&self) -> u32 {
        self.counts.iter().sum()
    }
}

// ==========================================
// FairnessSelector - 公平选择引擎
// ==========================================
#[derive(Debug, Clone, Default)]
pub struct FairnessSelector {
    // 无状态引擎,计数全部在 DutyLedger 中
}

impl FairnessSelector {
    pub fn new() -> Self {
        Self {}
    }

    /// 按本学期值勤数升序排列候选人
    ///
    /// 稳定排序: 计数相同保持输入顺序
    pub fn rank(&self, mut eligible: Vec<usize>, ledger: &DutyLedger) -> Vec<usize> {
        eligible.sort_by_key(|idx| ledger.assigned(*idx));
        eligible
    }

    /// 选择一名教师并立即计数
    ///
    /// # 返回
    /// - Some(idx): 选中教师下标,ledger 中该教师计数已 +1
    /// - None: 无候选人,ledger 不变
    pub fn select(&self, eligible: Vec<usize>, ledger: &mut DutyLedger) -> Option<usize> {
        let selected = self.rank(eligible, ledger).into_iter().next()?;
        ledger.increment(selected);
        Some(selected)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_select_lowest_count_with_stable_ties() {
        let selector = FairnessSelector::new();
        let mut ledger = DutyLedger::from_counts(vec![0, 1, 2]);

        // Day1: A 计数最低
        assert_eq!(selector.select(vec![0, 1, 2], &mut ledger), Some(0));
        assert_eq!(ledger.counts(), &[1, 1, 2]);

        // Day2: A、B 并列,按输入顺序选 A
        assert_eq!(selector.select(vec![0, 1], &mut ledger), Some(0));
        assert_eq!(ledger.counts(), &[2, 1, 2]);
    }

    #[test]
    fn test_rank_respects_input_order_on_ties() {
        let selector = FairnessSelector::new();
        let ledger = DutyLedger::from_counts(vec![3, 1, 1, 0]);
        assert_eq!(selector.rank(vec![2, 0, 1, 3], &ledger), vec![3, 2, 1, 0]);
    }

    #[test]
    fn test_select_without_candidates_leaves_ledger_untouched() {
        let selector = FairnessSelector::new();
        let mut ledger = DutyLedger::from_counts(vec![4, 2]);
        assert_eq!(selector.select(Vec::new(), &mut ledger), None);
        assert_eq!(ledger.counts(), &[4, 2]);
    }

    #[test]
    fn test_ledger_reset_and_growth() {
        let mut ledger = DutyLedger::new(2);
        ledger.increment(1);
        ledger.increment(3);
        assert_eq!(ledger.counts(), &[0, 1, 0, 1]);
        assert_eq!(ledger.total(), 2);
        ledger.reset();
        assert_eq!(ledger.total(), 0);
        assert_eq!(ledger.assigned(10), 0);
    }
}
