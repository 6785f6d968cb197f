use std::collections::VecDeque;

use serde::{Deserialize, Serialize};

use rover_types::Location;

/// 轨迹历史上限
pub const PATH_HISTORY_CAPACITY: usize = 50;

/// 轨迹滑动窗口
///
/// 只保留最近 50 个位置，插入顺序即时间顺序；
/// 满了之后追加会淘汰最老的条目。除淘汰外只追加不修改。
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq)]
pub struct PathHistory {
    entries: VecDeque<Location>,
}

impl PathHistory {
    pub fn new() -> Self {
        Self {
            entries: VecDeque::with_capacity(PATH_HISTORY_CAPACITY),
        }
    }

    /// 追加一个位置，必要时淘汰最老的条目
    pub fn push(&mut self, location: Location) {
        if self.entries.len() == PATH_HISTORY_CAPACITY {
            self.entries.pop_front();
        }
        self.entries.push_back(location);
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// 最近一次写入的位置
    pub fn latest(&self) -> Option<&Location> {
        self.entries.back()
    }

    /// 按时间顺序遍历
    pub fn iter(&self) -> impl Iterator<Item = &Location> {
        self.entries.iter()
    }

    /// 按时间顺序导出
    pub fn to_vec(&self) -> Vec<Location> {
        self.entries.iter().cloned().collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn location(i: usize) -> Location {
        Location::new(i as f64, i as f64)
    }

    #[test]
    fn test_capacity_never_exceeded() {
        let mut history = PathHistory::new();
        for i in 0..120 {
            history.push(location(i));
            assert!(history.len() <= PATH_HISTORY_CAPACITY);
        }
        assert_eq!(history.len(), PATH_HISTORY_CAPACITY);
    }

    #[test]
    fn test_window_keeps_last_entries_in_order() {
        let mut history = PathHistory::new();
        for i in 0..75 {
            history.push(location(i));
        }

        // 剩下的正好是最后 50 个，且保持时间顺序
        let kept: Vec<f64> = history.iter().map(|l| l.lat).collect();
        let expected: Vec<f64> = (25..75).map(|i| i as f64).collect();
        assert_eq!(kept, expected);
        assert_eq!(history.latest().unwrap().lat, 74.0);
    }

    #[test]
    fn test_below_capacity_keeps_everything() {
        let mut history = PathHistory::new();
        for i in 0..10 {
            history.push(location(i));
        }
        assert_eq!(history.len(), 10);
        assert_eq!(history.iter().next().unwrap().lat, 0.0);
    }
}
