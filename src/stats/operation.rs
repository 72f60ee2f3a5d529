// src/stats/operation.rs
//! 操作统计 - 跟踪查找次数、探测次数与各类操作计数

use crate::types::OperationType;
use std::sync::atomic::{AtomicU64, Ordering};

/// 操作统计快照
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct TableStatsSnapshot {
    pub find_count: u64,
    pub probe_count: u64,
    pub insert_count: u64,
    pub remove_count: u64,
    pub contains_count: u64,
    pub grow_count: u64,
    pub clear_count: u64,
}

impl TableStatsSnapshot {
    /// 平均每次定位的探测次数
    pub fn average_probes(&self) -> f64 {
        let locates = self.find_count + self.insert_count + self.remove_count + self.contains_count;
        if locates == 0 {
            0.0
        } else {
            self.probe_count as f64 / locates as f64
        }
    }
}

/// 原子操作统计
///
/// 计数只增不减，只有重新构造表才会归零；`clear` 和扩容都不重置。
/// 查找类操作持有 `&self`，所以计数用 Relaxed 原子而不是普通字段。
#[derive(Debug, Default)]
pub struct TableStats {
    find_count: AtomicU64,
    probe_count: AtomicU64,
    insert_count: AtomicU64,
    remove_count: AtomicU64,
    contains_count: AtomicU64,
    grow_count: AtomicU64,
    clear_count: AtomicU64,
}

impl TableStats {
    /// 创建新统计
    pub fn new() -> Self {
        Self::default()
    }

    fn counter(&self, op_type: OperationType) -> &AtomicU64 {
        match op_type {
            OperationType::Insert => &self.insert_count,
            OperationType::Find => &self.find_count,
            OperationType::Remove => &self.remove_count,
            OperationType::Contains => &self.contains_count,
            OperationType::Grow => &self.grow_count,
            OperationType::Clear => &self.clear_count,
        }
    }

    /// 记录一次操作
    pub fn record(&self, op_type: OperationType) {
        self.counter(op_type).fetch_add(1, Ordering::Relaxed);
    }

    /// 记录探测步数
    pub fn record_probes(&self, probes: u64) {
        self.probe_count.fetch_add(probes, Ordering::Relaxed);
    }

    pub fn count(&self, op_type: OperationType) -> u64 {
        self.counter(op_type).load(Ordering::Relaxed)
    }

    pub fn total_finds(&self) -> u64 {
        self.find_count.load(Ordering::Relaxed)
    }

    pub fn total_probes(&self) -> u64 {
        self.probe_count.load(Ordering::Relaxed)
    }

    pub fn snapshot(&self) -> TableStatsSnapshot {
        TableStatsSnapshot {
            find_count: self.find_count.load(Ordering::Relaxed),
            probe_count: self.probe_count.load(Ordering::Relaxed),
            insert_count: self.insert_count.load(Ordering::Relaxed),
            remove_count: self.remove_count.load(Ordering::Relaxed),
            contains_count: self.contains_count.load(Ordering::Relaxed),
            grow_count: self.grow_count.load(Ordering::Relaxed),
            clear_count: self.clear_count.load(Ordering::Relaxed),
        }
    }

    /// 导出Prometheus格式指标
    pub fn export_prometheus(&self) -> String {
        let mut output = String::new();

        for op in OperationType::ALL {
            output.push_str(&format!(
                "# HELP probe_table_operation_{}_count Total {} operations\n",
                op.as_str(), op.as_str()
            ));
            output.push_str(&format!(
                "# TYPE probe_table_operation_{}_count counter\n",
                op.as_str()
            ));
            output.push_str(&format!(
                "probe_table_operation_{}_count {}\n",
                op.as_str(), self.count(op)
            ));
        }

        output.push_str("# HELP probe_table_probe_count Total probe steps\n");
        output.push_str("# TYPE probe_table_probe_count counter\n");
        output.push_str(&format!(
            "probe_table_probe_count {}\n",
            self.total_probes()
        ));

        output
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_record_and_snapshot() {
        let stats = TableStats::new();
        stats.record(OperationType::Find);
        stats.record(OperationType::Find);
        stats.record(OperationType::Insert);
        stats.record_probes(5);

        let snapshot = stats.snapshot();
        assert_eq!(snapshot.find_count, 2);
        assert_eq!(snapshot.insert_count, 1);
        assert_eq!(snapshot.probe_count, 5);
        assert_eq!(stats.total_finds(), 2);
        assert!((snapshot.average_probes() - 5.0 / 3.0).abs() < f64::EPSILON);
    }

    #[test]
    fn test_empty_average() {
        assert_eq!(TableStatsSnapshot::default().average_probes(), 0.0);
    }

    #[test]
    fn test_export_prometheus() {
        let stats = TableStats::new();
        stats.record(OperationType::Grow);
        stats.record_probes(9);
        let metrics = stats.export_prometheus();
        assert!(metrics.contains("probe_table_operation_grow_count 1"));
        assert!(metrics.contains("probe_table_operation_find_count 0"));
        assert!(metrics.contains("probe_table_probe_count 9"));
    }
}
