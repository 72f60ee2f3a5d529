//! 统计模块 - 哈希表诊断计数

pub mod operation;

pub use operation::{TableStats, TableStatsSnapshot};
