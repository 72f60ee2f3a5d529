//! 哈希表核心模块 - 探测哈希表及其槽位

pub mod probe_table;
pub mod slot;

pub use probe_table::{Iter, ProbeTable, ProbeTableConfig};
pub use slot::Slot;

use once_cell::sync::Lazy;

/// 默认表长（素数）
pub const DEFAULT_TABLE_SIZE: usize = 101;

/// 全局默认配置
pub static DEFAULT_CONFIG: Lazy<ProbeTableConfig> = Lazy::new(ProbeTableConfig::default);
