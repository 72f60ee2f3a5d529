//! Rust开放寻址哈希表库
//!
//! 基于双哈希探测的开放寻址哈希表，删除采用墓碑标记，负载超过阈值时自动扩容。
//!
//! ## 主要特性
//! - 素数长度槽位数组 + 双哈希探测序列
//! - 墓碑（逻辑删除），不做删除压缩
//! - 负载因子触发的整体重建扩容
//! - 内置查找次数 / 探测次数统计
//!
//! ## 快速开始
//!
//! ```rust
//! use probing_hashtable::*;
//!
//! fn main() {
//!     // 创建默认配置的哈希表 (容量101)
//!     let mut table: ProbeTable<String> = ProbeTable::new();
//!
//!     // 插入键
//!     table.insert("alpha".to_string()).expect("插入失败");
//!
//!     // 查找键
//!     if let Some(key) = table.find(&"alpha".to_string()) {
//!         println!("found: {}", key);
//!     }
//!
//!     // 删除键
//!     table.remove(&"alpha".to_string());
//!
//!     // 打印统计信息
//!     println!("{:?}", table.stats());
//! }
//! ```


#![warn(clippy::all)]
#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {
        log::debug!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {
        log::info!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {
        log::warn!($($arg)*)
    };
}

#[cfg(feature = "logging")]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {
        log::error!($($arg)*)
    };
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_debug {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_info {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_warn {
    ($($arg:tt)*) => {};
}

#[cfg(not(feature = "logging"))]
#[macro_export]
macro_rules! log_error {
    ($($arg:tt)*) => {};
}
// 核心模块导出
pub mod error;
pub mod types;
pub mod hash;
pub mod map;
pub mod stats;
pub mod game;

// 公共接口导出
pub use crate::{
    map::{
        ProbeTable,
        ProbeTableConfig,
        Iter,
        DEFAULT_CONFIG,
        DEFAULT_TABLE_SIZE,
    },
    hash::{
        ProbeStrategy,
        ProbeStrategyType,
        DoubleHashStrategy,
        LinearProbeStrategy,
        HashAlgorithm,
        KeyHasher,
        SecondaryStep,
    },
    stats::{
        TableStats,
        TableStatsSnapshot,
    },
    game::{
        WordGame,
        WordInfo,
        GameConfig,
        GameReport,
    },
    error::{TableError, GameError},
    types::{Key, ByteKey, OperationType},
};

// 简化默认类型别名
pub type DefaultTable = ProbeTable<String>;

impl<K: Key> std::fmt::Debug for ProbeTable<K> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("ProbeTable")
            .field("size", &self.len())
            .field("capacity", &self.capacity())
            .field("occupied", &self.occupied())
            .field("load_factor", &self.load_factor())
            .field("strategy", &self.strategy_type())
            .finish()
    }
}

// 便捷功能函数

/// 批量插入
///
/// 返回实际新插入的键数量（重复键不计入），分配失败时立即返回错误
pub fn batch_insert<K: Key>(
    table: &mut ProbeTable<K>,
    keys: impl IntoIterator<Item = K>,
) -> Result<usize, TableError> {
    let mut count = 0;
    for key in keys {
        if table.insert(key)? {
            count += 1;
        }
    }
    Ok(count)
}

/// 批量查询
pub fn batch_find<'a, K: Key + 'a>(
    table: &'a ProbeTable<K>,
    keys: impl IntoIterator<Item = &'a K>,
) -> Vec<Option<&'a K>> {
    keys.into_iter().map(|k| table.find(k)).collect()
}
