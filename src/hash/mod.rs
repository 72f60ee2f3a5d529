//! 哈希模块 - 统一管理键哈希与探测序列

pub mod strategy;
pub mod double_hash;
pub mod linear_probe;
pub mod prime;

pub use strategy::{
    HashAlgorithm, KeyHasher, ProbeSequence, ProbeStrategy, ProbeStrategyFactory,
    ProbeStrategyType,
};
pub use double_hash::{DoubleHashStrategy, SecondaryStep};
pub use linear_probe::LinearProbeStrategy;

/// 哈希工具函数
pub fn calculate_slot(hash: u64, capacity: usize) -> usize {
    (hash % capacity as u64) as usize
}
