//! 探测策略模块 - 定义探测序列与键哈希算法

use crate::hash::{calculate_slot, double_hash::SecondaryStep, DoubleHashStrategy, LinearProbeStrategy};
use ahash::RandomState;
use std::{
    fmt,
    hash::{BuildHasher, Hash, Hasher},
};

/// 探测策略类型
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProbeStrategyType {
    DoubleHash,
    LinearProbe,
}

/// 哈希算法选择
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HashAlgorithm {
    AHash,
    XxHash,
    Default,
}

impl HashAlgorithm {
    pub fn as_str(&self) -> &'static str {
        match self {
            HashAlgorithm::AHash => "ahash",
            HashAlgorithm::XxHash => "xxhash",
            HashAlgorithm::Default => "default",
        }
    }
}

/// 键哈希器 - 为任意 `Hash` 键产生确定的64位哈希值
///
/// 同一个 `KeyHasher` 对相等的键总是给出相同结果，扩容时沿用同一实例。
#[derive(Clone)]
pub struct KeyHasher {
    algorithm: HashAlgorithm,
    seed: u64,
    ahash_state: RandomState,
}

impl KeyHasher {
    pub const DEFAULT_SEED: u64 = 42;

    /// 使用默认种子创建
    pub fn new(algorithm: HashAlgorithm) -> Self {
        Self::with_seed(algorithm, Self::DEFAULT_SEED)
    }

    /// 使用指定种子创建
    pub fn with_seed(algorithm: HashAlgorithm, seed: u64) -> Self {
        Self {
            algorithm,
            seed,
            // 固定四个种子，保证跨进程结果一致
            ahash_state: RandomState::with_seeds(seed, seed ^ 0x9E37_79B9, seed.rotate_left(17), !seed),
        }
    }

    pub fn algorithm(&self) -> HashAlgorithm {
        self.algorithm
    }

    /// 计算键的哈希值
    pub fn hash_key<K: Hash + ?Sized>(&self, key: &K) -> u64 {
        match self.algorithm {
            HashAlgorithm::AHash => {
                let mut hasher = self.ahash_state.build_hasher();
                key.hash(&mut hasher);
                hasher.finish()
            }
            HashAlgorithm::XxHash => {
                let mut hasher = twox_hash::XxHash64::with_seed(self.seed);
                key.hash(&mut hasher);
                hasher.finish()
            }
            HashAlgorithm::Default => {
                let mut hasher = std::collections::hash_map::DefaultHasher::new();
                key.hash(&mut hasher);
                hasher.finish()
            }
        }
    }
}

impl fmt::Debug for KeyHasher {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("KeyHasher")
            .field("algorithm", &self.algorithm)
            .field("seed", &self.seed)
            .finish()
    }
}

/// 探测策略特征
///
/// 策略只负责把哈希值映射成探测序列 `start, start+step, start+2*step, ...`
/// (模容量)；槽位状态判断由表完成。
pub trait ProbeStrategy: Send + Sync {
    /// 首个探测位置
    fn start(&self, hash: u64, capacity: usize) -> usize {
        calculate_slot(hash, capacity)
    }

    /// 探测步长，结果在 `[1, capacity)` 内，绝不为0
    fn step(&self, hash: u64, capacity: usize) -> usize;

    /// 更新容量（扩容后调用）
    fn update_capacity(&mut self, new_capacity: usize);

    /// 获取策略类型
    fn strategy_type(&self) -> ProbeStrategyType;

    /// 生成探测序列
    fn sequence(&self, hash: u64, capacity: usize) -> ProbeSequence {
        ProbeSequence::new(self.start(hash, capacity), self.step(hash, capacity), capacity)
    }
}

/// 探测序列（无限迭代器），由调用方在遇到空槽或匹配键时停止
#[derive(Debug, Clone)]
pub struct ProbeSequence {
    position: usize,
    step: usize,
    capacity: usize,
}

impl ProbeSequence {
    pub fn new(start: usize, step: usize, capacity: usize) -> Self {
        debug_assert!(capacity > 0, "容量必须为正");
        Self {
            position: start % capacity,
            step: step % capacity,
            capacity,
        }
    }

    pub fn step(&self) -> usize {
        self.step
    }

    /// 返回当前位置并前进一步
    pub fn advance(&mut self) -> usize {
        let current = self.position;
        // position, step 都小于 capacity，相加不会溢出
        self.position = (self.position + self.step) % self.capacity;
        current
    }
}

impl Iterator for ProbeSequence {
    type Item = usize;

    fn next(&mut self) -> Option<usize> {
        Some(self.advance())
    }
}

/// 探测策略工厂
#[derive(Debug, Clone, Copy)]
pub struct ProbeStrategyFactory {
    strategy_type: ProbeStrategyType,
    secondary_step: SecondaryStep,
}

impl ProbeStrategyFactory {
    /// 创建新工厂
    pub fn new(strategy_type: ProbeStrategyType, secondary_step: SecondaryStep) -> Self {
        Self {
            strategy_type,
            secondary_step,
        }
    }

    /// 创建探测策略
    pub fn create_strategy(&self, capacity: usize) -> Box<dyn ProbeStrategy> {
        match self.strategy_type {
            ProbeStrategyType::DoubleHash => {
                Box::new(DoubleHashStrategy::new(capacity, self.secondary_step))
            }
            ProbeStrategyType::LinearProbe => Box::new(LinearProbeStrategy::new(capacity)),
        }
    }
}
