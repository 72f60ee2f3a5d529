//! 双哈希策略 - 由同一哈希值派生起点和步长

use crate::hash::{
    prime::{next_prime, prev_prime},
    strategy::{ProbeStrategy, ProbeStrategyType},
};
use crate::map::DEFAULT_TABLE_SIZE;

/// 二次哈希素数的选取方式
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum SecondaryStep {
    /// 固定素数 `next_prime(DEFAULT_TABLE_SIZE / 2)`，与表长无关
    #[default]
    Fixed,
    /// 小于当前表长的最大素数，随扩容重新计算
    Adaptive,
}

/// 固定的二次哈希素数 (53)
pub fn fixed_secondary_prime() -> usize {
    next_prime(DEFAULT_TABLE_SIZE / 2).unwrap_or(53)
}

/// 双哈希策略
///
/// 步长为 `R - (hash mod R)`，落在 `[1, R]`；再对表长取模，结果为0时取1。
/// 表长是素数，非零步长即可遍历全部槽位。
#[derive(Debug, Clone)]
pub struct DoubleHashStrategy {
    secondary_step: SecondaryStep,
    secondary_prime: usize,
}

impl DoubleHashStrategy {
    /// 创建新双哈希策略
    pub fn new(capacity: usize, secondary_step: SecondaryStep) -> Self {
        let mut strategy = Self {
            secondary_step,
            secondary_prime: fixed_secondary_prime(),
        };
        strategy.update_capacity(capacity);
        strategy
    }

    /// 当前使用的二次哈希素数
    pub fn secondary_prime(&self) -> usize {
        self.secondary_prime
    }

    pub fn secondary_step(&self) -> SecondaryStep {
        self.secondary_step
    }

    fn compute_secondary_prime(secondary_step: SecondaryStep, capacity: usize) -> usize {
        match secondary_step {
            SecondaryStep::Fixed => fixed_secondary_prime(),
            SecondaryStep::Adaptive => prev_prime(capacity).unwrap_or(2),
        }
    }
}

impl ProbeStrategy for DoubleHashStrategy {
    fn step(&self, hash: u64, capacity: usize) -> usize {
        let prime = self.secondary_prime as u64;
        let step = (prime - hash % prime) as usize;

        match step % capacity {
            0 => 1,
            s => s,
        }
    }

    fn update_capacity(&mut self, new_capacity: usize) {
        self.secondary_prime = Self::compute_secondary_prime(self.secondary_step, new_capacity);
    }

    fn strategy_type(&self) -> ProbeStrategyType {
        ProbeStrategyType::DoubleHash
    }
}
