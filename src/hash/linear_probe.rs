//! 线性探测策略 - 固定步长1

use crate::hash::strategy::{ProbeStrategy, ProbeStrategyType};

/// 线性探测策略
#[derive(Debug, Clone, Default)]
pub struct LinearProbeStrategy;

impl LinearProbeStrategy {
    /// 创建新线性探测策略
    pub fn new(_capacity: usize) -> Self {
        Self
    }
}

impl ProbeStrategy for LinearProbeStrategy {
    fn step(&self, _hash: u64, capacity: usize) -> usize {
        // 容量为1时退化为原地探测
        1 % capacity.max(2)
    }

    fn update_capacity(&mut self, _new_capacity: usize) {}

    fn strategy_type(&self) -> ProbeStrategyType {
        ProbeStrategyType::LinearProbe
    }
}

// 单元测试
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_linear_probe() {
        let strategy = LinearProbeStrategy::new(101);
        let seq: Vec<usize> = strategy.sequence(99, 101).take(4).collect();
        assert_eq!(seq, vec![99, 100, 0, 1], "备位置应是前一位置的下一个槽位");
    }

    #[test]
    fn test_capacity_update() {
        let mut strategy = LinearProbeStrategy::new(101);
        strategy.update_capacity(211);
        let start = strategy.start(300, 211);
        assert_eq!(start, 89);
        assert_eq!(strategy.step(300, 211), 1);
    }
}
