//! 开放寻址探测哈希表核心实现

use crate::{
    error::TableError,
    hash::{
        prime::next_prime, HashAlgorithm, KeyHasher, ProbeStrategy, ProbeStrategyFactory,
        ProbeStrategyType, SecondaryStep,
    },
    map::{slot::Slot, DEFAULT_CONFIG, DEFAULT_TABLE_SIZE},
    stats::{TableStats, TableStatsSnapshot},
    types::{Key, OperationType},
};
use std::fmt::{Display, Write};

/// 哈希表配置
#[derive(Clone, Debug)]
pub struct ProbeTableConfig {
    // 期望的初始槽位数，实际取不小于它的素数
    pub initial_capacity: usize,
    pub max_load_factor: f64,
    pub growth_factor: usize,
    pub strategy: ProbeStrategyType,
    pub secondary_step: SecondaryStep,
    pub hash_algorithm: HashAlgorithm,
    pub hash_seed: u64,
}

impl Default for ProbeTableConfig {
    fn default() -> Self {
        Self {
            initial_capacity: DEFAULT_TABLE_SIZE,
            max_load_factor: 0.5,
            growth_factor: 2,
            strategy: ProbeStrategyType::DoubleHash,
            secondary_step: SecondaryStep::Fixed,
            hash_algorithm: HashAlgorithm::AHash,
            hash_seed: KeyHasher::DEFAULT_SEED,
        }
    }
}

impl ProbeTableConfig {
    /// 校验配置
    ///
    /// 负载因子必须小于1，保证表中始终留有空槽，探测才能终止。
    pub fn validate(&self) -> Result<(), TableError> {
        if !(self.max_load_factor > 0.0 && self.max_load_factor < 1.0) {
            return Err(TableError::InvalidConfig {
                reason: format!("max_load_factor 必须在 (0, 1) 内: {}", self.max_load_factor),
            });
        }
        if self.growth_factor < 2 {
            return Err(TableError::InvalidConfig {
                reason: format!("growth_factor 至少为2: {}", self.growth_factor),
            });
        }
        Ok(())
    }
}

/// 开放寻址探测哈希表
///
/// 删除只留下墓碑，占用计数（每次成功插入加一）超过 `容量 * max_load_factor`
/// 时扩容到 `next_prime(容量 * growth_factor)` 并重建。
pub struct ProbeTable<K: Key> {
    // 槽位数组，长度总是素数
    slots: Vec<Slot<K>>,

    // 活跃条目数
    size: usize,

    // 自上次重建或清空以来的成功插入数，复用墓碑也计入
    occupied: usize,

    config: ProbeTableConfig,

    hasher: KeyHasher,

    strategy: Box<dyn ProbeStrategy>,

    stats: TableStats,
}

impl<K: Key> ProbeTable<K> {
    /// 创建默认容量 (101) 的哈希表
    pub fn new() -> Self {
        let config = DEFAULT_CONFIG.clone();
        debug_assert!(crate::hash::prime::is_prime(config.initial_capacity));
        let capacity = config.initial_capacity;
        let slots = (0..capacity).map(|_| Slot::Empty).collect();
        Self::from_parts(config, capacity, slots)
    }

    /// 创建容量不小于 `capacity` 的哈希表
    pub fn with_capacity(capacity: usize) -> Result<Self, TableError> {
        Self::with_config(ProbeTableConfig {
            initial_capacity: capacity,
            ..DEFAULT_CONFIG.clone()
        })
    }

    /// 按配置创建哈希表
    pub fn with_config(config: ProbeTableConfig) -> Result<Self, TableError> {
        config.validate()?;
        let capacity = next_prime(config.initial_capacity).ok_or(TableError::CapacityOverflow {
            capacity: config.initial_capacity,
        })?;
        let slots = Self::allocate_slots(capacity)?;
        Ok(Self::from_parts(config, capacity, slots))
    }

    fn from_parts(config: ProbeTableConfig, capacity: usize, slots: Vec<Slot<K>>) -> Self {
        let strategy = ProbeStrategyFactory::new(config.strategy, config.secondary_step)
            .create_strategy(capacity);
        let hasher = KeyHasher::with_seed(config.hash_algorithm, config.hash_seed);

        log_debug!(
            "probe table created: capacity={} strategy={:?} hash={}",
            capacity,
            config.strategy,
            config.hash_algorithm.as_str()
        );

        Self {
            slots,
            size: 0,
            occupied: 0,
            config,
            hasher,
            strategy,
            stats: TableStats::new(),
        }
    }

    /// 分配全空槽位数组，分配失败时返回错误而不是终止进程
    fn allocate_slots(capacity: usize) -> Result<Vec<Slot<K>>, TableError> {
        let mut slots = Vec::new();
        slots
            .try_reserve_exact(capacity)
            .map_err(|_| TableError::AllocationFailed { slots: capacity })?;
        slots.resize_with(capacity, || Slot::Empty);
        Ok(slots)
    }

    /// 定位键所在槽位
    ///
    /// 沿探测序列扫描，遇到空槽或键相同的槽位（活跃或墓碑）时停止。
    /// 键不同的墓碑不会终止扫描。不修改任何槽位，只累计探测次数。
    fn locate(&self, key: &K) -> usize {
        let capacity = self.slots.len();
        let hash = self.hasher.hash_key(key);
        let mut sequence = self.strategy.sequence(hash, capacity);

        let mut probes = 0u64;
        let index = loop {
            let index = sequence.advance();
            probes += 1;
            if self.slots[index].terminates_probe(key) {
                break index;
            }
            // 占用数始终小于容量，必有空槽
            debug_assert!(probes <= capacity as u64, "probe sequence exhausted");
        };

        self.stats.record_probes(probes);
        index
    }

    /// 插入键
    ///
    /// 键已存在时返回 `Ok(false)`；插入后触发的扩容失败时撤销本次插入并返回错误。
    pub fn insert(&mut self, key: K) -> Result<bool, TableError> {
        self.stats.record(OperationType::Insert);

        let index = self.locate(&key);
        if self.slots[index].is_active() {
            return Ok(false);
        }

        let previous = std::mem::replace(&mut self.slots[index], Slot::Occupied { key, active: true });
        self.size += 1;
        // 复用同键墓碑也计入
        self.occupied += 1;

        if self.occupied > self.grow_threshold() {
            if let Err(err) = self.grow() {
                log_error!("grow failed at capacity {}: {}", self.slots.len(), err);
                self.slots[index] = previous;
                self.size -= 1;
                self.occupied -= 1;
                return Err(err);
            }
        }

        Ok(true)
    }

    fn grow_threshold(&self) -> usize {
        (self.slots.len() as f64 * self.config.max_load_factor) as usize
    }

    /// 扩容并重建
    ///
    /// 新数组分配成功前不改动任何状态；墓碑在重建时丢弃。
    fn grow(&mut self) -> Result<(), TableError> {
        let old_capacity = self.slots.len();
        let target = old_capacity
            .checked_mul(self.config.growth_factor)
            .ok_or(TableError::CapacityOverflow { capacity: old_capacity })?;
        let new_capacity =
            next_prime(target).ok_or(TableError::CapacityOverflow { capacity: old_capacity })?;
        let new_slots = Self::allocate_slots(new_capacity)?;

        let old_slots = std::mem::replace(&mut self.slots, new_slots);
        self.strategy.update_capacity(new_capacity);
        self.size = 0;
        self.occupied = 0;

        for key in old_slots.into_iter().filter_map(Slot::into_active_key) {
            let index = self.locate(&key);
            self.slots[index] = Slot::Occupied { key, active: true };
            self.size += 1;
            self.occupied += 1;
        }

        self.stats.record(OperationType::Grow);
        log_info!(
            "probe table grown: {} -> {} slots, {} keys rehashed",
            old_capacity,
            new_capacity,
            self.size
        );
        Ok(())
    }

    /// 查找键，返回表中存储的键
    pub fn find(&self, key: &K) -> Option<&K> {
        self.stats.record(OperationType::Find);
        let index = self.locate(key);
        self.slots[index].active_key()
    }

    /// 查找键并返回可变引用
    ///
    /// 只能修改不参与哈希和相等比较的部分，否则后续定位会失败。
    pub fn find_mut(&mut self, key: &K) -> Option<&mut K> {
        self.stats.record(OperationType::Find);
        let index = self.locate(key);
        self.slots[index].active_key_mut()
    }

    /// 删除键（标记为墓碑），返回是否删除
    pub fn remove(&mut self, key: &K) -> bool {
        self.stats.record(OperationType::Remove);
        let index = self.locate(key);
        match &mut self.slots[index] {
            Slot::Occupied { active, .. } if *active => {
                *active = false;
                self.size -= 1;
                true
            }
            _ => false,
        }
    }

    /// 检查键是否存在
    pub fn contains(&self, key: &K) -> bool {
        self.stats.record(OperationType::Contains);
        let index = self.locate(key);
        self.slots[index].is_active()
    }

    /// 逻辑清空：所有槽位置空（不留墓碑），不重新分配，统计不清零
    pub fn clear(&mut self) {
        for slot in self.slots.iter_mut() {
            *slot = Slot::Empty;
        }
        self.size = 0;
        self.occupied = 0;
        self.stats.record(OperationType::Clear);
        log_debug!("probe table cleared, capacity {}", self.slots.len());
    }

    /// 活跃条目数
    /// 活跃条目数
    pub fn len(&self) -> usize {
        self.size
    }

    /// 同 [`len`](Self::len)
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    /// 槽位数组长度
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// 占用计数：自上次重建或清空以来成功插入的次数
    ///
    /// 不小于活跃条目数；超过 `容量 * max_load_factor` 时扩容。
    pub fn occupied(&self) -> usize {
        self.occupied
    }

    /// 获取负载因子（按占用数计算）
    pub fn load_factor(&self) -> f64 {
        self.occupied as f64 / self.slots.len() as f64
    }

    pub fn total_finds(&self) -> u64 {
        self.stats.total_finds()
    }

    pub fn total_probes(&self) -> u64 {
        self.stats.total_probes()
    }

    /// 获取统计信息
    pub fn stats(&self) -> TableStatsSnapshot {
        self.stats.snapshot()
    }

    /// 导出Prometheus格式指标
    pub fn export_prometheus(&self) -> String {
        self.stats.export_prometheus()
    }

    pub fn strategy_type(&self) -> ProbeStrategyType {
        self.strategy.strategy_type()
    }

    pub fn config(&self) -> &ProbeTableConfig {
        &self.config
    }

    /// 按槽位顺序遍历活跃条目
    pub fn iter(&self) -> Iter<'_, K> {
        Iter {
            slots: self.slots.iter().enumerate(),
        }
    }
}

impl<K: Key + Display> ProbeTable<K> {
    /// 调试输出：按槽位顺序列出最多 `limit` 个活跃条目，每行 `"<槽位>: <键>"`
    pub fn dump(&self, limit: usize) -> String {
        let mut output = String::new();
        for (index, key) in self.iter().take(limit) {
            // 写入 String 不会失败
            let _ = writeln!(output, "{}: {}", index, key);
        }
        output
    }
}

impl<K: Key> Default for ProbeTable<K> {
    fn default() -> Self {
        Self::new()
    }
}

/// 活跃条目迭代器，产出 `(槽位下标, &键)`
pub struct Iter<'a, K> {
    slots: std::iter::Enumerate<std::slice::Iter<'a, Slot<K>>>,
}

impl<'a, K> Iterator for Iter<'a, K> {
    type Item = (usize, &'a K);

    fn next(&mut self) -> Option<Self::Item> {
        self.slots
            .by_ref()
            .find_map(|(index, slot)| slot.active_key().map(|key| (index, key)))
    }
}

impl<'a, K: Key> IntoIterator for &'a ProbeTable<K> {
    type Item = (usize, &'a K);
    type IntoIter = Iter<'a, K>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}
