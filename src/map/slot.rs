//! 槽位状态 - 空槽 / 已占用（活跃或墓碑）

/// 表中的单个槽位
///
/// `Occupied { active: false }` 即墓碑：仍占用探测位置、计入占用数，
/// 但不计入逻辑大小。
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Slot<K> {
    Empty,
    Occupied { key: K, active: bool },
}

impl<K> Slot<K> {
    /// 检查是否为空槽位
    pub fn is_empty(&self) -> bool {
        matches!(self, Slot::Empty)
    }

    /// 检查是否为活跃条目
    pub fn is_active(&self) -> bool {
        matches!(self, Slot::Occupied { active: true, .. })
    }

    /// 活跃条目的键
    pub fn active_key(&self) -> Option<&K> {
        match self {
            Slot::Occupied { key, active: true } => Some(key),
            _ => None,
        }
    }

    pub fn active_key_mut(&mut self) -> Option<&mut K> {
        match self {
            Slot::Occupied { key, active: true } => Some(key),
            _ => None,
        }
    }

    /// 取出活跃条目的键（扩容重建时使用）
    pub fn into_active_key(self) -> Option<K> {
        match self {
            Slot::Occupied { key, active: true } => Some(key),
            _ => None,
        }
    }
}

impl<K: PartialEq> Slot<K> {
    /// 探测在此处终止：空槽，或键相同的已占用槽（含墓碑）
    pub fn terminates_probe(&self, target: &K) -> bool {
        match self {
            Slot::Empty => true,
            Slot::Occupied { key, .. } => key == target,
        }
    }
}
