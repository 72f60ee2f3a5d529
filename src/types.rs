//! 核心类型定义 - 共享类型和接口

use core::fmt;
use std::{
    fmt::{Debug, Display},
    hash::Hash,
};

/// 键特征
///
/// 表只要求键能产生稳定的哈希值并支持相等比较，且相等的键哈希必须相等。
/// 调试输出 (`ProbeTable::dump`) 另外要求 `Display`。
pub trait Key: Hash + Eq {}

impl<T> Key for T where T: Hash + Eq {}

/// 字节键包装类型
#[derive(Clone, PartialEq, Eq, Hash)]
pub struct ByteKey(pub Vec<u8>);

impl ByteKey {
    /// 创建新字节键
    pub fn new(bytes: Vec<u8>) -> Self {
        Self(bytes)
    }
}

impl Debug for ByteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "ByteKey(")?;
        for byte in &self.0 {
            write!(f, "{:02X}", byte)?;
        }
        write!(f, ")")
    }
}

impl Display for ByteKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for byte in &self.0 {
            write!(f, "{:02X}", byte)?;
        }
        Ok(())
    }
}

impl From<&str> for ByteKey {
    fn from(value: &str) -> Self {
        Self(value.as_bytes().to_vec())
    }
}

impl PartialOrd for ByteKey {
    fn partial_cmp(&self, other: &Self) -> Option<std::cmp::Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for ByteKey {
    fn cmp(&self, other: &Self) -> std::cmp::Ordering {
        self.0.cmp(&other.0)
    }
}

/// 表操作类型，用于统计计数
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationType {
    /// 插入操作
    Insert,
    /// 查找操作
    Find,
    /// 删除操作
    Remove,
    /// 存在性检查
    Contains,
    /// 扩容重建
    Grow,
    /// 清空操作
    Clear,
}

impl OperationType {
    pub const ALL: [OperationType; 6] = [
        OperationType::Insert,
        OperationType::Find,
        OperationType::Remove,
        OperationType::Contains,
        OperationType::Grow,
        OperationType::Clear,
    ];

    /// 转换为字符串表示
    pub fn as_str(&self) -> &'static str {
        match self {
            OperationType::Insert => "insert",
            OperationType::Find => "find",
            OperationType::Remove => "remove",
            OperationType::Contains => "contains",
            OperationType::Grow => "grow",
            OperationType::Clear => "clear",
        }
    }
}
