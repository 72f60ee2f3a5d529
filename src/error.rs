//! 统一错误处理 - 哈希表与游戏驱动可能产生的错误类型

/// 探测哈希表可能发生的错误
///
/// 查找类操作（find / contains / remove）只返回 `bool` / `Option`，
/// 只有分配槽位数组和配置校验会失败。
#[derive(Debug, thiserror::Error)]
pub enum TableError {
    #[error("槽位数组分配失败 (请求槽位数: {slots})")]
    AllocationFailed {
        slots: usize,
    },

    #[error("容量溢出，无法扩容 (当前容量: {capacity})")]
    CapacityOverflow {
        capacity: usize,
    },

    #[error("无效配置: {reason}")]
    InvalidConfig {
        reason: String,
    },
}

impl TableError {
    /// 获取错误恢复建议
    pub fn recovery_suggestion(&self) -> Option<&'static str> {
        match self {
            Self::AllocationFailed { .. } => Some("检查系统内存或减小表大小"),
            Self::CapacityOverflow { .. } => Some("拆分数据到多个表"),
            Self::InvalidConfig { .. } => Some("检查配置参数"),
        }
    }

    /// 判断错误是否可恢复
    ///
    /// 分配失败和容量溢出对表本身是致命的，表保持失败前的状态
    pub fn is_recoverable(&self) -> bool {
        !matches!(
            self,
            Self::AllocationFailed { .. } | Self::CapacityOverflow { .. }
        )
    }
}

/// 单词计分游戏错误
#[derive(Debug, thiserror::Error)]
pub enum GameError {
    #[error("读取游戏输入失败: {0}")]
    Io(#[from] std::io::Error),

    #[error("哈希表错误: {0}")]
    Table(#[from] TableError),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_recoverability() {
        assert!(!TableError::AllocationFailed { slots: 7 }.is_recoverable());
        assert!(!TableError::CapacityOverflow { capacity: 3 }.is_recoverable());
        assert!(TableError::InvalidConfig { reason: "x".into() }.is_recoverable());
    }

    #[test]
    fn test_error_display() {
        let err = TableError::AllocationFailed { slots: 211 };
        assert!(err.to_string().contains("211"));
        assert!(err.recovery_suggestion().is_some());

        let err: GameError = TableError::CapacityOverflow { capacity: 5 }.into();
        assert!(matches!(err, GameError::Table(_)));
    }
}
