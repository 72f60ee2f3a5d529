//! 素数工具 - 槽位数组长度与二次哈希素数

/// 判断是否为素数（试除法，只用于容量计算）
pub fn is_prime(n: usize) -> bool {
    if n == 2 || n == 3 {
        return true;
    }
    if n < 2 || n % 2 == 0 {
        return false;
    }
    let mut i = 3usize;
    while i.checked_mul(i).map_or(false, |sq| sq <= n) {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// 不小于 `n` 的素数
///
/// 从 `n`（偶数先加一）开始按奇数递增搜索，因此结果总是奇素数；
/// 溢出时返回 `None`。
pub fn next_prime(n: usize) -> Option<usize> {
    let mut candidate = if n % 2 == 0 { n.checked_add(1)? } else { n };
    while !is_prime(candidate) {
        candidate = candidate.checked_add(2)?;
    }
    Some(candidate)
}

/// 严格小于 `n` 的最大素数，`n <= 2` 时没有
pub fn prev_prime(n: usize) -> Option<usize> {
    (2..n).rev().find(|&c| is_prime(c))
}
