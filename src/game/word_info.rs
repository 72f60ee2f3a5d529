//! 计分单词 - 以单词文本为身份、携带出现次数的表键

use std::{
    fmt,
    hash::{Hash, Hasher},
};

/// 计分单词
///
/// 哈希和相等只看 `word`，`occurrences` 可以在表中原地修改。
#[derive(Debug, Clone)]
pub struct WordInfo {
    word: String,
    occurrences: u32,
}

impl WordInfo {
    pub fn new(word: impl Into<String>) -> Self {
        Self::with_occurrences(word, 0)
    }

    pub fn with_occurrences(word: impl Into<String>, occurrences: u32) -> Self {
        Self {
            word: word.into(),
            occurrences,
        }
    }

    pub fn word(&self) -> &str {
        &self.word
    }

    pub fn occurrences(&self) -> u32 {
        self.occurrences
    }

    pub fn increment_occurrences(&mut self) {
        self.occurrences = self.occurrences.saturating_add(1);
    }

    /// 字母分值之和
    pub fn letter_sum(&self) -> u64 {
        self.word.chars().map(letter_value).sum()
    }

    /// 长度分：字符数减2，限制在 [0, 6]
    pub fn length_val(&self) -> u64 {
        (self.word.chars().count() as u64).saturating_sub(2).min(6)
    }

    /// 出现次数奖励
    pub fn bonus_val(&self) -> u64 {
        match self.occurrences {
            0 => 5,
            1..=5 => 4,
            6..=10 => 3,
            11..=15 => 2,
            _ => 1,
        }
    }

    /// 单词得分 = 字母分 * 长度分 * 奖励分
    pub fn score(&self) -> u64 {
        self.letter_sum() * self.length_val() * self.bonus_val()
    }
}

fn letter_value(c: char) -> u64 {
    match c {
        'a' | 'e' | 'i' | 'u' | 'n' | 'r' | 'o' | 's' | 'l' | 't' => 1,
        'g' | 'd' => 2,
        'm' | 'b' | 'c' | 'p' => 3,
        'y' | 'f' | 'v' | 'w' | 'h' => 4,
        'k' => 5,
        'j' | 'x' => 8,
        _ => 10,
    }
}

impl PartialEq for WordInfo {
    fn eq(&self, other: &Self) -> bool {
        self.word == other.word
    }
}

impl Eq for WordInfo {}

impl Hash for WordInfo {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.word.hash(state);
    }
}

impl fmt::Display for WordInfo {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Word: {}, Occurrence: {} times", self.word, self.occurrences)
    }
}
