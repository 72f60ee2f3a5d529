//! 单词计分游戏 - 以探测哈希表作为词频表

pub mod word_info;

pub use word_info::WordInfo;

use crate::{
    error::GameError,
    map::{ProbeTable, ProbeTableConfig},
};
use std::{
    fmt,
    fs::File,
    io::{BufRead, BufReader},
    path::Path,
};

/// 游戏配置
#[derive(Debug, Clone)]
pub struct GameConfig {
    /// 报告中列出的条目上限，`None` 时取本局新出现的单词数
    pub dump_limit: Option<usize>,
    pub lowercase: bool,
    pub skip_blank_lines: bool,
    pub table: ProbeTableConfig,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            dump_limit: None,
            lowercase: true,
            skip_blank_lines: false,
            table: ProbeTableConfig::default(),
        }
    }
}

/// 一局游戏的结果
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct GameReport {
    pub name: String,
    pub score: u64,
    pub newly_seen: usize,
    pub total_finds: u64,
    pub total_probes: u64,
    pub size: usize,
    pub capacity: usize,
    pub dump_limit: usize,
    pub dump: String,
}

impl fmt::Display for GameReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "The score for {} is: {}", self.name, self.score)?;
        writeln!(f, "----------Hash Table Statistics for {}----------", self.name)?;
        writeln!(f, "Total finds on the hash table: {}", self.total_finds)?;
        writeln!(f, "Total probes on the hash table: {}", self.total_probes)?;
        writeln!(f, "Items stored in the hash table: {}", self.size)?;
        writeln!(f, "Physical length of the hash table: {}", self.capacity)?;
        writeln!(f, "Words seen for the first time: {}", self.newly_seen)?;
        writeln!(f, "First {} entries of the table:", self.dump_limit)?;
        write!(f, "{}", self.dump)
    }
}

/// 单词计分游戏
///
/// 每行一个单词。首次出现的单词按出现次数0计分后入表，之后按表中记录的
/// 出现次数计分，再把次数加一。
pub struct WordGame {
    config: GameConfig,
    table: ProbeTable<WordInfo>,
}

impl WordGame {
    pub fn new() -> Self {
        Self {
            config: GameConfig::default(),
            table: ProbeTable::new(),
        }
    }

    pub fn with_config(config: GameConfig) -> Result<Self, GameError> {
        let table = ProbeTable::with_config(config.table.clone())?;
        Ok(Self { config, table })
    }

    pub fn table(&self) -> &ProbeTable<WordInfo> {
        &self.table
    }

    /// 处理一个单词，返回得分；首次出现时第二个返回值为 true
    pub fn score_word(&mut self, word: &str) -> Result<(u64, bool), GameError> {
        let word = if self.config.lowercase {
            word.to_lowercase()
        } else {
            word.to_string()
        };
        let probe = WordInfo::new(word);

        if let Some(existing) = self.table.find_mut(&probe) {
            let score = existing.score();
            existing.increment_occurrences();
            return Ok((score, false));
        }

        let score = probe.score();
        let mut fresh = probe;
        fresh.increment_occurrences();
        if !self.table.insert(fresh)? {
            // find 未命中时不会出现重复
            log_warn!("word was reported missing but insert found it present");
            return Ok((0, false));
        }
        Ok((score, true))
    }

    /// 从读取器逐行进行一局游戏
    pub fn play<R: BufRead>(&mut self, name: &str, reader: R) -> Result<GameReport, GameError> {
        log_info!("playing {}", name);

        let mut score = 0u64;
        let mut newly_seen = 0usize;
        for (line_no, line) in reader.lines().enumerate() {
            let line = line?;
            if self.config.skip_blank_lines && line.trim().is_empty() {
                log_warn!("{}:{} blank line skipped", name, line_no + 1);
                continue;
            }
            let (word_score, is_new) = self.score_word(&line)?;
            score += word_score;
            if is_new {
                newly_seen += 1;
            }
        }

        let dump_limit = self.config.dump_limit.unwrap_or(newly_seen);
        let report = GameReport {
            name: name.to_string(),
            score,
            newly_seen,
            total_finds: self.table.total_finds(),
            total_probes: self.table.total_probes(),
            size: self.table.len(),
            capacity: self.table.capacity(),
            dump_limit,
            dump: self.table.dump(dump_limit),
        };
        log_info!(
            "finished {}: score={} distinct={} capacity={}",
            name,
            report.score,
            report.size,
            report.capacity
        );
        Ok(report)
    }

    /// 读取文件进行一局游戏
    pub fn play_file(&mut self, path: impl AsRef<Path>) -> Result<GameReport, GameError> {
        let path = path.as_ref();
        let file = File::open(path)?;
        self.play(&path.display().to_string(), BufReader::new(file))
    }
}

impl Default for WordGame {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;
    use test_log::test;

    #[test]
    fn test_play_small_game() {
        let mut game = WordGame::new();
        let input = "Tree\ntree\ndog\nTREE\n";
        let report = game.play("small", Cursor::new(input)).unwrap();

        // tree: 4*2*5 + 4*2*4 + 4*2*4, dog: 5*1*5
        assert_eq!(report.score, 40 + 32 + 32 + 25);
        assert_eq!(report.newly_seen, 2);
        assert_eq!(report.size, 2);
        assert_eq!(report.total_finds, 4);
        assert_eq!(report.capacity, 101);

        let stored = game.table().find(&WordInfo::new("tree")).unwrap();
        assert_eq!(stored.occurrences(), 3);
        assert!(report.dump.contains("Word: tree, Occurrence: 3 times"));
    }

    #[test]
    fn test_case_sensitive_config() {
        let config = GameConfig {
            lowercase: false,
            ..GameConfig::default()
        };
        let mut game = WordGame::with_config(config).unwrap();
        let report = game.play("case", Cursor::new("Tree\ntree\n")).unwrap();
        assert_eq!(report.size, 2);
    }

    #[test]
    fn test_skip_blank_lines() {
        let config = GameConfig {
            skip_blank_lines: true,
            ..GameConfig::default()
        };
        let mut game = WordGame::with_config(config).unwrap();
        let report = game.play("blank", Cursor::new("tree\n\n  \ntree\n")).unwrap();
        assert_eq!(report.size, 1);
        assert_eq!(report.total_finds, 2);
    }

    #[test]
    fn test_dump_limit() {
        let config = GameConfig {
            dump_limit: Some(2),
            ..GameConfig::default()
        };
        let mut game = WordGame::with_config(config).unwrap();
        let report = game.play("limit", Cursor::new("a\nb\nc\nd\n")).unwrap();
        assert_eq!(report.dump.lines().count(), 2);
        assert!(report.to_string().contains("First 2 entries"));
    }

    #[test]
    fn test_dump_defaults_to_newly_seen() {
        let mut game = WordGame::new();
        let report = game.play("default", Cursor::new("a\nb\na\nc\n")).unwrap();
        assert_eq!(report.newly_seen, 3);
        assert_eq!(report.dump_limit, 3);
        assert_eq!(report.dump.lines().count(), 3);

        let text = report.to_string();
        assert!(text.contains("Words seen for the first time: 3"));
        assert!(text.contains("First 3 entries"));
    }

    #[test]
    fn test_missing_file() {
        let mut game = WordGame::new();
        let err = game.play_file("/nonexistent/game0.txt").unwrap_err();
        assert!(matches!(err, GameError::Io(_)));
    }
}
