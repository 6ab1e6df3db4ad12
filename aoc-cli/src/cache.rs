//! Local puzzle data: inputs and recorded answers

use crate::error::CacheError;
use std::fs;
use std::path::{Path, PathBuf};

const INPUT_FILE: &str = "input";

/// File-based store for one event's puzzle data
///
/// Directory structure: `{data_dir}/day{day:02}/input` plus
/// `part1.solution` and `part2.solution` next to it.
pub struct InputCache {
    data_dir: PathBuf,
}

impl InputCache {
    pub fn new(data_dir: PathBuf) -> Self {
        Self { data_dir }
    }

    pub fn day_dir(&self, day: u8) -> PathBuf {
        self.data_dir.join(format!("day{:02}", day))
    }

    pub fn input_path(&self, day: u8) -> PathBuf {
        self.day_dir(day).join(INPUT_FILE)
    }

    pub fn solution_path(&self, day: u8, part: u8) -> PathBuf {
        self.day_dir(day).join(format!("part{}.solution", part))
    }

    /// Check if input is cached
    pub fn contains(&self, day: u8) -> bool {
        self.input_path(day).exists()
    }

    pub fn read_input(path: &Path) -> Result<String, CacheError> {
        fs::read_to_string(path).map_err(|source| CacheError::Io {
            path: path.to_path_buf(),
            source,
        })
    }

    /// Store input in cache, returning where it went
    pub fn put(&self, day: u8, input: &str) -> Result<PathBuf, CacheError> {
        let dir = self.day_dir(day);
        fs::create_dir_all(&dir).map_err(|e| {
            CacheError::DirCreation(format!("Failed to create {}: {}", dir.display(), e))
        })?;

        let path = self.input_path(day);
        fs::write(&path, input).map_err(|source| CacheError::Io {
            path: path.clone(),
            source,
        })?;
        Ok(path)
    }

    /// First line of the recorded answer; a missing or empty file means none
    pub fn expected_answer(&self, day: u8, part: u8) -> Result<Option<String>, CacheError> {
        let path = self.solution_path(day, part);
        if !path.exists() {
            return Ok(None);
        }
        let content = Self::read_input(&path)?;
        Ok(content
            .lines()
            .next()
            .map(str::trim)
            .filter(|line| !line.is_empty())
            .map(str::to_string))
    }
}
