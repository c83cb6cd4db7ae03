// This file is part of entropass.
//
// Copyright (c) 2025  René Coignard <contact@renecoignard.com>
//
// This program is free software: you can redistribute it and/or modify
// it under the terms of the GNU General Public License as published by
// the Free Software Foundation, either version 3 of the License, or
// (at your option) any later version.
//
// This program is distributed in the hope that it will be useful,
// but WITHOUT ANY WARRANTY; without even the implied warranty of
// MERCHANTABILITY or FITNESS FOR A PARTICULAR PURPOSE.  See the
// GNU General Public License for more details.
//
// You should have received a copy of the GNU General Public License
// along with this program.  If not, see <https://www.gnu.org/licenses/>.

use crate::error::{Error, Result};
use std::collections::HashMap;
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex, OnceLock, PoisonError};
use unicode_normalization::UnicodeNormalization;

pub const DEFAULT_WORDLIST: &str = "/usr/share/dict/words";

static WORDLISTS: OnceLock<Mutex<HashMap<PathBuf, Arc<[String]>>>> = OnceLock::new();

/// Supplies the raw words a word picker draws from.
///
/// Duplicates and empty entries may be present; the picker removes them.
pub trait WordSource {
    fn words(&self) -> Result<Arc<[String]>>;
}

impl WordSource for Vec<String> {
    fn words(&self) -> Result<Arc<[String]>> {
        Ok(self.iter().cloned().collect())
    }
}

impl WordSource for Vec<&str> {
    fn words(&self) -> Result<Arc<[String]>> {
        Ok(self.iter().map(|word| word.to_string()).collect())
    }
}

impl<const N: usize> WordSource for [&str; N] {
    fn words(&self) -> Result<Arc<[String]>> {
        Ok(self.iter().map(|word| word.to_string()).collect())
    }
}

/// A word list on disk, read at most once per process.
#[derive(Debug, Clone)]
pub struct WordFile {
    path: PathBuf,
}

impl WordFile {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Default for WordFile {
    fn default() -> Self {
        Self::new(DEFAULT_WORDLIST)
    }
}

impl WordSource for WordFile {
    fn words(&self) -> Result<Arc<[String]>> {
        let cache = WORDLISTS.get_or_init(|| Mutex::new(HashMap::new()));
        let mut cache = cache.lock().unwrap_or_else(PoisonError::into_inner);

        if let Some(words) = cache.get(&self.path) {
            return Ok(Arc::clone(words));
        }

        let data = std::fs::read_to_string(&self.path).map_err(|source| Error::WordList {
            path: self.path.clone(),
            source,
        })?;

        let words: Arc<[String]> = parse_wordlist(&data).collect();
        tracing::info!(
            path = %self.path.display(),
            words = words.len(),
            "loaded word list"
        );

        cache.insert(self.path.clone(), Arc::clone(&words));
        Ok(words)
    }
}

/// Yields one NFC-normalized word per non-blank line.
///
/// Diceware lists (`11111<TAB>abacus` or `11111 abacus`) are reduced to
/// the word column.
pub fn parse_wordlist(data: &str) -> impl Iterator<Item = String> + '_ {
    data.lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(|line| {
            line.split_once(['\t', ' '])
                .filter(|(roll, _)| roll.chars().all(|c| c.is_ascii_digit()))
                .map(|(_, word)| word.trim())
                .unwrap_or(line)
        })
        .map(|word| word.nfc().collect())
}
