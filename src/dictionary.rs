//! Pronunciation dictionary
//!
//! Maps an uppercase word to one or more phonetic transcriptions. The data
//! itself is external; this module loads it from the britfone-style JSON
//! layout:
//!
//! ```json
//! {
//!   "TOMATO": [["t", "ə", "m", "ɑː", "t", "əʊ"], "t ə m eɪ t əʊ"],
//!   "CAT": ["k æ t"]
//! }
//! ```
//!
//! A transcription is either an array of phonetic symbols or a string of
//! whitespace-separated symbols. Primary and secondary stress marks (`ˈ`,
//! `ˌ`) are stripped from symbols.

use std::fs::File;
use std::io::{BufReader, Read};
use std::path::Path;

use ahash::AHashMap;
use log::debug;
use serde::Deserialize;

use crate::error::Result;

/// A single transcription: a sequence of phonetic symbols
pub type Pronunciation = Vec<String>;

#[derive(Deserialize)]
#[serde(untagged)]
enum RawPronunciation {
    Symbols(Vec<String>),
    Spelled(String),
}

impl RawPronunciation {
    fn into_symbols(self) -> Pronunciation {
        let symbols: Vec<String> = match self {
            RawPronunciation::Symbols(symbols) => symbols,
            RawPronunciation::Spelled(spelled) => {
                spelled.split_whitespace().map(str::to_owned).collect()
            }
        };
        symbols
            .into_iter()
            .filter_map(|s| {
                let bare = s.trim().trim_start_matches(['ˈ', 'ˌ']);
                (!bare.is_empty()).then(|| bare.to_owned())
            })
            .collect()
    }
}

/// Uppercase word to pronunciations, consumed read-only by the phonetic
/// similarity functions.
#[derive(Debug, Clone, Default)]
pub struct PronunciationDictionary {
    entries: AHashMap<String, Vec<Pronunciation>>,
}

impl PronunciationDictionary {
    /// Create an empty dictionary; every lookup falls back to the spelling.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Parse a dictionary from a JSON string.
    pub fn from_json_str(json: &str) -> Result<Self> {
        let raw: AHashMap<String, Vec<RawPronunciation>> = serde_json::from_str(json)?;
        Ok(Self::from_raw(raw))
    }

    /// Parse a dictionary from any JSON reader.
    pub fn from_reader<R: Read>(reader: R) -> Result<Self> {
        let raw: AHashMap<String, Vec<RawPronunciation>> = serde_json::from_reader(reader)?;
        Ok(Self::from_raw(raw))
    }

    /// Load a dictionary from a JSON file.
    pub fn from_path(path: impl AsRef<Path>) -> Result<Self> {
        let path = path.as_ref();
        let file = File::open(path)?;
        let dict = Self::from_reader(BufReader::new(file))?;
        debug!("loaded pronunciation dictionary from {}", path.display());
        Ok(dict)
    }

    fn from_raw(raw: AHashMap<String, Vec<RawPronunciation>>) -> Self {
        let mut dict = Self {
            entries: AHashMap::with_capacity(raw.len()),
        };
        for (word, pronunciations) in raw {
            let pronunciations: Vec<Pronunciation> = pronunciations
                .into_iter()
                .map(RawPronunciation::into_symbols)
                .collect();
            if pronunciations.is_empty() {
                continue;
            }
            // Keys are usually uppercase already
            let word = if word.chars().any(char::is_lowercase) {
                word.to_uppercase()
            } else {
                word
            };
            dict.entries.insert(word, pronunciations);
        }
        debug!("pronunciation dictionary holds {} words", dict.len());
        dict
    }

    /// Add (or replace) the pronunciations of `word`.
    ///
    /// Words without any pronunciation are ignored so that lookups keep
    /// falling back to the spelling.
    pub fn insert(&mut self, word: &str, pronunciations: Vec<Pronunciation>) {
        if pronunciations.is_empty() {
            return;
        }
        self.entries.insert(word.to_uppercase(), pronunciations);
    }

    /// Pronunciations of `word`, matched case-insensitively.
    #[must_use]
    pub fn lookup(&self, word: &str) -> Option<&[Pronunciation]> {
        self.entries.get(&word.to_uppercase()).map(Vec::as_slice)
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl<W: AsRef<str>> FromIterator<(W, Vec<Pronunciation>)> for PronunciationDictionary {
    fn from_iter<I: IntoIterator<Item = (W, Vec<Pronunciation>)>>(iter: I) -> Self {
        let mut dict = Self::new();
        for (word, pronunciations) in iter {
            dict.insert(word.as_ref(), pronunciations);
        }
        dict
    }
}
