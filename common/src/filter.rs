//! 検索フィルタとタグフィルタ
//!
//! 検索は読み込み済みの一覧に対する純粋関数。タグ選択は上流から再取得して置換する。

use crate::types::Entry;
use std::fmt;
use std::str::FromStr;

/// 「すべて」を表すタグ値
pub const ALL_TAGS: &str = "All";

/// 名前の部分一致（大文字小文字無視）で絞り込む
///
/// 入力の順序を保ち、一覧自体は変更しない。
pub fn filter_by_search<'a>(entries: &'a [Entry], search_text: &str) -> Vec<&'a Entry> {
    let needle = search_text.to_lowercase();
    entries
        .iter()
        .filter(|entry| entry.name.to_lowercase().contains(&needle))
        .collect()
}

/// タグフィルタの選択値
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum TagFilter {
    #[default]
    All,
    Tag(String),
}

impl TagFilter {
    pub fn new(tag: &str) -> Self {
        if tag == ALL_TAGS {
            TagFilter::All
        } else {
            TagFilter::Tag(tag.to_string())
        }
    }

    /// 絞り込み中か（All以外）
    pub fn is_filtering(&self) -> bool {
        !matches!(self, TagFilter::All)
    }
}

impl FromStr for TagFilter {
    type Err = std::convert::Infallible;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Ok(TagFilter::new(s))
    }
}

impl fmt::Display for TagFilter {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TagFilter::All => f.write_str(ALL_TAGS),
            TagFilter::Tag(tag) => f.write_str(tag),
        }
    }
}
