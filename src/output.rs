//! 一覧の表示整形

use champ_gallery_common::{type_class, Detail, Entry};
use clap::ValueEnum;
use std::fmt::Write;

#[derive(Clone, Copy, Debug, PartialEq, Eq, ValueEnum)]
pub enum OutputFormat {
    Table,
    Json,
}

/// 表形式。スキン表示時はエントリごとにスキンを字下げして並べる
pub fn render_table(entries: &[&Entry], show_details: bool) -> String {
    let mut out = String::new();
    let _ = writeln!(
        out,
        "{:<16} {:<20} {:<10} {:>4}  IMAGE",
        "ID", "NAME", "CLASS", "DIFF"
    );

    for entry in entries {
        let class = entry.main_tag.as_deref().map(type_class).unwrap_or("");
        let class = if class.is_empty() { "-" } else { class };
        let _ = writeln!(
            out,
            "{:<16} {:<20} {:<10} {:>4}  {}",
            entry.id, entry.name, class, entry.difficulty, entry.image
        );
        if show_details {
            for detail in &entry.details {
                let _ = writeln!(out, "    {}", render_detail(detail));
            }
        }
    }
    out
}

pub fn render_detail(detail: &Detail) -> String {
    format!("#{:<3} {:<32} {}", detail.num, detail.name, detail.image)
}

pub fn render_json<T: serde::Serialize + ?Sized>(value: &T) -> serde_json::Result<String> {
    serde_json::to_string_pretty(value)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entry() -> Entry {
        Entry {
            id: "Ahri".into(),
            name: "Ahri".into(),
            tags: vec!["mage".into(), "assassin".into()],
            main_tag: Some("mage".into()),
            difficulty: 5,
            image: "https://cdn/Ahri_0.jpg".into(),
            details: vec![Detail {
                id: "103001".into(),
                name: "Dynasty Ahri".into(),
                num: 1,
                image: "https://cdn/Ahri_1.jpg".into(),
            }],
        }
    }

    #[test]
    fn test_render_table_without_details() {
        let e = entry();
        let table = render_table(&[&e], false);
        let lines: Vec<_> = table.lines().collect();
        assert_eq!(lines.len(), 2);
        assert!(lines[1].starts_with("Ahri"));
        assert!(lines[1].contains("mage"));
        assert!(!table.contains("Dynasty Ahri"));
    }

    #[test]
    fn test_render_table_with_details() {
        let e = entry();
        let table = render_table(&[&e], true);
        assert!(table.contains("Dynasty Ahri"));
        assert!(table.contains("Ahri_1.jpg"));
    }

    #[test]
    fn test_render_table_unknown_class() {
        let mut e = entry();
        e.main_tag = None;
        let table = render_table(&[&e], false);
        assert!(table.lines().nth(1).unwrap().contains(" - "));
    }

    #[test]
    fn test_render_json() {
        let e = entry();
        let json = render_json(&vec![&e]).expect("シリアライズ失敗");
        assert!(json.contains("\"mainTag\": \"mage\""));
    }
}
