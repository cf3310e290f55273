//! 名前解決
//!
//! カード番号と名前の対応表を構築し、カード番号を表示名に解決する。
//! 照合キーはゼロ埋め4桁のカード番号。対応表が指定されたかどうかと
//! 対応表に該当があるかどうかは区別する（Identityの3状態）。

use crate::error::Result;
use crate::ingest::encoding;
use std::collections::HashMap;
use std::path::Path;

/// カード番号（ゼロ埋め4桁）→ 名前 の対応表
pub type NameMapping = HashMap<String, String>;

/// 対応表CSVの見出し行
const MAPPING_HEADER: [&str; 2] = ["カード番号", "名前"];

/// カード番号の解決結果
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Identity {
    /// 対応表で名前に解決できた
    Resolved(String),
    /// 対応表はあるが該当なし（ゼロ埋め済みカード番号を保持）
    Unregistered(String),
    /// 対応表自体が指定されていない
    CardNumber(String),
}

impl Identity {
    /// 表示文字列に変換する
    ///
    /// 未登録プレースホルダの書式は互換性のため固定。
    pub fn into_display(self) -> String {
        match self {
            Identity::Resolved(name) => name,
            Identity::Unregistered(card) => format!("未登録(カード番号:{})", card),
            Identity::CardNumber(card) => card,
        }
    }
}

/// カード番号を4桁に左ゼロ埋めする（冪等、4桁超はそのまま）
pub fn pad_card_number(card: &str) -> String {
    format!("{:0>4}", card.trim())
}

/// 対応表CSVのバイト列からNameMappingを構築する
///
/// 先頭行は見出し行。1列目がカード番号、2列目が名前。
/// カード番号は挿入時にゼロ埋めされる。重複キーは後勝ち。
/// どちらかが空の行は読み飛ばす。
pub fn build_mapping(bytes: &[u8]) -> Result<NameMapping> {
    let decoded = encoding::decode(bytes)?;
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(decoded.text.as_bytes());

    let mut mapping = NameMapping::new();
    for row in reader.records() {
        let row = row?;
        let card = row.get(0).unwrap_or("").trim();
        let name = row.get(1).unwrap_or("").trim();
        if card.is_empty() || name.is_empty() {
            continue;
        }
        mapping.insert(pad_card_number(card), name.to_string());
    }
    Ok(mapping)
}

/// カード番号を表示名に解決する
pub fn resolve_identity(card: &str, mapping: Option<&NameMapping>) -> Identity {
    let padded = pad_card_number(card);
    match mapping {
        None => Identity::CardNumber(padded),
        Some(map) => match map.get(&padded) {
            Some(name) => Identity::Resolved(name.clone()),
            None => Identity::Unregistered(padded),
        },
    }
}

/// 対応表をCSVに保存する
///
/// 見出し行を書き、カード番号か名前が空の行は保存しない。
pub fn save_mapping(rows: &[(String, String)], path: &Path) -> Result<()> {
    let mut writer = csv::Writer::from_path(path)?;
    writer.write_record(MAPPING_HEADER)?;
    for (card, name) in rows {
        let card = card.trim();
        let name = name.trim();
        if card.is_empty() || name.is_empty() {
            continue;
        }
        writer.write_record([pad_card_number(card).as_str(), name])?;
    }
    writer.flush()?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_pad_card_number() {
        assert_eq!(pad_card_number("7"), "0007");
        assert_eq!(pad_card_number("42"), "0042");
        assert_eq!(pad_card_number("1234"), "1234");
        assert_eq!(pad_card_number(" 7 "), "0007");
    }

    #[test]
    fn test_pad_card_number_idempotent() {
        let once = pad_card_number("9");
        assert_eq!(pad_card_number(&once), once);
        assert_eq!(once.chars().count(), 4);
    }

    #[test]
    fn test_pad_card_number_over_four_digits() {
        assert_eq!(pad_card_number("12345"), "12345");
    }

    #[test]
    fn test_build_mapping() {
        let csv = "カード番号,名前\n1,Alice\n0042,Bob\n";
        let mapping = build_mapping(csv.as_bytes()).unwrap();
        assert_eq!(mapping.len(), 2);
        assert_eq!(mapping.get("0001").map(String::as_str), Some("Alice"));
        assert_eq!(mapping.get("0042").map(String::as_str), Some("Bob"));
    }

    #[test]
    fn test_build_mapping_last_write_wins() {
        let csv = "カード番号,名前\n1,Alice\n0001,Carol\n";
        let mapping = build_mapping(csv.as_bytes()).unwrap();
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("0001").map(String::as_str), Some("Carol"));
    }

    #[test]
    fn test_build_mapping_skips_blank_rows() {
        let csv = "カード番号,名前\n1,Alice\n2,\n,Bob\n";
        let mapping = build_mapping(csv.as_bytes()).unwrap();
        assert_eq!(mapping.len(), 1);
    }

    #[test]
    fn test_resolve_identity_with_mapping() {
        let mut mapping = NameMapping::new();
        mapping.insert("0001".to_string(), "Alice".to_string());

        let resolved = resolve_identity("1", Some(&mapping));
        assert_eq!(resolved, Identity::Resolved("Alice".to_string()));
        assert_eq!(resolved.into_display(), "Alice");

        let missing = resolve_identity("9999", Some(&mapping));
        assert_eq!(missing.into_display(), "未登録(カード番号:9999)");
    }

    #[test]
    fn test_resolve_identity_empty_mapping() {
        // 空の対応表は「全件未登録」として扱う
        let mapping = NameMapping::new();
        let result = resolve_identity("7", Some(&mapping));
        assert_eq!(result.into_display(), "未登録(カード番号:0007)");
    }

    #[test]
    fn test_resolve_identity_no_mapping() {
        // 対応表未指定ならプレースホルダは付かない
        let result = resolve_identity("9", None);
        assert_eq!(result, Identity::CardNumber("0009".to_string()));
        assert_eq!(result.into_display(), "0009");
    }

    #[test]
    fn test_save_mapping_round_trip() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = dir.path().join("mapping.csv");

        let rows = vec![
            ("1".to_string(), "Alice".to_string()),
            ("".to_string(), "Bob".to_string()),
            ("3".to_string(), "".to_string()),
        ];
        save_mapping(&rows, &path).unwrap();

        let bytes = std::fs::read(&path).unwrap();
        let mapping = build_mapping(&bytes).unwrap();
        assert_eq!(mapping.len(), 1);
        assert_eq!(mapping.get("0001").map(String::as_str), Some("Alice"));
    }
}
