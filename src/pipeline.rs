//! 変換パイプライン
//!
//! 取り込み → 正規化 → 名前解決 を直列に実行する単一の同期入口。
//! 呼び出しごとに対応表とレコード集合を作り直し、呼び出しを跨いで
//! 状態を持たない。どのフロントエンド（CLI・GUI・Web）からも
//! 同じように呼び出せる。

use crate::error::Result;
use crate::export;
use crate::ingest;
use crate::ingest::encoding::DecodedText;
use crate::names;
use crate::normalizer;
use crate::record::TimecardRecord;
use std::path::Path;

/// 変換結果
#[derive(Debug)]
pub struct ProcessOutcome {
    /// 正規化済みレコード（入力順）
    pub records: Vec<TimecardRecord>,
    /// 文字コード判定の診断情報（採用エンコーディングと試行ログ）
    pub decoding: DecodedText,
}

/// 打刻エクスポートのバイト列を変換し、診断情報つきで返す
///
/// `mapping_bytes` が指定された場合はカード番号を名前に解決する。
/// 未指定の場合はゼロ埋め済みカード番号をそのまま表示に使う。
pub fn process_with_diagnostics(
    input_bytes: &[u8],
    mapping_bytes: Option<&[u8]>,
) -> Result<ProcessOutcome> {
    let mapping = match mapping_bytes {
        Some(bytes) => Some(names::build_mapping(bytes)?),
        None => None,
    };

    let decoded = ingest::encoding::decode(input_bytes)?;
    let raw_records = ingest::parse_records(&decoded.text)?;

    let mut records = Vec::with_capacity(raw_records.len());
    for raw in &raw_records {
        let mut record = normalizer::normalize(raw)?;
        record.identity = names::resolve_identity(&raw.card_number, mapping.as_ref()).into_display();
        records.push(record);
    }

    Ok(ProcessOutcome {
        records,
        decoding: decoded,
    })
}

/// 打刻エクスポートのバイト列を正規化済みレコード列に変換する
pub fn process(
    input_bytes: &[u8],
    mapping_bytes: Option<&[u8]>,
) -> Result<Vec<TimecardRecord>> {
    Ok(process_with_diagnostics(input_bytes, mapping_bytes)?.records)
}

/// 変換して勤怠Excelレポートを書き出す
pub fn process_to_file(
    input_bytes: &[u8],
    mapping_bytes: Option<&[u8]>,
    output_path: &Path,
) -> Result<ProcessOutcome> {
    let outcome = process_with_diagnostics(input_bytes, mapping_bytes)?;
    export::excel::generate_excel(&outcome.records, output_path)?;
    Ok(outcome)
}

#[cfg(test)]
mod tests {
    use super::*;

    const INPUT: &str = "\
タイムカードデータ,,,,,,,,,,,,,
7,A,24/04/01,09:00,00,18:00,00,,,,,8:00,,
42,A,24/04/02,08:30,01,17:30,05,,,,,7:30,1:00,
";

    #[test]
    fn test_process_without_mapping() {
        let records = process(INPUT.as_bytes(), None).unwrap();
        assert_eq!(records.len(), 2);
        assert_eq!(records[0].identity, "0007");
        assert_eq!(records[1].identity, "0042");
        // 入力順を保持する
        assert_eq!(records[0].time_in1, "09:00");
        assert_eq!(records[1].total_duration, "008:30");
    }

    #[test]
    fn test_process_with_mapping() {
        let mapping = "カード番号,名前\n7,山田太郎\n";
        let records = process(INPUT.as_bytes(), Some(mapping.as_bytes())).unwrap();
        assert_eq!(records[0].identity, "山田太郎");
        assert_eq!(records[1].identity, "未登録(カード番号:0042)");
    }

    #[test]
    fn test_process_stateless_between_calls() {
        let mapping = "カード番号,名前\n7,山田太郎\n";
        let _ = process(INPUT.as_bytes(), Some(mapping.as_bytes())).unwrap();
        // 前回の対応表が残らない
        let records = process(INPUT.as_bytes(), None).unwrap();
        assert_eq!(records[0].identity, "0007");
    }

    #[test]
    fn test_process_with_diagnostics_reports_encoding() {
        let outcome = process_with_diagnostics(INPUT.as_bytes(), None).unwrap();
        assert_eq!(outcome.records.len(), 2);
        assert_eq!(outcome.decoding.encoding, "UTF-8");
        assert!(!outcome.decoding.attempts.is_empty());
        assert!(outcome.decoding.attempts[0].ok);
    }
}
