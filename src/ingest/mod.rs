//! 取り込みモジュール
//!
//! 打刻エクスポートのバイト列を文字コード判定つきで読み込み、
//! 位置固定の14フィールドをRawRecordに対応付ける。
//! 先頭行はタイトル行として破棄する。
//!
//! フィールドの空白除去はここでは行わない（Normalizerの責務）。

pub mod encoding;

use crate::error::{Result, TimecardError};
use crate::record::{RawRecord, FIELD_COUNT};

/// 打刻エクスポートのバイト列をRawRecord列に変換する
pub fn ingest(bytes: &[u8]) -> Result<Vec<RawRecord>> {
    let decoded = encoding::decode(bytes)?;
    parse_records(&decoded.text)
}

/// デコード済みテキストをRawRecord列に変換する
///
/// 完全な空行はリーダーが読み飛ばす。フィールド数が14以外の行は
/// `TimecardError::Format`（行番号つき）になる。
pub fn parse_records(text: &str) -> Result<Vec<RawRecord>> {
    let mut reader = csv::ReaderBuilder::new()
        .has_headers(false)
        .flexible(true)
        .from_reader(text.as_bytes());

    let mut records = Vec::new();
    for (index, row) in reader.records().enumerate() {
        let row = row?;
        let line = row
            .position()
            .map(|p| p.line())
            .unwrap_or(index as u64 + 1);

        // 先頭行はタイトル行
        if index == 0 {
            continue;
        }

        if row.len() != FIELD_COUNT {
            return Err(TimecardError::Format {
                line,
                expected: FIELD_COUNT,
                found: row.len(),
            });
        }

        // 第14フィールド（空白列）は破棄
        records.push(RawRecord {
            line,
            card_number: row[0].to_string(),
            category: row[1].to_string(),
            date: row[2].to_string(),
            time_in1: row[3].to_string(),
            exception_in1: row[4].to_string(),
            time_out1: row[5].to_string(),
            exception_out1: row[6].to_string(),
            time_in2: row[7].to_string(),
            exception_in2: row[8].to_string(),
            time_out2: row[9].to_string(),
            exception_out2: row[10].to_string(),
            duration1: row[11].to_string(),
            duration2: row[12].to_string(),
        });
    }

    Ok(records)
}
