//! 正規化モジュール
//!
//! 取り込んだ生レコードを正規化済みレコードに変換する。
//!
//! ## 処理内容
//! 1. 全フィールドの空白除去
//! 2. 年月日の解析（yy/mm/dd、失敗は致命的エラー）
//! 3. 打刻時刻はそのまま保持（表示値のため構文検査しない）
//! 4. 時数のHHH:MM正規化と合計時数の計算（不正は空に縮退）
//! 5. 異例コードの区分ラベル変換（未定義は空）

pub mod date;
pub mod duration;

use crate::codes;
use crate::error::Result;
use crate::names;
use crate::record::{RawRecord, TimecardRecord};

/// 生レコードを正規化する
///
/// identityはゼロ埋め済みカード番号が入る。名前への解決は
/// パイプラインが対応表を使って行う。
pub fn normalize(raw: &RawRecord) -> Result<TimecardRecord> {
    let date = date::parse_date(raw.date.trim(), raw.line)?;

    let duration1 = duration::canonicalize(&raw.duration1);
    let duration2 = duration::canonicalize(&raw.duration2);
    let total_duration = duration::total_duration(&duration1, &duration2);

    Ok(TimecardRecord {
        identity: names::pad_card_number(&raw.card_number),
        category: raw.category.trim().to_string(),
        date,
        time_in1: raw.time_in1.trim().to_string(),
        time_out1: raw.time_out1.trim().to_string(),
        time_in2: raw.time_in2.trim().to_string(),
        time_out2: raw.time_out2.trim().to_string(),
        exception_in1: codes::resolve_exception(raw.exception_in1.trim()).to_string(),
        exception_out1: codes::resolve_exception(raw.exception_out1.trim()).to_string(),
        exception_in2: codes::resolve_exception(raw.exception_in2.trim()).to_string(),
        exception_out2: codes::resolve_exception(raw.exception_out2.trim()).to_string(),
        duration1,
        duration2,
        total_duration,
    })
}
