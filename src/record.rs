//! レコード型定義
//!
//! - RawRecord: 打刻エクスポートの1行（位置固定14フィールド）
//! - TimecardRecord: 正規化済みの勤怠レコード（出力の1行）

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// 入力1行あたりのフィールド数（末尾の空白列を含む）
pub const FIELD_COUNT: usize = 14;

/// 出力シート名
pub const SHEET_NAME: &str = "勤怠データ";

/// 出力列の見出し（列順固定）
pub const COLUMN_LABELS: [&str; 14] = [
    "カード番号",
    "区分",
    "年月日",
    "入1時刻",
    "入1異例",
    "退1時刻",
    "退1異例",
    "入2時刻",
    "入2異例",
    "退2時刻",
    "退2異例",
    "時数1",
    "時数2",
    "合計時数",
];

/// 打刻エクスポートの生レコード
///
/// フィールドは位置固定。この段階では空白除去を行わない
/// （正規化はNormalizerの責務）。末尾の空白列は取り込み時に破棄される。
#[derive(Debug, Clone, Default)]
pub struct RawRecord {
    /// 入力ファイル上の行番号（1始まり、エラー表示用）
    pub line: u64,
    pub card_number: String,
    pub category: String,
    pub date: String,
    pub time_in1: String,
    pub exception_in1: String,
    pub time_out1: String,
    pub exception_out1: String,
    pub time_in2: String,
    pub exception_in2: String,
    pub time_out2: String,
    pub exception_out2: String,
    pub duration1: String,
    pub duration2: String,
}

/// 正規化済みの勤怠レコード
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct TimecardRecord {
    /// 名前、未登録プレースホルダ、またはゼロ埋め4桁のカード番号
    pub identity: String,

    pub category: String,

    /// 年月日（時刻成分なし）
    pub date: NaiveDate,

    /// 打刻時刻（HH:MM）。未打刻は空文字列
    pub time_in1: String,
    pub time_out1: String,
    pub time_in2: String,
    pub time_out2: String,

    /// 異例区分ラベル。コード未定義・欠落は空文字列
    pub exception_in1: String,
    pub exception_out1: String,
    pub exception_in2: String,
    pub exception_out2: String,

    /// 時数（HHH:MM）。ゼロ・欠落・不正は空文字列
    pub duration1: String,
    pub duration2: String,

    /// 時数1と時数2の合計（HHH:MM）。合計ゼロは空文字列
    pub total_duration: String,
}
