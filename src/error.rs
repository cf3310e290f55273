//! エラー型定義

use thiserror::Error;

/// 変換処理のエラー型
///
/// 致命的エラー（文字コード判定失敗・フィールド数不正・日付不正）は
/// 変換全体を中断する。時数や異例コードの不正は各フィールドで
/// 空文字列に縮退させるため、エラーにはならない。
#[derive(Error, Debug)]
pub enum TimecardError {
    #[error("文字コードを判定できませんでした（試行: {tried}）")]
    Decoding { tried: String },

    #[error("{line}行目のフィールド数が不正です（期待: {expected}、実際: {found}）")]
    Format {
        line: u64,
        expected: usize,
        found: usize,
    },

    #[error("{line}行目の年月日を解釈できません: {text}")]
    DateParse { line: u64, text: String },

    #[error("CSV解析エラー: {0}")]
    Csv(#[from] csv::Error),

    #[error("Excel生成エラー: {0}")]
    ExcelGeneration(#[from] rust_xlsxwriter::XlsxError),

    #[error("IOエラー: {0}")]
    Io(#[from] std::io::Error),
}

/// Result型エイリアス
pub type Result<T> = std::result::Result<T, TimecardError>;
