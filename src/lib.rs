//! dakoku-tool 共通ライブラリ
//!
//! 打刻機（タイムカード）のCSVエクスポートを読み込み、
//! カード番号を名前対応表で表示名に解決し、書式付きの
//! 勤怠Excelレポートを生成する。
//!
//! ## 処理フロー
//! 1. 取り込み: 文字コード判定 → 14フィールドの位置対応付け
//! 2. 正規化: 空白除去・年月日解析・時数のHHH:MM化
//! 3. 解決: 異例コード → 区分ラベル、カード番号 → 表示名
//! 4. 出力: 勤怠データシートへの書式付き書き出し
//!
//! 入口は [`pipeline::process`]（レコード列を返す）と
//! [`pipeline::process_to_file`]（Excelを書き出す）。

pub mod cli;
pub mod codes;
pub mod error;
pub mod export;
pub mod ingest;
pub mod names;
pub mod normalizer;
pub mod pipeline;
pub mod record;

pub use error::{Result, TimecardError};
pub use names::{build_mapping, resolve_identity, Identity, NameMapping};
pub use pipeline::{process, process_to_file, process_with_diagnostics, ProcessOutcome};
pub use record::{RawRecord, TimecardRecord};
