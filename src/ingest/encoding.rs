//! 文字コード判定
//!
//! 候補エンコーディングを優先順に試し、全バイトを置換なしで
//! デコードできた最初のものを採用する。判定の試行結果は
//! 診断用に保持する（例外の連鎖ではなく試行リストとして扱う）。

use crate::error::{Result, TimecardError};
use encoding_rs::{Encoding, EUC_JP, SHIFT_JIS, UTF_8};

/// 候補エンコーディング（優先順）
pub static CANDIDATE_ENCODINGS: [&Encoding; 3] = [UTF_8, SHIFT_JIS, EUC_JP];

/// 1エンコーディングの試行結果
#[derive(Debug, Clone)]
pub struct DecodeAttempt {
    pub encoding: &'static str,
    pub ok: bool,
}

/// デコード結果
#[derive(Debug, Clone)]
pub struct DecodedText {
    pub text: String,
    /// 採用したエンコーディング名
    pub encoding: &'static str,
    /// 採用までの全試行（スキップされた候補を含む）
    pub attempts: Vec<DecodeAttempt>,
}

/// バイト列を候補エンコーディングで順にデコードする
///
/// 全候補が失敗した場合は `TimecardError::Decoding` を返す。
pub fn decode(bytes: &[u8]) -> Result<DecodedText> {
    let mut attempts = Vec::with_capacity(CANDIDATE_ENCODINGS.len());

    for candidate in CANDIDATE_ENCODINGS {
        // BOMは候補エンコーディングと一致する場合のみ除去される
        let (text, had_errors) = candidate.decode_with_bom_removal(bytes);
        attempts.push(DecodeAttempt {
            encoding: candidate.name(),
            ok: !had_errors,
        });

        if !had_errors {
            return Ok(DecodedText {
                text: text.into_owned(),
                encoding: candidate.name(),
                attempts,
            });
        }
    }

    let tried = attempts
        .iter()
        .map(|a| a.encoding)
        .collect::<Vec<_>>()
        .join(", ");
    Err(TimecardError::Decoding { tried })
}
