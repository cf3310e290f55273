//! 年月日の解析
//!
//! 入力の年月日は2桁年のyy/mm/dd形式。2桁年の世紀補完はchronoの
//! `%y` 既定に従う: 00〜68 → 2000〜2068、69〜99 → 1969〜1999。

use crate::error::{Result, TimecardError};
use chrono::NaiveDate;

/// yy/mm/dd形式のテキストを日付に変換する
///
/// 形式不一致・暦上あり得ない日付は `TimecardError::DateParse` になる。
pub fn parse_date(text: &str, line: u64) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(text, "%y/%m/%d").map_err(|_| TimecardError::DateParse {
        line,
        text: text.to_string(),
    })
}
