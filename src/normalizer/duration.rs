//! 時数の正規化と合算
//!
//! 入力の時数はH:MM形式（時の桁数は任意）。正規形はゼロ埋めの
//! HHH:MM。ゼロと空は時数モデル全体を通して等価に扱う:
//! ゼロ分は常に空文字列として表現される。
//!
//! 不正な時数テキストはエラーにせず空文字列に縮退させる
//! （打刻の欠落・乱れは通常運用で起こりうるため）。符号つきや
//! 桁あふれする値も不正として扱い、パニックさせない。

/// 時数文字列を分に解釈する。形式不正・符号つき・桁あふれはNone
fn parse_minutes(text: &str) -> Option<i64> {
    let (hours, minutes) = text.split_once(':')?;
    let hours = parse_component(hours)?;
    let minutes = parse_component(minutes)?;
    let total = hours.checked_mul(60)?.checked_add(minutes)?;
    i64::try_from(total).ok()
}

/// 時・分の片側を数値に解釈する。数字以外を含む場合はNone
fn parse_component(text: &str) -> Option<u64> {
    let text = text.trim();
    if text.is_empty() || !text.bytes().all(|b| b.is_ascii_digit()) {
        return None;
    }
    text.parse::<u64>().ok()
}

/// 時数文字列を分に変換する。空・不正はゼロ扱い
pub fn to_minutes(text: &str) -> i64 {
    parse_minutes(text.trim()).unwrap_or(0)
}

/// 分を時数文字列（HHH:MM）に変換する。ゼロは空文字列
pub fn from_minutes(minutes: i64) -> String {
    if minutes == 0 {
        return String::new();
    }
    format!("{:03}:{:02}", minutes / 60, minutes % 60)
}

/// 時数文字列を正規形（HHH:MM、ゼロは空）に揃える
pub fn canonicalize(text: &str) -> String {
    match parse_minutes(text.trim()) {
        Some(minutes) => from_minutes(minutes),
        None => String::new(),
    }
}

/// 時数1と時数2の合計時数を計算する
pub fn total_duration(duration1: &str, duration2: &str) -> String {
    from_minutes(to_minutes(duration1).saturating_add(to_minutes(duration2)))
}
