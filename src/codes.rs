//! 異例コード変換
//!
//! 打刻機の2桁異例コードを区分ラベルに変換する。
//! コード表は固定の18件。表にないコード（欠落・不正を含む）は
//! 空文字列になり、エラーにはならない。

/// 異例コードを区分ラベルに変換する
pub fn resolve_exception(code: &str) -> &'static str {
    match code {
        "00" => "通常",
        "01" => "早出",
        "02" => "遅刻",
        "03" => "外出",
        "04" => "再入",
        "05" => "早退",
        "06" => "残業",
        "07" => "徹夜",
        "09" => "深夜",
        "10" => "休日出勤",
        "11" => "休日早出",
        "12" => "休日遅刻",
        "13" => "休日外出",
        "14" => "休日再入",
        "15" => "休日早退",
        "16" => "休日残業",
        "17" => "休日徹夜",
        "19" => "休日深夜",
        _ => "",
    }
}
