//! 勤怠Excelレポート生成
//!
//! 正規化済みレコードを1シートのExcelに書き出す。
//! 年月日セルはExcel日付（表示書式 yyyy/mm/dd）、打刻時刻セルは
//! 値がある場合のみ hh:mm の表示書式を付ける。書式は表示上の
//! 指定であり、格納値は正規化済みの文字列と日付のまま。

use crate::error::Result;
use crate::record::{TimecardRecord, COLUMN_LABELS, SHEET_NAME};
use rust_xlsxwriter::{Format, Workbook, Worksheet};
use std::path::Path;

/// レコード列を勤怠Excelレポートとして保存する
pub fn generate_excel(records: &[TimecardRecord], output_path: &Path) -> Result<()> {
    let mut workbook = Workbook::new();
    let worksheet = workbook.add_worksheet();
    worksheet.set_name(SHEET_NAME)?;

    let date_format = Format::new().set_num_format("yyyy/mm/dd");
    let time_format = Format::new().set_num_format("hh:mm");

    // 見出し行
    for (col, label) in COLUMN_LABELS.iter().enumerate() {
        worksheet.write_string(0, col as u16, *label)?;
    }

    // データ行（入力順のまま）
    for (index, record) in records.iter().enumerate() {
        let row = index as u32 + 1;

        worksheet.write_string(row, 0, &record.identity)?;
        worksheet.write_string(row, 1, &record.category)?;
        worksheet.write_datetime_with_format(row, 2, &record.date, &date_format)?;

        write_time_cell(worksheet, row, 3, &record.time_in1, &time_format)?;
        worksheet.write_string(row, 4, &record.exception_in1)?;
        write_time_cell(worksheet, row, 5, &record.time_out1, &time_format)?;
        worksheet.write_string(row, 6, &record.exception_out1)?;
        write_time_cell(worksheet, row, 7, &record.time_in2, &time_format)?;
        worksheet.write_string(row, 8, &record.exception_in2)?;
        write_time_cell(worksheet, row, 9, &record.time_out2, &time_format)?;
        worksheet.write_string(row, 10, &record.exception_out2)?;

        worksheet.write_string(row, 11, &record.duration1)?;
        worksheet.write_string(row, 12, &record.duration2)?;
        worksheet.write_string(row, 13, &record.total_duration)?;
    }

    workbook.save(output_path)?;
    Ok(())
}

/// 打刻時刻セルを書き込む。空セルには書式を付けない
fn write_time_cell(
    worksheet: &mut Worksheet,
    row: u32,
    col: u16,
    value: &str,
    format: &Format,
) -> Result<()> {
    if value.is_empty() {
        worksheet.write_string(row, col, value)?;
    } else {
        worksheet.write_string_with_format(row, col, value, format)?;
    }
    Ok(())
}
