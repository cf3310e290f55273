use clap::Parser;
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "dakoku-tool")]
#[command(about = "タイムカードCSV→勤怠Excelレポート変換ツール", long_about = None)]
pub struct Cli {
    /// 入力CSVファイル（打刻エクスポート）
    #[arg(required = true)]
    pub input: PathBuf,

    /// 出力Excelファイル（ディレクトリ指定時は 勤怠データ.xlsx）
    #[arg(required = true)]
    pub output: PathBuf,

    /// カード番号と名前の対応表CSV
    #[arg(short, long)]
    pub mapping: Option<PathBuf>,

    /// 詳細ログを出力（文字コード判定の試行結果など）
    #[arg(short, long)]
    pub verbose: bool,
}
