use anyhow::Context;
use clap::Parser;
use dakoku_tool::cli::Cli;
use dakoku_tool::{export, pipeline};

fn main() -> anyhow::Result<()> {
    let cli = Cli::parse();

    println!("⏱ dakoku-tool - タイムカードデータ処理\n");

    // 1. ファイル読み込み
    println!("[1/2] 入力ファイルを読み込み中...");
    let input_bytes = std::fs::read(&cli.input)
        .with_context(|| format!("入力ファイルを読み込めません: {}", cli.input.display()))?;
    let mapping_bytes = match &cli.mapping {
        Some(path) => {
            let bytes = std::fs::read(path)
                .with_context(|| format!("対応表ファイルを読み込めません: {}", path.display()))?;
            Some(bytes)
        }
        None => None,
    };
    println!("✔ 読み込み完了\n");

    // 2. 変換してExcel出力
    println!(
        "[2/2] 変換してExcelに出力中...{}",
        if cli.mapping.is_some() { " (名前対応表あり)" } else { "" }
    );
    let output_path = export::resolve_output_path(&cli.output);
    let outcome = pipeline::process_to_file(&input_bytes, mapping_bytes.as_deref(), &output_path)
        .with_context(|| format!("変換に失敗: {}", cli.input.display()))?;

    if cli.verbose {
        for attempt in &outcome.decoding.attempts {
            println!(
                "  文字コード {}: {}",
                attempt.encoding,
                if attempt.ok { "一致" } else { "不一致" }
            );
        }
        println!("  採用: {}", outcome.decoding.encoding);
    }
    println!("✔ {}件のレコードを変換", outcome.records.len());
    println!("✔ Excel出力: {}", output_path.display());

    println!("\n✅ 処理が完了しました");
    Ok(())
}
