//! レポート出力モジュール

pub mod excel;

use std::path::{Path, PathBuf};

/// 出力先がディレクトリや拡張子なしの場合に既定ファイル名を補う
pub fn resolve_output_path(output: &Path) -> PathBuf {
    if output.is_dir() || output.extension().is_none() {
        output.join("勤怠データ.xlsx")
    } else {
        output.to_path_buf()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_resolve_output_path_file() {
        let path = resolve_output_path(Path::new("out/report.xlsx"));
        assert_eq!(path, PathBuf::from("out/report.xlsx"));
    }

    #[test]
    fn test_resolve_output_path_directory() {
        let dir = tempfile::tempdir().expect("Failed to create temp dir");
        let path = resolve_output_path(dir.path());
        assert_eq!(path, dir.path().join("勤怠データ.xlsx"));
    }
}
