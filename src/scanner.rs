//! 출고내역서 파일 탐색

use crate::error::{Result, SeoroError};
use std::path::{Path, PathBuf};
use walkdir::WalkDir;

const WORKBOOK_EXTENSIONS: &[&str] = &["xlsx", "XLSX"];

/// 폴더 직하의 엑셀 파일을 파일명 순으로 수집
pub fn scan_folder(folder: &Path) -> Result<Vec<PathBuf>> {
    if !folder.exists() {
        return Err(SeoroError::FolderNotFound(folder.display().to_string()));
    }

    let mut workbooks = Vec::new();

    for entry in WalkDir::new(folder)
        .max_depth(1) // 직하만 (재귀하지 않음)
        .into_iter()
        .filter_map(|e| e.ok())
    {
        let path = entry.path();

        if !path.is_file() {
            continue;
        }

        // 엑셀 임시 파일(~$...)은 건너뛴다
        if path
            .file_name()
            .map(|n| n.to_string_lossy().starts_with("~$"))
            .unwrap_or(false)
        {
            continue;
        }

        if let Some(ext) = path.extension() {
            let ext_str = ext.to_string_lossy();
            if WORKBOOK_EXTENSIONS.iter().any(|&e| e == ext_str) {
                workbooks.push(path.to_path_buf());
            }
        }
    }

    workbooks.sort();
    Ok(workbooks)
}

/// 입력 경로를 엑셀 파일 목록으로 해석
///
/// 파일이면 그 파일 하나, 폴더면 직하의 엑셀 파일 전부.
pub fn resolve_input(input: &Path) -> Result<Vec<PathBuf>> {
    if input.is_file() {
        return Ok(vec![input.to_path_buf()]);
    }

    let workbooks = scan_folder(input)?;
    if workbooks.is_empty() {
        return Err(SeoroError::NoWorkbooksFound(input.display().to_string()));
    }
    Ok(workbooks)
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::fs::File;
    use tempfile::tempdir;

    #[test]
    fn test_scan_nonexistent_folder() {
        let result = scan_folder(Path::new("/nonexistent/path/12345"));
        assert!(matches!(result, Err(SeoroError::FolderNotFound(_))));
    }

    #[test]
    fn test_scan_empty_folder() {
        let dir = tempdir().unwrap();
        let workbooks = scan_folder(dir.path()).unwrap();
        assert!(workbooks.is_empty());
    }

    #[test]
    fn test_scan_filters_and_sorts() {
        let dir = tempdir().unwrap();
        File::create(dir.path().join("b발주서.xlsx")).unwrap();
        File::create(dir.path().join("a발주서.xlsx")).unwrap();
        File::create(dir.path().join("메모.txt")).unwrap();
        File::create(dir.path().join("~$a발주서.xlsx")).unwrap();

        let workbooks = scan_folder(dir.path()).unwrap();
        let names: Vec<String> = workbooks
            .iter()
            .map(|p| p.file_name().unwrap().to_string_lossy().to_string())
            .collect();
        assert_eq!(names, vec!["a발주서.xlsx", "b발주서.xlsx"]);
    }

    #[test]
    fn test_resolve_input_empty_folder_is_error() {
        let dir = tempdir().unwrap();
        assert!(matches!(
            resolve_input(dir.path()),
            Err(SeoroError::NoWorkbooksFound(_))
        ));
    }
}
