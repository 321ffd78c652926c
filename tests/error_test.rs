//! 에러 케이스 테스트
//!
//! 각종 에러 조건에서의 처리 방식을 검증

use seoro_orders_rust::error::SeoroError;
use seoro_orders_rust::{scanner, store};
use std::collections::HashMap;
use std::path::Path;
use tempfile::tempdir;

/// 존재하지 않는 폴더를 스캔한 경우
#[test]
fn test_scan_nonexistent_folder() {
    let result = scanner::scan_folder(Path::new("/nonexistent/path/12345"));
    assert!(matches!(result, Err(SeoroError::FolderNotFound(_))));
}

/// 엑셀 파일이 없는 폴더를 입력으로 준 경우
#[test]
fn test_resolve_input_no_workbooks() {
    let dir = tempdir().unwrap();
    std::fs::write(dir.path().join("메모.txt"), "hello").unwrap();

    let result = scanner::resolve_input(dir.path());
    assert!(matches!(result, Err(SeoroError::NoWorkbooksFound(_))));
}

/// 스냅샷이 아직 없는 경우는 IO 실패와 구분된다
#[test]
fn test_snapshot_not_found_is_distinct() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("첫실행.json");

    let result: Result<store::Snapshot<HashMap<String, u32>>, _> = store::load_snapshot(&path);
    assert!(matches!(result, Err(SeoroError::SnapshotNotFound(_))));
}

/// 깨진 스냅샷은 JSON 파싱 에러
#[test]
fn test_corrupt_snapshot_is_parse_error() {
    let dir = tempdir().unwrap();
    let path = dir.path().join("깨진.json");
    std::fs::write(&path, "{이건 JSON이 아님").unwrap();

    let result: Result<store::Snapshot<HashMap<String, u32>>, _> = store::load_snapshot(&path);
    assert!(matches!(result, Err(SeoroError::JsonParse(_))));
}

/// SeoroError의 Display 구현 확인
#[test]
fn test_error_display() {
    let errors = vec![
        SeoroError::Config("테스트 설정 에러".to_string()),
        SeoroError::FolderNotFound("/path/to/folder".to_string()),
        SeoroError::FileNotFound("발주서.xlsx".to_string()),
        SeoroError::ExcelRead("손상된 파일".to_string()),
        SeoroError::MissingColumns("옵션이름".to_string()),
        SeoroError::NoWorkbooksFound("/빈폴더".to_string()),
        SeoroError::SnapshotNotFound("출고현황.json".to_string()),
        SeoroError::AccessDenied,
    ];

    for err in errors {
        let display = format!("{}", err);
        assert!(!display.is_empty());
    }
}

/// 공통 라이브러리 에러가 루트 에러로 전파된다
#[test]
fn test_common_error_wrapped() {
    let common_err = seoro_orders_common::Error::DuplicateMappingKey {
        product_name: "서로 식혜".into(),
        option_name: "2개, 1000ml".into(),
    };
    let wrapped: SeoroError = common_err.into();
    assert!(format!("{}", wrapped).contains("매핑 키 중복"));
}
