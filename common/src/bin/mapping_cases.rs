//! 매핑 테이블 점검용 바이너리
//!
//! 내장 테이블의 구성 통계와 샘플 룩업 결과를 출력한다.

use seoro_orders_common::mapping::ProductMapper;

fn main() {
    let mapper = match ProductMapper::builtin() {
        Ok(mapper) => mapper,
        Err(e) => {
            eprintln!("매핑 테이블 구성 실패: {}", e);
            std::process::exit(1);
        }
    };

    let stats = mapper.stats();
    println!("총 {}개의 매핑 케이스 로드 완료", stats.total_cases);

    println!("\n제품별 케이스 수:");
    let mut products: Vec<(&String, &usize)> = stats.product_stats.iter().collect();
    products.sort();
    for (product, count) in products {
        println!("  - {}: {}개", product, count);
    }

    let samples = vec![
        ("서로 식혜".to_string(), "2개, 1000ml".to_string()),
        (
            "[서로 수정과] 수제 전통".to_string(),
            "10개, 500ml".to_string(),
        ),
        (
            "[서로 쌀요거트] 쌀누룩 비건 요거트 무설탕 마시는요거트 수제 대용량 플레인 1L"
                .to_string(),
            String::new(),
        ),
        // 실패 케이스
        ("없는제품".to_string(), "없는옵션".to_string()),
    ];

    println!("\n샘플 매핑 테스트:");
    let report = mapper.validate_samples(&samples);
    for sample in &report.results {
        let status = if sample.success { "✔" } else { "✖" };
        println!(
            "{} '{}' + '{}' → ({}, {}, {})",
            status,
            sample.product_name,
            sample.option_name,
            sample.result.product_type,
            sample.result.capacity,
            sample.result.count
        );
    }

    println!(
        "\n검증 결과: {}/{} ({:.1}%)",
        report.success_count, report.total_count, report.success_rate
    );
}
