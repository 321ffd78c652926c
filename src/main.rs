use clap::Parser;
use indicatif::ProgressBar;
use seoro_orders_rust::{cli, config, error, reader, scanner, store};

use cli::{Cli, Commands};
use config::Config;
use error::{Result, SeoroError};
use seoro_orders_common::stock::{self, StockEntry, StockHistory};
use seoro_orders_common::{aggregate_boxes, aggregate_shipment, OrderRow, ProductMapper};
use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::path::Path;

/// 박스 계산 스냅샷
#[derive(Debug, Serialize, Deserialize)]
struct BoxReport {
    boxes: BTreeMap<String, u32>,
    review_orders: Vec<seoro_orders_common::ReviewOrder>,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    let config = Config::load()?;

    match cli.command {
        Commands::Shipment {
            input,
            output,
            show_unmapped,
        } => {
            println!("📦 seoro-orders - 출고 현황 집계\n");

            let rows = read_all_rows(&input)?;
            let mapper = build_mapper()?;

            println!("[2/2] 출고 현황 집계 중...");
            let summary = aggregate_shipment(&rows, &mapper);
            println!("✔ 집계 완료\n");

            println!("전체 출고 개수: {}개", summary.total_quantity());
            println!(
                "상품 종류: {}개",
                summary.totals.values().filter(|v| **v > 0).count()
            );

            let mut totals: Vec<(&String, &u32)> = summary.totals.iter().collect();
            totals.sort();
            println!("\n상품별 출고 수량:");
            for (product_key, quantity) in totals {
                println!("  {}: {}개", product_key, quantity);
            }

            if summary.unmapped_count() > 0 {
                println!(
                    "\n⚠ 분류 실패: {}건 / {}건 ({:.1}%)",
                    summary.unmapped_count(),
                    summary.total_rows,
                    summary.unmapped_rate()
                );
                if show_unmapped || cli.verbose {
                    for row in &summary.unmapped {
                        println!(
                            "  - 상품: '{}' / 옵션: '{}'",
                            row.product_name, row.option_name
                        );
                    }
                }
            }

            if let Some(output) = output {
                require_admin(&config)?;
                store::save_snapshot(&output, &summary)?;
                println!("\n✔ 스냅샷 저장: {}", output.display());
            }

            println!("\n✅ 출고 현황 집계 완료 ({})", store::korean_date_label());
        }

        Commands::Boxes { input, output } => {
            println!("📦 seoro-orders - 택배박스 계산\n");

            let rows = read_all_rows(&input)?;
            let mapper = build_mapper()?;

            println!("[2/2] 박스 필요량 계산 중...");
            let (boxes, review_orders) = aggregate_boxes(&rows, &mapper);
            println!("✔ 계산 완료\n");

            println!("박스 필요량 (저렴한 순):");
            for (category, count) in &boxes {
                println!("  {}: {}개", category, count);
            }
            if boxes.is_empty() {
                println!("  (자동 분류된 주문 없음)");
            }

            if !review_orders.is_empty() {
                println!("\n⚠ 검토 필요 주문: {}건", review_orders.len());
                for order in &review_orders {
                    let mut quantities: Vec<(&String, &u32)> = order.quantities.iter().collect();
                    quantities.sort();
                    let detail: Vec<String> = quantities
                        .iter()
                        .map(|(cap, qty)| format!("{} {}개", cap, qty))
                        .collect();
                    println!("  - {}: {}", order.recipient, detail.join(", "));
                }
            }

            if let Some(output) = output {
                require_admin(&config)?;
                let report = BoxReport {
                    boxes: boxes
                        .iter()
                        .map(|(category, count)| (category.to_string(), *count))
                        .collect(),
                    review_orders,
                };
                store::save_snapshot(&output, &report)?;
                println!("\n✔ 스냅샷 저장: {}", output.display());
            }

            println!("\n✅ 택배박스 계산 완료");
        }

        Commands::Stock {
            stock_file,
            apply_shipment,
        } => {
            println!("📊 seoro-orders - 재고 관리\n");

            let mut stock_history: StockHistory = match store::load_snapshot(&stock_file) {
                Ok(snapshot) => snapshot.data,
                Err(SeoroError::SnapshotNotFound(_)) => StockHistory::default(),
                Err(e) => return Err(e),
            };

            if let Some(shipment_path) = apply_shipment {
                println!("[1/2] 출고 현황 반영 중...");
                let shipment: store::Snapshot<seoro_orders_common::ShipmentSummary> =
                    store::load_snapshot(&shipment_path)?;

                let latest = stock_history
                    .latest
                    .as_ref()
                    .map(|entry| entry.quantities.clone())
                    .unwrap_or_default();
                let updated = stock::apply_shipment(&latest, &shipment.data.totals);

                require_admin(&config)?;
                stock_history.push(StockEntry {
                    entered_at: store::kst_timestamp(),
                    quantities: updated,
                    shipment_applied: true,
                });
                store::save_snapshot(&stock_file, &stock_history)?;
                println!("✔ 출고 현황이 재고에 반영되었습니다\n");
            }

            match &stock_history.latest {
                Some(entry) => {
                    println!("재고 현황 ({}):", entry.entered_at);
                    let mut quantities: Vec<(&String, &u32)> = entry.quantities.iter().collect();
                    quantities.sort();
                    for (input_key, quantity) in quantities {
                        println!("  {}: {}개", input_key.replace('|', " "), quantity);
                    }

                    let low = stock::low_stock_items(&entry.quantities);
                    if !low.is_empty() {
                        println!("\n🚨 재고 부족 경고:");
                        for item in low {
                            println!(
                                "  {}: {}개 (임계값 {}개)",
                                item.product_key, item.current, item.threshold
                            );
                        }
                    }
                }
                None => println!("재고 입력 이력이 없습니다: {}", stock_file.display()),
            }

            println!("\n✅ 재고 확인 완료");
        }

        Commands::Stats { validate } => {
            let mapper = build_mapper()?;
            let stats = mapper.stats();

            println!("매핑 테이블 통계:");
            println!("  전체 케이스: {}개", stats.total_cases);
            let mut products: Vec<(&String, &usize)> = stats.product_stats.iter().collect();
            products.sort();
            for (product, count) in products {
                println!("  - {}: {}개", product, count);
            }

            if let Some(sample_path) = validate {
                let content = std::fs::read_to_string(&sample_path)?;
                let samples: Vec<(String, String)> = serde_json::from_str(&content)?;

                let report = mapper.validate_samples(&samples);
                println!(
                    "\n샘플 검증: {}/{}건 성공 ({:.1}%)",
                    report.success_count, report.total_count, report.success_rate
                );
                for sample in report.results.iter().filter(|r| !r.success) {
                    println!("  ✖ '{}' + '{}'", sample.product_name, sample.option_name);
                }
            }
        }

        Commands::Config {
            set_admin_password,
            show,
        } => {
            let mut config = config;

            if set_admin_password {
                let password = dialoguer::Password::new()
                    .with_prompt("새 관리자 비밀번호")
                    .with_confirmation("비밀번호 확인", "비밀번호가 일치하지 않습니다")
                    .interact()
                    .map_err(|e| SeoroError::Config(format!("입력 에러: {}", e)))?;
                config.set_admin_password(&password)?;
                println!("✔ 관리자 비밀번호를 설정했습니다");
            }

            if show {
                println!("설정:");
                println!("  설정 파일: {}", Config::config_path()?.display());
                println!(
                    "  관리자 비밀번호: {}",
                    if config.has_admin_password() { "설정됨" } else { "미설정" }
                );
                match &config.snapshot_dir {
                    Some(dir) => println!("  스냅샷 폴더: {}", dir.display()),
                    None => println!("  스냅샷 폴더: (현재 폴더)"),
                }
            }
        }
    }

    Ok(())
}

/// 입력 경로의 모든 엑셀 파일에서 주문 행을 읽어 모은다
fn read_all_rows(input: &Path) -> Result<Vec<OrderRow>> {
    println!("[1/2] 출고내역서 읽는 중...");
    let workbooks = scanner::resolve_input(input)?;

    let progress = ProgressBar::new(workbooks.len() as u64);
    let mut rows: Vec<OrderRow> = Vec::new();
    for path in &workbooks {
        let file_rows = reader::read_order_rows(path)?;
        rows.extend(file_rows);
        progress.inc(1);
    }
    progress.finish_and_clear();

    println!("✔ {}개 파일에서 {}건의 주문을 읽음\n", workbooks.len(), rows.len());
    Ok(rows)
}

/// 매핑 테이블을 한 번만 구성한다 (프로세스당 1회)
fn build_mapper() -> Result<ProductMapper> {
    let mapper = ProductMapper::builtin()?;
    Ok(mapper)
}

/// 스냅샷 쓰기 전 관리자 비밀번호 확인
///
/// 비밀번호가 설정되어 있지 않으면 게이트 없이 통과한다.
fn require_admin(config: &Config) -> Result<()> {
    if !config.has_admin_password() {
        return Ok(());
    }

    let password = dialoguer::Password::new()
        .with_prompt("관리자 비밀번호")
        .interact()
        .map_err(|e| SeoroError::Config(format!("입력 에러: {}", e)))?;
    config.check_admin_access(&password)
}
