use clap::{Parser, Subcommand};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "seoro-orders")]
#[command(about = "서로 출고내역 집계·택배박스 계산 도구", long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// 상세 로그를 출력
    #[arg(short, long, global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// 출고내역서에서 출고 현황을 집계
    Shipment {
        /// 출고내역서 엑셀 파일 또는 폴더
        #[arg(required = true)]
        input: PathBuf,

        /// 집계 스냅샷 저장 경로 (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,

        /// 분류 실패 행의 원본 필드를 모두 출력
        #[arg(long)]
        show_unmapped: bool,
    },

    /// 수취인별 택배박스 필요량을 계산
    Boxes {
        /// 출고내역서 엑셀 파일 또는 폴더
        #[arg(required = true)]
        input: PathBuf,

        /// 계산 스냅샷 저장 경로 (JSON)
        #[arg(short, long)]
        output: Option<PathBuf>,
    },

    /// 재고 현황 확인·출고 반영
    Stock {
        /// 재고 스냅샷 파일 (JSON)
        #[arg(required = true)]
        stock_file: PathBuf,

        /// 이 출고 집계 스냅샷을 재고에 차감 반영
        #[arg(long)]
        apply_shipment: Option<PathBuf>,
    },

    /// 매핑 테이블 통계를 출력
    Stats {
        /// 샘플 파일(JSON 배열 [[상품이름, 옵션이름], ...])로 매핑 검증
        #[arg(long)]
        validate: Option<PathBuf>,
    },

    /// 설정 관리
    Config {
        /// 관리자 비밀번호를 설정 (스냅샷 저장 시 요구됨)
        #[arg(long)]
        set_admin_password: bool,

        /// 현재 설정을 표시
        #[arg(long)]
        show: bool,
    },
}
