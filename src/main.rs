//! # acu-builder 진입점
//!
//! 1. 환경변수(.env) 로딩
//! 2. 로깅(tracing) 초기화
//! 3. 설정에 지정된 제어기 생성
//! 4. 헬스체크 서버 시작

use acu_builder::{
    config::Config,  // 환경변수 기반 설정
    select,          // 토큰 문자열 → 제어기 생성 (알 수 없는 토큰은 에러)
    server::Server,  // 헬스체크 HTTP 서버 빌더
};
use anyhow::{Context, Result}; // anyhow::Result: 어떤 에러든 담는 범용 Result, Context: 에러에 설명 덧붙이기
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt}; // 로깅 초기화 유틸리티

#[tokio::main]
async fn main() -> Result<()> {
    // ── 1단계: 환경변수 로딩 ──
    // .env 파일이 없어도 에러 없이 넘어갑니다.
    dotenvy::dotenv().ok();

    // ── 2단계: 로깅(tracing) 초기화 ──
    // RUST_LOG가 없으면 이 크레이트와 tower_http, axum을 debug 레벨로 출력합니다.
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| "acu_builder=debug,tower_http=debug,axum=debug".into()),
        )
        .with(tracing_subscriber::fmt::layer())
        .init();

    // ── 3단계: 설정 로딩 ──
    let config = Config::from_env();

    // ── 4단계: 제어기 생성 ──
    // 알 수 없는 토큰이나 초기화 실패는 여기서 바로 종료합니다.
    let controller = select(&config.acu_kind, &config.acu_config_path).with_context(|| {
        format!(
            "failed to build antenna controller from ACU_KIND={}",
            config.acu_kind
        )
    })?;
    tracing::info!("Antenna controller ready: {}", controller.kind());

    // ── 5단계: 헬스체크 서버 시작 ──
    // 제어기(controller)는 서버가 도는 동안 main의 스코프에 계속 살아 있습니다.
    tracing::info!("Starting health server on {}:{}", config.host, config.port);
    Server::new(config.host, config.port)
        .initialize_routes()
        .with_default_middlewares()
        .run()
        .await?;

    Ok(())
}
