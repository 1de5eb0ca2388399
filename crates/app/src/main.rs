use std::sync::Arc;

use manse_api::server::{start_server, AppState};
use manse_calendar::LunisolarCalendar;
use manse_core::config::AppConfig;
use manse_saju::service::SajuService;
use tracing::info;

/// # Summary
/// 애플리케이션 진입점, 순수한 DI 컨테이너.
/// 구체 구현(만세력 어댑터, 사주 서비스)을 조립해 API 서버에 주입한다.
///
/// # Logic
/// 1. 전역 로그 초기화.
/// 2. 설정 로드 (기본값 + `MANSE_*` 환경 변수).
/// 3. 어댑터/서비스 조립.
/// 4. HTTP 서버 시작.
#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    // 1. 로그 초기화
    tracing_subscriber::fmt::init();
    info!("Manse API starting...");

    // 2. 설정 로드
    let app_config = load_config()?;

    // 3. 어댑터/서비스 조립
    let calendar = Arc::new(LunisolarCalendar::new());
    let saju_port = Arc::new(SajuService::new(calendar));

    let state = AppState { saju_port };

    // 4. HTTP 수신 시작
    let bind_addr = format!("{}:{}", app_config.server.host, app_config.server.port);
    start_server(state, &bind_addr).await
}

/// 기본 설정 위에 `MANSE_SERVER__HOST` / `MANSE_SERVER__PORT` 환경 변수를 덮어쓴다.
fn load_config() -> Result<AppConfig, config::ConfigError> {
    config::Config::builder()
        .add_source(config::Config::try_from(&AppConfig::default())?)
        .add_source(config::Environment::with_prefix("MANSE").separator("__"))
        .build()?
        .try_deserialize()
}
