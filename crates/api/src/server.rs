//! # API 서비스 조립
//!
//! axum 라우터 구성, Swagger UI 마운트, CORS 설정, TCP 바인딩.
//! `main()` 은 `crates/app` 의 DI 컨테이너가 담당한다.

use std::sync::Arc;

use axum::Router;
use tower_http::cors::{Any, CorsLayer};
use utoipa::OpenApi;
use utoipa_axum::router::OpenApiRouter;
use utoipa_axum::routes;
use utoipa_swagger_ui::SwaggerUi;

use manse_core::saju::port::SajuPort;

use crate::routes::{health, saju};

// ============================================================
//  공유 애플리케이션 상태
// ============================================================

/// 전역 애플리케이션 상태. axum `State` 로 각 핸들러에 주입된다.
///
/// # Invariants
/// - `saju_port` 는 서버 시작 전에 DI 컨테이너가 주입하며 프로세스와 수명을 같이한다.
#[derive(Clone)]
pub struct AppState {
    /// 사주 계산 포트
    pub saju_port: Arc<dyn SajuPort>,
}

// ============================================================
//  OpenAPI 문서 정의
// ============================================================

/// 전역 OpenAPI 문서 구조
#[derive(OpenApi)]
#[openapi(
    info(
        title = "Manse 만세력 API",
        version = "0.1.0",
        description = "생년월일(양력/음력)과 시각으로 사주 네 기둥(연·월·일·시주)을 돌려주는 REST API.",
        license(name = "MIT")
    ),
    tags(
        (name = "사주 (Saju)", description = "사주 네 기둥 조회"),
        (name = "시스템 (System)", description = "상태 확인")
    )
)]
pub struct ApiDoc;

// ============================================================
//  서비스 구성과 시작
// ============================================================

/// 전체 라우터를 구성한다. 테스트에서 임의 리스너에 얹을 수 있도록 분리.
pub fn build_router(state: AppState) -> Router {
    let (router, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(saju::get_saju))
        .routes(routes!(health::health))
        .with_state(state)
        .split_for_parts();

    let cors = CorsLayer::new()
        .allow_origin(Any)
        .allow_methods(Any)
        .allow_headers(Any);

    router
        .merge(SwaggerUi::new("/swagger-ui").url("/api-docs/openapi.json", api))
        .layer(cors)
}

/// 라우터를 조립해 HTTP 수신을 시작한다.
///
/// # Arguments
/// * `state` - 외부 DI 컨테이너가 주입한 공유 상태
/// * `bind_addr` - 수신 주소와 포트, 예: `"0.0.0.0:8080"`
pub async fn start_server(
    state: AppState,
    bind_addr: &str,
) -> Result<(), Box<dyn std::error::Error>> {
    let app = build_router(state);

    tracing::info!("🚀 Manse API Server listening on {}", bind_addr);
    tracing::info!("📖 Swagger UI: http://{}/swagger-ui/", bind_addr);

    let listener = tokio::net::TcpListener::bind(bind_addr).await?;
    axum::serve(listener, app).await?;

    Ok(())
}
