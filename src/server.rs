//! # HTTP 서버
//!
//! 헬스체크 라우트를 제공하는 얇은 axum 서버입니다.
//! 제어기 팩토리와는 아무 의존 관계가 없습니다.
//!
//! 빌더 방식으로 조립합니다:
//!
//! ```no_run
//! # async fn run() -> std::io::Result<()> {
//! use acu_builder::server::Server;
//!
//! Server::new("0.0.0.0", 3000)
//!     .initialize_routes()
//!     .with_default_middlewares() // 로깅 + CORS
//!     // .layer(TimeoutLayer::new(..)) 처럼 원하는 레이어를 더 붙일 수 있습니다
//!     .run()
//!     .await
//! # }
//! ```

use std::convert::Infallible; // 절대 발생하지 않는 에러 타입 (axum 라우트의 에러 타입)

use axum::{
    extract::Request,              // axum의 HTTP 요청 타입 (http::Request<Body>)
    response::IntoResponse,        // 응답으로 변환 가능한 타입의 트레이트
    routing::{get, Route},         // GET 라우팅 함수, 레이어가 감싸는 라우트 서비스
    Router,                        // URL 경로와 핸들러를 연결하는 라우터
};
use tower::{Layer, Service}; // 미들웨어(Layer)와 서비스(Service)의 기본 트레이트
use tower_http::{
    cors::{Any, CorsLayer}, // CORS 설정
    trace::TraceLayer,      // HTTP 요청/응답 로깅 미들웨어
};

use crate::routes::{fallback, health_check};

/// 라우터와 바인딩 주소를 묶은 서버
pub struct Server {
    host: String,
    port: u16,
    router: Router,
}

impl Server {
    /// 라우트가 하나도 없는 서버를 만듭니다.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            host: host.into(),
            port,
            router: Router::new(),
        }
    }

    /// 기본 라우트(`GET /health`)와 404 fallback을 등록합니다.
    pub fn initialize_routes(mut self) -> Self {
        self.router = self
            .router
            .route("/health", get(health_check))
            .fallback(fallback);
        self
    }

    /// 하위 라우터를 `base_url` 아래에 붙입니다.
    ///
    /// 예: `mount("/api", r)`이면 `r`의 `/ping`은 `/api/ping`이 됩니다.
    /// axum은 루트(`/`)에 중첩하는 것을 허용하지 않으므로 `base_url`은 `/`로
    /// 시작하는 하위 경로여야 합니다.
    pub fn mount(mut self, base_url: &str, router: Router) -> Self {
        self.router = self.router.nest(base_url, router);
        self
    }

    /// 미들웨어 레이어를 하나 추가합니다.
    ///
    /// axum의 `Router::layer`와 같은 트레이트 경계를 그대로 씁니다.
    /// 따라서 tower/tower-http의 레이어(타임아웃, 압축, 헤더 설정, 인증 등)를
    /// 빌더를 벗어나지 않고 붙일 수 있습니다.
    ///
    /// 레이어는 이미 등록된 라우트에만 적용되므로 라우트를 모두 붙인 뒤에 호출합니다.
    /// 나중에 추가한 레이어가 더 바깥쪽에서 요청을 먼저 받습니다.
    pub fn layer<L>(mut self, layer: L) -> Self
    where
        L: Layer<Route> + Clone + Send + Sync + 'static,
        L::Service: Service<Request> + Clone + Send + Sync + 'static,
        <L::Service as Service<Request>>::Response: IntoResponse + 'static,
        <L::Service as Service<Request>>::Error: Into<Infallible> + 'static,
        <L::Service as Service<Request>>::Future: Send + 'static,
    {
        self.router = self.router.layer(layer);
        self
    }

    /// 요청 로깅(TraceLayer)과 CORS 미들웨어를 추가합니다.
    pub fn with_default_middlewares(self) -> Self {
        // 개발용 설정: 모든 출처/메서드/헤더 허용
        let cors = CorsLayer::new()
            .allow_origin(Any)
            .allow_methods(Any)
            .allow_headers(Any);

        self.layer(cors).layer(TraceLayer::new_for_http())
    }

    /// `host:port` 형식의 바인딩 주소
    pub fn address(&self) -> String {
        format!("{}:{}", self.host, self.port)
    }

    /// 조립된 라우터를 꺼냅니다. 포트를 열지 않고 테스트할 때 사용합니다.
    pub fn into_router(self) -> Router {
        self.router
    }

    /// 주소에 바인딩하고 요청을 처리합니다. 종료될 때까지 반환하지 않습니다.
    pub async fn run(self) -> std::io::Result<()> {
        let addr = self.address();
        // TcpListener: 지정한 주소에서 TCP 연결을 기다리는 소켓
        let listener = tokio::net::TcpListener::bind(&addr).await?;
        tracing::info!("Listening on {}", addr);

        // Ctrl+C 등으로 프로세스가 끝날 때까지 여기서 요청을 처리합니다.
        axum::serve(listener, self.router).await
    }
}
