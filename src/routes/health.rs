//! # 헬스체크(Health Check) 핸들러
//!
//! ## 엔드포인트
//! - `GET /health` → `{ "system_1": "OK", "system_2": "ERROR" }`
//!
//! 두 하위 시스템의 상태는 고정값입니다. 실제 점검은 하지 않습니다.

use axum::Json;

use crate::models::Health;

/// `GET /health`: 하위 시스템 상태를 반환합니다.
///
/// 상태(State)도 추출자도 없는 가장 단순한 핸들러입니다.
/// `Json<Health>`를 반환하므로 axum이 `Content-Type: application/json`과
/// 200 OK를 알아서 붙여줍니다.
pub async fn health_check() -> Json<Health> {
    Json(Health {
        system_1: "OK".to_string(),
        system_2: "ERROR".to_string(),
    })
}
