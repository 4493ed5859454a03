//! # 에러 처리 모듈
//!
//! 두 계층의 에러 타입을 정의합니다.
//!
//! - `ControllerError`: 제어기 선택/초기화 단계의 에러 (코어 계층)
//! - `AppError`: HTTP 계층의 에러. `IntoResponse`를 구현하여 JSON 에러 응답으로 변환됩니다.
//!
//! 코어(팩토리)와 HTTP 서버는 서로를 모릅니다. 두 에러 타입도 서로 변환되지 않습니다.

use std::path::PathBuf; // 소유된 파일 경로 타입 (에러에 어떤 파일이었는지 담기 위해)

use axum::{
    http::StatusCode,                   // HTTP 상태 코드 (404 등)
    response::{IntoResponse, Response}, // Axum의 응답 변환 트레이트
    Json,                               // JSON 응답 래퍼
};
use serde_json::json; // json! 매크로: JSON 객체를 간편하게 생성
use thiserror::Error; // #[derive(Error)]로 Display, std::error::Error 자동 구현

/// 제어기를 만드는 과정에서 발생할 수 있는 에러
///
/// 팩토리는 이 에러를 새로 만들지 않습니다. 제어기의 `load_config`가
/// 돌려준 에러를 그대로 호출자에게 전달할 뿐입니다.
/// `InvalidSelector`만 호출자 쪽 선택 로직(`selector`)에서 생성됩니다.
// Clone, PartialEq, Eq: 테스트에서 돌려받은 에러를 그대로 비교(assert_eq!)하기 위해 derive합니다.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum ControllerError {
    /// 알 수 없는 선택 토큰 (예: "ControllerThree")
    #[error("unknown antenna controller: {0}")]
    InvalidSelector(String),

    /// 설정 파일을 찾을 수 없음
    /// `{}`와 `path.display()`: PathBuf는 Display를 구현하지 않아서 display()로 출력합니다.
    #[error("config file not found: {}", path.display())]
    ConfigNotFound { path: PathBuf },

    /// 설정 파일은 있지만 내용을 해석할 수 없음
    #[error("malformed config file {}: {reason}", path.display())]
    ConfigMalformed { path: PathBuf, reason: String },
}

/// HTTP 핸들러에서 반환하는 에러
///
/// 핸들러가 `Result<T, AppError>`를 반환하면 axum이 `IntoResponse`를 호출해
/// `{ "error": { "code": ..., "message": ... } }` 형태의 응답을 만듭니다.
/// 헬스체크 서버는 상태가 없어서 라우트 미일치(404) 말고는 실패할 일이 없습니다.
#[derive(Debug, Error)]
pub enum AppError {
    /// 요청한 경로가 없음 (HTTP 404)
    #[error("Resource not found")]
    NotFound,
}

impl IntoResponse for AppError {
    fn into_response(self) -> Response {
        // match: variant마다 (상태 코드, 에러 코드) 쌍을 정합니다.
        // 유닛 variant는 값을 꺼내지 않으므로 self가 이동(move)되지 않습니다.
        let (status, code) = match self {
            AppError::NotFound => (StatusCode::NOT_FOUND, "not_found"),
        };

        // 결과: { "error": { "code": "not_found", "message": "Resource not found" } }
        let body = Json(json!({
            "error": {
                "code": code,
                "message": self.to_string()
            }
        }));

        // (StatusCode, Json<Value>) 튜플은 axum이 HTTP 응답으로 바로 변환합니다.
        (status, body).into_response()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn controller_error_messages_name_the_input() {
        let err = ControllerError::InvalidSelector("ControllerThree".to_string());
        assert_eq!(err.to_string(), "unknown antenna controller: ControllerThree");

        let err = ControllerError::ConfigNotFound {
            path: PathBuf::from("missing.json"),
        };
        assert_eq!(err.to_string(), "config file not found: missing.json");
    }

    #[test]
    fn not_found_maps_to_404() {
        assert_eq!(AppError::NotFound.into_response().status(), StatusCode::NOT_FOUND);
    }
}
