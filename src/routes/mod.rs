//! # 라우트 핸들러 모듈
//!
//! - `health`: 하위 시스템 상태 확인 (헬스체크)
//!
//! 등록되지 않은 경로는 `fallback`이 받아서 JSON 404로 응답합니다.

pub mod health;

pub use health::*;

use crate::error::AppError;

/// 일치하는 라우트가 없을 때 호출되는 핸들러
pub async fn fallback() -> AppError {
    AppError::NotFound
}
