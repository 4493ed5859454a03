//! # 헬스체크 응답 모델

use serde::Serialize;

/// `GET /health`의 응답 본문
///
/// 하위 시스템마다 상태 라벨 하나씩을 담습니다.
/// JSON 키는 필드 이름 그대로 `system_1`, `system_2`입니다.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Health {
    pub system_1: String,
    pub system_2: String,
}
