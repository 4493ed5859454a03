//! # 데이터 모델 모듈
//!
//! HTTP 응답으로 직렬화되는 구조체들을 정의합니다.
//! - `health`: 헬스체크 응답

pub mod health;

pub use health::*;
