//! # 애플리케이션 설정(Configuration) 모듈
//!
//! 환경변수에서 설정값을 읽어오는 모듈입니다.
//! `.env` 파일이나 시스템 환경변수에서 값을 가져옵니다.
//!
//! 설정 항목 (모두 선택, 기본값 있음):
//! - `HOST`: 서버 바인딩 주소 (기본값: "0.0.0.0")
//! - `PORT`: 서버 포트 번호 (기본값: 3000)
//! - `ACU_KIND`: 생성할 제어기 선택 토큰 (기본값: "ControllerTwo")
//! - `ACU_CONFIG_PATH`: 제어기 설정 파일 경로 (기본값: "path/to/config/file")

// std::env: Rust 표준 라이브러리의 환경변수 모듈
use std::env;

// 기본값 상수: 환경변수가 없을 때 사용합니다.
// ACU_KIND와 ACU_CONFIG_PATH의 기본값은 데모에서 쓰던 값 그대로입니다.
const DEFAULT_HOST: &str = "0.0.0.0";
const DEFAULT_PORT: u16 = 3000;
const DEFAULT_ACU_KIND: &str = "ControllerTwo";
const DEFAULT_ACU_CONFIG_PATH: &str = "path/to/config/file";

/// 애플리케이션 전체 설정
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Config {
    /// 서버가 바인딩할 호스트 주소
    pub host: String,
    /// 서버 포트 번호
    pub port: u16,
    /// 제어기 선택 토큰. 검증은 `selector::select`에서 합니다.
    pub acu_kind: String,
    /// 제어기 설정 파일 경로
    pub acu_config_path: String,
}

impl Config {
    /// 환경변수에서 설정값을 읽어 Config 인스턴스를 생성합니다.
    ///
    /// 필수 항목이 없으므로 실패하지 않습니다.
    pub fn from_env() -> Self {
        // env::var(): Result<String, VarError>를 반환합니다.
        // .ok(): Result를 Option으로 바꿔서, 변수가 없으면 None이 되게 합니다.
        Self::from_lookup(|key| env::var(key).ok())
    }

    /// 키 조회 함수로 설정을 만듭니다.
    ///
    /// 테스트에서 전역 환경변수를 건드리지 않고 값을 주입할 때 사용합니다.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        Self {
            // unwrap_or_else(|| ...): None일 때만 클로저를 실행해 기본값을 만듭니다.
            host: lookup("HOST").unwrap_or_else(|| DEFAULT_HOST.to_string()),
            // 포트 번호는 문자열 → u16 변환이 필요합니다.
            // and_then: 값이 있을 때만 파싱하고, 파싱 실패(예: "abc", "70000")도 None이 됩니다.
            port: lookup("PORT")
                .and_then(|port| port.parse().ok()) // "3000" → Some(3000u16)
                .unwrap_or(DEFAULT_PORT),           // 없거나 잘못된 값이면 기본 포트
            acu_kind: lookup("ACU_KIND").unwrap_or_else(|| DEFAULT_ACU_KIND.to_string()),
            acu_config_path: lookup("ACU_CONFIG_PATH")
                .unwrap_or_else(|| DEFAULT_ACU_CONFIG_PATH.to_string()),
        }
    }
}
