//! # 안테나 제어기(Antenna Controller) 모듈
//!
//! 모든 제어기가 구현해야 하는 공통 능력(capability) 트레이트와
//! 데모용 구현체들을 정의합니다.
//!
//! - `AntennaController`: 팩토리가 만들 수 있는 타입의 최소 계약
//! - `variants`: `ControllerOne`, `ControllerTwo` 구현체
//!
//! 호출자는 팩토리가 돌려준 `Box<dyn AntennaController>`만 다루고,
//! 생성 이후에는 구체 타입을 알 수 없습니다.

use std::fmt::Debug;
use std::path::Path;

use crate::error::ControllerError;

pub mod variants;

pub use variants::*;

/// 안테나 제어기의 공통 능력
///
/// `load_config`는 `&mut self`를 받습니다. 초기화는 수신자 상태를 바꾸는 작업이라
/// 변경 가능한 인스턴스에서만 호출할 수 있어야 하기 때문입니다.
///
/// `Debug`를 상위 트레이트로 두어 핸들을 로그에 찍을 수 있게 합니다.
/// 구체 타입의 필드나 메서드에 접근하는 통로는 아닙니다.
pub trait AntennaController: Debug {
    /// 주어진 경로의 설정으로 제어기를 초기화합니다.
    ///
    /// # 에러
    /// - `ConfigNotFound`: 설정 파일이 없음
    /// - `ConfigMalformed`: 설정 내용을 해석할 수 없음
    fn load_config(&mut self, path: &Path) -> Result<(), ControllerError>;

    /// 제어기 종류를 나타내는 식별 문자열 (예: "ControllerOne")
    fn kind(&self) -> &'static str;
}
