//! # 제어기 선택(Selector) 모듈
//!
//! 런타임 문자열 토큰(예: 환경변수 `ACU_KIND`)을 구체 제어기 타입으로 연결합니다.
//!
//! 이 매핑은 팩토리 밖, 호출하는 쪽에 있습니다. 알려진 토큰은 `ControllerKind`
//! 열거형이 전부이고, `match`가 모든 경우를 빠짐없이 처리합니다.
//! 모르는 토큰은 `ControllerError::InvalidSelector`로 거절합니다.

use std::fmt;
use std::path::Path;
use std::str::FromStr;

use crate::controller::{AntennaController, ControllerOne, ControllerTwo};
use crate::error::ControllerError;
use crate::factory::construct;

/// 알려진 제어기 종류
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ControllerKind {
    One,
    Two,
}

impl ControllerKind {
    /// 선택 가능한 모든 종류
    pub const ALL: [ControllerKind; 2] = [ControllerKind::One, ControllerKind::Two];

    /// 선택 토큰 문자열
    pub fn as_str(self) -> &'static str {
        match self {
            ControllerKind::One => "ControllerOne",
            ControllerKind::Two => "ControllerTwo",
        }
    }

    /// 이 종류에 해당하는 제어기를 팩토리로 생성합니다.
    pub fn build(
        self,
        config_path: impl AsRef<Path>,
    ) -> Result<Box<dyn AntennaController>, ControllerError> {
        match self {
            ControllerKind::One => construct::<ControllerOne>(config_path),
            ControllerKind::Two => construct::<ControllerTwo>(config_path),
        }
    }
}

impl fmt::Display for ControllerKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ControllerKind {
    type Err = ControllerError;

    fn from_str(token: &str) -> Result<Self, Self::Err> {
        ControllerKind::ALL
            .into_iter()
            .find(|kind| kind.as_str() == token)
            .ok_or_else(|| ControllerError::InvalidSelector(token.to_string()))
    }
}

/// 토큰으로 제어기를 골라 생성합니다.
///
/// # 에러
/// - `InvalidSelector`: 토큰이 어떤 종류와도 일치하지 않음 (대소문자 구분)
/// - 그 밖의 에러: 제어기 초기화 실패를 그대로 전달
pub fn select(
    token: &str,
    config_path: impl AsRef<Path>,
) -> Result<Box<dyn AntennaController>, ControllerError> {
    let kind: ControllerKind = token.parse()?;
    kind.build(config_path)
}
