//! 데모용 제어기 구현체
//!
//! 두 구현체 모두 설정 파일을 실제로 읽지 않습니다.
//! `load_config`는 받은 경로를 기록만 하고 항상 성공합니다.

use std::path::{Path, PathBuf};

use super::AntennaController;
use crate::error::ControllerError;

/// 첫 번째 제어기
///
/// `Default`가 "0값" 역할을 합니다: 아직 설정이 로드되지 않은 상태.
#[derive(Debug, Default)]
pub struct ControllerOne {
    config_path: Option<PathBuf>,
}

impl AntennaController for ControllerOne {
    fn load_config(&mut self, path: &Path) -> Result<(), ControllerError> {
        self.config_path = Some(path.to_path_buf());
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "ControllerOne"
    }
}

/// 두 번째 제어기
#[derive(Debug, Default)]
pub struct ControllerTwo {
    config_path: Option<PathBuf>,
}

impl AntennaController for ControllerTwo {
    fn load_config(&mut self, path: &Path) -> Result<(), ControllerError> {
        self.config_path = Some(path.to_path_buf());
        Ok(())
    }

    fn kind(&self) -> &'static str {
        "ControllerTwo"
    }
}
