//! # 제어기 팩토리
//!
//! 타입 매개변수 하나로 어떤 제어기든 만들어내는 제네릭 생성 함수입니다.
//!
//! ## 처리 흐름
//! 1. `T::default()`로 0값 인스턴스를 만든다
//! 2. `&mut` 참조로 `load_config(path)`를 정확히 한 번 호출한다
//! 3. 성공하면 `Box<dyn AntennaController>`로 감싸 소유권을 넘긴다
//!
//! 런타임 레지스트리나 리플렉션은 없습니다. 어떤 타입을 만들지는
//! 호출하는 쪽에서 `construct::<ControllerOne>(...)`처럼 컴파일 타임에 정합니다.

use std::path::Path;

use crate::controller::AntennaController;
use crate::error::ControllerError;

/// 초기화가 끝난 제어기를 트레이트 객체로 반환합니다.
///
/// 트레이트 경계 설명:
/// - `Default`: 값으로 인스턴스를 만들 수 있어야 함
/// - `AntennaController`: `&mut T`에서 `load_config`를 호출할 수 있어야 함
/// - `'static`: 빌린 데이터 없이 `Box<dyn ...>`에 담을 수 있어야 함
///
/// 팩토리는 아무 상태도 갖지 않고, 반환한 핸들에 대한 참조도 남기지 않습니다.
///
/// # 에러
/// `load_config`가 돌려준 에러를 바꾸지 않고 그대로 전달합니다.
/// 이때 만들던 인스턴스는 버려지므로, 초기화가 덜 된 핸들은 절대 밖으로 나가지 않습니다.
pub fn construct<T>(
    config_path: impl AsRef<Path>,
) -> Result<Box<dyn AntennaController>, ControllerError>
where
    T: AntennaController + Default + 'static,
{
    let path = config_path.as_ref();

    let mut controller = T::default();
    controller.load_config(path)?;

    tracing::debug!("Constructed {} from {}", controller.kind(), path.display());

    Ok(Box::new(controller))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::controller::{ControllerOne, ControllerTwo};

    #[test]
    fn construct_returns_handle_of_requested_kind() {
        let one = construct::<ControllerOne>("path/to/config/file").unwrap();
        assert_eq!(one.kind(), "ControllerOne");

        let two = construct::<ControllerTwo>("path/to/config/file").unwrap();
        assert_eq!(two.kind(), "ControllerTwo");
    }

    #[test]
    fn construct_accepts_owned_paths() {
        let path = std::path::PathBuf::from("path/to/config/file");
        let handle = construct::<ControllerOne>(&path).unwrap();
        assert!(format!("{:?}", handle).contains("path/to/config/file"));
    }
}
