//! # acu-builder
//!
//! 타입 매개변수로 안테나 제어기(ACU)를 골라 생성하는 제네릭 팩토리와,
//! 그 옆에서 독립적으로 동작하는 헬스체크 HTTP 서버입니다.
//!
//! - 코어: `controller`, `factory`, `selector`, `error::ControllerError`
//! - 서버: `server`, `routes`, `models`, `error::AppError`
//! - 공통: `config`

pub mod config;
pub mod controller;
pub mod error;
pub mod factory;
pub mod models;
pub mod routes;
pub mod selector;
pub mod server;

pub use controller::{AntennaController, ControllerOne, ControllerTwo};
pub use error::ControllerError;
pub use factory::construct;
pub use selector::{select, ControllerKind};
