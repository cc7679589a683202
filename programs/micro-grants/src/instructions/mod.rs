pub mod create_dao;
pub mod verify_dao;

pub use create_dao::*;
pub use verify_dao::*;
