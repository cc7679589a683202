pub mod dao;
pub mod treasury;

pub use dao::*;
pub use treasury::*;
