pub mod error;
pub mod exchange;
pub mod generate;
pub mod model;
pub mod protocols;
pub mod shared;
pub mod validate;
