pub mod error;
pub mod middleware;

pub use error::{ConstructionError, InitError, InvalidKeyEncoding};
