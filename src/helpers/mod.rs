//! Stateless helpers: identifier generation and token inspection

pub mod jwt;
pub mod uuid;

pub use jwt::{JwtError, debug_jwt};
pub use self::uuid::new_uuid;
