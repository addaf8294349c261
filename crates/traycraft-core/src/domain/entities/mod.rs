pub mod bundle;
pub mod common;
pub mod icon;
pub mod specification;

pub use crate::domain::DomainError;
pub use bundle::OutputBundle;
pub use specification::Specification;
