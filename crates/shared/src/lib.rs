pub mod domain;
pub mod error;
pub mod profile;
pub mod protocol;
