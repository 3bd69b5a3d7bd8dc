pub mod capability;
pub mod catalog;
pub mod corpus;
pub mod error;
pub mod generate;
pub mod io;
pub mod markdown;
pub mod paths;
pub mod practice;
pub mod query;
pub mod render;
pub mod types;

pub use error::{Result, WafError};
