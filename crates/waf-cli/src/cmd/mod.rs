pub mod detail;
pub mod devops;
pub mod generate;
pub mod index;
pub mod search;
