pub mod balance;
pub mod download;
pub mod error;
pub mod extract;
pub mod lang;
pub mod pipelines;
pub mod report;
