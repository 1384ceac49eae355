pub mod access;
pub mod config;
pub mod error;
pub mod identity;

// Backend records and statistics
pub mod common;
pub mod company;
pub mod employee;
pub mod exam;
pub mod report;
pub mod risk;
pub mod staff;

pub use access::*;
pub use config::*;
pub use error::*;
pub use identity::*;

pub use common::*;
pub use company::*;
pub use employee::*;
pub use exam::*;
pub use report::*;
pub use risk::*;
pub use staff::*;
