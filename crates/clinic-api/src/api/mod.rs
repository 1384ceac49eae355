mod client;
pub use client::*;

mod company;
pub use company::*;

mod employee;
pub use employee::*;

mod statistics;
pub use statistics::*;

mod reports;
pub use reports::*;
