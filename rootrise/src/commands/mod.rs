pub mod contact;
pub mod page;
pub mod serve;
