pub mod aggregate;
pub mod criteria;
pub mod page;
