pub mod countries;
pub mod data;

pub use countries::country_name;
pub use data::*;
