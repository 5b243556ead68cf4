pub mod database;
pub mod pagination;
pub mod validation;
pub mod output;
