mod handler;
mod service;
pub mod types;

pub use handler::AllCategoriesQuery;
