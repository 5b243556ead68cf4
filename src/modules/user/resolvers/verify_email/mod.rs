mod handler;
pub mod service;
pub mod types;

pub use handler::VerifyEmailMutation;
