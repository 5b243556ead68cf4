mod handler;

pub use handler::MeQuery;
