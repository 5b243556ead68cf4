pub mod repository;
pub mod resolvers;
