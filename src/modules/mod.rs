pub mod alerts;
pub mod auth;
