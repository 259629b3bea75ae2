//! Property codec, models and the database client, independent of any transport.

pub mod codec;
pub mod models;
pub mod ports;
pub mod service;
