//! Concrete implementations of [crate::domain::ports::NotionApi]

pub mod reqwest_api;
