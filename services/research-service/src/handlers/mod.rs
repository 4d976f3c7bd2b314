//! HTTP request handlers

pub mod compute;
pub mod health;
pub mod meta;

pub use compute::ComputeHandlers;
pub use health::HealthHandlers;
pub use meta::MetaHandlers;
