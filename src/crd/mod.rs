pub mod kfservice;
pub mod metrics;
