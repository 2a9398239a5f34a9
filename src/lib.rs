// Library for tests and the demo binary to access modules

pub mod config;
pub mod detect;
pub mod device_repo;
pub mod errors;
pub mod models;
pub mod platform;
pub mod providers;
pub mod snapshot;
