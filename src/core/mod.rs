pub mod config;
pub mod dispatch;
pub mod endpoints;
pub mod execute;
pub mod prepare;
