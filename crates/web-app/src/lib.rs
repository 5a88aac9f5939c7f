#![warn(clippy::pedantic)]

pub mod log;
mod service;

pub use service::Service;
