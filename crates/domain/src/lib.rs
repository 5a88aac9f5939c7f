#![warn(clippy::pedantic)]
#![allow(clippy::missing_errors_doc)]

mod error;
mod exercise;
mod form;
mod service;
mod workout;

pub use error::*;
pub use exercise::*;
pub use form::*;
pub use service::*;
pub use workout::*;

pub trait Property: Clone + Copy + Sized {
    fn iter() -> std::slice::Iter<'static, Self>;
    fn name(self) -> &'static str;
}
