#![no_std]

mod bits;
mod error;

pub mod checksum;
pub mod codec;
pub mod config;
pub mod device;
pub mod interface;
mod log;
pub mod params;
pub mod registers;

pub use crate::device::Ips2550;
pub use crate::error::{Error, Result};
