#![deny(rust_2018_idioms)]
#![deny(clippy::all)]

pub mod build;
pub mod config;
pub mod model;

pub mod error {
    pub use anyhow::{Error, Result};
}
