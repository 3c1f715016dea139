pub mod errors;
mod client;
mod mock;

pub use client::{Loader, Timing};
pub use errors::Error;
