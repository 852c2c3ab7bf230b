#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

mod ai;
mod bitgrid;
mod board;
mod common;
mod config;
mod fleet;
mod game;
#[cfg(feature = "std")]
mod logging;
pub mod prelude;
mod session;
mod ship;
pub mod strategy;
#[cfg(feature = "std")]
mod ui;

pub use ai::*;
pub use bitgrid::{BitGrid, GridError, SetBits};
pub use board::*;
pub use common::*;
pub use config::*;
pub use fleet::*;
pub use game::*;
#[cfg(feature = "std")]
pub use logging::*;
pub use session::*;
pub use ship::*;
#[cfg(feature = "std")]
pub use ui::*;
