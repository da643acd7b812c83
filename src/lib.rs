#![cfg_attr(not(feature = "std"), no_std)]

extern crate alloc;
#[cfg(feature = "std")]
extern crate std;

pub mod api;
pub mod core;
#[cfg(feature = "std")]
mod logging;
pub mod player;
pub mod prelude;
pub mod session;
#[cfg(feature = "std")]
pub mod ui;

pub use api::RefereeApi;
pub use crate::core::*;
#[cfg(feature = "std")]
pub use logging::{init_logging, LOG_ENV};
pub use player::{Player, RandomPlayer, ScriptedPlayer};
#[cfg(feature = "std")]
pub use player::CliPlayer;
pub use session::MatchSession;
