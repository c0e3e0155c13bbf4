//! Browser-independent core of the top navigation bar.

pub mod controller;
pub mod error;
pub mod mirror;
pub mod renderer;
pub mod scheduler;
pub mod scroll;
pub mod state;
pub mod storage;
pub mod surface;

#[cfg(test)]
pub mod testing;

pub use controller::{NavBar, NavDeps};
pub use error::{NavError, NavResult};
pub use state::{DrawerState, NavBarState};
