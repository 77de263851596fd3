//! Helpers shared by the platform strategies.

pub mod applescript;
pub mod escape;
pub mod runner;

#[cfg(test)]
pub(crate) mod testing;
