//! Business logic services.

pub mod league;
pub mod players;
pub mod upstream;

#[cfg(test)]
pub(crate) mod testing;
