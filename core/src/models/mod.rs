// Domain models for Finora

pub mod account;

pub use account::*;
