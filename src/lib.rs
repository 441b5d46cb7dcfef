//! qrn - An interactive console for a local store of quantum random bytes

pub mod anu;
pub mod command;
pub mod config;
pub mod console;
pub mod display;
pub mod error;
pub mod store;

#[cfg(test)]
pub mod test_utils;
