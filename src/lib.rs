//! Image Playground
//!
//! Desktop front end for an image generation/editing workflow. It keeps the
//! API key and model in a small settings store, lists past generations with
//! their token costs, and switches between the "generate" and "edit" modes.
//!
//! The generation backend is not part of this crate; history entries are read
//! from `history.json` in the data directory.

pub mod config;
pub mod domain;
pub mod gui;
pub mod storage;

pub use domain::*;
