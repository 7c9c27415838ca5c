// Copyright (c) 2025 R3BL LLC. Licensed under Apache License, Version 2.0.

//! Configuration and logging shared by the library and the binary.

pub mod config;
pub mod logging;

pub use config::*;
pub use logging::*;
