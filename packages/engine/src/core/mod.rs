//! Core building blocks shared by every system: math types, pool handles
//! and the console logger.

pub mod handle;
pub mod logging;
pub mod math;
