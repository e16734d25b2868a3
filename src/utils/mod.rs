//! Utility modules for table IO and logging

pub mod io;
pub mod logging;
