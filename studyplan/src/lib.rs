use std::sync::LazyLock;
use std::time::Instant;

pub mod config;
pub mod io;

/// Start of the process, used as reference for log time stamps and solution run times
pub static EPOCH: LazyLock<Instant> = LazyLock::new(Instant::now);
