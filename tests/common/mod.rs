//! Shared helpers for integration tests.

use std::fs;
use std::path::PathBuf;
use std::process;
use std::sync::atomic::{AtomicUsize, Ordering};

use server_config::{Config, ConfigBuilder};

/// Builder with the two mandatory fields already set.
pub fn ready_builder(address: &str, port: i64) -> ConfigBuilder {
    let mut builder = Config::builder();
    builder
        .address(address)
        .expect("valid address")
        .port(port)
        .expect("valid port");
    builder
}

/// Write `content` to a fresh file under the system temp dir.
#[allow(dead_code)]
pub fn write_temp_config(content: &str) -> PathBuf {
    static COUNTER: AtomicUsize = AtomicUsize::new(0);
    let n = COUNTER.fetch_add(1, Ordering::SeqCst);
    let path = std::env::temp_dir().join(format!("server-config-{}-{}.toml", process::id(), n));
    fs::write(&path, content).expect("write temp config");
    path
}
