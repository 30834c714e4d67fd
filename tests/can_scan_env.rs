// tests/can_scan_env.rs
//
// Kept in its own test binary: it mutates process-wide environment variables,
// so nothing else may run alongside it.
#![cfg(unix)]

mod common;
use crate::common::init_tracing;

use tempfile::TempDir;
use shellcmd::can_scan::{home_dir, resolve_interface, DEFAULT_INTERFACE, INTERFACE_ENV};

#[test]
fn interface_and_home_follow_the_environment() {
    init_tracing();

    let saved_iface = std::env::var_os(INTERFACE_ENV);
    let saved_home = std::env::var_os("HOME");

    // SAFETY: this binary contains a single test, so no other thread reads
    // the environment concurrently.
    unsafe { std::env::remove_var(INTERFACE_ENV) };
    assert_eq!(resolve_interface(None), DEFAULT_INTERFACE);
    assert_eq!(resolve_interface(None), "can0");

    unsafe { std::env::set_var(INTERFACE_ENV, "can7") };
    assert_eq!(resolve_interface(None), "can7");
    assert_eq!(resolve_interface(Some("can1")), "can1");

    unsafe { std::env::set_var(INTERFACE_ENV, "   ") };
    assert_eq!(resolve_interface(None), DEFAULT_INTERFACE);

    let home = TempDir::new().unwrap();
    unsafe { std::env::set_var("HOME", home.path()) };
    assert_eq!(home_dir().as_deref(), Some(home.path()));

    // Without HOME the lookup falls back to the password database.
    unsafe { std::env::remove_var("HOME") };
    let fallback = home_dir();

    unsafe {
        match saved_iface {
            Some(v) => std::env::set_var(INTERFACE_ENV, v),
            None => std::env::remove_var(INTERFACE_ENV),
        }
        match saved_home {
            Some(v) => std::env::set_var("HOME", v),
            None => std::env::remove_var("HOME"),
        }
    }

    assert!(fallback.is_some(), "no home directory without $HOME");
}
