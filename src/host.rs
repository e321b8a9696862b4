//! One-time installation of the host's shared byte-buffer primitive.
//!
//! Some hosts lack a common binary buffer type for exchanging payloads. The
//! application's startup path hands its installer to
//! [`install_buffer_global`], which runs it at most once per process. The
//! hashing core never reads this state.

use core::sync::atomic::{AtomicU8, Ordering};

const IDLE: u8 = 0;
const RUNNING: u8 = 1;
const DONE: u8 = 2;

static STATE: AtomicU8 = AtomicU8::new(IDLE);

/// Puts the state back to `IDLE` if the installer unwinds.
struct Rollback;

impl Drop for Rollback {
    fn drop(&mut self) {
        STATE.store(IDLE, Ordering::Release);
    }
}

/// Runs `install` unless it already completed; returns whether it ran.
///
/// Callers arriving while another thread is installing wait until that
/// install finishes. If an installer panics, the next call runs its own.
pub fn install_buffer_global(install: impl FnOnce()) -> bool {
    loop {
        match STATE.compare_exchange(IDLE, RUNNING, Ordering::Acquire, Ordering::Acquire) {
            Ok(_) => {
                let rollback = Rollback;
                install();
                core::mem::forget(rollback);
                STATE.store(DONE, Ordering::Release);
                log::debug!("host: buffer primitive installed");
                return true;
            }
            Err(DONE) => {
                log::debug!("host: buffer primitive already installed, skipping");
                return false;
            }
            Err(_) => {
                while STATE.load(Ordering::Acquire) == RUNNING {
                    core::hint::spin_loop();
                }
            }
        }
    }
}

/// True once an installer has run to completion.
pub fn buffer_global_installed() -> bool {
    STATE.load(Ordering::Acquire) == DONE
}
