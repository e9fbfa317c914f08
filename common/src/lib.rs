//! Host glue shared by the wasm modules: panic reporting and logger setup.

use std::panic;

#[cfg(feature = "bindgen")]
mod init;

#[cfg(feature = "bindgen")]
pub use crate::init::*;

/// Host-imported function that receives a UTF-8 message as a pointer + byte length.
pub type RawLogFn = unsafe extern "C" fn(ptr: *const u8, len: usize);

static mut RAW_PANIC_HOOK_SET: bool = false;

/// Installs a panic hook that formats the panic and hands the text to `log_err`.  Used by modules
/// that are loaded without wasm-bindgen glue, where `console_error_panic_hook` isn't available and
/// the host instead provides a plain import for error text.
///
/// Only the first call installs anything.
pub fn set_raw_panic_hook(log_err: RawLogFn) {
  if unsafe { RAW_PANIC_HOOK_SET } {
    return;
  }
  unsafe { RAW_PANIC_HOOK_SET = true };

  panic::set_hook(Box::new(move |info| {
    let msg = info.to_string();
    unsafe { log_err(msg.as_ptr(), msg.len()) };
  }));
}
