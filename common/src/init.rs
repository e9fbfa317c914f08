static mut IS_INITIALIZED: bool = false;

/// Sets up `console_error_panic_hook` and routes `log` records to the browser console.  Safe to
/// call any number of times; only the first call does anything.
pub fn maybe_init() {
  if unsafe { IS_INITIALIZED } {
    return;
  }
  unsafe { IS_INITIALIZED = true };

  console_error_panic_hook::set_once();

  let log_level = if cfg!(debug_assertions) {
    log::Level::Trace
  } else {
    log::Level::Info
  };
  wasm_logger::init(wasm_logger::Config::new(log_level));
  log::debug!("logging initialized at level {log_level}");
}
