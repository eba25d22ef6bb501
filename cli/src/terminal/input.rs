use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

use crossterm::{
    event::{self, Event, KeyCode, KeyEventKind, KeyModifiers},
    terminal::{disable_raw_mode, enable_raw_mode},
};
use seedscan_core::scanner::ScanCanceller;
use tracing::debug;

const POLL_INTERVAL: Duration = Duration::from_millis(100);

/// Cancels a running scan when the user presses 'q' or Ctrl-C.
///
/// Raw mode is held only while the handle is alive.
pub struct InputHandle {
    stop: Arc<AtomicBool>,
    thread: Option<thread::JoinHandle<()>>,
}

impl InputHandle {
    pub fn start(canceller: ScanCanceller) -> Self {
        let stop = Arc::new(AtomicBool::new(false));
        let flag = stop.clone();

        let thread = thread::spawn(move || {
            if let Err(e) = enable_raw_mode() {
                debug!("raw mode unavailable, input disabled: {e}");
                return;
            }
            while !flag.load(Ordering::Relaxed) {
                match event::poll(POLL_INTERVAL) {
                    Ok(true) => {}
                    Ok(false) => continue,
                    Err(_) => break,
                }
                if let Ok(Event::Key(key_event)) = event::read() {
                    let is_q = key_event.code == KeyCode::Char('q');
                    let is_ctrl_c = key_event.code == KeyCode::Char('c')
                        && key_event.modifiers.contains(KeyModifiers::CONTROL);

                    if (is_q || is_ctrl_c) && key_event.kind == KeyEventKind::Press {
                        canceller.cancel();
                        break;
                    }
                }
            }
            let _ = disable_raw_mode();
        });

        Self {
            stop,
            thread: Some(thread),
        }
    }
}

impl Drop for InputHandle {
    fn drop(&mut self) {
        self.stop.store(true, Ordering::Relaxed);
        if let Some(thread) = self.thread.take() {
            let _ = thread.join();
        }
        let _ = disable_raw_mode();
    }
}
