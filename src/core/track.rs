use crate::errors::AppResult;
use crate::models::SessionRecord;
use crate::store::SessionStore;
use crate::utils::time::format_hms;
use chrono::Local;
use std::io::{self, BufRead, Write};
use std::sync::Arc;
use std::sync::atomic::{AtomicBool, Ordering};
use std::thread;
use std::time::Duration;

/// Start a session, wait for the user to stop it, then persist it.
pub struct TrackLogic;

impl TrackLogic {
    /// Runs one session from start to stop.
    ///
    /// The session stops on the first line read from `input` or at end of
    /// input. With `show_timer` a ticker prints the elapsed time once per
    /// second; it only reads the start timestamp and never touches the store.
    pub fn run<R: BufRead>(
        store: &mut SessionStore,
        activity: &str,
        input: &mut R,
        show_timer: bool,
    ) -> AppResult<Option<SessionRecord>> {
        let started = store.start_session(activity).clone();

        println!(
            "▶️  Session '{}' started at {}. Press Enter to stop.",
            started.activity,
            started.start.format("%H:%M:%S")
        );

        let ticker = show_timer.then(|| Ticker::spawn(started.start));

        let mut line = String::new();
        let read = input.read_line(&mut line);

        if let Some(t) = ticker {
            t.stop();
        }

        // a read error still stops the session: the time spent is kept
        if let Err(e) = read {
            crate::ui::messages::warning(format!("Input error, stopping session: {e}"));
        }

        store.end_session()
    }
}

struct Ticker {
    running: Arc<AtomicBool>,
    handle: thread::JoinHandle<()>,
}

impl Ticker {
    fn spawn(start: chrono::NaiveDateTime) -> Self {
        let running = Arc::new(AtomicBool::new(true));
        let flag = Arc::clone(&running);

        let handle = thread::spawn(move || {
            while flag.load(Ordering::Relaxed) {
                let elapsed = (Local::now().naive_local() - start).num_seconds();
                print!("\r⏱  {}", format_hms(elapsed));
                io::stdout().flush().ok();
                thread::sleep(Duration::from_millis(1000));
            }
        });

        Self { running, handle }
    }

    fn stop(self) {
        self.running.store(false, Ordering::Relaxed);
        let _ = self.handle.join();
        println!();
    }
}
