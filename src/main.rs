//! sessiontracker main entrypoint.

use sessiontracker::run;
use sessiontracker::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
