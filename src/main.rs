//! rWorktime main entrypoint.

use rworktime::run;
use rworktime::ui::messages::error;

fn main() {
    println!();
    if let Err(e) = run() {
        error(format!("Error: {}", e));
        std::process::exit(1);
    }
}
