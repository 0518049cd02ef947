//! hrportal main entrypoint.

use hrportal::run;
use hrportal::ui::messages::error;

fn main() {
    if let Err(e) = run() {
        error(format!("Error: {e}"));
        std::process::exit(1);
    }
}
