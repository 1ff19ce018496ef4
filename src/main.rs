//! warestat main entrypoint.

use warestat::run;

fn main() {
    if let Err(e) = run() {
        warestat::ui::messages::error(format!("{}", e));
        std::process::exit(1);
    }
}
