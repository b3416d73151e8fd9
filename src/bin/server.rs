//! Medicine info server binary.
//! Run with: cargo run --bin medinfo-server

use std::process::ExitCode;

use medinfo::start_medinfo;

fn main() -> ExitCode {
    start_medinfo::run()
}
