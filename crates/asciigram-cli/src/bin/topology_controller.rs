//! Prints the controller topology diagram.

use clap::Parser;
use log::info;

use asciigram_cli::{Args, charset, init_logger, print_or_exit, topology};

fn main() {
    // Install miette's pretty panic hook early for better panic reports
    miette::set_panic_hook();

    let args = Args::parse();
    init_logger(&args);

    info!("Rendering controller topology");
    print_or_exit(topology::controller(charset(&args)));
}
