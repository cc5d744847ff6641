use std::env;
use std::process::ExitCode;

mod cli;
mod entropy;
mod logging;
mod pass;
mod settings;
mod terminal;

fn main() -> ExitCode {
    // Keep generated passwords out of core dumps.
    #[cfg(target_os = "linux")]
    unsafe {
        libc::prctl(libc::PR_SET_DUMPABLE, 0);
    }

    let args: Vec<String> = env::args().collect();
    cli::run(&args)
}
