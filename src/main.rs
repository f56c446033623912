use std::{error::Error as _, process};

use release_draft::Drafter;

#[tokio::main]
async fn main() {
    // Logs go to stderr, default to "warn" unless RUST_LOG says otherwise
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn")).init();

    let drafter = match Drafter::new() {
        Ok(d) => d,
        Err(e) => exit_with(&e),
    };

    match drafter.run().await {
        Ok(summary) => println!(
            "Done! Drafted {} commits ({}...{}) into {}",
            summary.total_commits,
            summary.branches.older,
            summary.branches.newer,
            summary.outfile.display()
        ),
        Err(e) => exit_with(&e),
    }
}

fn exit_with(e: &release_draft::error::Error) -> ! {
    eprintln!("Error: {e}");

    let mut source = e.source();
    while let Some(err) = source {
        eprintln!("  Caused by: {err}");
        source = err.source();
    }

    process::exit(1);
}
