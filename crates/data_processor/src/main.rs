//! Command line entrypoint for producing and inspecting HRTF datasets.
//!
//! Run with `cargo run -p hrtf_data_processor -- export --data-dir path/to/mit/full`.  Set `RUST_LOG=info` to see
//! progress.
mod cli_args;
mod commands;

fn main() -> anyhow::Result<()> {
    use clap::Parser;

    env_logger::init();

    let args = cli_args::CliArgs::parse();
    commands::dispatch_command(args)
}
