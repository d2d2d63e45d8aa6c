use clap::Parser;
use devkit::shared::env_var::EnvVars;
use devkit::shared::logging;
use devkit::ssh_agent::{self, ConvertArgs};

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = ConvertArgs::parse();
    logging::init(&EnvVars::load());

    let written = ssh_agent::run(&args)?;
    println!("Wrote {}", written.display());
    Ok(())
}
