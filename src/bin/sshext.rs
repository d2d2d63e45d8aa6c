use std::process::ExitCode;

use devkit::hosts;
use devkit::shared::env_var::EnvVars;
use devkit::shared::logging;

fn main() -> ExitCode {
    let env = EnvVars::load();
    logging::init(&env);
    hosts::main_with_args(std::env::args_os(), &env)
}
