use std::process::ExitCode;

use devkit::gitext;
use devkit::shared::env_var::EnvVars;
use devkit::shared::logging;

fn main() -> ExitCode {
    let env = EnvVars::load();
    logging::init(&env);
    gitext::main_with_args(std::env::args_os())
}
