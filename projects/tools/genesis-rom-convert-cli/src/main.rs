mod commands;
mod error;
mod util;

use commands::convert::{handle_convert_command, ConvertCmd};
use std::process::ExitCode;

fn main() -> ExitCode {
    let cmd: ConvertCmd = argh::from_env();
    util::init_logging(cmd.verbose, cmd.quiet);

    match handle_convert_command(cmd) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            log::error!("{e}");
            ExitCode::from(e.exit_code())
        }
    }
}
