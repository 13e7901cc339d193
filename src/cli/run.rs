use anyhow::Result;

use super::{
    args::{Command, OutputFormat},
    commands::{CommandResult, check::check, clean::clean, init::init, repair::repair},
    exit_status::ExitStatus,
    report,
};

/// Dispatch to the command handler, print its report and pick the exit status.
///
/// `Err` is reserved for fatal errors (invalid config, no loadable locale).
pub fn run(command: Command) -> Result<ExitStatus> {
    match command {
        Command::Check(args) => {
            let format = args.common.format;
            Ok(finish(check(args)?, format))
        }
        Command::Repair(args) => {
            let format = args.common.format;
            Ok(finish(repair(args)?, format))
        }
        Command::Clean(args) => {
            let format = args.common.format;
            Ok(finish(clean(args)?, format))
        }
        Command::Init => init(),
    }
}

fn finish(result: CommandResult, format: OutputFormat) -> ExitStatus {
    report::print(&result, format);
    exit_status_from_result(&result)
}

/// Warnings never fail a run; any error-severity issue does.
pub fn exit_status_from_result(result: &CommandResult) -> ExitStatus {
    if result.error_count > 0 {
        ExitStatus::Failure
    } else {
        ExitStatus::Success
    }
}
