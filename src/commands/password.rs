use crate::cli::PasswordArgs;
use crate::core::password;
use crate::utils::output::{OutputStyle, print_error, print_success};
use anyhow::Result;

pub fn handle_password_command(args: &PasswordArgs) -> Result<()> {
    let report = password::validate_password(&args.password);

    if report.valid {
        print_success("Password meets all requirements");
    } else {
        print_error("Password does not meet the requirements:");
        for failure in &report.failures {
            println!("  - {}", OutputStyle::warning(failure));
        }
    }

    Ok(())
}
