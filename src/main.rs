use std::env;
use std::io::{self, BufRead};
use std::process;
use std::time::SystemTime;

use anyhow::Context;
use totpgen::totp::Totp;

pub fn main() -> anyhow::Result<()> {
    // The command takes no operands and no flags.
    if env::args_os().nth(1).is_some() {
        eprintln!("usage: totpgen");
        process::exit(1);
    }

    let mut line = String::new();
    io::stdin()
        .lock()
        .read_line(&mut line)
        .context("failed to read the secret")?;

    let (totp, warnings) = Totp::from_line(&line)?;
    for warning in &warnings {
        eprintln!("totpgen: {warning}");
    }

    let now = SystemTime::now();
    let time_since_epoch = now.duration_since(SystemTime::UNIX_EPOCH)?;

    println!("{}", totp.generate(time_since_epoch.as_secs()));

    Ok(())
}
