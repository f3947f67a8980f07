use std::{env, io};

use array_append_remove::cli::{self, Args};

fn main() -> anyhow::Result<()> {
    cli::init_logging()?;
    let args = Args::from_argv(env::args_os());
    cli::run(&args, &mut io::stdout().lock())?;
    Ok(())
}
