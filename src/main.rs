use std::io::{BufRead, Write};

use gumdrop::Options;
use vinculum::{Outcome, Repl, Settings};

#[derive(Debug, Options)]
struct Args {
    #[options(help = "print this message")]
    help: bool,

    #[options(help = "log every line")]
    verbose: bool,

    #[options(help = "don't print a prompt")]
    quiet: bool,

    #[options(help = "start with overlines on")]
    overline: bool,

    #[options(help = "start with CRLF overlines on")]
    crlf: bool,

    #[options(help = "start with decimal output for decoded numerals")]
    decimal: bool,
}

fn main() -> std::io::Result<()> {
    let args = Args::parse_args_default_or_exit();

    let level = if args.verbose { "debug" } else { "warn" };
    env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(level)).init();

    let mut repl = Repl::new(Settings {
        overline: args.overline,
        crlf: args.crlf,
        fraction: !args.decimal,
    });
    log::debug!("starting with {:?}", repl.settings);

    let stdin = std::io::stdin();
    let mut stdin = stdin.lock();
    let stdout = std::io::stdout();
    let mut stdout = stdout.lock();

    let mut line = String::new();
    loop {
        if !args.quiet {
            write!(stdout, "> ")?;
            stdout.flush()?;
        }

        line.clear();
        if stdin.read_line(&mut line)? == 0 {
            break;
        }

        match repl.eval(&line) {
            Outcome::Print(text) => writeln!(stdout, "{text}")?,
            Outcome::Nothing => {}
            Outcome::Quit => break,
        }
    }

    Ok(())
}
