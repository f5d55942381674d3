use std::{fs, io};

use clap::Parser;
use sprig::repl;

/// sprig is a small, general-purpose expression language with integers,
/// booleans, strings, conditionals, and first-class error values.
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Args {
    /// Tells sprig to look at a file instead of inline source text.
    #[arg(short, long)]
    file: bool,

    /// Pipe mode prints the value of the final statement after running a
    /// script.
    #[arg(short, long)]
    pipe_mode: bool,

    /// Inline source text, or a script path with --file. Starts the
    /// interactive prompt when omitted.
    contents: Option<String>,
}

fn main() {
    let args = Args::parse();

    let Some(contents) = args.contents else {
        let stdin = io::stdin();
        let stdout = io::stdout();
        if let Err(e) = repl::start(&mut stdin.lock(), &mut stdout.lock()) {
            eprintln!("{e}");
        }
        return;
    };

    let script = if args.file {
        fs::read_to_string(&contents).unwrap_or_else(|_| {
            eprintln!("Failed to read the input file '{contents}'. Perhaps this file does not exist?");
            std::process::exit(1);
        })
    } else {
        contents
    };

    match sprig::eval_source(&script) {
        Ok(result) => {
            if result.is_error() {
                eprintln!("{result}");
                std::process::exit(1);
            }
            if args.pipe_mode {
                println!("{result}");
            }
        },
        Err(errors) => {
            for error in &errors {
                eprintln!("{error}");
            }
            std::process::exit(1);
        },
    }
}
