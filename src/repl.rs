use std::io::{self, BufRead, Write};

use crate::interpreter::{evaluator::block::eval_program, lexer::TokenStream, parser::core::Parser};

/// The prompt shown before every line of input.
pub const PROMPT: &str = ">> ";

/// Runs the read-eval-print loop until the input ends.
///
/// Each line is parsed on its own. When the parser collected diagnostics,
/// all of them are printed (one per line) and the line's program is not
/// evaluated; otherwise the evaluated object's inspection string is printed.
/// Runtime failures are error objects and print like any other result, so
/// the loop survives them.
///
/// # Errors
/// Returns an error only when reading from `input` or writing to `output`
/// fails.
///
/// # Examples
/// ```
/// use sprig::repl;
///
/// let mut input = "5 + 5;\n".as_bytes();
/// let mut output = Vec::new();
///
/// repl::start(&mut input, &mut output).unwrap();
///
/// let printed = String::from_utf8(output).unwrap();
/// assert!(printed.contains("10"));
/// ```
pub fn start(input: &mut dyn BufRead, output: &mut dyn Write) -> io::Result<()> {
    loop {
        write!(output, "{PROMPT}")?;
        output.flush()?;

        let mut line = String::new();
        if input.read_line(&mut line)? == 0 {
            return Ok(());
        }

        let mut parser = Parser::new(TokenStream::new(&line));
        let program = parser.parse_program();

        if !parser.errors().is_empty() {
            writeln!(output, "parser errors:")?;
            for error in parser.errors() {
                writeln!(output, "\t{error}")?;
            }
            continue;
        }

        let evaluated = eval_program(&program);
        writeln!(output, "{evaluated}")?;
    }
}
