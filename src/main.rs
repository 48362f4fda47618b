use std::{
    env, fs,
    io::{self, Write},
    path::PathBuf,
    process::ExitCode,
    time::Instant,
};

use kindpp::{
    display_error,
    errors::errors::DriverError,
    init_tracing,
    lexer::lexer::scan,
    print_tokens, read_prompt_source,
};

/// Exit status when the scanned file contained lexical errors.
const EXIT_LEXICAL_ERRORS: u8 = 65;

fn main() -> ExitCode {
    init_tracing();

    let args: Vec<String> = env::args().skip(1).collect();

    let result = match args.as_slice() {
        [] => run_prompt(),
        [file_path] => run_file(PathBuf::from(file_path)),
        _ => Err(DriverError::Usage),
    };

    match result {
        Ok(code) => code,
        Err(error) => {
            eprintln!("{}", error);
            ExitCode::from(error.exit_code())
        }
    }
}

fn run_file(path: PathBuf) -> Result<ExitCode, DriverError> {
    let bytes = fs::read(&path).map_err(|source| DriverError::Io {
        path: path.clone(),
        source,
    })?;
    let source = String::from_utf8_lossy(&bytes);
    let file_name = path.as_os_str().to_string_lossy();

    let start = Instant::now();
    let had_error = run(&source, &file_name).map_err(DriverError::Output)?;
    tracing::debug!(elapsed = ?start.elapsed(), "tokenized {}", file_name);

    if had_error {
        Ok(ExitCode::from(EXIT_LEXICAL_ERRORS))
    } else {
        Ok(ExitCode::SUCCESS)
    }
}

fn run_prompt() -> Result<ExitCode, DriverError> {
    println!("-- Write your Kind++ source code -- finish with a '#' on a line of its own");

    let source = read_prompt_source(io::stdin().lock()).map_err(DriverError::Stdin)?;

    let Some(source) = source else {
        println!("No source code to analyze");
        return Ok(ExitCode::SUCCESS);
    };

    println!("=========================================");
    println!("             Token             | Lexeme");
    println!("=========================================");

    run(&source, "shell").map_err(DriverError::Output)?;

    // Interactive sessions report errors but always exit cleanly.
    Ok(ExitCode::SUCCESS)
}

/// Scans `source`, prints the token table and reports error tokens.
///
/// Returns whether any error token was produced.
fn run(source: &str, file_name: &str) -> io::Result<bool> {
    let tokens = scan(source);

    let stdout = io::stdout();
    let mut out = stdout.lock();
    print_tokens(&mut out, &tokens)?;
    out.flush()?;

    let stderr = io::stderr();
    let mut err = stderr.lock();
    let mut had_error = false;
    for token in tokens.iter().filter(|token| token.is_error()) {
        display_error(&mut err, token, source, file_name)?;
        had_error = true;
    }

    Ok(had_error)
}
