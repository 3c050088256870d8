use std::io::{self, Write};

use clap::Parser;

const FILEPATH_PROMPT: &str = "Введите имя файла для таблицы с курсами -->";

#[derive(Debug, Parser, Clone)]
#[command(
    name = "coursetab",
    version,
    about = "Samples random Coursera course pages and exports their metadata to an XLSX table"
)]
pub struct Cli {
    /// Path of the report file to write; prompted for when omitted
    #[arg(short = 'f', long = "filepath", value_name = "FILE")]
    pub filepath: Option<String>,
}

/// Returns the path given on the command line, or prompts for one on stdin.
pub fn resolve_output_path(cli: &Cli) -> io::Result<String> {
    if let Some(path) = &cli.filepath {
        return Ok(path.clone());
    }

    print!("{FILEPATH_PROMPT}");
    io::stdout().flush()?;
    let mut line = String::new();
    io::stdin().read_line(&mut line)?;
    Ok(line.trim().to_string())
}
