use std::fs;
use std::path::PathBuf;
use std::process::exit;

use clap::Parser;
use quoth_core::errors::*;
use quoth_core::io::{format_stack, Printer, SourceLoader};
use quoth_core::Interpreter;
use quoth_std::stdlib;
use rustyline::Editor;

#[derive(Parser)]
#[command(name = "quoth")]
#[command(version)]
#[command(about = "Interpreter for a small concatenative language")]
struct Args {
    /// Source file to execute
    file: Option<PathBuf>,

    /// Read lines interactively after the file (if any) has run
    #[arg(short, long)]
    interactive: bool,
}

struct StdoutPrinter;

impl Printer for StdoutPrinter {
    fn print(&mut self, text: &str) -> Result<()> {
        println!("{}", text);
        Ok(())
    }
}

struct FileLoader;

impl SourceLoader for FileLoader {
    fn load(&self, name: &str) -> Result<String> {
        Ok(fs::read_to_string(name)?)
    }
}

fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let args = Args::parse();

    if args.file.is_none() && !args.interactive {
        println!("Usage: quoth <source file>.qth");
        return;
    }

    let interp = &mut Interpreter::new(Box::new(StdoutPrinter));
    if let Err(e) = stdlib(interp) {
        report_error(e);
        exit(1);
    }

    if let Some(path) = &args.file {
        if let Err(e) = interp.run_file(&FileLoader, &path.to_string_lossy()) {
            report_error(e);
            exit(1);
        }
    }

    if args.interactive {
        repl(interp);
    }
}

fn repl(interp: &mut Interpreter) {
    interp.add_native_word("words", "( -- )", |interp| {
        let mut listing: Vec<String> = interp
            .dictionary()
            .iter()
            .map(|word| format!("{:>20}   {}", word.name(), word.effect()))
            .collect();
        listing.sort();
        for line in listing {
            interp.print(&line)?;
        }
        Ok(())
    });

    let mut rl = Editor::<()>::new();

    loop {
        println!();
        println!("{}", format_stack(&interp.stack, 70));

        match rl.readline(">> ") {
            Ok(line) => {
                rl.add_history_entry(line.as_str());
                match interp.run(&line) {
                    Ok(()) => {}
                    Err(e) => report_error(e),
                }
            }
            _ => {
                println!("Input Error");
                break;
            }
        }
    }
}

fn report_error(e: Error) {
    eprintln!("{}", e)
}
