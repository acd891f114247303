use clap::{Parser, Subcommand};
use std::path::Path;

#[derive(Parser)]
#[command(name = "stylet")]
#[command(about = "Stylet — declarative styling language compiler")]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// Compile a .stylet file to JavaScript
    Build {
        /// Input .stylet file
        path: String,
    },

    /// Check a .stylet file for errors without generating output
    Check {
        /// Input .stylet file
        path: String,
    },
}

fn main() {
    let cli = Cli::parse();

    match cli.command {
        Command::Build { path } => cmd_build(&path),
        Command::Check { path } => cmd_check(&path),
    }
}

fn read_source(path: &str) -> String {
    let p = Path::new(path);
    if !p.exists() {
        eprintln!("Error: file not found: {path}");
        std::process::exit(1);
    }
    match std::fs::read_to_string(p) {
        Ok(source) => source,
        Err(e) => {
            eprintln!("Error reading {path}: {e}");
            std::process::exit(1);
        }
    }
}

fn compile_source(path: &str) -> String {
    let source = read_source(path);

    let program = match stylet_parser::Parser::parse(&source) {
        Ok(program) => program,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    };

    match stylet_codegen::transform(&program) {
        Ok(js) => js,
        Err(e) => {
            eprintln!("{e}");
            std::process::exit(1);
        }
    }
}

fn cmd_build(path: &str) {
    let js = compile_source(path);

    // Write output next to the source
    let stem = Path::new(path)
        .file_stem()
        .and_then(|s| s.to_str())
        .unwrap_or("out");
    let dir = Path::new(path).parent().unwrap_or(Path::new("."));
    let js_path = dir.join(format!("{stem}.js"));

    if let Err(e) = std::fs::write(&js_path, format!("{js}\n")) {
        eprintln!("Error writing {}: {e}", js_path.display());
        std::process::exit(1);
    }

    eprintln!("Built: {}", js_path.display());
}

fn cmd_check(path: &str) {
    compile_source(path);
    eprintln!("OK: {path}");
}
