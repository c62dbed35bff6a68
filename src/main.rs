use clap::Parser;

use examform::cli::Cli;
use examform::{key, Compiler};

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<(), String> {
    let cli = Cli::parse();

    let source = std::fs::read_to_string(&cli.input)
        .map_err(|e| format!("Cannot read exam file {}: {}", cli.input, e))?;

    let compiler = Compiler::new();

    let html = if let Some(ref key_path) = cli.key {
        // Authoring mode: student-facing HTML plus the answer key.
        let (html, answers) = compiler.render_and_extract(&source);
        let answer_key = key::build_answer_key(&source, answers);
        let json = serde_json::to_string_pretty(&answer_key)
            .map_err(|e| format!("Cannot serialize answer key: {}", e))?;
        std::fs::write(key_path, json)
            .map_err(|e| format!("Cannot write answer key {}: {}", key_path, e))?;
        eprintln!("Answer key written to {}", key_path);
        html
    } else {
        compiler.render_for_display(&source, cli.reveal)
    };

    match cli.out {
        Some(ref out_path) => {
            std::fs::write(out_path, html)
                .map_err(|e| format!("Cannot write output {}: {}", out_path, e))?;
            eprintln!("HTML written to {}", out_path);
        }
        None => print!("{}", html),
    }

    Ok(())
}
