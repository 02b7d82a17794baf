use clap::Parser;
use colored::*;
use std::fs::File;
use std::io::{self, BufRead, BufReader};

use biblio::commands::{CmdMessage, MessageLevel};
use biblio::error::Result;
use biblio::interpreter::Interpreter;

mod args;
use args::Cli;

fn main() {
    if let Err(e) = run() {
        eprintln!("Error: {}", e);
        std::process::exit(1);
    }
}

fn run() -> Result<()> {
    let cli = Cli::parse();
    let mut interpreter = Interpreter::new();

    let reader: Box<dyn BufRead> = match &cli.script {
        Some(path) => Box::new(BufReader::new(File::open(path)?)),
        None => Box::new(BufReader::new(io::stdin())),
    };

    // Each line's replies are printed in full before the next line is read.
    for line in reader.lines() {
        let line = line?;
        let result = interpreter.process_line(&line);
        print_messages(&result.messages);
    }

    Ok(())
}

fn print_messages(messages: &[CmdMessage]) {
    for message in messages {
        match message.level {
            MessageLevel::Info => println!("{}", message.content),
            MessageLevel::Success => println!("{}", message.content.green()),
            MessageLevel::Warning => println!("{}", message.content.yellow()),
            MessageLevel::Error => println!("{}", message.content.red()),
        }
    }
}
