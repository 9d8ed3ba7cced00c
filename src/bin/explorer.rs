//! Interactive driver for the dictionary backends.
//!
//! Usage: dict_explorer <array|list|trie> [data-file] [--sample N]
//!
//! Loads an optional `word frequency` data file into the chosen backend,
//! then accepts commands:
//!   S <word>          search
//!   A <word> <freq>   add
//!   D <word>          delete
//!   AC [prefix]       autocomplete (empty prefix lists the top 3 overall)
//!   exit

use std::io::{stdin, stdout, Write};
use std::path::Path;
use std::process::ExitCode;

use crossterm::style::Stylize;

use dict_core::data::{read_word_frequencies, sample_word_frequencies};
use dict_core::{Dictionary, DictionaryKind, WordFrequency};

fn main() -> ExitCode {
    let args: Vec<String> = std::env::args().skip(1).collect();
    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(message) => {
            eprintln!("{} {}", "error:".red().bold(), message);
            ExitCode::FAILURE
        }
    }
}

fn run(args: &[String]) -> Result<(), String> {
    let kind: DictionaryKind = args
        .first()
        .ok_or("usage: dict_explorer <array|list|trie> [data-file] [--sample N]")?
        .parse()
        .map_err(|e| format!("{e}"))?;

    let mut data_file = None;
    let mut sample_size = None;
    let mut rest = args[1..].iter();
    while let Some(arg) = rest.next() {
        if arg == "--sample" {
            let n = rest.next().ok_or("--sample requires a number")?;
            sample_size = Some(n.parse::<usize>().map_err(|e| format!("--sample: {e}"))?);
        } else {
            data_file = Some(arg.clone());
        }
    }

    let mut dict = kind.create();
    if let Some(path) = data_file {
        let mut entries =
            read_word_frequencies(Path::new(&path)).map_err(|e| format!("{path}: {e}"))?;
        if let Some(size) = sample_size {
            entries = sample_word_frequencies(&entries, size, &mut rand::thread_rng())
                .map_err(|e| format!("{path}: {e}"))?;
        }
        println!("Loaded {} entries into the {} backend.", entries.len(), kind);
        dict.build_dictionary(entries);
    } else {
        println!("Starting with an empty {} backend.", kind);
    }

    repl(dict.as_mut()).map_err(|e| format!("IO error: {e}"))
}

fn repl(dict: &mut dyn Dictionary) -> std::io::Result<()> {
    let mut input = String::new();
    loop {
        print!("{} ", ">".cyan().bold());
        stdout().flush()?;

        input.clear();
        if stdin().read_line(&mut input)? == 0 {
            return Ok(()); // EOF
        }
        let mut fields = input.split_whitespace();
        let command = fields.next().unwrap_or("");

        match (command, fields.next(), fields.next()) {
            ("exit" | "quit", _, _) => return Ok(()),
            ("S" | "s", Some(word), None) => {
                let frequency = dict.search(word);
                if frequency > 0 {
                    println!("  {} {}", word.green(), frequency);
                } else {
                    println!("  {}", "not found".dark_grey());
                }
            }
            ("A" | "a", Some(word), Some(value)) => match value.parse() {
                Ok(frequency) => {
                    if dict.add_word_frequency(WordFrequency::new(word, frequency)) {
                        println!("  {} {}", "added".green(), word);
                    } else {
                        println!("  {} {}", "already present:".yellow(), word);
                    }
                }
                Err(e) => println!("  {} {value}: {e}", "bad frequency".red()),
            },
            ("D" | "d", Some(word), None) => {
                if dict.delete_word(word) {
                    println!("  {} {}", "deleted".green(), word);
                } else {
                    println!("  {}", "not found".dark_grey());
                }
            }
            ("AC" | "ac", prefix, None) => {
                let completions = dict.autocomplete(prefix.unwrap_or(""));
                if completions.is_empty() {
                    println!("  {}", "no completions".dark_grey());
                }
                for entry in completions {
                    println!("  {} {}", entry.word.clone().green(), entry.frequency);
                }
            }
            ("", _, _) => {}
            _ => println!(
                "  commands: {} | {} | {} | {} | exit",
                "S <word>".bold(),
                "A <word> <freq>".bold(),
                "D <word>".bold(),
                "AC [prefix]".bold()
            ),
        }
    }
}
