use brainfuck::{encode_to_bytes, HeaderData, StdioContext};

use ybrainfuck::{actions, parser};

fn print_usage() {
    println!(
        "Usage
  ybrainfuck <source>.brainf

Options
  --version          #Prints the version information.
  -h,--help          #Shows this help.
  --snapshot <file>  #Writes the final tape state to a binary snapshot."
    );
}

fn print_version() {
    println!("yBrainfuck v.{}", env!("CARGO_PKG_VERSION"));
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();

    let mut source_file: Option<String> = None;
    let mut snapshot_file: Option<String> = None;
    let mut args = args.into_iter();
    while let Some(arg) = args.next() {
        if arg == "-h" || arg == "--help" {
            print_usage();
            return;
        } else if arg == "--version" {
            print_version();
            return;
        } else if arg == "--snapshot" {
            match args.next() {
                Some(file) => snapshot_file = Some(file),
                None => {
                    println!("The option [ --snapshot ] expects a file name.");
                    std::process::exit(1);
                }
            }
        } else if arg.starts_with('-') {
            println!("The option [ {} ] is invalid.", arg);
            std::process::exit(1);
        } else {
            if source_file.is_some() {
                println!("Only one source file can be specified.");
                println!();
                print_usage();
                std::process::exit(1);
            }
            source_file = Some(arg);
        }
    }

    let input_file = match source_file {
        Some(f) => f,
        None => {
            print_usage();
            return;
        }
    };

    let source = match std::fs::read_to_string(&input_file) {
        Ok(s) => s,
        Err(_) => {
            println!("The input file [ {} ] does not exist.", input_file);
            std::process::exit(1);
        }
    };

    let machine = match parser::parse(&source, &input_file)
        .and_then(|program| actions::run(&program, StdioContext))
    {
        Ok((machine, _)) => machine,
        Err(e) => {
            errors::report(e);
            std::process::exit(1);
        }
    };

    if let Some(snapshot_file) = snapshot_file {
        let header = HeaderData {
            info_string: input_file,
            ..HeaderData::default()
        };
        let r = encode_to_bytes(header, machine.tape.cells())
            .and_then(|bytes| std::fs::write(&snapshot_file, bytes));
        if let Err(e) = r {
            println!("Couldn't write the snapshot [ {} ]: {}", snapshot_file, e);
            std::process::exit(1);
        }
    }
}
