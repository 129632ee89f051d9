use brainfuck::optimize;

use ybrainfuck::{compiler, parser};

fn print_usage() -> ! {
    println!("Usage: bf2c <input Brainfuck source> <output C source>");
    std::process::exit(0);
}

fn main() {
    let args: Vec<String> = std::env::args().skip(1).collect();
    if args.len() != 2 {
        print_usage();
    }

    let bf_source = &args[0];
    let c_source = &args[1];
    if !bf_source.ends_with(".brainf") || !c_source.ends_with(".c") || bf_source.starts_with('-') {
        print_usage();
    }

    let source = match std::fs::read_to_string(bf_source) {
        Ok(s) => s,
        Err(_) => {
            println!("The input file [ {} ] does not exist.", bf_source);
            std::process::exit(1);
        }
    };

    let compiled = match parser::parse(&source, bf_source)
        .and_then(|program| compiler::compile(&optimize(&program.code)))
    {
        Ok(c) => c,
        Err(e) => {
            errors::report(e);
            std::process::exit(1);
        }
    };

    if let Err(e) = std::fs::write(c_source, compiled) {
        println!("Couldn't write [ {} ]: {}", c_source, e);
        std::process::exit(1);
    }

    println!("Conversion succeeded.");
    println!("[ {} ] -> [ {} ]", bf_source, c_source);
}
