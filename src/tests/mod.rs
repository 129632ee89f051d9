use std::time::Instant;

use brainfuck::{optimize, Machine};
use either::Either;

use crate::{
    actions::{run, TestContext},
    compiler, fizzbuzz,
    parser::{parse, ParsedProgram},
};

fn parse_ok(source: &str, file: &str) -> ParsedProgram {
    match parse(source, file) {
        Ok(program) => program,
        Err(e) => {
            errors::report(e);
            panic!("Parsing failed for {}", file);
        }
    }
}

fn run_ok(program: &ParsedProgram, ctx: TestContext) -> (Machine, TestContext) {
    match run(program, ctx) {
        Ok(k) => k,
        Err(e) => {
            errors::report(e);
            panic!("Execution failed");
        }
    }
}

fn output_of(source: &str, inputs: &str) -> String {
    let program = parse_ok(source, "<test>");
    run_ok(&program, TestContext::new(inputs)).1.print
}

#[test]
fn counter_printer_sequence() {
    let mut ctx = TestContext::new("");
    fizzbuzz::write_into(&mut ctx);
    assert!(ctx.print.ends_with('\n'));
    let lines: Vec<&str> = ctx.print.lines().collect();
    assert_eq!(lines.len(), 99);
    for (i, line) in lines.iter().enumerate() {
        let n = (i + 1) as u32;
        match (n % 3, n % 5) {
            (0, 0) => assert_eq!(*line, "FizzBuzz"),
            (0, _) => assert_eq!(*line, "Fizz"),
            (_, 0) => assert_eq!(*line, "Buzz"),
            _ => assert_eq!(*line, n.to_string()),
        }
    }
}

#[test]
fn counter_printer_scenarios() {
    let expected = [
        (1, "1"),
        (3, "Fizz"),
        (5, "Buzz"),
        (9, "Fizz"),
        (10, "Buzz"),
        (15, "FizzBuzz"),
        (33, "Fizz"),
        (99, "Fizz"),
    ];
    for &(n, line) in expected.iter() {
        match fizzbuzz::classify(n) {
            Either::Left(token) => assert_eq!(token, line),
            Either::Right(v) => assert_eq!(v.to_string(), line),
        }
    }
}

#[test]
fn counter_printer_is_idempotent() {
    let mut first = TestContext::new("");
    fizzbuzz::write_into(&mut first);
    let mut second = TestContext::new("");
    fizzbuzz::write_into(&mut second);
    assert_eq!(first.print, second.print);
}

#[test]
fn fizzbuzz_demo_matches_native() {
    let file = "demos/fizzbuzz.brainf";
    let source = std::fs::read_to_string(file).unwrap();
    let program = parse_ok(&source, file);
    let (machine, ctx) = time("run_unoptimized", || run_ok(&program, TestContext::new("")));

    let mut native = TestContext::new("");
    fizzbuzz::write_into(&mut native);
    assert_eq!(ctx.print, native.print);

    let optimized = ParsedProgram {
        variables: program.variables.clone(),
        code: optimize(&program.code),
    };
    let (opt_machine, opt_ctx) = time("run_optimized", || {
        run_ok(&optimized, TestContext::new(""))
    });
    assert_eq!(opt_ctx.print, native.print);
    assert!(optimized.code.instr_count() < program.code.instr_count());

    println!(
        "opt: {}i {}ops | uopt: {}i {}ops",
        optimized.code.instr_count(),
        get_format(opt_machine.instr_count),
        program.code.instr_count(),
        get_format(machine.instr_count)
    );
}

#[test]
fn echo() {
    assert_eq!(output_of(",.,.", "hi"), "hi");
    assert_eq!(output_of(", 3. ,.", "ab"), "aaab");
}

#[test]
fn repeat_counts() {
    assert_eq!(output_of("65+ . 3+ .", ""), "AD");
    assert_eq!(output_of("99+ ?", ""), "99\n");
    // A blank between the count and the command drops the count.
    assert_eq!(output_of("3 + ?", ""), "1\n");
}

#[test]
fn oversized_repeat_counts() {
    // One past u32::MAX, and far past it.
    assert!(parse("4294967296+", "<test>").is_err());
    assert!(parse("99999999999999999999+", "<test>").is_err());
    // u32::MAX itself is still a valid count.
    assert_eq!(output_of("4294967295+ ?", ""), "255\n");
}

#[test]
fn named_cells() {
    assert_eq!(output_of("!cnt\ncnt 66+ .", ""), "B");
    assert_eq!(output_of("c 2+ a 5+ c ?", ""), "2\n");
}

#[test]
fn halt_unwinds_loops() {
    assert_eq!(output_of("65+ . ~ .", ""), "A");
    assert_eq!(output_of("1+ [ ~ ]", ""), "");
}

#[test]
fn memory_dump() {
    let out = output_of("5+ %", "");
    assert!(out.contains("Position: 0 (a)"));
    assert!(out.contains("'a': 5, "));
}

#[test]
fn first_comment_line_is_ignored() {
    assert_eq!(output_of("[anything goes here\n66+ .", ""), "B");
}

#[test]
fn parse_errors() {
    assert!(parse("nmu +", "<test>").is_err()); // undefined variable
    assert!(parse("!num\n!num\n", "<test>").is_err()); // duplicate
    assert!(parse("!x\n", "<test>").is_err()); // single letters are built in
    assert!(parse("!9bad\n", "<test>").is_err());
    assert!(parse("+ [", "<test>").is_err()); // a leading [ would be the comment line
    assert!(parse("]", "<test>").is_err());
    assert!(parse("@", "<test>").is_err());
}

#[test]
fn runtime_errors() {
    let program = parse_ok("<", "<test>");
    assert!(run(&program, TestContext::new("")).is_err());
    let program = parse_ok("30000>", "<test>");
    assert!(run(&program, TestContext::new("")).is_err());
}

#[test]
fn compile_to_c() {
    let program = parse_ok("!cnt\ncnt 2+ [ - ] .", "<test>");
    let c = match compiler::compile(&optimize(&program.code)) {
        Ok(c) => c,
        Err(e) => {
            errors::report(e);
            panic!("Compilation failed");
        }
    };
    assert!(c.contains("unsigned char tape[30000] = {0};"));
    assert!(c.contains("ptr = tape + 52; /* cnt */"));
    assert!(c.contains("*ptr += 2;"));
    assert!(c.contains("*ptr = 0;"));
    assert!(c.contains("putchar(*ptr);"));

    let program = parse_ok("%", "<test>");
    assert!(compiler::compile(&program.code).is_err());
}

fn time<T>(legend: &str, f: impl FnOnce() -> T) -> T {
    let instant = Instant::now();
    let t = f();
    println!("{} done in {:?}", legend, instant.elapsed());
    t
}

fn get_format(n: usize) -> String {
    if n > 1_000_000 {
        format!("{}M", (n / 100_000) as f64 / 10.0)
    } else if n > 1_000 {
        format!("{}K", (n / 100) as f64 / 10.0)
    } else {
        n.to_string()
    }
}
