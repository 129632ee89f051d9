use brainfuck::{RunContext, StdioContext};
use either::Either;

/// The token to print for `n`, or `n` itself when no divisor matches.
pub fn classify(n: u32) -> Either<&'static str, u32> {
    match (n % 3 == 0, n % 5 == 0) {
        (true, true) => Either::Left("FizzBuzz"),
        (true, false) => Either::Left("Fizz"),
        (false, true) => Either::Left("Buzz"),
        (false, false) => Either::Right(n),
    }
}

pub fn write_into(ctx: &mut impl RunContext) {
    for n in 1..=99 {
        let line = match classify(n) {
            Either::Left(token) => token.to_owned(),
            Either::Right(n) => n.to_string(),
        };
        for c in line.chars() {
            ctx.print(c);
        }
        ctx.print('\n');
    }
}

/// Prints the sequence for 1..99 to standard output, one line per number.
pub fn run() {
    write_into(&mut StdioContext);
}
