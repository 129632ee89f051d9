use brainfuck::{Machine, RunContext, Tape};
use errors::Error;

use crate::parser::ParsedProgram;

mod test_context;

pub use test_context::TestContext;

pub fn run<T: RunContext>(program: &ParsedProgram, mut ctx: T) -> Result<(Machine, T), Error> {
    let mut machine = Machine::new(Tape::new(&program.variables));
    machine.execute_block(&program.code, &mut ctx)?;
    Ok((machine, ctx))
}
