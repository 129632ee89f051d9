use errors::Error;

use crate::{CodeBlock, Instruction, RunContext, Tape};

/// How a block finished: `Halted` unwinds out of every enclosing loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ExecStatus {
    None,
    Halted,
}

pub struct Machine {
    pub tape: Tape,
    pub instr_count: usize,
}

impl Machine {
    pub fn new(tape: Tape) -> Self {
        Machine {
            tape,
            instr_count: 0,
        }
    }

    pub fn execute_block(
        &mut self,
        block: &CodeBlock,
        ctx: &mut impl RunContext,
    ) -> Result<ExecStatus, Error> {
        for instruction in block.0.iter() {
            match self.execute(instruction, ctx)? {
                ExecStatus::None => continue,
                e => return Ok(e),
            }
        }
        Ok(ExecStatus::None)
    }

    pub fn execute(
        &mut self,
        instruction: &Instruction,
        ctx: &mut impl RunContext,
    ) -> Result<ExecStatus, Error> {
        self.instr_count += 1;
        match instruction {
            Instruction::Forward(n, span) => self.tape.forward(*n, span)?,
            Instruction::Backward(n, span) => self.tape.backward(*n, span)?,
            Instruction::Increment(n) => self.tape.increment(*n),
            Instruction::Decrement(n) => self.tape.decrement(*n),
            Instruction::Print(n) => {
                let c = self.tape.value() as char;
                for _ in 0..*n {
                    ctx.print(c);
                }
            }
            Instruction::Read => {
                let byte = ctx.input();
                self.tape.set_value(byte);
            }
            Instruction::PrintRaw => {
                for c in format!("{}\n", self.tape.value()).chars() {
                    ctx.print(c);
                }
            }
            Instruction::DumpStructure(_) => {
                for c in self.tape.structure_dump().chars() {
                    ctx.print(c);
                }
            }
            Instruction::MoveTo(cell, _) => self.tape.move_to(cell.0),
            Instruction::Clear => self.tape.set_value(0),
            Instruction::Halt => return Ok(ExecStatus::Halted),
            Instruction::Loop(block) => {
                while self.tape.value() != 0 {
                    match self.execute_block(block, ctx)? {
                        ExecStatus::None => (),
                        e => return Ok(e),
                    }
                }
            }
        }
        Ok(ExecStatus::None)
    }
}
