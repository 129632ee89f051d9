use std::fmt::Display;

use errors::{Span, SpannedObject};

/// A cell index on the tape.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Cell(pub usize);

#[derive(Debug, Clone, PartialEq)]
pub enum Instruction {
    Forward(u32, Span),  // moves the head, errors past the last cell
    Backward(u32, Span), // moves the head, errors below cell 0
    Increment(u32),      // current cell, wrapping mod 256
    Decrement(u32),      // current cell, wrapping mod 256
    Print(u32),          // current cell as a character, repeated
    Read,                // one input byte into the current cell
    PrintRaw,            // current cell as a decimal number plus newline
    DumpStructure(Span), // memory structure dump, interpreter only
    MoveTo(Cell, SpannedObject<String>),
    Loop(CodeBlock),
    Clear, // the [-] reset idiom
    Halt,
}

impl Display for Instruction {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        fn counted(f: &mut std::fmt::Formatter<'_>, n: u32, c: char) -> std::fmt::Result {
            if n == 1 {
                write!(f, "{}", c)
            } else {
                write!(f, "{}{}", n, c)
            }
        }
        match self {
            Self::Forward(n, _) => counted(f, *n, '>'),
            Self::Backward(n, _) => counted(f, *n, '<'),
            Self::Increment(n) => counted(f, *n, '+'),
            Self::Decrement(n) => counted(f, *n, '-'),
            Self::Print(n) => counted(f, *n, '.'),
            Self::Read => write!(f, ","),
            Self::PrintRaw => write!(f, "?"),
            Self::DumpStructure(_) => write!(f, "%"),
            Self::MoveTo(_, name) => write!(f, "{}", name.1),
            Self::Loop(a) => write!(f, "[ {} ]", a),
            Self::Clear => write!(f, "[-]"),
            Self::Halt => write!(f, "~"),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub struct CodeBlock(pub Vec<Instruction>);

impl Default for CodeBlock {
    fn default() -> Self {
        Self(Vec::new())
    }
}

impl From<Vec<Instruction>> for CodeBlock {
    fn from(v: Vec<Instruction>) -> Self {
        Self(v)
    }
}

impl Display for CodeBlock {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{}",
            self.0
                .iter()
                .map(|x| x.to_string())
                .collect::<Vec<_>>()
                .join(" ")
        )
    }
}

impl CodeBlock {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn add_instruction(&mut self, instruction: Instruction) -> &mut Self {
        self.0.push(instruction);
        self
    }

    pub fn instr_count(&self) -> usize {
        self.0
            .iter()
            .map(|x| match x {
                Instruction::Loop(a) => 1 + a.instr_count(),
                _ => 1,
            })
            .sum()
    }
}
