use std::io::{Read, Write};

mod format;
mod instruction;
mod interpreter;
mod optimizer;
mod tape;

pub use format::*;
pub use instruction::*;
pub use interpreter::*;
pub use optimizer::optimize;
pub use tape::*;

pub trait RunContext {
    fn input(&mut self) -> u8;
    fn print(&mut self, i: char);
}

/// Production context: raw bytes from stdin, characters to stdout.
/// End of input reads as 0.
pub struct StdioContext;

impl RunContext for StdioContext {
    fn input(&mut self) -> u8 {
        let mut k = [0];
        match std::io::stdin().read(&mut k) {
            Ok(n) if n > 0 => k[0],
            _ => 0,
        }
    }

    fn print(&mut self, i: char) {
        print!("{}", i);
        std::io::stdout().flush().unwrap();
    }
}
