use brainfuck::{CodeBlock, Instruction};
use errors::Error;

struct Emitter {
    out: String,
    indent: usize,
}

impl Emitter {
    fn new() -> Self {
        Emitter {
            out: String::new(),
            indent: 0,
        }
    }

    fn put(&mut self, s: &str) {
        for _ in 0..self.indent {
            self.out.push_str("    ");
        }
        self.out.push_str(s);
        self.out.push('\n');
    }

    fn blank(&mut self) {
        self.out.push('\n');
    }
}

/// Translates a parsed program into a standalone C source. Cell names
/// resolve to fixed positions, so named moves become absolute cursor
/// assignments.
pub fn compile(block: &CodeBlock) -> Result<String, Error> {
    let mut emitter = Emitter::new();
    emitter.put("#include <stdio.h>");
    emitter.blank();
    emitter.put(&format!(
        "unsigned char tape[{}] = {{0}};",
        brainfuck::TAPE_SIZE
    ));
    emitter.put("unsigned char *ptr = tape;");
    emitter.blank();
    emitter.put("int main(void) {");
    emitter.blank();
    emitter.indent += 1;
    compile_block(block, &mut emitter)?;
    emitter.indent -= 1;
    emitter.blank();
    emitter.put("}");
    Ok(emitter.out)
}

fn compile_block(block: &CodeBlock, emitter: &mut Emitter) -> Result<(), Error> {
    for instruction in &block.0 {
        match instruction {
            Instruction::Forward(1, _) => emitter.put("++ptr;"),
            Instruction::Forward(n, _) => emitter.put(&format!("ptr += {};", n)),
            Instruction::Backward(1, _) => emitter.put("--ptr;"),
            Instruction::Backward(n, _) => emitter.put(&format!("ptr -= {};", n)),
            Instruction::Increment(1) => emitter.put("++*ptr;"),
            Instruction::Increment(n) => emitter.put(&format!("*ptr += {};", n)),
            Instruction::Decrement(1) => emitter.put("--*ptr;"),
            Instruction::Decrement(n) => emitter.put(&format!("*ptr -= {};", n)),
            Instruction::Print(n) => {
                for _ in 0..*n {
                    emitter.put("putchar(*ptr);");
                }
            }
            Instruction::Read => emitter.put("*ptr = getchar();"),
            Instruction::PrintRaw => emitter.put("printf(\"%d\\n\", *ptr);"),
            Instruction::MoveTo(cell, name) => {
                emitter.put(&format!("ptr = tape + {}; /* {} */", cell.0, name.1))
            }
            Instruction::Clear => emitter.put("*ptr = 0;"),
            Instruction::Halt => emitter.put("return 0;"),
            Instruction::DumpStructure(span) => {
                return Err(errors::unsupported_in_compiler("%", span))
            }
            Instruction::Loop(inner) => {
                emitter.put("while (*ptr) {");
                emitter.indent += 1;
                compile_block(inner, emitter)?;
                emitter.indent -= 1;
                emitter.put("}");
            }
        }
    }
    Ok(())
}
