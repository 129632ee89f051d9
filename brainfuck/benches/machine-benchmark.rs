use brainfuck::{CodeBlock, Instruction, Machine, RunContext, Tape};
use criterion::{criterion_group, criterion_main, Criterion};
use errors::Span;

struct SinkContext;

impl RunContext for SinkContext {
    fn input(&mut self) -> u8 {
        0
    }

    fn print(&mut self, _: char) {}
}

/// 255 outer iterations each burning a 255-step inner countdown.
fn countdown_block() -> CodeBlock {
    CodeBlock(vec![
        Instruction::Increment(255),
        Instruction::Loop(CodeBlock(vec![
            Instruction::Forward(1, Span::default()),
            Instruction::Increment(255),
            Instruction::Loop(CodeBlock(vec![Instruction::Decrement(1)])),
            Instruction::Backward(1, Span::default()),
            Instruction::Decrement(1),
        ])),
    ])
}

fn criterion_benchmark(c: &mut Criterion) {
    let block = countdown_block();
    c.bench_function("countdown", |b| {
        b.iter(|| {
            let mut machine = Machine::new(Tape::new(&[]));
            machine
                .execute_block(&block, &mut SinkContext)
                .map(|_| machine.instr_count)
                .unwrap_or(0)
        })
    });
}

criterion_group!(benches, criterion_benchmark);
criterion_main!(benches);
