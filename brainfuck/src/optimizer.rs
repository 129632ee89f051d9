use crate::{CodeBlock, Instruction};

/// Run-length folds repeated commands and rewrites the `[-]` reset idiom
/// into `Clear`, recursing into loops. Execution is unchanged.
pub fn optimize(block: &CodeBlock) -> CodeBlock {
    let mut out: Vec<Instruction> = Vec::new();
    for instruction in &block.0 {
        let instruction = match instruction {
            Instruction::Loop(inner) => {
                let inner = optimize(inner);
                if let [Instruction::Decrement(1)] = inner.0.as_slice() {
                    Instruction::Clear
                } else {
                    Instruction::Loop(inner)
                }
            }
            e => e.clone(),
        };
        match (out.last_mut(), instruction) {
            (Some(Instruction::Forward(a, sa)), Instruction::Forward(b, sb)) => {
                *a = a.saturating_add(b);
                let merged = sa.merge(&sb);
                *sa = merged;
            }
            (Some(Instruction::Backward(a, sa)), Instruction::Backward(b, sb)) => {
                *a = a.saturating_add(b);
                let merged = sa.merge(&sb);
                *sa = merged;
            }
            (Some(Instruction::Increment(a)), Instruction::Increment(b)) => *a = a.saturating_add(b),
            (Some(Instruction::Decrement(a)), Instruction::Decrement(b)) => *a = a.saturating_add(b),
            (Some(Instruction::Print(a)), Instruction::Print(b)) => *a = a.saturating_add(b),
            (_, instruction) => out.push(instruction),
        }
    }
    CodeBlock(out)
}

#[cfg(test)]
mod tests {
    use errors::Span;

    use super::*;

    #[test]
    fn folds_runs_and_resets() {
        let block = CodeBlock(vec![
            Instruction::Increment(1),
            Instruction::Increment(1),
            Instruction::Increment(40),
            Instruction::Loop(CodeBlock(vec![Instruction::Decrement(1)])),
            Instruction::Forward(1, Span::default()),
            Instruction::Forward(2, Span::default()),
        ]);
        let optimized = optimize(&block);
        assert_eq!(
            optimized.0,
            vec![
                Instruction::Increment(42),
                Instruction::Clear,
                Instruction::Forward(3, Span::default()),
            ]
        );
    }

    #[test]
    fn folded_counts_saturate() {
        let block = CodeBlock(vec![
            Instruction::Increment(u32::MAX),
            Instruction::Increment(2),
        ]);
        let optimized = optimize(&block);
        assert_eq!(optimized.0, vec![Instruction::Increment(u32::MAX)]);
    }

    #[test]
    fn keeps_real_loops() {
        let block = CodeBlock(vec![Instruction::Loop(CodeBlock(vec![
            Instruction::Decrement(1),
            Instruction::Forward(1, Span::default()),
            Instruction::Backward(1, Span::default()),
        ]))]);
        let optimized = optimize(&block);
        assert_eq!(optimized, block);
    }
}
