use brainfuck::{builtin_names, cell_for, Cell, CodeBlock, Instruction};
use errors::{Error, Span, SpannedObject};

pub struct ParsedProgram {
    pub variables: Vec<String>,
    pub code: CodeBlock,
}

/// Parses a yBrainfuck 2.x source. Declarations are collected first so
/// every identifier resolves to its cell here rather than at run time.
pub fn parse(source: &str, file: &str) -> Result<ParsedProgram, Error> {
    let declarations = collect_declarations(source, file)?;
    let variables: Vec<String> = declarations.iter().map(|d| d.1.clone()).collect();
    let code = parse_code(source, file, &variables)?;
    Ok(ParsedProgram { variables, code })
}

fn is_valid_name(name: &str) -> bool {
    let mut chars = name.chars();
    match chars.next() {
        Some(c) if c.is_ascii_alphabetic() => {
            let mut tail = 0;
            for c in chars {
                if !(c.is_ascii_alphanumeric() || c == '_') {
                    return false;
                }
                tail += 1;
            }
            tail > 0
        }
        _ => false,
    }
}

fn collect_declarations(source: &str, file: &str) -> Result<Vec<SpannedObject<String>>, Error> {
    let mut declarations: Vec<SpannedObject<String>> = Vec::new();
    let mut offset = 0;
    for line in source.split('\n') {
        let content = line.split('#').next().unwrap_or("");
        let trimmed = content.trim_start();
        if let Some(rest) = trimmed.strip_prefix('!') {
            let name = rest.trim();
            let start = offset
                + (content.len() - trimmed.len())
                + 1
                + (rest.len() - rest.trim_start().len());
            let span = Span::new(file.to_owned(), start, start + name.len());
            if !is_valid_name(name) {
                return Err(errors::invalid_variable_name(name, &span));
            }
            if let Some(first) = declarations.iter().find(|d| d.1 == name) {
                return Err(errors::duplicate_variable(name, &span, &first.0));
            }
            declarations.push(SpannedObject(span, name.to_owned()));
        }
        offset += line.len() + 1;
    }
    Ok(declarations)
}

fn parse_code(source: &str, file: &str, variables: &[String]) -> Result<CodeBlock, Error> {
    let all_names: Vec<String> = builtin_names()
        .map(|c| c.to_string())
        .chain(variables.iter().cloned())
        .collect();

    // A first line starting with [ is a comment line.
    let first_line_end = source.find('\n').unwrap_or_else(|| source.len());
    let skip = if source[..first_line_end].trim_start().starts_with('[') {
        first_line_end
    } else {
        0
    };
    let chars: Vec<(usize, char)> = source
        .char_indices()
        .skip_while(|(i, _)| *i < skip)
        .collect();

    // The bottom entry is the program itself, everything above an open [.
    let mut blocks: Vec<(Option<Span>, CodeBlock)> = vec![(None, CodeBlock::new())];
    let mut repeat: u32 = 1;
    let mut repeat_start: Option<usize> = None;
    let mut line_has_code = false;

    let mut i = 0;
    while i < chars.len() {
        let (pos, c) = chars[i];
        let here = Span::new(file.to_owned(), pos, pos + c.len_utf8());
        match c {
            '\n' => line_has_code = false,
            c if c.is_whitespace() => (),
            '{' | '}' => line_has_code = true,
            '#' => {
                while i + 1 < chars.len() && chars[i + 1].1 != '\n' {
                    i += 1;
                }
            }
            '!' => {
                // Declarations were collected up front, but only whole
                // declaration lines are valid.
                if line_has_code {
                    return Err(errors::invalid_command('!', &here));
                }
                while i + 1 < chars.len() && chars[i + 1].1 != '\n' {
                    i += 1;
                }
            }
            '0'..='9' => {
                let start = pos;
                let mut value = Some(c.to_digit(10).unwrap());
                while i + 1 < chars.len() && chars[i + 1].1.is_ascii_digit() {
                    i += 1;
                    value = value
                        .and_then(|v| v.checked_mul(10))
                        .and_then(|v| v.checked_add(chars[i].1.to_digit(10).unwrap()));
                }
                let end = chars[i].0 + chars[i].1.len_utf8();
                repeat = match value {
                    Some(v) => v,
                    None => {
                        let span = Span::new(file.to_owned(), start, end);
                        return Err(errors::oversized_repeat_count(&source[start..end], &span));
                    }
                };
                repeat_start = Some(start);
                line_has_code = true;
                i += 1;
                continue; // the count applies to the next command
            }
            '>' | '<' | '+' | '-' | '.' => {
                line_has_code = true;
                let span = Span::new(
                    file.to_owned(),
                    repeat_start.unwrap_or(pos),
                    pos + c.len_utf8(),
                );
                let instruction = match c {
                    '>' => Instruction::Forward(repeat, span),
                    '<' => Instruction::Backward(repeat, span),
                    '+' => Instruction::Increment(repeat),
                    '-' => Instruction::Decrement(repeat),
                    _ => Instruction::Print(repeat),
                };
                blocks.last_mut().unwrap().1.add_instruction(instruction);
            }
            ',' => {
                line_has_code = true;
                blocks.last_mut().unwrap().1.add_instruction(Instruction::Read);
            }
            '~' => {
                line_has_code = true;
                blocks.last_mut().unwrap().1.add_instruction(Instruction::Halt);
            }
            '?' => {
                line_has_code = true;
                blocks
                    .last_mut()
                    .unwrap()
                    .1
                    .add_instruction(Instruction::PrintRaw);
            }
            '%' => {
                line_has_code = true;
                blocks
                    .last_mut()
                    .unwrap()
                    .1
                    .add_instruction(Instruction::DumpStructure(here));
            }
            '[' => {
                line_has_code = true;
                blocks.push((Some(here), CodeBlock::new()));
            }
            ']' => {
                line_has_code = true;
                if blocks.len() == 1 {
                    return Err(errors::unmatched_bracket(&here));
                }
                let (_, block) = blocks.pop().unwrap();
                blocks
                    .last_mut()
                    .unwrap()
                    .1
                    .add_instruction(Instruction::Loop(block));
            }
            c if c.is_ascii_alphabetic() => {
                line_has_code = true;
                let start = pos;
                let mut name = c.to_string();
                while i + 1 < chars.len()
                    && (chars[i + 1].1.is_ascii_alphanumeric() || chars[i + 1].1 == '_')
                {
                    i += 1;
                    name.push(chars[i].1);
                }
                let end = chars[i].0 + chars[i].1.len_utf8();
                let span = Span::new(file.to_owned(), start, end);
                match cell_for(variables, &name) {
                    Some(cell) => {
                        blocks
                            .last_mut()
                            .unwrap()
                            .1
                            .add_instruction(Instruction::MoveTo(
                                Cell(cell),
                                SpannedObject(span, name),
                            ));
                    }
                    None => {
                        return Err(errors::report_similar(
                            "variable",
                            "variables",
                            &span,
                            &name,
                            &all_names,
                            8,
                        ))
                    }
                }
            }
            c => return Err(errors::invalid_command(c, &here)),
        }
        repeat = 1;
        repeat_start = None;
        i += 1;
    }

    if blocks.len() > 1 {
        let open = blocks.last().unwrap().0.clone().unwrap();
        return Err(errors::unclosed_bracket(&open));
    }
    Ok(blocks.pop().unwrap().1)
}
