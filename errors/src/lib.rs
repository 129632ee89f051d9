use std::{cmp::Ordering, ops::Range};

use ariadne::{Color, ColorGenerator, Fmt, Label, Report, ReportBuilder, ReportKind};

pub type Error = ReportBuilder<(String, Range<usize>)>;

mod reporting;
mod wrappers;

pub use wrappers::*;

pub use reporting::report;

#[derive(Debug, Clone, Eq)]
pub struct Span {
    pub file: String,
    pub start: usize,
    pub end: usize,
}

impl Default for Span {
    fn default() -> Self {
        Span {
            file: "<native>".to_owned(),
            start: 0,
            end: 0,
        }
    }
}

impl PartialOrd for Span {
    fn partial_cmp(&self, _: &Self) -> Option<std::cmp::Ordering> {
        Some(Ordering::Equal)
    }
}

impl PartialEq for Span {
    fn eq(&self, _: &Self) -> bool {
        true
    }
}

impl Span {
    pub fn as_range(&self) -> Range<usize> {
        Range {
            start: self.start,
            end: self.end,
        }
    }

    pub fn as_span(&self) -> (String, Range<usize>) {
        (self.file.to_owned(), self.as_range())
    }
    pub fn new(file: String, start: usize, end: usize) -> Self {
        Self { file, start, end }
    }

    pub fn merge(&self, other: &Span) -> Self {
        let start = self.start.min(other.start);
        let end = self.end.max(other.end);
        Self::new(self.file.clone(), start, end)
    }
}

pub fn invalid_command(command: char, span: &Span) -> Error {
    let mut colors = ColorGenerator::new();
    let a = colors.next();
    let out = Color::Fixed(81);
    Report::build(ReportKind::Error, span.file.to_owned(), span.start)
        .with_code(1)
        .with_message("Invalid command")
        .with_label(
            Label::new(span.as_span())
                .with_message(format!(
                    "The command {} isn't part of the dialect",
                    command.to_string().fg(a)
                ))
                .with_color(a),
        )
        .with_note(format!(
            "Expected one of {} a repeat count or a cell name",
            "> < + - . , [ ] ~ ? %".fg(out)
        ))
}

pub fn invalid_variable_name(name: &str, span: &Span) -> Error {
    let mut colors = ColorGenerator::new();
    let a = colors.next();
    Report::build(ReportKind::Error, span.file.to_owned(), span.start)
        .with_code(2)
        .with_message("Invalid variable name")
        .with_label(
            Label::new(span.as_span())
                .with_message(format!("{} isn't a valid name", name.fg(Color::Blue)))
                .with_color(a),
        )
        .with_note(
            "A name starts with a letter, continues with letters, digits or _ \
             and is at least two characters long",
        )
}

pub fn duplicate_variable(name: &str, span: &Span, first: &Span) -> Error {
    let mut colors = ColorGenerator::new();
    let a = colors.next();
    let b = colors.next();
    Report::build(ReportKind::Error, span.file.to_owned(), span.start)
        .with_code(3)
        .with_message("Duplicate variable")
        .with_label(
            Label::new(span.as_span())
                .with_message(format!("{} is declared again here", name.fg(Color::Blue)))
                .with_color(a),
        )
        .with_label(
            Label::new(first.as_span())
                .with_message("First declared here")
                .with_color(b),
        )
}

pub fn unclosed_bracket(span: &Span) -> Error {
    let mut colors = ColorGenerator::new();
    let a = colors.next();
    Report::build(ReportKind::Error, span.file.to_owned(), span.start)
        .with_code(4)
        .with_message("Unclosed bracket")
        .with_label(
            Label::new(span.as_span())
                .with_message(format!("This {} is never closed", "[".fg(a)))
                .with_color(a),
        )
}

pub fn unmatched_bracket(span: &Span) -> Error {
    let mut colors = ColorGenerator::new();
    let a = colors.next();
    Report::build(ReportKind::Error, span.file.to_owned(), span.start)
        .with_code(5)
        .with_message("Unmatched bracket")
        .with_label(
            Label::new(span.as_span())
                .with_message(format!("This {} has no opening bracket", "]".fg(a)))
                .with_color(a),
        )
}

pub fn tape_overrun(span: &Span, position: i64, last: usize) -> Error {
    let mut colors = ColorGenerator::new();
    let a = colors.next();
    let er = Report::build(ReportKind::Error, span.file.to_owned(), span.start)
        .with_code(6)
        .with_message("Tape overrun")
        .with_label(
            Label::new(span.as_span())
                .with_message(format!(
                    "This command moves the head to position {}",
                    position.to_string().fg(a)
                ))
                .with_color(a),
        );
    if position < 0 {
        er.with_note("The head can't move below the first cell")
    } else {
        er.with_note(format!(
            "The last cell of the tape is {}",
            last.to_string().fg(Color::Blue)
        ))
    }
}

pub fn oversized_repeat_count(count: &str, span: &Span) -> Error {
    let mut colors = ColorGenerator::new();
    let a = colors.next();
    Report::build(ReportKind::Error, span.file.to_owned(), span.start)
        .with_code(9)
        .with_message("Repeat count too large")
        .with_label(
            Label::new(span.as_span())
                .with_message(format!("The count {} doesn't fit in 32 bits", count.fg(a)))
                .with_color(a),
        )
        .with_note(format!(
            "The largest supported repeat count is {}",
            u32::MAX.to_string().fg(Color::Blue)
        ))
}

pub fn unsupported_in_compiler(what: &str, span: &Span) -> Error {
    let mut colors = ColorGenerator::new();
    let a = colors.next();
    Report::build(ReportKind::Error, span.file.to_owned(), span.start)
        .with_code(7)
        .with_message("Command can't be compiled")
        .with_label(
            Label::new(span.as_span())
                .with_message(format!("The {} command has no C counterpart", what.fg(a)))
                .with_color(a),
        )
        .with_note("This command only works under the interpreter")
}

pub fn report_similar(
    singular: &str,
    plural: &str,
    span: &Span,
    current: &str,
    strings: &[String],
    error_id: u32,
) -> Error {
    let mut colors = ColorGenerator::new();
    let b = colors.next();
    let similar = strings
        .iter()
        .filter(|k| {
            k.len() > 1 && strsim::damerau_levenshtein(current, k) <= (k.len() - 1).min(2)
        })
        .take(5)
        .collect::<Vec<_>>();
    let er = Report::build(ReportKind::Error, span.file.to_owned(), span.start)
        .with_code(error_id)
        .with_message(format!("Invalid {}", singular))
        .with_label(
            Label::new(span.as_span())
                .with_message(format!(
                    "{}{} {} wasn't found",
                    singular[0..1].to_uppercase(),
                    &singular[1..],
                    current.fg(Color::Blue)
                ))
                .with_color(b),
        );
    let er = if similar.is_empty() {
        er
    } else if similar.len() == 1 {
        er.with_note(format!(
            "Another {} in scope has a similar name {}",
            singular,
            similar
                .iter()
                .map(|x| format!("{}", x.fg(Color::Blue)))
                .collect::<Vec<_>>()
                .join(", ")
        ))
    } else {
        er.with_note(format!(
            "Other {} in scope have similar names {}",
            plural,
            similar
                .iter()
                .map(|x| format!("{}", x.fg(Color::Blue)))
                .collect::<Vec<_>>()
                .join(", ")
        ))
    };
    er
}
