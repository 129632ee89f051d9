use std::collections::HashMap;

use errors::{Error, Span};

pub const TAPE_SIZE: usize = 30_000;

pub fn builtin_names() -> impl Iterator<Item = char> {
    ('a'..='z').chain('A'..='Z')
}

/// Cell index a name resolves to: the 52 single letters map to cells
/// 0..51, declared variables follow in declaration order.
pub fn cell_for(variables: &[String], name: &str) -> Option<usize> {
    let mut chars = name.chars();
    match (chars.next(), chars.next()) {
        (Some(c), None) => builtin_names().position(|b| b == c),
        _ => variables
            .iter()
            .position(|v| v == name)
            .map(|i| i + builtin_names().count()),
    }
}

pub struct Tape {
    cells: Vec<u8>,
    position: usize,
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl Tape {
    pub fn new(variables: &[String]) -> Self {
        let names: Vec<String> = builtin_names()
            .map(|c| c.to_string())
            .chain(variables.iter().cloned())
            .collect();
        let positions = names
            .iter()
            .enumerate()
            .map(|(i, n)| (n.clone(), i))
            .collect();
        Tape {
            cells: vec![0; TAPE_SIZE],
            position: 0,
            names,
            positions,
        }
    }

    pub fn position(&self) -> usize {
        self.position
    }

    pub fn value(&self) -> u8 {
        self.cells[self.position]
    }

    pub fn set_value(&mut self, value: u8) {
        self.cells[self.position] = value;
    }

    pub fn increment(&mut self, n: u32) {
        self.cells[self.position] = (self.cells[self.position] as u32).wrapping_add(n) as u8;
    }

    pub fn decrement(&mut self, n: u32) {
        self.cells[self.position] =
            (self.cells[self.position] as i64 - n as i64).rem_euclid(256) as u8;
    }

    pub fn forward(&mut self, n: u32, span: &Span) -> Result<(), Error> {
        let target = self.position + n as usize;
        if target >= TAPE_SIZE {
            return Err(errors::tape_overrun(span, target as i64, TAPE_SIZE - 1));
        }
        self.position = target;
        Ok(())
    }

    pub fn backward(&mut self, n: u32, span: &Span) -> Result<(), Error> {
        let target = self.position as i64 - n as i64;
        if target < 0 {
            return Err(errors::tape_overrun(span, target, TAPE_SIZE - 1));
        }
        self.position = target as usize;
        Ok(())
    }

    pub fn move_to(&mut self, cell: usize) {
        self.position = cell;
    }

    pub fn cells(&self) -> &[u8] {
        &self.cells
    }

    pub fn structure_dump(&self) -> String {
        let mut out = String::new();
        out.push_str("---------- Current Memory Structure ----------\n");
        out.push_str(&format!(
            "Position: {} ({})\n",
            self.position,
            self.names
                .get(self.position)
                .map(|x| x.as_str())
                .unwrap_or("unnamed")
        ));
        out.push_str(&format!("   Value: {}\n", self.value()));
        out.push_str("  Memory: {");
        for (name, position) in self.names.iter().map(|n| (n, self.positions[n])) {
            let value = self.cells[position];
            if value != 0 {
                out.push_str(&format!("'{}': {}, ", name, value));
            }
        }
        out.push_str("}\n");
        out.push_str("----------------------------------------------\n");
        out
    }
}
