pub mod actions;
pub mod compiler;
pub mod fizzbuzz;
pub mod parser;

#[cfg(test)]
mod tests;
