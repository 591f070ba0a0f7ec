/*!
## Rust Machine Module

This Rust module is a compiler and virtual machine for macro scripts.
Statements compile to a flat list of instructions. Loops are paired at
compile time so the runtime never searches for a matching `ENDLOOP`.

*/

pub type Address = usize;

mod compile;
mod instruction;
mod keys;
mod link;
mod program;
mod runtime;

pub use compile::compile;
pub use compile::KEY_TAP_MS;
pub use instruction::Instruction;
pub use instruction::PressKind;
pub use keys::KeyCode;
pub use keys::KeyTable;
pub use link::Link;
pub use program::Program;
pub use runtime::execute;
pub use runtime::Effects;
pub use runtime::Event;
pub use runtime::Outcome;
pub use runtime::Runtime;

#[cfg(test)]
mod tests;
