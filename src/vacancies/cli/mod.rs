//! Terminal side of the binary: prompts in, coloured text out.

pub(crate) mod print;
pub(crate) mod prompt;
