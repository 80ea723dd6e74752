mod formatter;
mod solve;

pub use formatter::OutputFormatter;
pub use solve::SolveOutput;
