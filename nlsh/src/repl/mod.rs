//! Interactive REPL session

mod session;

pub use session::Session;
