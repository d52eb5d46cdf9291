//! Application services - orchestrate use cases.
//!
//! Services coordinate the domain layer and ports to accomplish the
//! high-level use cases: "start a preview session" and "clean the scaffold".

pub mod generator;
pub mod pub_get;
pub mod resolver;
pub mod scaffold;
pub mod scanner;
pub mod session;
