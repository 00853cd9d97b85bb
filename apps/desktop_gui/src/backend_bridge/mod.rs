//! Backend bridge: command queue types and the worker that runs them.

pub mod commands;
pub mod runtime;
