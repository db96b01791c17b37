//! twinseed CLI library

pub mod commands;
