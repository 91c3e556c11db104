//! Property test modules

mod naming;
