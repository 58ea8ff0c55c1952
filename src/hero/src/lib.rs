// src/hero/src/lib.rs

// Core modules
mod core;

pub mod abilities;
pub mod class;

// Re-export the main types
pub use self::{
    abilities::{apply_ability, attack},
    class::Class,
    core::Hero,
};
