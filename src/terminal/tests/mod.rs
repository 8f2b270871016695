//! Emulator behavior tests, split by topic

mod basic;
mod editing;
mod modes;
