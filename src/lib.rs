//! # Keymacro
//!
//! Keyboard macros from plain text scripts.
//!
//! A script is compiled line by line. Lines that can't be understood are
//! reported with their line number and skipped. Everything else runs as a
//! flat list of instructions with loops paired ahead of time.
//!
//! ```text
//! LOOP 3
//!   KEYDOWN W 800-1200
//!   PAUSE 0.5
//! ENDLOOP
//! ```
//!
//! Run `keymacro script.ini` then switch to the target window during the
//! countdown. CTRL-C stops the macro.

#[path = "doc/introduction.rs"]
#[allow(non_snake_case)]
pub mod _Introduction;

#[path = "doc/chapter_1.rs"]
#[allow(non_snake_case)]
pub mod __Chapter_1;

#[path = "doc/appendix_a.rs"]
#[allow(non_snake_case)]
pub mod ___Appendix_A;

pub mod lang;
pub mod mach;
pub mod term;
