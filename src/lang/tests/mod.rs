use super::ast::*;
use super::*;

mod line_test;
