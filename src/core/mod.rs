//! Core module - operand reading and the arithmetic evaluator

mod evaluator;
mod operand;
mod operation;

pub(crate) use evaluator::{Evaluation, format_result};
pub(crate) use operation::Operation;
