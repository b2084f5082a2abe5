mod json;
mod text;

pub(crate) use json::{evaluation_json, history_json};
pub(crate) use text::{MENU, write_history, write_result};
