use std::io::{self, Write};

pub(crate) const MENU: &str =
    "Options: 1)add  2)sub  3)mul  4)div  5)pow  6)mod  7)sqrt  8)show history  0)exit";

const HISTORY_HEADER: &str = "---- History (newest last) ----";
const HISTORY_FOOTER: &str = "-------------------------------";

/// Dump history lines verbatim, oldest first
pub(crate) fn write_history(out: &mut impl Write, lines: &[String]) -> io::Result<()> {
    if lines.is_empty() {
        return writeln!(out, "[no history yet]");
    }
    writeln!(out, "{HISTORY_HEADER}")?;
    for line in lines {
        writeln!(out, "{line}")?;
    }
    writeln!(out, "{HISTORY_FOOTER}")
}

pub(crate) fn write_result(out: &mut impl Write, result: &str) -> io::Result<()> {
    writeln!(out, "= {result}")
}

#[cfg(test)]
mod tests {
    use super::*;

    fn render(lines: &[String]) -> String {
        let mut buf = Vec::new();
        write_history(&mut buf, lines).unwrap();
        String::from_utf8(buf).unwrap()
    }

    #[test]
    fn empty_history() {
        assert_eq!(render(&[]), "[no history yet]\n");
    }

    #[test]
    fn history_is_framed_and_verbatim() {
        let out = render(&["x | y".to_string(), "  spaced ".to_string()]);
        let lines: Vec<&str> = out.lines().collect();
        assert_eq!(lines, vec![HISTORY_HEADER, "x | y", "  spaced ", HISTORY_FOOTER]);
    }
}
