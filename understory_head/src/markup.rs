// Copyright 2025 the Understory Authors
// SPDX-License-Identifier: Apache-2.0 OR MIT

//! Minimal markup helpers shared by headless renderers.

use core::fmt::{self, Write};

/// Write `s` with the characters significant inside a double-quoted
/// attribute value or text node escaped.
pub fn write_escaped<W: Write + ?Sized>(out: &mut W, s: &str) -> fmt::Result {
    for c in s.chars() {
        match c {
            '&' => out.write_str("&amp;")?,
            '<' => out.write_str("&lt;")?,
            '>' => out.write_str("&gt;")?,
            '"' => out.write_str("&quot;")?,
            _ => out.write_char(c)?,
        }
    }
    Ok(())
}

/// Write ` name="value"` with `value` escaped.
pub fn write_attribute<W: Write + ?Sized>(out: &mut W, name: &str, value: &str) -> fmt::Result {
    write!(out, " {name}=\"")?;
    write_escaped(out, value)?;
    out.write_char('"')
}

#[cfg(test)]
mod tests {
    use super::*;
    use alloc::string::String;

    #[test]
    fn escapes_quotes_and_angle_brackets() {
        let mut out = String::new();
        write_attribute(&mut out, "content", r#"a "b" <c> & d"#).unwrap();
        assert_eq!(out, r#" content="a &quot;b&quot; &lt;c&gt; &amp; d""#);
    }
}
