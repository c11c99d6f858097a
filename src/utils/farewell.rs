//! # 告别语守卫
//!
//! `Farewell` 持有一次会话的输出流，在被 drop 时写出告别语。
//! 无论会话正常结束、校验失败还是因致命错误提前返回，告别语都是最后一行。
//!
//! ## 依赖关系
//! - 被 `commands/grade.rs` 使用
//! - 使用 `utils/output.rs`

use super::output;
use std::io::{self, Write};
use tracing::warn;

/// 在离开作用域时写出告别语的输出流包装
pub struct Farewell<W: Write> {
    out: W,
}

impl<W: Write> Farewell<W> {
    pub fn new(out: W) -> Self {
        Farewell { out }
    }
}

impl<W: Write> Write for Farewell<W> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.out.write(buf)
    }

    fn flush(&mut self) -> io::Result<()> {
        self.out.flush()
    }
}

impl<W: Write> Drop for Farewell<W> {
    fn drop(&mut self) {
        if let Err(e) = output::write_goodbye(&mut self.out) {
            warn!(error = %e, "failed to write goodbye message");
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_goodbye_written_on_drop() {
        let mut buf = Vec::new();
        {
            let mut out = Farewell::new(&mut buf);
            writeln!(out, "hello").unwrap();
        }
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            format!("hello\n{}\n", output::GOODBYE)
        );
    }

    #[test]
    fn test_goodbye_written_on_early_return() {
        fn fails<W: Write>(out: W) -> Result<(), &'static str> {
            let _out = Farewell::new(out);
            Err("boom")
        }

        let mut buf = Vec::new();
        assert!(fails(&mut buf).is_err());
        assert_eq!(
            String::from_utf8(buf).unwrap(),
            format!("{}\n", output::GOODBYE)
        );
    }
}
