//! Writing generated passwords out.

use std::io::{self, BufWriter, Write};

use zeroize::{Zeroize, Zeroizing};

use super::Batch;

/// Write each password on its own line.
pub fn write_lines<W: Write>(out: W, batch: &Batch) -> io::Result<()> {
    let mut out = BufWriter::new(out);
    let mut line: Vec<u8> = Vec::new();

    for pass in &batch.passwords {
        line.clear();
        line.extend_from_slice(pass.as_bytes());
        line.push(b'\n');
        out.write_all(&line)?;
    }
    line.zeroize();

    out.flush()
}

/// Print the batch to stdout.
pub fn to_stdout(batch: &Batch) -> io::Result<()> {
    let stdout = io::stdout();
    write_lines(stdout.lock(), batch)
}

/// Newline-joined passwords for a single clipboard write.
pub fn joined(batch: &Batch) -> Zeroizing<String> {
    let total: usize = batch.passwords.iter().map(|p| p.len() + 1).sum();
    let mut text = Zeroizing::new(String::with_capacity(total));
    for (i, pass) in batch.passwords.iter().enumerate() {
        if i > 0 {
            text.push('\n');
        }
        text.push_str(pass);
    }
    text
}

#[cfg(test)]
mod tests {
    use super::*;

    fn batch(passwords: &[&str]) -> Batch {
        Batch {
            passwords: passwords
                .iter()
                .map(|p| Zeroizing::new(p.to_string()))
                .collect(),
            fell_back: false,
        }
    }

    #[test]
    fn one_password_per_line() {
        let mut out = Vec::new();
        write_lines(&mut out, &batch(&["abc", "XYZ!"])).unwrap();
        assert_eq!(out, b"abc\nXYZ!\n");
    }

    #[test]
    fn empty_batch_writes_nothing() {
        let mut out = Vec::new();
        write_lines(&mut out, &batch(&[])).unwrap();
        assert!(out.is_empty());
    }

    #[test]
    fn joined_has_no_trailing_newline() {
        assert_eq!(joined(&batch(&["a1", "b2", "c3"])).as_str(), "a1\nb2\nc3");
        assert_eq!(joined(&batch(&["solo"])).as_str(), "solo");
    }
}
