//!
//! Reads word lists from disk and groups their lines with a [`Processor`].
//!
//! The file stays open only for the duration of the read loop; the
//! [`BufReader`] owning it is dropped on every return path.
use std::fs::File;
use std::io::{self, BufRead, BufReader};
use std::path::Path;

use log::debug;

use crate::error::GroupError;
use crate::processor::anagram::AnagramProcessor;
use crate::processor::{GroupTable, Processor};

const BOM: char = '\u{feff}';

/// Groups the words in the file at `path` by their anagram key.
pub fn group_anagrams<P: AsRef<Path>>(path: P) -> Result<GroupTable, GroupError> {
    group_file(path, &AnagramProcessor)
}

/// Opens the file at `path` and groups every line with `processor`.
pub fn group_file<P, Proc>(path: P, processor: &Proc) -> Result<GroupTable<Proc::Key>, GroupError>
where
    P: AsRef<Path>,
    Proc: Processor,
{
    let path = path.as_ref();
    let file = File::open(path).map_err(|source| GroupError::FileAccess {
        path: path.to_path_buf(),
        source,
    })?;
    debug!("Opened {}", path.display());

    let groups = group_lines(BufReader::new(file), processor).map_err(|(line, source)| {
        GroupError::Read {
            path: path.to_path_buf(),
            line,
            source,
        }
    })?;
    debug!("{}: {} groups", path.display(), groups.len());
    Ok(groups)
}

/// Groups every line of `reader` with `processor`.
///
/// Lines end at `\n`, `\r\n` or a lone `\r`. Bytes that are not valid UTF-8
/// are replaced with U+FFFD and a byte-order mark opening the input is
/// dropped. On an I/O failure the 1-based number of the line being read is
/// returned with the underlying error and nothing read before it is kept.
pub fn group_lines<R, Proc>(
    mut reader: R,
    processor: &Proc,
) -> Result<GroupTable<Proc::Key>, (usize, io::Error)>
where
    R: BufRead,
    Proc: Processor,
{
    let mut data = Vec::new();
    let mut buf = Vec::new();
    let mut line_no = 0;
    loop {
        buf.clear();
        let read = reader
            .read_until(b'\n', &mut buf)
            .map_err(|err| (line_no + 1, err))?;
        if read == 0 {
            break;
        }

        let decoded = String::from_utf8_lossy(&buf);
        let mut chunk: &str = &decoded;
        if line_no == 0 {
            chunk = chunk.strip_prefix(BOM).unwrap_or(chunk);
        }
        let chunk = chunk.strip_suffix('\n').unwrap_or(chunk);
        let chunk = chunk.strip_suffix('\r').unwrap_or(chunk);

        for line in chunk.split('\r') {
            line_no += 1;
            data.push(processor.parse(line));
        }
    }
    Ok(Proc::group_output(data))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::processor::anagram::canonical_key;
    use std::io::{Cursor, Read};

    #[test]
    fn blank_lines_share_the_empty_key() {
        let input = Cursor::new("abc\n\n   \nbca\n\t\n");
        let groups = group_lines(input, &AnagramProcessor).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups["abc"], vec!["abc", "bca"]);
        assert_eq!(groups[""], vec!["", "", ""]);
    }

    #[test]
    fn crlf_line_endings_are_trimmed() {
        let input = Cursor::new("god\r\ndog\r\n");
        let groups = group_lines(input, &AnagramProcessor).unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups["dgo"], vec!["god", "dog"]);
    }

    #[test]
    fn invalid_utf8_is_replaced_not_fatal() {
        let input = Cursor::new(b"abc\ncab\ncaf\xe9\n".to_vec());
        let groups = group_lines(input, &AnagramProcessor).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups["abc"], vec!["abc", "cab"]);
        assert_eq!(groups[canonical_key("caf\u{fffd}").as_str()], vec!["caf\u{fffd}"]);
    }

    #[test]
    fn leading_bom_is_dropped() {
        let input = Cursor::new(b"\xef\xbb\xbfabc\ncab\n".to_vec());
        let groups = group_lines(input, &AnagramProcessor).unwrap();

        assert_eq!(groups.len(), 1);
        assert_eq!(groups["abc"], vec!["abc", "cab"]);
    }

    #[test]
    fn bom_after_the_first_line_is_kept() {
        let input = Cursor::new("abc\n\u{feff}cab\n");
        let groups = group_lines(input, &AnagramProcessor).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups["abc"], vec!["abc"]);
    }

    #[test]
    fn lone_carriage_returns_split_lines() {
        let input = Cursor::new("tops\rspot\r\rpost\r\nstop\r");
        let groups = group_lines(input, &AnagramProcessor).unwrap();

        assert_eq!(groups.len(), 2);
        assert_eq!(groups["opst"], vec!["tops", "spot", "post", "stop"]);
        assert_eq!(groups[""], vec![""]);
    }

    struct FailingReader {
        data: &'static [u8],
    }

    impl Read for FailingReader {
        fn read(&mut self, buf: &mut [u8]) -> io::Result<usize> {
            if self.data.is_empty() {
                return Err(io::Error::new(io::ErrorKind::Other, "disk went away"));
            }
            let n = self.data.len().min(buf.len());
            buf[..n].copy_from_slice(&self.data[..n]);
            self.data = &self.data[n..];
            Ok(n)
        }
    }

    #[test]
    fn io_failure_reports_the_line() {
        let reader = BufReader::new(FailingReader {
            data: b"abc\ncab\nxy",
        });
        let (line, err) = group_lines(reader, &AnagramProcessor).unwrap_err();

        assert_eq!(line, 3);
        assert_eq!(err.kind(), io::ErrorKind::Other);
    }
}
