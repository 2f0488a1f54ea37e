//! Stateful XOR munger.
//!
//! Borrows its key for the lifetime `'a` and tracks a cursor so that
//! successive calls keep cycling the key instead of restarting it. Munging
//! is an involution: applying the same munger state twice restores the
//! original bytes.

use std::borrow::Borrow;

#[derive(Clone)]
pub struct Xorcism<'a> {
    key: &'a [u8],
    position: usize,
}

impl<'a> Xorcism<'a> {
    /// Create a munger from anything cheaply viewable as bytes.
    pub fn new<Key>(key: &'a Key) -> Xorcism<'a>
    where
        Key: AsRef<[u8]> + ?Sized,
    {
        Xorcism {
            key: key.as_ref(),
            position: 0,
        }
    }

    /// XOR the buffer in place, advancing the key cursor.
    pub fn munge_in_place(&mut self, data: &mut [u8]) {
        for byte in data.iter_mut() {
            *byte ^= self.next_key_byte();
        }
    }

    /// Lazily XOR a byte stream, advancing the key cursor as the returned
    /// iterator is consumed.
    pub fn munge<'b, Data>(&'b mut self, data: Data) -> impl Iterator<Item = u8> + 'b
    where
        Data: IntoIterator,
        Data::Item: Borrow<u8>,
        <Data as IntoIterator>::IntoIter: 'b,
    {
        data.into_iter()
            .map(move |byte| *byte.borrow() ^ self.next_key_byte())
    }

    /// Wrap a reader so bytes are unmunged as they are read.
    pub fn reader<R: std::io::Read + 'a>(self, reader: R) -> impl std::io::Read + 'a {
        XorcismReader {
            xorcism: self,
            reader,
        }
    }

    /// Wrap a writer so bytes are munged before being written through.
    pub fn writer<W: std::io::Write + 'a>(self, writer: W) -> impl std::io::Write + 'a {
        XorcismWriter {
            xorcism: self,
            writer,
        }
    }

    fn next_key_byte(&mut self) -> u8 {
        let b = self.key[self.position];
        self.position = (self.position + 1) % self.key.len();
        b
    }
}

struct XorcismReader<'a, R> {
    xorcism: Xorcism<'a>,
    reader: R,
}

impl<R: std::io::Read> std::io::Read for XorcismReader<'_, R> {
    fn read(&mut self, buf: &mut [u8]) -> std::io::Result<usize> {
        let n = self.reader.read(buf)?;
        self.xorcism.munge_in_place(&mut buf[..n]);
        Ok(n)
    }
}

struct XorcismWriter<'a, W> {
    xorcism: Xorcism<'a>,
    writer: W,
}

impl<W: std::io::Write> std::io::Write for XorcismWriter<'_, W> {
    fn write(&mut self, buf: &[u8]) -> std::io::Result<usize> {
        let munged: Vec<u8> = self.xorcism.munge(buf).collect();
        self.writer.write(&munged)
    }

    fn flush(&mut self) -> std::io::Result<()> {
        self.writer.flush()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{Read, Write};

    #[test]
    fn munge_in_place_is_involutive() {
        let original = b"the quick brown fox".to_vec();
        let mut data = original.clone();
        let mut munger = Xorcism::new("secret");
        munger.munge_in_place(&mut data);
        assert_ne!(data, original);

        let mut munger = Xorcism::new("secret");
        munger.munge_in_place(&mut data);
        assert_eq!(data, original);
    }

    #[test]
    fn identity_key_leaves_data_unchanged() {
        let mut data = b"payload".to_vec();
        let mut munger = Xorcism::new(&[0u8]);
        munger.munge_in_place(&mut data);
        assert_eq!(&data, b"payload");
    }

    #[test]
    fn statefulness_carries_across_calls() {
        let mut munger = Xorcism::new("abc");
        let first: Vec<u8> = munger.munge(b"xx".iter()).collect();
        let second: Vec<u8> = munger.munge(b"xx".iter()).collect();
        // the cursor advanced two positions, so the same input munges differently
        assert_ne!(first, second);
    }

    #[test]
    fn munge_iterator_matches_in_place() {
        let mut a = Xorcism::new("key");
        let mut b = Xorcism::new("key");
        let from_iter: Vec<u8> = a.munge(b"hello world".iter()).collect();
        let mut in_place = b"hello world".to_vec();
        b.munge_in_place(&mut in_place);
        assert_eq!(from_iter, in_place);
    }

    #[test]
    fn reader_unmunges_a_munged_stream() {
        let mut munged = b"round trip through io".to_vec();
        Xorcism::new("xyzzy").munge_in_place(&mut munged);

        let mut out = Vec::new();
        Xorcism::new("xyzzy")
            .reader(munged.as_slice())
            .read_to_end(&mut out)
            .unwrap();
        assert_eq!(out, b"round trip through io");
    }

    #[test]
    fn writer_munges_on_the_way_through() {
        let mut sink = Vec::new();
        {
            let mut w = Xorcism::new("xyzzy").writer(&mut sink);
            w.write_all(b"round trip through io").unwrap();
            w.flush().unwrap();
        }
        Xorcism::new("xyzzy").munge_in_place(&mut sink);
        assert_eq!(sink, b"round trip through io");
    }
}
