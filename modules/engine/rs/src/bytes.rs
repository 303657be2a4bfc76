use spanwise_core_rs::ViewOp;

/// Byte-specialized search, available only to views over `u8`. The generic
/// engine stays element-agnostic; this layer adds the dedicated byte
/// kernels on top of the same capability base.
pub trait ByteSearch: ViewOp<Elem = u8> {
    /// First position of `byte`.
    fn find_byte(&self, byte: u8) -> Option<usize> {
        memchr::memchr(byte, self.as_slice())
    }

    /// Last position of `byte`.
    fn rfind_byte(&self, byte: u8) -> Option<usize> {
        memchr::memrchr(byte, self.as_slice())
    }

    /// Number of occurrences of `byte`.
    fn count_byte(&self, byte: u8) -> usize {
        memchr::memchr_iter(byte, self.as_slice()).count()
    }

    /// First position whose byte belongs to `set`. Sets of up to three
    /// bytes dispatch to the dedicated kernels; larger sets fall back to a
    /// scan.
    fn find_in_byteset(&self, set: &[u8]) -> Option<usize> {
        let data = self.as_slice();
        match *set {
            [] => None,
            [a] => memchr::memchr(a, data),
            [a, b] => memchr::memchr2(a, b, data),
            [a, b, c] => memchr::memchr3(a, b, c, data),
            _ => data.iter().position(|el| set.contains(el)),
        }
    }
}

impl<V: ViewOp<Elem = u8> + ?Sized> ByteSearch for V {}

#[cfg(test)]
mod tests {
    use super::*;
    use spanwise_core_rs::view;

    #[test]
    fn test_find_byte() {
        let v = view(b"hello\nworld");
        assert_eq!(v.find_byte(b'\n'), Some(5));
        assert_eq!(v.find_byte(b'z'), None);
    }

    #[test]
    fn test_rfind_byte() {
        let v = view(b"abcabc");
        assert_eq!(v.rfind_byte(b'a'), Some(3));
    }

    #[test]
    fn test_count_byte() {
        let v = view(b"a\nb\nc\n");
        assert_eq!(v.count_byte(b'\n'), 3);
        assert_eq!(v.count_byte(b'z'), 0);
    }

    #[test]
    fn test_find_in_byteset() {
        let v = view(b"hello world");
        assert_eq!(v.find_in_byteset(b""), None);
        assert_eq!(v.find_in_byteset(b"w"), Some(6));
        assert_eq!(v.find_in_byteset(b"wr"), Some(6));
        assert_eq!(v.find_in_byteset(b"wrd"), Some(6));
        assert_eq!(v.find_in_byteset(b"xyzw"), Some(6));
        assert_eq!(v.find_in_byteset(b"zq"), None);
    }
}
