use std::fmt::Debug;
use std::hash::Hash;

/// An element of the input alphabet.
///
/// Symbols are stored in the container as `WIDTH` little endian bytes.
pub trait Symbol: Copy + Ord + Hash + Debug {
    /// Bytes per symbol in the container.
    const WIDTH: usize;

    /// Append the stored form of the symbol.
    fn put(self, out: &mut Vec<u8>);

    /// Rebuild a symbol from exactly `WIDTH` bytes. None if they are not a valid value.
    fn take(bytes: &[u8]) -> Option<Self>;
}

macro_rules! int_symbol {
    ($($t:ty),*) => {
        $(
            impl Symbol for $t {
                const WIDTH: usize = std::mem::size_of::<$t>();

                fn put(self, out: &mut Vec<u8>) {
                    out.extend_from_slice(&self.to_le_bytes());
                }

                fn take(bytes: &[u8]) -> Option<Self> {
                    bytes.try_into().ok().map(<$t>::from_le_bytes)
                }
            }
        )*
    };
}

int_symbol!(u8, i8, u16, i16, u32, i32, u64, i64);

/// Chars are stored as their 32 bit scalar value.
impl Symbol for char {
    const WIDTH: usize = 4;

    fn put(self, out: &mut Vec<u8>) {
        (self as u32).put(out)
    }

    fn take(bytes: &[u8]) -> Option<Self> {
        u32::take(bytes).and_then(char::from_u32)
    }
}
