use crate::bitstream::bytereader::ByteReader;
use crate::bitstream::bytewriter::ByteWriter;
use crate::error::{HefError, Result};

/// Tag byte written in front of every number, naming the width of the value that follows.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum NumTag {
    Byte = 0,
    Word = 1,
    DWord = 2,
    QWord = 3,
}

impl NumTag {
    /// The smallest width that holds `val`.
    pub fn for_value(val: u64) -> Self {
        match val {
            0..=0xff => NumTag::Byte,
            0x100..=0xffff => NumTag::Word,
            0x1_0000..=0xffff_ffff => NumTag::DWord,
            _ => NumTag::QWord,
        }
    }

    /// Bytes of payload after the tag.
    pub fn width(self) -> usize {
        1 << self as u8
    }
}

impl TryFrom<u8> for NumTag {
    type Error = u8;
    fn try_from(tag: u8) -> std::result::Result<Self, u8> {
        match tag {
            0 => Ok(NumTag::Byte),
            1 => Ok(NumTag::Word),
            2 => Ok(NumTag::DWord),
            3 => Ok(NumTag::QWord),
            other => Err(other),
        }
    }
}

/// Write `val` as a tag byte followed by the value, little endian, in the smallest width.
pub fn write_num(bw: &mut ByteWriter, val: u64) {
    let tag = NumTag::for_value(val);
    bw.out8(tag as u8);
    bw.out_bytes(&val.to_le_bytes()[..tag.width()]);
}

/// Read a tagged number.
pub fn read_num(br: &mut ByteReader<'_>) -> Result<u64> {
    let offset = br.loc();
    let tag = NumTag::try_from(br.byte()?)
        .map_err(|tag| HefError::MalformedHeader { tag, offset })?;
    let val = match tag {
        NumTag::Byte => br.byte()? as u64,
        NumTag::Word => u16::from_le_bytes(br.array()?) as u64,
        NumTag::DWord => u32::from_le_bytes(br.array()?) as u64,
        NumTag::QWord => u64::from_le_bytes(br.array()?),
    };
    Ok(val)
}

/// Read a tagged number that counts something held in memory.
pub fn read_size(br: &mut ByteReader<'_>) -> Result<usize> {
    let val = read_num(br)?;
    usize::try_from(val).map_err(|_| HefError::SizeOverflow(val))
}

#[cfg(test)]
mod test {
    use super::{read_num, write_num, NumTag};
    use crate::bitstream::bytereader::ByteReader;
    use crate::bitstream::bytewriter::ByteWriter;
    use crate::error::HefError;

    fn serialise(val: u64) -> Vec<u8> {
        let mut bw = ByteWriter::new(9);
        write_num(&mut bw, val);
        bw.output
    }

    #[test]
    fn layout_test() {
        assert_eq!(serialise(0), vec![0, 0]);
        assert_eq!(serialise(1), vec![0, 1]);
        assert_eq!(serialise(255), vec![0, 0xff]);
        assert_eq!(serialise(256), vec![1, 0, 1]);
        assert_eq!(serialise(65535), vec![1, 0xff, 0xff]);
        assert_eq!(serialise(65536), vec![2, 0, 0, 1, 0]);
        assert_eq!(serialise(1 << 32), vec![3, 0, 0, 0, 0, 1, 0, 0, 0]);
    }

    #[test]
    fn round_trip_test() {
        for val in [0, 255, 256, 65535, 65536, u32::MAX as u64, 1 << 32, u64::MAX] {
            let blob = serialise(val);
            let mut br = ByteReader::new(&blob);
            assert_eq!(read_num(&mut br).unwrap(), val);
            assert_eq!(br.remaining(), 0);
            assert_eq!(blob.len(), 1 + NumTag::for_value(val).width());
        }
    }

    #[test]
    fn minimal_tag_test() {
        assert_eq!(NumTag::for_value(255), NumTag::Byte);
        assert_eq!(NumTag::for_value(256), NumTag::Word);
        assert_eq!(NumTag::for_value(65535), NumTag::Word);
        assert_eq!(NumTag::for_value(65536), NumTag::DWord);
        assert_eq!(NumTag::for_value(u32::MAX as u64), NumTag::DWord);
        assert_eq!(NumTag::for_value(1 << 32), NumTag::QWord);
    }

    #[test]
    fn oversized_tag_accepted_test() {
        // Decoding follows the tag even when a smaller width would do
        let blob = [2_u8, 5, 0, 0, 0];
        assert_eq!(read_num(&mut ByteReader::new(&blob)).unwrap(), 5);
    }

    #[test]
    fn bad_tag_test() {
        let blob = [0_u8, 0, 4, 1];
        let mut br = ByteReader::new(&blob);
        read_num(&mut br).unwrap();
        assert!(matches!(
            read_num(&mut br),
            Err(HefError::MalformedHeader { tag: 4, offset: 2 })
        ));
    }

    #[test]
    fn truncated_num_test() {
        let blob = [1_u8, 0xff];
        assert!(matches!(
            read_num(&mut ByteReader::new(&blob)),
            Err(HefError::Truncated { needed: 2, .. })
        ));
        assert!(matches!(
            read_num(&mut ByteReader::new(&[])),
            Err(HefError::Truncated { .. })
        ));
    }
}
