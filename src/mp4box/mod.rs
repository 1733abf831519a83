use byteorder::{BigEndian, ReadBytesExt};
use log::trace;
use std::io::{ErrorKind, Read, Seek, SeekFrom};

use crate::*;

pub(crate) mod mvhd;

pub use mvhd::{parse_movie_header, MovieHeader};

pub const HEADER_SIZE: u64 = 8;
pub const HEADER_LARGE_SIZE: u64 = 16;

macro_rules! boxtype {
    ($( $name:ident => $value:expr ),*) => {
        #[derive(Clone, Copy, PartialEq, Eq)]
        pub enum BoxType {
            $( $name, )*
            UnknownBox(u32),
        }

        impl From<u32> for BoxType {
            fn from(t: u32) -> BoxType {
                match t {
                    $( $value => BoxType::$name, )*
                    _ => BoxType::UnknownBox(t),
                }
            }
        }

        impl From<BoxType> for u32 {
            fn from(b: BoxType) -> u32 {
                match b {
                    $( BoxType::$name => $value, )*
                    BoxType::UnknownBox(t) => t,
                }
            }
        }
    }
}

boxtype! {
    MoovBox => 0x6d6f6f76,
    MvhdBox => 0x6d766864
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BoxHeader {
    pub name: BoxType,
    pub size: u64,
    /// 8 for the compact form, 16 when a 64-bit largesize follows the tag.
    pub header_size: u64,
}

impl BoxHeader {
    pub fn read<R: Read>(reader: &mut R) -> Result<Self> {
        let size = reader.read_u32::<BigEndian>()?;
        let typ = reader.read_u32::<BigEndian>()?;

        // Get largesize if size is 1
        if size == 1 {
            let largesize = reader.read_u64::<BigEndian>()?;

            Ok(BoxHeader {
                name: BoxType::from(typ),
                size: largesize,
                header_size: HEADER_LARGE_SIZE,
            })
        } else {
            Ok(BoxHeader {
                name: BoxType::from(typ),
                size: size as u64,
                header_size: HEADER_SIZE,
            })
        }
    }

    /// Number of bytes between the end of the header and the end of the box.
    pub fn payload_size(&self) -> Result<u64> {
        self.size
            .checked_sub(self.header_size)
            .ok_or(Error::InvalidData("box size smaller than its header"))
    }
}

/// Where a box found by [`find_box`] lives in the stream.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct BoxLocation {
    /// Total box size, header included.
    pub size: u64,
    /// Stream offset right after the header.
    pub payload_start: u64,
}

/// Scans sibling boxes from the current position until one tagged `target`
/// is found, leaving the reader at the start of its payload.
///
/// Boxes that don't match are skipped whole; the scan never descends into
/// them. Searching for `mvhd` right after finding `moov` walks the children
/// of `moov` as siblings, so an `mvhd` behind other children is still found,
/// while one nested inside another child (`moov/udta/mvhd`) is not.
pub fn find_box<R: Read + Seek>(reader: &mut R, target: BoxType) -> Result<BoxLocation> {
    loop {
        let header = match BoxHeader::read(reader) {
            Ok(header) => header,
            Err(Error::IoError(ref e)) if e.kind() == ErrorKind::UnexpectedEof => {
                return Err(Error::BoxNotFound(target));
            }
            Err(e) => return Err(e),
        };
        let payload_start = reader.seek(SeekFrom::Current(0))?;

        if header.name == target {
            return Ok(BoxLocation {
                size: header.size,
                payload_start,
            });
        }

        let end = payload_start
            .checked_add(header.payload_size()?)
            .ok_or(Error::InvalidData("box size out of range"))?;
        trace!(
            "skipping {} box of {} bytes at offset {}",
            header.name,
            header.size,
            payload_start - header.header_size
        );
        skip_bytes_to(reader, end)?;
    }
}

pub fn read_box_header_ext<R: Read>(reader: &mut R) -> Result<(u8, u32)> {
    let version = reader.read_u8()?;
    let flags = reader.read_u24::<BigEndian>()?;
    Ok((version, flags))
}

pub fn skip_bytes_to<S: Seek>(seeker: &mut S, pos: u64) -> Result<()> {
    seeker.seek(SeekFrom::Start(pos))?;
    Ok(())
}
