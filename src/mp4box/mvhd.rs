use byteorder::{BigEndian, ReadBytesExt};
use std::io::Read;

use crate::mp4box::*;
use crate::*;

/// Timing fields of a movie header (`mvhd`) box.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MovieHeader {
    pub version: u8,
    pub flags: u32,
    pub creation_time: u64,
    pub modification_time: u64,
    pub timescale: u32,
    pub duration: u64,
}

impl MovieHeader {
    /// Duration in seconds, or `None` when the timescale is zero.
    pub fn seconds(&self) -> Option<f64> {
        if self.timescale > 0 {
            Some(self.duration as f64 / self.timescale as f64)
        } else {
            None
        }
    }
}

/// Decodes the timing fields of an `mvhd` box. The reader must sit at the
/// start of the box payload, as left by `find_box`.
///
/// Any version other than 1 is read with the 32-bit layout.
pub fn parse_movie_header<R: Read>(reader: &mut R) -> Result<MovieHeader> {
    let (version, flags) = read_box_header_ext(reader)?;

    let (creation_time, modification_time, timescale, duration) = if version == 1 {
        (
            reader.read_u64::<BigEndian>()?,
            reader.read_u64::<BigEndian>()?,
            reader.read_u32::<BigEndian>()?,
            reader.read_u64::<BigEndian>()?,
        )
    } else {
        (
            reader.read_u32::<BigEndian>()? as u64,
            reader.read_u32::<BigEndian>()? as u64,
            reader.read_u32::<BigEndian>()?,
            reader.read_u32::<BigEndian>()? as u64,
        )
    };

    Ok(MovieHeader {
        version,
        flags,
        creation_time,
        modification_time,
        timescale,
        duration,
    })
}
