use log::debug;
use std::fs::File;
use std::io::{BufReader, Read, Seek};
use std::path::Path;

use crate::mp4box::*;
use crate::*;

/// Reads the movie duration, in seconds, from an MP4 stream positioned at
/// its first top-level box.
///
/// `moov` is searched among the top-level boxes, then `mvhd` among the boxes
/// that follow the start of the `moov` payload.
pub fn read_duration<R: Read + Seek>(reader: &mut R) -> Result<f64> {
    find_box(reader, BoxType::MoovBox)?;
    find_box(reader, BoxType::MvhdBox)?;

    let mvhd = parse_movie_header(reader)?;
    mvhd.seconds().ok_or(Error::ZeroTimescale)
}

/// Opens `path` and reads its movie duration.
pub fn probe_duration<P: AsRef<Path>>(path: P) -> Result<f64> {
    let f = File::open(path)?;
    let mut reader = BufReader::new(f);
    read_duration(&mut reader)
}

/// Like [`probe_duration`], but any failure just means the file has no
/// usable duration.
pub fn get_duration<P: AsRef<Path>>(path: P) -> Option<f64> {
    let path = path.as_ref();
    match probe_duration(path) {
        Ok(seconds) => Some(seconds),
        Err(err) => {
            debug!("no duration for {}: {}", path.display(), err);
            None
        }
    }
}
