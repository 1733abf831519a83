use std::fmt;

use crate::mp4box::*;

impl fmt::Debug for BoxType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fourcc: FourCC = From::from(*self);
        write!(f, "{}", fourcc)
    }
}

impl fmt::Display for BoxType {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        let fourcc: FourCC = From::from(*self);
        write!(f, "{}", fourcc)
    }
}

#[derive(Default, PartialEq, Clone, Copy)]
pub struct FourCC {
    pub value: [u8; 4],
}

impl From<u32> for FourCC {
    fn from(number: u32) -> Self {
        FourCC {
            value: number.to_be_bytes(),
        }
    }
}

impl From<BoxType> for FourCC {
    fn from(t: BoxType) -> FourCC {
        let box_num: u32 = Into::into(t);
        From::from(box_num)
    }
}

impl fmt::Display for FourCC {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", String::from_utf8_lossy(&self.value[..]))
    }
}

/// A duration split into whole hours, minutes and seconds.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct Hms {
    pub hours: u64,
    pub minutes: u64,
    pub seconds: u64,
}

impl fmt::Display for Hms {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}:{:02}:{:02}", self.hours, self.minutes, self.seconds)
    }
}

/// Splits `total_seconds` into hours, minutes and seconds.
///
/// Hours and minutes are truncated from the running remainder, while seconds
/// are taken from the truncated total (`trunc(total) % 60`). Negative and NaN
/// inputs are treated as zero.
pub fn format_hms(total_seconds: f64) -> Hms {
    let total = if total_seconds > 0.0 { total_seconds } else { 0.0 };

    let hours = (total / 3600.0) as u64;
    let minutes = ((total - (hours as f64 * 3600.0)) / 60.0) as u64;
    let seconds = (total as u64) % 60;

    Hms {
        hours,
        minutes,
        seconds,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_fourcc() {
        let moov_value = FourCC::from(0x6d6f6f76);
        assert_eq!(&moov_value.value[..], b"moov");
        assert_eq!(moov_value.to_string(), "moov");
    }

    #[test]
    fn test_box_type_display() {
        assert_eq!(BoxType::MoovBox.to_string(), "moov");
        assert_eq!(BoxType::from(0x77696465).to_string(), "wide");
    }

    #[test]
    fn test_format_hms() {
        assert_eq!(
            format_hms(3661.9),
            Hms {
                hours: 1,
                minutes: 1,
                seconds: 1
            }
        );
        assert_eq!(format_hms(0.0), Hms::default());
        assert_eq!(format_hms(59.99).to_string(), "0:00:59");
        assert_eq!(format_hms(36_000.0).to_string(), "10:00:00");
        assert_eq!(format_hms(7322.0).to_string(), "2:02:02");
    }

    #[test]
    fn test_format_hms_degenerate_input() {
        assert_eq!(format_hms(-5.0), Hms::default());
        assert_eq!(format_hms(f64::NAN), Hms::default());
    }
}
