use crate::error::LightError;

/// Number of independently addressable zones on the strip.
pub const ZONE_COUNT: usize = 8;

/// Bytes per zone on the wire.
pub const BYTES_PER_ZONE: usize = 3;

/// Size of one frame as written to the device.
pub const FRAME_LEN: usize = ZONE_COUNT * BYTES_PER_ZONE;

/// Color every zone starts out with, and the color `turn_on` falls back to
/// when nothing else was ever lit.
pub const DEFAULT_COLOR: u32 = 0xff0000;

/// A validated zone position in `0..ZONE_COUNT`.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct ZoneIndex(usize);

impl ZoneIndex {
    pub fn new(index: usize) -> Result<ZoneIndex, LightError> {
        if index >= ZONE_COUNT {
            return Err(LightError::InvalidZone { index });
        }
        return Ok(ZoneIndex(index));
    }

    pub fn all() -> impl Iterator<Item = ZoneIndex> {
        (0..ZONE_COUNT).map(ZoneIndex)
    }

    pub fn get(self) -> usize {
        self.0
    }

    fn offset(self) -> usize {
        self.0 * BYTES_PER_ZONE
    }
}

/// The raw bytes sent to the strip.
///
/// Colors are handed in packed as `0x00RRGGBB`, but the hardware expects
/// every zone in green, red, blue order. The top byte of a packed color is
/// ignored.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct Frame {
    data: [u8; FRAME_LEN],
}

impl Frame {
    /// A frame with every zone switched off.
    pub fn dark() -> Frame {
        return Frame {
            data: [0; FRAME_LEN],
        };
    }

    /// A frame with every zone set to `rgb`.
    pub fn uniform(rgb: u32) -> Frame {
        let mut frame = Frame::dark();
        frame.fill(rgb);
        return frame;
    }

    pub fn set_zone(&mut self, zone: ZoneIndex, rgb: u32) {
        let st = zone.offset();
        self.data[st] = ((rgb >> 8) & 0xff) as u8;
        self.data[st + 1] = ((rgb >> 16) & 0xff) as u8;
        self.data[st + 2] = (rgb & 0xff) as u8;
    }

    pub fn fill(&mut self, rgb: u32) {
        for zone in ZoneIndex::all() {
            self.set_zone(zone, rgb);
        }
    }

    /// Render zone `zone` back as 0x00RRGGBB.
    pub fn zone(&self, zone: ZoneIndex) -> u32 {
        let st = zone.offset();
        let green = self.data[st] as u32;
        let red = self.data[st + 1] as u32;
        let blue = self.data[st + 2] as u32;
        return (red << 16) | (green << 8) | blue;
    }

    pub fn to_packed(&self) -> [u32; ZONE_COUNT] {
        let mut packed = [0; ZONE_COUNT];
        for zone in ZoneIndex::all() {
            packed[zone.get()] = self.zone(zone);
        }
        return packed;
    }

    /// True if every byte is zero, i.e. the strip is off.
    pub fn is_dark(&self) -> bool {
        self.data.iter().all(|b| *b == 0)
    }

    pub fn as_bytes(&self) -> &[u8] {
        &self.data
    }
}

impl Default for Frame {
    fn default() -> Frame {
        Frame::uniform(DEFAULT_COLOR)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zone_index_bounds() {
        assert_eq!(ZoneIndex::new(0).unwrap().get(), 0);
        assert_eq!(ZoneIndex::new(7).unwrap().get(), 7);
        assert!(matches!(
            ZoneIndex::new(8),
            Err(LightError::InvalidZone { index: 8 })
        ));
        assert_eq!(ZoneIndex::all().count(), ZONE_COUNT);
    }

    #[test]
    fn zone_is_written_green_red_blue() {
        let mut frame = Frame::dark();
        frame.set_zone(ZoneIndex::new(2).unwrap(), 0x123456);
        let bytes = frame.as_bytes();
        assert_eq!(&bytes[6..9], &[0x34, 0x12, 0x56]);
        assert!(bytes[..6].iter().all(|b| *b == 0));
        assert!(bytes[9..].iter().all(|b| *b == 0));
    }

    #[test]
    fn default_frame_is_red() {
        let frame = Frame::default();
        assert_eq!(frame.as_bytes().len(), FRAME_LEN);
        for chunk in frame.as_bytes().chunks(BYTES_PER_ZONE) {
            assert_eq!(chunk, &[0x00, 0xff, 0x00]);
        }
        assert_eq!(frame.to_packed(), [DEFAULT_COLOR; ZONE_COUNT]);
    }

    #[test]
    fn top_byte_is_ignored() {
        let frame = Frame::uniform(0xab00ff00);
        assert_eq!(frame.to_packed(), [0x00ff00; ZONE_COUNT]);
    }

    #[test]
    fn dark_detection() {
        assert!(Frame::dark().is_dark());
        assert!(Frame::uniform(0).is_dark());
        let mut frame = Frame::dark();
        frame.set_zone(ZoneIndex::new(7).unwrap(), 0x000001);
        assert!(!frame.is_dark());
    }
}
