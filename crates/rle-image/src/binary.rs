//! # Binary layout
//!
//! All fields are little-endian `u32` without padding:
//!
//! ```text
//! width
//! height
//! transition_count
//! transition_indices[transition_count]
//! ```
//!
//! Bytes after the last index are ignored when reading.

use std::io::{self, Read, Write};

use log::trace;
use nom::{
    combinator::map,
    error::{Error, ParseError},
    multi::count,
    number::complete::le_u32,
    sequence::tuple,
    IResult,
};

use crate::{EncodedImage, RleError, RleResult};

/// The size of the fixed header in bytes
pub const HEADER_LEN: usize = 12;

const FIELD_LEN: usize = 4;

#[derive(Debug, Copy, Clone, PartialEq, Eq)]
struct Header {
    width: u32,
    height: u32,
    count: u32,
}

impl Header {
    /// Reject headers that no raster can produce
    ///
    /// The pixel count must stay below `u32::MAX`, and a raster of `n`
    /// pixels has at most `n + 1` transitions (including the closing one).
    fn check(self) -> RleResult<Self> {
        let pixels = u64::from(self.width) * u64::from(self.height);
        if pixels >= u64::from(u32::MAX) || u64::from(self.count) > pixels + 1 {
            return Err(RleError::MalformedHeader {
                width: self.width,
                height: self.height,
                count: self.count,
            });
        }
        Ok(self)
    }

    fn body_len(self) -> usize {
        (self.count as usize).saturating_mul(FIELD_LEN)
    }

    fn stream_len(self) -> usize {
        HEADER_LEN.saturating_add(self.body_len())
    }
}

fn p_header<'a, E: ParseError<&'a [u8]>>(input: &'a [u8]) -> IResult<&'a [u8], Header, E> {
    map(tuple((le_u32, le_u32, le_u32)), |(width, height, count)| {
        Header {
            width,
            height,
            count,
        }
    })(input)
}

fn p_indices<'a, E: ParseError<&'a [u8]>>(
    header: Header,
) -> impl FnMut(&'a [u8]) -> IResult<&'a [u8], Vec<u32>, E> {
    count(le_u32, header.count as usize)
}

/// The value of the count field for `len` indices
fn count_field(len: usize) -> u32 {
    debug_assert!(
        len <= u32::MAX as usize,
        "{} transitions do not fit the count field",
        len
    );
    len as u32
}

impl EncodedImage {
    /// Serialize the image into a new buffer
    pub fn to_bytes(&self) -> Vec<u8> {
        let mut out = Vec::with_capacity(HEADER_LEN + self.indices().len() * FIELD_LEN);
        put_u32(&mut out, self.width());
        put_u32(&mut out, self.height());
        put_u32(&mut out, count_field(self.indices().len()));
        for &index in self.indices() {
            put_u32(&mut out, index);
        }
        out
    }

    /// Serialize the image into a writer
    pub fn write_to<W: Write>(&self, mut out: W) -> io::Result<()> {
        out.write_all(&self.to_bytes())
    }

    /// Deserialize an image from a buffer
    ///
    /// Bytes after the last index are ignored.
    pub fn from_bytes(bytes: &[u8]) -> RleResult<Self> {
        let (rest, header) =
            p_header::<Error<&[u8]>>(bytes).map_err(|_| RleError::TruncatedStream {
                expected: HEADER_LEN,
                actual: bytes.len(),
            })?;
        let header = header.check()?;
        trace!(
            "header {}x{}, {} transitions",
            header.width,
            header.height,
            header.count
        );

        let truncated = RleError::TruncatedStream {
            expected: header.stream_len(),
            actual: bytes.len(),
        };
        if rest.len() < header.body_len() {
            return Err(truncated);
        }
        let (_, indices) = p_indices::<Error<&[u8]>>(header)(rest).map_err(|_| truncated)?;
        Ok(Self::from_parts(header.width, header.height, indices))
    }

    /// Deserialize an image from a reader
    ///
    /// Exactly the bytes declared by the header are consumed.
    pub fn read_from<R: Read>(mut input: R) -> RleResult<Self> {
        let mut buffer = Vec::with_capacity(HEADER_LEN);
        (&mut input)
            .take(HEADER_LEN as u64)
            .read_to_end(&mut buffer)?;
        let header = p_header::<Error<&[u8]>>(&buffer).ok().map(|(_, header)| header);
        if let Some(header) = header {
            let header = header.check()?;
            input
                .take(header.body_len() as u64)
                .read_to_end(&mut buffer)?;
        }
        Self::from_bytes(&buffer)
    }
}

fn put_u32(out: &mut Vec<u8>, value: u32) {
    out.extend_from_slice(&value.to_le_bytes());
}

#[cfg(test)]
mod tests {
    use std::io::{self, Read};

    use super::{count_field, HEADER_LEN};
    use crate::{EncodedImage, Point, RleError};

    #[test]
    fn test_layout() {
        let image = EncodedImage::from_parts(4, 1, vec![1, 3]);
        assert_eq!(
            image.to_bytes(),
            vec![
                4, 0, 0, 0, // width
                1, 0, 0, 0, // height
                2, 0, 0, 0, // count
                1, 0, 0, 0, //
                3, 0, 0, 0, //
            ]
        );
    }

    #[test]
    fn test_read_refreshes_points() {
        let bytes = [
            4, 0, 0, 0, 1, 0, 0, 0, 2, 0, 0, 0, 1, 0, 0, 0, 3, 0, 0, 0, 0xAA, 0xBB,
        ];
        let image = EncodedImage::from_bytes(&bytes).unwrap();
        assert_eq!(image.indices(), &[1, 3]);
        assert_eq!(image.points(), &[Point::new(1, 0), Point::new(3, 0)]);
    }

    #[test]
    fn test_write_to() {
        let image = EncodedImage::from_parts(300, 2, vec![256, 599]);
        let mut out = Vec::new();
        image.write_to(&mut out).unwrap();
        assert_eq!(out, image.to_bytes());
        assert_eq!(&out[..4], &[44, 1, 0, 0]);
    }

    #[test]
    fn test_short_header() {
        match EncodedImage::from_bytes(&[1, 0, 0, 0, 1]) {
            Err(RleError::TruncatedStream { expected, actual }) => {
                assert_eq!((expected, actual), (HEADER_LEN, 5));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_short_body() {
        let mut bytes = EncodedImage::from_parts(4, 4, vec![1, 3, 5, 7]).to_bytes();
        bytes.truncate(bytes.len() - 2);
        match EncodedImage::from_bytes(&bytes) {
            Err(RleError::TruncatedStream { expected, actual }) => {
                assert_eq!((expected, actual), (28, 26));
            }
            other => panic!("unexpected {:?}", other),
        }
    }

    #[test]
    fn test_huge_count_without_data() {
        let bytes = [1, 0, 0, 0, 1, 0, 0, 0, 0xFF, 0xFF, 0xFF, 0xFF];
        match EncodedImage::from_bytes(&bytes) {
            Err(RleError::MalformedHeader {
                width,
                height,
                count,
            }) => {
                assert_eq!((width, height, count), (1, 1, u32::MAX));
            }
            other => panic!("unexpected {:?}", other),
        }
        assert!(matches!(
            EncodedImage::read_from(&bytes[..]),
            Err(RleError::MalformedHeader { .. })
        ));
    }

    #[test]
    fn test_too_many_transitions() {
        // 2 pixels allow at most 3 transitions
        let ok = EncodedImage::from_parts(2, 1, vec![0, 1, 1]).to_bytes();
        assert!(EncodedImage::from_bytes(&ok).is_ok());
        let bad = EncodedImage::from_parts(2, 1, vec![0, 1, 1, 1]).to_bytes();
        assert!(matches!(
            EncodedImage::from_bytes(&bad),
            Err(RleError::MalformedHeader { count: 4, .. })
        ));
    }

    #[test]
    fn test_huge_dimensions() {
        let bytes = EncodedImage::from_parts(u32::MAX, u32::MAX, vec![1, 3]).to_bytes();
        assert_eq!(bytes.len(), 20);
        assert!(matches!(
            EncodedImage::from_bytes(&bytes),
            Err(RleError::MalformedHeader { .. })
        ));

        // one pixel short of the limit is fine
        let bytes = EncodedImage::from_parts(u32::MAX - 1, 1, vec![1, 3]).to_bytes();
        assert!(EncodedImage::from_bytes(&bytes).is_ok());
    }

    #[test]
    fn test_count_field() {
        assert_eq!(count_field(0), 0);
        assert_eq!(count_field(u32::MAX as usize), u32::MAX);
    }

    #[cfg(all(debug_assertions, target_pointer_width = "64"))]
    #[test]
    #[should_panic]
    fn test_count_field_overflow() {
        count_field(u32::MAX as usize + 1);
    }

    struct Broken;

    impl Read for Broken {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::new(io::ErrorKind::Other, "broken"))
        }
    }

    #[test]
    fn test_io_error() {
        assert!(matches!(
            EncodedImage::read_from(Broken),
            Err(RleError::Io(_))
        ));
    }

    #[test]
    fn test_reader_stops_after_image() {
        let first = EncodedImage::from_parts(2, 2, vec![0, 3]);
        let second = EncodedImage::from_parts(3, 1, vec![1, 2]);
        let mut bytes = first.to_bytes();
        bytes.extend(second.to_bytes());

        let mut reader = &bytes[..];
        assert_eq!(EncodedImage::read_from(&mut reader).unwrap(), first);
        assert_eq!(EncodedImage::read_from(&mut reader).unwrap(), second);
        assert!(reader.is_empty());
    }
}
