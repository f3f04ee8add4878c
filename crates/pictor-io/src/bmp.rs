//! BMP image format support
//!
//! Reads and writes uncompressed Windows bitmaps: 8-bit grayscale with a
//! 256-entry palette and 24-bit RGB stored as BGR. Rows live bottom-up in
//! the file, padded to 4-byte boundaries.

use crate::{IoError, IoResult};
use pictor_core::pixel::PixelFormat;
use pictor_core::{Gray, Image, Rgb};
use std::fs::File;
use std::io::{BufReader, BufWriter, Read, Write};
use std::path::Path;

/// Combined BITMAPFILEHEADER + BITMAPINFOHEADER size
const BMP_HEADER_SIZE: usize = 54;

/// BITMAPINFOHEADER size field value
const BMP_INFO_HEADER_SIZE: u32 = 40;

/// 8-bit files carry a 256-entry BGRA palette
const BMP_PALETTE_SIZE: usize = 4 * 256;

/// Pixel formats the BMP codec can store.
pub trait BmpPixel: PixelFormat {
    /// Bits per pixel in the file.
    const BIT_COUNT: u16;
    /// Emit the channels in file order (reversed, so BGR for RGB data).
    fn write_channels(self, out: &mut [u8]);
    /// Read the channels back from file order.
    fn read_channels(data: &[u8]) -> Self;
}

impl BmpPixel for Gray {
    const BIT_COUNT: u16 = 8;

    #[inline]
    fn write_channels(self, out: &mut [u8]) {
        out[0] = self.l;
    }

    #[inline]
    fn read_channels(data: &[u8]) -> Self {
        Gray::new(data[0])
    }
}

impl BmpPixel for Rgb {
    const BIT_COUNT: u16 = 24;

    #[inline]
    fn write_channels(self, out: &mut [u8]) {
        out[0] = self.b;
        out[1] = self.g;
        out[2] = self.r;
    }

    #[inline]
    fn read_channels(data: &[u8]) -> Self {
        Rgb::new(data[2], data[1], data[0])
    }
}

/// Zero-padding appended to each row to reach a 4-byte boundary.
#[inline]
fn row_padding(width: i32, bytes_per_pixel: usize) -> usize {
    (4 - (width as usize * bytes_per_pixel) % 4) % 4
}

/// Parsed header fields the codec acts on.
struct BmpHeader {
    off_bits: u32,
    width: i32,
    height: i32,
    bit_count: u16,
    compression: u32,
}

impl BmpHeader {
    fn parse(bytes: &[u8; BMP_HEADER_SIZE]) -> IoResult<Self> {
        if &bytes[0..2] != b"BM" {
            return Err(IoError::InvalidData("not a BMP file".to_string()));
        }

        let off_bits = u32::from_le_bytes(bytes[10..14].try_into().unwrap());
        let width = i32::from_le_bytes(bytes[18..22].try_into().unwrap());
        let height = i32::from_le_bytes(bytes[22..26].try_into().unwrap());
        let planes = u16::from_le_bytes(bytes[26..28].try_into().unwrap());
        let bit_count = u16::from_le_bytes(bytes[28..30].try_into().unwrap());
        let compression = u32::from_le_bytes(bytes[30..34].try_into().unwrap());

        if planes != 1 {
            return Err(IoError::InvalidData(format!(
                "unsupported number of planes: {}",
                planes
            )));
        }

        Ok(BmpHeader {
            off_bits,
            width,
            height,
            bit_count,
            compression,
        })
    }

    fn validate_for<P: BmpPixel>(&self) -> IoResult<()> {
        if self.compression != 0 {
            return Err(IoError::UnsupportedFormat(format!(
                "unsupported BMP compression: {}",
                self.compression
            )));
        }
        if self.bit_count != 8 && self.bit_count != 24 {
            return Err(IoError::UnsupportedBitDepth(self.bit_count));
        }
        if self.bit_count != P::BIT_COUNT {
            return Err(IoError::DepthMismatch {
                expected: P::BIT_COUNT,
                found: self.bit_count,
            });
        }
        if self.width <= 0 || self.height <= 0 {
            return Err(IoError::InvalidData(format!(
                "invalid BMP dimensions: {}x{}",
                self.width, self.height
            )));
        }
        Ok(())
    }

    /// Offset of the pixel data from the start of the file.
    ///
    /// A non-zero `bfOffBits` is authoritative and already covers any
    /// palette; only when it is missing does the palette size get added.
    fn pixel_offset(&self) -> usize {
        if self.off_bits != 0 {
            self.off_bits as usize
        } else if self.bit_count == 8 {
            BMP_HEADER_SIZE + BMP_PALETTE_SIZE
        } else {
            BMP_HEADER_SIZE
        }
    }
}

/// Write an image as BMP to a stream.
pub fn write_bmp<P: BmpPixel, W: Write>(image: &Image<P>, mut writer: W) -> IoResult<()> {
    let width = image.width();
    let height = image.height();
    let padding = row_padding(width, P::BYTES);

    let size_image = (image.len() * P::BYTES) as u32;
    let mut off_bits = BMP_HEADER_SIZE as u32;
    if P::BIT_COUNT == 8 {
        off_bits += BMP_PALETTE_SIZE as u32;
    }
    let file_size = off_bits + size_image;

    // BITMAPFILEHEADER
    writer.write_all(b"BM")?;
    writer.write_all(&file_size.to_le_bytes())?;
    writer.write_all(&[0u8; 4])?; // Reserved
    writer.write_all(&off_bits.to_le_bytes())?;

    // BITMAPINFOHEADER
    writer.write_all(&BMP_INFO_HEADER_SIZE.to_le_bytes())?;
    writer.write_all(&width.to_le_bytes())?;
    writer.write_all(&height.to_le_bytes())?; // Positive: bottom-up
    writer.write_all(&1u16.to_le_bytes())?; // Planes
    writer.write_all(&P::BIT_COUNT.to_le_bytes())?;
    writer.write_all(&0u32.to_le_bytes())?; // Compression
    writer.write_all(&size_image.to_le_bytes())?;
    writer.write_all(&0i32.to_le_bytes())?; // X pixels per meter
    writer.write_all(&0i32.to_le_bytes())?; // Y pixels per meter
    writer.write_all(&0u32.to_le_bytes())?; // Colors used
    writer.write_all(&0u32.to_le_bytes())?; // Important colors

    // Grayscale palette
    if P::BIT_COUNT == 8 {
        for i in 0..=255u8 {
            writer.write_all(&[i, i, i, 255])?;
        }
    }

    // Pixel rows, bottom-up
    let mut row_buffer = vec![0u8; width as usize * P::BYTES + padding];
    for y in (0..height).rev() {
        for x in 0..width {
            let start = x as usize * P::BYTES;
            image
                .get_pixel_unchecked(x, y)
                .write_channels(&mut row_buffer[start..start + P::BYTES]);
        }
        writer.write_all(&row_buffer)?;
    }

    Ok(())
}

/// Read a BMP image from a stream.
pub fn read_bmp<P: BmpPixel, R: Read>(mut reader: R) -> IoResult<Image<P>> {
    let mut header_bytes = [0u8; BMP_HEADER_SIZE];
    reader.read_exact(&mut header_bytes)?;
    let header = BmpHeader::parse(&header_bytes)?;
    header.validate_for::<P>()?;

    // Skip forward to the pixel data without seeking.
    let skip = header.pixel_offset().saturating_sub(BMP_HEADER_SIZE);
    if skip > 0 {
        let mut discard = vec![0u8; skip];
        reader.read_exact(&mut discard)?;
    }

    let width = header.width;
    let height = header.height;
    let padding = row_padding(width, P::BYTES);
    let mut image = Image::<P>::new(width, height)?;
    let mut row_buffer = vec![0u8; width as usize * P::BYTES + padding];

    for y in (0..height).rev() {
        reader.read_exact(&mut row_buffer)?;
        for x in 0..width {
            let start = x as usize * P::BYTES;
            image.set_pixel_unchecked(x, y, P::read_channels(&row_buffer[start..start + P::BYTES]));
        }
    }

    Ok(image)
}

/// Read a BMP image from an in-memory byte buffer.
///
/// Zero-seek variant: the header offsets index directly into the slice.
pub fn read_bmp_bytes<P: BmpPixel>(data: &[u8]) -> IoResult<Image<P>> {
    if data.len() < BMP_HEADER_SIZE {
        return Err(IoError::InvalidData("truncated BMP header".to_string()));
    }
    let header_bytes: &[u8; BMP_HEADER_SIZE] = data[..BMP_HEADER_SIZE].try_into().unwrap();
    let header = BmpHeader::parse(header_bytes)?;
    header.validate_for::<P>()?;

    let width = header.width;
    let height = header.height;
    let padding = row_padding(width, P::BYTES);
    let row_stride = width as usize * P::BYTES + padding;
    let offset = header.pixel_offset();

    let needed = offset + row_stride * height as usize;
    if data.len() < needed {
        return Err(IoError::InvalidData(format!(
            "truncated BMP pixel data: {} bytes, need {}",
            data.len(),
            needed
        )));
    }

    let mut image = Image::<P>::new(width, height)?;
    let mut index = offset;

    for y in (0..height).rev() {
        for x in 0..width {
            image.set_pixel_unchecked(x, y, P::read_channels(&data[index..index + P::BYTES]));
            index += P::BYTES;
        }
        index += padding;
    }

    Ok(image)
}

/// Write a BMP file at `path`.
pub fn write_bmp_file<P: BmpPixel>(image: &Image<P>, path: impl AsRef<Path>) -> IoResult<()> {
    let file = File::create(path)?;
    let mut writer = BufWriter::new(file);
    write_bmp(image, &mut writer)?;
    writer.flush()?;
    Ok(())
}

/// Read a BMP file at `path`.
pub fn read_bmp_file<P: BmpPixel>(path: impl AsRef<Path>) -> IoResult<Image<P>> {
    let file = File::open(path)?;
    read_bmp(BufReader::new(file))
}
