use std::io::{Cursor, Error, Read, Write};

use flate2::{read::ZlibDecoder, write::ZlibEncoder, Compression};
use varint::{VarintRead, VarintWrite};

use crate::TAPE_SIZE;

pub struct HeaderData {
    pub header_version: u32,
    pub version: u32, // the yBrainfuck dialect
    pub tape_size: u32,
    pub info_string: String,
}

impl Default for HeaderData {
    fn default() -> Self {
        HeaderData {
            header_version: 1,
            version: 2,
            tape_size: TAPE_SIZE as u32,
            info_string: String::new(),
        }
    }
}

fn encode_u32(encoder: &mut Cursor<Vec<u8>>, data: u32) -> Result<(), Error> {
    encoder.write_unsigned_varint_32(data)
}

fn encode_str(encoder: &mut Cursor<Vec<u8>>, data: &str) -> Result<(), Error> {
    encode_u32(encoder, data.len() as u32)?;
    encoder.write(data.as_bytes()).map(|_| ())
}

fn decode_str(encoder: &mut Cursor<Vec<u8>>) -> Result<String, Error> {
    let len = decode_u32(encoder)?;
    let mut buf = vec![0; len as usize];
    encoder.read(&mut buf)?;
    Ok(String::from_utf8_lossy(&buf).to_string())
}

fn decode_u32(encoder: &mut Cursor<Vec<u8>>) -> Result<u32, Error> {
    encoder.read_unsigned_varint_32()
}

/// Decodes a tape snapshot. The returned image only covers the cells up
/// to the last nonzero one; everything past it is zero.
pub fn decode_bytes(bytes: &[u8]) -> Result<(HeaderData, Vec<u8>), Error> {
    let mut encoded = Cursor::new(bytes.to_vec());
    let header = HeaderData {
        header_version: decode_u32(&mut encoded)?,
        version: decode_u32(&mut encoded)?,
        tape_size: decode_u32(&mut encoded)?,
        info_string: decode_str(&mut encoded)?,
    };

    let length = decode_u32(&mut encoded)?;
    let mut payload = Vec::new();
    encoded.read_to_end(&mut payload)?;
    let mut cells = Vec::with_capacity(length as usize);
    ZlibDecoder::new(Cursor::new(payload)).read_to_end(&mut cells)?;
    Ok((header, cells))
}

pub fn encode_to_bytes(header: HeaderData, tape_cells: &[u8]) -> Result<Vec<u8>, Error> {
    let image = tape_cells
        .iter()
        .rposition(|x| *x != 0)
        .map(|last| &tape_cells[..=last])
        .unwrap_or(&[]);
    let mut encoded = Cursor::new(Vec::new());
    encode_u32(&mut encoded, header.header_version)?;
    encode_u32(&mut encoded, header.version)?;
    encode_u32(&mut encoded, header.tape_size)?;
    encode_str(&mut encoded, &header.info_string)?;
    encode_u32(&mut encoded, image.len() as u32)?;
    let mut compressor = ZlibEncoder::new(Vec::new(), Compression::default());
    compressor.write_all(image)?;
    let mut encoded = encoded.into_inner();
    encoded.append(&mut compressor.finish()?);
    Ok(encoded)
}
