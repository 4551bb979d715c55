//! Compressed curve packs: a postcard-encoded `CurvePackRecord`, zstd framed.

use pbflot_data::CurvePackRecord;

use crate::curves::CurveSet;
use crate::error::{FlotationError, Result};

/// Decodes an uncompressed postcard record.
pub fn decode_record(bytes: &[u8]) -> Result<CurvePackRecord> {
    postcard::from_bytes(bytes)
        .map_err(|e| FlotationError::DataError(format!("malformed curve pack: {e}")))
}

/// Decompresses and decodes a curve pack.
pub fn decode_pack(compressed: &[u8]) -> Result<CurvePackRecord> {
    let mut decoder = ruzstd::decoding::StreamingDecoder::new(compressed)
        .map_err(|e| FlotationError::DataError(format!("not a zstd curve pack: {e:?}")))?;
    let mut decompressed = Vec::new();
    std::io::Read::read_to_end(&mut decoder, &mut decompressed)
        .map_err(|e| FlotationError::DataError(format!("failed to decompress curve pack: {e}")))?;
    decode_record(&decompressed)
}

/// Encodes a record with postcard, uncompressed.
pub fn encode_record(record: &CurvePackRecord) -> Result<Vec<u8>> {
    postcard::to_allocvec(record)
        .map_err(|e| FlotationError::DataError(format!("failed to encode curve pack: {e}")))
}

impl CurveSet {
    pub fn from_postcard(bytes: &[u8]) -> Result<Self> {
        Self::from_record(&decode_record(bytes)?)
    }

    pub fn from_pack(compressed: &[u8]) -> Result<Self> {
        let record = decode_pack(compressed)?;
        log::debug!(
            "decoded curve pack: {} tables, {} version entries",
            record.tables.len(),
            record.version.len()
        );
        Self::from_record(&record)
    }
}
