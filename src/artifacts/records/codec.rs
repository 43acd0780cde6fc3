use crate::artifacts::records::header::RecordHeader;
use crate::artifacts::records::record::Record;
use bytes::Bytes;
use std::io::Cursor;

/// Encode `record` into its self-describing byte form
///
/// The payload is decoded back before anything is returned, so a record whose
/// serde attributes produce output its own `Deserialize` impl rejects fails
/// here instead of when it is loaded.
pub fn encode<R: Record>(record: &R) -> anyhow::Result<Bytes> {
    let payload = serde_json::to_vec(record).map_err(|e| {
        anyhow::anyhow!(
            "Serialization error: make sure `{}` is serializable: {e}",
            R::KIND
        )
    })?;
    serde_json::from_slice::<R>(&payload).map_err(|e| {
        anyhow::anyhow!(
            "Serialization error: make sure `{}` is serializable, its encoding cannot be \
            decoded back: {e}",
            R::KIND
        )
    })?;

    let mut bytes = Vec::with_capacity(payload.len() + 16 + R::KIND.len());
    RecordHeader::new(R::KIND.to_string(), R::VERSION).write_to(&mut bytes)?;
    bytes.extend_from_slice(&payload);

    Ok(Bytes::from(bytes))
}

/// Decode bytes produced by [`encode`] back into a `R`
pub fn decode<R: Record>(bytes: &[u8]) -> anyhow::Result<R> {
    let mut reader = Cursor::new(bytes);
    let header = RecordHeader::read_from(&mut reader)?;

    if header.kind != R::KIND {
        anyhow::bail!(
            "Record type mismatch: expected `{}`, found `{}`",
            R::KIND,
            header.kind
        );
    }
    if header.version != R::VERSION {
        anyhow::bail!(
            "Record `{}` was written with schema version {}, but the current definition is \
            version {}; the stored state may be stale, discard it and reinitialize the \
            metadata directory",
            header.kind,
            header.version,
            R::VERSION
        );
    }

    let payload = &bytes[reader.position() as usize..];
    serde_json::from_slice(payload)
        .map_err(|e| anyhow::anyhow!("Malformed `{}` record: {e}", R::KIND))
}
