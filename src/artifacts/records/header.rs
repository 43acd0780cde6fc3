use crate::artifacts::records::{FORMAT_VERSION, MAGIC};
use byteorder::{NetworkEndian, ReadBytesExt, WriteBytesExt};
use derive_new::new;
use std::io::{Read, Write};

pub(crate) const NOT_ENCODED_MESSAGE: &str = "Data was not produced by encode; \
    check that you are decoding the right file";

/// Header preceding every record payload
#[derive(Debug, Clone, PartialEq, Eq, new)]
pub struct RecordHeader {
    pub kind: String,
    pub version: u32,
}

impl RecordHeader {
    pub fn write_to<W: Write>(&self, writer: &mut W) -> anyhow::Result<()> {
        let kind_len = u16::try_from(self.kind.len())
            .map_err(|_| anyhow::anyhow!("Record kind is too long: {}", self.kind))?;

        writer.write_all(MAGIC)?;
        writer.write_u8(FORMAT_VERSION)?;
        writer.write_u16::<NetworkEndian>(kind_len)?;
        writer.write_all(self.kind.as_bytes())?;
        writer.write_u32::<NetworkEndian>(self.version)?;

        Ok(())
    }

    /// Read a header, leaving `reader` positioned at the payload
    ///
    /// The format version is checked before anything past it is read, since
    /// another format may lay out the rest of the header differently.
    pub fn read_from<R: Read>(reader: &mut R) -> anyhow::Result<Self> {
        let mut magic = [0u8; 4];
        if reader.read_exact(&mut magic).is_err() || &magic != MAGIC {
            anyhow::bail!(NOT_ENCODED_MESSAGE);
        }

        let format_version = reader.read_u8().map_err(Self::truncated)?;
        if format_version != FORMAT_VERSION {
            anyhow::bail!(
                "Record was encoded with format version {format_version}, but only version \
                {FORMAT_VERSION} can be read; the stored state is stale, discard it and \
                reinitialize the metadata directory"
            );
        }

        let kind_len = reader.read_u16::<NetworkEndian>().map_err(Self::truncated)?;
        let mut kind = vec![0; kind_len as usize];
        reader.read_exact(&mut kind).map_err(Self::truncated)?;
        let kind = String::from_utf8(kind)
            .map_err(|_| anyhow::anyhow!("Malformed record header: kind is not valid UTF-8"))?;

        let version = reader.read_u32::<NetworkEndian>().map_err(Self::truncated)?;

        Ok(RecordHeader { kind, version })
    }

    fn truncated(err: std::io::Error) -> anyhow::Error {
        anyhow::anyhow!("Malformed record header: {err}")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Cursor;

    #[test]
    fn layout_is_magic_format_kind_and_version() {
        let mut bytes = Vec::new();
        RecordHeader::new("commit".to_string(), 3)
            .write_to(&mut bytes)
            .unwrap();

        pretty_assertions::assert_eq!(
            bytes,
            [
                b"BREC".as_slice(),
                &[FORMAT_VERSION],
                &[0, 6],
                b"commit",
                &[0, 0, 0, 3]
            ]
            .concat()
        );
    }

    #[test]
    fn reader_stops_at_the_payload() {
        let mut bytes = Vec::new();
        RecordHeader::new("tree".to_string(), 1)
            .write_to(&mut bytes)
            .unwrap();
        bytes.extend_from_slice(b"payload");

        let mut reader = Cursor::new(bytes.as_slice());
        let header = RecordHeader::read_from(&mut reader).unwrap();

        pretty_assertions::assert_eq!(header, RecordHeader::new("tree".to_string(), 1));
        pretty_assertions::assert_eq!(&bytes[reader.position() as usize..], b"payload");
    }

    #[test]
    fn short_input_is_not_an_encoding() {
        let err = RecordHeader::read_from(&mut Cursor::new(b"BR".as_slice())).unwrap_err();
        assert!(err.to_string().contains("was not produced by encode"));
    }

    #[test]
    fn truncated_kind_is_malformed() {
        let bytes = [b"BREC".as_slice(), &[FORMAT_VERSION], &[0, 9], b"com"].concat();

        let err = RecordHeader::read_from(&mut Cursor::new(bytes.as_slice())).unwrap_err();
        assert!(err.to_string().starts_with("Malformed record header"));
    }
}
