//! The `KLGM` dictionary archive container format: a flat, named-file
//! table over one blob, enough to persist the packed dictionary, the
//! POS/lemma intern tables, and the transition-model table together.

use crate::error::{AnalyzerError, Result};

const MAGIC: &[u8; 4] = b"KLGM";
const VERSION_MAJOR: u8 = 1;
const VERSION_MINOR: u8 = 0;
const HEADER_LEN: usize = 4 + 2 + 2 + 8;
const ENTRY_FIXED_LEN: usize = 2 + 8 + 8;

/// One named file recovered from (or to be written into) an archive.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ArchiveFile {
    pub name: String,
    pub data: Vec<u8>,
}

/// Serialize a set of named files into the `KLGM` container format.
pub fn write_archive(files: &[ArchiveFile]) -> Vec<u8> {
    let mut table = Vec::new();
    let mut blob = Vec::new();
    let mut offset = HEADER_LEN + files.iter().map(|f| ENTRY_FIXED_LEN + f.name.len()).sum::<usize>();
    for file in files {
        let name_bytes = file.name.as_bytes();
        table.extend_from_slice(&(name_bytes.len() as u16).to_le_bytes());
        table.extend_from_slice(name_bytes);
        table.extend_from_slice(&(file.data.len() as u64).to_le_bytes());
        table.extend_from_slice(&(offset as u64).to_le_bytes());
        blob.extend_from_slice(&file.data);
        offset += file.data.len();
    }

    let mut out = Vec::with_capacity(HEADER_LEN + table.len() + blob.len());
    out.extend_from_slice(MAGIC);
    out.push(VERSION_MAJOR);
    out.push(VERSION_MINOR);
    out.extend_from_slice(&(files.len() as u16).to_le_bytes());
    out.extend_from_slice(&[0u8; 8]);
    out.extend_from_slice(&table);
    out.extend_from_slice(&blob);
    out
}

/// Parse the `KLGM` container format, returning `DataCorruption` if the
/// magic bytes do not match or a declared file offset/size runs past
/// the end of `bytes`.
pub fn read_archive(bytes: &[u8]) -> Result<Vec<ArchiveFile>> {
    if bytes.len() < HEADER_LEN {
        return Err(AnalyzerError::DataCorruption("archive shorter than header".into()));
    }
    if &bytes[0..4] != MAGIC {
        return Err(AnalyzerError::DataCorruption(format!(
            "bad magic bytes: {:?}",
            &bytes[0..4]
        )));
    }
    let file_count = u16::from_le_bytes([bytes[6], bytes[7]]) as usize;

    let mut cursor = HEADER_LEN;
    let mut entries = Vec::with_capacity(file_count);
    for _ in 0..file_count {
        if cursor + 2 > bytes.len() {
            return Err(AnalyzerError::DataCorruption("truncated file table entry".into()));
        }
        let name_len = u16::from_le_bytes([bytes[cursor], bytes[cursor + 1]]) as usize;
        cursor += 2;
        if cursor + name_len + 16 > bytes.len() {
            return Err(AnalyzerError::DataCorruption("truncated file table entry".into()));
        }
        let name = std::str::from_utf8(&bytes[cursor..cursor + name_len])
            .map_err(|e| AnalyzerError::DataCorruption(format!("non-UTF8 file name: {e}")))?
            .to_string();
        cursor += name_len;
        let size = u64::from_le_bytes(bytes[cursor..cursor + 8].try_into().unwrap()) as usize;
        cursor += 8;
        let offset = u64::from_le_bytes(bytes[cursor..cursor + 8].try_into().unwrap()) as usize;
        cursor += 8;
        entries.push((name, offset, size));
    }

    let mut files = Vec::with_capacity(entries.len());
    for (name, offset, size) in entries {
        let end = offset.checked_add(size).ok_or_else(|| {
            AnalyzerError::DataCorruption(format!("offset/size overflow for {name:?}"))
        })?;
        if end > bytes.len() {
            return Err(AnalyzerError::DataCorruption(format!(
                "declared range for {name:?} ({offset}..{end}) outside archive of length {}",
                bytes.len()
            )));
        }
        files.push(ArchiveFile {
            name,
            data: bytes[offset..end].to_vec(),
        });
    }
    Ok(files)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trip_multiple_files() {
        let files = vec![
            ArchiveFile {
                name: "dictionary.json".into(),
                data: b"[]".to_vec(),
            },
            ArchiveFile {
                name: "pos.intern".into(),
                data: vec![1, 2, 3, 4],
            },
        ];
        let bytes = write_archive(&files);
        let parsed = read_archive(&bytes).unwrap();
        assert_eq!(parsed, files);
    }

    #[test]
    fn rejects_bad_magic() {
        let mut bytes = write_archive(&[]);
        bytes[0] = b'X';
        let err = read_archive(&bytes).unwrap_err();
        assert!(matches!(err, AnalyzerError::DataCorruption(_)));
    }

    #[test]
    fn rejects_out_of_range_offsets() {
        let mut bytes = write_archive(&[ArchiveFile {
            name: "a".into(),
            data: vec![1, 2, 3],
        }]);
        let len = bytes.len();
        bytes.truncate(len - 1);
        assert!(read_archive(&bytes).is_err());
    }

    #[test]
    fn empty_archive_round_trips() {
        let bytes = write_archive(&[]);
        assert_eq!(read_archive(&bytes).unwrap(), Vec::new());
    }
}
