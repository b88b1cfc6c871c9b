use std::fmt;

/// Digest over the ordered canonical-name list of a registry.
///
/// Peers compare digests byte-for-byte to confirm they built the same table.
#[derive(Clone, Copy, PartialEq, Eq, Hash)]
pub struct TableHash([u8; blake3::OUT_LEN]);

impl TableHash {
	/// Hashes the UTF-8 bytes of `names`, concatenated without separators.
	pub fn of_names<'a, I>(names: I) -> Self
	where
		I: IntoIterator<Item = &'a str>,
	{
		let mut hasher = blake3::Hasher::new();
		for name in names {
			hasher.update(name.as_bytes());
		}
		Self(*hasher.finalize().as_bytes())
	}

	pub const fn from_bytes(bytes: [u8; blake3::OUT_LEN]) -> Self {
		Self(bytes)
	}

	pub const fn as_bytes(&self) -> &[u8; blake3::OUT_LEN] {
		&self.0
	}

	pub fn to_hex(&self) -> String {
		hex::encode(self.0)
	}
}

impl From<TableHash> for [u8; blake3::OUT_LEN] {
	fn from(hash: TableHash) -> Self {
		hash.0
	}
}

impl fmt::Display for TableHash {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(&self.to_hex())
	}
}

impl fmt::Debug for TableHash {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		write!(f, "TableHash({})", self.to_hex())
	}
}
