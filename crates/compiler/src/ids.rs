use sha2::{Digest, Sha256};

/// Bytes of digest kept in derived ids (16 hex chars).
const ID_DIGEST_BYTES: usize = 8;

/// Stable roadmap item id for a finding.
pub fn item_id(finding_id: &str) -> String {
    format!("item-{}", short_digest(&[finding_id.as_bytes()]))
}

/// Stable roadmap id for a firm/version pair.
pub fn roadmap_id(firm_id: &str, version: &str) -> String {
    format!(
        "roadmap-{}",
        short_digest(&[firm_id.as_bytes(), b"\0", version.as_bytes()])
    )
}

fn short_digest(parts: &[&[u8]]) -> String {
    let mut hasher = Sha256::new();
    for part in parts {
        hasher.update(part);
    }
    let digest = hasher.finalize();
    to_lower_hex(&digest[..ID_DIGEST_BYTES])
}

fn to_lower_hex(bytes: &[u8]) -> String {
    const LUT: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(bytes.len() * 2);
    for byte in bytes {
        out.push(LUT[(byte >> 4) as usize] as char);
        out.push(LUT[(byte & 0x0f) as usize] as char);
    }
    out
}
