use sha2::{Digest, Sha256};

/// Compute a stable SHA-256 fingerprint for a resource issue.
///
/// Identity fields:
/// - check_id
/// - resource kind
/// - resource name
/// - file path (as loaded)
pub fn fingerprint_for_resource(check_id: &str, kind: &str, name: &str, path: &str) -> String {
    let canonical = [check_id, kind, name, path].join("|");

    let mut hasher = Sha256::new();
    hasher.update(canonical.as_bytes());
    let digest = hasher.finalize();
    hex::encode(digest)
}
