//! Report digests.
//!
//! Running the same query twice against an unchanged world must produce the
//! same report. The digest is a SHA-256 over the ordered report content so
//! two runs can be compared without diffing full payloads.

use sha2::{Digest, Sha256};

use crate::report::SellReport;

/// Compute the digest of a report.
///
/// Depends on, in order:
/// - the item id and display name
/// - each section's currency (name and kind)
/// - each line's seller id, seller name, quantity and unit price
#[must_use]
pub fn compute_report_digest(report: &SellReport) -> [u8; 32] {
    let mut hasher = Sha256::new();
    hasher.update(b"tradescout:sell_report:v1:");
    hasher.update(report.item.id.0.to_le_bytes());
    hash_str(&mut hasher, &report.item.display_name);
    hasher.update((report.sections.len() as u64).to_le_bytes());

    for section in &report.sections {
        hash_str(&mut hasher, &section.currency.name);
        hasher.update([u8::from(section.currency.is_player_credit())]);
        hasher.update((section.lines.len() as u64).to_le_bytes());

        for line in &section.lines {
            hasher.update(line.seller_id.0.as_bytes());
            hash_str(&mut hasher, &line.seller_name);
            hasher.update(line.quantity.to_le_bytes());
            hash_str(&mut hasher, &line.unit_price.to_string());
        }
    }

    let result = hasher.finalize();
    let mut digest = [0u8; 32];
    digest.copy_from_slice(&result);
    digest
}

/// Length-prefixed so adjacent strings cannot collide.
fn hash_str(hasher: &mut Sha256, value: &str) {
    hasher.update((value.len() as u64).to_le_bytes());
    hasher.update(value.as_bytes());
}

/// Recompute and compare.
#[must_use]
pub fn verify_report_digest(report: &SellReport, expected: &[u8; 32]) -> bool {
    compute_report_digest(report) == *expected
}

/// Hex form, logged with every completed query.
#[must_use]
pub fn report_digest_hex(report: &SellReport) -> String {
    hex::encode(compute_report_digest(report))
}
