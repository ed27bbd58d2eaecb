//! Maximum payload sizes per data rate, keyed by protocol version and
//! regional-parameters revision.
//!
//! The regional-parameters document is versioned independently of the
//! device protocol version, so the ceilings form a sparse table keyed by
//! the `(MacVersion, Revision)` pair. Both axes carry a `Latest`
//! sentinel: a query for a version the table does not list resolves to
//! the `Latest` version row, and a revision the chosen row does not list
//! resolves to that row's `Latest` entry.

/// Device protocol (MAC) version.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum MacVersion {
    V1_0_2,
    V1_0_3,
    V1_1_0,
    /// Resolves to the newest protocol version the table knows.
    Latest,
}

/// Regional-parameters document revision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Revision {
    A,
    B,
    RP002_1_0_0,
    RP002_1_0_1,
    /// Resolves to the newest revision the version row knows.
    Latest,
}

/// Payload ceilings for one data rate: `m` caps the MAC payload plus
/// overhead, `n` caps the application payload. `m >= n` always.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt-03", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MaxPayloadSize {
    pub m: u8,
    pub n: u8,
}

type Entry = ((MacVersion, Revision), &'static [MaxPayloadSize]);

/// Sparse `(version, revision) -> per-DR ceilings` table.
#[derive(Debug, Clone, Copy)]
pub struct MaxPayloadTable {
    entries: &'static [Entry],
}

impl MaxPayloadTable {
    pub const fn new(entries: &'static [Entry]) -> Self {
        Self { entries }
    }

    /// Looks up the ceilings for a data rate, applying the `Latest`
    /// resolution rule on both axes.
    pub fn get(
        &self,
        mac_version: MacVersion,
        revision: Revision,
        dr: u8,
    ) -> Option<MaxPayloadSize> {
        let version = if self.entries.iter().any(|((v, _), _)| *v == mac_version) {
            mac_version
        } else {
            MacVersion::Latest
        };
        let sizes = self
            .entries
            .iter()
            .find(|((v, r), _)| *v == version && *r == revision)
            .or_else(|| {
                self.entries.iter().find(|((v, r), _)| *v == version && *r == Revision::Latest)
            })
            .map(|(_, sizes)| *sizes)?;
        sizes.get(dr as usize).copied()
    }

    /// Whether a `(Latest, Latest)` row exists, so the resolution rule
    /// can never fall off the table.
    pub(crate) fn has_latest(&self) -> bool {
        self.entries
            .iter()
            .any(|((v, r), _)| *v == MacVersion::Latest && *r == Revision::Latest)
    }

    pub(crate) fn rows(&self) -> impl Iterator<Item = &'static [MaxPayloadSize]> + '_ {
        self.entries.iter().map(|(_, sizes)| *sizes)
    }
}
