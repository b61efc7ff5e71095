use num_bigint::BigUint;
use std::ffi::OsString;

/// A seed with the point recorded for it
#[derive(Debug, Clone)]
pub struct KnownSeed {
    pub seed: &'static str,
    /// Recorded point as a big-endian integer, stored as its 32 bytes
    pub expected: [u8; 32],
}

impl KnownSeed {
    pub const fn new(seed: &'static str, expected: [u8; 32]) -> Self {
        Self { seed, expected }
    }
}

/// Seeds used for the PAKE's fixed points
pub const KNOWN_SEEDS: &[KnownSeed] = &[
    // 41821174510521985817056358996007359290163947216650231187782646151092828043509
    KnownSeed::new(
        "croc1",
        [
            0x5c, 0x75, 0xf2, 0x29, 0x3b, 0xe7, 0x87, 0x42, 0x79, 0x99, 0xbc, 0xcd, 0x95, 0x5a,
            0xab, 0xa0, 0xef, 0x19, 0xd5, 0x65, 0x9a, 0x8e, 0xb2, 0xae, 0x3e, 0x6c, 0x08, 0x37,
            0x20, 0x96, 0xf8, 0xf5,
        ],
    ),
    // 1456941786990260824647297143563623381366314063537015067473110401627488371271
    KnownSeed::new(
        "croc2",
        [
            0x03, 0x38, 0x99, 0x8e, 0x5f, 0xfe, 0x8e, 0xa1, 0x45, 0x68, 0x04, 0xf2, 0x3b, 0xe6,
            0x1d, 0xf1, 0x73, 0xaa, 0x18, 0x57, 0xd5, 0x53, 0xa9, 0xcd, 0xa6, 0x7b, 0x60, 0x64,
            0x5f, 0xb5, 0xc2, 0x47,
        ],
    ),
];

/// One unit of work for the runner
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SeedEntry {
    pub seed: OsString,
    pub expected: BigUint,
}

impl SeedEntry {
    pub fn new(seed: impl Into<OsString>, expected: BigUint) -> Self {
        Self {
            seed: seed.into(),
            expected,
        }
    }

    /// Seed rendered for display, with invalid UTF-8 replaced
    pub fn display_seed(&self) -> String {
        self.seed.to_string_lossy().into_owned()
    }
}

impl From<&KnownSeed> for SeedEntry {
    fn from(known: &KnownSeed) -> Self {
        Self::new(known.seed, BigUint::from_bytes_be(&known.expected))
    }
}

/// The compiled-in seed table in declaration order
pub fn default_entries() -> Vec<SeedEntry> {
    KNOWN_SEEDS.iter().map(SeedEntry::from).collect()
}

/// Find a compiled-in seed by name
pub fn find_known_seed(seed: &str) -> Option<&'static KnownSeed> {
    KNOWN_SEEDS.iter().find(|known| known.seed == seed)
}
