use crc32fast::Hasher;

/// Derive a stable note seed from a note identifier using CRC32.
fn note_seed(note_id: &str) -> String {
    let mut hasher = Hasher::new();
    hasher.update(note_id.as_bytes());
    format!("{:x}", hasher.finalize())
}

/// Sequential id generator for blocks within one note.
///
/// The engine never mints ids itself — callers create blocks with fresh ids
/// and hand them in. Ids are `{seed}-{n}` where the seed is the CRC32 of the
/// owning note's id, so blocks from different notes cannot collide and ids
/// within a note stay unique as long as a single generator is used per note.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    seed: String,
    count: u32,
}

impl IdGenerator {
    pub fn new(note_id: &str) -> Self {
        Self {
            seed: note_seed(note_id),
            count: 0,
        }
    }

    /// Resume from a known seed and counter (e.g. after reloading a note).
    pub fn from_seed(seed: String, count: u32) -> Self {
        Self { seed, count }
    }

    /// Generate the next block id.
    pub fn new_id(&mut self) -> String {
        self.count += 1;
        format!("{}-{}", self.seed, self.count)
    }

    pub fn seed(&self) -> &str {
        &self.seed
    }
}
