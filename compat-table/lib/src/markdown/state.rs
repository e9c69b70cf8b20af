//! Per-document render state shared by block processors.

use xxhash_rust::xxh64::xxh64;

/// Generates element identifiers that are unique within one document render.
///
/// Identifiers combine a prefix derived from the document source with a
/// running counter, so two documents embedded in the same page are unlikely to
/// collide while a single document never repeats an identifier.
#[derive(Debug, Clone)]
pub struct IdGenerator {
    prefix: String,
    next: usize,
}

impl IdGenerator {
    /// Creates a generator whose prefix is derived from `source`.
    pub fn for_document(source: &str) -> Self {
        let hash = xxh64(source.as_bytes(), 0);
        Self {
            prefix: format!("{:08x}", (hash >> 32) as u32),
            next: 0,
        }
    }

    /// Returns the next identifier in `namespace`, e.g. `compat-dialog-1f2e3d4c-0`.
    pub fn next_id(&mut self, namespace: &str) -> String {
        let id = format!("{}-{}-{}", namespace, self.prefix, self.next);
        self.next += 1;
        id
    }

    /// Number of identifiers handed out so far.
    pub fn issued(&self) -> usize {
        self.next
    }
}

/// Mutable state threaded through every block processor during one render pass.
#[derive(Debug, Clone)]
pub struct RenderState {
    ids: IdGenerator,
}

impl RenderState {
    pub fn for_document(source: &str) -> Self {
        Self {
            ids: IdGenerator::for_document(source),
        }
    }

    pub fn ids(&self) -> &IdGenerator {
        &self.ids
    }

    pub fn ids_mut(&mut self) -> &mut IdGenerator {
        &mut self.ids
    }
}
