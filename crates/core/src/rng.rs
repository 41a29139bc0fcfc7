//! 7-bag random piece generation with a dealt-ahead preview queue.
//!
//! Each bag contains one of each kind (I, J, L, O, S, T, Z), shuffled
//! with Fisher-Yates. Pieces flow bag -> preview -> player, so the
//! preview always reflects the true upcoming order; the bag refills
//! while the preview is topped off, which lets a new bag's pieces show
//! in the preview before the old bag is fully dealt.

use arrayvec::ArrayVec;

use blockfall_types::{PieceKind, PREVIEW_LEN};

/// Simple LCG (Linear Congruential Generator) RNG.
/// Uses constants from Numerical Recipes.
#[derive(Debug, Clone)]
pub struct SimpleRng {
    state: u32,
}

impl SimpleRng {
    /// Create a new RNG with the given seed.
    pub fn new(seed: u32) -> Self {
        // Avoid 0 seed which would produce all zeros
        let state = if seed == 0 { 1 } else { seed };
        Self { state }
    }

    /// Resume an RNG at an exact previously observed state.
    pub fn from_state(state: u32) -> Self {
        Self { state }
    }

    /// Current internal state, for save/restore.
    pub fn state(&self) -> u32 {
        self.state
    }

    /// Generate next random u32.
    pub fn next_u32(&mut self) -> u32 {
        // LCG formula: (a * state + c) mod 2^32, a=1664525, c=1013904223
        self.state = self.state.wrapping_mul(1664525).wrapping_add(1013904223);
        self.state
    }

    /// Generate random value in range [0, max).
    pub fn next_range(&mut self, max: u32) -> u32 {
        self.next_u32() % max
    }

    /// Shuffle a slice using Fisher-Yates.
    pub fn shuffle<T>(&mut self, slice: &mut [T]) {
        for i in (1..slice.len()).rev() {
            let j = self.next_range((i + 1) as u32) as usize;
            slice.swap(i, j);
        }
    }
}

/// 7-bag piece generator with a fixed-length preview.
#[derive(Debug, Clone)]
pub struct BagRandomizer {
    /// Shuffled kinds not yet moved into the preview, dealt front-first.
    bag: ArrayVec<PieceKind, 7>,
    /// Upcoming kinds, front (index 0) is the next piece dealt.
    preview: ArrayVec<PieceKind, PREVIEW_LEN>,
    rng: SimpleRng,
}

impl BagRandomizer {
    /// Create a generator with the given seed; the preview starts full.
    pub fn new(seed: u32) -> Self {
        let mut queue = Self {
            bag: ArrayVec::new(),
            preview: ArrayVec::new(),
            rng: SimpleRng::new(seed),
        };
        queue.fill_bag();
        queue.top_off_preview();
        queue
    }

    /// Rebuild a generator from persisted parts.
    pub fn from_parts(
        bag: ArrayVec<PieceKind, 7>,
        preview: ArrayVec<PieceKind, PREVIEW_LEN>,
        rng_state: u32,
    ) -> Self {
        Self {
            bag,
            preview,
            rng: SimpleRng::from_state(rng_state),
        }
    }

    /// Reset the bag to all 7 kinds in a uniformly random order.
    fn fill_bag(&mut self) {
        self.bag.clear();
        for kind in PieceKind::ALL {
            self.bag.push(kind);
        }
        self.rng.shuffle(&mut self.bag);
    }

    /// Move pieces from the bag front to the preview back until the
    /// preview is full or the bag runs dry.
    fn top_off_preview(&mut self) {
        while self.preview.len() < PREVIEW_LEN && !self.bag.is_empty() {
            let piece = self.bag.remove(0);
            self.preview.push(piece);
        }
    }

    /// Deal the next piece and keep the preview topped off, refilling
    /// the bag when it empties.
    pub fn next_piece(&mut self) -> PieceKind {
        let piece = self.preview.remove(0);
        if self.bag.is_empty() {
            self.fill_bag();
        }
        self.top_off_preview();
        piece
    }

    /// Upcoming pieces in deal order, without mutation.
    pub fn preview(&self) -> &[PieceKind] {
        &self.preview
    }

    /// Preview as a fixed array. The preview is full at every point the
    /// controller observes it (`next_piece` always tops it back off).
    pub fn preview_array(&self) -> [PieceKind; PREVIEW_LEN] {
        let mut out = [PieceKind::I; PREVIEW_LEN];
        out.copy_from_slice(&self.preview);
        out
    }

    /// Kinds remaining in the current bag, in deal order.
    pub fn bag(&self) -> &[PieceKind] {
        &self.bag
    }

    /// RNG state, for save/restore.
    pub fn rng_state(&self) -> u32 {
        self.rng.state()
    }
}

impl Default for BagRandomizer {
    fn default() -> Self {
        Self::new(1)
    }
}
