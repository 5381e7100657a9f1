/// Source of uniform draws in `[0, 1)` for scene generation
pub trait RandomSource {
    /// Next draw in `[0, 1)`
    fn next_unit(&mut self) -> f32;

    /// Draw in `[-0.5, 0.5)`
    fn next_centered(&mut self) -> f32 {
        self.next_unit() - 0.5
    }

    /// Index in `0..len`; `len` must be non-zero
    fn next_index(&mut self, len: usize) -> usize {
        ((self.next_unit() * len as f32) as usize).min(len - 1)
    }
}
