use crate::list::{move_node, move_node_after, List};
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

/// The seed [`List::shuffle`] starts from on every call.
pub const SHUFFLE_SEED: u64 = 199;

impl<T> List<T> {
    /// Shuffle the list in place with a generator seeded by [`SHUFFLE_SEED`].
    ///
    /// The generator is reseeded on every call, so shuffling two equal lists
    /// gives the same permutation. Use [`List::shuffle_with`] for a different
    /// source of randomness.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    ///
    /// let mut a = List::from_iter(0..10);
    /// let mut b = List::from_iter(0..10);
    /// a.shuffle();
    /// b.shuffle();
    /// assert_eq!(a, b);
    /// ```
    pub fn shuffle(&mut self) {
        self.shuffle_with(&mut StdRng::seed_from_u64(SHUFFLE_SEED));
    }

    /// Shuffle the list in place with the Fisher-Yates algorithm, so every
    /// permutation is equally likely given a uniform `rng`.
    ///
    /// The shuffled part grows from the back: each step picks one of the
    /// `cnt` unshuffled nodes and swaps it with the last unshuffled one.
    ///
    /// This operation should compute in *O*(*n*<sup>2</sup>) time, as picking
    /// a node walks from the front.
    ///
    /// # Examples
    ///
    /// ```
    /// use cyclic_queue::List;
    /// use rand::rngs::StdRng;
    /// use rand::SeedableRng;
    ///
    /// let mut list = List::from_iter(0..10);
    /// list.shuffle_with(&mut StdRng::seed_from_u64(42));
    /// let mut values = Vec::from_iter(list);
    /// values.sort();
    /// assert_eq!(values, Vec::from_iter(0..10));
    /// ```
    pub fn shuffle_with<R: Rng + ?Sized>(&mut self, rng: &mut R) {
        let mut boundary = self.ghost_node();
        for cnt in (2..=self.len()).rev() {
            let index = rng.gen_range(0..cnt);
            // SAFETY: the first `cnt` nodes are the unshuffled ones, all
            // before `boundary`, so `picked` and `last` are non-ghost nodes.
            unsafe {
                let mut picked = self.front_node();
                for _ in 0..index {
                    picked = picked.as_ref().next;
                }
                let last = boundary.as_ref().prev;
                if picked != last {
                    let anchor = picked.as_ref().prev;
                    move_node(picked, boundary);
                    move_node_after(last, anchor);
                }
                boundary = boundary.as_ref().prev;
            }
        }
    }
}
