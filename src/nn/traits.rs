//! Network traits for learned bidding and play.
//!
//! These traits define the interface between the engine and externally
//! trained models. The engine only encodes views and reads predictions;
//! training happens elsewhere.

use serde::{Deserialize, Serialize};

use super::encoder::HAND_SLOTS;

/// Encoded view as a flat tensor for network input.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct EncodedState {
    /// Flattened tensor data (row-major order).
    pub tensor: Vec<f32>,

    /// Shape of the tensor.
    pub shape: Vec<usize>,
}

impl EncodedState {
    /// Create a new encoded state.
    pub fn new(tensor: Vec<f32>, shape: Vec<usize>) -> Self {
        debug_assert_eq!(
            tensor.len(),
            shape.iter().product::<usize>(),
            "Tensor length must match shape product"
        );
        Self { tensor, shape }
    }

    /// Create a zero-filled encoded state with the given shape.
    pub fn zeros(shape: Vec<usize>) -> Self {
        let size = shape.iter().product();
        Self {
            tensor: vec![0.0; size],
            shape,
        }
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.tensor.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.tensor.is_empty()
    }

    #[must_use]
    pub fn get(&self, index: usize) -> Option<f32> {
        self.tensor.get(index).copied()
    }

    /// Set element at a flat index. Out-of-range writes are ignored.
    pub fn set(&mut self, index: usize, value: f32) {
        if let Some(slot) = self.tensor.get_mut(index) {
            *slot = value;
        }
    }

    /// Copy `values` in starting at `offset`, truncating at the end.
    pub fn write(&mut self, offset: usize, values: &[f32]) {
        for (i, &v) in values.iter().enumerate() {
            self.set(offset + i, v);
        }
    }
}

/// Predicts how much of the available bid range a hand can make.
pub trait BidNetwork {
    /// A value in `[0, 1]`: 0 bids the floor, 1 bids the maximum.
    /// NaN is treated as 0.
    fn predict(&self, encoded: &EncodedState) -> f32;
}

/// Scores the cards of a hand for the next play.
pub trait PlayNetwork {
    /// One score per hand slot of the encoding (13 values). Higher is
    /// better; NaN never wins.
    fn predict(&self, encoded: &EncodedState) -> Vec<f32>;
}

/// Bid network returning a fixed fraction.
#[derive(Clone, Copy, Debug, Default)]
pub struct ConstantBid(pub f32);

impl BidNetwork for ConstantBid {
    fn predict(&self, _encoded: &EncodedState) -> f32 {
        self.0
    }
}

/// Play network that scores every slot the same.
#[derive(Clone, Copy, Debug, Default)]
pub struct UniformPlay;

impl PlayNetwork for UniformPlay {
    fn predict(&self, _encoded: &EncodedState) -> Vec<f32> {
        vec![1.0; HAND_SLOTS]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_encoded_state_new() {
        let state = EncodedState::new(vec![1.0, 2.0, 3.0, 4.0], vec![2, 2]);
        assert_eq!(state.len(), 4);
        assert_eq!(state.shape, vec![2, 2]);
        assert_eq!(state.get(0), Some(1.0));
        assert_eq!(state.get(3), Some(4.0));
        assert_eq!(state.get(4), None);
    }

    #[test]
    fn test_encoded_state_write_truncates() {
        let mut state = EncodedState::zeros(vec![4]);
        state.write(2, &[0.5, 0.25, 9.0]);
        assert_eq!(state.tensor, vec![0.0, 0.0, 0.5, 0.25]);
        state.set(10, 1.0);
        assert_eq!(state.len(), 4);
    }

    #[test]
    fn test_baselines() {
        let state = EncodedState::zeros(vec![68]);
        assert_eq!(ConstantBid(0.3).predict(&state), 0.3);
        assert_eq!(UniformPlay.predict(&state).len(), 13);
    }
}
