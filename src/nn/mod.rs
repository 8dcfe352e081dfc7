//! Network integration for learned bidding and play.
//!
//! ## Overview
//!
//! - **Encoding**: `BidEncoder` (64 values) and `PlayEncoder` (68 values)
//!   turn policy views into flat tensors
//! - **Traits**: `BidNetwork`, `PlayNetwork` for externally trained models
//! - **Policies**: `NetworkBidder`, `NetworkPlayer` drive a seat from
//!   network predictions
//! - **Baselines**: `ConstantBid`, `UniformPlay` for testing
//!
//! ## Usage
//!
//! ```rust
//! use tarneeb41::nn::{ConstantBid, NetworkBidder, NetworkPlayer, UniformPlay};
//! use tarneeb41::policy::SeatPolicies;
//!
//! let seat = SeatPolicies::new(
//!     NetworkBidder::new(ConstantBid(0.2)),
//!     NetworkPlayer::new(UniformPlay),
//! );
//! # let _ = seat;
//! ```

pub mod encoder;
pub mod policy;
pub mod traits;

pub use encoder::{
    card_features, card_set, hand_slots, BidEncoder, PlayEncoder, StateEncoder, BID_INPUT,
    CARD_FEATURES, HAND_SLOTS, PLAY_INPUT,
};
pub use policy::{NetworkBidder, NetworkPlayer};
pub use traits::{BidNetwork, ConstantBid, EncodedState, PlayNetwork, UniformPlay};
