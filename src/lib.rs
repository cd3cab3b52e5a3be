#![cfg_attr(not(test), no_std)]

pub mod error;
pub use error::*;

pub mod vector;
pub use vector::*;

pub mod quaternion;
pub use quaternion::*;
