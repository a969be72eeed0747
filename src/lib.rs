//! A codec for 3x3x3 Rubik's cube states. Cubes can be stored as the colors of their 54
//! stickers ([`StickerCube`](cube333::StickerCube)) or as the permutation and orientation of their
//! pieces ([`CubieCube`](cube333::CubieCube)), converted losslessly between the two, and folded
//! into dense integer indices for use as keys into large lookup tables.

#![deny(missing_docs)]

pub mod coord;
pub mod cube333;
pub mod error;
pub mod perm;
