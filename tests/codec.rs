use cube_codec::cube333::coordcube::{FULL_INDEX_COUNT, INDEX_COUNT};
use cube_codec::cube333::geometry::{Color, Facelet};
use cube_codec::cube333::{CubieCube, StickerCube};
use cube_codec::perm::{rank, unrank, unrank_array, FACTORIALS};

use log::info;
use proptest::prelude::*;

fn cubie_from_ranks(cp: u32, co: [u8; 8], ep: u32, eo: [u8; 12]) -> CubieCube {
    CubieCube::new(unrank_array(cp), co, unrank_array(ep), eo).unwrap()
}

fn any_cubie() -> impl Strategy<Value = CubieCube> {
    (
        0..FACTORIALS[8],
        proptest::array::uniform8(0..3u8),
        0..FACTORIALS[12],
        proptest::array::uniform12(0..2u8),
    )
        .prop_map(|(cp, co, ep, eo)| cubie_from_ranks(cp, co, ep, eo))
}

#[test_log::test]
fn solved_state() {
    let stickers = StickerCube::from(&CubieCube::SOLVED);
    assert_eq!(stickers, StickerCube::SOLVED);
    info!("\n{}", stickers);
    assert_eq!(stickers[Facelet::LDF], Color::Green);
    assert_eq!(stickers.to_cubie(), Ok(CubieCube::SOLVED));
}

#[test]
fn every_permutation_of_six() {
    let mut perm = [0; 6];
    let mut seen = std::collections::HashSet::new();
    for r in 0..FACTORIALS[6] {
        unrank(&mut perm, r);
        assert_eq!(rank(&perm), r);
        assert!(seen.insert(perm));
    }
    assert_eq!(seen.len(), 720);
}

#[test]
fn superflip() {
    let cube = cubie_from_ranks(FACTORIALS[8] - 1, [0; 8], FACTORIALS[12] - 1, [1; 12]);
    let stickers = StickerCube::from(&cube);
    assert_eq!(stickers[Facelet::UF], Color::Red);
    assert_eq!(stickers[Facelet::FU], Color::White);
    assert_eq!(stickers[Facelet::UFR], Color::White);
    assert_eq!(stickers.to_cubie(), Ok(cube));
    assert_eq!(cube.index(), CubieCube::SOLVED.index());
    assert!(cube.full_index().is_ok());
}

#[test]
fn text_forms() {
    let mut cube = CubieCube::SOLVED;
    cube.cp.swap(2, 3);
    cube.ep.swap(2, 3);
    let stickers = StickerCube::from(&cube);
    let s = stickers.to_facelet_string();
    assert_eq!(s.parse::<StickerCube>(), Ok(stickers));
    assert_eq!(stickers.to_string().lines().count(), 3);
    assert_ne!(stickers.to_string(), StickerCube::SOLVED.to_string());
}

proptest! {
    #[test]
    fn sticker_roundtrip(cube in any_cubie()) {
        prop_assert_eq!(StickerCube::from(&cube).to_cubie(), Ok(cube));
    }

    #[test]
    fn bytes_roundtrip(cube in any_cubie()) {
        prop_assert_eq!(CubieCube::try_from(cube.to_bytes()), Ok(cube));
    }

    #[test]
    fn indices_in_range(cube in any_cubie()) {
        prop_assert!(cube.index() < INDEX_COUNT);
        if let Ok(n) = cube.full_index() {
            prop_assert!(n < FULL_INDEX_COUNT);
            prop_assert_eq!(CubieCube::from_full_index(n), cube);
        } else {
            prop_assert!(cube.illegal());
        }
    }

    #[test]
    fn index_matches_ranks(cp in 0..FACTORIALS[8], ep in 0..FACTORIALS[12]) {
        let cube = cubie_from_ranks(cp, [0; 8], ep, [0; 12]);
        prop_assert_eq!(cube.index(), FACTORIALS[8] as u64 * ep as u64 + cp as u64);
        prop_assert_eq!(CubieCube::from_index(cube.index()), cube);
    }
}

#[cfg(feature = "serde")]
mod serde_forms {
    use super::*;

    #[test]
    fn cubie_json() {
        let mut cube = CubieCube::SOLVED;
        cube.cp.swap(0, 1);
        let json = serde_json::to_string(&cube).unwrap();
        assert_eq!(serde_json::from_str::<CubieCube>(&json).unwrap(), cube);
    }

    #[test]
    fn cubie_json_rejects_repeated_pieces() {
        let json = serde_json::to_string(&CubieCube::SOLVED).unwrap();

        let corners = json.replacen("\"UBR\"", "\"UBL\"", 1);
        assert_ne!(corners, json);
        assert!(serde_json::from_str::<CubieCube>(&corners).is_err());

        let edges = json.replacen("\"UR\"", "\"UB\"", 1);
        assert_ne!(edges, json);
        assert!(serde_json::from_str::<CubieCube>(&edges).is_err());

        // A twisted corner is unreachable but still a valid cubie cube.
        let mut twisted = CubieCube::SOLVED;
        twisted.co[0] = twisted.co[0].clockwise();
        let json = serde_json::to_string(&twisted).unwrap();
        assert_eq!(serde_json::from_str::<CubieCube>(&json).unwrap(), twisted);
    }

    #[test]
    fn sticker_json() {
        let json = serde_json::to_string(&StickerCube::SOLVED).unwrap();
        assert_eq!(json, format!("\"{}\"", StickerCube::SOLVED.to_facelet_string()));
        assert_eq!(
            serde_json::from_str::<StickerCube>(&json).unwrap(),
            StickerCube::SOLVED
        );
        assert!(serde_json::from_str::<StickerCube>("\"WWW\"").is_err());
    }
}
