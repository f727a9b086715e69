use std::fs;
use std::path::PathBuf;
use std::sync::Arc;

use voxchess_blocks::rotation::rotate90;
use voxchess_blocks::{BlockPos, MaterialRegistry, MemoryWorld};
use voxchess_pieces::{
    BoardOrientation, PieceColor, PieceKind, PieceSet, StyleDocument, StyleError, StyleLibrary,
};

fn assets_dir() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("../../assets/styles")
}

fn standard() -> PieceSet {
    let doc = StyleDocument::from_path(assets_dir().join("standard.toml")).expect("asset");
    PieceSet::from_document(&doc, Arc::new(MaterialRegistry::new())).expect("standard style")
}

#[test]
fn bundled_style_has_every_piece() {
    let set = standard();
    for p in PieceKind::ALL {
        assert!(set.template(p).is_some(), "{p} missing");
    }
    assert_eq!(set.max_width(), 3);
    assert_eq!(set.max_height(), 5);
    assert_eq!(set.prewarm().unwrap(), 6 * 2 * 4);
}

#[test]
fn missing_black_materials_registers_nothing() {
    let dir = tempfile::tempdir().unwrap();
    fs::write(
        dir.path().join("half.toml"),
        r#"
            name = "half"
            [materials.white]
            X = "wool:white"
            [pieces]
            K = [["X"]]
        "#,
    )
    .unwrap();
    fs::copy(
        assets_dir().join("standard.toml"),
        dir.path().join("standard.toml"),
    )
    .unwrap();

    let lib = StyleLibrary::new(dir.path(), Arc::new(MaterialRegistry::new()));
    let good = lib.get("standard").unwrap();
    match lib.get("half") {
        Err(StyleError::MissingSection(section)) => assert_eq!(section, "materials.black"),
        other => panic!("expected missing section, got {other:?}"),
    }
    assert!(!lib.is_loaded("half"));
    assert_eq!(lib.names(), vec!["standard".to_string()]);
    assert!(Arc::ptr_eq(&good, &lib.get("standard").unwrap()));
}

#[test]
fn saved_style_reloads_equal() {
    let dir = tempfile::tempdir().unwrap();
    let set = standard();
    let path = set.save(dir.path(), "copy").unwrap();
    assert_eq!(path, dir.path().join("copy.toml"));

    let doc = StyleDocument::from_path(&path).unwrap();
    assert_eq!(doc.name.as_deref(), Some("copy"));
    let again = PieceSet::from_document(&doc, Arc::clone(set.registry())).unwrap();

    let mut expected = set.to_document();
    expected.name = Some("copy".into());
    assert_eq!(again.to_document(), expected);
    assert_eq!(again.white_to_black_diffs(), set.white_to_black_diffs());
}

#[test]
fn library_save_as_registers_copy() {
    let dir = tempfile::tempdir().unwrap();
    fs::copy(
        assets_dir().join("standard.toml"),
        dir.path().join("standard.toml"),
    )
    .unwrap();
    let lib = StyleLibrary::new(dir.path(), Arc::new(MaterialRegistry::new()));
    let copy = lib.save_as("standard", "marble").unwrap();
    assert_eq!(copy.name(), "marble");
    assert_eq!(lib.names(), vec!["marble".to_string(), "standard".to_string()]);
    assert_eq!(
        lib.available().unwrap(),
        vec!["marble".to_string(), "standard".to_string()]
    );
}

#[test]
fn bundled_diffs_map_white_to_black() {
    let diffs = standard().white_to_black_diffs();
    assert_eq!(diffs.get("wool:white").map(String::as_str), Some("wool:black"));
    assert_eq!(diffs.get("gold_block:0").map(String::as_str), Some("wool:red"));
    assert_eq!(
        diffs.get("smooth_stairs:0").map(String::as_str),
        Some("nether_brick_stairs:0")
    );
}

#[test]
fn knight_face_turns_with_the_board() {
    let set = standard();
    let north = set
        .get_stone(PieceKind::Knight, PieceColor::White, BoardOrientation::North)
        .unwrap();
    let east = set
        .get_stone(PieceKind::Knight, PieceColor::White, BoardOrientation::East)
        .unwrap();

    // The stair sits at template (x=0, z=1) on the top layer.
    let top = north.size_y() - 1;
    let stair = north.get(0, top, 1).unwrap();
    assert_eq!(stair.type_id(), 109);

    let (rx, rz) = BoardOrientation::East.rotate_cell(0, 1, 3, 3);
    let turned = east.get(rx, top, rz).unwrap();
    assert_eq!(turned.type_id(), 109);
    assert_eq!(turned.data(), rotate90(109, stair.data()));
}

#[test]
fn painted_stone_lands_on_its_square() {
    let set = standard();
    let pawn = set.stone_for_code(-2, BoardOrientation::North).unwrap();
    let mut world = MemoryWorld::new();
    pawn.paint(&mut world, BlockPos::new(0, 64, 0), 5);

    // 3 wide on a 5 wide square: one block of margin.
    let base = world.get(BlockPos::new(2, 64, 2)).unwrap();
    assert_eq!(base.to_string(), "wool:white");
    assert!(world.get(BlockPos::new(0, 64, 0)).is_none());
    assert_eq!(world.len(), pawn.occupied().count());
}
