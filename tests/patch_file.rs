use std::{fs, path::PathBuf};

use huepatch::{
    write_blueprint_split_color, write_byte, write_color, write_colors, write_float,
    ChannelOrder, Color, ComponentEncoding, HuepatchError,
};

fn fixture(len: usize) -> (tempfile::TempDir, PathBuf) {
    let _ = tracing_subscriber::fmt().with_test_writer().try_init();
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("asset.bin");
    fs::write(&path, vec![0u8; len]).unwrap();
    (dir, path)
}

#[test]
fn write_color_patches_only_the_target_range() {
    let (_dir, path) = fixture(100);

    write_color(
        &path,
        10,
        Color::new(255, 0, 0, 255),
        ChannelOrder::Rgba,
        ComponentEncoding::Byte,
    )
    .unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 100);
    assert_eq!(&bytes[10..14], &[255, 0, 0, 255]);
    assert!(bytes[..10].iter().all(|&b| b == 0));
    assert!(bytes[14..].iter().all(|&b| b == 0));
}

#[test]
fn write_color_respects_channel_order_and_encoding() {
    let (_dir, path) = fixture(32);
    let color = Color::new(0x11, 0x22, 0x33, 0x44);

    write_color(&path, 0, color, ChannelOrder::Bgra, ComponentEncoding::Byte).unwrap();
    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[..4], &[0x33, 0x22, 0x11, 0x44]);

    write_color(&path, 4, color, ChannelOrder::Bgr, ComponentEncoding::Byte).unwrap();
    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[4..7], &[0x33, 0x22, 0x11]);

    write_color(&path, 8, Color::WHITE, ChannelOrder::Rgb, ComponentEncoding::Float32).unwrap();
    let bytes = fs::read(&path).unwrap();
    for i in 0..3 {
        let v = f32::from_le_bytes(bytes[8 + i * 4..12 + i * 4].try_into().unwrap());
        assert_eq!(v, 1.0);
    }
}

#[test]
fn write_colors_patches_every_target() {
    let (_dir, path) = fixture(64);
    let color = Color::new(0x00, 0xff, 0x00, 0xff);
    let targets = [
        (0u64, ChannelOrder::Bgra),
        (16, ChannelOrder::Bgra),
        (40, ChannelOrder::Rgba),
    ];

    write_colors(&path, &targets, color, ComponentEncoding::Byte).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(&bytes[0..4], &[0x00, 0x00, 0xff, 0xff]);
    assert_eq!(&bytes[16..20], &[0x00, 0x00, 0xff, 0xff]);
    assert_eq!(&bytes[40..44], &[0x00, 0xff, 0x00, 0xff]);
}

#[test]
fn scalar_writers_patch_in_place() {
    let (_dir, path) = fixture(16);

    write_byte(&path, 3, 0xab).unwrap();
    write_float(&path, 8, 0.25).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes[3], 0xab);
    let v = f32::from_ne_bytes(bytes[8..12].try_into().unwrap());
    assert_eq!(v, 0.25);
}

#[test]
fn writing_past_eof_extends_the_file() {
    // Local filesystems on the supported platforms zero-fill the gap.
    let (_dir, path) = fixture(4);

    write_color(
        &path,
        8,
        Color::new(1, 2, 3, 4),
        ChannelOrder::Rgba,
        ComponentEncoding::Byte,
    )
    .unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes.len(), 12);
    assert_eq!(&bytes[4..8], &[0, 0, 0, 0]);
    assert_eq!(&bytes[8..12], &[1, 2, 3, 4]);
}

#[test]
fn missing_file_is_an_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join("no_such.bin");

    let err = write_byte(&path, 0, 0).unwrap_err();
    match err {
        HuepatchError::Io { path: p, .. } => assert_eq!(p, path),
        other => panic!("expected io error, got {other:?}"),
    }
}

#[test]
fn split_color_scatters_channels_at_fixed_deltas() {
    let (_dir, path) = fixture(0x200);
    let color = Color::new(0xaa, 0xbb, 0xcc, 0xdd);

    write_blueprint_split_color(&path, 0x100, color, ChannelOrder::Bgra).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes[0x100], 0xcc); // B
    assert_eq!(bytes[0x135], 0xbb); // G
    assert_eq!(bytes[0x16a], 0xaa); // R
    assert_eq!(bytes[0x19f], 0xdd); // A
    let patched = [0x100usize, 0x135, 0x16a, 0x19f];
    for (i, &b) in bytes.iter().enumerate() {
        if !patched.contains(&i) {
            assert_eq!(b, 0, "byte {i:#x} changed");
        }
    }
}

#[test]
fn split_color_without_alpha_leaves_the_alpha_slot_alone() {
    let (_dir, path) = fixture(0x200);
    let color = Color::new(0xaa, 0xbb, 0xcc, 0xdd);

    write_blueprint_split_color(&path, 0x100, color, ChannelOrder::Bgr).unwrap();

    let bytes = fs::read(&path).unwrap();
    assert_eq!(bytes[0x100], 0xcc);
    assert_eq!(bytes[0x135], 0xbb);
    assert_eq!(bytes[0x16a], 0xaa);
    assert_eq!(bytes[0x19f], 0x00);
}

#[test]
fn split_color_rejects_non_bgr_orders_before_touching_the_file() {
    let (_dir, path) = fixture(0x200);

    let err = write_blueprint_split_color(&path, 0x100, Color::WHITE, ChannelOrder::Rgba)
        .unwrap_err();
    assert!(matches!(err, HuepatchError::Validation(_)));

    let bytes = fs::read(&path).unwrap();
    assert!(bytes.iter().all(|&b| b == 0));
}
