//! Decodes a real (if small) torrent-shaped metadata file and re-encodes it
//! byte-identically. The `pieces` entry is raw binary, which is exactly why
//! dictionary values stay byte strings until a caller asks for text.

use bencode_core::{decode, encode, Value};
use encoding_rs::UTF_8;

fn torrent_bytes() -> Vec<u8> {
    std::fs::read(concat!(
        env!("CARGO_MANIFEST_DIR"),
        "/tests/fixtures/sample.torrent"
    ))
    .expect("sample.torrent fixture must exist")
}

#[test]
fn decode_torrent() {
    let torrent = decode(&torrent_bytes()).unwrap();

    assert_eq!(
        torrent.get("announce").and_then(Value::as_bytes),
        Some(&b"http://torrent.example.com:6969/announce"[..])
    );
    assert_eq!(
        torrent
            .get("comment")
            .and_then(|v| v.to_text(UTF_8))
            .as_deref(),
        Some("Example CD releases")
    );
    assert_eq!(
        torrent.get("creation date").and_then(Value::as_integer),
        Some(1_414_070_124)
    );

    // announce-list is a list of tiers, each itself a list of trackers.
    let tiers = torrent.get("announce-list").and_then(Value::as_list).unwrap();
    assert_eq!(tiers.len(), 2);
    assert_eq!(
        tiers[1].as_list().unwrap()[0],
        Value::from("http://ipv6.torrent.example.com:6969/announce")
    );

    let info = torrent.get("info").unwrap();
    assert_eq!(info.get("length").and_then(Value::as_integer), Some(1_048_576));
    assert_eq!(
        info.get("name").and_then(Value::as_bytes),
        Some(&b"example-1.0.iso"[..])
    );
    assert_eq!(
        info.get("piece length").and_then(Value::as_integer),
        Some(262_144)
    );
    // Concatenated piece digests: binary, not text.
    assert_eq!(info.get("pieces").and_then(Value::as_bytes).unwrap().len(), 20);
}

#[test]
fn reencoded_torrent_matches_original_file() {
    let original = torrent_bytes();
    let reencoded = encode(&decode(&original).unwrap()).unwrap();
    assert_eq!(reencoded, original);
}
