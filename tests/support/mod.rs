//! Shared fixtures for integration tests: encoded image payloads and page
//! bodies served from wiremock.

#![allow(dead_code)]

/// A deterministic noise PNG comfortably above the minimum byte floor.
pub fn noise_png() -> Vec<u8> {
    let img = image::ImageBuffer::from_fn(96, 96, |x, y| {
        let v = (x.wrapping_mul(31).wrapping_add(y.wrapping_mul(17)) % 251) as u8;
        image::Rgb([v, v.wrapping_mul(3), v ^ 0x5a])
    });
    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )
    .expect("encode noise png");
    assert!(bytes.len() >= picstream_core::MIN_IMAGE_BYTES);
    bytes
}

/// A 1x1 PNG below the minimum byte floor. Valid image data, too small to keep.
pub fn tiny_png() -> Vec<u8> {
    let img = image::ImageBuffer::from_fn(1, 1, |_, _| image::Rgb([0u8, 0, 0]));
    let mut bytes = Vec::new();
    img.write_to(
        &mut std::io::Cursor::new(&mut bytes),
        image::ImageFormat::Png,
    )
    .expect("encode tiny png");
    assert!(bytes.len() < picstream_core::MIN_IMAGE_BYTES);
    bytes
}

/// Wraps `<img>` tags into a minimal HTML page.
pub fn page_html(img_tags: &str) -> String {
    format!("<html><body><h1>Gallery</h1>{img_tags}</body></html>")
}
