// Host-side tests for the baked gradient + glow backdrop.

use starfield_core::*;

fn luminance(px: [u8; 4]) -> u32 {
    px[0] as u32 + px[1] as u32 + px[2] as u32
}

#[test]
fn gradient_runs_from_high_colour_at_top_to_low_colour_at_bottom() {
    let low = GRADIENT_LOW;
    let high = GRADIENT_HIGH;
    assert_eq!(gradient_row(0, 400, low, high), high);
    let last = gradient_row(399, 400, low, high);
    assert!((last.r as i32 - low.r as i32).abs() <= 1);
    assert!((last.b as i32 - low.b as i32).abs() <= 1);
}

#[test]
fn baked_image_has_viewport_dimensions() {
    let bg = Background::bake(Viewport::new(64.0, 48.0), &StarfieldParams::default());
    assert_eq!(bg.width, 64);
    assert_eq!(bg.height, 48);
    assert_eq!(bg.rgba.len(), 64 * 48 * 4);
    assert!(bg.rgba.chunks_exact(4).all(|px| px[3] == 255));
    assert_eq!(bg.pixel(64, 0), None);
}

#[test]
fn top_right_corner_is_untouched_by_glow() {
    let params = StarfieldParams::default();
    let bg = Background::bake(Viewport::new(200.0, 200.0), &params);
    let px = bg.pixel(199, 0).unwrap();
    let row = gradient_row(0, 200, params.gradient_low, params.gradient_high);
    assert_eq!(px, [row.r, row.g, row.b, 255]);
}

#[test]
fn glow_brightens_toward_its_centre() {
    let params = StarfieldParams {
        gradient_low: Rgb::new(20, 20, 20),
        gradient_high: Rgb::new(20, 20, 20),
        ..StarfieldParams::default()
    };
    let bg = Background::bake(Viewport::new(400.0, 300.0), &params);
    // Glow sits at (W / 6.5, H) = (~61, 300).
    let near = bg.pixel(61, 299).unwrap();
    let mid = bg.pixel(61, 260).unwrap();
    let far = bg.pixel(399, 0).unwrap();
    assert!(luminance(near) > luminance(mid));
    assert!(luminance(mid) > luminance(far));
    assert_eq!(far, [20, 20, 20, 255]);
}

#[test]
fn zero_sized_viewport_bakes_empty_image() {
    let bg = Background::bake(Viewport::new(0.0, 0.0), &StarfieldParams::default());
    assert_eq!((bg.width, bg.height), (0, 0));
    assert!(bg.rgba.is_empty());
    assert_eq!(bg.pixel(0, 0), None);
}
