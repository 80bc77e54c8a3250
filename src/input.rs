// Pure pointer/layout helpers kept free of web-sys so they can be tested on the host.

/// `MouseEvent.button` value of the primary (usually left) button.
pub const PRIMARY_BUTTON: i16 = 0;

#[inline]
pub fn is_primary_press(button: i16) -> bool {
    button == PRIMARY_BUTTON
}

/// Rounds a CSS viewport size to a canvas backing size of at least 1x1.
#[inline]
pub fn backing_size(width: f64, height: f64) -> (u32, u32) {
    let px = |v: f64| {
        if v.is_finite() {
            (v.max(0.0) as u32).max(1)
        } else {
            1
        }
    };
    (px(width), px(height))
}
