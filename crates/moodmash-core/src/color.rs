//! Hex color parsing and bounded perturbation.

use rand::Rng;

/// Inclusive bounds of the single-channel shift.
const SHIFT_MIN: u8 = 10;
const SHIFT_MAX: u8 = 39;

/// Parse a `#RRGGBB` string into its three channels.
pub fn parse_hex_color(s: &str) -> Option<[u8; 3]> {
    let digits = s.strip_prefix('#')?;
    if digits.len() != 6 || !digits.bytes().all(|b| b.is_ascii_hexdigit()) {
        return None;
    }

    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some([r, g, b])
}

/// Render channels back into lowercase `#rrggbb` form.
pub fn format_hex_color(channels: [u8; 3]) -> String {
    format!(
        "#{:02x}{:02x}{:02x}",
        channels[0], channels[1], channels[2]
    )
}

/// Is this a well-formed 6-digit hex color?
pub fn is_hex_color(s: &str) -> bool {
    parse_hex_color(s).is_some()
}

/// Shift one random channel of `base` by a bounded random amount,
/// clamped to [0,255]. Always returns a valid hex string; a malformed
/// base degrades to neutral gray rather than failing.
pub fn perturb(base: &str, rng: &mut impl Rng) -> String {
    let mut channels = parse_hex_color(base).unwrap_or([0x88, 0x88, 0x88]);

    let channel = rng.gen_range(0..3);
    let shift = rng.gen_range(SHIFT_MIN..=SHIFT_MAX);
    channels[channel] = channels[channel].saturating_add(shift);

    format_hex_color(channels)
}
