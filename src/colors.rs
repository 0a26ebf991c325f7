//! Colors in ARGB8888 format and helpers to build them.

pub const BLACK: u32 = 0xFF000000;
pub const WHITE: u32 = 0xFFFFFFFF;

/// Software path background.
pub const BACKGROUND: u32 = BLACK;
/// Software path wireframe edges.
pub const WIREFRAME: u32 = WHITE;

/// Hardware path clear color.
pub const HARDWARE_BACKGROUND: u32 = WHITE;

/// Ambient reflectance of the hardware wireframe, as linear RGB in `[0, 1]`.
pub const HARDWARE_MATERIAL_AMBIENT: [f32; 3] = [0.2, 0.2, 0.2];
/// Diffuse reflectance of the hardware wireframe.
pub const HARDWARE_MATERIAL_DIFFUSE: [f32; 3] = [0.8, 0.8, 0.8];

/// Packs 8-bit channels into an opaque ARGB8888 pixel.
#[inline]
pub const fn pack_color(r: u8, g: u8, b: u8) -> u32 {
    0xFF00_0000 | (r as u32) << 16 | (g as u32) << 8 | b as u32
}

/// Splits an ARGB8888 pixel into its (r, g, b) channels.
#[inline]
pub const fn unpack_color(color: u32) -> (u8, u8, u8) {
    ((color >> 16) as u8, (color >> 8) as u8, color as u8)
}

/// Scales a channel maximum by an intensity, truncating toward zero.
///
/// Negative intensities give 0 and anything past 1.0 saturates at 255.
#[inline]
pub fn channel(intensity: f32) -> u8 {
    (255.0 * intensity) as u8
}

/// Packs linear `[0, 1]` channels into a pixel, saturating out-of-range values.
pub fn from_unit_rgb(rgb: [f32; 3]) -> u32 {
    pack_color(channel(rgb[0]), channel(rgb[1]), channel(rgb[2]))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn pack_and_unpack_agree() {
        let c = pack_color(12, 200, 7);
        assert_eq!(c, 0xFF0CC807);
        assert_eq!(unpack_color(c), (12, 200, 7));
    }

    #[test]
    fn channel_saturates_both_ends() {
        assert_eq!(channel(-0.5), 0);
        assert_eq!(channel(0.5), 127);
        assert_eq!(channel(1.0), 255);
        assert_eq!(channel(3.0), 255);
    }
}
