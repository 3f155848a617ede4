use anyhow::Result;
use tray_icon::Icon;

pub const ICON_SIZE: u32 = 64;

const BADGE_RGBA: [u8; 4] = [186, 32, 38, 255];
const MARK_RGBA: [u8; 4] = [255, 255, 255, 255];

/// Raw pixels for the tray badge: a red disk with a white exclamation mark.
/// Kept as bytes so it can cross into the thread that owns the tray.
pub fn render_badge(size: u32) -> Vec<u8> {
    let mut data = vec![0u8; (size * size * 4) as usize];
    let s = size as i32;
    let center = s / 2;
    let radius = s / 2 - 2;

    let bar_half_width = (s / 16).max(1);
    let bar_top = s / 4;
    let bar_bottom = s * 9 / 16;
    let dot_center_y = s * 11 / 16 + 2;
    let dot_radius = (s / 14).max(1);

    for y in 0..s {
        for x in 0..s {
            let dx = x - center;
            let dy = y - center;
            if dx * dx + dy * dy > radius * radius {
                continue;
            }

            let in_bar = dx.abs() <= bar_half_width && (bar_top..=bar_bottom).contains(&y);
            let dot_dy = y - dot_center_y;
            let in_dot = dx * dx + dot_dy * dot_dy <= dot_radius * dot_radius;
            let color = if in_bar || in_dot { MARK_RGBA } else { BADGE_RGBA };

            let idx = ((y as u32 * size + x as u32) * 4) as usize;
            data[idx..idx + 4].copy_from_slice(&color);
        }
    }
    data
}

pub fn create_icon() -> Result<Icon> {
    Ok(Icon::from_rgba(render_badge(ICON_SIZE), ICON_SIZE, ICON_SIZE)?)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pixel(data: &[u8], size: u32, x: u32, y: u32) -> [u8; 4] {
        let idx = ((y * size + x) * 4) as usize;
        [data[idx], data[idx + 1], data[idx + 2], data[idx + 3]]
    }

    #[test]
    fn badge_has_rgba_length() {
        for size in [16, 32, ICON_SIZE] {
            assert_eq!(render_badge(size).len(), (size * size * 4) as usize, "size: {}", size);
        }
    }

    #[test]
    fn badge_pixels_by_region() {
        let data = render_badge(ICON_SIZE);
        let cases = [
            ((0, 0), [0, 0, 0, 0]),
            ((ICON_SIZE - 1, ICON_SIZE - 1), [0, 0, 0, 0]),
            ((10, 32), BADGE_RGBA),
            ((32, 20), MARK_RGBA),
            ((32, 46), MARK_RGBA),
            ((32, 39), BADGE_RGBA),
        ];

        for ((x, y), expected) in cases {
            assert_eq!(pixel(&data, ICON_SIZE, x, y), expected, "pixel ({}, {})", x, y);
        }
    }
}
