//! Sixel Encoder
//!
//! Turns a small RGBA bitmap into a DEC sixel escape sequence.
//!
//! Colours are quantised to a 6x6x6 cube and only the registers actually
//! used are defined. Pixels with alpha below half are left out, which with
//! `P2 = 1` leaves the terminal background showing through.

use image::RgbaImage;

use super::pipeline::ImageError;

/// Levels per channel in the colour cube
const CUBE_LEVELS: u16 = 6;

/// Alpha threshold below which a pixel is transparent
const ALPHA_CUTOFF: u8 = 128;

/// Runs at least this long are run-length encoded
const MIN_RUN: usize = 4;

/// Map an 8-bit channel to a cube level (0..=5)
fn level(channel: u8) -> u16 {
    (u16::from(channel) * (CUBE_LEVELS - 1) + 127) / 255
}

/// Cube level as a sixel colour percentage
fn percent(level: u16) -> u16 {
    level * 100 / (CUBE_LEVELS - 1)
}

/// Encode an image as a sixel sequence
pub fn encode(image: &RgbaImage) -> Result<Vec<u8>, ImageError> {
    let (width, height) = image.dimensions();
    if width == 0 || height == 0 {
        return Err(ImageError::Encode("image has no pixels".to_string()));
    }
    let (w, h) = (width as usize, height as usize);

    // Assign colour registers in order of first use
    let mut cube_to_register: Vec<Option<u16>> = vec![None; usize::from(CUBE_LEVELS.pow(3))];
    let mut registers: Vec<(u16, u16, u16)> = Vec::new();
    let mut pixel_register: Vec<Option<u16>> = Vec::with_capacity(w * h);

    for pixel in image.pixels() {
        let [r, g, b, a] = pixel.0;
        if a < ALPHA_CUTOFF {
            pixel_register.push(None);
            continue;
        }
        let (lr, lg, lb) = (level(r), level(g), level(b));
        let cube = usize::from(lr * CUBE_LEVELS * CUBE_LEVELS + lg * CUBE_LEVELS + lb);
        let register = *cube_to_register[cube].get_or_insert_with(|| {
            registers.push((lr, lg, lb));
            (registers.len() - 1) as u16
        });
        pixel_register.push(Some(register));
    }

    let mut out = String::new();
    out.push_str("\x1bP0;1;0q");
    out.push_str(&format!("\"1;1;{width};{height}"));

    for (n, (r, g, b)) in registers.iter().enumerate() {
        out.push_str(&format!(
            "#{};2;{};{};{}",
            n,
            percent(*r),
            percent(*g),
            percent(*b)
        ));
    }

    let bands = h.div_ceil(6);
    for band in 0..bands {
        let top = band * 6;
        let rows = (h - top).min(6);

        let mut used: Vec<u16> = Vec::new();
        for y in top..top + rows {
            for register in pixel_register[y * w..(y + 1) * w].iter().flatten() {
                if !used.contains(register) {
                    used.push(*register);
                }
            }
        }

        for (k, register) in used.iter().enumerate() {
            if k > 0 {
                out.push('$');
            }
            out.push_str(&format!("#{register}"));

            let row: Vec<char> = (0..w)
                .map(|x| {
                    let bits = (0..rows)
                        .filter(|dy| pixel_register[(top + dy) * w + x] == Some(*register))
                        .fold(0u8, |acc, dy| acc | (1 << dy));
                    char::from(63 + bits)
                })
                .collect();
            push_run_length(&mut out, &row);
        }

        if band + 1 < bands {
            out.push('-');
        }
    }

    out.push_str("\x1b\\");
    Ok(out.into_bytes())
}

/// Append sixel characters, compressing long runs as `!<n><char>`
fn push_run_length(out: &mut String, row: &[char]) {
    let mut i = 0;
    while i < row.len() {
        let c = row[i];
        let run = row[i..].iter().take_while(|&&x| x == c).count();
        if run >= MIN_RUN {
            out.push_str(&format!("!{run}{c}"));
        } else {
            out.extend(std::iter::repeat(c).take(run));
        }
        i += run;
    }
}
