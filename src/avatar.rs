//! Generated avatars for team members without a portrait.
//!
//! Hexagon badges with hash-derived colors, a pair of translucent shard
//! triangles, and the member's initials. Deterministic: the same name always
//! produces the same SVG, so regenerating the site never churns the output.

use maud::{Markup, PreEscaped, html};

use crate::util::initials;

/// Badge fill colors, dark-to-neon pairs matching the site palette.
const PALETTE: &[(&str, &str)] = &[
    ("#101828", "#4cc9f0"),
    ("#14173a", "#f72585"),
    ("#0f2027", "#70e000"),
    ("#1b1035", "#ffb703"),
    ("#121c2b", "#b5179e"),
    ("#0d1f22", "#48bfe3"),
    ("#1c1524", "#ff6d00"),
    ("#11202d", "#80ffdb"),
];

/// Flat-top hexagon inscribed in the 100x100 view box.
const HEX_POINTS: &str = "50,3 90.7,26.5 90.7,73.5 50,97 9.3,73.5 9.3,26.5";

fn hash(s: &str) -> u64 {
    const OFFSET: u64 = 0xcbf29ce484222325;
    const PRIME: u64 = 0x100000001b3;
    s.trim()
        .bytes()
        .fold(OFFSET, |h, b| (h ^ b as u64).wrapping_mul(PRIME))
}

/// Generates the avatar SVG for a name.
pub fn generate_svg(name: &str, size: u32) -> String {
    let h = hash(name);

    let (bg, accent) = PALETTE[(h % PALETTE.len() as u64) as usize];

    // Two shard triangles cut across the badge, offsets and spins drawn
    // from non-overlapping bit ranges of the hash.
    let rot1 = ((h >> 4) % 360) as i32;
    let rot2 = ((h >> 13) % 360) as i32;
    let ox1 = ((h >> 22) % 40) as i32 - 20;
    let oy1 = ((h >> 28) % 40) as i32 - 20;
    let ox2 = ((h >> 34) % 40) as i32 - 20;
    let oy2 = ((h >> 40) % 40) as i32 - 20;

    let label = initials(name);

    format!(
        r##"<svg xmlns="http://www.w3.org/2000/svg" width="{size}" height="{size}" viewBox="0 0 100 100"><polygon points="{HEX_POINTS}" fill="{bg}"/><g opacity="0.35"><polygon points="50,10 85,70 15,70" fill="{accent}" transform="translate({ox1},{oy1}) rotate({rot1},50,50)"/></g><g opacity="0.25"><polygon points="50,20 78,65 22,65" fill="{accent}" transform="translate({ox2},{oy2}) rotate({rot2},50,50)"/></g><text x="50" y="58" text-anchor="middle" font-family="monospace" font-size="30" fill="{accent}">{label}</text></svg>"##
    )
}

/// Creates an inline SVG avatar element.
pub fn render(name: &str, size: u32) -> Markup {
    html! { span class="avatar" { (PreEscaped(generate_svg(name, size))) } }
}
