//! Fixed instruction prompts, one per visual style.

use crate::core::StyleKey;

/// Balanced studio look for e-commerce catalogs.
pub const STUDIO_PROMPT: &str = "Turn this product photograph into a high-quality studio-style \
image. Use soft, balanced lighting, remove distracting elements from the background, apply subtle \
color correction, and give the image a clean, modern look suitable for an e-commerce catalog. Keep \
the product's shape, texture, and colors as close to reality as possible.";

/// Clean light background, diffused light, product-only focus.
pub const MINIMALIST_PROMPT: &str = "Create a minimalist studio image of this product. Place it on \
a perfectly clean, light gray or white background. Use soft, diffused light to minimize shadows. \
Colors must stay natural. The image should be very clean, simple, and focused entirely on the \
product.";

/// High-contrast, saturated, energetic presentation.
pub const VIBRANT_PROMPT: &str = "Make this product photograph bright and energetic. Use dynamic \
lighting to create contrast and bring out details. The background should be colorful but \
complementary to the product, possibly with a gradient. Boost color saturation so the colors look \
rich and appealing while remaining realistic.";

/// Dramatic lighting on a dark, textured background.
pub const PREMIUM_PROMPT: &str = "Give this product photograph a premium, luxurious look. Use \
dramatic, directional lighting to create an interplay of light and shadow. Place the product on a \
dark, textured background such as dark marble, silk, or brushed metal. The treatment should be \
elegant, with deep colors and an emphasis on the product's texture.";

/// Returns the fixed instruction text for a style key.
pub fn prompt_for(style: StyleKey) -> &'static str {
    match style {
        StyleKey::Default => STUDIO_PROMPT,
        StyleKey::Minimalist => MINIMALIST_PROMPT,
        StyleKey::Vibrant => VIBRANT_PROMPT,
        StyleKey::Premium => PREMIUM_PROMPT,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;

    #[test]
    fn every_style_has_a_distinct_prompt() {
        let prompts: HashSet<&str> = StyleKey::ALL.iter().map(|s| prompt_for(*s)).collect();
        assert_eq!(prompts.len(), StyleKey::ALL.len());
    }
}
