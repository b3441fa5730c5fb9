// Shelf packing for the label atlas.
//
// Labels are rasterized into one texture. Each label gets a slot in a row
// ("shelf") of fixed height; rows fill left to right and wrap when the next
// slot would cross the atlas width.

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LabelSlot {
    pub x: u32,
    pub y: u32,
    pub width: u32,
    pub height: u32,
}

impl LabelSlot {
    /// Normalized `[u0, v0, u1, v1]` with `v0` at the slot's top edge.
    pub fn uv_rect(&self, atlas_width: u32, atlas_height: u32) -> [f32; 4] {
        let aw = atlas_width.max(1) as f32;
        let ah = atlas_height.max(1) as f32;
        [
            self.x as f32 / aw,
            self.y as f32 / ah,
            (self.x + self.width) as f32 / aw,
            (self.y + self.height) as f32 / ah,
        ]
    }

    /// Width over height; quads keep this ratio in world space.
    pub fn aspect(&self) -> f32 {
        self.width as f32 / self.height.max(1) as f32
    }
}

#[derive(Clone, Debug, Default, PartialEq)]
pub struct AtlasLayout {
    pub width: u32,
    pub height: u32,
    pub slots: Vec<LabelSlot>,
}

/// Pack boxes of the given pixel widths into rows of `row_height`.
///
/// Widths wider than `max_width` are clamped to it. The atlas is as wide as
/// its widest row and never smaller than 1x1.
pub fn pack_rows(widths: &[u32], row_height: u32, max_width: u32) -> AtlasLayout {
    let max_width = max_width.max(1);
    let row_height = row_height.max(1);
    let mut slots = Vec::with_capacity(widths.len());
    let (mut x, mut y) = (0u32, 0u32);
    let mut used_width = 0u32;
    for &w in widths {
        let w = w.clamp(1, max_width);
        if x > 0 && x + w > max_width {
            x = 0;
            y += row_height;
        }
        slots.push(LabelSlot {
            x,
            y,
            width: w,
            height: row_height,
        });
        x += w;
        used_width = used_width.max(x);
    }
    let height = if slots.is_empty() { 1 } else { y + row_height };
    AtlasLayout {
        width: used_width.max(1),
        height,
        slots,
    }
}

/// Shorten `name` to at most `max_chars` characters, ending in an ellipsis
/// when cut. Surrounding whitespace is trimmed first.
pub fn fit_label(name: &str, max_chars: usize) -> String {
    let name = name.trim();
    if name.chars().count() <= max_chars {
        return name.to_string();
    }
    if max_chars == 0 {
        return String::new();
    }
    let mut out: String = name.chars().take(max_chars - 1).collect();
    out.truncate(out.trim_end().len());
    out.push('…');
    out
}
