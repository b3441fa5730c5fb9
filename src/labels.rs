use crate::constants::{
    LABEL_ATLAS_MAX_WIDTH_PX, LABEL_FONT, LABEL_MAX_CHARS, LABEL_PADDING_PX, LABEL_ROW_HEIGHT_PX,
};
use crate::core::{fit_label, pack_rows, AtlasLayout, LABEL_COLOR};
use wasm_bindgen::{JsCast, JsValue};
use wasm_bindgen_futures::JsFuture;
use web_sys as web;

/// RGBA8 label atlas, row-major, `width * height * 4` bytes.
pub struct LabelAtlas {
    pub layout: AtlasLayout,
    pub pixels: Vec<u8>,
}

impl LabelAtlas {
    pub fn width(&self) -> u32 {
        self.layout.width
    }

    pub fn height(&self) -> u32 {
        self.layout.height
    }
}

/// Wait until the label font is usable by the 2D canvas.
///
/// Goes through `document.fonts.load` dynamically so older engines without a
/// FontFaceSet fail with an error instead of a missing import.
pub async fn ensure_font_loaded(document: &web::Document, font: &str) -> anyhow::Result<()> {
    let js_err = |e: JsValue| anyhow::anyhow!("font load '{}' failed: {:?}", font, e);
    let fonts = js_sys::Reflect::get(document, &JsValue::from_str("fonts")).map_err(js_err)?;
    if fonts.is_undefined() {
        anyhow::bail!("document.fonts unavailable");
    }
    let load: js_sys::Function = js_sys::Reflect::get(&fonts, &JsValue::from_str("load"))
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    let promise: js_sys::Promise = load
        .call1(&fonts, &JsValue::from_str(font))
        .map_err(js_err)?
        .dyn_into()
        .map_err(js_err)?;
    let faces = JsFuture::from(promise).await.map_err(js_err)?;
    let count = js_sys::Array::from(&faces).length();
    // Generic families resolve to system fonts and report no faces.
    log::info!("[labels] font '{}' ready ({} faces)", font, count);
    Ok(())
}

/// Draw every label into one offscreen canvas and read the pixels back.
pub fn rasterize(document: &web::Document, names: &[String]) -> anyhow::Result<LabelAtlas> {
    let canvas: web::HtmlCanvasElement = document
        .create_element("canvas")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .dyn_into()
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let ctx = context_2d(&canvas)?;
    ctx.set_font(LABEL_FONT);

    let texts: Vec<String> = names
        .iter()
        .map(|n| fit_label(n, LABEL_MAX_CHARS))
        .collect();
    let mut widths = Vec::with_capacity(texts.len());
    for t in &texts {
        let metrics = ctx.measure_text(t).map_err(|e| anyhow::anyhow!("{:?}", e))?;
        widths.push(metrics.width().ceil() as u32 + 2 * LABEL_PADDING_PX);
    }
    let layout = pack_rows(&widths, LABEL_ROW_HEIGHT_PX, LABEL_ATLAS_MAX_WIDTH_PX);

    // Resizing resets the context state, so the font is set again afterwards.
    canvas.set_width(layout.width);
    canvas.set_height(layout.height);
    ctx.clear_rect(0.0, 0.0, layout.width as f64, layout.height as f64);
    ctx.set_font(LABEL_FONT);
    ctx.set_text_align("center");
    ctx.set_text_baseline("middle");
    let [r, g, b] = LABEL_COLOR.map(|c| (c.clamp(0.0, 1.0) * 255.0).round() as u8);
    ctx.set_fill_style_str(&format!("rgb({r},{g},{b})"));
    for (t, slot) in texts.iter().zip(&layout.slots) {
        let cx = slot.x as f64 + slot.width as f64 * 0.5;
        let cy = slot.y as f64 + slot.height as f64 * 0.5;
        ctx.fill_text_with_max_width(
            t,
            cx,
            cy,
            slot.width.saturating_sub(2 * LABEL_PADDING_PX).max(1) as f64,
        )
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    }

    let image = ctx
        .get_image_data(0.0, 0.0, layout.width as f64, layout.height as f64)
        .map_err(|e| anyhow::anyhow!("{:?}", e))?;
    let pixels = image.data().0;
    log::info!(
        "[labels] atlas {}x{} for {} labels",
        layout.width,
        layout.height,
        layout.slots.len()
    );
    Ok(LabelAtlas { layout, pixels })
}

fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow::anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow::anyhow!("{:?}", e))
}
