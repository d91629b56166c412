use anyhow::anyhow;
use scene_core::ScrollMetrics;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Look up the mount canvas by element id.
pub fn find_canvas(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    let el = document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?;
    el.dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!("#{} is not a canvas: {:?}", id, e))
}

/// Match the canvas drawing buffer to its CSS size times devicePixelRatio.
/// Returns the new backing size.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement) -> (u32, u32) {
    if let Some(w) = web::window() {
        let dpr = w.device_pixel_ratio();
        let rect = canvas.get_bounding_client_rect();
        let w_px = (rect.width() * dpr) as u32;
        let h_px = (rect.height() * dpr) as u32;
        canvas.set_width(w_px.max(1));
        canvas.set_height(h_px.max(1));
    }
    (canvas.width(), canvas.height())
}

/// Scroll measurements of the document's scrolling element.
pub fn scroll_metrics(document: &web::Document) -> Option<ScrollMetrics> {
    let el = document.document_element()?;
    Some(ScrollMetrics {
        scroll_top: el.scroll_top() as f64,
        scroll_height: el.scroll_height() as f64,
        client_height: el.client_height() as f64,
    })
}
