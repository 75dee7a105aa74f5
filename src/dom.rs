use glam::Vec2;
use web_sys as web;

/// Resize the canvas backing store to the container's CSS size times the
/// device pixel ratio, and scale the 2D context so all painting happens in
/// CSS pixel coordinates regardless of backing density. Returns the CSS size.
pub fn sync_canvas_backing_size(
    container: &web::Element,
    canvas: &web::HtmlCanvasElement,
    ctx: &web::CanvasRenderingContext2d,
) -> Vec2 {
    let rect = container.get_bounding_client_rect();
    let (width, height) = (rect.width(), rect.height());
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);

    canvas.set_width(((width * dpr) as u32).max(1));
    canvas.set_height(((height * dpr) as u32).max(1));

    // Absolute transform so repeated resizes don't stack the scale
    let _ = ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);

    Vec2::new(width as f32, height as f32)
}
