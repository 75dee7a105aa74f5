use dotfield_core::DotField;
use web_sys as web;

/// Prebuild a circle path centered at the origin; each dot is painted by
/// translating the context and filling this one path.
pub fn circle_path(radius: f64) -> Option<web::Path2D> {
    let path = web::Path2D::new().ok()?;
    path.arc(0.0, 0.0, radius, 0.0, std::f64::consts::TAU).ok()?;
    Some(path)
}

/// Paint one frame: clear to the container's CSS size, then fill every dot
/// at `rest + offset` with its proximity-interpolated color.
pub fn draw_field(ctx: &web::CanvasRenderingContext2d, circle: &web::Path2D, field: &DotField) {
    let size = field.size();
    ctx.clear_rect(0.0, 0.0, size.x as f64, size.y as f64);

    for point in field.points() {
        let fill = field.dot_color(point).css();
        let draw = point.rest + point.offset;
        ctx.save();
        let _ = ctx.translate(draw.x as f64, draw.y as f64);
        ctx.set_fill_style_str(&fill);
        ctx.fill_with_path_2d(circle);
        ctx.restore();
    }
}
