use std::sync::Arc;

use crate::{
    foundation::core::{Affine, BezPath, Canvas, Point},
    foundation::error::{FaviconError, FaviconResult},
    scene::cloud::{
        CLOUD_FILL, CLOUD_HIGHLIGHT, CloudScene, cloud_highlight, cloud_outline, reference_center,
        reference_to_canvas,
    },
    scene::paint::Gradient,
};

/// Offscreen drawing surface the favicon is rendered into.
///
/// Pixels are premultiplied RGBA8, tightly packed, row-major. The surface is created once and
/// every [`CloudSurface::render_frame`] fully replaces its contents, so a frame depends only on the
/// clock value it was rendered for.
pub struct CloudSurface {
    canvas: Canvas,
    ctx: vello_cpu::RenderContext,
    pixmap: vello_cpu::Pixmap,
    outline: BezPath,
    highlight: BezPath,
}

impl std::fmt::Debug for CloudSurface {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("CloudSurface")
            .field("canvas", &self.canvas)
            .finish_non_exhaustive()
    }
}

impl CloudSurface {
    /// Allocate a fully transparent surface.
    pub fn new(canvas: Canvas) -> Self {
        Self {
            canvas,
            ctx: vello_cpu::RenderContext::new(canvas.width, canvas.height),
            pixmap: vello_cpu::Pixmap::new(canvas.width, canvas.height),
            outline: cloud_outline(),
            highlight: cloud_highlight(),
        }
    }

    /// Surface dimensions.
    pub fn canvas(&self) -> Canvas {
        self.canvas
    }

    /// Premultiplied RGBA8 pixels.
    pub fn pixels(&self) -> &[u8] {
        self.pixmap.data_as_u8_slice()
    }

    /// Premultiplied RGBA8 value of the pixel at `(x, y)`, if inside the surface.
    pub fn pixel(&self, x: u16, y: u16) -> Option<[u8; 4]> {
        if x >= self.canvas.width || y >= self.canvas.height {
            return None;
        }
        let idx = (usize::from(y) * usize::from(self.canvas.width) + usize::from(x)) * 4;
        let px = self.pixels().get(idx..idx + 4)?;
        Some([px[0], px[1], px[2], px[3]])
    }

    /// Replace the surface contents with the cloud scene at `time_ms`.
    ///
    /// The surface is cleared to transparent before anything is drawn.
    pub fn render_frame(&mut self, time_ms: f64) -> FaviconResult<()> {
        if !time_ms.is_finite() {
            return Err(FaviconError::validation("frame time must be finite"));
        }

        clear_pixmap_to_transparent(&mut self.pixmap);

        let canvas = self.canvas;
        let scene = CloudScene::at(time_ms, reference_center());
        let view = reference_to_canvas(canvas);
        let ctx = &mut self.ctx;
        ctx.reset();
        ctx.set_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_paint_transform(vello_cpu::kurbo::Affine::IDENTITY);
        ctx.set_blend_mode(vello_cpu::peniko::BlendMode::default());

        // Geometry is flattened into canvas space up front so every gradient image lines up with
        // the pixel grid under an identity transform.
        for layer in scene.layers() {
            let to_canvas = view * layer.local_to_reference();
            ctx.push_opacity_layer(layer.alpha);

            ctx.set_paint(gradient_image(&CLOUD_FILL, to_canvas, canvas)?);
            ctx.fill_path(&bezpath_to_cpu(&(to_canvas * self.outline.clone())));

            ctx.set_paint(gradient_image(&CLOUD_HIGHLIGHT, to_canvas, canvas)?);
            ctx.fill_path(&bezpath_to_cpu(&(to_canvas * self.highlight.clone())));

            ctx.pop_layer();
        }

        ctx.set_paint(gradient_image(
            &scene.puff.glow(),
            view,
            canvas,
        )?);
        ctx.fill_path(&bezpath_to_cpu(&(view * scene.puff.outline())));

        ctx.flush();
        ctx.render_to_pixmap(&mut self.pixmap);
        Ok(())
    }
}

fn clear_pixmap_to_transparent(pixmap: &mut vello_cpu::Pixmap) {
    pixmap.data_as_u8_slice_mut().fill(0);
}

/// Rasterize `gradient` (defined in local space) over the whole canvas.
///
/// `to_canvas` maps local coordinates to pixels; samples are taken at pixel centers.
fn gradient_image(
    gradient: &Gradient,
    to_canvas: Affine,
    canvas: Canvas,
) -> FaviconResult<vello_cpu::Image> {
    let to_local = to_canvas.inverse();
    let mut bytes = vec![0u8; canvas.rgba_len()];
    let w = usize::from(canvas.width);
    for (i, px) in bytes.chunks_exact_mut(4).enumerate() {
        let x = (i % w) as f64 + 0.5;
        let y = (i / w) as f64 + 0.5;
        let c = gradient.sample_premul(to_local * Point::new(x, y));
        px.copy_from_slice(&c.to_array());
    }
    rgba_premul_to_image(&bytes, canvas)
}

fn bezpath_to_cpu(path: &BezPath) -> vello_cpu::kurbo::BezPath {
    use kurbo::PathEl;

    let mut out = vello_cpu::kurbo::BezPath::new();
    for &el in path.elements() {
        match el {
            PathEl::MoveTo(p) => out.move_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::LineTo(p) => out.line_to(vello_cpu::kurbo::Point::new(p.x, p.y)),
            PathEl::QuadTo(p1, p2) => out.quad_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
            ),
            PathEl::CurveTo(p1, p2, p3) => out.curve_to(
                vello_cpu::kurbo::Point::new(p1.x, p1.y),
                vello_cpu::kurbo::Point::new(p2.x, p2.y),
                vello_cpu::kurbo::Point::new(p3.x, p3.y),
            ),
            PathEl::ClosePath => out.close_path(),
        }
    }
    out
}

fn pixmap_from_premul_bytes(bytes: &[u8], canvas: Canvas) -> FaviconResult<vello_cpu::Pixmap> {
    if bytes.len() != canvas.rgba_len() {
        return Err(FaviconError::render("pixmap byte len mismatch"));
    }
    // Pixmap stores PremulRgba8; our bytes are already premultiplied.
    let pixels = bytes
        .chunks_exact(4)
        .map(|px| vello_cpu::peniko::color::PremulRgba8::from_u8_array([px[0], px[1], px[2], px[3]]))
        .collect::<Vec<_>>();
    Ok(vello_cpu::Pixmap::from_parts_with_opacity(
        pixels,
        canvas.width,
        canvas.height,
        true,
    ))
}

fn rgba_premul_to_image(bytes_premul: &[u8], canvas: Canvas) -> FaviconResult<vello_cpu::Image> {
    let pixmap = pixmap_from_premul_bytes(bytes_premul, canvas)?;
    Ok(vello_cpu::Image {
        image: vello_cpu::ImageSource::Pixmap(Arc::new(pixmap)),
        sampler: vello_cpu::peniko::ImageSampler::default(),
    })
}

#[cfg(test)]
#[path = "../../tests/unit/render/cpu.rs"]
mod tests;
