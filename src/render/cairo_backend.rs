use cairo::{Context, Format, ImageSurface};
use pango::FontDescription;
use std::f64::consts::{FRAC_PI_2, PI};
use std::fs::File;
use std::path::Path;
use tracing::trace;

use crate::core::Viewport;
use crate::error::{DashboardError, DashboardResult};
use crate::render::{
    Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer, TextHAlign, TextPrimitive,
};

/// Counts of primitives drawn by the most recent render pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct CairoRenderStats {
    pub rects_drawn: usize,
    pub lines_drawn: usize,
    pub texts_drawn: usize,
}

/// Renderers able to paint into a context they do not own, such as the one
/// handed to a GTK draw callback.
pub trait CairoContextRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> DashboardResult<()>;
}

/// Cairo/Pango renderer.
///
/// `Renderer::render` paints into an owned ARGB surface that can be saved
/// with [`CairoRenderer::write_png`]. Paint order is cards and dots first,
/// then strokes, then labels, so text is never covered by a series.
#[derive(Debug)]
pub struct CairoRenderer {
    surface: ImageSurface,
    background: Color,
    last_stats: CairoRenderStats,
}

impl CairoRenderer {
    pub fn new(width: i32, height: i32) -> DashboardResult<Self> {
        if width <= 0 || height <= 0 {
            return Err(DashboardError::InvalidViewport {
                width: width.max(0).unsigned_abs(),
                height: height.max(0).unsigned_abs(),
            });
        }
        let surface = ImageSurface::create(Format::ARgb32, width, height)
            .map_err(|err| backend_error("create image surface", err))?;
        Ok(Self {
            surface,
            background: Color::rgb(0.98, 0.98, 0.98),
            last_stats: CairoRenderStats::default(),
        })
    }

    /// Sizes the owned surface to `viewport`.
    pub fn for_viewport(viewport: Viewport) -> DashboardResult<Self> {
        let width = i32::try_from(viewport.width)
            .map_err(|_| DashboardError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            })?;
        let height = i32::try_from(viewport.height)
            .map_err(|_| DashboardError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            })?;
        Self::new(width, height)
    }

    #[must_use]
    pub fn surface(&self) -> &ImageSurface {
        &self.surface
    }

    pub fn set_clear_color(&mut self, color: Color) -> DashboardResult<()> {
        color.validate()?;
        self.background = color;
        Ok(())
    }

    #[must_use]
    pub fn last_stats(&self) -> CairoRenderStats {
        self.last_stats
    }

    pub fn write_png(&self, path: &Path) -> DashboardResult<()> {
        let mut file = File::create(path)?;
        self.surface
            .write_to_png(&mut file)
            .map_err(|err| DashboardError::Backend(format!("encode png: {err}")))
    }

    fn paint(&mut self, context: &Context, frame: &RenderFrame) -> DashboardResult<()> {
        frame.validate()?;

        set_source(context, self.background);
        context
            .paint()
            .map_err(|err| backend_error("clear background", err))?;

        for rect in &frame.rects {
            fill_rect(context, rect).map_err(|err| backend_error("fill rect", err))?;
        }
        for line in &frame.lines {
            stroke_line(context, line).map_err(|err| backend_error("stroke line", err))?;
        }
        context.set_dash(&[], 0.0);
        for text in &frame.texts {
            show_text(context, text);
        }

        self.last_stats = CairoRenderStats {
            rects_drawn: frame.rects.len(),
            lines_drawn: frame.lines.len(),
            texts_drawn: frame.texts.len(),
        };
        trace!(stats = ?self.last_stats, "cairo pass finished");
        Ok(())
    }
}

impl Renderer for CairoRenderer {
    fn render(&mut self, frame: &RenderFrame) -> DashboardResult<()> {
        let context =
            Context::new(&self.surface).map_err(|err| backend_error("create context", err))?;
        self.paint(&context, frame)
    }
}

impl CairoContextRenderer for CairoRenderer {
    fn render_on_cairo_context(
        &mut self,
        context: &Context,
        frame: &RenderFrame,
    ) -> DashboardResult<()> {
        self.paint(context, frame)
    }
}

fn set_source(context: &Context, color: Color) {
    context.set_source_rgba(color.red, color.green, color.blue, color.alpha);
}

fn fill_rect(context: &Context, rect: &RectPrimitive) -> Result<(), cairo::Error> {
    rounded_rect_path(context, rect);
    set_source(context, rect.fill_color);
    if rect.border_width <= 0.0 {
        return context.fill();
    }
    context.fill_preserve()?;
    set_source(context, rect.border_color);
    context.set_line_width(rect.border_width);
    context.set_dash(&[], 0.0);
    context.stroke()
}

fn stroke_line(context: &Context, line: &LinePrimitive) -> Result<(), cairo::Error> {
    set_source(context, line.color);
    context.set_line_width(line.stroke_width);
    context.set_dash(line.stroke_style.dash_pattern(), 0.0);
    context.move_to(line.x1, line.y1);
    context.line_to(line.x2, line.y2);
    context.stroke()
}

fn show_text(context: &Context, text: &TextPrimitive) {
    let layout = pangocairo::functions::create_layout(context);
    let weight = if text.bold { " Bold" } else { "" };
    let font = FontDescription::from_string(&format!("Sans{weight} {}px", text.font_size_px));
    layout.set_font_description(Some(&font));
    layout.set_text(&text.text);

    let width = f64::from(layout.pixel_size().0);
    let left = match text.h_align {
        TextHAlign::Left => text.x,
        TextHAlign::Center => text.x - width / 2.0,
        TextHAlign::Right => text.x - width,
    };
    set_source(context, text.color);
    context.move_to(left, text.y);
    pangocairo::functions::show_layout(context, &layout);
}

/// Plain rectangle when the radius is zero; dots use a radius of half
/// their side, which yields a circle.
fn rounded_rect_path(context: &Context, rect: &RectPrimitive) {
    let radius = rect
        .corner_radius
        .min(rect.width / 2.0)
        .min(rect.height / 2.0);
    if radius <= 0.0 {
        context.rectangle(rect.x, rect.y, rect.width, rect.height);
        return;
    }

    let (left, top) = (rect.x + radius, rect.y + radius);
    let (right, bottom) = (rect.x + rect.width - radius, rect.y + rect.height - radius);
    context.new_sub_path();
    context.arc(right, top, radius, -FRAC_PI_2, 0.0);
    context.arc(right, bottom, radius, 0.0, FRAC_PI_2);
    context.arc(left, bottom, radius, FRAC_PI_2, PI);
    context.arc(left, top, radius, PI, 3.0 * FRAC_PI_2);
    context.close_path();
}

fn backend_error(step: &str, err: cairo::Error) -> DashboardError {
    DashboardError::Backend(format!("cairo could not {step}: {err}"))
}
