//! Canvas2D renderer - replays DrawCommands onto an HTML5 canvas.

use tesela_core::draw::DrawCommand;
use tesela_core::widget::FontWeight;
use tesela_core::Color;
use wasm_bindgen::JsCast;
use web_sys::{CanvasRenderingContext2d, HtmlCanvasElement};

/// Renderer that draws to an HTML5 Canvas 2D context.
pub struct Canvas2DRenderer {
    canvas: HtmlCanvasElement,
    ctx: CanvasRenderingContext2d,
}

impl Canvas2DRenderer {
    /// Create a new renderer for the given canvas element.
    pub fn new(canvas: HtmlCanvasElement) -> Result<Self, String> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| format!("Failed to get 2d context: {e:?}"))?
            .ok_or("No 2d context available")?
            .dyn_into::<CanvasRenderingContext2d>()
            .map_err(|_| "Failed to cast to CanvasRenderingContext2d")?;

        Ok(Self { canvas, ctx })
    }

    /// Resize the backing canvas in device pixels.
    pub fn set_size(&self, width: u32, height: u32) {
        self.canvas.set_width(width);
        self.canvas.set_height(height);
    }

    /// Get canvas width.
    pub fn width(&self) -> u32 {
        self.canvas.width()
    }

    /// Get canvas height.
    pub fn height(&self) -> u32 {
        self.canvas.height()
    }

    /// Clear the canvas.
    pub fn clear(&self) {
        self.ctx.clear_rect(
            0.0,
            0.0,
            f64::from(self.canvas.width()),
            f64::from(self.canvas.height()),
        );
    }

    /// Render a list of draw commands.
    pub fn render(&self, commands: &[DrawCommand]) {
        for cmd in commands {
            match cmd {
                DrawCommand::Rect { bounds, style } => {
                    if let Some(fill) = style.fill {
                        self.ctx.set_fill_style_str(&color_to_css(&fill));
                        self.ctx.fill_rect(
                            f64::from(bounds.x),
                            f64::from(bounds.y),
                            f64::from(bounds.width),
                            f64::from(bounds.height),
                        );
                    }
                    if let Some(stroke) = &style.stroke {
                        self.ctx.set_stroke_style_str(&color_to_css(&stroke.color));
                        self.ctx.set_line_width(f64::from(stroke.width));
                        self.ctx.stroke_rect(
                            f64::from(bounds.x),
                            f64::from(bounds.y),
                            f64::from(bounds.width),
                            f64::from(bounds.height),
                        );
                    }
                }
                DrawCommand::Text {
                    content,
                    position,
                    style,
                } => {
                    let weight = match style.weight {
                        FontWeight::Bold => "bold",
                        FontWeight::Normal => "normal",
                    };
                    self.ctx
                        .set_font(&format!("{} {}px sans-serif", weight, style.size));
                    self.ctx.set_fill_style_str(&color_to_css(&style.color));
                    // Text positions are baselines, matching the default
                    // alphabetic textBaseline.
                    self.ctx
                        .fill_text(content, f64::from(position.x), f64::from(position.y))
                        .ok();
                }
            }
        }
    }
}

fn color_to_css(color: &Color) -> String {
    format!(
        "rgba({},{},{},{})",
        (color.r * 255.0) as u8,
        (color.g * 255.0) as u8,
        (color.b * 255.0) as u8,
        color.a
    )
}
