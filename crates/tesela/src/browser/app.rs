//! WASM application entry point.

use super::canvas2d::Canvas2DRenderer;
use super::events::{content_width, mouse_event_to_chart, resize_from_width};
use super::fetch::fetch_records;
use crate::chart::ChartState;
use std::cell::RefCell;
use std::rc::Rc;
use tesela_core::Event;
use tesela_data::records_from_json;
use tesela_widgets::{legend, tooltip};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::{window, Document, HtmlCanvasElement, HtmlElement, MouseEvent};

/// Default dataset: the freeCodeCamp video-game-sales document.
pub const DATA_URL: &str =
    "https://cdn.freecodecamp.org/testable-projects-fcc/data/tree_map/video-game-sales-data.json";

/// Chart margins within the container, in CSS pixels.
pub const MARGIN_TOP: f32 = 10.0;
/// Left margin.
pub const MARGIN_LEFT: f32 = 10.0;
/// Right margin.
pub const MARGIN_RIGHT: f32 = 10.0;
/// Bottom margin, leaving room before the legend band.
pub const MARGIN_BOTTOM: f32 = 50.0;

struct Inner {
    state: ChartState,
    chart_renderer: Canvas2DRenderer,
    legend_renderer: Canvas2DRenderer,
    container: HtmlElement,
    tooltip_element: HtmlElement,
}

impl Inner {
    fn dispatch(&mut self, event: &Event) {
        self.state.handle_event(event);
        self.redraw();
    }

    fn redraw(&mut self) {
        let rect = self.state.chart_rect();
        self.chart_renderer
            .set_size(rect.width as u32, rect.height as u32);
        self.legend_renderer
            .set_size(rect.width as u32, legend::BAND_HEIGHT as u32);

        let frame = self.state.render();
        self.chart_renderer.clear();
        self.chart_renderer.render(&frame.chart);
        self.legend_renderer.clear();
        self.legend_renderer.render(&frame.legend);

        self.sync_tooltip();
    }

    // The tooltip is the one DOM element the chart writes: visibility,
    // position, content, and the data-value harness attribute.
    fn sync_tooltip(&self) {
        let style = self.tooltip_element.style();
        if self.state.tooltip().is_visible() {
            let lines = self.state.tooltip().lines();
            let html = match lines {
                [] => String::new(),
                [first, rest @ ..] => {
                    format!("<strong>{first}</strong><br>{}", rest.join("<br>"))
                }
            };
            self.tooltip_element.set_inner_html(&html);
            if let Some(value) = self.state.hovered_value() {
                let _ = self
                    .tooltip_element
                    .set_attribute("data-value", &value.to_string());
            }
            let pos = self.state.tooltip().position();
            let _ = style.set_property(
                "left",
                &format!("{}px", pos.x + tooltip::POINTER_OFFSET + MARGIN_LEFT),
            );
            let _ = style.set_property(
                "top",
                &format!("{}px", pos.y + tooltip::POINTER_OFFSET + MARGIN_TOP),
            );
            let _ = style.set_property("visibility", "visible");
        } else {
            let _ = style.set_property("visibility", "hidden");
            let _ = self.tooltip_element.remove_attribute("data-value");
        }
    }
}

/// Main application runner for the browser.
///
/// Attaches to a chart canvas, a legend canvas, and a tooltip element,
/// all pre-existing in the page; the chart computes its own pixel
/// dimensions from the container's current content width.
#[wasm_bindgen]
pub struct App {
    inner: Rc<RefCell<Inner>>,
    mousemove_callback: Option<Closure<dyn FnMut(MouseEvent)>>,
    mouseleave_callback: Option<Closure<dyn FnMut(MouseEvent)>>,
    resize_callback: Option<Closure<dyn FnMut(web_sys::Event)>>,
}

#[wasm_bindgen]
impl App {
    /// Create a chart from a dataset document already in memory.
    #[wasm_bindgen(constructor)]
    pub fn new(
        container_id: &str,
        chart_canvas_id: &str,
        legend_canvas_id: &str,
        tooltip_id: &str,
        dataset_json: &str,
    ) -> Result<App, JsValue> {
        console_error_panic_hook::set_once();
        let records =
            records_from_json(dataset_json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        Self::from_records(
            container_id,
            chart_canvas_id,
            legend_canvas_id,
            tooltip_id,
            records,
        )
    }

    /// Fetch the dataset, then create the chart.
    ///
    /// Failure is surfaced to the end user as a blocking alert and the
    /// chart never starts; there is no retry.
    pub async fn load(
        container_id: String,
        chart_canvas_id: String,
        legend_canvas_id: String,
        tooltip_id: String,
        url: Option<String>,
    ) -> Result<App, JsValue> {
        console_error_panic_hook::set_once();
        let url = url.unwrap_or_else(|| DATA_URL.to_string());
        match fetch_records(&url).await {
            Ok(records) => Self::from_records(
                &container_id,
                &chart_canvas_id,
                &legend_canvas_id,
                &tooltip_id,
                records,
            ),
            Err(err) => {
                web_sys::console::error_1(&JsValue::from_str(&format!(
                    "Error fetching data: {err}"
                )));
                if let Some(w) = window() {
                    let _ = w.alert_with_message("Failed to load data. Please try again later.");
                }
                Err(JsValue::from_str(&err.to_string()))
            }
        }
    }

    /// Dispatch a chart event encoded as JSON.
    pub fn handle_event_json(&self, json: &str) -> Result<(), JsValue> {
        let event: Event =
            serde_json::from_str(json).map_err(|e| JsValue::from_str(&e.to_string()))?;
        self.inner.borrow_mut().dispatch(&event);
        Ok(())
    }

    /// Re-layout for an explicit content width.
    pub fn resize_to(&self, width: f32) {
        self.inner.borrow_mut().dispatch(&resize_from_width(width));
    }

    /// Repaint the current state.
    pub fn render(&self) {
        self.inner.borrow_mut().redraw();
    }

    /// The laid-out tiles (name, category, value, geometry) as JSON,
    /// for external test harnesses.
    pub fn tiles_json(&self) -> String {
        serde_json::to_string(self.inner.borrow().state.tiles()).unwrap_or_default()
    }

    /// The hovered value while the tooltip is visible.
    pub fn hovered_value(&self) -> Option<f64> {
        self.inner.borrow().state.hovered_value()
    }

    /// Current chart width in pixels.
    pub fn chart_width(&self) -> f32 {
        self.inner.borrow().state.chart_rect().width
    }

    /// Current chart height in pixels.
    pub fn chart_height(&self) -> f32 {
        self.inner.borrow().state.chart_rect().height
    }
}

impl App {
    fn from_records(
        container_id: &str,
        chart_canvas_id: &str,
        legend_canvas_id: &str,
        tooltip_id: &str,
        records: Vec<tesela_data::Record>,
    ) -> Result<Self, JsValue> {
        let document = window()
            .ok_or("No window")?
            .document()
            .ok_or("No document")?;

        let container: HtmlElement = lookup(&document, container_id)?;
        let chart_canvas: HtmlCanvasElement = lookup(&document, chart_canvas_id)?;
        let legend_canvas: HtmlCanvasElement = lookup(&document, legend_canvas_id)?;
        let tooltip_element: HtmlElement = lookup(&document, tooltip_id)?;

        let width = content_width(&container, MARGIN_LEFT + MARGIN_RIGHT);
        let state = ChartState::new(records, width).map_err(|e| e.to_string())?;

        let chart_renderer = Canvas2DRenderer::new(chart_canvas.clone())?;
        let legend_renderer = Canvas2DRenderer::new(legend_canvas)?;

        let mut inner = Inner {
            state,
            chart_renderer,
            legend_renderer,
            container,
            tooltip_element,
        };
        inner.redraw();

        let mut app = Self {
            inner: Rc::new(RefCell::new(inner)),
            mousemove_callback: None,
            mouseleave_callback: None,
            resize_callback: None,
        };
        app.attach_listeners(&chart_canvas);
        Ok(app)
    }

    fn attach_listeners(&mut self, chart_canvas: &HtmlCanvasElement) {
        let inner = Rc::clone(&self.inner);
        let mousemove = Closure::new(move |e: MouseEvent| {
            if let Some(event) = mouse_event_to_chart(&e, "mousemove") {
                inner.borrow_mut().dispatch(&event);
            }
        });
        chart_canvas
            .add_event_listener_with_callback("mousemove", mousemove.as_ref().unchecked_ref())
            .ok();
        self.mousemove_callback = Some(mousemove);

        let inner = Rc::clone(&self.inner);
        let mouseleave = Closure::new(move |e: MouseEvent| {
            if let Some(event) = mouse_event_to_chart(&e, "mouseleave") {
                inner.borrow_mut().dispatch(&event);
            }
        });
        chart_canvas
            .add_event_listener_with_callback("mouseleave", mouseleave.as_ref().unchecked_ref())
            .ok();
        self.mouseleave_callback = Some(mouseleave);

        // Every resize re-lays-out synchronously; no debounce.
        let inner = Rc::clone(&self.inner);
        let resize = Closure::new(move |_: web_sys::Event| {
            let width = {
                let borrowed = inner.borrow();
                content_width(&borrowed.container, MARGIN_LEFT + MARGIN_RIGHT)
            };
            inner.borrow_mut().dispatch(&resize_from_width(width));
        });
        if let Some(w) = window() {
            w.add_event_listener_with_callback("resize", resize.as_ref().unchecked_ref())
                .ok();
        }
        self.resize_callback = Some(resize);
    }
}

fn lookup<T: JsCast>(document: &Document, id: &str) -> Result<T, JsValue> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| JsValue::from_str(&format!("Element '{id}' not found")))?
        .dyn_into::<T>()
        .map_err(|_| JsValue::from_str(&format!("Element '{id}' has the wrong type")))
}

/// Initialize panic hook for better error messages.
#[wasm_bindgen(start)]
pub fn init() {
    console_error_panic_hook::set_once();
}
