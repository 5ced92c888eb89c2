//! DOM event translation into chart events.

use crate::chart::ASPECT_RATIO;
use tesela_core::{Event, Point};
use web_sys::{Element, MouseEvent};

/// Convert a DOM mouse event on the chart canvas into a chart event.
///
/// Coordinates are offset-based, so they are already relative to the
/// chart origin. Unknown event types map to `None`.
pub fn mouse_event_to_chart(event: &MouseEvent, event_type: &str) -> Option<Event> {
    match event_type {
        "mousemove" | "mouseover" => Some(Event::PointerMove {
            position: Point::new(event.offset_x() as f32, event.offset_y() as f32),
        }),
        "mouseleave" | "mouseout" => Some(Event::PointerLeave),
        _ => None,
    }
}

/// Build a resize event from a container's current content width.
pub fn resize_from_width(width: f32) -> Event {
    Event::Resize {
        width,
        height: width * ASPECT_RATIO,
    }
}

/// The container's content width in CSS pixels, less the chart margins.
pub fn content_width(container: &Element, horizontal_margins: f32) -> f32 {
    (container.client_width() as f32 - horizontal_margins).max(0.0)
}
