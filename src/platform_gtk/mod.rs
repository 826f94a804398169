use std::cell::RefCell;
use std::rc::Rc;

use gtk4 as gtk;
use gtk::prelude::*;
use tracing::warn;

use crate::api::FuelEconomyDashboard;
use crate::core::Viewport;
use crate::render::CairoRenderer;

type SharedDashboard = Rc<RefCell<FuelEconomyDashboard<CairoRenderer>>>;

/// Embeds a dashboard into a GTK `DrawingArea`.
///
/// Draws go straight to the widget's cairo context, and primary clicks are
/// routed to [`FuelEconomyDashboard::click`], followed by a redraw request.
pub struct GtkDashboardAdapter {
    drawing_area: gtk::DrawingArea,
    dashboard: SharedDashboard,
}

impl GtkDashboardAdapter {
    #[must_use]
    pub fn new(mut dashboard: FuelEconomyDashboard<CairoRenderer>) -> Self {
        // GTK drives redraws through `queue_draw`; skip the offscreen pass.
        dashboard.set_redraw_on_change(false);

        let viewport = dashboard.viewport();
        let drawing_area = gtk::DrawingArea::new();
        drawing_area.set_content_width(i32::try_from(viewport.width).unwrap_or(i32::MAX));
        drawing_area.set_content_height(i32::try_from(viewport.height).unwrap_or(i32::MAX));

        let dashboard: SharedDashboard = Rc::new(RefCell::new(dashboard));

        let draw_target = Rc::clone(&dashboard);
        drawing_area.set_draw_func(move |_area, context, width, height| {
            let mut dashboard = draw_target.borrow_mut();
            if let (Ok(width), Ok(height)) = (u32::try_from(width), u32::try_from(height)) {
                if let Err(err) = dashboard.set_viewport(Viewport::new(width, height)) {
                    warn!(error = %err, width, height, "skipping dashboard resize");
                }
            }
            if let Err(err) = dashboard.render_on_cairo_context(context) {
                warn!(error = %err, "dashboard draw failed");
            }
        });

        let click = gtk::GestureClick::new();
        let click_target = Rc::clone(&dashboard);
        let area = drawing_area.downgrade();
        click.connect_released(move |_gesture, _n_press, x, y| {
            let result = click_target.borrow_mut().click(x, y);
            match result {
                Ok(Some(_)) => {
                    if let Some(area) = area.upgrade() {
                        area.queue_draw();
                    }
                }
                Ok(None) => {}
                Err(err) => warn!(error = %err, x, y, "dashboard click failed"),
            }
        });
        drawing_area.add_controller(click);

        Self {
            drawing_area,
            dashboard,
        }
    }

    #[must_use]
    pub fn widget(&self) -> &gtk::DrawingArea {
        &self.drawing_area
    }

    #[must_use]
    pub fn dashboard(&self) -> SharedDashboard {
        Rc::clone(&self.dashboard)
    }
}
