use tracing::{debug, trace};

use crate::core::{ChartProjector, ChartRow, FilterSelection, FuelDataset, FuelRecord, Viewport};
use crate::error::{DashboardError, DashboardResult};
use crate::extensions::{DashboardContext, DashboardEvent, DashboardObserver};
use crate::interaction::{ToggleButton, hit_test, layout_toggle_buttons};
use crate::render::{RenderFrame, Renderer};

#[cfg(feature = "cairo-backend")]
use crate::render::CairoContextRenderer;

use super::frame_builder::build_dashboard_frame;
use super::layout::DashboardLayout;
use super::series_style::ChartSeries;
use super::table::DetailTable;
use super::view::DashboardView;
use super::DashboardConfig;

/// Main facade consumed by host applications.
///
/// Owns the dataset, the model selection and the views derived from them.
/// Every state change runs synchronously: replace selection, recompute the
/// view, notify observers, then redraw when `redraw_on_change` is set.
pub struct FuelEconomyDashboard<R: Renderer> {
    renderer: R,
    config: DashboardConfig,
    dataset: FuelDataset,
    projector: ChartProjector,
    selection: FilterSelection,
    view: DashboardView,
    layout: DashboardLayout,
    buttons: Vec<ToggleButton>,
    observers: Vec<Box<dyn DashboardObserver>>,
}

impl<R: Renderer> FuelEconomyDashboard<R> {
    pub fn new(
        renderer: R,
        config: DashboardConfig,
        dataset: FuelDataset,
    ) -> DashboardResult<Self> {
        config.validate()?;

        let projector = ChartProjector::for_dataset(&dataset).with_metrics(&config.chart_metrics);
        let selection = FilterSelection::new();
        let view = DashboardView::derive(&dataset, &selection, &projector, &config.palette);
        let layout =
            DashboardLayout::compute(config.viewport, &config.layout, view.filtered.len())?;
        let buttons = Self::layout_buttons(&config, &dataset, &selection, &layout);

        debug!(
            records = dataset.len(),
            models = dataset.models().len(),
            width = config.viewport.width,
            height = config.viewport.height,
            "created fuel economy dashboard"
        );

        Ok(Self {
            renderer,
            config,
            dataset,
            projector,
            selection,
            view,
            layout,
            buttons,
            observers: Vec::new(),
        })
    }

    /// Creates a dashboard over [`FuelDataset::sample`].
    pub fn with_sample_data(renderer: R, config: DashboardConfig) -> DashboardResult<Self> {
        Self::new(renderer, config, FuelDataset::sample())
    }

    /// Toggles `model` in the selection and refreshes every derived view.
    ///
    /// Any name is accepted, including names absent from the dataset. The
    /// toggle itself cannot fail; errors only come from the redraw.
    pub fn toggle_model(&mut self, model: &str) -> DashboardResult<()> {
        let next = self.selection.toggled(model);
        let selected = next.is_selected(model);
        debug!(model, selected, selected_len = next.len(), "toggle model");

        self.selection = next;
        self.emit(&DashboardEvent::ModelToggled {
            model: model.to_owned(),
            selected,
        });
        self.recompute_view()?;

        if self.config.redraw_on_change {
            self.render()?;
        }
        Ok(())
    }

    /// Routes a pointer click to the toggle button under it.
    ///
    /// Returns the toggled model, or `None` when the click missed every button.
    pub fn click(&mut self, x: f64, y: f64) -> DashboardResult<Option<String>> {
        let Some(model) = hit_test(&self.buttons, x, y).map(|button| button.model.clone()) else {
            trace!(x, y, "click outside toggle buttons");
            return Ok(None);
        };
        self.toggle_model(&model)?;
        Ok(Some(model))
    }

    #[must_use]
    pub fn is_selected(&self, model: &str) -> bool {
        self.selection.is_selected(model)
    }

    #[must_use]
    pub fn selection(&self) -> &FilterSelection {
        &self.selection
    }

    #[must_use]
    pub fn dataset(&self) -> &FuelDataset {
        &self.dataset
    }

    #[must_use]
    pub fn config(&self) -> &DashboardConfig {
        &self.config
    }

    #[must_use]
    pub fn view(&self) -> &DashboardView {
        &self.view
    }

    #[must_use]
    pub fn filtered_records(&self) -> &[FuelRecord] {
        &self.view.filtered
    }

    #[must_use]
    pub fn chart_rows(&self) -> &[ChartRow] {
        &self.view.chart_rows
    }

    #[must_use]
    pub fn visible_series(&self) -> &[ChartSeries] {
        &self.view.series
    }

    #[must_use]
    pub fn detail_table(&self) -> DetailTable {
        DetailTable::from_records(&self.view.filtered)
    }

    #[must_use]
    pub fn buttons(&self) -> &[ToggleButton] {
        &self.buttons
    }

    #[must_use]
    pub fn layout(&self) -> &DashboardLayout {
        &self.layout
    }

    #[must_use]
    pub fn viewport(&self) -> Viewport {
        self.config.viewport
    }

    /// Resizes the dashboard; a no-op when the size is unchanged.
    ///
    /// Redraws after relayout when `redraw_on_change` is set.
    pub fn set_viewport(&mut self, viewport: Viewport) -> DashboardResult<()> {
        if !viewport.is_valid() {
            return Err(DashboardError::InvalidViewport {
                width: viewport.width,
                height: viewport.height,
            });
        }
        if viewport == self.config.viewport {
            return Ok(());
        }

        self.relayout(viewport)?;
        self.emit(&DashboardEvent::Resized {
            width: viewport.width,
            height: viewport.height,
        });

        if self.config.redraw_on_change {
            self.render()?;
        }
        Ok(())
    }

    pub fn set_redraw_on_change(&mut self, redraw_on_change: bool) {
        self.config.redraw_on_change = redraw_on_change;
    }

    pub fn add_observer(&mut self, observer: Box<dyn DashboardObserver>) {
        self.observers.push(observer);
    }

    /// Removes every observer with `id`; returns whether any was removed.
    pub fn remove_observer(&mut self, id: &str) -> bool {
        let before = self.observers.len();
        self.observers.retain(|observer| observer.id() != id);
        before != self.observers.len()
    }

    #[must_use]
    pub fn observer_count(&self) -> usize {
        self.observers.len()
    }

    /// Materializes the current scene without drawing it.
    pub fn build_frame(&self) -> DashboardResult<RenderFrame> {
        build_dashboard_frame(&self.config, &self.layout, &self.view, &self.buttons)
    }

    pub fn render(&mut self) -> DashboardResult<()> {
        let frame = self.build_frame()?;
        self.renderer.render(&frame)?;
        self.emit(&DashboardEvent::Rendered {
            summary: frame.summary(),
        });
        Ok(())
    }

    /// Renders the dashboard into an external cairo context.
    ///
    /// Used by GTK draw callbacks; the renderer stays free of GTK types.
    #[cfg(feature = "cairo-backend")]
    pub fn render_on_cairo_context(&mut self, context: &cairo::Context) -> DashboardResult<()>
    where
        R: CairoContextRenderer,
    {
        let frame = self.build_frame()?;
        self.renderer.render_on_cairo_context(context, &frame)?;
        self.emit(&DashboardEvent::Rendered {
            summary: frame.summary(),
        });
        Ok(())
    }

    #[must_use]
    pub fn renderer(&self) -> &R {
        &self.renderer
    }

    #[must_use]
    pub fn into_renderer(self) -> R {
        self.renderer
    }

    fn recompute_view(&mut self) -> DashboardResult<()> {
        let view = DashboardView::derive(
            &self.dataset,
            &self.selection,
            &self.projector,
            &self.config.palette,
        );
        let event = DashboardEvent::ViewRecomputed {
            filtered_len: view.filtered.len(),
            chart_rows_len: view.chart_rows.len(),
        };
        self.view = view;
        self.relayout(self.config.viewport)?;
        self.emit(&event);
        Ok(())
    }

    /// Table height and button states depend on the view, so both are
    /// rebuilt after every recompute and resize.
    fn relayout(&mut self, viewport: Viewport) -> DashboardResult<()> {
        let row_count = self.view.filtered.len();
        let layout = DashboardLayout::compute(viewport, &self.config.layout, row_count)?;
        self.config.viewport = viewport;
        self.layout = layout;
        self.buttons =
            Self::layout_buttons(&self.config, &self.dataset, &self.selection, &self.layout);
        Ok(())
    }

    fn layout_buttons(
        config: &DashboardConfig,
        dataset: &FuelDataset,
        selection: &FilterSelection,
        layout: &DashboardLayout,
    ) -> Vec<ToggleButton> {
        let card = layout.chart_card;
        layout_toggle_buttons(
            dataset.models(),
            selection,
            card.right() - config.layout.card_padding_px,
            layout.header_center_y - config.buttons.height_px / 2.0,
            config.buttons,
        )
    }

    fn context(&self) -> DashboardContext {
        DashboardContext {
            viewport: self.config.viewport,
            dataset_len: self.dataset.len(),
            selected_len: self.selection.len(),
            filtered_len: self.view.filtered.len(),
            chart_rows_len: self.view.chart_rows.len(),
        }
    }

    fn emit(&mut self, event: &DashboardEvent) {
        let context = self.context();
        for observer in &mut self.observers {
            observer.on_event(event, context);
        }
    }
}
