//! The two request/render flows.
//!
//! [`Explorer`] performs the service calls and tags every result with a request token.
//! [`ExplorerView`] owns all chart and table state and applies a tagged result only if
//! it is still the newest one for its flow. The split lets the calls run on a runtime
//! thread while the view stays with whoever draws it.

use crate::application::collector::SliderPanel;
use crate::application::loading::LoadingGuard;
use crate::application::panels::PanelVisibility;
use crate::application::render::curve::{
    self, LineChart, SummaryTable, render_parameters_echo, render_table,
};
use crate::application::render::demo::{
    DemoSummary, ScatterChart, render_demo_summary, render_original_chart,
    render_transformation_chart,
};
use crate::application::sequencer::{RequestSequencer, Tagged};
use crate::domain::curve::{CurveRequest, CurveResponse, SavedParameters};
use crate::domain::demo::{DemoDataset, DemoResponse};
use crate::domain::errors::ServiceError;
use crate::domain::ports::{LoadingIndicator, SigmoidService};
use std::sync::Arc;
use tracing::{debug, info, warn};

pub type CurveOutcome = Tagged<Result<CurveResponse, ServiceError>>;
pub type DemoOutcome = Tagged<Result<DemoDataset, ServiceError>>;

/// What happened when an outcome reached the view.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Applied {
    Rendered,
    Failed,
    Stale,
}

#[derive(Debug, Default)]
pub struct Sequencers {
    pub curve: RequestSequencer,
    pub demo: RequestSequencer,
}

pub struct Explorer {
    service: Arc<dyn SigmoidService>,
    loading: Arc<dyn LoadingIndicator>,
    sequencers: Arc<Sequencers>,
}

impl Explorer {
    pub fn new(service: Arc<dyn SigmoidService>, loading: Arc<dyn LoadingIndicator>) -> Self {
        Self {
            service,
            loading,
            sequencers: Arc::new(Sequencers::default()),
        }
    }

    pub fn sequencers(&self) -> Arc<Sequencers> {
        self.sequencers.clone()
    }

    pub async fn calculate_sigmoid(&self, request: CurveRequest) -> CurveOutcome {
        let token = self.sequencers.curve.issue();
        let _loading = LoadingGuard::start(self.loading.as_ref(), "Calculating sigmoid...");

        debug!(token, ?request, "Requesting sigmoid curve");
        let value = self.service.compute_curve(&request).await;
        match &value {
            Ok(response) => info!(token, samples = response.data.len(), "Curve received"),
            Err(e) => warn!(token, "Curve request failed: {}", e),
        }
        Tagged { token, value }
    }

    /// Replays a parameter set the backend persisted earlier.
    pub async fn load_saved_curve(&self, id: u64) -> CurveOutcome {
        let token = self.sequencers.curve.issue();
        let _loading = LoadingGuard::start(self.loading.as_ref(), "Loading saved curve...");

        let value = self.service.fetch_saved_curve(id).await;
        if let Err(e) = &value {
            warn!(token, id, "Saved curve request failed: {}", e);
        }
        Tagged { token, value }
    }

    pub async fn load_demo(&self) -> DemoOutcome {
        let token = self.sequencers.demo.issue();
        let _loading = LoadingGuard::start(self.loading.as_ref(), "Loading demonstration...");

        let value = self
            .service
            .fetch_demo()
            .await
            .and_then(DemoResponse::into_dataset);
        match &value {
            Ok(dataset) => info!(token, samples = dataset.samples.len(), "Demo received"),
            Err(e) => warn!(token, "Demo request failed: {}", e),
        }
        Tagged { token, value }
    }

    pub async fn saved_parameters(&self) -> Result<Vec<SavedParameters>, ServiceError> {
        let _loading = LoadingGuard::start(self.loading.as_ref(), "Loading history...");
        self.service.list_saved_parameters().await
    }
}

/// Everything the user sees. Owns the chart handles the renderers draw into.
pub struct ExplorerView {
    pub sliders: SliderPanel,
    pub line_chart: LineChart,
    pub table: SummaryTable,
    pub results_info: Option<String>,
    pub original_chart: Option<ScatterChart>,
    pub transformation_chart: Option<ScatterChart>,
    pub demo_summary: Option<DemoSummary>,
    pub panels: PanelVisibility,
    pub history: Vec<SavedParameters>,
    pub alert: Option<String>,
    sequencers: Arc<Sequencers>,
}

impl ExplorerView {
    pub fn new(sequencers: Arc<Sequencers>) -> Self {
        Self {
            sliders: SliderPanel::default(),
            line_chart: LineChart::default(),
            table: SummaryTable::default(),
            results_info: None,
            original_chart: None,
            transformation_chart: None,
            demo_summary: None,
            panels: PanelVisibility::default(),
            history: Vec::new(),
            alert: None,
            sequencers,
        }
    }

    pub fn apply_curve(&mut self, outcome: CurveOutcome) -> Applied {
        if !self.sequencers.curve.is_current(outcome.token) {
            debug!(token = outcome.token, "Discarding stale curve response");
            return Applied::Stale;
        }

        match outcome.value {
            Ok(response) => {
                curve::render_curve(&mut self.line_chart, &response);
                self.table = render_table(&response);
                self.results_info = Some(render_parameters_echo(&response.parameters));
                Applied::Rendered
            }
            Err(e) => {
                self.raise(&e);
                Applied::Failed
            }
        }
    }

    pub fn apply_demo(&mut self, outcome: DemoOutcome) -> Applied {
        if !self.sequencers.demo.is_current(outcome.token) {
            debug!(token = outcome.token, "Discarding stale demo response");
            return Applied::Stale;
        }

        match outcome.value {
            Ok(dataset) => {
                render_original_chart(&mut self.original_chart, &dataset);
                render_transformation_chart(&mut self.transformation_chart, &dataset);
                self.demo_summary = Some(render_demo_summary(&dataset));
                self.panels.show_demo();
                Applied::Rendered
            }
            Err(e) => {
                self.raise(&e);
                Applied::Failed
            }
        }
    }

    pub fn apply_history(&mut self, result: Result<Vec<SavedParameters>, ServiceError>) {
        match result {
            Ok(history) => self.history = history,
            Err(e) => self.raise(&e),
        }
    }

    pub fn hide_demo(&mut self) {
        self.panels.hide_demo();
    }

    pub fn dismiss_alert(&mut self) {
        self.alert = None;
    }

    fn raise(&mut self, error: &ServiceError) {
        self.alert = Some(error.alert_message());
    }
}
