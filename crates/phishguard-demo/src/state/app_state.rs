use crate::models::{DemoConfig, ModelStatus, PredictionRecord};
use parking_lot::RwLock;
use phishguard_classifiers::UrlPredictor;
use std::collections::VecDeque;
use std::sync::Arc;

const MAX_PREDICTION_HISTORY: usize = 200;

/// Shared application state
#[derive(Clone)]
pub struct AppState {
    /// Demo configuration
    pub config: Arc<RwLock<DemoConfig>>,

    /// The prediction handler, constructed once from the load result
    pub predictor: Arc<UrlPredictor>,

    /// Model status fixed at startup
    pub model_status: Arc<ModelStatus>,

    /// Recent predictions for the history panel
    pub history: Arc<RwLock<VecDeque<PredictionRecord>>>,
}

impl AppState {
    pub fn new(config: DemoConfig, predictor: UrlPredictor, model_status: ModelStatus) -> Self {
        Self {
            config: Arc::new(RwLock::new(config)),
            predictor: Arc::new(predictor),
            model_status: Arc::new(model_status),
            history: Arc::new(RwLock::new(VecDeque::with_capacity(MAX_PREDICTION_HISTORY))),
        }
    }

    /// Add a prediction record to history
    pub fn add_record(&self, record: PredictionRecord) {
        let mut history = self.history.write();
        history.push_front(record);
        if history.len() > MAX_PREDICTION_HISTORY {
            history.pop_back();
        }
    }

    /// Get recent prediction records, newest first
    pub fn recent(&self, limit: usize) -> Vec<PredictionRecord> {
        let history = self.history.read();
        history.iter().take(limit).cloned().collect()
    }

    /// Clear the prediction history
    pub fn clear_history(&self) {
        self.history.write().clear();
    }
}
