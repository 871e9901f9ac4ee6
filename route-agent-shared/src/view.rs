//! View model for the results panel. Built fresh from each [`RouteResult`] and handed to the
//! renderer as-is, so everything the user sees can be checked without a document.

use crate::format::{format_distance_km, format_minutes};
use crate::queries::RouteResult;

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StopItem {
    /// 1-based position in the visiting order.
    pub position: usize,
    pub label: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StepItem {
    pub from: String,
    pub to: String,
    pub distance: String,
    pub time: String,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RouteView {
    pub origin: String,
    pub total_distance: String,
    pub total_time: String,
    /// Stops minus the origin.
    pub destination_count: usize,
    pub stops: Vec<StopItem>,
    pub steps: Vec<StepItem>,
    pub map_url: Option<String>,
}

impl From<&RouteResult> for RouteView {
    fn from(result: &RouteResult) -> Self {
        let stops = result
            .optimized_order
            .iter()
            .enumerate()
            .map(|(idx, label)| StopItem {
                position: idx + 1,
                label: label.clone(),
            })
            .collect();

        let steps = result
            .steps
            .iter()
            .map(|step| StepItem {
                from: step.from.clone(),
                to: step.to.clone(),
                distance: step.distance.clone(),
                time: step.time.clone(),
            })
            .collect();

        RouteView {
            origin: result.origin.clone(),
            total_distance: format_distance_km(result.total_distance_km),
            total_time: format_minutes(result.estimated_time_min),
            destination_count: result.optimized_order.len().saturating_sub(1),
            stops,
            steps,
            map_url: result.google_maps_url.clone(),
        }
    }
}

impl From<RouteResult> for RouteView {
    fn from(result: RouteResult) -> Self {
        RouteView::from(&result)
    }
}
