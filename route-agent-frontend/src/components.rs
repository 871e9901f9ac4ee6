//! Presentational components. They only read props, all state lives in [`crate::app::App`].

use route_agent_shared::config::MAP_LINK_LABEL;
use route_agent_shared::submission::ErrorNotice;
use route_agent_shared::view::{RouteView, StepItem, StopItem};
use yew::prelude::*;

#[derive(Properties, PartialEq)]
pub struct SubmitButtonProps {
    pub loading: bool,
    pub label: AttrValue,
}

#[function_component(SubmitButton)]
pub fn submit_button(SubmitButtonProps { loading, label }: &SubmitButtonProps) -> Html {
    html! {
        <button type="submit" id="submitBtn" class={ classes!("btn-primary", loading.then_some("loading")) } disabled={ *loading }>
            { label.clone() }
        </button>
    }
}

#[derive(Properties, PartialEq)]
pub struct LoadingProps {
    pub visible: bool,
}

#[function_component(LoadingIndicator)]
pub fn loading_indicator(LoadingProps { visible }: &LoadingProps) -> Html {
    html! {
        <div id="loadingContainer" class={ classes!("loading-container", (!*visible).then_some("hidden")) }>
            <div class="spinner"></div>
            <p>{ "Calculando la ruta óptima..." }</p>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ErrorBannerProps {
    pub notice: Option<ErrorNotice>,
    pub on_dismiss: Callback<()>,
}

#[function_component(ErrorBanner)]
pub fn error_banner(ErrorBannerProps { notice, on_dismiss }: &ErrorBannerProps) -> Html {
    let on_click = {
        let on_dismiss = on_dismiss.clone();
        Callback::from(move |_| on_dismiss.emit(()))
    };
    let message = notice.as_ref().map(|n| n.message.clone()).unwrap_or_default();

    html! {
        <div id="errorContainer" class={ classes!("error-container", notice.is_none().then_some("hidden")) }>
            <span class="error-icon">{ "⚠️" }</span>
            <p id="errorMessage">{ message }</p>
            <button type="button" class="btn-close" aria-label="Cerrar" onclick={ on_click }>{ "×" }</button>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ExamplePickerProps {
    pub examples: Vec<AttrValue>,
    pub on_pick: Callback<String>,
}

#[function_component(ExamplePicker)]
pub fn example_picker(ExamplePickerProps { examples, on_pick }: &ExamplePickerProps) -> Html {
    let items = examples.iter().map(|example| {
        let on_click = {
            let on_pick = on_pick.clone();
            let example = example.to_string();
            Callback::from(move |_| on_pick.emit(example.clone()))
        };

        html! {
            <li onclick={ on_click }>{ example.clone() }</li>
        }
    });

    html! {
        <div class="examples">
            <h3>{ "Ejemplos" }</h3>
            <ul id="examplesList">{ for items }</ul>
        </div>
    }
}

#[derive(Properties, PartialEq)]
struct StatProps {
    id: AttrValue,
    value: String,
    label: AttrValue,
}

#[function_component(Stat)]
fn stat(StatProps { id, value, label }: &StatProps) -> Html {
    html! {
        <div class="stat">
            <div class="stat-value" id={ id.clone() }>{ value.clone() }</div>
            <div class="stat-label">{ label.clone() }</div>
        </div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StopListProps {
    pub stops: Vec<StopItem>,
}

#[function_component(StopList)]
pub fn stop_list(StopListProps { stops }: &StopListProps) -> Html {
    let items = stops.iter().map(|stop| {
        html! {
            <div class="location-item" key={ stop.position }>
                <div class="location-number">{ stop.position.to_string() }</div>
                <div class="location-name">{ stop.label.clone() }</div>
            </div>
        }
    });

    html! {
        <div id="locationList">{ for items }</div>
    }
}

#[derive(Properties, PartialEq)]
pub struct StepListProps {
    pub steps: Vec<StepItem>,
}

#[function_component(StepList)]
pub fn step_list(StepListProps { steps }: &StepListProps) -> Html {
    let items = steps.iter().map(|step| {
        html! {
            <div class="step">
                <div class="step-icon">{ "🚗" }</div>
                <div class="step-content">
                    <div class="step-title">{ format!("{} → {}", step.from, step.to) }</div>
                    <div class="step-details">
                        <div class="step-detail"><span>{ "📏" }</span><span>{ step.distance.clone() }</span></div>
                        <div class="step-detail"><span>{ "⏱️" }</span><span>{ step.time.clone() }</span></div>
                    </div>
                </div>
            </div>
        }
    });

    html! {
        <div id="stepsList">{ for items }</div>
    }
}

#[derive(Properties, PartialEq)]
pub struct ResultsProps {
    pub route: RouteView,
}

#[function_component(ResultsPanel)]
pub fn results_panel(ResultsProps { route }: &ResultsProps) -> Html {
    let map_link = route
        .map_url
        .as_ref()
        .map(|url| {
            html! {
                <div id="gmapsLink">
                    <a href={ url.clone() } target="_blank" rel="noopener" class="btn-primary map-link">{ MAP_LINK_LABEL }</a>
                </div>
            }
        })
        .unwrap_or_default();

    html! {
        <>
            <h2 class="results-title">{ "Ruta desde " }<span id="origin">{ route.origin.clone() }</span></h2>
            <div class="stats">
                <Stat id="totalDistance" value={ route.total_distance.clone() } label="km en total" />
                <Stat id="totalTime" value={ route.total_time.clone() } label="tiempo estimado" />
                <Stat id="destinationsCount" value={ route.destination_count.to_string() } label="destinos" />
            </div>
            <h3>{ "Orden de visita" }</h3>
            <StopList stops={ route.stops.clone() } />
            <h3>{ "Indicaciones" }</h3>
            <StepList steps={ route.steps.clone() } />
            { map_link }
        </>
    }
}

/// What the header shows about the backend.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum HealthView {
    Checking,
    Online { service: String, version: String },
    Unreachable,
}

#[derive(Properties, PartialEq)]
pub struct HealthBadgeProps {
    pub health: HealthView,
}

#[function_component(HealthBadge)]
pub fn health_badge(HealthBadgeProps { health }: &HealthBadgeProps) -> Html {
    let (class, text) = match health {
        HealthView::Checking => ("health checking", "Conectando con el servidor...".to_string()),
        HealthView::Online { service, version } => {
            let service = if service.is_empty() { "Servidor" } else { service.as_str() };
            ("health online", format!("{} {} en línea", service, version))
        }
        HealthView::Unreachable => ("health offline", "Servidor no disponible".to_string()),
    };

    html! {
        <span class={ class }>{ text }</span>
    }
}
