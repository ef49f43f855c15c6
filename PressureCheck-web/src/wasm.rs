//! wasm_bindgen entry points for the host page

use std::cell::RefCell;
use std::rc::Rc;

use tracing::info;
use wasm_bindgen::prelude::*;
use web_sys::Document;

use pressure_check_domain::entities::{MeasurementContext, ReadingForm};
use pressure_check_domain::services::{create_default_pressure_check_service, PressureCheckServiceTrait};

use crate::config::{ConfigError, IndicatorConfig};
use crate::controller::IndicatorController;
use crate::logging::init_tracing;
use crate::mount_guard;
use crate::presenter::{DomError, DomPresenter};

impl From<ConfigError> for JsValue {
    fn from(err: ConfigError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Called automatically when the WASM module loads
#[wasm_bindgen(start)]
pub fn init_panic_hook() {
    console_error_panic_hook::set_once();
}

/// Bind the indicator to the page. `config_json` overrides element ids,
/// the default context and the log filter; omitted fields keep defaults.
///
/// Only the first successful call binds listeners; later calls fail with
/// `AlreadyMounted`.
#[wasm_bindgen]
pub fn mount(config_json: Option<String>) -> Result<(), JsValue> {
    if !mount_guard::try_claim() {
        return Err(DomError::AlreadyMounted.into());
    }

    bind(config_json).map_err(|err| {
        mount_guard::release();
        err
    })
}

fn bind(config_json: Option<String>) -> Result<(), JsValue> {
    let config = match config_json {
        Some(json) => IndicatorConfig::from_json(&json)?,
        None => IndicatorConfig::default(),
    };
    init_tracing(&config.log_filter);

    let presenter = DomPresenter::new(&config)?;
    let document = presenter.document().clone();
    let controller = Rc::new(RefCell::new(IndicatorController::new(
        create_default_pressure_check_service(),
        presenter,
        config.default_context,
    )));

    let on_get_result = Rc::clone(&controller);
    on_click(&document, &config.element_ids.get_result_button, move || {
        let mut controller = on_get_result.borrow_mut();
        let form = controller.presenter().read_form();
        // Rejections are already reported to the user by the presenter
        let _ = controller.handle_get_result(&form);
    })?;

    let on_reset = Rc::clone(&controller);
    on_click(&document, &config.element_ids.reset_button, move || {
        on_reset.borrow_mut().handle_reset();
    })?;

    info!("Blood pressure indicator mounted");
    Ok(())
}

/// Classify a reading without touching the page. Returns the result as JSON.
#[wasm_bindgen]
pub fn classify(systolic: &str, diastolic: &str, context: &str) -> Result<String, JsValue> {
    let context = context
        .parse::<MeasurementContext>()
        .map_err(|e| JsValue::from_str(&e.to_string()))?;
    let form = ReadingForm::new(systolic, diastolic, context);

    let result = create_default_pressure_check_service()
        .evaluate(&form)
        .map_err(|e| JsValue::from_str(&e.to_string()))?;

    serde_json::to_string(&result).map_err(|e| JsValue::from_str(&e.to_string()))
}

fn on_click<F>(document: &Document, id: &str, handler: F) -> Result<(), DomError>
where
    F: FnMut() + 'static,
{
    let target = document
        .get_element_by_id(id)
        .ok_or_else(|| DomError::MissingElement(id.to_string()))?;

    let closure = Closure::<dyn FnMut()>::new(handler);
    target
        .add_event_listener_with_callback("click", closure.as_ref().unchecked_ref())
        .map_err(|_| DomError::Listener(id.to_string()))?;

    // The listener lives as long as the page
    closure.forget();
    Ok(())
}
