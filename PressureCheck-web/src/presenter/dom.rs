//! Browser presenter - mutates the results panel through web-sys

use thiserror::Error;
use tracing::warn;
use wasm_bindgen::{JsCast, JsValue};
use web_sys::{Document, HtmlElement, HtmlInputElement, HtmlSelectElement, Window};

use pressure_check_domain::entities::{MeasurementContext, ReadingForm};

use super::ResultPresenter;
use crate::config::{ElementIds, IndicatorConfig};
use crate::entities::PanelView;

/// Errors raised while binding to the page
#[derive(Debug, Error)]
pub enum DomError {
    #[error("No window found")]
    NoWindow,

    #[error("No document found")]
    NoDocument,

    #[error("No element with id '{0}' found")]
    MissingElement(String),

    #[error("Could not attach listener to '{0}'")]
    Listener(String),

    #[error("Indicator is already mounted")]
    AlreadyMounted,
}

impl From<DomError> for JsValue {
    fn from(err: DomError) -> Self {
        JsValue::from_str(&err.to_string())
    }
}

/// Presenter bound to the live page
pub struct DomPresenter {
    window: Window,
    document: Document,
    ids: ElementIds,
    hidden_class: String,
}

impl DomPresenter {
    /// Bind to the current page. Every configured element must exist.
    pub fn new(config: &IndicatorConfig) -> Result<Self, DomError> {
        let window = web_sys::window().ok_or(DomError::NoWindow)?;
        let document = window.document().ok_or(DomError::NoDocument)?;

        let presenter = Self {
            window,
            document,
            ids: config.element_ids.clone(),
            hidden_class: config.hidden_class.clone(),
        };

        for id in [
            &presenter.ids.systolic,
            &presenter.ids.diastolic,
            &presenter.ids.context_selector,
            &presenter.ids.result_panel,
            &presenter.ids.circle,
            &presenter.ids.label,
        ] {
            if presenter.document.get_element_by_id(id).is_none() {
                return Err(DomError::MissingElement(id.clone()));
            }
        }

        Ok(presenter)
    }

    pub fn document(&self) -> &Document {
        &self.document
    }

    /// Read the current form values. An unknown selector value falls back
    /// to the default context.
    pub fn read_form(&self) -> ReadingForm {
        let systolic = self.input(&self.ids.systolic).map(|input| input.value()).unwrap_or_default();
        let diastolic = self.input(&self.ids.diastolic).map(|input| input.value()).unwrap_or_default();
        let selected = self.select(&self.ids.context_selector).map(|select| select.value()).unwrap_or_default();

        let context = selected.parse::<MeasurementContext>().unwrap_or_else(|e| {
            warn!("{}", e);
            MeasurementContext::default()
        });

        ReadingForm::new(systolic, diastolic, context)
    }

    fn element<T: JsCast>(&self, id: &str) -> Option<T> {
        let element = self.document.get_element_by_id(id);
        if element.is_none() {
            warn!(id, "Element missing from page");
        }
        element?.dyn_into::<T>().ok()
    }

    fn html(&self, id: &str) -> Option<HtmlElement> {
        self.element::<HtmlElement>(id)
    }

    fn input(&self, id: &str) -> Option<HtmlInputElement> {
        self.element::<HtmlInputElement>(id)
    }

    fn select(&self, id: &str) -> Option<HtmlSelectElement> {
        self.element::<HtmlSelectElement>(id)
    }

    fn set_style(element: &HtmlElement, property: &str, value: &str) {
        if element.style().set_property(property, value).is_err() {
            warn!(property, value, "Could not set style");
        }
    }
}

impl ResultPresenter for DomPresenter {
    fn show_result(&mut self, view: &PanelView) {
        if let Some(circle) = self.html(&self.ids.circle) {
            Self::set_style(&circle, "border-color", &view.border_color);
            Self::set_style(&circle, "animation", &view.animation);
            circle.set_text_content(Some(&view.circle_text));
        }

        if let Some(label) = self.html(&self.ids.label) {
            Self::set_style(&label, "color", &view.label_color);
            label.set_text_content(Some(&view.label_text));
        }

        if let Some(panel) = self.html(&self.ids.result_panel) {
            if panel.class_list().remove_1(&self.hidden_class).is_err() {
                warn!("Could not show result panel");
            }
        }
    }

    fn hide_result(&mut self) {
        if let Some(panel) = self.html(&self.ids.result_panel) {
            if panel.class_list().add_1(&self.hidden_class).is_err() {
                warn!("Could not hide result panel");
            }
        }
    }

    fn notify(&mut self, message: &str) {
        if self.window.alert_with_message(message).is_err() {
            warn!(text = message, "Alert was blocked");
        }
    }

    fn clear_form(&mut self, context: MeasurementContext) {
        if let Some(input) = self.input(&self.ids.systolic) {
            input.set_value("");
        }
        if let Some(input) = self.input(&self.ids.diastolic) {
            input.set_value("");
        }
        if let Some(select) = self.select(&self.ids.context_selector) {
            select.set_value(context.as_str());
        }
    }
}
