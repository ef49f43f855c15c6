use anyhow::{bail, Context, Result};
use tracing::info;

use pressure_check_domain::entities::{MeasurementContext, ReadingForm};
use pressure_check_domain::services::create_default_pressure_check_service;
use pressure_check_web::logging::init_tracing;
use pressure_check_web::presenter::TerminalPresenter;
use pressure_check_web::{IndicatorConfig, IndicatorController};

const USAGE: &str = "usage: pressure_check <systolic> <diastolic> [home|clinic]";

/// Classify one reading from the command line and print the result panel
fn main() -> Result<()> {
    let config = IndicatorConfig::from_env().context("Failed to load configuration")?;
    init_tracing(&config.log_filter);

    let args: Vec<String> = std::env::args().skip(1).collect();
    let (systolic, diastolic, context) = match args.as_slice() {
        [systolic, diastolic] => (systolic, diastolic, config.default_context),
        [systolic, diastolic, context] => {
            let context: MeasurementContext = context.parse()?;
            (systolic, diastolic, context)
        }
        _ => bail!(USAGE),
    };

    info!(%context, "Evaluating reading");

    let presenter = TerminalPresenter::new(std::io::stdout());
    let mut controller = IndicatorController::new(create_default_pressure_check_service(), presenter, config.default_context);

    if controller
        .handle_get_result(&ReadingForm::new(systolic.as_str(), diastolic.as_str(), context))
        .is_err()
    {
        std::process::exit(1);
    }

    Ok(())
}
