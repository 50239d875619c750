use anyhow::Result;
use clap::{Arg, ArgAction, ArgMatches, Command, ValueHint};
use log::LevelFilter;
use std::path::PathBuf;

use dairypulse_classifiers::io::load_feature_encoder;
use dairypulse_classifiers::{DemandPredictor, PredictionRequest};
use dairypulse_cli::predict::input::PredictConfig;
use dairypulse_cli::predict::output::{render_classes, render_outcome};
use dairypulse_cli::predict::run::{build_explainer, run_prediction};

fn config_arg() -> Arg {
    Arg::new("config")
        .help("Path to a JSON configuration file")
        .required(false)
        .value_parser(clap::value_parser!(PathBuf))
        .value_hint(ValueHint::FilePath)
}

fn artifacts_dir_arg() -> Arg {
    Arg::new("artifacts_dir")
        .short('a')
        .long("artifacts-dir")
        .value_parser(clap::builder::NonEmptyStringValueParser::new())
        .help(
            "Directory holding month_encoder.json, product_encoder.json, \
             price_scaler.json and demand_model.json. Overrides the configuration file.",
        )
        .value_hint(ValueHint::DirPath)
}

fn main() -> Result<()> {
    env_logger::Builder::default()
        .filter_level(LevelFilter::Error)
        .parse_env(env_logger::Env::default().filter_or("DAIRYPULSE_LOG", "error,dairypulse=info"))
        .init();

    let matches = Command::new("dairypulse")
        .version(clap::crate_version!())
        .about("\u{1F95B} DairyPulse - AI-based Dairy Demand Prediction")
        .subcommand_required(true)
        .arg_required_else_help(true)
        .subcommand(
            Command::new("predict")
                .about("Predict demand for one month / product / price and explain it")
                .arg(config_arg())
                .arg(
                    Arg::new("month")
                        .short('m')
                        .long("month")
                        .required(true)
                        .help("Month label, e.g. 'January'"),
                )
                .arg(
                    Arg::new("product")
                        .short('p')
                        .long("product")
                        .required(true)
                        .help("Dairy product label, e.g. 'Milk'"),
                )
                .arg(
                    Arg::new("price")
                        .long("price")
                        .required(true)
                        .allow_negative_numbers(true)
                        .value_parser(clap::value_parser!(f32))
                        .help("Price per unit"),
                )
                .arg(artifacts_dir_arg())
                .arg(
                    Arg::new("model_type")
                        .long("model-type")
                        .help("Override the demand model format from the configuration file.")
                        .value_parser(["logistic", "forest", "gbdt"])
                        .value_hint(ValueHint::Other),
                )
                .arg(
                    Arg::new("no_explain")
                        .long("no-explain")
                        .help("Skip the AI explanation.")
                        .action(ArgAction::SetTrue),
                ),
        )
        .subcommand(
            Command::new("classes")
                .about("List the months and products the fitted encoders accept")
                .arg(config_arg())
                .arg(artifacts_dir_arg()),
        )
        .subcommand(Command::new("config").about("Print the default configuration as JSON"))
        .help_template(
            "{usage-heading} {usage}\n\n\
             {about-with-newline}\n\
             Version {version}\n\n\
             {all-args}{after-help}",
        )
        .get_matches();

    match matches.subcommand() {
        Some(("predict", sub_m)) => handle_predict(sub_m),
        Some(("classes", sub_m)) => handle_classes(sub_m),
        Some(("config", _)) => {
            println!("{}", serde_json::to_string_pretty(&PredictConfig::default())?);
            Ok(())
        }
        _ => unreachable!("Subcommand is required by CLI configuration"),
    }
}

fn handle_predict(matches: &ArgMatches) -> Result<()> {
    let config_path: Option<&PathBuf> = matches.get_one("config");
    match config_path {
        Some(path) => log::info!("[DairyPulse::Predict] Using config: {:?}", path),
        None => log::info!("[DairyPulse::Predict] No config provided; using defaults."),
    }
    let config = PredictConfig::from_arguments(config_path, matches)?;

    let explainer = build_explainer(&config)?;
    let predictor = DemandPredictor::load(
        &config.artifact_paths(),
        &config.model,
        config.price_range,
    )?;

    let request = PredictionRequest::new(
        matches.get_one::<String>("month").cloned().unwrap_or_default(),
        matches.get_one::<String>("product").cloned().unwrap_or_default(),
        matches.get_one::<f32>("price").copied().unwrap_or_default(),
    );

    match run_prediction(&predictor, explainer.as_ref(), request) {
        Ok(outcome) => {
            print!("{}", render_outcome(&outcome));
            Ok(())
        }
        Err(e) => {
            log::error!("Prediction failed: {}", e);
            eprintln!("[DairyPulse] Prediction failed: {}", e);
            std::process::exit(1)
        }
    }
}

fn handle_classes(matches: &ArgMatches) -> Result<()> {
    let config = PredictConfig::from_arguments(matches.get_one("config"), matches)?;
    let encoder = load_feature_encoder(&config.artifact_paths(), config.price_range)?;
    print!("{}", render_classes(&encoder));
    Ok(())
}
