use clap::{Arg, Command};
use idn_guard::{BrandRegistry, HomographDetector, TrustedDomains, UrlFeatures};
use log::LevelFilter;
use std::process;

fn main() {
    let matches = Command::new("idn-guard")
        .version(env!("CARGO_PKG_VERSION"))
        .about("Deterministic IDN homograph detection for URLs")
        .arg(
            Arg::new("urls")
                .value_name("URL")
                .num_args(1..)
                .required(true)
                .help("URLs or bare hostnames to check"),
        )
        .arg(
            Arg::new("brands")
                .short('b')
                .long("brands")
                .value_name("FILE")
                .help("YAML brand registry to use instead of the built-in one"),
        )
        .arg(
            Arg::new("analyze")
                .long("analyze")
                .help("Show the extraction/normalization/skeleton stages per URL")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("features")
                .long("features")
                .help("Show the lexical feature vector per URL")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("json")
                .long("json")
                .help("Emit one JSON object per URL")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .short('v')
                .long("verbose")
                .help("Enable verbose logging")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let log_level = if matches.get_flag("verbose") {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    env_logger::Builder::from_default_env()
        .filter_level(log_level)
        .init();

    let registry = match matches.get_one::<String>("brands") {
        Some(path) => match BrandRegistry::load_from_file(path) {
            Ok(registry) => registry,
            Err(e) => {
                eprintln!("Error loading brand registry: {e:#}");
                process::exit(2);
            }
        },
        None => BrandRegistry::default(),
    };

    let detector = HomographDetector::new(registry);
    let trusted = TrustedDomains::default();
    let as_json = matches.get_flag("json");
    let show_analysis = matches.get_flag("analyze");
    let show_features = matches.get_flag("features");

    let mut any_attack = false;
    for url in matches.get_many::<String>("urls").unwrap() {
        let result = detector.detect(url);
        any_attack |= result.is_attack;

        if as_json {
            let mut report = serde_json::json!({
                "url": url,
                "is_attack": result.is_attack,
                "matched_brand": result.matched_brand,
                "trusted": trusted.is_trusted(url),
            });
            if show_analysis {
                report["analysis"] = serde_json::json!(detector.analyze(url));
            }
            if show_features {
                report["features"] = serde_json::json!(UrlFeatures::extract(url));
            }
            println!("{report}");
            continue;
        }

        match &result.matched_brand {
            Some(brand) => println!("{url}: HOMOGRAPH ATTACK (impersonates {brand})"),
            None if trusted.is_trusted(url) => println!("{url}: ok (trusted domain)"),
            None => println!("{url}: ok"),
        }

        if show_analysis {
            let analysis = detector.analyze(url);
            println!("  hostname:   {}", analysis.original);
            println!("  normalized: {}", analysis.normalized);
            println!("  skeleton:   {}", analysis.skeleton);
        }

        if show_features {
            let features = UrlFeatures::extract(url);
            println!(
                "  features: len={} dots={} hyphens={} digits_host={} has_ip={}",
                features.url_length,
                features.dot_count,
                features.hyphen_count,
                features.digit_count_hostname,
                features.has_ip
            );
        }
    }

    if any_attack {
        process::exit(1);
    }
}
