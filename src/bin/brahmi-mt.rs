use brahmi_translate::detect::{UNKNOWN_TAG, detect_language};
use brahmi_translate::mt::{
    AzureTranslateProvider, GoogleTranslateProvider, MockMode, MockTranslator, TranslationService,
    language_stats,
};
use clap::{Arg, Command};
use std::sync::Arc;

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::from_default_env()
                .add_directive("info".parse().unwrap()),
        )
        .init();

    let matches = Command::new("brahmi-mt")
        .version("0.1.0")
        .about("Translate text between natural languages and the Brahmi script")
        .arg(
            Arg::new("text")
                .help("Text to translate")
                .required(true)
                .index(1),
        )
        .arg(
            Arg::new("target")
                .help("Target language code (e.g., hi, en, brahmi)")
                .required(true)
                .index(2),
        )
        .arg(
            Arg::new("source")
                .long("source")
                .short('s')
                .help("Source language code (default: detect from the text)")
                .default_value("auto"),
        )
        .arg(
            Arg::new("mixed")
                .long("mixed")
                .help("Segment mixed-script input and translate each run separately")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("mock")
                .long("mock")
                .short('m')
                .help("Use the mock translator instead of the real providers")
                .action(clap::ArgAction::SetTrue),
        )
        .arg(
            Arg::new("verbose")
                .long("verbose")
                .short('v')
                .help("Show detection and routing details")
                .action(clap::ArgAction::SetTrue),
        )
        .get_matches();

    let text = matches.get_one::<String>("text").unwrap();
    let target = matches.get_one::<String>("target").unwrap();
    let source_arg = matches.get_one::<String>("source").unwrap();
    let mixed = matches.get_flag("mixed");
    let use_mock = matches.get_flag("mock");
    let verbose = matches.get_flag("verbose");

    let source = if source_arg == "auto" {
        let detected = detect_language(text);
        if detected == UNKNOWN_TAG && !mixed {
            eprintln!("❌ Could not detect the source language; pass it with --source");
            return Err("unknown source language".into());
        }
        detected.to_string()
    } else {
        source_arg.clone()
    };

    let service = if use_mock {
        TranslationService::new(Arc::new(MockTranslator::new(MockMode::Suffix)))
    } else {
        let google = Arc::new(GoogleTranslateProvider::new()?);
        match AzureTranslateProvider::from_env() {
            Ok(azure) => TranslationService::with_fallback(google, Arc::new(azure)),
            Err(_) => TranslationService::new(google),
        }
    };

    if verbose {
        println!("📝 Source: \"{}\"", text);
        println!(
            "🌍 {} → {}",
            if mixed { "mixed" } else { source.as_str() },
            target
        );
        println!("🔌 {}", service.provider_info());
        if mixed {
            for (language, count) in language_stats(text) {
                println!("   {}: {} characters", language, count);
            }
        }
        println!();
    }

    let result = if mixed {
        service.translate_mixed(text, target).await?
    } else {
        service.translate(text, &source, target).await?
    };

    println!("{}", result);

    Ok(())
}
