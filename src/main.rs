use actix_cors::Cors;
use actix_web::{web, App, HttpServer};
use clap::Parser;
use tracing::{error, info};
use tracing_subscriber::EnvFilter;

use medicine_recommender::config::Config;
use medicine_recommender::{initialize, server, Error, Recommendation};

fn init_tracing(verbose: u8, quiet: bool) {
    let filter = if let Ok(env) = std::env::var("RECOMMENDER_LOG") {
        EnvFilter::new(env)
    } else if quiet {
        EnvFilter::new("warn")
    } else {
        match verbose {
            0 => EnvFilter::new("info"),
            1 => EnvFilter::new("debug"),
            _ => EnvFilter::new("trace"),
        }
    };

    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .init();
}

fn print_recommendation(recommendation: &Recommendation) {
    match recommendation {
        Recommendation::Advisory(advisory) => println!("{advisory}"),
        Recommendation::Medicines(records) => {
            println!("{}", server::page::SUCCESS);
            for record in records {
                println!("Medicine Name: {}", record.name);
                println!("Uses: {}", record.uses);
                println!("Side Effects: {}", record.side_effects);
                println!("Manufacturer: {}", record.manufacturer);
                println!("Accuracy: {}", record.accuracy);
                println!("---");
            }
        }
    }
}

async fn run(config: Config) -> medicine_recommender::Result<()> {
    let catalog = config.catalog.clone();
    let stop_words = config.stop_words.clone();
    let recommender =
        tokio::task::spawn_blocking(move || initialize(&catalog, stop_words.as_deref())).await??;

    if let Some(query) = &config.query {
        print_recommendation(&recommender.recommend(query));
        return Ok(());
    }

    let data = web::Data::new(recommender);
    info!(bind = %config.bind, "starting HTTP server");

    HttpServer::new(move || {
        let cors = Cors::default()
            .allow_any_origin()
            .allow_any_method()
            .allow_any_header();
        App::new()
            .wrap(cors)
            .app_data(data.clone())
            .configure(server::configure)
    })
    .bind(config.bind.as_str())
    .map_err(|source| Error::Bind {
        addr: config.bind.clone(),
        source,
    })?
    .run()
    .await?;

    Ok(())
}

#[actix_web::main]
async fn main() {
    let config = Config::parse();
    init_tracing(config.verbose, config.quiet);

    if let Err(err) = run(config).await {
        error!("{err}");
        std::process::exit(1);
    }
}
