use clap::Parser;

mod config;
mod factoid;
mod health;
mod image;
mod random;
mod server;
mod telemetry;
mod upstream;

#[cfg(test)]
mod testing;

use config::Service;

#[derive(Parser)]
#[command(name = "bird-factoids")]
#[command(about = "Random bird factoids with pictures")]
struct Cli {
    #[command(subcommand)]
    service: Service,
}

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    telemetry::init();

    match Cli::parse().service {
        Service::Image(args) => {
            let router = image::router(image::ImageState::new(&args));
            server::serve("bird-image", args.listen, router).await
        }
        Service::Factoid(args) => {
            let router = factoid::router(factoid::FactoidState::new(&args));
            server::serve("bird-factoid", args.listen, router).await
        }
    }
}
