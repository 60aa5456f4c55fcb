use bigbox::{
    CONFIG_FILE_NAME, CatalogQuery, Config, Error, Serializer, SerializerContext, to_value_many,
};
use clap::{Parser, Subcommand, ValueEnum};
use sea_orm::{Database, DatabaseConnection};
use serde_json::Value;
use std::{fmt::Display, process::exit};
use tracing::debug;
use tracing_subscriber::{EnvFilter, prelude::*};

#[derive(Parser, Debug)]
#[command(version, about = "Print catalog entities as API JSON")]
struct Cli {
    #[arg(short = 'v', long, global = true, help = "Show debug messages")]
    verbose: bool,

    #[arg(
        short = 'u',
        long,
        global = true,
        env = "DATABASE_URL",
        help = "Database URL, overrides bigbox.toml"
    )]
    database_url: Option<String>,

    #[arg(long, global = true, help = "Pretty-print the JSON output")]
    pretty: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand, Debug)]
enum Commands {
    #[command(about = "Serialize every row of a table")]
    List {
        #[arg(value_enum)]
        kind: ListKind,
    },
    #[command(about = "Serialize one row by its lookup field")]
    Show {
        #[command(subcommand)]
        target: ShowTarget,
    },
}

#[derive(Copy, Clone, Debug, ValueEnum)]
enum ListKind {
    Reasons,
    Activities,
    Boxes,
    Categories,
}

#[derive(Subcommand, Debug)]
enum ShowTarget {
    Reason { id: i32 },
    Activity { id: i32 },
    Box { slug: String },
    Category { id: i32 },
}

#[tokio::main]
async fn main() {
    dotenvy::dotenv().ok();
    let cli = Cli::parse();
    init_tracing(cli.verbose);

    run(cli).await.unwrap_or_else(handle_error);
}

fn init_tracing(verbose: bool) {
    let filter = match verbose {
        true => "debug",
        false => "bigbox=warn",
    };
    let filter_layer = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(filter))
        .unwrap_or_else(|_| EnvFilter::new("warn"));
    let fmt_layer = tracing_subscriber::fmt::layer()
        .with_writer(std::io::stderr)
        .with_target(false);

    let _ = tracing_subscriber::registry()
        .with(filter_layer)
        .with(fmt_layer)
        .try_init();
}

async fn run(cli: Cli) -> Result<(), Error> {
    let config = match (Config::load()?, &cli.database_url) {
        (Some(config), _) => config,
        (None, Some(url)) => {
            debug!("{CONFIG_FILE_NAME} not found, using the given database url");
            Config::with_database_url(url.as_str())
        }
        (None, None) => Config::from_env()?,
    };
    let url = match cli.database_url {
        Some(url) => url,
        None => config.database.url()?,
    };
    let ctx = config.serializer_context();
    let db = Database::connect(url).await?;

    let value = match cli.command {
        Commands::List { kind } => list(&db, &ctx, kind).await?,
        Commands::Show { target } => show(&db, &ctx, target).await?,
    };

    let output = if cli.pretty {
        serde_json::to_string_pretty(&value)?
    } else {
        serde_json::to_string(&value)?
    };
    println!("{output}");
    Ok(())
}

async fn list(
    db: &DatabaseConnection,
    ctx: &SerializerContext,
    kind: ListKind,
) -> Result<Value, Error> {
    match kind {
        ListKind::Reasons => to_value_many(&CatalogQuery::list_reasons(db).await?),
        ListKind::Activities => to_value_many(&CatalogQuery::list_activities(db, ctx).await?),
        ListKind::Boxes => to_value_many(&CatalogQuery::list_boxes(db, ctx).await?),
        ListKind::Categories => to_value_many(&CatalogQuery::list_categories(db).await?),
    }
}

async fn show(
    db: &DatabaseConnection,
    ctx: &SerializerContext,
    target: ShowTarget,
) -> Result<Value, Error> {
    match target {
        ShowTarget::Reason { id } => CatalogQuery::find_reason_by_id(db, id)
            .await?
            .ok_or_else(|| Error::not_found("reason", "id", id))?
            .to_value(),
        ShowTarget::Activity { id } => CatalogQuery::find_activity_by_id(db, ctx, id)
            .await?
            .ok_or_else(|| Error::not_found("activity", "id", id))?
            .to_value(),
        ShowTarget::Box { slug } => CatalogQuery::find_box_by_slug(db, ctx, &slug)
            .await?
            .ok_or_else(|| Error::not_found("box", "slug", &slug))?
            .to_value(),
        ShowTarget::Category { id } => CatalogQuery::find_category_by_id(db, id)
            .await?
            .ok_or_else(|| Error::not_found("category", "id", id))?
            .to_value(),
    }
}

fn handle_error<E>(error: E)
where
    E: Display,
{
    eprintln!("{error}");
    exit(1);
}
