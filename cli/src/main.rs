use std::sync::Arc;
use std::time::Duration;

use anyhow::Result;
use clap::{Parser, Subcommand};
use plateful_core::{
    FeedState, HttpRecipeApi, Outcome, Recipe, RecipeFeed, RecipeRepository, TcpProbe,
    DEFAULT_BASE_URL,
};

#[derive(Parser)]
#[command(name = "plateful")]
#[command(about = "Browse the hosted recipe catalogue", long_about = None)]
struct Cli {
    /// Catalogue base URL
    #[arg(long, default_value = DEFAULT_BASE_URL)]
    server: String,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Fetch and print the full recipe list
    List,
    /// Fetch and print a single recipe
    Show {
        /// Recipe identifier
        id: String,
    },
}

#[tokio::main]
async fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .init();

    let cli = Cli::parse();
    tracing::debug!(server = %cli.server, "using catalogue");
    let repository = build_repository(&cli.server)?;

    match cli.command {
        Commands::List => list(repository).await?,
        Commands::Show { id } => show(&repository, &id).await?,
    }

    Ok(())
}

/// Wire the client, probe, and repository by hand.
fn build_repository(server: &str) -> Result<Arc<RecipeRepository>> {
    let api = HttpRecipeApi::builder()
        .base_url(server)
        .timeout(Duration::from_secs(30))
        .build()?;
    let probe = TcpProbe::for_url(server)?.with_timeout(Duration::from_millis(500));
    Ok(Arc::new(RecipeRepository::new(
        Arc::new(api),
        Arc::new(probe),
    )))
}

/// Drive the feed to a terminal state and render it.
async fn list(repository: Arc<RecipeRepository>) -> Result<()> {
    let feed = RecipeFeed::new(repository);
    let mut states = feed.subscribe();

    loop {
        let state = states.borrow_and_update().clone();
        match state {
            FeedState::Loading => eprintln!("loading..."),
            FeedState::Loaded(recipes) => {
                for recipe in &recipes {
                    println!("{}  {}  {}", recipe.id, recipe.name, recipe.headline);
                }
                println!("{} recipes", recipes.len());
                return Ok(());
            }
            FeedState::Failed(message) => anyhow::bail!(message),
        }
        if states.changed().await.is_err() {
            return Ok(());
        }
    }
}

async fn show(repository: &RecipeRepository, id: &str) -> Result<()> {
    match repository.get_recipe_by_id(id).await {
        Outcome::Success(recipe) => {
            print_recipe(&recipe);
            Ok(())
        }
        Outcome::Error { code, message } => anyhow::bail!(
            "fetch failed ({}): {}",
            code,
            message.unwrap_or_else(|| "Unknown Error".to_string())
        ),
        Outcome::NetworkUnavailable => anyhow::bail!("network unavailable"),
    }
}

fn print_recipe(recipe: &Recipe) {
    println!("{}", recipe.name);
    println!("{}", recipe.headline);
    println!();
    println!("{}", recipe.description);
    println!();
    println!("time: {}  difficulty: {}", recipe.time, recipe.difficulty);
    println!(
        "calories: {}  carbs: {}  fats: {}  proteins: {}",
        recipe.calories, recipe.carbos, recipe.fats, recipe.proteins
    );
    println!("image: {}", recipe.image);
}
