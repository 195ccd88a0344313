use clap::{Parser, Subcommand};
use dotenvy::dotenv;
use libris_cli::seeder;
use libris_config::StoreConfig;
use libris_db::{PgPool, init_db_pool, run_migrations};

#[derive(Parser)]
#[command(name = "libris-cli")]
#[command(about = "Libris CLI - Administrative tools for the Libris catalogue", long_about = None)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Apply pending database migrations
    Migrate,
    /// Seed the catalogue with fake books
    Seed {
        /// Number of books to create
        #[arg(short = 'c', long, default_value = "25")]
        count: usize,
    },
    /// Remove every book from the catalogue
    Clear,
}

#[tokio::main]
async fn main() {
    dotenv().ok();

    let cli = Cli::parse();

    let pool = match init_db_pool(&StoreConfig::from_env()).await {
        Ok(pool) => pool,
        Err(e) => {
            eprintln!("❌ {:#}", e);
            std::process::exit(1);
        }
    };

    match cli.command {
        Commands::Migrate => handle_migrate(&pool).await,
        Commands::Seed { count } => handle_seed(&pool, count).await,
        Commands::Clear => handle_clear(&pool).await,
    }
}

async fn handle_migrate(pool: &PgPool) {
    match run_migrations(pool).await {
        Ok(_) => {
            println!("✅ Migrations applied");
        }
        Err(e) => {
            eprintln!("\n❌ Error running migrations: {:#}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_seed(pool: &PgPool, count: usize) {
    match seeder::seed_books(pool, count).await {
        Ok(inserted) => {
            println!("✅ Created {} books", inserted);
        }
        Err(e) => {
            eprintln!("\n❌ Error seeding books: {}", e);
            std::process::exit(1);
        }
    }
}

async fn handle_clear(pool: &PgPool) {
    match seeder::clear_books(pool).await {
        Ok(_) => {
            println!("✅ Cleared the catalogue");
        }
        Err(e) => {
            eprintln!("\n❌ Error clearing books: {}", e);
            std::process::exit(1);
        }
    }
}
